//! Benchmarks pour les conversions ECEF ↔ LLA

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use ecef_lla::{ecef_to_lla, lla_to_ecef, offset_ecef, EcefPoint, EllipsoidConstants};

fn sample_points() -> Vec<(&'static str, EcefPoint)> {
    vec![
        ("green_bank", EcefPoint::new(882589.289, -4924872.368, 3943729.418)),
        ("arecibo", EcefPoint::new(2390430.973, -5564623.199, 1994679.674)),
        ("north_pole", EcefPoint::new(0.0, 0.0, 6356752.314140348)),
    ]
}

fn bench_ecef_to_lla(c: &mut Criterion) {
    let model = EllipsoidConstants::GRS80.derive().unwrap();
    let mut group = c.benchmark_group("ecef_to_lla");

    for (name, point) in sample_points() {
        group.bench_with_input(BenchmarkId::from_parameter(name), &point, |b, p| {
            b.iter(|| black_box(ecef_to_lla(black_box(*p), &model)))
        });
    }

    group.finish();
}

fn bench_lla_to_ecef(c: &mut Criterion) {
    let model = EllipsoidConstants::GRS80.derive().unwrap();
    let (lla, ctx) = ecef_to_lla(sample_points()[0].1, &model);

    c.bench_function("lla_to_ecef", |b| {
        b.iter(|| black_box(lla_to_ecef(black_box(lla), &model, ctx.n)))
    });
}

fn bench_offset(c: &mut Criterion) {
    let model = EllipsoidConstants::GRS80.derive().unwrap();
    let point = sample_points()[0].1;

    c.bench_function("offset_ecef", |b| {
        b.iter(|| black_box(offset_ecef(black_box(point), &model, black_box(0.05))))
    });
}

criterion_group!(benches, bench_ecef_to_lla, bench_lla_to_ecef, bench_offset);
criterion_main!(benches);
