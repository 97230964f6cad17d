//! Conversions ECEF ↔ LLA (méthode de Bowring, non itérative)
//!
//! Toute la trigonométrie se fait en radians ; la conversion en degrés n'a
//! lieu qu'en sortie (ECEF → LLA) ou en entrée (LLA → ECEF).

use tracing::debug;

use crate::ellipsoid::EllipsoidModel;
use crate::types::{ConversionContext, EcefPoint, LlaPoint};

/// Distance à l'axe (m) en dessous de laquelle le point est considéré sur l'axe polaire
const AXIS_EPSILON: f64 = 1e-9;

/// |cos φ| en dessous duquel la hauteur est calculée depuis Z (≈ 89.94°)
const POLAR_COS_LIMIT: f64 = 1e-3;

/// Convertit un point ECEF en coordonnées géodésiques
///
/// Retourne aussi le rayon de courbure N, nécessaire à la conversion inverse
/// du même point.
pub fn ecef_to_lla(point: EcefPoint, model: &EllipsoidModel) -> (LlaPoint, ConversionContext) {
    let EcefPoint { x, y, z } = point;
    let a = model.a();
    let b = model.b();
    let e2 = model.e2();

    // Longitude indéfinie sur l'axe : 0 par convention (évite atan2(0, -0) = π)
    let lon = if x == 0.0 && y == 0.0 { 0.0 } else { y.atan2(x) };

    // Distance à l'axe de rotation
    let p = point.axis_distance();

    if p < AXIS_EPSILON {
        // Sur l'axe : pôle nord pour Z >= 0 (origine et -0.0 comprises), sud sinon
        let lat = if z >= 0.0 {
            std::f64::consts::FRAC_PI_2
        } else {
            -std::f64::consts::FRAC_PI_2
        };
        let n = model.prime_vertical_radius(lat);
        let h = z.abs() - n * (1.0 - e2);
        debug!(z, h, "Point sur l'axe polaire");
        return (
            LlaPoint::new(lat.to_degrees(), lon.to_degrees(), h),
            ConversionContext { n },
        );
    }

    // Latitude paramétrique auxiliaire
    let theta = (z * a).atan2(p * b);
    let (sin_theta, cos_theta) = theta.sin_cos();

    // Latitude géodésique
    let lat = (z + model.ep2() * b * sin_theta.powi(3)).atan2(p - e2 * a * cos_theta.powi(3));
    let (sin_lat, cos_lat) = lat.sin_cos();

    let n = a / (1.0 - e2 * sin_lat * sin_lat).sqrt();

    let h = if cos_lat.abs() >= POLAR_COS_LIMIT {
        p / cos_lat - n
    } else {
        z / sin_lat - n * (1.0 - e2)
    };

    (
        LlaPoint::new(lat.to_degrees(), lon.to_degrees(), h),
        ConversionContext { n },
    )
}

/// Applique un décalage d'altitude (mètres), latitude et longitude inchangées
pub fn apply_altitude_offset(point: LlaPoint, delta: f64) -> LlaPoint {
    LlaPoint {
        altitude: point.altitude + delta,
        ..point
    }
}

/// Convertit des coordonnées géodésiques en ECEF avec un N déjà calculé
///
/// `n` doit provenir de [`ecef_to_lla`] sur la même latitude. Sans N, utiliser
/// [`lla_to_ecef_recompute`].
pub fn lla_to_ecef(point: LlaPoint, model: &EllipsoidModel, n: f64) -> EcefPoint {
    let (sin_lat, cos_lat) = point.latitude_rad().sin_cos();
    let (sin_lon, cos_lon) = point.longitude_rad().sin_cos();
    let h = point.altitude;

    // b²/a² = 1 - e²
    let ratio = (model.b() * model.b()) / (model.a() * model.a());

    EcefPoint {
        x: (n + h) * cos_lat * cos_lon,
        y: (n + h) * cos_lat * sin_lon,
        z: (ratio * n + h) * sin_lat,
    }
}

/// Convertit des coordonnées géodésiques en ECEF en recalculant N depuis la latitude
pub fn lla_to_ecef_recompute(point: LlaPoint, model: &EllipsoidModel) -> EcefPoint {
    let n = model.prime_vertical_radius(point.latitude_rad());
    lla_to_ecef(point, model, n)
}

/// Différence composante par composante `a - b`
pub fn diff(a: EcefPoint, b: EcefPoint) -> EcefPoint {
    a - b
}
