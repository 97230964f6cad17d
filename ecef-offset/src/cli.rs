//! Définition et implémentation des commandes CLI
//!
//! - `to-lla` : ECEF → LLA
//! - `to-ecef` : LLA → ECEF
//! - `offset` : décalage d'altitude + rapport
//! - `sites` : liste des sites connus

use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::Subcommand;
use ecef_lla::{ecef_to_lla, lla_to_ecef_recompute, offset_ecef, EcefPoint, LlaPoint};
use ecef_offset::export::export_to_geojson;
use ecef_offset::{OffsetReport, Settings, SiteCatalog};
use tracing::{debug, info};

#[derive(Subcommand)]
pub enum Commands {
    /// Convert ECEF coordinates (meters) to latitude/longitude/altitude
    ToLla {
        /// ECEF X (meters)
        #[arg(long, allow_negative_numbers = true)]
        x: f64,

        /// ECEF Y (meters)
        #[arg(long, allow_negative_numbers = true)]
        y: f64,

        /// ECEF Z (meters)
        #[arg(long, allow_negative_numbers = true)]
        z: f64,
    },

    /// Convert latitude/longitude (degrees) and altitude (meters) to ECEF
    ToEcef {
        /// Latitude in degrees (-90..90)
        #[arg(long, allow_negative_numbers = true)]
        lat: f64,

        /// Longitude in degrees (-180..180)
        #[arg(long, allow_negative_numbers = true)]
        lon: f64,

        /// Ellipsoidal height in meters
        #[arg(long, allow_negative_numbers = true, default_value_t = 0.0)]
        alt: f64,
    },

    /// Shift a position along the ellipsoid normal and report the displacement
    Offset {
        /// Named site (see `sites`), e.g. gbt, arecibo
        #[arg(long, conflicts_with_all = ["x", "y", "z"])]
        site: Option<String>,

        /// ECEF X (meters)
        #[arg(long, allow_negative_numbers = true, required_unless_present = "site")]
        x: Option<f64>,

        /// ECEF Y (meters)
        #[arg(long, allow_negative_numbers = true, required_unless_present = "site")]
        y: Option<f64>,

        /// ECEF Z (meters)
        #[arg(long, allow_negative_numbers = true, required_unless_present = "site")]
        z: Option<f64>,

        /// Altitude offset in meters (any sign)
        #[arg(short, long, allow_negative_numbers = true)]
        delta: f64,

        /// JSON file with additional sites (replaces the embedded catalog)
        #[arg(long)]
        sites: Option<PathBuf>,

        /// Write the report as JSON
        #[arg(long)]
        report: Option<PathBuf>,

        /// Write original and shifted positions as GeoJSON
        #[arg(long)]
        geojson: Option<PathBuf>,
    },

    /// List known sites
    Sites {
        /// JSON file with sites (défaut : catalogue embarqué)
        #[arg(long)]
        sites: Option<PathBuf>,
    },
}

/// Exécute la commande to-lla
pub fn cmd_to_lla(settings: &Settings, x: f64, y: f64, z: f64) -> Result<()> {
    let model = settings.ellipsoid.derive()?;
    let point = EcefPoint::try_new(x, y, z)?;

    let (lla, ctx) = ecef_to_lla(point, &model);
    debug!(n = ctx.n, "Rayon de courbure");

    let p = settings.precision;
    println!("lat = {:.p$}°", lla.latitude);
    println!("lon = {:.p$}°", lla.longitude);
    println!("h   = {:.p$} m", lla.altitude);
    println!("N   = {:.p$} m", ctx.n);

    Ok(())
}

/// Exécute la commande to-ecef
pub fn cmd_to_ecef(settings: &Settings, lat: f64, lon: f64, alt: f64) -> Result<()> {
    let model = settings.ellipsoid.derive()?;
    let lla = LlaPoint::try_new(lat, lon, alt)?;

    let point = lla_to_ecef_recompute(lla, &model);

    let p = settings.precision;
    println!("X = {:.p$} m", point.x);
    println!("Y = {:.p$} m", point.y);
    println!("Z = {:.p$} m", point.z);

    Ok(())
}

/// Exécute la commande offset
#[allow(clippy::too_many_arguments)]
pub fn cmd_offset(
    settings: &Settings,
    site: Option<&str>,
    x: Option<f64>,
    y: Option<f64>,
    z: Option<f64>,
    delta: f64,
    sites_path: Option<&Path>,
    report_path: Option<&Path>,
    geojson_path: Option<&Path>,
) -> Result<()> {
    let catalog = load_catalog(sites_path)?;
    let report = run_offset(settings, &catalog, site, x, y, z, delta)?;

    report.display(settings.precision);
    info!("{}", report.summary());

    if let Some(path) = report_path {
        report.save_to_file(path)?;
        info!(path = %path.display(), "Rapport JSON écrit");
    }

    if let Some(path) = geojson_path {
        export_to_geojson(&report, path)?;
        info!(path = %path.display(), "GeoJSON écrit");
    }

    Ok(())
}

/// Exécute la commande sites
pub fn cmd_sites(sites_path: Option<&Path>) -> Result<()> {
    let catalog = load_catalog(sites_path)?;

    for (id, site) in &catalog.sites {
        println!(
            "{:<10} {:<28} X={:.3} Y={:.3} Z={:.3}",
            id, site.name, site.x, site.y, site.z
        );
        if let Some(description) = &site.description {
            println!("{:<10} {}", "", description);
        }
    }

    Ok(())
}

/// Calcule le décalage et construit le rapport
fn run_offset(
    settings: &Settings,
    catalog: &SiteCatalog,
    site: Option<&str>,
    x: Option<f64>,
    y: Option<f64>,
    z: Option<f64>,
    delta: f64,
) -> Result<OffsetReport> {
    if !delta.is_finite() {
        bail!("Offset must be finite, got {}", delta);
    }

    let model = settings.ellipsoid.derive()?;
    let point = resolve_point(catalog, site, x, y, z)?;

    info!(
        site = site.unwrap_or("-"),
        ellipsoid = %settings.ellipsoid,
        delta,
        "Décalage d'altitude"
    );

    let result = offset_ecef(point, &model, delta);
    Ok(OffsetReport::new(&result, &settings.ellipsoid, site))
}

/// Résout le point d'entrée : site nommé ou coordonnées explicites
fn resolve_point(
    catalog: &SiteCatalog,
    site: Option<&str>,
    x: Option<f64>,
    y: Option<f64>,
    z: Option<f64>,
) -> Result<EcefPoint> {
    match (site, x, y, z) {
        (Some(id), None, None, None) => match catalog.get(id) {
            Some(site) => Ok(site.position()),
            None => bail!(
                "Unknown site: {}. Available: {}",
                id,
                catalog.ids().join(", ")
            ),
        },
        (None, Some(x), Some(y), Some(z)) => {
            EcefPoint::try_new(x, y, z).context("Invalid ECEF coordinates")
        }
        (Some(_), _, _, _) => bail!("--site cannot be combined with --x/--y/--z"),
        _ => bail!("Either --site or all of --x, --y, --z are required"),
    }
}

fn load_catalog(path: Option<&Path>) -> Result<SiteCatalog> {
    match path {
        Some(path) => SiteCatalog::load(path),
        None => SiteCatalog::embedded(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_point_site() {
        let catalog = SiteCatalog::embedded().unwrap();
        let point = resolve_point(&catalog, Some("Arecibo"), None, None, None).unwrap();
        assert_eq!(point, EcefPoint::new(2390430.973, -5564623.199, 1994679.674));
    }

    #[test]
    fn test_resolve_point_unknown_site() {
        let catalog = SiteCatalog::embedded().unwrap();
        let err = resolve_point(&catalog, Some("vla"), None, None, None).unwrap_err();
        assert!(err.to_string().contains("Unknown site: vla"));
        assert!(err.to_string().contains("arecibo, gbt"));
    }

    #[test]
    fn test_resolve_point_coordinates() {
        let catalog = SiteCatalog::embedded().unwrap();
        let point = resolve_point(&catalog, None, Some(1.0), Some(-2.0), Some(3.0)).unwrap();
        assert_eq!(point, EcefPoint::new(1.0, -2.0, 3.0));

        assert!(resolve_point(&catalog, None, Some(1.0), None, Some(3.0)).is_err());
        assert!(resolve_point(&catalog, None, Some(f64::NAN), Some(0.0), Some(0.0)).is_err());
        assert!(resolve_point(&catalog, Some("gbt"), Some(1.0), None, None).is_err());
    }

    #[test]
    fn test_run_offset_gbt() {
        let catalog = SiteCatalog::embedded().unwrap();
        let report =
            run_offset(&Settings::default(), &catalog, Some("gbt"), None, None, None, 0.05).unwrap();

        assert_eq!(report.ellipsoid, "GRS80");
        assert!((report.shifted.x - 882589.29591).abs() < 1e-3);
        assert!((report.shifted.y - (-4924872.40655)).abs() < 1e-3);
        assert!((report.shifted.z - 3943729.44908).abs() < 1e-3);
    }

    #[test]
    fn test_run_offset_rejects_non_finite_delta() {
        let catalog = SiteCatalog::embedded().unwrap();
        assert!(run_offset(
            &Settings::default(),
            &catalog,
            Some("gbt"),
            None,
            None,
            None,
            f64::INFINITY
        )
        .is_err());
    }
}
