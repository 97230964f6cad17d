//! Rapport de décalage d'altitude
//!
//! Regroupe les étapes du calcul (ECEF → LLA → LLA décalé → ECEF) et le
//! déplacement cartésien obtenu, pour affichage ou sauvegarde JSON.

use std::fmt;
use std::path::Path;

use anyhow::{Context, Result};
use ecef_lla::{EcefPoint, EllipsoidConstants, LlaPoint, OffsetResult};
use serde::Serialize;

/// Décimales par défaut quand le formateur n'en précise pas
const DEFAULT_PRECISION: usize = 8;

/// Rapport complet d'un décalage
#[derive(Debug, Clone, Serialize)]
pub struct OffsetReport {
    /// Ellipsoïde utilisé (ex: "GRS80")
    pub ellipsoid: String,
    /// Site d'origine (optionnel)
    pub site: Option<String>,
    /// Décalage d'altitude demandé (mètres)
    pub delta_m: f64,
    /// Point d'entrée
    pub original: EcefPoint,
    /// Coordonnées géodésiques du point d'entrée
    pub lla: LlaPoint,
    /// Rayon de courbure dans le premier vertical (mètres)
    pub prime_vertical_radius: f64,
    /// Coordonnées géodésiques après décalage
    pub shifted_lla: LlaPoint,
    /// Point décalé
    pub shifted: EcefPoint,
    /// Déplacement (décalé - origine)
    pub displacement: EcefPoint,
    /// Norme du déplacement (mètres)
    pub displacement_norm: f64,
}

impl OffsetReport {
    /// Construit le rapport depuis le résultat du calcul
    pub fn new(result: &OffsetResult, ellipsoid: &EllipsoidConstants, site: Option<&str>) -> Self {
        Self {
            ellipsoid: ellipsoid.to_string(),
            site: site.map(str::to_string),
            delta_m: result.delta,
            original: result.original,
            lla: result.lla,
            prime_vertical_radius: result.context.n,
            shifted_lla: result.shifted_lla,
            shifted: result.shifted,
            displacement: result.displacement,
            displacement_norm: result.displacement.norm(),
        }
    }

    /// Rendu texte du rapport
    pub fn render(&self, precision: usize) -> String {
        format!("{:.precision$}", self)
    }

    /// Affiche le rapport sur la console
    pub fn display(&self, precision: usize) {
        println!("\n{}", self.render(precision));
    }

    /// Sauvegarde le rapport en JSON
    pub fn save_to_file(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)
            .context(format!("Failed to write report: {}", path.display()))?;
        Ok(())
    }

    /// Affichage compact pour le résumé
    pub fn summary(&self) -> String {
        format!(
            "{}: dh={} m -> dX={:.5} dY={:.5} dZ={:.5} (|d|={:.5} m)",
            self.site.as_deref().unwrap_or("point"),
            self.delta_m,
            self.displacement.x,
            self.displacement.y,
            self.displacement.z,
            self.displacement_norm
        )
    }
}

/// Rendu texte ; la précision du formateur (`{:.5}`) fixe le nombre de décimales
impl fmt::Display for OffsetReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let p = f.precision().unwrap_or(DEFAULT_PRECISION);

        writeln!(f, "{}", "=".repeat(60))?;
        match &self.site {
            Some(site) => writeln!(f, "ALTITUDE OFFSET REPORT - {}", site)?,
            None => writeln!(f, "ALTITUDE OFFSET REPORT")?,
        }
        writeln!(f, "{}", "=".repeat(60))?;
        writeln!(f, "Ellipsoid: {}", self.ellipsoid)?;
        writeln!(f, "Delta h:   {:.p$} m", self.delta_m)?;

        writeln!(f, "\n--- ORIGINAL ---")?;
        write_ecef(f, &self.original, p)?;
        write_lla(f, &self.lla, p)?;
        writeln!(f, "  N   = {:.p$} m", self.prime_vertical_radius)?;

        writeln!(f, "\n--- SHIFTED ---")?;
        write_lla(f, &self.shifted_lla, p)?;
        write_ecef(f, &self.shifted, p)?;

        writeln!(f, "\n--- DISPLACEMENT ---")?;
        writeln!(f, "  dX  = {:.p$} m", self.displacement.x)?;
        writeln!(f, "  dY  = {:.p$} m", self.displacement.y)?;
        writeln!(f, "  dZ  = {:.p$} m", self.displacement.z)?;
        writeln!(f, "  |d| = {:.p$} m", self.displacement_norm)?;
        writeln!(f, "{}", "=".repeat(60))
    }
}

fn write_ecef(f: &mut fmt::Formatter<'_>, p: &EcefPoint, precision: usize) -> fmt::Result {
    writeln!(f, "  X   = {:.precision$} m", p.x)?;
    writeln!(f, "  Y   = {:.precision$} m", p.y)?;
    writeln!(f, "  Z   = {:.precision$} m", p.z)
}

fn write_lla(f: &mut fmt::Formatter<'_>, p: &LlaPoint, precision: usize) -> fmt::Result {
    writeln!(f, "  lat = {:.precision$}°", p.latitude)?;
    writeln!(f, "  lon = {:.precision$}°", p.longitude)?;
    writeln!(f, "  h   = {:.precision$} m", p.altitude)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ecef_lla::offset_ecef;

    fn gbt_report() -> OffsetReport {
        let model = EllipsoidConstants::GRS80.derive().unwrap();
        let result = offset_ecef(
            EcefPoint::new(882589.289, -4924872.368, 3943729.418),
            &model,
            0.05,
        );
        OffsetReport::new(&result, &EllipsoidConstants::GRS80, Some("gbt"))
    }

    #[test]
    fn test_report_fields() {
        let report = gbt_report();
        assert_eq!(report.ellipsoid, "GRS80");
        assert_eq!(report.site.as_deref(), Some("gbt"));
        assert_eq!(report.delta_m, 0.05);
        assert!((report.displacement_norm - 0.05).abs() < 1e-6);
    }

    #[test]
    fn test_render() {
        let text = gbt_report().render(5);
        assert!(text.contains("ALTITUDE OFFSET REPORT - gbt"));
        assert!(text.contains("Ellipsoid: GRS80"));
        assert!(text.contains("lat = 38.43313°"));
        assert!(text.contains("h   = 823.66805 m"));
        assert!(text.contains("X   = 882589.29591 m"));
    }

    #[test]
    fn test_display_precision() {
        let report = gbt_report();
        assert_eq!(report.to_string(), report.render(8));
        assert!(format!("{:.3}", report).contains("|d| = 0.050 m"));
        assert!(!format!("{:.3}", report).contains("0.05000"));
    }

    #[test]
    fn test_summary() {
        let summary = gbt_report().summary();
        assert!(summary.starts_with("gbt: dh=0.05 m"));
        assert!(summary.contains("|d|=0.05000 m"));
    }

    #[test]
    fn test_save_to_file() {
        let path = std::env::temp_dir().join("ecef_offset_report_test.json");
        gbt_report().save_to_file(&path).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        let json: serde_json::Value = serde_json::from_str(&content).unwrap();
        assert_eq!(json["ellipsoid"], "GRS80");
        assert_eq!(json["site"], "gbt");
        assert!(json["shifted"]["x"].as_f64().is_some());
        assert!(json["lla"]["latitude"].as_f64().is_some());

        std::fs::remove_file(path).ok();
    }
}
