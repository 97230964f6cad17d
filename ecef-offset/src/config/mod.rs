//! Configuration du système
//!
//! - `Settings` : valeurs par défaut issues de l'environnement (.env)
//! - `SiteCatalog` : positions ECEF nommées (observatoires)

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

use anyhow::{Context, Result};
use ecef_lla::{EcefPoint, EllipsoidConstants};

/// Nombre de décimales par défaut à l'affichage
const DEFAULT_PRECISION: usize = 8;

/// Réglages d'exécution
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Settings {
    /// Ellipsoïde de référence
    pub ellipsoid: EllipsoidConstants,
    /// Décimales à l'affichage
    pub precision: usize,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            ellipsoid: EllipsoidConstants::GRS80,
            precision: DEFAULT_PRECISION,
        }
    }
}

impl Settings {
    /// Charge les réglages depuis les variables d'environnement
    ///
    /// `ECEF_ELLIPSOID` (grs80/wgs84, défaut grs80), `ECEF_PRECISION` (défaut 8).
    /// Une valeur illisible retombe sur le défaut.
    pub fn from_env() -> Self {
        Self {
            ellipsoid: std::env::var("ECEF_ELLIPSOID")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or_default(),
            precision: std::env::var("ECEF_PRECISION")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(DEFAULT_PRECISION),
        }
    }

    /// Applique les options de la ligne de commande
    pub fn with_overrides(mut self, ellipsoid: Option<&str>, precision: Option<usize>) -> Result<Self> {
        if let Some(name) = ellipsoid {
            self.ellipsoid = name
                .parse()
                .with_context(|| format!("Invalid --ellipsoid value: {}", name))?;
        }
        if let Some(precision) = precision {
            self.precision = precision;
        }
        Ok(self)
    }
}

/// Site nommé (observatoire)
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Site {
    /// Nom lisible
    pub name: String,

    #[serde(default)]
    pub description: Option<String>,

    /// Coordonnées ECEF en mètres
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Site {
    pub fn position(&self) -> EcefPoint {
        EcefPoint::new(self.x, self.y, self.z)
    }
}

/// Catalogue de sites, indexé par identifiant court (ex: "gbt")
#[derive(Debug, Deserialize, Serialize)]
pub struct SiteCatalog {
    #[serde(flatten)]
    pub sites: BTreeMap<String, Site>,
}

impl SiteCatalog {
    /// Charge un catalogue depuis un fichier JSON
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .context(format!("Failed to read sites file: {}", path.display()))?;

        Self::parse(&content).context(format!("Failed to parse sites file: {}", path.display()))
    }

    /// Catalogue embarqué (GBT, Arecibo)
    pub fn embedded() -> Result<Self> {
        Self::parse(include_str!("presets/sites.json")).context("Failed to parse embedded sites")
    }

    fn parse(json: &str) -> Result<Self> {
        let catalog: Self = serde_json::from_str(json)?;
        for (id, site) in &catalog.sites {
            EcefPoint::try_new(site.x, site.y, site.z)
                .with_context(|| format!("Invalid coordinates for site {}", id))?;
        }
        Ok(catalog)
    }

    /// Récupère un site (insensible à la casse)
    pub fn get(&self, id: &str) -> Option<&Site> {
        let id = id.trim().to_lowercase();
        self.sites
            .iter()
            .find(|(key, _)| key.to_lowercase() == id)
            .map(|(_, site)| site)
    }

    /// Identifiants disponibles, triés
    pub fn ids(&self) -> Vec<&str> {
        self.sites.keys().map(String::as_str).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embedded_catalog() {
        let catalog = SiteCatalog::embedded().unwrap();
        assert_eq!(catalog.ids(), vec!["arecibo", "gbt"]);

        let gbt = catalog.get("GBT").unwrap();
        assert_eq!(gbt.name, "Green Bank Telescope");
        assert_eq!(gbt.position(), EcefPoint::new(882589.289, -4924872.368, 3943729.418));

        assert!(catalog.get("effelsberg").is_none());
    }

    #[test]
    fn test_parse_rejects_out_of_range() {
        let json = r#"{"bad": {"name": "Bad", "x": 1e400, "y": 0.0, "z": 0.0}}"#;
        assert!(SiteCatalog::parse(json).is_err());

        let json = r#"{"gbt": {"name": "GBT", "x": 1.0, "y": 2.0, "z": 3.0}}"#;
        let catalog = SiteCatalog::parse(json).unwrap();
        assert!(catalog.get("gbt").unwrap().description.is_none());
    }

    #[test]
    fn test_settings_overrides() {
        let settings = Settings::default()
            .with_overrides(Some("wgs84"), Some(3))
            .unwrap();
        assert_eq!(settings.ellipsoid, EllipsoidConstants::WGS84);
        assert_eq!(settings.precision, 3);

        assert!(Settings::default().with_overrides(Some("bessel"), None).is_err());

        let unchanged = Settings::default().with_overrides(None, None).unwrap();
        assert_eq!(unchanged, Settings::default());
    }
}
