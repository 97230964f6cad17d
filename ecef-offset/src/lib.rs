//! # ecef-offset
//!
//! Décalage d'altitude d'une position ECEF et mesure du déplacement cartésien.
//!
//! ## Features
//!
//! - Conversion ECEF ↔ LLA (GRS80 par défaut, WGS84)
//! - Sites nommés (Green Bank, Arecibo) ou fichier JSON personnalisé
//! - Rapport console, JSON et GeoJSON
//! - CLI simple
//!
//! ## Usage CLI
//!
//! ```bash
//! # Décaler le GBT de 5 cm
//! ecef-offset offset --site gbt --delta 0.05
//!
//! # Point quelconque, rapport JSON + GeoJSON
//! ecef-offset offset --x 2390430.973 --y -5564623.199 --z 1994679.674 --delta 1.5 \
//!     --report report.json --geojson shift.geojson
//!
//! # Conversions simples
//! ecef-offset to-lla --x 882589.289 --y -4924872.368 --z 3943729.418
//! ecef-offset to-ecef --lat 38.43312964 --lon -79.83984263 --alt 823.668
//! ```

pub mod config;
pub mod export;
pub mod report;

pub use config::{Settings, Site, SiteCatalog};
pub use report::OffsetReport;
