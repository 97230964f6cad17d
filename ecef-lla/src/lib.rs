//! # ecef-lla
//!
//! Conversion de coordonnées ECEF (X, Y, Z) ↔ géodésiques (latitude, longitude,
//! altitude) sur un ellipsoïde de référence, et décalage d'altitude.
//!
//! ## Features
//!
//! - Formule fermée de Bowring (pas d'itération)
//! - `atan2` partout : longitude correcte dans les 4 quadrants
//! - Branches dédiées pour les pôles et l'axe de rotation
//! - Ellipsoïdes GRS80 et WGS84 prédéfinis, modèle passé explicitement
//! - Feature `serde` pour sérialiser les types
//!
//! ## Usage
//!
//! ```rust
//! use ecef_lla::{offset_ecef, EcefPoint, EllipsoidConstants};
//!
//! let model = EllipsoidConstants::GRS80.derive()?;
//! let gbt = EcefPoint::new(882589.289, -4924872.368, 3943729.418);
//!
//! let result = offset_ecef(gbt, &model, 0.05);
//! println!("Latitude: {:.8}", result.lla.latitude);
//! println!("Déplacement: {:?}", result.displacement);
//! # Ok::<(), ecef_lla::EcefError>(())
//! ```

pub mod convert;
pub mod ellipsoid;
pub mod error;
pub mod types;

pub use convert::{apply_altitude_offset, diff, ecef_to_lla, lla_to_ecef, lla_to_ecef_recompute};
pub use ellipsoid::{derive_ellipsoid_model, EllipsoidConstants, EllipsoidModel};
pub use error::EcefError;
pub use types::{ConversionContext, EcefPoint, LlaPoint, OffsetResult};

use tracing::debug;

/// Décale un point ECEF de `delta` mètres le long de la normale à l'ellipsoïde.
///
/// # Étapes
///
/// 1. ECEF → LLA (avec N)
/// 2. h' = h + delta
/// 3. LLA → ECEF avec le même N
/// 4. Différence avec le point d'entrée
pub fn offset_ecef(point: EcefPoint, model: &EllipsoidModel, delta: f64) -> OffsetResult {
    let (lla, context) = ecef_to_lla(point, model);
    let shifted_lla = apply_altitude_offset(lla, delta);
    let shifted = lla_to_ecef(shifted_lla, model, context.n);
    let displacement = diff(shifted, point);

    debug!(
        lat = lla.latitude,
        lon = lla.longitude,
        h = lla.altitude,
        delta,
        dist = displacement.norm(),
        "Décalage d'altitude appliqué"
    );

    OffsetResult {
        original: point,
        lla,
        context,
        delta,
        shifted_lla,
        shifted,
        displacement,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_offset_ecef_green_bank() {
        let model = EllipsoidConstants::GRS80.derive().unwrap();
        let gbt = EcefPoint::new(882589.289, -4924872.368, 3943729.418);

        let result = offset_ecef(gbt, &model, 0.05);

        assert!((result.shifted.x - 882589.29591).abs() < 1e-3, "x={}", result.shifted.x);
        assert!((result.shifted.y - (-4924872.40655)).abs() < 1e-3, "y={}", result.shifted.y);
        assert!((result.shifted.z - 3943729.44908).abs() < 1e-3, "z={}", result.shifted.z);
        assert!((result.shifted_lla.altitude - result.lla.altitude - 0.05).abs() < 1e-9);
        assert!((result.displacement.norm() - 0.05).abs() < 1e-6);
    }

    #[test]
    fn test_offset_zero_keeps_point() {
        let model = EllipsoidConstants::WGS84.derive().unwrap();
        let point = EcefPoint::new(4201000.0, 168000.0, 4780000.0);

        let result = offset_ecef(point, &model, 0.0);
        assert_eq!(result.shifted_lla, result.lla);
        assert!(result.displacement.norm() < 1e-6);
    }
}
