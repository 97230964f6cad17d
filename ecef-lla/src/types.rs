//! Types de données pour le crate ecef-lla

use std::ops::Sub;

use geo::Point;

use crate::EcefError;

/// Point en coordonnées cartésiennes géocentriques (mètres)
///
/// Origine au centre de masse de la Terre, axe Z aligné sur l'axe de rotation moyen.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EcefPoint {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl EcefPoint {
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Crée un point en refusant les coordonnées non finies
    pub fn try_new(x: f64, y: f64, z: f64) -> Result<Self, EcefError> {
        for (name, value) in [("x", x), ("y", y), ("z", z)] {
            if !value.is_finite() {
                return Err(EcefError::non_finite(name, value));
            }
        }
        Ok(Self { x, y, z })
    }

    /// Norme euclidienne
    pub fn norm(&self) -> f64 {
        (self.x * self.x + self.y * self.y + self.z * self.z).sqrt()
    }

    /// Distance à l'axe de rotation
    pub fn axis_distance(&self) -> f64 {
        self.x.hypot(self.y)
    }

    /// Produit scalaire
    pub fn dot(&self, other: &Self) -> f64 {
        self.x * other.x + self.y * other.y + self.z * other.z
    }
}

impl Sub for EcefPoint {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Self {
            x: self.x - rhs.x,
            y: self.y - rhs.y,
            z: self.z - rhs.z,
        }
    }
}

/// Point en coordonnées géodésiques
///
/// Angles en degrés à la frontière de l'API, altitude en mètres au-dessus de
/// l'ellipsoïde (signée).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LlaPoint {
    /// Latitude en degrés (-90..90)
    pub latitude: f64,
    /// Longitude en degrés (-180..180)
    pub longitude: f64,
    /// Hauteur ellipsoïdale en mètres
    pub altitude: f64,
}

impl LlaPoint {
    pub const fn new(latitude: f64, longitude: f64, altitude: f64) -> Self {
        Self {
            latitude,
            longitude,
            altitude,
        }
    }

    /// Crée un point en vérifiant les domaines de validité
    pub fn try_new(latitude: f64, longitude: f64, altitude: f64) -> Result<Self, EcefError> {
        for (name, value) in [
            ("latitude", latitude),
            ("longitude", longitude),
            ("altitude", altitude),
        ] {
            if !value.is_finite() {
                return Err(EcefError::non_finite(name, value));
            }
        }
        if !(-90.0..=90.0).contains(&latitude) {
            return Err(EcefError::invalid_parameter(
                "latitude",
                format!("must be in [-90, 90] degrees, got {}", latitude),
            ));
        }
        if !(-180.0..=180.0).contains(&longitude) {
            return Err(EcefError::invalid_parameter(
                "longitude",
                format!("must be in [-180, 180] degrees, got {}", longitude),
            ));
        }
        Ok(Self::new(latitude, longitude, altitude))
    }

    /// Latitude en radians
    pub fn latitude_rad(&self) -> f64 {
        self.latitude.to_radians()
    }

    /// Longitude en radians
    pub fn longitude_rad(&self) -> f64 {
        self.longitude.to_radians()
    }
}

/// Point 2D (x = longitude, y = latitude) en degrés, l'altitude est perdue
impl From<LlaPoint> for Point<f64> {
    fn from(p: LlaPoint) -> Self {
        Point::new(p.longitude, p.latitude)
    }
}

/// Contexte produit par la conversion ECEF → LLA
///
/// Le rayon de courbure N dépend de la latitude ; il est transmis tel quel à la
/// conversion inverse du même point.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ConversionContext {
    /// Rayon de courbure dans le premier vertical (mètres)
    pub n: f64,
}

/// Résultat complet d'un décalage d'altitude
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct OffsetResult {
    /// Point d'entrée
    pub original: EcefPoint,
    /// Coordonnées géodésiques du point d'entrée
    pub lla: LlaPoint,
    /// Contexte de conversion (N)
    pub context: ConversionContext,
    /// Décalage appliqué (mètres)
    pub delta: f64,
    /// Coordonnées géodésiques après décalage
    pub shifted_lla: LlaPoint,
    /// Point décalé en ECEF
    pub shifted: EcefPoint,
    /// Déplacement cartésien (shifted - original)
    pub displacement: EcefPoint,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ecef_try_new() {
        assert!(EcefPoint::try_new(1.0, 2.0, 3.0).is_ok());
        assert!(matches!(
            EcefPoint::try_new(f64::NAN, 0.0, 0.0),
            Err(EcefError::NumericDegenerate(_))
        ));
        assert!(EcefPoint::try_new(0.0, f64::INFINITY, 0.0).is_err());
    }

    #[test]
    fn test_ecef_ops() {
        let a = EcefPoint::new(3.0, 4.0, 12.0);
        let b = EcefPoint::new(1.0, 1.0, 1.0);

        assert_eq!(a.norm(), 13.0);
        assert_eq!(a.axis_distance(), 5.0);
        assert_eq!(a.dot(&b), 19.0);
        assert_eq!(a - b, EcefPoint::new(2.0, 3.0, 11.0));
    }

    #[test]
    fn test_lla_try_new() {
        assert!(LlaPoint::try_new(45.0, 5.0, 200.0).is_ok());
        assert!(LlaPoint::try_new(-90.0, 180.0, -10.0).is_ok());
        assert!(matches!(
            LlaPoint::try_new(90.5, 0.0, 0.0),
            Err(EcefError::InvalidParameter { name: "latitude", .. })
        ));
        assert!(matches!(
            LlaPoint::try_new(0.0, -181.0, 0.0),
            Err(EcefError::InvalidParameter { name: "longitude", .. })
        ));
        assert!(matches!(
            LlaPoint::try_new(0.0, 0.0, f64::NAN),
            Err(EcefError::NumericDegenerate(_))
        ));
    }

    #[test]
    fn test_lla_to_geo_point() {
        let p: Point<f64> = LlaPoint::new(48.85, 2.35, 35.0).into();
        assert_eq!(p.x(), 2.35);
        assert_eq!(p.y(), 48.85);
    }
}
