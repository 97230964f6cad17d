//! Définitions des ellipsoïdes
//!
//! Les constantes primaires (a, f) sont fournies par l'appelant ; le modèle
//! dérivé (b, e, e') est calculé une seule fois puis passé explicitement aux
//! conversions.

use std::fmt;
use std::str::FromStr;

use crate::EcefError;

/// Constantes primaires d'un ellipsoïde de référence
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EllipsoidConstants {
    /// Demi-grand axe (rayon équatorial) en mètres
    pub a: f64,
    /// Aplatissement
    pub f: f64,
}

impl EllipsoidConstants {
    /// Ellipsoïde GRS80
    pub const GRS80: Self = Self {
        a: 6378137.0,
        f: 0.0033528106811836376,
    };

    /// Ellipsoïde WGS84
    /// Note: Quasi identique à GRS80, différence < 0.1mm sur b
    pub const WGS84: Self = Self {
        a: 6378137.0,
        f: 1.0 / 298.257223563,
    };

    pub const fn new(a: f64, f: f64) -> Self {
        Self { a, f }
    }

    /// Dérive le modèle complet (b, e, e')
    pub fn derive(&self) -> Result<EllipsoidModel, EcefError> {
        derive_ellipsoid_model(self.a, self.f)
    }

    /// Nom du preset correspondant, s'il existe
    pub fn preset_name(&self) -> Option<&'static str> {
        if *self == Self::GRS80 {
            Some("grs80")
        } else if *self == Self::WGS84 {
            Some("wgs84")
        } else {
            None
        }
    }
}

impl Default for EllipsoidConstants {
    fn default() -> Self {
        Self::GRS80
    }
}

impl FromStr for EllipsoidConstants {
    type Err = EcefError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "grs80" | "grs-80" | "grs 1980" => Ok(Self::GRS80),
            "wgs84" | "wgs-84" => Ok(Self::WGS84),
            _ => Err(EcefError::UnknownEllipsoid(s.to_string())),
        }
    }
}

impl fmt::Display for EllipsoidConstants {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.preset_name() {
            Some(name) => write!(f, "{}", name.to_uppercase()),
            None => write!(f, "a={} f={}", self.a, self.f),
        }
    }
}

/// Modèle d'ellipsoïde dérivé, immuable
///
/// Invariants garantis par [`derive_ellipsoid_model`] :
/// `0 < b < a`, `0 <= e < 1`, `e' > e`.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct EllipsoidModel {
    a: f64,
    b: f64,
    e: f64,
    e_prime: f64,
}

impl EllipsoidModel {
    /// Demi-grand axe en mètres
    pub fn a(&self) -> f64 {
        self.a
    }

    /// Demi-petit axe (rayon polaire) en mètres
    pub fn b(&self) -> f64 {
        self.b
    }

    /// Première excentricité
    pub fn e(&self) -> f64 {
        self.e
    }

    /// Deuxième excentricité
    pub fn e_prime(&self) -> f64 {
        self.e_prime
    }

    /// Première excentricité au carré
    pub fn e2(&self) -> f64 {
        self.e * self.e
    }

    /// Deuxième excentricité au carré
    pub fn ep2(&self) -> f64 {
        self.e_prime * self.e_prime
    }

    /// Rayon de courbure dans le premier vertical (grande normale)
    ///
    /// `lat` en radians.
    pub fn prime_vertical_radius(&self, lat: f64) -> f64 {
        self.a / (1.0 - self.e2() * lat.sin().powi(2)).sqrt()
    }
}

/// Dérive b, e et e' depuis le demi-grand axe et l'aplatissement
///
/// # Errors
///
/// `EcefError::InvalidParameter` si `a <= 0` (ou non fini) ou si `f` n'est pas
/// dans l'intervalle ouvert (0, 1).
pub fn derive_ellipsoid_model(a: f64, f: f64) -> Result<EllipsoidModel, EcefError> {
    if !a.is_finite() || a <= 0.0 {
        return Err(EcefError::invalid_parameter(
            "a",
            format!("semi-major axis must be finite and > 0, got {}", a),
        ));
    }
    if !(f > 0.0 && f < 1.0) {
        return Err(EcefError::invalid_parameter(
            "f",
            format!("flattening must be in (0, 1), got {}", f),
        ));
    }

    let b = a * (1.0 - f);
    let e = (a * a - b * b).sqrt() / a;
    let e_prime = e / (1.0 - e * e).sqrt();

    Ok(EllipsoidModel { a, b, e, e_prime })
}
