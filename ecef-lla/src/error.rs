//! Types d'erreurs pour le crate ecef-lla

use thiserror::Error;

/// Erreurs pouvant survenir lors de la construction des modèles et des points
///
/// Les conversions elles-mêmes sont totales : les cas pôle/origine passent par
/// des branches dédiées et ne produisent jamais d'erreur.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EcefError {
    /// Paramètre hors de son domaine (constantes d'ellipsoïde, latitude...)
    #[error("Invalid parameter {name}: {reason}")]
    InvalidParameter { name: &'static str, reason: String },

    /// Valeur numérique non exploitable (NaN, infini)
    #[error("Numeric degenerate input: {0}")]
    NumericDegenerate(String),

    /// Ellipsoïde de référence inconnu
    #[error("Unknown ellipsoid: {0}. Use: grs80, wgs84")]
    UnknownEllipsoid(String),
}

impl EcefError {
    /// Crée une erreur de paramètre invalide
    pub fn invalid_parameter(name: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidParameter {
            name,
            reason: reason.into(),
        }
    }

    /// Crée une erreur pour une valeur non finie
    pub fn non_finite(name: &str, value: f64) -> Self {
        Self::NumericDegenerate(format!("{} is not finite ({})", name, value))
    }
}
