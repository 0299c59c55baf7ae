use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum PricingError {
    #[error("invalid parameter '{name}' = {value}: {reason}")]
    InvalidParameter {
        name: &'static str,
        value: f64,
        reason: &'static str,
    },
    #[error("a mesh needs at least one step")]
    EmptyMesh,
    #[error("mesh bound {0} is not finite")]
    InvalidMeshBound(f64),
    #[error("{quantity} is not finite at spot {spot}")]
    NonFinite { quantity: &'static str, spot: f64 },
    #[error("no exercise boundary: the characteristic root equals 1")]
    NoExerciseBoundary,
    #[error("the characteristic root is 0, the closed form divides by it")]
    ZeroCharacteristicRoot,
}

impl PricingError {
    pub(crate) fn invalid(name: &'static str, value: f64, reason: &'static str) -> Self {
        PricingError::InvalidParameter {
            name,
            value,
            reason,
        }
    }
}

pub(crate) fn positive(name: &'static str, value: f64) -> Result<f64, PricingError> {
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(PricingError::invalid(name, value, "must be positive and finite"))
    }
}

pub(crate) fn finite(name: &'static str, value: f64) -> Result<f64, PricingError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(PricingError::invalid(name, value, "must be finite"))
    }
}

/// Rejects NaN / infinite results of a closed form.
pub(crate) fn checked(quantity: &'static str, spot: f64, value: f64) -> Result<f64, PricingError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(PricingError::NonFinite { quantity, spot })
    }
}
