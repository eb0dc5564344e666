#![forbid(unsafe_code)]

//! Configuration errors.
//!
//! Runtime operations (gesture handling, particle generation) never fail;
//! only building a config from host-supplied numbers can.

use thiserror::Error;

/// Rejected configuration value.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    /// A range bound was NaN or infinite.
    #[error("non-finite bound in {field}: [{min}, {max}]")]
    NonFiniteRange {
        field: &'static str,
        min: f32,
        max: f32,
    },
    /// A range had `min > max`.
    #[error("inverted range in {field}: min {min} > max {max}")]
    InvertedRange {
        field: &'static str,
        min: f32,
        max: f32,
    },
    /// A threshold was negative, NaN, or infinite.
    #[error("invalid threshold {field}: {value}")]
    InvalidThreshold { field: &'static str, value: f32 },
    /// A duration in seconds was negative, NaN, or infinite.
    #[error("invalid duration {field}: {value}s")]
    InvalidDuration { field: &'static str, value: f32 },
}

/// Validate a pixel threshold: finite and non-negative.
pub(crate) fn check_threshold(field: &'static str, value: f32) -> Result<f32, ConfigError> {
    if value.is_finite() && value >= 0.0 {
        Ok(value)
    } else {
        Err(ConfigError::InvalidThreshold { field, value })
    }
}
