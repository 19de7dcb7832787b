use thiserror::Error;

/// Problems with user-supplied demo parameters, caught before anything is built.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    /// Parameter must be strictly greater than zero.
    #[error("{name} must be positive, got {value}")]
    NotPositive { name: &'static str, value: f64 },
    /// Parameter must not be negative.
    #[error("{name} must not be negative, got {value}")]
    Negative { name: &'static str, value: f64 },
    /// NaN or infinite.
    #[error("{name} must be a finite number")]
    NotFinite { name: &'static str },
    /// Launch angles have to be in (0, 90] degrees, or the ball never leaves the ground.
    #[error("launch angle must be above 0 and at most 90 degrees, got {0}")]
    LaunchAngle(f64),
}

pub fn require_positive(name: &'static str, value: f64) -> Result<f64, ConfigError> {
    let value = require_finite(name, value)?;
    if value > 0.0 {
        Ok(value)
    } else {
        Err(ConfigError::NotPositive { name, value })
    }
}

pub fn require_non_negative(name: &'static str, value: f64) -> Result<f64, ConfigError> {
    let value = require_finite(name, value)?;
    if value >= 0.0 {
        Ok(value)
    } else {
        Err(ConfigError::Negative { name, value })
    }
}

pub fn require_finite(name: &'static str, value: f64) -> Result<f64, ConfigError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(ConfigError::NotFinite { name })
    }
}
