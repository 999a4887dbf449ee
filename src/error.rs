// src/error.rs
use std::fmt;

/// Custom error types for the binom-walk library
#[derive(Debug, Clone)]
pub enum WalkError {
    /// Invalid parameter values
    InvalidParameters {
        parameter: String,
        value: f64,
        constraint: String,
    },

    /// Invalid figure or ensemble configuration
    InvalidConfiguration { field: String, reason: String },

    /// Rendering failure reported by the plotting backend
    Render { figure: String, reason: String },
}

impl WalkError {
    /// Wrap a plotting backend error for the named figure
    pub fn render<E: fmt::Display>(figure: &str, source: E) -> Self {
        WalkError::Render {
            figure: figure.to_string(),
            reason: source.to_string(),
        }
    }
}

impl fmt::Display for WalkError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WalkError::InvalidParameters {
                parameter,
                value,
                constraint,
            } => {
                write!(
                    f,
                    "Invalid parameter '{}' = {}: {}",
                    parameter, value, constraint
                )
            }
            WalkError::InvalidConfiguration { field, reason } => {
                write!(f, "Invalid configuration for '{}': {}", field, reason)
            }
            WalkError::Render { figure, reason } => {
                write!(f, "Failed to render '{}': {}", figure, reason)
            }
        }
    }
}

impl std::error::Error for WalkError {}

/// Result type alias for binom-walk operations
pub type WalkResult<T> = Result<T, WalkError>;

/// Validation utilities
pub mod validation {
    use super::{WalkError, WalkResult};

    /// Validate the number of steps of a walk
    ///
    /// `size = 0` would put the first time point at 0/0, so it is rejected
    /// rather than emitting an undefined sample.
    pub fn validate_size(size: usize) -> WalkResult<()> {
        if size == 0 {
            Err(WalkError::InvalidParameters {
                parameter: "size".to_string(),
                value: 0.0,
                constraint: "must be at least 1".to_string(),
            })
        } else if size > 1_000_000 {
            Err(WalkError::InvalidParameters {
                parameter: "size".to_string(),
                value: size as f64,
                constraint: "exceeds maximum allowed (1,000,000)".to_string(),
            })
        } else {
            Ok(())
        }
    }

    /// Validate the number of paths in an ensemble
    pub fn validate_count(count: usize) -> WalkResult<()> {
        if count == 0 {
            Err(WalkError::InvalidConfiguration {
                field: "count".to_string(),
                reason: "must be greater than 0".to_string(),
            })
        } else if count > 1_000_000 {
            Err(WalkError::InvalidConfiguration {
                field: "count".to_string(),
                reason: "exceeds maximum allowed (1,000,000)".to_string(),
            })
        } else {
            Ok(())
        }
    }

    /// Validate that a parameter is positive
    pub fn validate_positive(name: &str, value: f64) -> WalkResult<()> {
        if value <= 0.0 {
            Err(WalkError::InvalidParameters {
                parameter: name.to_string(),
                value,
                constraint: "must be positive (> 0)".to_string(),
            })
        } else {
            Ok(())
        }
    }

    /// Validate that a value is finite and not NaN
    pub fn validate_finite(name: &str, value: f64) -> WalkResult<()> {
        if !value.is_finite() {
            Err(WalkError::InvalidParameters {
                parameter: name.to_string(),
                value,
                constraint: "must be finite (not NaN or infinite)".to_string(),
            })
        } else {
            Ok(())
        }
    }

    /// Validate an axis limit pair (lo, hi)
    pub fn validate_limits(name: &str, limits: (f64, f64)) -> WalkResult<()> {
        validate_finite(name, limits.0)?;
        validate_finite(name, limits.1)?;
        if limits.0 >= limits.1 {
            Err(WalkError::InvalidConfiguration {
                field: name.to_string(),
                reason: format!(
                    "lower bound {} must be below upper bound {}",
                    limits.0, limits.1
                ),
            })
        } else {
            Ok(())
        }
    }

    /// Validate a confidence level in (0, 1)
    pub fn validate_confidence(name: &str, level: f64) -> WalkResult<()> {
        if !(level > 0.0 && level < 1.0) {
            Err(WalkError::InvalidParameters {
                parameter: name.to_string(),
                value: level,
                constraint: "must be in the open interval (0, 1)".to_string(),
            })
        } else {
            Ok(())
        }
    }

    /// Validate a histogram bin count
    pub fn validate_bins(bins: usize) -> WalkResult<()> {
        if bins == 0 {
            Err(WalkError::InvalidConfiguration {
                field: "bins".to_string(),
                reason: "must be greater than 0".to_string(),
            })
        } else if bins > 1_000 {
            Err(WalkError::InvalidConfiguration {
                field: "bins".to_string(),
                reason: "exceeds maximum allowed (1,000)".to_string(),
            })
        } else {
            Ok(())
        }
    }
}
