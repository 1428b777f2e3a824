//! Error types for quantedge.

use thiserror::Error;

/// Result type alias for quantedge operations.
pub type Result<T> = std::result::Result<T, QuantError>;

/// Error types for the analytics engine.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum QuantError {
    /// Non-positive prices, rates, volatility or time, or zero risk per unit.
    #[error("Invalid input: {message}")]
    InvalidInput { message: String },

    /// Numerically unstable input that would otherwise produce NaN or infinity.
    #[error("Degenerate input: {message}")]
    DegenerateInput { message: String },

    /// Division by zero error.
    #[error("Division by zero in {context}")]
    DivisionByZero { context: String },

    /// Insufficient data for calculation.
    #[error("Insufficient data: need at least {required} elements, got {available}")]
    InsufficientData { required: usize, available: usize },

    /// Data length mismatch between paired series.
    #[error("Data length mismatch: expected {expected}, got {actual}")]
    LengthMismatch { expected: usize, actual: usize },

    /// Invalid configuration.
    #[error("Invalid configuration: {message}")]
    InvalidConfig { message: String },
}

impl QuantError {
    /// Create an invalid input error.
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput {
            message: message.into(),
        }
    }

    /// Create a degenerate input error.
    pub fn degenerate_input(message: impl Into<String>) -> Self {
        Self::DegenerateInput {
            message: message.into(),
        }
    }

    /// Create a division by zero error.
    pub fn division_by_zero(context: impl Into<String>) -> Self {
        Self::DivisionByZero {
            context: context.into(),
        }
    }

    /// Create an insufficient data error.
    pub fn insufficient_data(required: usize, available: usize) -> Self {
        Self::InsufficientData {
            required,
            available,
        }
    }

    /// Create a length mismatch error.
    pub fn length_mismatch(expected: usize, actual: usize) -> Self {
        Self::LengthMismatch { expected, actual }
    }

    /// Create an invalid config error.
    pub fn invalid_config(message: impl Into<String>) -> Self {
        Self::InvalidConfig {
            message: message.into(),
        }
    }
}

impl From<serde_json::Error> for QuantError {
    fn from(err: serde_json::Error) -> Self {
        QuantError::invalid_config(err.to_string())
    }
}

/// Reject values that are NaN or infinite.
pub(crate) fn ensure_finite(name: &str, value: f64) -> Result<()> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(QuantError::invalid_input(format!("{name} must be finite, got {value}")))
    }
}

/// Reject values that are not strictly positive.
pub(crate) fn ensure_positive(name: &str, value: f64) -> Result<()> {
    ensure_finite(name, value)?;
    if value > 0.0 {
        Ok(())
    } else {
        Err(QuantError::invalid_input(format!("{name} must be > 0, got {value}")))
    }
}

/// Reject values that are negative.
pub(crate) fn ensure_non_negative(name: &str, value: f64) -> Result<()> {
    ensure_finite(name, value)?;
    if value >= 0.0 {
        Ok(())
    } else {
        Err(QuantError::invalid_input(format!("{name} must be >= 0, got {value}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        let err = QuantError::insufficient_data(15, 3);
        assert_eq!(err.to_string(), "Insufficient data: need at least 15 elements, got 3");

        let err = QuantError::division_by_zero("beta");
        assert_eq!(err.to_string(), "Division by zero in beta");
    }

    #[test]
    fn test_guards() {
        assert!(ensure_positive("spot", 1.0).is_ok());
        assert!(ensure_positive("spot", 0.0).is_err());
        assert!(ensure_positive("spot", f64::NAN).is_err());
        assert!(ensure_non_negative("rate", 0.0).is_ok());
        assert!(ensure_non_negative("rate", -0.01).is_err());
        assert!(ensure_finite("x", f64::INFINITY).is_err());
    }
}
