//! Error types for the FitTrack computation core

use thiserror::Error;

use crate::validation::ValidationFailure;

/// Errors raised when a calculator rejects its input
#[derive(Error, Debug, Clone, PartialEq)]
pub enum FitError {
    /// User-entered profile values outside the accepted ranges
    #[error("{0}")]
    Validation(#[from] ValidationFailure),

    /// A derived numeric input that no calculator can work with
    #[error("Invalid input: {field} {reason}")]
    InvalidInput { field: &'static str, reason: String },
}

impl FitError {
    pub(crate) fn invalid(field: &'static str, reason: impl Into<String>) -> Self {
        FitError::InvalidInput {
            field,
            reason: reason.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, FitError>;

/// Reject NaN, infinities and values `<= 0`
pub(crate) fn ensure_positive(field: &'static str, value: f64) -> Result<f64> {
    if !value.is_finite() {
        return Err(FitError::invalid(field, "must be a valid number"));
    }
    if value <= 0.0 {
        return Err(FitError::invalid(field, "must be greater than 0"));
    }
    Ok(value)
}

/// Reject NaN, infinities and negative values
pub(crate) fn ensure_non_negative(field: &'static str, value: f64) -> Result<f64> {
    if !value.is_finite() {
        return Err(FitError::invalid(field, "must be a valid number"));
    }
    if value < 0.0 {
        return Err(FitError::invalid(field, "cannot be negative"));
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ensure_positive() {
        assert_eq!(ensure_positive("target", 2000.0), Ok(2000.0));
        assert!(ensure_positive("target", 0.0).is_err());
        assert!(ensure_positive("target", -1.0).is_err());
        assert!(ensure_positive("target", f64::NAN).is_err());
        assert!(ensure_positive("target", f64::INFINITY).is_err());
    }

    #[test]
    fn test_ensure_non_negative() {
        assert_eq!(ensure_non_negative("fat", 0.0), Ok(0.0));
        assert!(ensure_non_negative("fat", -0.1).is_err());
        assert!(ensure_non_negative("fat", f64::NEG_INFINITY).is_err());
    }

    #[test]
    fn test_invalid_input_message() {
        let err = FitError::invalid("bmi", "must be greater than 0");
        assert_eq!(err.to_string(), "Invalid input: bmi must be greater than 0");
    }
}
