//! Error types for the Valuation toolkit.
//!
//! Every evaluator fails the same way: its inputs violate a formula
//! precondition. There is no retry and no default substitution; the error
//! goes straight back to the caller.

use thiserror::Error;

/// A specialized Result type for valuation operations.
pub type ValuationResult<T> = Result<T, ValuationError>;

/// The error type for valuation operations.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValuationError {
    /// A formula precondition does not hold (e.g. `r <= g`, non-positive divisor).
    #[error("Invalid parameters: {reason}")]
    InvalidParameters {
        /// Description of the violated precondition.
        reason: String,
    },
}

impl ValuationError {
    /// Creates an invalid parameters error.
    #[must_use]
    pub fn invalid_parameters(reason: impl Into<String>) -> Self {
        Self::InvalidParameters {
            reason: reason.into(),
        }
    }

    /// Returns the reason carried by the error.
    pub fn reason(&self) -> &str {
        match self {
            Self::InvalidParameters { reason } => reason,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ValuationError::invalid_parameters("discount rate must exceed growth rate");
        assert!(err.to_string().starts_with("Invalid parameters"));
        assert!(err.to_string().contains("must exceed"));
    }

    #[test]
    fn test_reason() {
        let err = ValuationError::invalid_parameters("empty series");
        assert_eq!(err.reason(), "empty series");
    }
}
