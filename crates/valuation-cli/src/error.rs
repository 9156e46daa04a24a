//! CLI error types.

use thiserror::Error;

use valuation_core::bounds::OutOfBounds;
use valuation_core::ValuationError;

/// CLI error type.
#[derive(Debug, Error)]
pub enum CliError {
    /// Input outside its documented range.
    #[error("Input out of range: {0}")]
    OutOfBounds(#[from] OutOfBounds),

    /// Formula precondition failed.
    #[error(transparent)]
    Valuation(#[from] ValuationError),

    /// Unknown topic number.
    #[error("Unknown topic: {0}. Run `valuation topic` to list topics.")]
    UnknownTopic(u8),

    /// Unknown configuration key.
    #[error("Unknown configuration key: {0}")]
    UnknownConfigKey(String),

    /// Configuration value rejected.
    #[error("Invalid value for {key}: {reason}")]
    InvalidConfigValue {
        /// Configuration key.
        key: &'static str,
        /// Why the value was rejected.
        reason: String,
    },

    /// No config directory could be determined.
    #[error("Could not determine config directory; pass --config")]
    NoConfigDir,

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// CLI result type.
pub type CliResult<T> = Result<T, CliError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valuation_error_is_transparent() {
        let err: CliError = ValuationError::invalid_parameters("DDM: r must exceed g").into();
        assert_eq!(err.to_string(), "Invalid parameters: DDM: r must exceed g");
    }

    #[test]
    fn test_out_of_bounds_message() {
        let err: CliError = valuation_core::bounds::DISCOUNT_RATE
            .check(25.0)
            .unwrap_err()
            .into();
        assert!(err.to_string().contains("Discount Rate"));
    }
}
