//! Shared precondition checks.
//!
//! Every evaluator that divides by `r - g` or by a user-supplied amount goes
//! through one of these guards instead of checking inline.

use crate::error::{ValuationError, ValuationResult};
use crate::types::Rate;

/// Requires `r > g` strictly, returning the positive spread `r - g`.
///
/// `context` names the calculation for the error message.
///
/// # Errors
///
/// Returns `ValuationError::InvalidParameters` when `r <= g` (or either is NaN).
///
/// # Example
///
/// ```rust
/// use valuation_core::guards::require_strictly_greater;
/// use valuation_core::types::Rate;
///
/// let spread = require_strictly_greater(Rate::from_percent(10.0), Rate::from_percent(4.0), "fair P/BV").unwrap();
/// assert!((spread - 0.06).abs() < 1e-12);
/// assert!(require_strictly_greater(Rate::from_percent(5.0), Rate::from_percent(5.0), "DDM").is_err());
/// ```
pub fn require_strictly_greater(r: Rate, g: Rate, context: &str) -> ValuationResult<f64> {
    // Written as a positive test so NaN falls through to the error.
    if r > g {
        return Ok((r - g).as_decimal());
    }
    log::debug!("{context}: rejected discount rate {r} <= growth rate {g}");
    Err(ValuationError::invalid_parameters(format!(
        "{context}: discount rate ({r}) must be strictly greater than growth rate ({g})"
    )))
}

/// Requires `value > 0`, returning it unchanged.
///
/// # Errors
///
/// Returns `ValuationError::InvalidParameters` when `value <= 0` (or NaN).
pub fn require_positive(value: f64, context: &str) -> ValuationResult<f64> {
    if value > 0.0 {
        return Ok(value);
    }
    log::debug!("{context}: rejected non-positive value {value}");
    Err(ValuationError::invalid_parameters(format!(
        "{context} must be greater than zero (got {value})"
    )))
}

/// Requires a collection length of at least one.
///
/// # Errors
///
/// Returns `ValuationError::InvalidParameters` when `len == 0`.
pub fn require_non_empty(len: usize, context: &str) -> ValuationResult<usize> {
    if len > 0 {
        return Ok(len);
    }
    Err(ValuationError::invalid_parameters(format!(
        "{context} must contain at least one value"
    )))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_strictly_greater_returns_spread() {
        let spread =
            require_strictly_greater(Rate::from_percent(8.0), Rate::from_percent(2.0), "DDM")
                .unwrap();
        assert_relative_eq!(spread, 0.06, epsilon = 1e-12);
    }

    #[test]
    fn test_equal_rates_rejected() {
        let err = require_strictly_greater(Rate::from_percent(5.0), Rate::from_percent(5.0), "DDM")
            .unwrap_err();
        assert!(err.reason().starts_with("DDM"));
        assert!(err.reason().contains("5.00%"));
    }

    #[test]
    fn test_inverted_rates_rejected() {
        assert!(
            require_strictly_greater(Rate::from_percent(4.0), Rate::from_percent(6.0), "TV")
                .is_err()
        );
    }

    #[test]
    fn test_nan_rejected() {
        assert!(
            require_strictly_greater(Rate::from_decimal(f64::NAN), Rate::ZERO, "TV").is_err()
        );
        assert!(require_positive(f64::NAN, "profit").is_err());
    }

    #[test]
    fn test_require_positive() {
        assert_eq!(require_positive(6.0, "normalized profit").unwrap(), 6.0);
        assert!(require_positive(0.0, "normalized profit").is_err());
        assert!(require_positive(-1.0, "normalized profit").is_err());
    }

    #[test]
    fn test_require_non_empty() {
        assert_eq!(require_non_empty(3, "peers").unwrap(), 3);
        let err = require_non_empty(0, "peers").unwrap_err();
        assert!(err.reason().contains("at least one"));
    }
}
