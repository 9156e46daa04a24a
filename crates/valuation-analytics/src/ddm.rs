//! Dividend discount model (constant growth).
//!
//! ## Formula
//!
//! ```text
//! D1    = D0 × (1 + g)
//! Value = D1 / (r − g)
//! ```

use serde::{Deserialize, Serialize};

use valuation_core::error::ValuationResult;
use valuation_core::guards::require_strictly_greater;
use valuation_core::types::Rate;

/// Result of a dividend discount valuation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DividendValuation {
    /// Dividend expected next year (D1).
    pub next_dividend: f64,
    /// Value per share.
    pub value: f64,
}

/// Values a share from its current dividend `d0`.
///
/// # Errors
///
/// Returns `ValuationError::InvalidParameters` unless `discount > growth`.
///
/// # Example
///
/// ```rust
/// use valuation_analytics::ddm::dividend_discount;
/// use valuation_core::Rate;
///
/// let v = dividend_discount(2.0, Rate::from_percent(8.0), Rate::from_percent(2.0)).unwrap();
/// assert!((v.value - 34.0).abs() < 1e-9);
/// ```
pub fn dividend_discount(d0: f64, discount: Rate, growth: Rate) -> ValuationResult<DividendValuation> {
    let spread = require_strictly_greater(discount, growth, "dividend discount model")?;
    let next_dividend = d0 * growth.factor();
    let value = next_dividend / spread;
    log::debug!("ddm: d0={d0} r={discount} g={growth} d1={next_dividend} value={value}");
    Ok(DividendValuation {
        next_dividend,
        value,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_textbook_example() {
        // D1 = 2.04, r − g = 0.06
        let v = dividend_discount(2.0, Rate::from_percent(8.0), Rate::from_percent(2.0)).unwrap();
        assert_relative_eq!(v.next_dividend, 2.04, epsilon = 1e-12);
        assert_relative_eq!(v.value, 34.0, epsilon = 1e-9);
    }

    #[test]
    fn test_zero_growth_is_perpetuity() {
        let v = dividend_discount(5.0, Rate::from_percent(10.0), Rate::ZERO).unwrap();
        assert_relative_eq!(v.value, 50.0, epsilon = 1e-9);
    }

    #[test]
    fn test_rejects_discount_not_above_growth() {
        assert!(dividend_discount(2.0, Rate::from_percent(5.0), Rate::from_percent(5.0)).is_err());
        assert!(dividend_discount(2.0, Rate::from_percent(4.0), Rate::from_percent(6.0)).is_err());
    }

    #[test]
    fn test_idempotent() {
        let a = dividend_discount(2.0, Rate::from_percent(8.0), Rate::from_percent(2.0)).unwrap();
        let b = dividend_discount(2.0, Rate::from_percent(8.0), Rate::from_percent(2.0)).unwrap();
        assert_eq!(a.value.to_bits(), b.value.to_bits());
    }
}
