//! Fair price-to-book multiple for financial companies.
//!
//! ## Formula
//!
//! ```text
//! P/BV = (ROE − g) / (r − g)
//! ```
//!
//! A bank earning exactly its cost of capital is worth book value (1.0x).

use valuation_core::error::ValuationResult;
use valuation_core::guards::require_strictly_greater;
use valuation_core::types::Rate;

/// Justified P/BV from return on equity, cost of capital, and growth.
///
/// # Errors
///
/// Returns `ValuationError::InvalidParameters` unless `cost_of_capital > growth`.
pub fn fair_price_to_book(roe: Rate, cost_of_capital: Rate, growth: Rate) -> ValuationResult<f64> {
    let spread = require_strictly_greater(cost_of_capital, growth, "fair P/BV")?;
    let pbv = (roe - growth).as_decimal() / spread;
    log::debug!("fair P/BV: roe={roe} r={cost_of_capital} g={growth} pbv={pbv}");
    Ok(pbv)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_textbook_example() {
        // (0.12 − 0.04) / (0.10 − 0.04)
        let pbv = fair_price_to_book(
            Rate::from_percent(12.0),
            Rate::from_percent(10.0),
            Rate::from_percent(4.0),
        )
        .unwrap();
        assert_relative_eq!(pbv, 4.0 / 3.0, epsilon = 1e-9);
    }

    #[test]
    fn test_roe_equal_to_cost_is_book_value() {
        let pbv = fair_price_to_book(
            Rate::from_percent(9.0),
            Rate::from_percent(9.0),
            Rate::from_percent(3.0),
        )
        .unwrap();
        assert_relative_eq!(pbv, 1.0, epsilon = 1e-9);
    }

    #[test]
    fn test_rejects_cost_not_above_growth() {
        let roe = Rate::from_percent(12.0);
        assert!(fair_price_to_book(roe, Rate::from_percent(5.0), Rate::from_percent(5.0)).is_err());
        assert!(fair_price_to_book(roe, Rate::from_percent(4.0), Rate::from_percent(6.0)).is_err());
    }

    #[test]
    fn test_idempotent() {
        let args = (
            Rate::from_percent(12.0),
            Rate::from_percent(10.0),
            Rate::from_percent(4.0),
        );
        let a = fair_price_to_book(args.0, args.1, args.2).unwrap();
        let b = fair_price_to_book(args.0, args.1, args.2).unwrap();
        assert_eq!(a.to_bits(), b.to_bits());
    }
}
