//! Normalized P/E for cyclical companies.
//!
//! A cyclical company at the top of its cycle looks cheap on current
//! earnings. Re-basing the price on average profit over a full cycle
//! removes that distortion:
//!
//! ```text
//! Market Price  = Current Profit × Current P/E
//! Normalized PE = Market Price / Normalized Profit
//! ```

use serde::{Deserialize, Serialize};

use valuation_core::error::ValuationResult;
use valuation_core::guards::require_positive;

/// Market price implied by the current multiple, and the cycle-adjusted P/E.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NormalizedPe {
    /// `current_profit × current_pe`.
    pub market_price: f64,
    /// `market_price / normalized_profit`.
    pub normalized_pe: f64,
}

/// Re-bases the current P/E on cycle-average profit.
///
/// # Errors
///
/// Returns `ValuationError::InvalidParameters` unless `normalized_profit > 0`.
///
/// # Example
///
/// ```rust
/// use valuation_analytics::normalized_pe::normalized_pe;
///
/// let pe = normalized_pe(10.0, 8.0, 6.0).unwrap();
/// assert_eq!(pe.market_price, 80.0);
/// assert!((pe.normalized_pe - 13.333).abs() < 1e-3);
/// ```
pub fn normalized_pe(
    current_profit: f64,
    current_pe: f64,
    normalized_profit: f64,
) -> ValuationResult<NormalizedPe> {
    let divisor = require_positive(normalized_profit, "normalized profit")?;
    let market_price = current_profit * current_pe;
    let normalized_pe = market_price / divisor;
    log::debug!("normalized P/E: price={market_price} avg_profit={divisor} pe={normalized_pe}");
    Ok(NormalizedPe {
        market_price,
        normalized_pe,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_peak_cycle_example() {
        let pe = normalized_pe(10.0, 8.0, 6.0).unwrap();
        assert_relative_eq!(pe.market_price, 80.0);
        assert_relative_eq!(pe.normalized_pe, 80.0 / 6.0, epsilon = 1e-12);
    }

    #[test]
    fn test_trough_profit_lowers_pe() {
        let pe = normalized_pe(4.0, 20.0, 8.0).unwrap();
        assert_relative_eq!(pe.normalized_pe, 10.0);
    }

    #[test]
    fn test_rejects_non_positive_normalized_profit() {
        let err = normalized_pe(10.0, 8.0, 0.0).unwrap_err();
        assert!(err.reason().contains("normalized profit"));
        assert!(normalized_pe(10.0, 8.0, -2.0).is_err());
    }

    #[test]
    fn test_idempotent() {
        assert_eq!(
            normalized_pe(10.0, 8.0, 6.0).unwrap(),
            normalized_pe(10.0, 8.0, 6.0).unwrap()
        );
    }
}
