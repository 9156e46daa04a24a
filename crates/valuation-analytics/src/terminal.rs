//! Terminal value (Gordon growth).
//!
//! ## Formula
//!
//! ```text
//! TV    = CF_N × (1 + g) / (r − g)
//! PV_TV = TV / (1 + r)^N
//! ```
//!
//! Requires `r > g`; otherwise the perpetuity does not converge.

use serde::{Deserialize, Serialize};

use valuation_core::error::ValuationResult;
use valuation_core::guards::require_strictly_greater;
use valuation_core::types::{CashFlowSeries, Rate};

/// Terminal value at the horizon and discounted to today.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TerminalValue {
    /// Value of all flows beyond the horizon, as of the horizon.
    pub undiscounted: f64,
    /// `undiscounted` discounted back `horizon_years` years.
    pub present_value: f64,
    /// Number of explicitly projected years.
    pub horizon_years: u32,
}

/// Undiscounted Gordon-growth terminal value of `last_cash_flow`.
///
/// # Errors
///
/// Returns `ValuationError::InvalidParameters` unless `discount > growth`.
pub fn terminal_value(last_cash_flow: f64, growth: Rate, discount: Rate) -> ValuationResult<f64> {
    let spread = require_strictly_greater(discount, growth, "terminal value")?;
    Ok(last_cash_flow * growth.factor() / spread)
}

/// Terminal value of `last_cash_flow` discounted over `horizon_years`.
///
/// # Errors
///
/// Returns `ValuationError::InvalidParameters` unless `discount > growth`.
pub fn terminal_value_at(
    last_cash_flow: f64,
    growth: Rate,
    discount: Rate,
    horizon_years: u32,
) -> ValuationResult<TerminalValue> {
    let undiscounted = terminal_value(last_cash_flow, growth, discount)?;
    let present_value = undiscounted / discount.compound(horizon_years);
    log::debug!(
        "terminal value: last_cf={last_cash_flow} g={growth} r={discount} n={horizon_years} tv={undiscounted} pv={present_value}"
    );
    Ok(TerminalValue {
        undiscounted,
        present_value,
        horizon_years,
    })
}

/// Terminal value of a series: based on its last flow, discounted over its horizon.
///
/// # Errors
///
/// Returns `ValuationError::InvalidParameters` unless `discount > growth`.
///
/// # Example
///
/// ```rust
/// use valuation_analytics::terminal::terminal_value_pv;
/// use valuation_core::{CashFlowSeries, Rate};
///
/// let series = CashFlowSeries::new(vec![100.0]).unwrap();
/// let tv = terminal_value_pv(&series, Rate::from_percent(2.0), Rate::from_percent(12.0)).unwrap();
/// assert!((tv.undiscounted - 1020.0).abs() < 1e-9);
/// assert!(terminal_value_pv(&series, Rate::from_percent(5.0), Rate::from_percent(5.0)).is_err());
/// ```
pub fn terminal_value_pv(
    series: &CashFlowSeries,
    growth: Rate,
    discount: Rate,
) -> ValuationResult<TerminalValue> {
    terminal_value_at(series.last(), growth, discount, series.horizon())
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_terminal_value() {
        // 100 × 1.03 / (0.10 − 0.03)
        let tv = terminal_value(100.0, Rate::from_percent(3.0), Rate::from_percent(10.0)).unwrap();
        assert_relative_eq!(tv, 103.0 / 0.07, epsilon = 1e-9);
    }

    #[test]
    fn test_discounted_over_series_horizon() {
        let series = CashFlowSeries::new(vec![100_000.0; 5]).unwrap();
        let tv = terminal_value_pv(&series, Rate::from_percent(3.0), Rate::from_percent(10.0))
            .unwrap();
        assert_eq!(tv.horizon_years, 5);
        assert_relative_eq!(tv.undiscounted, 1_471_428.571_428, epsilon = 1e-3);
        assert_relative_eq!(
            tv.present_value,
            tv.undiscounted / 1.1_f64.powi(5),
            epsilon = 1e-6
        );
    }

    #[test]
    fn test_equal_rates_invalid() {
        let err = terminal_value(100.0, Rate::from_percent(5.0), Rate::from_percent(5.0))
            .unwrap_err();
        assert!(err.reason().starts_with("terminal value"));
    }

    #[test]
    fn test_growth_above_discount_invalid() {
        assert!(terminal_value(100.0, Rate::from_percent(6.0), Rate::from_percent(4.0)).is_err());
        assert!(
            terminal_value_at(100.0, Rate::from_percent(6.0), Rate::from_percent(4.0), 3).is_err()
        );
    }

    #[test]
    fn test_idempotent() {
        let series = CashFlowSeries::new(vec![1.0, 2.0, 3.0]).unwrap();
        let a = terminal_value_pv(&series, Rate::from_percent(2.0), Rate::from_percent(9.0));
        let b = terminal_value_pv(&series, Rate::from_percent(2.0), Rate::from_percent(9.0));
        assert_eq!(a, b);
    }
}
