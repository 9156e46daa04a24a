//! Intrinsic value: explicit projection plus terminal value.
//!
//! ```text
//! Intrinsic Value = Σ CF_t / (1 + r)^t  +  TV / (1 + r)^N
//! ```

use serde::{Deserialize, Serialize};

use crate::dcf::present_value;
use crate::growth::GrowthPhases;
use crate::terminal::{terminal_value_pv, TerminalValue};
use valuation_core::error::ValuationResult;
use valuation_core::types::{CashFlowSeries, Rate};

/// Breakdown of an intrinsic value estimate.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct IntrinsicValue {
    /// Present value of the explicit projection.
    pub present_value: f64,
    /// Terminal value of the flows beyond the projection.
    pub terminal: TerminalValue,
    /// `present_value + terminal.present_value`.
    pub total: f64,
}

impl IntrinsicValue {
    /// Share of the total that comes from the terminal value.
    ///
    /// Usually large; a reminder of how sensitive DCF is to `g`.
    pub fn terminal_share(&self) -> f64 {
        self.terminal.present_value / self.total
    }
}

/// Intrinsic value of an explicit series with a perpetual-growth tail.
///
/// # Errors
///
/// Returns `ValuationError::InvalidParameters` unless `discount > perpetual_growth`.
pub fn intrinsic_value(
    series: &CashFlowSeries,
    discount: Rate,
    perpetual_growth: Rate,
) -> ValuationResult<IntrinsicValue> {
    let terminal = terminal_value_pv(series, perpetual_growth, discount)?;
    let present_value = present_value(series, discount);
    let total = present_value + terminal.present_value;
    log::debug!("intrinsic value: pv={present_value} tv_pv={} total={total}", terminal.present_value);
    Ok(IntrinsicValue {
        present_value,
        terminal,
        total,
    })
}

/// Intrinsic value of a growth company; the maturity growth rate doubles as
/// the perpetual growth rate.
///
/// # Errors
///
/// Returns `ValuationError::InvalidParameters` when every phase is empty or
/// unless `discount > phases.maturity_growth`.
pub fn growth_company_value(
    phases: &GrowthPhases,
    discount: Rate,
) -> ValuationResult<(CashFlowSeries, IntrinsicValue)> {
    let series = phases.build()?;
    let value = intrinsic_value(&series, discount, phases.maturity_growth)?;
    Ok((series, value))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_explicit_flows() {
        let series = CashFlowSeries::new(vec![100_000.0; 5]).unwrap();
        let value = intrinsic_value(&series, Rate::from_percent(10.0), Rate::from_percent(3.0))
            .unwrap();

        let pv: f64 = (1..=5).map(|t| 100_000.0 / 1.1_f64.powi(t)).sum();
        let tv_pv = 100_000.0 * 1.03 / 0.07 / 1.1_f64.powi(5);
        assert_relative_eq!(value.present_value, pv, epsilon = 1e-6);
        assert_relative_eq!(value.terminal.present_value, tv_pv, epsilon = 1e-6);
        assert_relative_eq!(value.total, pv + tv_pv, epsilon = 1e-6);
        assert!(value.terminal_share() > 0.5);
    }

    #[test]
    fn test_invalid_when_growth_reaches_discount() {
        let series = CashFlowSeries::new(vec![1.0]).unwrap();
        assert!(intrinsic_value(&series, Rate::from_percent(3.0), Rate::from_percent(3.0)).is_err());
    }

    #[test]
    fn test_growth_company_defaults() {
        let (series, value) =
            growth_company_value(&GrowthPhases::default(), Rate::from_percent(15.0)).unwrap();
        assert_eq!(series.horizon(), 8);

        let expected_tv = 31_752.0 * 1.05 / 0.10 / 1.15_f64.powi(8);
        assert_relative_eq!(value.terminal.present_value, expected_tv, epsilon = 1e-3);
        assert_eq!(value.terminal.horizon_years, 8);
    }

    #[test]
    fn test_growth_company_rejects_maturity_growth_at_discount() {
        let phases = GrowthPhases {
            maturity_growth: Rate::from_percent(15.0),
            ..GrowthPhases::default()
        };
        assert!(growth_company_value(&phases, Rate::from_percent(15.0)).is_err());
    }

    #[test]
    fn test_idempotent() {
        let series = CashFlowSeries::new(vec![80.0, 95.0, 110.0]).unwrap();
        let a = intrinsic_value(&series, Rate::from_percent(9.0), Rate::from_percent(2.5)).unwrap();
        let b = intrinsic_value(&series, Rate::from_percent(9.0), Rate::from_percent(2.5)).unwrap();
        assert_eq!(a, b);
        assert_eq!(a.total.to_bits(), b.total.to_bits());
    }
}
