//! Input bounds for the calculator front ends.
//!
//! Each interactive parameter has a documented range, default, and step.
//! The evaluators never range-check; keeping inputs inside these bounds is
//! the caller's job, and [`InputBounds::check`] is the helper for it.

use serde::Serialize;
use std::fmt;
use thiserror::Error;

/// Unit an input is expressed in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum InputUnit {
    /// Monetary amount.
    Currency,
    /// Percentage (`5.0` for 5%).
    Percent,
    /// Whole years.
    Years,
    /// Whole count.
    Count,
    /// Valuation multiple (P/E, P/BV).
    Multiple,
}

impl fmt::Display for InputUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            InputUnit::Currency => "currency",
            InputUnit::Percent => "%",
            InputUnit::Years => "years",
            InputUnit::Count => "count",
            InputUnit::Multiple => "x",
        };
        write!(f, "{name}")
    }
}

/// Range, default, and step of one calculator input.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct InputBounds {
    /// Stable key, matching the CLI flag name.
    pub key: &'static str,
    /// Human-readable label.
    pub label: &'static str,
    /// Inclusive lower bound, if any.
    pub min: Option<f64>,
    /// Inclusive upper bound, if any.
    pub max: Option<f64>,
    /// Default value.
    pub default: f64,
    /// Suggested increment.
    pub step: f64,
    /// Unit of the value.
    pub unit: InputUnit,
}

/// A value fell outside its documented bounds.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("{label} = {value} is outside [{min}, {max}]")]
pub struct OutOfBounds {
    /// Label of the offending input.
    pub label: &'static str,
    /// The rejected value.
    pub value: f64,
    /// Rendered lower bound.
    pub min: String,
    /// Rendered upper bound.
    pub max: String,
}

impl InputBounds {
    const fn new(
        key: &'static str,
        label: &'static str,
        min: Option<f64>,
        max: Option<f64>,
        default: f64,
        step: f64,
        unit: InputUnit,
    ) -> Self {
        Self {
            key,
            label,
            min,
            max,
            default,
            step,
            unit,
        }
    }

    /// Returns `value` if it lies within the bounds.
    ///
    /// # Errors
    ///
    /// Returns [`OutOfBounds`] when `value` is below `min`, above `max`, or NaN.
    pub fn check(&self, value: f64) -> Result<f64, OutOfBounds> {
        let above_min = self.min.map_or(true, |min| value >= min);
        let below_max = self.max.map_or(true, |max| value <= max);
        if above_min && below_max && !value.is_nan() {
            return Ok(value);
        }
        Err(OutOfBounds {
            label: self.label,
            value,
            min: self.min.map_or_else(|| "-inf".to_string(), |v| v.to_string()),
            max: self.max.map_or_else(|| "inf".to_string(), |v| v.to_string()),
        })
    }

    /// Checks a whole-number input such as a year count.
    ///
    /// # Errors
    ///
    /// Returns [`OutOfBounds`] when `value` is outside the bounds.
    pub fn check_count(&self, value: u32) -> Result<u32, OutOfBounds> {
        self.check(f64::from(value)).map(|_| value)
    }
}

// ---- Valuing a company: simple DCF ----

/// Expected annual cash flow for the simple DCF.
pub const DCF_CASH_FLOW: InputBounds = InputBounds::new(
    "cash-flow",
    "Expected Annual Cash Flow",
    None,
    None,
    100_000.0,
    10_000.0,
    InputUnit::Currency,
);

/// Growth rate for the simple DCF.
pub const DCF_GROWTH: InputBounds = InputBounds::new(
    "growth",
    "Growth Rate",
    Some(0.0),
    Some(20.0),
    5.0,
    0.1,
    InputUnit::Percent,
);

/// Discount rate shared by the DCF and intrinsic value calculators.
pub const DISCOUNT_RATE: InputBounds = InputBounds::new(
    "discount",
    "Discount Rate",
    Some(0.0),
    Some(20.0),
    10.0,
    0.1,
    InputUnit::Percent,
);

/// Projection period for the simple DCF.
pub const DCF_YEARS: InputBounds = InputBounds::new(
    "years",
    "Projection Period",
    Some(1.0),
    Some(20.0),
    10.0,
    1.0,
    InputUnit::Years,
);

// ---- Intrinsic value: explicit flows + terminal value ----

/// Number of explicitly projected years.
pub const PROJECTION_YEARS: InputBounds = InputBounds::new(
    "projection-years",
    "Number of projection years",
    Some(1.0),
    Some(20.0),
    5.0,
    1.0,
    InputUnit::Years,
);

/// Estimated cash flow for each projected year.
pub const YEARLY_CASH_FLOW: InputBounds = InputBounds::new(
    "flows",
    "Estimated Cash Flow per Year",
    None,
    None,
    100_000.0,
    5_000.0,
    InputUnit::Currency,
);

/// Perpetual growth rate used for the terminal value.
pub const PERPETUAL_GROWTH: InputBounds = InputBounds::new(
    "perpetual-growth",
    "Perpetual Growth Rate",
    Some(0.0),
    Some(10.0),
    3.0,
    0.1,
    InputUnit::Percent,
);

// ---- Relative valuation ----

/// Target company's multiple.
pub const TARGET_MULTIPLE: InputBounds = InputBounds::new(
    "target",
    "Target P/E",
    Some(0.0),
    None,
    10.0,
    0.1,
    InputUnit::Multiple,
);

/// Number of peer companies.
pub const PEER_COUNT: InputBounds = InputBounds::new(
    "peer-count",
    "Number of peer companies",
    Some(1.0),
    Some(20.0),
    3.0,
    1.0,
    InputUnit::Count,
);

/// Each peer's multiple.
pub const PEER_MULTIPLE: InputBounds = InputBounds::new(
    "peers",
    "Peer P/E",
    Some(0.0),
    None,
    12.0,
    0.1,
    InputUnit::Multiple,
);

// ---- Growth companies ----

/// Years of startup losses.
pub const STARTUP_YEARS: InputBounds = InputBounds::new(
    "startup-years",
    "Years in Startup Phase",
    Some(0.0),
    Some(10.0),
    3.0,
    1.0,
    InputUnit::Years,
);

/// Years of expansion.
pub const EXPANSION_YEARS: InputBounds = InputBounds::new(
    "expansion-years",
    "Years in Expansion Phase",
    Some(1.0),
    Some(10.0),
    3.0,
    1.0,
    InputUnit::Years,
);

/// Years of maturity.
pub const MATURITY_YEARS: InputBounds = InputBounds::new(
    "maturity-years",
    "Years in Maturity Phase",
    Some(1.0),
    Some(20.0),
    2.0,
    1.0,
    InputUnit::Years,
);

/// Average annual cash flow during startup (usually negative).
pub const STARTUP_CASH_FLOW: InputBounds = InputBounds::new(
    "startup-cash-flow",
    "Average Annual Cash Flow in Startup Phase",
    None,
    None,
    -50_000.0,
    1_000.0,
    InputUnit::Currency,
);

/// Cash flow in the first expansion year.
pub const EXPANSION_INITIAL_CASH_FLOW: InputBounds = InputBounds::new(
    "expansion-cash-flow",
    "Cash Flow at the Start of Expansion Phase",
    None,
    None,
    20_000.0,
    1_000.0,
    InputUnit::Currency,
);

/// Annual growth during expansion.
pub const EXPANSION_GROWTH: InputBounds = InputBounds::new(
    "expansion-growth",
    "Annual Growth Rate during Expansion Phase",
    Some(0.0),
    Some(50.0),
    20.0,
    0.1,
    InputUnit::Percent,
);

/// Annual growth during maturity (also the terminal growth).
pub const MATURITY_GROWTH: InputBounds = InputBounds::new(
    "maturity-growth",
    "Annual Growth Rate during Maturity Phase",
    Some(0.0),
    Some(20.0),
    5.0,
    0.1,
    InputUnit::Percent,
);

/// Discount rate override for the growth company valuation.
///
/// The default is the realistic scenario's rate.
pub const GROWTH_DISCOUNT: InputBounds = InputBounds::new(
    "growth-discount",
    "Growth Company Discount Rate",
    Some(0.0),
    Some(50.0),
    15.0,
    0.5,
    InputUnit::Percent,
);

// ---- Mature companies: DDM ----

/// Current dividend per share (D0).
pub const DIVIDEND: InputBounds = InputBounds::new(
    "dividend",
    "Dividend per Share (D0)",
    None,
    None,
    2.0,
    0.1,
    InputUnit::Currency,
);

/// DDM discount rate.
pub const DDM_DISCOUNT: InputBounds = InputBounds::new(
    "discount",
    "Discount Rate (r)",
    None,
    None,
    8.0,
    0.5,
    InputUnit::Percent,
);

/// DDM dividend growth rate.
pub const DDM_GROWTH: InputBounds = InputBounds::new(
    "growth",
    "Growth Rate (g)",
    None,
    None,
    2.0,
    0.5,
    InputUnit::Percent,
);

// ---- Cyclical companies: normalized P/E ----

/// Current profit.
pub const CURRENT_PROFIT: InputBounds = InputBounds::new(
    "current-profit",
    "Current Profit",
    Some(0.0),
    None,
    10.0,
    0.5,
    InputUnit::Currency,
);

/// Average profit over the cycle.
pub const NORMALIZED_PROFIT: InputBounds = InputBounds::new(
    "normalized-profit",
    "Average Profit over the Last 10 Years",
    Some(0.0),
    None,
    6.0,
    0.5,
    InputUnit::Currency,
);

/// Current P/E.
pub const CURRENT_PE: InputBounds = InputBounds::new(
    "current-pe",
    "Current P/E",
    Some(0.0),
    None,
    8.0,
    0.1,
    InputUnit::Multiple,
);

// ---- Financial companies: fair P/BV ----

/// Return on equity.
pub const ROE: InputBounds = InputBounds::new(
    "roe",
    "Return on Equity",
    None,
    None,
    12.0,
    0.5,
    InputUnit::Percent,
);

/// Cost of capital.
pub const COST_OF_CAPITAL: InputBounds = InputBounds::new(
    "cost-of-capital",
    "Cost of Capital (r)",
    None,
    None,
    10.0,
    0.5,
    InputUnit::Percent,
);

/// Expected growth for the fair P/BV formula.
pub const EXPECTED_GROWTH: InputBounds = InputBounds::new(
    "growth",
    "Expected Growth Rate (g)",
    None,
    None,
    4.0,
    0.5,
    InputUnit::Percent,
);

/// Every documented input, grouped by calculator.
pub fn catalogue() -> &'static [InputBounds] {
    &[
        DCF_CASH_FLOW,
        DCF_GROWTH,
        DISCOUNT_RATE,
        DCF_YEARS,
        PROJECTION_YEARS,
        YEARLY_CASH_FLOW,
        PERPETUAL_GROWTH,
        TARGET_MULTIPLE,
        PEER_COUNT,
        PEER_MULTIPLE,
        STARTUP_YEARS,
        EXPANSION_YEARS,
        MATURITY_YEARS,
        STARTUP_CASH_FLOW,
        EXPANSION_INITIAL_CASH_FLOW,
        EXPANSION_GROWTH,
        MATURITY_GROWTH,
        GROWTH_DISCOUNT,
        DIVIDEND,
        DDM_DISCOUNT,
        DDM_GROWTH,
        CURRENT_PROFIT,
        NORMALIZED_PROFIT,
        CURRENT_PE,
        ROE,
        COST_OF_CAPITAL,
        EXPECTED_GROWTH,
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_within_bounds() {
        assert_eq!(DISCOUNT_RATE.check(0.0).unwrap(), 0.0);
        assert_eq!(DISCOUNT_RATE.check(20.0).unwrap(), 20.0);
    }

    #[test]
    fn test_check_outside_bounds() {
        let err = PERPETUAL_GROWTH.check(10.5).unwrap_err();
        assert_eq!(err.label, "Perpetual Growth Rate");
        assert!(err.to_string().contains("[0, 10]"));
        assert!(DCF_GROWTH.check(-0.1).is_err());
        assert!(DCF_GROWTH.check(f64::NAN).is_err());
    }

    #[test]
    fn test_unbounded_side() {
        assert!(STARTUP_CASH_FLOW.check(-1e9).is_ok());
        let err = TARGET_MULTIPLE.check(-1.0).unwrap_err();
        assert_eq!(err.max, "inf");
    }

    #[test]
    fn test_check_count() {
        assert_eq!(PEER_COUNT.check_count(20).unwrap(), 20);
        assert!(PEER_COUNT.check_count(0).is_err());
        assert!(STARTUP_YEARS.check_count(0).is_ok());
    }

    #[test]
    fn test_growth_discount_range() {
        for percent in [12.0, 15.0, 18.0] {
            assert!(GROWTH_DISCOUNT.check(percent).is_ok());
        }
        assert!(GROWTH_DISCOUNT.check(500.0).is_err());
        assert!(GROWTH_DISCOUNT.check(-1.0).is_err());
    }

    #[test]
    fn test_defaults_lie_within_bounds() {
        for bounds in catalogue() {
            assert!(
                bounds.check(bounds.default).is_ok(),
                "default of {} out of bounds",
                bounds.key
            );
        }
    }
}
