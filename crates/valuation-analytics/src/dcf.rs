//! Discounted cash flow.
//!
//! ## Formula
//!
//! ```text
//! PV = Σ CF_t / (1 + r)^t        t = 1..N
//! ```
//!
//! In single-flow mode the yearly flow grows from a base amount:
//! `CF_t = CF × (1 + g)^t`.

use valuation_core::types::{CashFlowSeries, Rate};

/// Present value of a flow growing at `growth` for `years` years.
///
/// Year `t` contributes `cash_flow × (1+growth)^t / (1+discount)^t`.
/// Zero years is the empty sum.
///
/// # Example
///
/// ```rust
/// use valuation_analytics::dcf::discounted_growing_flow;
/// use valuation_core::Rate;
///
/// let pv = discounted_growing_flow(100.0, Rate::ZERO, Rate::ZERO, 3);
/// assert!((pv - 300.0).abs() < 1e-9);
/// ```
pub fn discounted_growing_flow(cash_flow: f64, growth: Rate, discount: Rate, years: u32) -> f64 {
    let pv: f64 = (1..=years)
        .map(|t| cash_flow * growth.compound(t) / discount.compound(t))
        .sum();
    log::debug!(
        "dcf: cash_flow={cash_flow} growth={growth} discount={discount} years={years} pv={pv}"
    );
    pv
}

/// Per-year present values of an explicit series.
pub fn present_values(series: &CashFlowSeries, discount: Rate) -> Vec<f64> {
    series
        .iter_years()
        .map(|(t, cf)| cf / discount.compound(t))
        .collect()
}

/// Present value of an explicit series: each flow discounted by its 1-based year.
pub fn present_value(series: &CashFlowSeries, discount: Rate) -> f64 {
    let pv: f64 = present_values(series, discount).iter().sum();
    log::debug!(
        "dcf: horizon={} discount={discount} pv={pv}",
        series.horizon()
    );
    pv
}
