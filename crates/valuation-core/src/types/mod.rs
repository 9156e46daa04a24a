//! Domain types for valuation calculations.
//!
//! Newtypes keep percentages, decimal rates, and raw amounts from being
//! mixed up at call sites.

mod cashflow;
mod peers;
mod rate;

pub use cashflow::CashFlowSeries;
pub use peers::PeerMultipleSet;
pub use rate::Rate;
