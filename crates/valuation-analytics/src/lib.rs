//! # Valuation Analytics
//!
//! Closed-form company valuation formulas.
//!
//! - **DCF**: Growing single-flow and explicit-series present value
//! - **Growth**: Startup / expansion / maturity cash flow projection
//! - **Terminal Value**: Gordon growth perpetuity, discounted to today
//! - **Intrinsic Value**: Explicit projection plus terminal value
//! - **Relative**: Target multiple against peer median and spread
//! - **DDM**: Constant-growth dividend discount model
//! - **Fair P/BV**: Justified price-to-book for financial companies
//! - **Normalized P/E**: Cycle-adjusted earnings multiple
//!
//! Every evaluator is a pure function. Those that divide by `r − g` or by a
//! user-supplied profit return `ValuationError::InvalidParameters` when the
//! divisor would be zero or negative.
//!
//! ## Usage
//!
//! ```rust
//! use valuation_analytics::prelude::*;
//!
//! let share = dividend_discount(2.0, Rate::from_percent(8.0), Rate::from_percent(2.0)).unwrap();
//! assert!((share.value - 34.0).abs() < 1e-9);
//!
//! let pbv = fair_price_to_book(
//!     Rate::from_percent(12.0),
//!     Rate::from_percent(10.0),
//!     Rate::from_percent(4.0),
//! ).unwrap();
//! assert!((pbv - 1.3333).abs() < 1e-4);
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod dcf;
pub mod ddm;
pub mod growth;
pub mod intrinsic;
pub mod normalized_pe;
pub mod pbv;
pub mod projection;
pub mod relative;
pub mod scenario;
pub mod terminal;
pub mod topic;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use valuation_core::prelude::*;

    pub use crate::dcf::{discounted_growing_flow, present_value, present_values};
    pub use crate::ddm::{dividend_discount, DividendValuation};
    pub use crate::growth::{GrowthPhases, Phase};
    pub use crate::intrinsic::{growth_company_value, intrinsic_value, IntrinsicValue};
    pub use crate::normalized_pe::{normalized_pe, NormalizedPe};
    pub use crate::pbv::fair_price_to_book;
    pub use crate::projection::{price_vs_value, ValuePoint};
    pub use crate::relative::{compare, Classification, RelativeComparison};
    pub use crate::scenario::Scenario;
    pub use crate::terminal::{terminal_value, terminal_value_at, terminal_value_pv, TerminalValue};
    pub use crate::topic::{Calculator, Topic};
}
