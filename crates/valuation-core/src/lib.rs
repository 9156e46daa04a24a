//! # Valuation Core
//!
//! Core types, guards, and abstractions for the Valuation formula toolkit.
//!
//! This crate provides the foundational building blocks used by the evaluators:
//!
//! - **Types**: `Rate`, `CashFlowSeries`, `PeerMultipleSet`
//! - **Guards**: Shared precondition checks (`r > g`, positive divisors)
//! - **Bounds**: Documented min/max/default/step for every calculator input
//! - **Formatting**: Two-decimal currency, percentage, and ratio rendering
//!
//! ## Example
//!
//! ```rust
//! use valuation_core::prelude::*;
//!
//! let discount = Rate::from_percent(8.0);
//! let growth = Rate::from_percent(2.0);
//! assert!(require_strictly_greater(discount, growth, "dividend discount").is_ok());
//!
//! let flows = CashFlowSeries::new(vec![100.0, 110.0]).unwrap();
//! assert_eq!(flows.horizon(), 2);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::float_cmp)]

pub mod bounds;
pub mod error;
pub mod format;
pub mod guards;
pub mod types;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::bounds::InputBounds;
    pub use crate::error::{ValuationError, ValuationResult};
    pub use crate::guards::{require_non_empty, require_positive, require_strictly_greater};
    pub use crate::types::{CashFlowSeries, PeerMultipleSet, Rate};
}

// Re-export commonly used types at crate root
pub use error::{ValuationError, ValuationResult};
pub use types::{CashFlowSeries, PeerMultipleSet, Rate};
