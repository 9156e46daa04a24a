//! Annual cash flow series.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::ValuationResult;
use crate::guards::require_non_empty;

/// An ordered series of annual cash flows.
///
/// Position `i` (0-based) holds the flow for year `i + 1`. A series always
/// holds at least one flow, so the last flow and the horizon are always
/// defined.
///
/// # Example
///
/// ```rust
/// use valuation_core::types::CashFlowSeries;
///
/// let series = CashFlowSeries::new(vec![-50.0, 20.0, 24.0]).unwrap();
/// assert_eq!(series.horizon(), 3);
/// assert_eq!(series.last(), 24.0);
/// assert!(CashFlowSeries::new(vec![]).is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<f64>", into = "Vec<f64>")]
pub struct CashFlowSeries {
    flows: Vec<f64>,
}

impl CashFlowSeries {
    /// Creates a series from per-year flows.
    ///
    /// # Errors
    ///
    /// Returns `ValuationError::InvalidParameters` if `flows` is empty.
    pub fn new(flows: Vec<f64>) -> ValuationResult<Self> {
        require_non_empty(flows.len(), "cash flow series")?;
        Ok(Self { flows })
    }

    /// Number of years covered by the series.
    pub fn horizon(&self) -> u32 {
        self.flows.len() as u32
    }

    /// The final year's flow.
    pub fn last(&self) -> f64 {
        // Non-empty by construction.
        self.flows[self.flows.len() - 1]
    }

    /// The flows as a slice.
    pub fn as_slice(&self) -> &[f64] {
        &self.flows
    }

    /// Iterates `(year, flow)` pairs with 1-based years.
    pub fn iter_years(&self) -> impl Iterator<Item = (u32, f64)> + '_ {
        self.flows
            .iter()
            .enumerate()
            .map(|(i, &cf)| (i as u32 + 1, cf))
    }
}

impl TryFrom<Vec<f64>> for CashFlowSeries {
    type Error = crate::error::ValuationError;

    fn try_from(flows: Vec<f64>) -> Result<Self, Self::Error> {
        Self::new(flows)
    }
}

impl From<CashFlowSeries> for Vec<f64> {
    fn from(series: CashFlowSeries) -> Self {
        series.flows
    }
}

impl fmt::Display for CashFlowSeries {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, cf) in self.flows.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{cf:.2}")?;
        }
        write!(f, "]")
    }
}
