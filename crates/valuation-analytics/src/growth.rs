//! Multi-phase cash flow projection for growth companies.
//!
//! A growth company is modelled as three consecutive phases:
//!
//! 1. **Startup**: a constant (usually negative) flow every year.
//! 2. **Expansion**: starts at an initial flow and compounds at the
//!    expansion growth rate.
//! 3. **Maturity**: compounds at the maturity growth rate from the last
//!    flow of the preceding phases.
//!
//! When the expansion phase is empty, maturity compounds from the last
//! startup flow; when both earlier phases are empty it compounds from the
//! expansion initial flow.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter;

use valuation_core::error::ValuationResult;
use valuation_core::guards::require_non_empty;
use valuation_core::types::{CashFlowSeries, Rate};

/// Lifecycle phase of a projected year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Phase {
    /// Loss-making launch years.
    Startup,
    /// Rapid growth years.
    Expansion,
    /// Stable growth years.
    Maturity,
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Phase::Startup => "Startup",
            Phase::Expansion => "Expansion",
            Phase::Maturity => "Maturity",
        };
        write!(f, "{name}")
    }
}

/// Phase lengths and per-phase parameters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GrowthPhases {
    /// Years in the startup phase.
    pub startup_years: u32,
    /// Flow repeated every startup year.
    pub startup_cash_flow: f64,
    /// Years in the expansion phase.
    pub expansion_years: u32,
    /// Flow in the first expansion year.
    pub expansion_initial_cash_flow: f64,
    /// Year-over-year growth during expansion.
    pub expansion_growth: Rate,
    /// Years in the maturity phase.
    pub maturity_years: u32,
    /// Year-over-year growth during maturity.
    pub maturity_growth: Rate,
}

impl Default for GrowthPhases {
    fn default() -> Self {
        Self {
            startup_years: 3,
            startup_cash_flow: -50_000.0,
            expansion_years: 3,
            expansion_initial_cash_flow: 20_000.0,
            expansion_growth: Rate::from_percent(20.0),
            maturity_years: 2,
            maturity_growth: Rate::from_percent(5.0),
        }
    }
}

impl GrowthPhases {
    /// Total projection horizon in years.
    pub fn total_years(&self) -> u32 {
        self.startup_years + self.expansion_years + self.maturity_years
    }

    /// Phase that a 1-based `year` falls in, or `None` past the horizon.
    pub fn phase_of(&self, year: u32) -> Option<Phase> {
        match year {
            0 => None,
            y if y <= self.startup_years => Some(Phase::Startup),
            y if y <= self.startup_years + self.expansion_years => Some(Phase::Expansion),
            y if y <= self.total_years() => Some(Phase::Maturity),
            _ => None,
        }
    }

    /// Builds the concatenated series of length [`total_years`](Self::total_years).
    ///
    /// # Errors
    ///
    /// Returns `ValuationError::InvalidParameters` when every phase is empty.
    ///
    /// # Example
    ///
    /// ```rust
    /// use valuation_analytics::growth::GrowthPhases;
    ///
    /// let series = GrowthPhases::default().build().unwrap();
    /// assert_eq!(series.horizon(), 8);
    /// assert_eq!(series.as_slice()[0], -50_000.0);
    /// ```
    pub fn build(&self) -> ValuationResult<CashFlowSeries> {
        require_non_empty(
            self.total_years() as usize,
            "growth projection (startup + expansion + maturity years)",
        )?;

        let mut flows = Vec::with_capacity(self.total_years() as usize);
        flows.extend(iter::repeat(self.startup_cash_flow).take(self.startup_years as usize));

        let mut cf = self.expansion_initial_cash_flow;
        for year in 0..self.expansion_years {
            if year > 0 {
                cf *= self.expansion_growth.factor();
            }
            flows.push(cf);
        }

        let mut anchor = flows
            .last()
            .copied()
            .unwrap_or(self.expansion_initial_cash_flow);
        for _ in 0..self.maturity_years {
            anchor *= self.maturity_growth.factor();
            flows.push(anchor);
        }

        log::debug!(
            "growth: built {} years ({} startup, {} expansion, {} maturity)",
            flows.len(),
            self.startup_years,
            self.expansion_years,
            self.maturity_years
        );
        CashFlowSeries::new(flows)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn assert_series(actual: &CashFlowSeries, expected: &[f64]) {
        assert_eq!(actual.as_slice().len(), expected.len());
        for (a, e) in actual.as_slice().iter().zip(expected) {
            assert_relative_eq!(*a, *e, epsilon = 1e-6);
        }
    }

    #[test]
    fn test_three_phase_example() {
        let series = GrowthPhases::default().build().unwrap();
        assert_series(
            &series,
            &[
                -50_000.0, -50_000.0, -50_000.0, 20_000.0, 24_000.0, 28_800.0, 30_240.0, 31_752.0,
            ],
        );
    }

    #[test]
    fn test_zero_expansion_continues_from_startup() {
        let phases = GrowthPhases {
            startup_years: 2,
            startup_cash_flow: 1_000.0,
            expansion_years: 0,
            maturity_years: 2,
            maturity_growth: Rate::from_percent(10.0),
            ..GrowthPhases::default()
        };
        let series = phases.build().unwrap();
        assert_series(&series, &[1_000.0, 1_000.0, 1_100.0, 1_210.0]);
    }

    #[test]
    fn test_only_maturity_anchors_on_expansion_initial() {
        let phases = GrowthPhases {
            startup_years: 0,
            expansion_years: 0,
            expansion_initial_cash_flow: 100.0,
            maturity_years: 1,
            maturity_growth: Rate::from_percent(5.0),
            ..GrowthPhases::default()
        };
        assert_series(&phases.build().unwrap(), &[105.0]);
    }

    #[test]
    fn test_no_startup() {
        let phases = GrowthPhases {
            startup_years: 0,
            ..GrowthPhases::default()
        };
        let series = phases.build().unwrap();
        assert_eq!(series.horizon(), 5);
        assert_relative_eq!(series.as_slice()[0], 20_000.0);
    }

    #[test]
    fn test_all_phases_empty_is_invalid() {
        let phases = GrowthPhases {
            startup_years: 0,
            expansion_years: 0,
            maturity_years: 0,
            ..GrowthPhases::default()
        };
        let err = phases.build().unwrap_err();
        assert!(err.reason().contains("growth projection"));
    }

    #[test]
    fn test_phase_of() {
        let phases = GrowthPhases::default();
        assert_eq!(phases.phase_of(0), None);
        assert_eq!(phases.phase_of(1), Some(Phase::Startup));
        assert_eq!(phases.phase_of(3), Some(Phase::Startup));
        assert_eq!(phases.phase_of(4), Some(Phase::Expansion));
        assert_eq!(phases.phase_of(7), Some(Phase::Maturity));
        assert_eq!(phases.phase_of(8), Some(Phase::Maturity));
        assert_eq!(phases.phase_of(9), None);
    }

    #[test]
    fn test_idempotent() {
        let phases = GrowthPhases::default();
        assert_eq!(phases.build().unwrap(), phases.build().unwrap());
    }
}
