//! Rate type for discount and growth rates.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::ops::Sub;

/// An annual rate stored as a decimal fraction.
///
/// User inputs arrive as percentages (`8.0` for 8%) and are converted once,
/// at construction. All formulas work on the decimal form.
///
/// # Example
///
/// ```rust
/// use valuation_core::types::Rate;
///
/// let r = Rate::from_percent(8.0);
/// assert!((r.as_decimal() - 0.08).abs() < 1e-12);
/// assert!((r.as_percent() - 8.0).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
#[repr(transparent)]
pub struct Rate(f64);

impl Rate {
    /// Zero rate.
    pub const ZERO: Rate = Rate(0.0);

    /// Creates a rate from a percentage (e.g. `5.0` for 5%).
    #[must_use]
    pub fn from_percent(percent: f64) -> Self {
        Self(percent / 100.0)
    }

    /// Creates a rate from a decimal fraction (e.g. `0.05` for 5%).
    #[must_use]
    pub fn from_decimal(decimal: f64) -> Self {
        Self(decimal)
    }

    /// Returns the rate as a decimal fraction.
    pub fn as_decimal(self) -> f64 {
        self.0
    }

    /// Returns the rate as a percentage.
    pub fn as_percent(self) -> f64 {
        self.0 * 100.0
    }

    /// Returns the growth/discount factor `1 + rate`.
    pub fn factor(self) -> f64 {
        1.0 + self.0
    }

    /// Returns the compounded factor `(1 + rate)^years`.
    pub fn compound(self, years: u32) -> f64 {
        self.factor().powi(years as i32)
    }
}

impl fmt::Display for Rate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}%", self.as_percent())
    }
}

impl PartialOrd for Rate {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.0.partial_cmp(&other.0)
    }
}

impl Sub for Rate {
    type Output = Rate;

    fn sub(self, rhs: Self) -> Self::Output {
        Rate(self.0 - rhs.0)
    }
}
