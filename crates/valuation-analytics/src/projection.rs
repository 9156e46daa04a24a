//! Illustrative price-vs-value path.
//!
//! Starting from one valuation, intrinsic value drifts up 2% of the base per
//! year while the market price drifts up 1.5%. The point is the widening gap
//! between the two lines, not a forecast.

use serde::{Deserialize, Serialize};

/// Annual drift of the illustrative intrinsic value, as a fraction of the base.
pub const INTRINSIC_DRIFT: f64 = 0.02;

/// Annual drift of the illustrative market price, as a fraction of the base.
pub const MARKET_DRIFT: f64 = 0.015;

/// Default number of illustrated years.
pub const DEFAULT_YEARS: u32 = 10;

/// One year of the illustration.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ValuePoint {
    /// 1-based year.
    pub year: u32,
    /// Illustrative intrinsic value.
    pub intrinsic: f64,
    /// Illustrative market price.
    pub market: f64,
}

impl ValuePoint {
    /// `intrinsic − market`; positive means the price sits below value.
    pub fn margin(&self) -> f64 {
        self.intrinsic - self.market
    }
}

/// Linear intrinsic and market paths from `base_value` over `years` years.
///
/// Year 1 starts at `base_value` for both lines.
pub fn price_vs_value(base_value: f64, years: u32) -> Vec<ValuePoint> {
    (0..years)
        .map(|i| {
            let step = f64::from(i);
            ValuePoint {
                year: i + 1,
                intrinsic: base_value * (1.0 + step * INTRINSIC_DRIFT),
                market: base_value * (1.0 + step * MARKET_DRIFT),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_path_shape() {
        let path = price_vs_value(1_000.0, DEFAULT_YEARS);
        assert_eq!(path.len(), 10);
        assert_eq!(path[0].year, 1);
        assert_relative_eq!(path[0].intrinsic, 1_000.0);
        assert_relative_eq!(path[0].market, 1_000.0);
        assert_relative_eq!(path[9].intrinsic, 1_180.0, epsilon = 1e-9);
        assert_relative_eq!(path[9].market, 1_135.0, epsilon = 1e-9);
    }

    #[test]
    fn test_gap_widens() {
        let path = price_vs_value(500.0, 5);
        assert!(path.windows(2).all(|w| w[1].margin() > w[0].margin()));
    }

    #[test]
    fn test_zero_years() {
        assert!(price_vs_value(1.0, 0).is_empty());
    }
}
