//! Discount-rate scenarios for growth-company valuation.
//!
//! Riskier assumptions call for a higher hurdle rate. Each scenario carries a
//! default discount rate that callers may override.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use valuation_core::types::Rate;

/// Outlook used to pick a default discount rate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Scenario {
    /// 12%.
    Optimistic,
    /// 15%.
    #[default]
    Realistic,
    /// 18%.
    Conservative,
}

impl Scenario {
    /// Default discount rate for the scenario.
    pub fn discount_rate(self) -> Rate {
        match self {
            Scenario::Optimistic => Rate::from_percent(12.0),
            Scenario::Realistic => Rate::from_percent(15.0),
            Scenario::Conservative => Rate::from_percent(18.0),
        }
    }

    /// All scenarios, from least to most conservative.
    pub fn all() -> &'static [Scenario] {
        &[
            Scenario::Optimistic,
            Scenario::Realistic,
            Scenario::Conservative,
        ]
    }
}

impl fmt::Display for Scenario {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Scenario::Optimistic => "Optimistic",
            Scenario::Realistic => "Realistic",
            Scenario::Conservative => "Conservative",
        };
        write!(f, "{name}")
    }
}

impl FromStr for Scenario {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "optimistic" => Ok(Scenario::Optimistic),
            "realistic" => Ok(Scenario::Realistic),
            "conservative" => Ok(Scenario::Conservative),
            _ => Err(format!(
                "unknown scenario: {s}. Use optimistic, realistic, or conservative."
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_default_rates() {
        assert_relative_eq!(Scenario::Optimistic.discount_rate().as_percent(), 12.0);
        assert_relative_eq!(Scenario::Realistic.discount_rate().as_percent(), 15.0);
        assert_relative_eq!(Scenario::Conservative.discount_rate().as_percent(), 18.0);
        assert_eq!(Scenario::default(), Scenario::Realistic);
    }

    #[test]
    fn test_rates_increase_with_caution() {
        let rates: Vec<_> = Scenario::all().iter().map(|s| s.discount_rate()).collect();
        assert!(rates.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_parse() {
        assert_eq!("Conservative".parse::<Scenario>(), Ok(Scenario::Conservative));
        assert!("bullish".parse::<Scenario>().is_err());
    }

    #[test]
    fn test_rates_within_override_bounds() {
        use valuation_core::bounds::GROWTH_DISCOUNT;

        assert_relative_eq!(
            Scenario::default().discount_rate().as_percent(),
            GROWTH_DISCOUNT.default
        );
        for scenario in Scenario::all() {
            assert!(GROWTH_DISCOUNT.check(scenario.discount_rate().as_percent()).is_ok());
        }
    }
}
