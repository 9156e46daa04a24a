//! Course topics and the calculators each one hosts.
//!
//! The presentation layer selects one [`Topic`] at a time and renders the
//! calculators returned by [`Topic::calculators`]. Nothing in the evaluators
//! depends on the selection.

use serde::{Deserialize, Serialize};
use std::fmt;

/// An interactive calculator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Calculator {
    /// Growing single-flow DCF.
    Dcf,
    /// Explicit per-year flows plus terminal value.
    IntrinsicValue,
    /// Target multiple against a peer group.
    RelativeValuation,
    /// Three-phase growth projection plus terminal value.
    GrowthCompany,
    /// Constant-growth dividend discount model.
    DividendDiscount,
    /// Cycle-adjusted P/E.
    NormalizedPe,
    /// Justified price-to-book.
    FairPriceToBook,
}

impl Calculator {
    /// CLI subcommand that runs this calculator.
    pub fn command(&self) -> &'static str {
        match self {
            Calculator::Dcf => "dcf",
            Calculator::IntrinsicValue => "intrinsic",
            Calculator::RelativeValuation => "relative",
            Calculator::GrowthCompany => "growth",
            Calculator::DividendDiscount => "ddm",
            Calculator::NormalizedPe => "normalized-pe",
            Calculator::FairPriceToBook => "pbv",
        }
    }
}

impl fmt::Display for Calculator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Calculator::Dcf => "Discounted Cash Flow (DCF)",
            Calculator::IntrinsicValue => "Intrinsic Value (DCF + Terminal Value)",
            Calculator::RelativeValuation => "Relative Valuation (P/E vs Peers)",
            Calculator::GrowthCompany => "Growth Company DCF",
            Calculator::DividendDiscount => "Dividend Discount Model (DDM)",
            Calculator::NormalizedPe => "Normalized P/E",
            Calculator::FairPriceToBook => "Fair P/BV",
        };
        write!(f, "{name}")
    }
}

/// One unit of the valuation course.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Topic {
    /// 0. Valuing a company.
    ValuingACompany,
    /// 1. Intrinsic value.
    IntrinsicValue,
    /// 2. Relative valuation.
    RelativeValuation,
    /// 3. Growth companies.
    GrowthCompanies,
    /// 4. Mature companies.
    MatureCompanies,
    /// 5. Cyclical companies.
    CyclicalCompanies,
    /// 6. Financial companies.
    FinancialCompanies,
}

impl Topic {
    /// All topics in course order.
    pub fn all() -> &'static [Topic] {
        &[
            Topic::ValuingACompany,
            Topic::IntrinsicValue,
            Topic::RelativeValuation,
            Topic::GrowthCompanies,
            Topic::MatureCompanies,
            Topic::CyclicalCompanies,
            Topic::FinancialCompanies,
        ]
    }

    /// Looks a topic up by its course number.
    pub fn from_number(number: u8) -> Option<Topic> {
        Self::all().get(usize::from(number)).copied()
    }

    /// Course number (0-based).
    pub fn number(&self) -> u8 {
        match self {
            Topic::ValuingACompany => 0,
            Topic::IntrinsicValue => 1,
            Topic::RelativeValuation => 2,
            Topic::GrowthCompanies => 3,
            Topic::MatureCompanies => 4,
            Topic::CyclicalCompanies => 5,
            Topic::FinancialCompanies => 6,
        }
    }

    /// Topic title.
    pub fn title(&self) -> &'static str {
        match self {
            Topic::ValuingACompany => "Valuing a Company",
            Topic::IntrinsicValue => "Intrinsic Value",
            Topic::RelativeValuation => "Relative Valuation",
            Topic::GrowthCompanies => "Growth Companies",
            Topic::MatureCompanies => "Mature Companies",
            Topic::CyclicalCompanies => "Cyclical Companies",
            Topic::FinancialCompanies => "Financial Companies",
        }
    }

    /// One-line summary.
    pub fn summary(&self) -> &'static str {
        match self {
            Topic::ValuingACompany => {
                "Price is what you pay, value is what you get; small assumption changes move a DCF a lot."
            }
            Topic::IntrinsicValue => {
                "Project cash flows, discount them, and add a terminal value for everything after."
            }
            Topic::RelativeValuation => {
                "Compare a multiple with similar companies; cheap only means cheap compared to peers."
            }
            Topic::GrowthCompanies => {
                "Negative early cash flows, variable growth, and a terminal value once the business matures."
            }
            Topic::MatureCompanies => {
                "Stable growth and predictable dividends make the dividend discount model a natural fit."
            }
            Topic::CyclicalCompanies => {
                "Value on normalized profit across the cycle, not on the current peak or trough."
            }
            Topic::FinancialCompanies => {
                "Debt is raw material for banks and insurers; use P/BV, ROE, and dividends instead of FCFF."
            }
        }
    }

    /// Calculators presented in this topic, in display order.
    pub fn calculators(&self) -> &'static [Calculator] {
        match self {
            Topic::ValuingACompany => &[Calculator::Dcf],
            Topic::IntrinsicValue => &[Calculator::IntrinsicValue],
            Topic::RelativeValuation => &[Calculator::RelativeValuation],
            Topic::GrowthCompanies => &[Calculator::GrowthCompany],
            Topic::MatureCompanies => &[Calculator::DividendDiscount],
            Topic::CyclicalCompanies => &[Calculator::NormalizedPe],
            Topic::FinancialCompanies => {
                &[Calculator::FairPriceToBook, Calculator::DividendDiscount]
            }
        }
    }
}

impl fmt::Display for Topic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}. {}", self.number(), self.title())
    }
}
