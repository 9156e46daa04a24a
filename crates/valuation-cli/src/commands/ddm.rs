//! Dividend discount model command implementation.

use clap::Args;

use valuation_analytics::ddm::dividend_discount;
use valuation_core::bounds::{DDM_DISCOUNT, DDM_GROWTH, DIVIDEND};

use crate::commands::{rate_within, value_within};
use crate::error::CliResult;
use crate::output::{KeyValue, OutputSettings, Report};

/// Arguments for the ddm command.
#[derive(Args, Debug, Clone)]
pub struct DdmArgs {
    /// Current dividend per share (D0)
    #[arg(long, default_value_t = DIVIDEND.default)]
    pub dividend: f64,

    /// Discount rate r (as percentage)
    #[arg(long, default_value_t = DDM_DISCOUNT.default, allow_negative_numbers = true)]
    pub discount: f64,

    /// Dividend growth rate g (as percentage)
    #[arg(long, default_value_t = DDM_GROWTH.default, allow_negative_numbers = true)]
    pub growth: f64,
}

impl Default for DdmArgs {
    fn default() -> Self {
        Self {
            dividend: DIVIDEND.default,
            discount: DDM_DISCOUNT.default,
            growth: DDM_GROWTH.default,
        }
    }
}

/// Execute the ddm command.
pub fn execute(args: DdmArgs, settings: &OutputSettings) -> CliResult<()> {
    let dividend = value_within(&DIVIDEND, args.dividend)?;
    let discount = rate_within(&DDM_DISCOUNT, args.discount)?;
    let growth = rate_within(&DDM_GROWTH, args.growth)?;

    let share = dividend_discount(dividend, discount, growth)?;

    let rows = vec![
        KeyValue::new("Dividend per Share (D0)", settings.money(dividend)),
        KeyValue::new("Discount Rate (r)", settings.percent(args.discount)),
        KeyValue::new("Growth Rate (g)", settings.percent(args.growth)),
        KeyValue::new("Expected Dividend (D1)", settings.money(share.next_dividend)),
        KeyValue::new("Share Value (DDM)", settings.money(share.value)),
    ];

    Report {
        title: "Dividend Discount Model",
        rows,
        primary: settings.plain(share.value),
        json: &share,
    }
    .print(settings)
}
