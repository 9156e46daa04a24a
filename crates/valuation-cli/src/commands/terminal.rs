//! Terminal value command implementation.

use clap::Args;

use valuation_analytics::terminal::terminal_value_at;
use valuation_core::bounds::{DISCOUNT_RATE, PERPETUAL_GROWTH, PROJECTION_YEARS, YEARLY_CASH_FLOW};

use crate::commands::{count_within, rate_within, value_within};
use crate::error::CliResult;
use crate::output::{KeyValue, OutputSettings, Report};

/// Arguments for the terminal command.
#[derive(Args, Debug, Clone)]
pub struct TerminalArgs {
    /// Cash flow in the final projected year
    #[arg(long, default_value_t = YEARLY_CASH_FLOW.default, allow_negative_numbers = true)]
    pub last_cash_flow: f64,

    /// Perpetual growth rate (as percentage, 0-10)
    #[arg(long, default_value_t = PERPETUAL_GROWTH.default)]
    pub growth: f64,

    /// Discount rate (as percentage, 0-20)
    #[arg(long, default_value_t = DISCOUNT_RATE.default)]
    pub discount: f64,

    /// Number of projected years to discount over (1-20)
    #[arg(long, default_value_t = PROJECTION_YEARS.default as u32)]
    pub years: u32,
}

/// Execute the terminal command.
pub fn execute(args: TerminalArgs, settings: &OutputSettings) -> CliResult<()> {
    let last_cash_flow = value_within(&YEARLY_CASH_FLOW, args.last_cash_flow)?;
    let growth = rate_within(&PERPETUAL_GROWTH, args.growth)?;
    let discount = rate_within(&DISCOUNT_RATE, args.discount)?;
    let years = count_within(&PROJECTION_YEARS, args.years)?;

    let tv = terminal_value_at(last_cash_flow, growth, discount, years)?;

    let rows = vec![
        KeyValue::new("Final Year Cash Flow", settings.money(last_cash_flow)),
        KeyValue::new("Perpetual Growth Rate", settings.percent(args.growth)),
        KeyValue::new("Discount Rate", settings.percent(args.discount)),
        KeyValue::new("Horizon", format!("{years} years")),
        KeyValue::new("Terminal Value", settings.money(tv.undiscounted)),
        KeyValue::new("Present Value of Terminal Value", settings.money(tv.present_value)),
    ];

    Report {
        title: "Terminal Value (Gordon Growth)",
        rows,
        primary: settings.plain(tv.present_value),
        json: &tv,
    }
    .print(settings)
}
