//! Normalized P/E command implementation.

use clap::Args;

use valuation_analytics::normalized_pe::normalized_pe;
use valuation_core::bounds::{CURRENT_PE, CURRENT_PROFIT, NORMALIZED_PROFIT};

use crate::commands::value_within;
use crate::error::CliResult;
use crate::output::{KeyValue, OutputSettings, Report};

/// Arguments for the normalized-pe command.
#[derive(Args, Debug, Clone)]
pub struct NormalizedPeArgs {
    /// Current profit (millions)
    #[arg(long, default_value_t = CURRENT_PROFIT.default)]
    pub current_profit: f64,

    /// Current P/E
    #[arg(long, default_value_t = CURRENT_PE.default)]
    pub current_pe: f64,

    /// Average profit over the last cycle (millions)
    #[arg(long, default_value_t = NORMALIZED_PROFIT.default)]
    pub normalized_profit: f64,
}

impl Default for NormalizedPeArgs {
    fn default() -> Self {
        Self {
            current_profit: CURRENT_PROFIT.default,
            current_pe: CURRENT_PE.default,
            normalized_profit: NORMALIZED_PROFIT.default,
        }
    }
}

/// Execute the normalized-pe command.
pub fn execute(args: NormalizedPeArgs, settings: &OutputSettings) -> CliResult<()> {
    let current_profit = value_within(&CURRENT_PROFIT, args.current_profit)?;
    let current_pe = value_within(&CURRENT_PE, args.current_pe)?;
    let normalized_profit = value_within(&NORMALIZED_PROFIT, args.normalized_profit)?;

    let result = normalized_pe(current_profit, current_pe, normalized_profit)?;

    let rows = vec![
        KeyValue::new("Current Profit", settings.money(current_profit)),
        KeyValue::new("Current P/E", settings.multiple(current_pe)),
        KeyValue::new("Average Profit (cycle)", settings.money(normalized_profit)),
        KeyValue::new("Market Price", settings.money(result.market_price)),
        KeyValue::new("Normalized P/E", settings.multiple(result.normalized_pe)),
    ];

    Report {
        title: "Normalized P/E",
        rows,
        primary: settings.plain(result.normalized_pe),
        json: &result,
    }
    .print(settings)
}
