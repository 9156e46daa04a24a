//! Fair P/BV command implementation.

use clap::Args;
use serde::Serialize;

use valuation_analytics::pbv::fair_price_to_book;
use valuation_core::bounds::{COST_OF_CAPITAL, EXPECTED_GROWTH, ROE};

use crate::commands::rate_within;
use crate::error::CliResult;
use crate::output::{KeyValue, OutputSettings, Report};

/// Arguments for the pbv command.
#[derive(Args, Debug, Clone)]
pub struct PbvArgs {
    /// Return on equity (as percentage)
    #[arg(long, default_value_t = ROE.default, allow_negative_numbers = true)]
    pub roe: f64,

    /// Cost of capital r (as percentage)
    #[arg(long, default_value_t = COST_OF_CAPITAL.default, allow_negative_numbers = true)]
    pub cost_of_capital: f64,

    /// Expected growth rate g (as percentage)
    #[arg(long, default_value_t = EXPECTED_GROWTH.default, allow_negative_numbers = true)]
    pub growth: f64,
}

impl Default for PbvArgs {
    fn default() -> Self {
        Self {
            roe: ROE.default,
            cost_of_capital: COST_OF_CAPITAL.default,
            growth: EXPECTED_GROWTH.default,
        }
    }
}

/// JSON payload.
#[derive(Debug, Serialize)]
struct PbvOutput {
    roe_pct: f64,
    cost_of_capital_pct: f64,
    growth_pct: f64,
    fair_pbv: f64,
}

/// Execute the pbv command.
pub fn execute(args: PbvArgs, settings: &OutputSettings) -> CliResult<()> {
    let roe = rate_within(&ROE, args.roe)?;
    let cost = rate_within(&COST_OF_CAPITAL, args.cost_of_capital)?;
    let growth = rate_within(&EXPECTED_GROWTH, args.growth)?;

    let fair_pbv = fair_price_to_book(roe, cost, growth)?;

    let rows = vec![
        KeyValue::new("Return on Equity", settings.percent(args.roe)),
        KeyValue::new("Cost of Capital (r)", settings.percent(args.cost_of_capital)),
        KeyValue::new("Expected Growth (g)", settings.percent(args.growth)),
        KeyValue::new("Fair P/BV", settings.multiple(fair_pbv)),
    ];

    Report {
        title: "Fair Price-to-Book",
        rows,
        primary: settings.plain(fair_pbv),
        json: &PbvOutput {
            roe_pct: args.roe,
            cost_of_capital_pct: args.cost_of_capital,
            growth_pct: args.growth,
            fair_pbv,
        },
    }
    .print(settings)
}
