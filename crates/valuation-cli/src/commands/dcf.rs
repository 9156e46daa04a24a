//! DCF command implementation.
//!
//! Values a company from one annual cash flow growing at a constant rate.

use clap::Args;
use serde::Serialize;
use tabled::Tabled;

use valuation_analytics::dcf::discounted_growing_flow;
use valuation_analytics::projection::{price_vs_value, ValuePoint, DEFAULT_YEARS};
use valuation_core::bounds::{DCF_CASH_FLOW, DCF_GROWTH, DCF_YEARS, DISCOUNT_RATE};

use crate::commands::{count_within, rate_within, value_within};
use crate::error::CliResult;
use crate::output::{print_detail, KeyValue, OutputSettings, Report};

/// Arguments for the dcf command.
#[derive(Args, Debug, Clone)]
pub struct DcfArgs {
    /// Expected annual cash flow
    #[arg(long, default_value_t = DCF_CASH_FLOW.default, allow_negative_numbers = true)]
    pub cash_flow: f64,

    /// Annual growth rate (as percentage, 0-20)
    #[arg(long, default_value_t = DCF_GROWTH.default)]
    pub growth: f64,

    /// Discount rate (as percentage, 0-20)
    #[arg(long, default_value_t = DISCOUNT_RATE.default)]
    pub discount: f64,

    /// Projection period in years (1-20)
    #[arg(long, default_value_t = DCF_YEARS.default as u32)]
    pub years: u32,

    /// Also print the illustrative price-vs-value path
    #[arg(long)]
    pub chart: bool,
}

impl Default for DcfArgs {
    fn default() -> Self {
        Self {
            cash_flow: DCF_CASH_FLOW.default,
            growth: DCF_GROWTH.default,
            discount: DISCOUNT_RATE.default,
            years: DCF_YEARS.default as u32,
            chart: false,
        }
    }
}

/// JSON payload.
#[derive(Debug, Serialize)]
struct DcfOutput {
    cash_flow: f64,
    growth_pct: f64,
    discount_pct: f64,
    years: u32,
    value: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    price_vs_value: Option<Vec<ValuePoint>>,
}

/// One row of the price-vs-value path.
#[derive(Debug, Serialize, Tabled)]
struct ProjectionRow {
    #[tabled(rename = "Year")]
    year: u32,
    #[tabled(rename = "Intrinsic Value")]
    intrinsic: String,
    #[tabled(rename = "Market Price")]
    market: String,
    #[tabled(rename = "Margin")]
    margin: String,
}

/// Execute the dcf command.
pub fn execute(args: DcfArgs, settings: &OutputSettings) -> CliResult<()> {
    let cash_flow = value_within(&DCF_CASH_FLOW, args.cash_flow)?;
    let growth = rate_within(&DCF_GROWTH, args.growth)?;
    let discount = rate_within(&DISCOUNT_RATE, args.discount)?;
    let years = count_within(&DCF_YEARS, args.years)?;

    let value = discounted_growing_flow(cash_flow, growth, discount, years);
    let path = args.chart.then(|| price_vs_value(value, DEFAULT_YEARS));

    let rows = vec![
        KeyValue::new("Expected Annual Cash Flow", settings.money(cash_flow)),
        KeyValue::new("Growth Rate", settings.percent(args.growth)),
        KeyValue::new("Discount Rate", settings.percent(args.discount)),
        KeyValue::new("Projection Period", format!("{years} years")),
        KeyValue::new("Estimated Company Value (DCF)", settings.money(value)),
    ];
    let output = DcfOutput {
        cash_flow,
        growth_pct: args.growth,
        discount_pct: args.discount,
        years,
        value,
        price_vs_value: path.clone(),
    };

    Report {
        title: "Discounted Cash Flow (DCF)",
        rows,
        primary: settings.plain(value),
        json: &output,
    }
    .print(settings)?;

    if let Some(path) = path {
        let detail: Vec<_> = path
            .iter()
            .map(|p| ProjectionRow {
                year: p.year,
                intrinsic: settings.money(p.intrinsic),
                market: settings.money(p.market),
                margin: settings.money(p.margin()),
            })
            .collect();
        print_detail("Price vs. Value (illustrative)", &detail, settings)?;
    }

    Ok(())
}
