//! Intrinsic value command implementation.
//!
//! Discounts explicit yearly cash flows and adds a Gordon-growth terminal value.

use clap::Args;
use serde::Serialize;
use tabled::Tabled;

use valuation_analytics::dcf::present_values;
use valuation_analytics::intrinsic::{intrinsic_value, IntrinsicValue};
use valuation_core::bounds::{DISCOUNT_RATE, PERPETUAL_GROWTH, PROJECTION_YEARS, YEARLY_CASH_FLOW};
use valuation_core::types::CashFlowSeries;

use crate::commands::{list_within, rate_within};
use crate::error::CliResult;
use crate::output::{print_detail, KeyValue, OutputSettings, Report};

/// Arguments for the intrinsic command.
#[derive(Args, Debug, Clone)]
pub struct IntrinsicArgs {
    /// Cash flow for each projected year, comma separated (1-20 values)
    #[arg(
        long,
        value_delimiter = ',',
        num_args = 1..,
        allow_negative_numbers = true,
        default_values_t = default_flows()
    )]
    pub flows: Vec<f64>,

    /// Discount rate (as percentage, 0-20)
    #[arg(long, default_value_t = DISCOUNT_RATE.default)]
    pub discount: f64,

    /// Perpetual growth rate after the projection (as percentage, 0-10)
    #[arg(long, default_value_t = PERPETUAL_GROWTH.default)]
    pub perpetual_growth: f64,
}

fn default_flows() -> Vec<f64> {
    vec![YEARLY_CASH_FLOW.default; PROJECTION_YEARS.default as usize]
}

impl Default for IntrinsicArgs {
    fn default() -> Self {
        Self {
            flows: default_flows(),
            discount: DISCOUNT_RATE.default,
            perpetual_growth: PERPETUAL_GROWTH.default,
        }
    }
}

/// JSON payload.
#[derive(Debug, Serialize)]
struct IntrinsicOutput<'a> {
    cash_flows: &'a [f64],
    present_values: &'a [f64],
    discount_pct: f64,
    perpetual_growth_pct: f64,
    #[serde(flatten)]
    value: IntrinsicValue,
}

/// One projected year.
#[derive(Debug, Serialize, Tabled)]
struct YearRow {
    #[tabled(rename = "Year")]
    year: u32,
    #[tabled(rename = "Cash Flow")]
    cash_flow: String,
    #[tabled(rename = "Present Value")]
    present_value: String,
}

/// Execute the intrinsic command.
pub fn execute(args: IntrinsicArgs, settings: &OutputSettings) -> CliResult<()> {
    let flows = list_within(&PROJECTION_YEARS, &YEARLY_CASH_FLOW, &args.flows)?;
    let discount = rate_within(&DISCOUNT_RATE, args.discount)?;
    let growth = rate_within(&PERPETUAL_GROWTH, args.perpetual_growth)?;

    let series = CashFlowSeries::new(flows)?;
    let value = intrinsic_value(&series, discount, growth)?;
    let pvs = present_values(&series, discount);

    let rows = vec![
        KeyValue::new("Projection Years", series.horizon().to_string()),
        KeyValue::new("Discount Rate", settings.percent(args.discount)),
        KeyValue::new("Perpetual Growth Rate", settings.percent(args.perpetual_growth)),
        KeyValue::new("Total Present Value of Cash Flows", settings.money(value.present_value)),
        KeyValue::new("Terminal Value", settings.money(value.terminal.undiscounted)),
        KeyValue::new(
            "Present Value of Terminal Value",
            settings.money(value.terminal.present_value),
        ),
        KeyValue::new("Intrinsic Value (DCF)", settings.money(value.total)),
        KeyValue::new(
            "Terminal Value Share",
            settings.percent(value.terminal_share() * 100.0),
        ),
    ];
    let output = IntrinsicOutput {
        cash_flows: series.as_slice(),
        present_values: &pvs,
        discount_pct: args.discount,
        perpetual_growth_pct: args.perpetual_growth,
        value,
    };

    let detail: Vec<_> = series
        .iter_years()
        .zip(&pvs)
        .map(|((year, cf), pv)| YearRow {
            year,
            cash_flow: settings.money(cf),
            present_value: settings.money(*pv),
        })
        .collect();
    print_detail("Projected Cash Flows", &detail, settings)?;

    Report {
        title: "Intrinsic Value",
        rows,
        primary: settings.plain(value.total),
        json: &output,
    }
    .print(settings)
}
