//! Growth command implementation.
//!
//! Projects a growth company through startup, expansion, and maturity, then
//! values the projection with a terminal value at the maturity growth rate.

use clap::Args;
use serde::Serialize;
use tabled::Tabled;

use valuation_analytics::dcf::present_values;
use valuation_analytics::growth::GrowthPhases;
use valuation_analytics::intrinsic::{growth_company_value, IntrinsicValue};
use valuation_analytics::scenario::Scenario;
use valuation_core::bounds::{
    EXPANSION_GROWTH, EXPANSION_INITIAL_CASH_FLOW, EXPANSION_YEARS, GROWTH_DISCOUNT,
    MATURITY_GROWTH, MATURITY_YEARS, STARTUP_CASH_FLOW, STARTUP_YEARS,
};
use valuation_core::types::Rate;

use crate::commands::{count_within, rate_within, value_within};
use crate::error::CliResult;
use crate::output::{print_detail, KeyValue, OutputSettings, Report};

/// Arguments for the growth command.
#[derive(Args, Debug, Clone)]
pub struct GrowthArgs {
    /// Years in the startup phase (0-10)
    #[arg(long, default_value_t = STARTUP_YEARS.default as u32)]
    pub startup_years: u32,

    /// Average annual cash flow during startup (usually negative)
    #[arg(long, default_value_t = STARTUP_CASH_FLOW.default, allow_negative_numbers = true)]
    pub startup_cash_flow: f64,

    /// Years in the expansion phase (1-10)
    #[arg(long, default_value_t = EXPANSION_YEARS.default as u32)]
    pub expansion_years: u32,

    /// Cash flow in the first expansion year
    #[arg(
        long,
        default_value_t = EXPANSION_INITIAL_CASH_FLOW.default,
        allow_negative_numbers = true
    )]
    pub expansion_cash_flow: f64,

    /// Annual growth during expansion (as percentage, 0-50)
    #[arg(long, default_value_t = EXPANSION_GROWTH.default)]
    pub expansion_growth: f64,

    /// Years in the maturity phase (1-20)
    #[arg(long, default_value_t = MATURITY_YEARS.default as u32)]
    pub maturity_years: u32,

    /// Annual growth during maturity and beyond (as percentage, 0-20)
    #[arg(long, default_value_t = MATURITY_GROWTH.default)]
    pub maturity_growth: f64,

    /// Scenario that picks the default discount rate
    #[arg(long, default_value_t = Scenario::Realistic)]
    pub scenario: Scenario,

    /// Discount rate (as percentage, 0-50); overrides the scenario default
    #[arg(long)]
    pub discount: Option<f64>,
}

impl Default for GrowthArgs {
    fn default() -> Self {
        Self {
            startup_years: STARTUP_YEARS.default as u32,
            startup_cash_flow: STARTUP_CASH_FLOW.default,
            expansion_years: EXPANSION_YEARS.default as u32,
            expansion_cash_flow: EXPANSION_INITIAL_CASH_FLOW.default,
            expansion_growth: EXPANSION_GROWTH.default,
            maturity_years: MATURITY_YEARS.default as u32,
            maturity_growth: MATURITY_GROWTH.default,
            scenario: Scenario::default(),
            discount: None,
        }
    }
}

impl GrowthArgs {
    /// Validated phase parameters.
    fn phases(&self) -> CliResult<GrowthPhases> {
        Ok(GrowthPhases {
            startup_years: count_within(&STARTUP_YEARS, self.startup_years)?,
            startup_cash_flow: value_within(&STARTUP_CASH_FLOW, self.startup_cash_flow)?,
            expansion_years: count_within(&EXPANSION_YEARS, self.expansion_years)?,
            expansion_initial_cash_flow: value_within(
                &EXPANSION_INITIAL_CASH_FLOW,
                self.expansion_cash_flow,
            )?,
            expansion_growth: rate_within(&EXPANSION_GROWTH, self.expansion_growth)?,
            maturity_years: count_within(&MATURITY_YEARS, self.maturity_years)?,
            maturity_growth: rate_within(&MATURITY_GROWTH, self.maturity_growth)?,
        })
    }

    /// Explicit discount rate, or the scenario's default.
    fn discount_rate(&self) -> CliResult<Rate> {
        match self.discount {
            Some(percent) => rate_within(&GROWTH_DISCOUNT, percent),
            None => Ok(self.scenario.discount_rate()),
        }
    }
}

/// JSON payload.
#[derive(Debug, Serialize)]
struct GrowthOutput<'a> {
    phases: GrowthPhases,
    scenario: Scenario,
    discount_pct: f64,
    cash_flows: &'a [f64],
    present_values: &'a [f64],
    #[serde(flatten)]
    value: IntrinsicValue,
}

/// One projected year.
#[derive(Debug, Serialize, Tabled)]
struct YearRow {
    #[tabled(rename = "Year")]
    year: u32,
    #[tabled(rename = "Phase")]
    phase: String,
    #[tabled(rename = "Cash Flow")]
    cash_flow: String,
    #[tabled(rename = "Present Value")]
    present_value: String,
}

/// Execute the growth command.
pub fn execute(args: GrowthArgs, settings: &OutputSettings) -> CliResult<()> {
    let phases = args.phases()?;
    let discount = args.discount_rate()?;
    tracing::debug!(scenario = %args.scenario, discount = %discount, "growth company valuation");

    let (series, value) = growth_company_value(&phases, discount)?;
    let pvs = present_values(&series, discount);

    let detail: Vec<_> = series
        .iter_years()
        .zip(&pvs)
        .map(|((year, cf), pv)| YearRow {
            year,
            phase: phases
                .phase_of(year)
                .map(|p| p.to_string())
                .unwrap_or_default(),
            cash_flow: settings.money(cf),
            present_value: settings.money(*pv),
        })
        .collect();
    print_detail("Projected Cash Flows", &detail, settings)?;

    let rows = vec![
        KeyValue::new(
            "Total Projection Period",
            format!("{} years", phases.total_years()),
        ),
        KeyValue::new("Scenario", args.scenario.to_string()),
        KeyValue::new("Discount Rate", settings.percent(discount.as_percent())),
        KeyValue::new("Total Present Value of Cash Flows", settings.money(value.present_value)),
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
    let output = GrowthOutput {
        phases,
        scenario: args.scenario,
        discount_pct: discount.as_percent(),
        cash_flows: series.as_slice(),
        present_values: &pvs,
        value,
    };

    Report {
        title: "Growth Company Valuation",
        rows,
        primary: settings.plain(value.total),
        json: &output,
    }
    .print(settings)
}
