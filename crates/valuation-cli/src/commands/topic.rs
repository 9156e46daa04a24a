//! Topic command implementation.
//!
//! Lists the course topics, or dispatches one topic to the calculators it
//! hosts and runs each with its default inputs.

use clap::Args;
use serde::Serialize;
use tabled::Tabled;

use valuation_analytics::topic::{Calculator, Topic};

use crate::cli::OutputFormat;
use crate::commands::{dcf, ddm, growth, intrinsic, normalized_pe, pbv, relative};
use crate::error::{CliError, CliResult};
use crate::output::{print_divider, print_header, print_info, print_output, OutputSettings};

/// Arguments for the topic command.
#[derive(Args, Debug, Clone)]
pub struct TopicArgs {
    /// Topic number (0-6). Omit to list all topics.
    pub number: Option<u8>,
}

/// One listed topic.
#[derive(Debug, Serialize, Tabled)]
struct TopicRow {
    #[tabled(rename = "#")]
    number: u8,
    #[tabled(rename = "Topic")]
    title: &'static str,
    #[tabled(rename = "Calculators")]
    calculators: String,
}

/// Execute the topic command.
pub fn execute(args: TopicArgs, settings: &OutputSettings) -> CliResult<()> {
    match args.number {
        None => list(settings),
        Some(number) => {
            let topic = Topic::from_number(number).ok_or(CliError::UnknownTopic(number))?;
            render(topic, settings)
        }
    }
}

fn list(settings: &OutputSettings) -> CliResult<()> {
    let rows: Vec<_> = Topic::all()
        .iter()
        .map(|t| TopicRow {
            number: t.number(),
            title: t.title(),
            calculators: t
                .calculators()
                .iter()
                .map(Calculator::command)
                .collect::<Vec<_>>()
                .join(", "),
        })
        .collect();

    if settings.format == OutputFormat::Table && !settings.quiet {
        print_header("Valuation Topics");
    }
    print_output(&rows, settings.format)
}

/// Renders one topic: its summary, then each hosted calculator on defaults.
fn render(topic: Topic, settings: &OutputSettings) -> CliResult<()> {
    tracing::debug!(topic = %topic, "dispatching topic");
    let decorate = settings.format == OutputFormat::Table && !settings.quiet;
    if decorate {
        print_header(&topic.to_string());
        println!("{}", topic.summary());
    }

    for calculator in topic.calculators() {
        if decorate {
            print_divider();
            print_info(&format!(
                "{calculator} (defaults; run `valuation {}` to change inputs)",
                calculator.command()
            ));
        }
        run_with_defaults(*calculator, settings)?;
    }
    Ok(())
}

fn run_with_defaults(calculator: Calculator, settings: &OutputSettings) -> CliResult<()> {
    match calculator {
        Calculator::Dcf => dcf::execute(dcf::DcfArgs::default(), settings),
        Calculator::IntrinsicValue => {
            intrinsic::execute(intrinsic::IntrinsicArgs::default(), settings)
        }
        Calculator::RelativeValuation => {
            relative::execute(relative::RelativeArgs::default(), settings)
        }
        Calculator::GrowthCompany => growth::execute(growth::GrowthArgs::default(), settings),
        Calculator::DividendDiscount => ddm::execute(ddm::DdmArgs::default(), settings),
        Calculator::NormalizedPe => {
            normalized_pe::execute(normalized_pe::NormalizedPeArgs::default(), settings)
        }
        Calculator::FairPriceToBook => pbv::execute(pbv::PbvArgs::default(), settings),
    }
}
