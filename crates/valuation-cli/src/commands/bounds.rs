//! Bounds command implementation.
//!
//! Prints the documented range, default, and step of every calculator input.

use clap::Args;
use serde::Serialize;
use tabled::Tabled;

use valuation_core::bounds::{catalogue, InputBounds};

use crate::cli::OutputFormat;
use crate::error::CliResult;
use crate::output::{print_header, print_output, OutputSettings};

/// Arguments for the bounds command.
#[derive(Args, Debug, Clone)]
pub struct BoundsArgs {
    /// Only show inputs whose key or label contains this text
    pub filter: Option<String>,
}

#[derive(Debug, Serialize, Tabled)]
struct BoundsRow {
    #[tabled(rename = "Key")]
    key: &'static str,
    #[tabled(rename = "Input")]
    label: &'static str,
    #[tabled(rename = "Min")]
    min: String,
    #[tabled(rename = "Max")]
    max: String,
    #[tabled(rename = "Default")]
    default: f64,
    #[tabled(rename = "Step")]
    step: f64,
    #[tabled(rename = "Unit")]
    unit: String,
}

impl From<&InputBounds> for BoundsRow {
    fn from(b: &InputBounds) -> Self {
        let render = |v: Option<f64>| v.map_or_else(|| "-".to_string(), |v| v.to_string());
        Self {
            key: b.key,
            label: b.label,
            min: render(b.min),
            max: render(b.max),
            default: b.default,
            step: b.step,
            unit: b.unit.to_string(),
        }
    }
}

/// Execute the bounds command.
pub fn execute(args: BoundsArgs, settings: &OutputSettings) -> CliResult<()> {
    let needle = args.filter.map(|f| f.to_lowercase());
    let rows: Vec<BoundsRow> = catalogue()
        .iter()
        .filter(|b| {
            needle.as_deref().map_or(true, |n| {
                b.key.contains(n) || b.label.to_lowercase().contains(n)
            })
        })
        .map(BoundsRow::from)
        .collect();

    if settings.format == OutputFormat::Table && !settings.quiet {
        print_header("Calculator Inputs");
    }
    print_output(&rows, settings.format)
}
