//! CLI argument definitions.

use clap::{Parser, Subcommand, ValueEnum};
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use crate::commands::{
    BoundsArgs, ConfigArgs, DcfArgs, DdmArgs, GrowthArgs, IntrinsicArgs, NormalizedPeArgs,
    PbvArgs, RelativeArgs, TerminalArgs, TopicArgs,
};

/// Valuation - interactive company valuation calculators
#[derive(Parser)]
#[command(name = "valuation")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output format (defaults to the configured `default_format`)
    #[arg(short, long, value_enum, global = true)]
    pub format: Option<OutputFormat>,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Enable debug logging on stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Path to the configuration file
    #[arg(long, global = true, env = "VALUATION_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand)]
pub enum Commands {
    /// Discounted cash flow of a growing annual cash flow
    Dcf(DcfArgs),

    /// Intrinsic value from explicit yearly cash flows plus terminal value
    Intrinsic(IntrinsicArgs),

    /// Growth company DCF across startup, expansion, and maturity phases
    Growth(GrowthArgs),

    /// Gordon growth terminal value and its present value
    Terminal(TerminalArgs),

    /// Compare a target multiple with a peer group
    Relative(RelativeArgs),

    /// Dividend discount model value per share
    Ddm(DdmArgs),

    /// Fair price-to-book multiple for financial companies
    Pbv(PbvArgs),

    /// Normalized P/E for cyclical companies
    NormalizedPe(NormalizedPeArgs),

    /// List course topics or run the calculators of one topic
    Topic(TopicArgs),

    /// Show input ranges, defaults, and steps
    Bounds(BoundsArgs),

    /// Manage configurations
    Config(ConfigArgs),
}

/// Output format options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable table format
    #[default]
    Table,
    /// JSON format
    Json,
    /// CSV format
    Csv,
    /// Minimal output (just the value)
    Minimal,
}

impl OutputFormat {
    /// All format names accepted in the config file.
    pub const NAMES: [&'static str; 4] = ["table", "json", "csv", "minimal"];
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            OutputFormat::Table => "table",
            OutputFormat::Json => "json",
            OutputFormat::Csv => "csv",
            OutputFormat::Minimal => "minimal",
        };
        write!(f, "{name}")
    }
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        <Self as ValueEnum>::from_str(s, true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_format_names_parse() {
        for name in OutputFormat::NAMES {
            let format: OutputFormat = name.parse().unwrap();
            assert_eq!(format.to_string(), name);
        }
        assert!("xml".parse::<OutputFormat>().is_err());
    }

    #[test]
    fn test_negative_cash_flow_accepted() {
        let cli = Cli::try_parse_from([
            "valuation",
            "growth",
            "--startup-cash-flow",
            "-40000",
        ])
        .unwrap();
        assert!(matches!(cli.command, Commands::Growth(args) if args.startup_cash_flow == -40_000.0));
    }
}
