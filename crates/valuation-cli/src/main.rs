//! Valuation CLI - interactive company valuation calculators.
//!
//! # Usage
//!
//! ```bash
//! # Value a growing cash flow over ten years
//! valuation dcf --cash-flow 100000 --growth 5 --discount 10 --years 10
//!
//! # Value a growth company under the conservative scenario
//! valuation growth --scenario conservative
//!
//! # Dividend discount model, value only
//! valuation --format minimal ddm --dividend 2 --discount 8 --growth 2
//!
//! # Run the calculators hosted by topic 6 (financial companies)
//! valuation topic 6
//! ```

use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod cli;
mod commands;
mod error;
mod output;

use cli::{Cli, Commands};
use commands::config::{config_path, Config};
use output::print_error;

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::debug!(error = ?e, "command failed");
            print_error(&format!("{e:#}"));
            ExitCode::FAILURE
        }
    }
}

/// Logs go to stderr so stdout stays machine-readable.
fn init_tracing(verbose: bool) {
    let default_level = if verbose {
        "valuation=debug,valuation_analytics=debug,valuation_core=debug"
    } else {
        "warn"
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn run(cli: Cli) -> Result<()> {
    let path = config_path(cli.config.as_deref())?;
    let config = Config::load(&path)
        .with_context(|| format!("failed to read config from {}", path.display()))?;
    colored::control::set_override(config.use_colors());

    let settings = config.output_settings(cli.format, cli.quiet);
    tracing::debug!(format = %settings.format, precision = settings.precision, "output settings");

    match cli.command {
        Commands::Dcf(args) => commands::dcf::execute(args, &settings)?,
        Commands::Intrinsic(args) => commands::intrinsic::execute(args, &settings)?,
        Commands::Growth(args) => commands::growth::execute(args, &settings)?,
        Commands::Terminal(args) => commands::terminal::execute(args, &settings)?,
        Commands::Relative(args) => commands::relative::execute(args, &settings)?,
        Commands::Ddm(args) => commands::ddm::execute(args, &settings)?,
        Commands::Pbv(args) => commands::pbv::execute(args, &settings)?,
        Commands::NormalizedPe(args) => commands::normalized_pe::execute(args, &settings)?,
        Commands::Topic(args) => commands::topic::execute(args, &settings)?,
        Commands::Bounds(args) => commands::bounds::execute(args, &settings)?,
        Commands::Config(args) => commands::config::execute(args, &path, &settings)?,
    }

    Ok(())
}
