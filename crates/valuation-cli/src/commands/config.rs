//! Config command implementation.
//!
//! Manages CLI configuration settings.

use clap::{Args, Subcommand};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use crate::cli::OutputFormat;
use crate::error::{CliError, CliResult};
use crate::output::{
    print_header, print_info, print_success, print_warning, KeyValue, OutputSettings,
};

/// Arguments for the config command.
#[derive(Args, Debug)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

/// Config subcommands.
#[derive(Subcommand, Debug)]
pub enum ConfigCommand {
    /// Show current configuration
    Show,

    /// Get a configuration value
    Get(GetArgs),

    /// Set a configuration value
    Set(SetArgs),

    /// List available configuration keys
    List,

    /// Reset configuration to defaults
    Reset(ResetArgs),

    /// Show configuration file location
    Path,
}

/// Arguments for get subcommand.
#[derive(Args, Debug)]
pub struct GetArgs {
    /// Configuration key
    pub key: String,
}

/// Arguments for set subcommand.
#[derive(Args, Debug)]
pub struct SetArgs {
    /// Configuration key
    pub key: String,

    /// Configuration value
    pub value: String,
}

/// Arguments for reset subcommand.
#[derive(Args, Debug)]
pub struct ResetArgs {
    /// Reset all settings (not just one)
    #[arg(long)]
    pub all: bool,

    /// Specific key to reset (optional)
    pub key: Option<String>,
}

/// CLI configuration keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigKey {
    /// Default output format
    DefaultFormat,
    /// Precision for decimal output
    DecimalPrecision,
    /// Symbol prefixed to monetary amounts
    CurrencySymbol,
    /// Whether to use colors
    UseColors,
}

impl ConfigKey {
    fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "default_format" | "format" => Some(Self::DefaultFormat),
            "decimal_precision" | "precision" => Some(Self::DecimalPrecision),
            "currency_symbol" | "currency" => Some(Self::CurrencySymbol),
            "use_colors" | "colors" => Some(Self::UseColors),
            _ => None,
        }
    }

    fn parse(s: &str) -> CliResult<Self> {
        Self::from_str(s).ok_or_else(|| CliError::UnknownConfigKey(s.to_string()))
    }

    fn as_str(&self) -> &'static str {
        match self {
            Self::DefaultFormat => "default_format",
            Self::DecimalPrecision => "decimal_precision",
            Self::CurrencySymbol => "currency_symbol",
            Self::UseColors => "use_colors",
        }
    }

    fn description(&self) -> &'static str {
        match self {
            Self::DefaultFormat => "Default output format (table, json, csv, minimal)",
            Self::DecimalPrecision => "Number of decimal places for output (0-8)",
            Self::CurrencySymbol => "Symbol prefixed to monetary amounts (empty for none)",
            Self::UseColors => "Enable colored output (true, false)",
        }
    }

    fn default_value(&self) -> &'static str {
        match self {
            Self::DefaultFormat => "table",
            Self::DecimalPrecision => "2",
            Self::CurrencySymbol => "$",
            Self::UseColors => "true",
        }
    }

    fn all() -> &'static [Self] {
        &[
            Self::DefaultFormat,
            Self::DecimalPrecision,
            Self::CurrencySymbol,
            Self::UseColors,
        ]
    }
}

/// Simple config storage.
#[derive(Debug, Default, serde::Serialize, serde::Deserialize)]
pub struct Config {
    #[serde(flatten)]
    values: BTreeMap<String, String>,
}

impl Config {
    /// Loads the config at `path`, or defaults if the file does not exist.
    pub fn load(path: &Path) -> CliResult<Self> {
        if path.exists() {
            let content = std::fs::read_to_string(path)?;
            Ok(serde_json::from_str(&content)?)
        } else {
            Ok(Self::default())
        }
    }

    fn save(&self, path: &Path) -> CliResult<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    fn get(&self, key: ConfigKey) -> &str {
        self.values
            .get(key.as_str())
            .map_or(key.default_value(), String::as_str)
    }

    fn set(&mut self, key: ConfigKey, value: String) {
        self.values.insert(key.as_str().to_string(), value);
    }

    fn remove(&mut self, key: ConfigKey) {
        self.values.remove(key.as_str());
    }

    fn clear(&mut self) {
        self.values.clear();
    }

    /// Whether colored output is enabled.
    pub fn use_colors(&self) -> bool {
        parse_bool(self.get(ConfigKey::UseColors)).unwrap_or(true)
    }

    /// Output settings from this config, with an explicit CLI format taking precedence.
    ///
    /// Stored values that fail validation (e.g. a hand-edited file) fall back to defaults.
    pub fn output_settings(&self, format: Option<OutputFormat>, quiet: bool) -> OutputSettings {
        let defaults = OutputSettings::default();
        OutputSettings {
            format: format
                .or_else(|| self.get(ConfigKey::DefaultFormat).parse().ok())
                .unwrap_or(defaults.format),
            precision: self
                .get(ConfigKey::DecimalPrecision)
                .parse()
                .ok()
                .filter(|p| PRECISION_RANGE.contains(p))
                .unwrap_or(defaults.precision),
            currency_symbol: self.get(ConfigKey::CurrencySymbol).to_string(),
            quiet,
        }
    }
}

const PRECISION_RANGE: std::ops::RangeInclusive<u32> = 0..=8;

fn parse_bool(value: &str) -> Option<bool> {
    match value.to_lowercase().as_str() {
        "true" | "1" | "yes" => Some(true),
        "false" | "0" | "no" => Some(false),
        _ => None,
    }
}

/// Get the config file path, honouring an explicit override.
pub fn config_path(explicit: Option<&Path>) -> CliResult<PathBuf> {
    if let Some(path) = explicit {
        return Ok(path.to_path_buf());
    }
    let home = dirs::config_dir()
        .or_else(dirs::home_dir)
        .ok_or(CliError::NoConfigDir)?;
    Ok(home.join("valuation").join("config.json"))
}

/// Execute the config command.
pub fn execute(args: ConfigArgs, path: &Path, settings: &OutputSettings) -> CliResult<()> {
    match args.command {
        ConfigCommand::Show => execute_show(path, settings),
        ConfigCommand::Get(get_args) => execute_get(get_args, path, settings),
        ConfigCommand::Set(set_args) => execute_set(set_args, path),
        ConfigCommand::List => execute_list(settings),
        ConfigCommand::Reset(reset_args) => execute_reset(reset_args, path),
        ConfigCommand::Path => {
            execute_path(path);
            Ok(())
        }
    }
}

/// Show current configuration.
fn execute_show(path: &Path, settings: &OutputSettings) -> CliResult<()> {
    let config = Config::load(path)?;

    match settings.format {
        OutputFormat::Table | OutputFormat::Csv => {
            let results: Vec<_> = ConfigKey::all()
                .iter()
                .map(|key| KeyValue::new(key.as_str(), config.get(*key)))
                .collect();
            if settings.format == OutputFormat::Table {
                print_header("Current Configuration");
            }
            crate::output::print_output(&results, settings.format)?;
        }
        OutputFormat::Json => {
            let output: BTreeMap<_, _> = ConfigKey::all()
                .iter()
                .map(|key| (key.as_str(), config.get(*key)))
                .collect();
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Minimal => {
            for key in ConfigKey::all() {
                println!("{}={}", key.as_str(), config.get(*key));
            }
        }
    }

    Ok(())
}

/// Get a configuration value.
fn execute_get(args: GetArgs, path: &Path, settings: &OutputSettings) -> CliResult<()> {
    let config = Config::load(path)?;
    let key = ConfigKey::parse(&args.key)?;
    let value = config.get(key);

    match settings.format {
        OutputFormat::Table | OutputFormat::Csv => {
            println!("{}: {}", key.as_str(), value);
        }
        OutputFormat::Json => {
            let output = serde_json::json!({
                "key": key.as_str(),
                "value": value
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Minimal => {
            println!("{}", value);
        }
    }

    Ok(())
}

/// Set a configuration value.
fn execute_set(args: SetArgs, path: &Path) -> CliResult<()> {
    let key = ConfigKey::parse(&args.key)?;
    validate_config_value(key, &args.value)?;

    let mut config = Config::load(path)?;
    config.set(key, args.value.clone());
    config.save(path)?;

    tracing::info!(key = key.as_str(), path = %path.display(), "configuration updated");
    print_success(&format!("Set {} = {}", key.as_str(), args.value));
    Ok(())
}

/// List available configuration keys.
fn execute_list(settings: &OutputSettings) -> CliResult<()> {
    match settings.format {
        OutputFormat::Table | OutputFormat::Csv => {
            let results: Vec<_> = ConfigKey::all()
                .iter()
                .map(|key| {
                    KeyValue::new(
                        key.as_str(),
                        format!("{} (default: {})", key.description(), key.default_value()),
                    )
                })
                .collect();
            if settings.format == OutputFormat::Table {
                print_header("Available Configuration Keys");
            }
            crate::output::print_output(&results, settings.format)?;
        }
        OutputFormat::Json => {
            let output: Vec<_> = ConfigKey::all()
                .iter()
                .map(|key| {
                    serde_json::json!({
                        "key": key.as_str(),
                        "description": key.description(),
                        "default": key.default_value()
                    })
                })
                .collect();
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Minimal => {
            for key in ConfigKey::all() {
                println!("{}", key.as_str());
            }
        }
    }

    Ok(())
}

/// Reset configuration.
fn execute_reset(args: ResetArgs, path: &Path) -> CliResult<()> {
    let mut config = Config::load(path)?;

    if args.all {
        config.clear();
        config.save(path)?;
        print_success("Reset all configuration to defaults");
    } else if let Some(key_str) = args.key {
        let key = ConfigKey::parse(&key_str)?;
        config.remove(key);
        config.save(path)?;
        print_success(&format!(
            "Reset {} to default ({})",
            key.as_str(),
            key.default_value()
        ));
    } else {
        print_warning("Use --all to reset all settings, or specify a key to reset");
    }

    Ok(())
}

/// Show configuration file path.
fn execute_path(path: &Path) {
    print_info(&format!("Config file: {}", path.display()));
    if path.exists() {
        print_info("Status: exists");
    } else {
        print_info("Status: not created yet (using defaults)");
    }
}

/// Validate a configuration value.
fn validate_config_value(key: ConfigKey, value: &str) -> CliResult<()> {
    let invalid = |reason: String| CliError::InvalidConfigValue {
        key: key.as_str(),
        reason,
    };
    match key {
        ConfigKey::DefaultFormat => {
            value.parse::<OutputFormat>().map_err(|_| {
                invalid(format!(
                    "{value}. Use {}.",
                    OutputFormat::NAMES.join(", ")
                ))
            })?;
        }
        ConfigKey::DecimalPrecision => {
            let precision: u32 = value
                .parse()
                .map_err(|_| invalid(format!("{value}. Must be a number.")))?;
            if !PRECISION_RANGE.contains(&precision) {
                return Err(invalid(format!("{precision}. Must be between 0 and 8.")));
            }
        }
        ConfigKey::CurrencySymbol => {
            if value.chars().count() > 4 {
                return Err(invalid(format!("{value}. Use at most 4 characters.")));
            }
        }
        ConfigKey::UseColors => {
            if parse_bool(value).is_none() {
                return Err(invalid(format!("{value}. Use true or false.")));
            }
        }
    }
    Ok(())
}
