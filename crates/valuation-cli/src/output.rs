//! Output formatting utilities.

use colored::Colorize;
use serde::Serialize;
use tabled::{
    settings::{object::Columns, Alignment, Modify, Style},
    Table, Tabled,
};

use valuation_core::format::{format_currency, format_multiple, format_percent, round_to};

use crate::cli::OutputFormat;
use crate::error::CliResult;

/// Resolved output preferences: CLI flags layered over the config file.
#[derive(Debug, Clone)]
pub struct OutputSettings {
    /// Output format.
    pub format: OutputFormat,
    /// Decimal places for rendered numbers.
    pub precision: u32,
    /// Symbol prefixed to monetary amounts.
    pub currency_symbol: String,
    /// Suppress headers and informational lines.
    pub quiet: bool,
}

impl Default for OutputSettings {
    fn default() -> Self {
        Self {
            format: OutputFormat::Table,
            precision: 2,
            currency_symbol: "$".to_string(),
            quiet: false,
        }
    }
}

impl OutputSettings {
    /// Formats a monetary amount.
    pub fn money(&self, value: f64) -> String {
        format_currency(value, &self.currency_symbol, self.precision)
    }

    /// Formats a value already expressed in percent.
    pub fn percent(&self, percent: f64) -> String {
        format_percent(percent, self.precision)
    }

    /// Formats a multiple.
    pub fn multiple(&self, value: f64) -> String {
        format_multiple(value, self.precision)
    }

    /// Formats a bare number for minimal output (no grouping, no suffix).
    pub fn plain(&self, value: f64) -> String {
        match round_to(value, self.precision) {
            Some(d) => format!("{:.prec$}", d, prec = self.precision as usize),
            None => value.to_string(),
        }
    }
}

/// A calculator result ready for any output format.
pub struct Report<'a, J: Serialize> {
    /// Section title for table output.
    pub title: &'a str,
    /// Metric rows for table and CSV output.
    pub rows: Vec<KeyValue>,
    /// The single value printed in minimal mode.
    pub primary: String,
    /// Structured payload for JSON output.
    pub json: &'a J,
}

impl<J: Serialize> Report<'_, J> {
    /// Prints the report according to `settings.format`.
    pub fn print(&self, settings: &OutputSettings) -> CliResult<()> {
        match settings.format {
            OutputFormat::Table => {
                if !settings.quiet {
                    print_header(self.title);
                }
                print_table(&self.rows);
            }
            OutputFormat::Json => print_json(self.json)?,
            OutputFormat::Csv => print_csv(&self.rows)?,
            OutputFormat::Minimal => println!("{}", self.primary),
        }
        Ok(())
    }
}

/// Prints a detail table (e.g. a year-by-year schedule) in table or CSV mode.
///
/// JSON and minimal output carry the same data through the report payload.
pub fn print_detail<T: Serialize + Tabled>(
    title: &str,
    data: &[T],
    settings: &OutputSettings,
) -> CliResult<()> {
    match settings.format {
        OutputFormat::Table => {
            if !settings.quiet {
                print_header(title);
            }
            print_table(data);
        }
        OutputFormat::Csv => print_csv(data)?,
        OutputFormat::Json | OutputFormat::Minimal => {}
    }
    Ok(())
}

/// Formats and prints a list based on the specified format.
pub fn print_output<T: Serialize + Tabled>(data: &[T], format: OutputFormat) -> CliResult<()> {
    match format {
        OutputFormat::Table => print_table(data),
        OutputFormat::Json => print_json(data)?,
        OutputFormat::Csv => print_csv(data)?,
        OutputFormat::Minimal => print_minimal(data)?,
    }
    Ok(())
}

/// Prints data as a formatted table.
fn print_table<T: Tabled>(data: &[T]) {
    if data.is_empty() {
        println!("No results.");
        return;
    }

    let table = Table::new(data)
        .with(Style::rounded())
        .with(Modify::new(Columns::first()).with(Alignment::left()))
        .to_string();

    println!("{}", table);
}

/// Prints data as JSON.
fn print_json<T: Serialize + ?Sized>(data: &T) -> CliResult<()> {
    println!("{}", serde_json::to_string_pretty(data)?);
    Ok(())
}

/// Prints data as CSV.
fn print_csv<T: Serialize>(data: &[T]) -> CliResult<()> {
    let mut wtr = csv::Writer::from_writer(std::io::stdout());
    for item in data {
        wtr.serialize(item).map_err(std::io::Error::from)?;
    }
    wtr.flush()?;
    Ok(())
}

/// Prints minimal output (first value only).
fn print_minimal<T: Serialize>(data: &[T]) -> CliResult<()> {
    if let Some(first) = data.first() {
        println!("{}", serde_json::to_string(first)?);
    }
    Ok(())
}

/// Prints a success message.
pub fn print_success(message: &str) {
    println!("{} {}", "✓".green(), message);
}

/// Prints an error message.
pub fn print_error(message: &str) {
    eprintln!("{} {}", "✗".red(), message);
}

/// Prints a warning message.
pub fn print_warning(message: &str) {
    eprintln!("{} {}", "⚠".yellow(), message);
}

/// Prints an info message.
pub fn print_info(message: &str) {
    println!("{} {}", "ℹ".blue(), message);
}

/// A key-value pair for display.
#[derive(Debug, Clone, Serialize, Tabled)]
pub struct KeyValue {
    #[tabled(rename = "Metric")]
    pub key: String,
    #[tabled(rename = "Value")]
    pub value: String,
}

impl KeyValue {
    /// Creates a new key-value pair.
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }
}

/// Prints a header for a section.
pub fn print_header(title: &str) {
    println!("\n{}", title.bold().underline());
}

/// Prints a divider line.
pub fn print_divider() {
    println!("{}", "─".repeat(60).dimmed());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_settings_formatting() {
        let settings = OutputSettings {
            currency_symbol: "€".to_string(),
            ..OutputSettings::default()
        };
        assert_eq!(settings.money(1_234.5), "€ 1,234.50");
        assert_eq!(settings.percent(15.0), "15.00%");
        assert_eq!(settings.multiple(4.0 / 3.0), "1.33x");
        assert_eq!(settings.plain(34.0), "34.00");
        assert_eq!(settings.plain(-1_234.567), "-1234.57");
    }

    #[test]
    fn test_precision_applies() {
        let settings = OutputSettings {
            precision: 4,
            ..OutputSettings::default()
        };
        assert_eq!(settings.plain(80.0 / 6.0), "13.3333");
    }
}
