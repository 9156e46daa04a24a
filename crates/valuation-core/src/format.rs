//! Display formatting for valuation results.
//!
//! Amounts are rounded through `Decimal` so that `2.675` renders as `2.68`
//! rather than inheriting binary floating-point artefacts.

use rust_decimal::prelude::*;

/// Rounds `value` to `precision` decimal places (midpoint away from zero).
///
/// Returns `None` for non-finite values or values outside `Decimal` range.
pub fn round_to(value: f64, precision: u32) -> Option<Decimal> {
    if !value.is_finite() {
        return None;
    }
    Decimal::from_f64(value)
        .map(|d| d.round_dp_with_strategy(precision, RoundingStrategy::MidpointAwayFromZero))
}

/// Formats a number with thousands separators, e.g. `1,234,567.89`.
pub fn format_grouped(value: f64, precision: u32) -> String {
    let Some(rounded) = round_to(value, precision) else {
        return value.to_string();
    };
    let text = format!("{:.prec$}", rounded.abs(), prec = precision as usize);
    let (int_part, frac_part) = match text.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (text.as_str(), None),
    };

    let mut grouped = String::with_capacity(text.len() + int_part.len() / 3 + 1);
    if rounded.is_sign_negative() && !rounded.is_zero() {
        grouped.push('-');
    }
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    if let Some(frac) = frac_part {
        grouped.push('.');
        grouped.push_str(frac);
    }
    grouped
}

/// Formats a monetary amount, e.g. `$ 1,234.50`.
pub fn format_currency(value: f64, symbol: &str, precision: u32) -> String {
    if symbol.is_empty() {
        format_grouped(value, precision)
    } else {
        format!("{symbol} {}", format_grouped(value, precision))
    }
}

/// Formats a percentage already expressed in percent units, e.g. `8.00%`.
pub fn format_percent(percent: f64, precision: u32) -> String {
    format!("{}%", format_grouped(percent, precision))
}

/// Formats a multiple or ratio, e.g. `13.33x`.
pub fn format_multiple(value: f64, precision: u32) -> String {
    format!("{}x", format_grouped(value, precision))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_round_to() {
        assert_eq!(round_to(34.68, 2), Some(dec!(34.68)));
        assert_eq!(round_to(1.0 / 3.0, 4), Some(dec!(0.3333)));
        assert_eq!(round_to(f64::INFINITY, 2), None);
    }

    #[test]
    fn test_grouping() {
        assert_eq!(format_grouped(1_234_567.891, 2), "1,234,567.89");
        assert_eq!(format_grouped(999.0, 2), "999.00");
        assert_eq!(format_grouped(-50_000.0, 2), "-50,000.00");
        assert_eq!(format_grouped(1000.0, 0), "1,000");
    }

    #[test]
    fn test_negative_zero_after_rounding() {
        assert_eq!(format_grouped(-0.001, 2), "0.00");
    }

    #[test]
    fn test_currency_and_suffixes() {
        assert_eq!(format_currency(80.0, "€", 2), "€ 80.00");
        assert_eq!(format_currency(80.0, "", 2), "80.00");
        assert_eq!(format_percent(8.0, 2), "8.00%");
        assert_eq!(format_multiple(13.333_333, 2), "13.33x");
    }

    #[test]
    fn test_non_finite_passthrough() {
        assert_eq!(format_grouped(f64::NAN, 2), "NaN");
    }
}
