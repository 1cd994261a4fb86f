//! Display formatting for card values
//!
//! Percentages use one decimal with halves rounded away from zero, currency is
//! whole dollars with thousands separators, and unavailable values render as
//! the placeholder symbol.

use crate::constants::PLACEHOLDER;

/// Format to one decimal place, rounding exact halves away from zero
pub fn to_fixed_1(value: f64) -> String {
    // Only binary-exact halves such as 0.25 or 1.75 are true ties.
    let scaled = value * 4.0;
    let is_tie = scaled.fract() == 0.0 && (value * 2.0).fract() != 0.0;
    let rounded = if is_tie {
        (value * 10.0).round() / 10.0
    } else {
        value
    };
    let rounded = if rounded == 0.0 { 0.0 } else { rounded };
    format!("{:.1}", rounded)
}

/// `"85.5%"`, or the placeholder for a missing or non-numeric value
pub fn format_percent(value: Option<f64>) -> String {
    match value {
        Some(v) if v.is_finite() => format!("{}%", to_fixed_1(v)),
        _ => PLACEHOLDER.to_string(),
    }
}

/// Insert thousands separators into a run of digits
fn group_thousands(digits: &str) -> String {
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}

/// `"$1,234,567"`, or the placeholder for a missing or non-numeric value
pub fn format_currency(value: Option<f64>) -> String {
    match value {
        Some(v) if v.is_finite() => {
            let rounded = v.round();
            let digits = format!("{:.0}", rounded.abs());
            let sign = if rounded < 0.0 { "-" } else { "" };
            format!("${}{}", sign, group_thousands(&digits))
        }
        _ => PLACEHOLDER.to_string(),
    }
}

/// Plain integer count
pub fn format_count(value: u64) -> String {
    value.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_fixed_rounds_exact_halves_up() {
        assert_eq!(to_fixed_1(0.25), "0.3");
        assert_eq!(to_fixed_1(1.75), "1.8");
        assert_eq!(to_fixed_1(-0.25), "-0.3");
        assert_eq!(to_fixed_1(2.5), "2.5");
        assert_eq!(to_fixed_1(85.5), "85.5");
        assert_eq!(to_fixed_1(70.0), "70.0");
    }

    #[test]
    fn test_to_fixed_inexact_values() {
        // 1.05 is stored slightly above the half.
        assert_eq!(to_fixed_1(1.05), "1.1");
        assert_eq!(to_fixed_1(33.333333), "33.3");
        assert_eq!(to_fixed_1(66.666666), "66.7");
        assert_eq!(to_fixed_1(-0.0), "0.0");
    }

    #[test]
    fn test_format_percent() {
        assert_eq!(format_percent(Some(50.0)), "50.0%");
        assert_eq!(format_percent(Some(0.0)), "0.0%");
        assert_eq!(format_percent(None), "\u{2013}");
        assert_eq!(format_percent(Some(f64::NAN)), "\u{2013}");
    }

    #[test]
    fn test_format_currency() {
        assert_eq!(format_currency(Some(1_234_567.0)), "$1,234,567");
        assert_eq!(format_currency(Some(999.0)), "$999");
        assert_eq!(format_currency(Some(1000.0)), "$1,000");
        assert_eq!(format_currency(Some(25_000.5)), "$25,001");
        assert_eq!(format_currency(Some(0.0)), "$0");
        assert_eq!(format_currency(Some(-4_500.0)), "$-4,500");
        assert_eq!(format_currency(None), "\u{2013}");
    }

    #[test]
    fn test_format_count() {
        assert_eq!(format_count(0), "0");
        assert_eq!(format_count(12345), "12345");
    }
}
