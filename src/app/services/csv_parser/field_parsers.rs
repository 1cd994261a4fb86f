//! Field coercion utilities for dashboard CSV cells
//!
//! Each coercion takes an already split and trimmed cell and returns the typed
//! value together with a [`FieldOutcome`]. Malformed text never fails a row:
//! the value falls back to the field's default and the outcome lets the parser
//! count the failure.

use crate::constants::MAX_CELL_COUNT;
use regex::Regex;
use std::sync::LazyLock;

/// Whole-string decimal number, optionally signed, with optional exponent
static STRICT_NUMBER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[+-]?(\d+\.?\d*|\.\d+)([eE][+-]?\d+)?$").expect("valid strict number pattern")
});

/// Leading decimal number; anything after it is ignored
static NUMBER_PREFIX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[+-]?(\d+\.?\d*|\.\d+)([eE][+-]?\d+)?").expect("valid number prefix pattern")
});

/// Result of coercing one cell
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldOutcome {
    /// Cell held a valid value
    Parsed,
    /// Cell was empty; the default was used
    Empty,
    /// Cell held text that could not be coerced; the default was used
    Malformed,
}

/// A coerced value and how it was obtained
pub type Coerced<T> = (T, FieldOutcome);

/// Store a coerced value into a record slot and report the outcome
pub fn assign<T>(slot: &mut T, (value, outcome): Coerced<T>) -> FieldOutcome {
    *slot = value;
    outcome
}

/// Parse the whole string as a finite decimal number
pub fn parse_strict_number(raw: &str) -> Option<f64> {
    let trimmed = raw.trim();
    if !STRICT_NUMBER.is_match(trimmed) {
        return None;
    }
    trimmed.parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Parse the leading decimal number of a string, ignoring trailing text
pub fn parse_number_prefix(raw: &str) -> Option<f64> {
    let trimmed = raw.trim_start();
    NUMBER_PREFIX
        .find(trimmed)
        .and_then(|m| m.as_str().parse::<f64>().ok())
        .filter(|v| v.is_finite())
}

/// Convert a finite number to a non-negative whole count no larger than
/// [`MAX_CELL_COUNT`]
fn as_count(value: f64) -> Option<u64> {
    if value >= 0.0 && value.fract() == 0.0 && value <= MAX_CELL_COUNT as f64 {
        Some(value as u64)
    } else {
        None
    }
}

/// Trimmed text; empty text stays empty
pub fn coerce_text(raw: &str) -> Coerced<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        (String::new(), FieldOutcome::Empty)
    } else {
        (trimmed.to_string(), FieldOutcome::Parsed)
    }
}

/// Calendar year; 0 stands for "absent"
pub fn coerce_year(raw: &str) -> Coerced<i32> {
    if raw.trim().is_empty() {
        return (0, FieldOutcome::Empty);
    }
    match parse_strict_number(raw) {
        Some(v) if v.fract() == 0.0 && v >= i32::MIN as f64 && v <= i32::MAX as f64 => {
            (v as i32, FieldOutcome::Parsed)
        }
        _ => (0, FieldOutcome::Malformed),
    }
}

/// Non-negative integer count, 0 when empty or malformed
pub fn coerce_count(raw: &str) -> Coerced<u64> {
    if raw.trim().is_empty() {
        return (0, FieldOutcome::Empty);
    }
    match parse_strict_number(raw).and_then(as_count) {
        Some(count) => (count, FieldOutcome::Parsed),
        None => (0, FieldOutcome::Malformed),
    }
}

/// Percentage with the first `%` removed; `None` when empty or malformed
pub fn coerce_percent(raw: &str) -> Coerced<Option<f64>> {
    if raw.trim().is_empty() {
        return (None, FieldOutcome::Empty);
    }
    let without_sign = raw.replacen('%', "", 1);
    match parse_number_prefix(&without_sign) {
        Some(v) => (Some(v), FieldOutcome::Parsed),
        None => (None, FieldOutcome::Malformed),
    }
}

/// Percentage that defaults to 0 instead of `None`
pub fn coerce_percent_or_zero(raw: &str) -> Coerced<f64> {
    let (value, outcome) = coerce_percent(raw);
    (value.unwrap_or(0.0), outcome)
}

/// Currency magnitude with `$` and `,` removed, 0 when empty or malformed
pub fn coerce_currency(raw: &str) -> Coerced<f64> {
    let cleaned: String = raw.chars().filter(|c| *c != '$' && *c != ',').collect();
    let cleaned = cleaned.trim();
    if cleaned.is_empty() {
        return (0.0, FieldOutcome::Empty);
    }
    match parse_strict_number(cleaned) {
        Some(v) => (v, FieldOutcome::Parsed),
        None => (0.0, FieldOutcome::Malformed),
    }
}

/// Count written in currency style (`1,204`)
pub fn coerce_currency_count(raw: &str) -> Coerced<u64> {
    match coerce_currency(raw) {
        (_, FieldOutcome::Empty) => (0, FieldOutcome::Empty),
        (_, FieldOutcome::Malformed) => (0, FieldOutcome::Malformed),
        (value, FieldOutcome::Parsed) => match as_count(value) {
            Some(count) => (count, FieldOutcome::Parsed),
            None => (0, FieldOutcome::Malformed),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strict_number() {
        assert_eq!(parse_strict_number("42"), Some(42.0));
        assert_eq!(parse_strict_number(" -3.5 "), Some(-3.5));
        assert_eq!(parse_strict_number(".5"), Some(0.5));
        assert_eq!(parse_strict_number("1e3"), Some(1000.0));
        assert_eq!(parse_strict_number("12abc"), None);
        assert_eq!(parse_strict_number("abc"), None);
        assert_eq!(parse_strict_number("1e999"), None);
    }

    #[test]
    fn test_number_prefix() {
        assert_eq!(parse_number_prefix("87.5 approx"), Some(87.5));
        assert_eq!(parse_number_prefix("  12"), Some(12.0));
        assert_eq!(parse_number_prefix("n/a"), None);
    }

    #[test]
    fn test_coerce_percent() {
        assert_eq!(coerce_percent("85.5%"), (Some(85.5), FieldOutcome::Parsed));
        assert_eq!(coerce_percent("0%"), (Some(0.0), FieldOutcome::Parsed));
        assert_eq!(coerce_percent(""), (None, FieldOutcome::Empty));
        assert_eq!(coerce_percent("N/A"), (None, FieldOutcome::Malformed));
        // Only the first percent sign is removed before the prefix parse.
        assert_eq!(coerce_percent("%%5"), (None, FieldOutcome::Malformed));
        assert_eq!(coerce_percent("%5"), (Some(5.0), FieldOutcome::Parsed));
    }

    #[test]
    fn test_coerce_percent_or_zero() {
        assert_eq!(coerce_percent_or_zero(""), (0.0, FieldOutcome::Empty));
        assert_eq!(coerce_percent_or_zero("bad"), (0.0, FieldOutcome::Malformed));
        assert_eq!(coerce_percent_or_zero("33.3%"), (33.3, FieldOutcome::Parsed));
    }

    #[test]
    fn test_coerce_count() {
        assert_eq!(coerce_count("17"), (17, FieldOutcome::Parsed));
        assert_eq!(coerce_count("17.0"), (17, FieldOutcome::Parsed));
        assert_eq!(coerce_count(""), (0, FieldOutcome::Empty));
        assert_eq!(coerce_count("seventeen"), (0, FieldOutcome::Malformed));
        assert_eq!(coerce_count("-2"), (0, FieldOutcome::Malformed));
        assert_eq!(coerce_count("2.5"), (0, FieldOutcome::Malformed));
        assert_eq!(
            coerce_count("9007199254740991"),
            (MAX_CELL_COUNT, FieldOutcome::Parsed)
        );
        assert_eq!(coerce_count("18446744073709551615"), (0, FieldOutcome::Malformed));
        assert_eq!(coerce_currency_count("1e300"), (0, FieldOutcome::Malformed));
    }

    #[test]
    fn test_coerce_year() {
        assert_eq!(coerce_year("2024"), (2024, FieldOutcome::Parsed));
        assert_eq!(coerce_year(""), (0, FieldOutcome::Empty));
        assert_eq!(coerce_year("FY24"), (0, FieldOutcome::Malformed));
        assert_eq!(coerce_year("2024.5"), (0, FieldOutcome::Malformed));
    }

    #[test]
    fn test_coerce_currency() {
        assert_eq!(
            coerce_currency("$1,250,000.50"),
            (1_250_000.5, FieldOutcome::Parsed)
        );
        assert_eq!(coerce_currency("$"), (0.0, FieldOutcome::Empty));
        assert_eq!(coerce_currency("TBD"), (0.0, FieldOutcome::Malformed));
        assert_eq!(coerce_currency_count("1,204"), (1204, FieldOutcome::Parsed));
        assert_eq!(coerce_currency_count("1.5"), (0, FieldOutcome::Malformed));
    }

    #[test]
    fn test_assign_writes_default_on_failure() {
        let mut slot = 9_u64;
        assert_eq!(assign(&mut slot, coerce_count("x")), FieldOutcome::Malformed);
        assert_eq!(slot, 0);
    }
}
