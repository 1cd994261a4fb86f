//! Shared aggregation helpers
//!
//! Lookups, ordering and extreme selection used by every dataset's
//! aggregation. All functions are pure and linear in the number of records.

use crate::app::models::{Month, MonthlyRecord};
use crate::constants::DEFAULT_MONTH;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// `numerator / denominator * 100`, or 0 when the denominator is zero or not finite
pub fn share(numerator: f64, denominator: f64) -> f64 {
    if denominator == 0.0 || !denominator.is_finite() {
        0.0
    } else {
        numerator / denominator * 100.0
    }
}

/// Sorted distinct years
pub fn distinct_years(years: impl IntoIterator<Item = i32>) -> Vec<i32> {
    years.into_iter().collect::<BTreeSet<_>>().into_iter().collect()
}

/// First record with an exact (year, month) match
pub fn find_month<'a, R: MonthlyRecord>(records: &'a [R], year: i32, month: &str) -> Option<&'a R> {
    records
        .iter()
        .find(|r| r.year() == year && r.month() == month)
}

/// Records of one year in calendar order
///
/// The sort is stable, so duplicate months keep their input order and
/// non-canonical month names come first.
pub fn records_for_year_sorted<R: MonthlyRecord>(records: &[R], year: i32) -> Vec<&R> {
    let mut selected: Vec<&R> = records.iter().filter(|r| r.year() == year).collect();
    selected.sort_by_key(|r| Month::sort_key(r.month()));
    selected
}

/// Twelve values in calendar order; months without a record are `None`
pub fn month_series<R: MonthlyRecord>(
    records: &[R],
    year: i32,
    value: impl Fn(&R) -> Option<f64>,
) -> Vec<Option<f64>> {
    Month::ALL
        .iter()
        .map(|month| find_month(records, year, month.name()).and_then(&value))
        .collect()
}

/// A year paired with a derived value
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct YearValue {
    pub year: i32,
    pub value: f64,
}

/// Direction of an extreme search
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Extreme {
    Max,
    Min,
}

/// Pick the extreme value; on ties the earliest candidate wins
pub fn select_extreme(
    candidates: impl IntoIterator<Item = YearValue>,
    extreme: Extreme,
) -> Option<YearValue> {
    let mut best: Option<YearValue> = None;
    for candidate in candidates {
        let replace = match best {
            None => true,
            Some(current) => match extreme {
                Extreme::Max => candidate.value > current.value,
                Extreme::Min => candidate.value < current.value,
            },
        };
        if replace {
            best = Some(candidate);
        }
    }
    best
}

/// Mean of a slice, `None` when empty
pub fn mean(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        None
    } else {
        Some(values.iter().sum::<f64>() / values.len() as f64)
    }
}

/// Year, comparison year and month chosen for a monthly dataset
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthlySelection {
    pub year: i32,
    pub compare_year: i32,
    pub month: Month,
}

impl MonthlySelection {
    /// Latest year, earliest comparison year, January; `None` without years
    pub fn default_for(years: &[i32]) -> Option<Self> {
        let (first, last) = (years.first()?, years.last()?);
        Some(Self {
            year: *last,
            compare_year: *first,
            month: Month::from_name(DEFAULT_MONTH).unwrap_or(Month::January),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::models::RoadwayRecord;

    fn roadway(year: i32, month: &str, before: Option<f64>) -> RoadwayRecord {
        RoadwayRecord {
            year,
            month: month.to_string(),
            before_pct: before,
            ..Default::default()
        }
    }

    #[test]
    fn test_share_guards_zero_denominator() {
        assert_eq!(share(5.0, 0.0), 0.0);
        assert_eq!(share(0.0, 0.0), 0.0);
        assert_eq!(share(500_000.0, 1_000_000.0), 50.0);
        assert_eq!(share(1.0, f64::INFINITY), 0.0);
    }

    #[test]
    fn test_distinct_years_sorted() {
        assert_eq!(distinct_years([2023, 2021, 2023, 2022]), vec![2021, 2022, 2023]);
    }

    #[test]
    fn test_find_month_takes_first_match() {
        let records = vec![
            roadway(2024, "May", Some(1.0)),
            roadway(2024, "May", Some(2.0)),
        ];
        assert_eq!(
            find_month(&records, 2024, "May").and_then(|r| r.before_pct),
            Some(1.0)
        );
        assert!(find_month(&records, 2024, "June").is_none());
    }

    #[test]
    fn test_month_series_distinguishes_gaps() {
        let records = vec![
            roadway(2024, "January", Some(0.0)),
            roadway(2024, "March", None),
        ];
        let series = month_series(&records, 2024, |r| r.before_pct);
        assert_eq!(series.len(), 12);
        assert_eq!(series[0], Some(0.0));
        assert_eq!(series[1], None);
        assert_eq!(series[2], None);
    }

    #[test]
    fn test_records_for_year_sorted() {
        let records = vec![
            roadway(2024, "March", None),
            roadway(2023, "January", None),
            roadway(2024, "January", None),
            roadway(2024, "Febuary", None),
        ];
        let months: Vec<&str> = records_for_year_sorted(&records, 2024)
            .iter()
            .map(|r| r.month.as_str())
            .collect();
        assert_eq!(months, vec!["Febuary", "January", "March"]);
    }

    #[test]
    fn test_select_extreme_first_wins_on_tie() {
        let values = [
            YearValue { year: 2021, value: 60.0 },
            YearValue { year: 2022, value: 75.0 },
            YearValue { year: 2023, value: 75.0 },
        ];
        assert_eq!(select_extreme(values, Extreme::Max).map(|v| v.year), Some(2022));
        assert_eq!(select_extreme(values, Extreme::Min).map(|v| v.year), Some(2021));
        assert_eq!(select_extreme([], Extreme::Max), None);
    }

    #[test]
    fn test_default_selection() {
        let selection = MonthlySelection::default_for(&[2021, 2022, 2024]).unwrap();
        assert_eq!(selection.year, 2024);
        assert_eq!(selection.compare_year, 2021);
        assert_eq!(selection.month, Month::January);
        assert!(MonthlySelection::default_for(&[]).is_none());
    }
}
