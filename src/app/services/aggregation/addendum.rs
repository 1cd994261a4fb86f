//! Addendum issuance timing aggregation

use super::classification::{Insight, classify_addendum_month};
use super::common::{
    Extreme, YearValue, find_month, mean, month_series, records_for_year_sorted, select_extreme,
};
use crate::app::models::{AddendumRecord, Month};
use crate::config::AddendumThresholds;
use serde::Serialize;
use std::collections::BTreeMap;

/// Averages for one year
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AddendumYearAverage {
    pub year: i32,
    pub avg_early: f64,
    pub avg_late_week: f64,
    pub months: usize,
}

/// All-years addendum summary
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AddendumGlobalSummary {
    pub total_addenda: u64,
    /// Mean of per-year early averages
    pub overall_avg_early: Option<f64>,
    /// Year with the highest early share
    pub best_year: Option<YearValue>,
    /// Year with the lowest final-week share
    pub worst_year: Option<YearValue>,
    pub per_year: Vec<AddendumYearAverage>,
}

/// Compute the all-years summary
pub fn global_summary(records: &[AddendumRecord]) -> AddendumGlobalSummary {
    let total_addenda = records.iter().fold(0_u64, |acc, r| acc.saturating_add(r.total));

    let mut by_year: BTreeMap<i32, (f64, f64, usize)> = BTreeMap::new();
    for record in records {
        let (early, late_week, months) = by_year.entry(record.year).or_default();
        *early += record.early_pct();
        *late_week += record.late_week_pct();
        *months += 1;
    }

    let per_year: Vec<AddendumYearAverage> = by_year
        .into_iter()
        .map(|(year, (early, late_week, months))| AddendumYearAverage {
            year,
            avg_early: early / months as f64,
            avg_late_week: late_week / months as f64,
            months,
        })
        .collect();

    let averages: Vec<f64> = per_year.iter().map(|y| y.avg_early).collect();
    let best_year = select_extreme(
        per_year.iter().map(|y| YearValue {
            year: y.year,
            value: y.avg_early,
        }),
        Extreme::Max,
    );
    let worst_year = select_extreme(
        per_year.iter().map(|y| YearValue {
            year: y.year,
            value: y.avg_late_week,
        }),
        Extreme::Min,
    );

    AddendumGlobalSummary {
        total_addenda,
        overall_avg_early: mean(&averages),
        best_year,
        worst_year,
        per_year,
    }
}

/// Figures for one selected (year, month)
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AddendumMonthSummary {
    pub total: u64,
    pub early_pct: f64,
    pub late_week_pct: f64,
    pub timing_counts: [u64; 5],
    pub insight: Insight,
}

/// Summarize the selected month; `None` when no record matches
pub fn month_summary(
    records: &[AddendumRecord],
    year: i32,
    month: &str,
    thresholds: &AddendumThresholds,
) -> Option<AddendumMonthSummary> {
    let record = find_month(records, year, month)?;
    let early_pct = record.early_pct();
    let late_week_pct = record.late_week_pct();
    Some(AddendumMonthSummary {
        total: record.total,
        early_pct,
        late_week_pct,
        timing_counts: record.timing_counts(),
        insight: classify_addendum_month(early_pct, late_week_pct, thresholds),
    })
}

/// Letting-week percentages of two years; months without a record are `None`
pub fn letting_week_comparison(
    records: &[AddendumRecord],
    year: i32,
    compare_year: i32,
) -> (Vec<Option<f64>>, Vec<Option<f64>>) {
    (
        month_series(records, year, |r| Some(r.letting_week_pct)),
        month_series(records, compare_year, |r| Some(r.letting_week_pct)),
    )
}

/// Issuance percentages per period, one series per timing bucket
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AddendumTimeline {
    pub labels: Vec<String>,
    /// Advertisement, 3 weeks, 2 weeks, 1 week, letting week
    pub series: [Vec<f64>; 5],
}

impl AddendumTimeline {
    fn push(&mut self, label: String, record: &AddendumRecord) {
        self.labels.push(label);
        for (bucket, pct) in self.series.iter_mut().zip(record.timing_pcts()) {
            bucket.push(pct);
        }
    }
}

/// Monthly timeline of the selected year
pub fn year_timeline(records: &[AddendumRecord], year: i32) -> AddendumTimeline {
    let mut timeline = AddendumTimeline::default();
    for record in records_for_year_sorted(records, year) {
        timeline.push(record.month.clone(), record);
    }
    timeline
}

/// Timeline across every year, labelled `"<Month> <Year>"`
pub fn all_years_timeline(records: &[AddendumRecord]) -> AddendumTimeline {
    let mut sorted: Vec<&AddendumRecord> = records.iter().collect();
    sorted.sort_by_key(|r| (r.year, Month::sort_key(&r.month)));

    let mut timeline = AddendumTimeline::default();
    for record in sorted {
        timeline.push(format!("{} {}", record.month, record.year), record);
    }
    timeline
}
