//! Roadway plan-set timing aggregation
//!
//! Per-year averages with best/worst selection, the selected-month view,
//! year-vs-year trend and per-year composition series.

use super::classification::{Insight, classify_roadway_month};
use super::common::{
    Extreme, YearValue, find_month, mean, month_series, records_for_year_sorted, select_extreme,
    share,
};
use crate::app::models::RoadwayRecord;
use crate::config::RoadwayThresholds;
use serde::Serialize;
use std::collections::BTreeMap;

/// Averages for one year
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RoadwayYearAverage {
    pub year: i32,
    /// Mean before-due-date percentage over months that reported it
    pub avg_before: f64,
    /// Summed late percentage over all months, divided by the same month count
    pub avg_late: f64,
    pub months_counted: usize,
}

/// All-years roadway summary
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RoadwayGlobalSummary {
    pub total_files: u64,
    /// Mean of per-year averages
    pub overall_avg_before: Option<f64>,
    pub best_year: Option<YearValue>,
    /// Year with the highest average late share
    pub worst_year: Option<YearValue>,
    pub per_year: Vec<RoadwayYearAverage>,
}

#[derive(Default)]
struct YearAccumulator {
    before: f64,
    count: usize,
    late: f64,
}

/// Compute the all-years summary
///
/// A year whose months never report a before-due-date percentage is left out
/// of the averages and of best/worst selection.
pub fn global_summary(records: &[RoadwayRecord]) -> RoadwayGlobalSummary {
    let total_files = records.iter().fold(0_u64, |acc, r| acc.saturating_add(r.total));

    let mut by_year: BTreeMap<i32, YearAccumulator> = BTreeMap::new();
    for record in records {
        let acc = by_year.entry(record.year).or_default();
        if let Some(before) = record.before_pct {
            acc.before += before;
            acc.count += 1;
        }
        acc.late += record.late_pct();
    }

    let per_year: Vec<RoadwayYearAverage> = by_year
        .into_iter()
        .filter(|(_, acc)| acc.count > 0)
        .map(|(year, acc)| RoadwayYearAverage {
            year,
            avg_before: acc.before / acc.count as f64,
            avg_late: acc.late / acc.count as f64,
            months_counted: acc.count,
        })
        .collect();

    let averages: Vec<f64> = per_year.iter().map(|y| y.avg_before).collect();
    let best_year = select_extreme(
        per_year.iter().map(|y| YearValue {
            year: y.year,
            value: y.avg_before,
        }),
        Extreme::Max,
    );
    let worst_year = select_extreme(
        per_year.iter().map(|y| YearValue {
            year: y.year,
            value: y.avg_late,
        }),
        Extreme::Max,
    );

    RoadwayGlobalSummary {
        total_files,
        overall_avg_before: mean(&averages),
        best_year,
        worst_year,
        per_year,
    }
}

/// Figures for one selected (year, month)
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RoadwayMonthSummary {
    /// Before-due-date share, 0 when not reported
    pub on_time_pct: f64,
    pub late_pct: f64,
    pub total: u64,
    pub timing_counts: [u64; 5],
    pub insight: Insight,
}

/// Summarize the selected month; `None` when no record matches
pub fn month_summary(
    records: &[RoadwayRecord],
    year: i32,
    month: &str,
    thresholds: &RoadwayThresholds,
) -> Option<RoadwayMonthSummary> {
    let record = find_month(records, year, month)?;
    let late_pct = record.late_pct();
    Some(RoadwayMonthSummary {
        on_time_pct: record.before_pct.unwrap_or(0.0),
        late_pct,
        total: record.total,
        timing_counts: record.timing_counts(),
        insight: classify_roadway_month(late_pct, thresholds),
    })
}

/// Before-due-date percentages of two years, month by month
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct YearComparison {
    pub year: i32,
    pub values: Vec<Option<f64>>,
    pub compare_year: i32,
    pub compare_values: Vec<Option<f64>>,
}

/// Trend of before-due-date percentages; gaps stay `None`
pub fn trend_comparison(records: &[RoadwayRecord], year: i32, compare_year: i32) -> YearComparison {
    YearComparison {
        year,
        values: month_series(records, year, |r| r.before_pct),
        compare_year,
        compare_values: month_series(records, compare_year, |r| r.before_pct),
    }
}

/// Plan sets received per year, ascending
pub fn totals_by_year(records: &[RoadwayRecord]) -> Vec<(i32, u64)> {
    let mut by_year: BTreeMap<i32, u64> = BTreeMap::new();
    for record in records {
        let total = by_year.entry(record.year).or_default();
        *total = total.saturating_add(record.total);
    }
    by_year.into_iter().collect()
}

/// Volume-weighted arrival composition for one year
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct YearComposition {
    pub year: i32,
    pub total_files: u64,
    pub before_pct: f64,
    pub after_pct: f64,
    pub after_adv_pct: f64,
    pub unknown_pct: f64,
}

#[derive(Default)]
struct CompositionAccumulator {
    total_files: u64,
    before: f64,
    after: f64,
    after_adv: f64,
    unknown: f64,
}

fn weighted(pct: Option<f64>, total: u64) -> f64 {
    pct.map(|p| p / 100.0 * total as f64).unwrap_or(0.0)
}

/// Per-year composition: monthly percentages weighted by monthly totals
///
/// A year with no files divides by 1 and therefore reports zeros.
pub fn composition_by_year(records: &[RoadwayRecord]) -> Vec<YearComposition> {
    let mut by_year: BTreeMap<i32, CompositionAccumulator> = BTreeMap::new();
    for record in records {
        let acc = by_year.entry(record.year).or_default();
        acc.total_files = acc.total_files.saturating_add(record.total);
        acc.before += weighted(record.before_pct, record.total);
        acc.after += weighted(record.after_pct, record.total);
        acc.after_adv += weighted(record.after_adv_pct, record.total);
        acc.unknown += weighted(record.unknown_pct, record.total);
    }

    by_year
        .into_iter()
        .map(|(year, acc)| {
            let divisor = if acc.total_files == 0 {
                1.0
            } else {
                acc.total_files as f64
            };
            YearComposition {
                year,
                total_files: acc.total_files,
                before_pct: acc.before / divisor * 100.0,
                after_pct: acc.after / divisor * 100.0,
                after_adv_pct: acc.after_adv / divisor * 100.0,
                unknown_pct: acc.unknown / divisor * 100.0,
            }
        })
        .collect()
}

/// Month-by-month detail for one year
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RoadwayYearDetail {
    pub year: i32,
    pub months: Vec<String>,
    pub before_pct: Vec<f64>,
    pub after_pct: Vec<f64>,
    pub after_adv_pct: Vec<f64>,
    pub unknown_pct: Vec<f64>,
    /// Timing buckets as a share of each month's total, earliest bucket first
    pub timeline: [Vec<f64>; 5],
}

/// Detail series for the selected year in calendar order
pub fn year_detail(records: &[RoadwayRecord], year: i32) -> RoadwayYearDetail {
    let mut detail = RoadwayYearDetail {
        year,
        ..Default::default()
    };

    for record in records_for_year_sorted(records, year) {
        detail.months.push(record.month.clone());
        detail.before_pct.push(record.before_pct.unwrap_or(0.0));
        detail.after_pct.push(record.after_pct.unwrap_or(0.0));
        detail.after_adv_pct.push(record.after_adv_pct.unwrap_or(0.0));
        detail.unknown_pct.push(record.unknown_pct.unwrap_or(0.0));

        let total = record.total as f64;
        for (bucket, count) in detail.timeline.iter_mut().zip(record.timing_counts()) {
            bucket.push(share(count as f64, total));
        }
    }

    detail
}
