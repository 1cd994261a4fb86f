//! Tests for addendum aggregation

use super::*;
use crate::app::services::aggregation::Tone;
use crate::app::services::aggregation::addendum::{
    all_years_timeline, global_summary, letting_week_comparison, month_summary, year_timeline,
};
use crate::config::AddendumThresholds;

#[test]
fn test_global_summary_best_and_worst() {
    let records = vec![
        addendum(2022, "January", [20.0, 20.0, 20.0, 20.0, 20.0], 5),
        addendum(2022, "February", [40.0, 20.0, 20.0, 10.0, 10.0], 5),
        addendum(2023, "January", [10.0, 10.0, 10.0, 30.0, 40.0], 8),
        addendum(2024, "January", [10.0, 10.0, 10.0, 30.0, 40.0], 2),
    ];
    let summary = global_summary(&records);

    assert_eq!(summary.total_addenda, 20);
    // 2022: (60 + 80) / 2 = 70, 2023 and 2024: 30
    assert_eq!(summary.best_year.map(|b| b.year), Some(2022));
    assert_eq!(summary.best_year.map(|b| b.value), Some(70.0));
    assert_eq!(summary.overall_avg_early, Some((70.0 + 30.0 + 30.0) / 3.0));
    // Lowest final-week share, first year wins
    assert_eq!(summary.worst_year.map(|w| w.year), Some(2022));
    assert_eq!(summary.worst_year.map(|w| w.value), Some(30.0));
}

#[test]
fn test_month_summary_rules() {
    let thresholds = AddendumThresholds::default();
    let mut records = vec![
        addendum(2024, "January", [30.0, 30.0, 10.0, 20.0, 10.0], 10),
        addendum(2024, "February", [10.0, 10.0, 10.0, 30.0, 40.0], 10),
        addendum(2024, "March", [20.0, 20.0, 10.0, 25.0, 25.0], 10),
    ];
    records[0].advertisement = 3;
    records[0].letting_week = 1;

    let january = month_summary(&records, 2024, "January", &thresholds).unwrap();
    assert_eq!(january.early_pct, 70.0);
    assert_eq!(january.insight.tone, Tone::Good);
    assert_eq!(january.timing_counts, [3, 0, 0, 0, 1]);

    let february = month_summary(&records, 2024, "February", &thresholds).unwrap();
    assert_eq!(february.late_week_pct, 70.0);
    assert_eq!(february.insight.tone, Tone::Bad);

    let march = month_summary(&records, 2024, "March", &thresholds).unwrap();
    assert_eq!(march.insight.tone, Tone::Neutral);

    assert!(month_summary(&records, 2024, "April", &thresholds).is_none());
}

#[test]
fn test_letting_week_comparison() {
    let records = vec![
        addendum(2024, "February", [0.0, 0.0, 0.0, 0.0, 0.0], 1),
        addendum(2021, "December", [0.0, 0.0, 0.0, 50.0, 50.0], 1),
    ];
    let (current, compare) = letting_week_comparison(&records, 2024, 2021);

    assert_eq!(current[0], None);
    assert_eq!(current[1], Some(0.0));
    assert_eq!(compare[11], Some(50.0));
    assert_eq!(compare.iter().filter(|v| v.is_some()).count(), 1);
}

#[test]
fn test_timelines_sorted_by_calendar() {
    let records = vec![
        addendum(2024, "March", [1.0, 2.0, 3.0, 4.0, 5.0], 1),
        addendum(2023, "December", [5.0, 4.0, 3.0, 2.0, 1.0], 1),
        addendum(2024, "January", [9.0, 0.0, 0.0, 0.0, 1.0], 1),
    ];

    let year = year_timeline(&records, 2024);
    assert_eq!(year.labels, vec!["January", "March"]);
    assert_eq!(year.series[0], vec![9.0, 1.0]);
    assert_eq!(year.series[4], vec![1.0, 5.0]);

    let all = all_years_timeline(&records);
    assert_eq!(
        all.labels,
        vec!["December 2023", "January 2024", "March 2024"]
    );
    assert_eq!(all.series[1], vec![4.0, 0.0, 2.0]);
}

#[test]
fn test_total_addenda_saturates_instead_of_overflowing() {
    let records = vec![
        addendum(2024, "January", [20.0, 20.0, 20.0, 20.0, 20.0], u64::MAX),
        addendum(2024, "February", [20.0, 20.0, 20.0, 20.0, 20.0], 3),
    ];

    assert_eq!(global_summary(&records).total_addenda, u64::MAX);
}
