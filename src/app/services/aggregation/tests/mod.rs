//! Test fixtures for aggregation testing

use crate::app::models::{AddendumRecord, InStateRecord, RoadwayRecord};

mod addendum_tests;

/// Roadway record with the percentage and total fields most tests care about
pub fn roadway(
    year: i32,
    month: &str,
    before: Option<f64>,
    after: Option<f64>,
    after_adv: Option<f64>,
    total: u64,
) -> RoadwayRecord {
    RoadwayRecord {
        year,
        month: month.to_string(),
        before_pct: before,
        after_pct: after,
        after_adv_pct: after_adv,
        total,
        ..Default::default()
    }
}

/// Addendum record from the five timing percentages
pub fn addendum(year: i32, month: &str, pcts: [f64; 5], total: u64) -> AddendumRecord {
    AddendumRecord {
        year,
        month: month.to_string(),
        advertisement_pct: pcts[0],
        three_weeks_before_pct: pcts[1],
        two_weeks_before_pct: pcts[2],
        one_week_before_pct: pcts[3],
        letting_week_pct: pcts[4],
        total,
        total_pct: 100.0,
        ..Default::default()
    }
}

/// In-state record with amounts and counts
pub fn instate(year: i32, amount_in: f64, total_amount: f64, count_in: u64, total: u64) -> InStateRecord {
    InStateRecord {
        year,
        amount_in,
        amount_out: total_amount - amount_in,
        total_amount,
        count_in,
        count_out: total - count_in,
        total_contracts: total,
        ..Default::default()
    }
}
