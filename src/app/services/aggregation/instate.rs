//! In-state vs. out-of-state contracting aggregation

use super::classification::{Insight, classify_instate_share};
use super::common::share;
use crate::app::models::InStateRecord;
use crate::config::InStateThresholds;
use serde::Serialize;

/// Figures for the selected contracting year
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InStateYearSummary {
    pub year: i32,
    pub total_contracts: u64,
    /// In-state share of total contract value
    pub share_by_amount: f64,
    /// In-state share of total contract count
    pub share_by_count: f64,
    pub with_in_count: u64,
    pub with_in_savings: f64,
    pub no_in_count: u64,
    pub no_in_savings: f64,
    pub insight: Insight,
}

/// Summarize one year; `None` when the year has no record
pub fn year_summary(
    records: &[InStateRecord],
    year: i32,
    thresholds: &InStateThresholds,
) -> Option<InStateYearSummary> {
    let record = records.iter().find(|r| r.year == year)?;
    let share_by_amount = share(record.amount_in, record.total_amount);
    let share_by_count = share(record.count_in as f64, record.total_contracts as f64);

    Some(InStateYearSummary {
        year,
        total_contracts: record.total_contracts,
        share_by_amount,
        share_by_count,
        with_in_count: record.with_in_count,
        with_in_savings: record.with_in_savings,
        no_in_count: record.no_in_count,
        no_in_savings: record.no_in_savings,
        insight: classify_instate_share(share_by_amount, thresholds),
    })
}

/// Year-ordered contracting series
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InStateSeries {
    pub years: Vec<i32>,
    pub amount_in: Vec<f64>,
    pub amount_out: Vec<f64>,
    pub share_by_amount: Vec<f64>,
    pub share_by_count: Vec<f64>,
}

/// Amounts and shares for every record, sorted by year
pub fn yearly_series(records: &[InStateRecord]) -> InStateSeries {
    let mut sorted: Vec<&InStateRecord> = records.iter().collect();
    sorted.sort_by_key(|r| r.year);

    let mut series = InStateSeries::default();
    for record in sorted {
        series.years.push(record.year);
        series.amount_in.push(record.amount_in);
        series.amount_out.push(record.amount_out);
        series
            .share_by_amount
            .push(share(record.amount_in, record.total_amount));
        series
            .share_by_count
            .push(share(record.count_in as f64, record.total_contracts as f64));
    }
    series
}
