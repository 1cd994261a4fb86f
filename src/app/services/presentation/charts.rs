//! Chart payloads handed to the visualization sink
//!
//! A payload is a list of category labels plus named numeric series. Gaps are
//! explicit `None` values so a sink can tell "no record" from zero.

use crate::app::services::aggregation::addendum::AddendumTimeline;
use crate::app::services::aggregation::instate::InStateSeries;
use crate::app::services::aggregation::roadway::{
    RoadwayYearDetail, YearComparison, YearComposition,
};
use crate::constants::{ADDENDUM_TIMING_LABELS, MONTHS, ROADWAY_TIMING_LABELS};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier of every chart the dashboard draws
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ChartId {
    RoadwayTiming,
    RoadwayTrend,
    RoadwayTotalsByYear,
    RoadwayCompositionByYear,
    RoadwayYearPercentages,
    RoadwayYearTimeline,
    InStateAmounts,
    InStateShares,
    AddendumMonth,
    AddendumComparison,
    AddendumYearTimeline,
    AddendumAllYearsTimeline,
}

impl ChartId {
    /// Chart title for text output
    pub fn title(self) -> &'static str {
        match self {
            ChartId::RoadwayTiming => "Submission timing for selected month",
            ChartId::RoadwayTrend => "Year vs. year: % received before due date",
            ChartId::RoadwayTotalsByYear => "Total plan sets received per year",
            ChartId::RoadwayCompositionByYear => "Arrival composition per year",
            ChartId::RoadwayYearPercentages => "Arrival composition per month",
            ChartId::RoadwayYearTimeline => "Plan receipt timeline",
            ChartId::InStateAmounts => "Contract value awarded by year",
            ChartId::InStateShares => "In-state share over time",
            ChartId::AddendumMonth => "Addendum distribution for selected month",
            ChartId::AddendumComparison => "Year vs. year: letting week %",
            ChartId::AddendumYearTimeline => "Addendum timeline for selected year",
            ChartId::AddendumAllYearsTimeline => "Addendum timeline across all years",
        }
    }
}

impl fmt::Display for ChartId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}

/// One named series of a chart
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Series {
    pub label: String,
    pub values: Vec<Option<f64>>,
}

impl Series {
    /// Series without gaps
    pub fn dense(label: impl Into<String>, values: impl IntoIterator<Item = f64>) -> Self {
        Self {
            label: label.into(),
            values: values.into_iter().map(Some).collect(),
        }
    }

    /// Series where `None` marks a gap
    pub fn sparse(label: impl Into<String>, values: Vec<Option<f64>>) -> Self {
        Self {
            label: label.into(),
            values,
        }
    }
}

/// Labels plus series for one chart
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartData {
    pub labels: Vec<String>,
    pub datasets: Vec<Series>,
}

impl ChartData {
    pub fn new(labels: impl IntoIterator<Item = impl Into<String>>, datasets: Vec<Series>) -> Self {
        Self {
            labels: labels.into_iter().map(Into::into).collect(),
            datasets,
        }
    }
}

fn counts_to_values(counts: Option<[u64; 5]>) -> Vec<f64> {
    counts.unwrap_or_default().iter().map(|c| *c as f64).collect()
}

const COMPOSITION_LABELS: [&str; 4] = [
    "% Before Plan Due Date",
    "% After Due Date",
    "% After Advertisement",
    "Unknown Arrival",
];

/// Timing buckets of the selected roadway month; zeros when there is no record
pub fn roadway_timing_chart(counts: Option<[u64; 5]>) -> ChartData {
    ChartData::new(
        ROADWAY_TIMING_LABELS,
        vec![Series::dense("Plan sets", counts_to_values(counts))],
    )
}

pub fn roadway_trend_chart(trend: &YearComparison) -> ChartData {
    ChartData::new(
        MONTHS,
        vec![
            Series::sparse(
                format!("{} \u{2013} % before due date", trend.year),
                trend.values.clone(),
            ),
            Series::sparse(
                format!("{} \u{2013} % before due date", trend.compare_year),
                trend.compare_values.clone(),
            ),
        ],
    )
}

pub fn roadway_totals_chart(totals: &[(i32, u64)]) -> ChartData {
    ChartData::new(
        totals.iter().map(|(year, _)| year.to_string()),
        vec![Series::dense(
            "Total projects received",
            totals.iter().map(|(_, total)| *total as f64),
        )],
    )
}

pub fn roadway_composition_chart(composition: &[YearComposition]) -> ChartData {
    ChartData::new(
        composition.iter().map(|c| c.year.to_string()),
        vec![
            Series::dense(COMPOSITION_LABELS[0], composition.iter().map(|c| c.before_pct)),
            Series::dense(COMPOSITION_LABELS[1], composition.iter().map(|c| c.after_pct)),
            Series::dense(COMPOSITION_LABELS[2], composition.iter().map(|c| c.after_adv_pct)),
            Series::dense(COMPOSITION_LABELS[3], composition.iter().map(|c| c.unknown_pct)),
        ],
    )
}

pub fn roadway_year_percentages_chart(detail: &RoadwayYearDetail) -> ChartData {
    ChartData::new(
        detail.months.clone(),
        vec![
            Series::dense(COMPOSITION_LABELS[0], detail.before_pct.clone()),
            Series::dense(COMPOSITION_LABELS[1], detail.after_pct.clone()),
            Series::dense(COMPOSITION_LABELS[2], detail.after_adv_pct.clone()),
            Series::dense(COMPOSITION_LABELS[3], detail.unknown_pct.clone()),
        ],
    )
}

pub fn roadway_year_timeline_chart(detail: &RoadwayYearDetail) -> ChartData {
    ChartData::new(
        detail.months.clone(),
        ROADWAY_TIMING_LABELS
            .iter()
            .zip(detail.timeline.iter())
            .map(|(label, values)| Series::dense(*label, values.clone()))
            .collect(),
    )
}

pub fn instate_amounts_chart(series: &InStateSeries) -> ChartData {
    ChartData::new(
        series.years.iter().map(i32::to_string),
        vec![
            Series::dense("Amount awarded to in-state", series.amount_in.clone()),
            Series::dense("Amount awarded to out-of-state", series.amount_out.clone()),
        ],
    )
}

pub fn instate_shares_chart(series: &InStateSeries) -> ChartData {
    ChartData::new(
        series.years.iter().map(i32::to_string),
        vec![
            Series::dense("In-state share by amount", series.share_by_amount.clone()),
            Series::dense("In-state share by contracts", series.share_by_count.clone()),
        ],
    )
}

/// Issuance counts of the selected addendum month; zeros when there is no record
pub fn addendum_month_chart(counts: Option<[u64; 5]>) -> ChartData {
    ChartData::new(
        ADDENDUM_TIMING_LABELS,
        vec![Series::dense("Number of addenda", counts_to_values(counts))],
    )
}

pub fn addendum_comparison_chart(
    year: i32,
    values: Vec<Option<f64>>,
    compare_year: i32,
    compare_values: Vec<Option<f64>>,
) -> ChartData {
    ChartData::new(
        MONTHS,
        vec![
            Series::sparse(format!("{} \u{2013} Letting Week %", year), values),
            Series::sparse(
                format!("{} \u{2013} Letting Week %", compare_year),
                compare_values,
            ),
        ],
    )
}

pub fn addendum_timeline_chart(timeline: &AddendumTimeline) -> ChartData {
    ChartData::new(
        timeline.labels.clone(),
        ADDENDUM_TIMING_LABELS
            .iter()
            .zip(timeline.series.iter())
            .map(|(label, values)| Series::dense(*label, values.clone()))
            .collect(),
    )
}
