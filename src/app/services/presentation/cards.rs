//! Summary-card text for each dashboard section
//!
//! Cards are display strings built from aggregation results. Missing inputs
//! render as the placeholder or an explicit "no data" message.

use super::format::{format_count, format_currency, format_percent};
use crate::app::services::aggregation::addendum::{AddendumGlobalSummary, AddendumMonthSummary};
use crate::app::services::aggregation::instate::InStateYearSummary;
use crate::app::services::aggregation::roadway::{RoadwayGlobalSummary, RoadwayMonthSummary};
use crate::app::services::aggregation::{Insight, Tone, YearValue};
use crate::constants::{PLACEHOLDER, narratives};
use serde::Serialize;

/// All-years cards for the roadway section
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RoadwayGlobalCards {
    pub total_files: String,
    pub avg_on_time: String,
    pub best_year: String,
    pub worst_year: String,
}

fn year_card(value: Option<YearValue>, suffix: &str) -> String {
    match value {
        Some(v) => format!("{} ({}{})", v.year, format_percent(Some(v.value)), suffix),
        None => PLACEHOLDER.to_string(),
    }
}

impl RoadwayGlobalCards {
    pub fn from_summary(summary: &RoadwayGlobalSummary) -> Self {
        Self {
            total_files: format_count(summary.total_files),
            avg_on_time: format_percent(summary.overall_avg_before),
            best_year: year_card(summary.best_year, ""),
            worst_year: year_card(summary.worst_year, " late"),
        }
    }
}

/// Selected-month cards for the roadway section
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RoadwayMonthCards {
    pub on_time: String,
    pub late: String,
    pub total: String,
    pub insight: Insight,
}

impl RoadwayMonthCards {
    pub fn from_summary(summary: Option<&RoadwayMonthSummary>) -> Self {
        match summary {
            Some(s) => Self {
                on_time: format_percent(Some(s.on_time_pct)),
                late: format_percent(Some(s.late_pct)),
                total: format_count(s.total),
                insight: s.insight.clone(),
            },
            None => Self {
                on_time: narratives::NO_DATA.to_string(),
                late: narratives::NO_DATA.to_string(),
                total: PLACEHOLDER.to_string(),
                insight: Insight::new(Tone::Neutral, narratives::ROADWAY_NO_DATA),
            },
        }
    }
}

/// Selected-year cards and narrative for the contracting section
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InStateCards {
    pub total_contracts: String,
    pub share_by_amount: String,
    pub with_in_savings: String,
    pub no_in_savings: String,
    pub share_by_count: String,
    pub with_in_count: String,
    pub headline: String,
    /// Narrative text; empty when the year has no record
    pub insight: String,
    pub tone: Option<Tone>,
}

impl InStateCards {
    pub fn from_summary(summary: Option<&InStateYearSummary>, agency_name: &str) -> Self {
        let Some(s) = summary else {
            return Self {
                total_contracts: PLACEHOLDER.to_string(),
                share_by_amount: PLACEHOLDER.to_string(),
                with_in_savings: PLACEHOLDER.to_string(),
                no_in_savings: PLACEHOLDER.to_string(),
                share_by_count: PLACEHOLDER.to_string(),
                with_in_count: PLACEHOLDER.to_string(),
                headline: narratives::INSTATE_NO_DATA.to_string(),
                insight: String::new(),
                tone: None,
            };
        };

        let share_by_amount = format_percent(Some(s.share_by_amount));
        let share_by_count = format_percent(Some(s.share_by_count));
        let with_in_savings = format_currency(Some(s.with_in_savings));
        let no_in_savings = format_currency(Some(s.no_in_savings));

        let headline = format!(
            "{}: {} of contract VALUE and {} of contract COUNT went to in-state contractors.",
            s.year, share_by_amount, share_by_count
        );

        Self {
            total_contracts: format_count(s.total_contracts),
            with_in_count: format_count(s.with_in_count),
            insight: instate_narrative(s, agency_name),
            tone: Some(s.insight.tone),
            share_by_amount,
            share_by_count,
            with_in_savings,
            no_in_savings,
            headline,
        }
    }
}

/// Share narrative followed by the bidder-competition and no-bidder sentences
fn instate_narrative(summary: &InStateYearSummary, agency_name: &str) -> String {
    let mut text = summary.insight.message.clone();

    if summary.with_in_count > 0 {
        text.push_str(&format!(
            " On {} contracts with at least one in-state bidder, {} saved {} by awarding the contract to the low out-of-state bidder.",
            summary.with_in_count,
            agency_name,
            format_currency(Some(summary.with_in_savings))
        ));
    } else {
        text.push_str(narratives::INSTATE_NO_BIDDERS);
    }

    if summary.no_in_count > 0 {
        text.push_str(&format!(
            " Additionally, there were {} contracts totalling {} with no in-state bidders.",
            summary.no_in_count,
            format_currency(Some(summary.no_in_savings))
        ));
    }

    text
}

/// All-years cards for the addendum section
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AddendumGlobalCards {
    pub total_addenda: String,
    pub avg_early: String,
    pub best_year: String,
    pub worst_year: String,
}

impl AddendumGlobalCards {
    pub fn from_summary(summary: &AddendumGlobalSummary) -> Self {
        Self {
            total_addenda: format_count(summary.total_addenda),
            avg_early: format_percent(summary.overall_avg_early),
            best_year: year_card(summary.best_year, ""),
            // The dashboard labels the lowest final-week share with "early".
            worst_year: year_card(summary.worst_year, " early"),
        }
    }
}

/// Selected-month cards for the addendum section
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AddendumMonthCards {
    pub total: String,
    pub early: String,
    pub late_week: String,
    pub insight: Insight,
}

impl AddendumMonthCards {
    pub fn from_summary(summary: Option<&AddendumMonthSummary>) -> Self {
        match summary {
            Some(s) => Self {
                total: format_count(s.total),
                early: format_percent(Some(s.early_pct)),
                late_week: format_percent(Some(s.late_week_pct)),
                insight: s.insight.clone(),
            },
            None => Self {
                total: PLACEHOLDER.to_string(),
                early: PLACEHOLDER.to_string(),
                late_week: PLACEHOLDER.to_string(),
                insight: Insight::new(Tone::Neutral, narratives::ADDENDUM_NO_DATA),
            },
        }
    }
}
