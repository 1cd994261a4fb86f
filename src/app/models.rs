//! Data models for the highway dashboard
//!
//! This module contains the typed records produced by the dataset parsers and
//! the calendar helpers shared by the aggregation engine.

use crate::constants::MONTHS;
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Calendar month with canonical (exact, case-sensitive) names
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Month {
    January,
    February,
    March,
    April,
    May,
    June,
    July,
    August,
    September,
    October,
    November,
    December,
}

impl Month {
    /// All months in calendar order
    pub const ALL: [Month; 12] = [
        Month::January,
        Month::February,
        Month::March,
        Month::April,
        Month::May,
        Month::June,
        Month::July,
        Month::August,
        Month::September,
        Month::October,
        Month::November,
        Month::December,
    ];

    /// Zero-based position in the calendar
    pub fn index(self) -> usize {
        self as usize
    }

    /// Canonical display name
    pub fn name(self) -> &'static str {
        MONTHS[self.index()]
    }

    /// Look up a canonical month name; anything else is `None`
    pub fn from_name(name: &str) -> Option<Month> {
        MONTHS
            .iter()
            .position(|m| *m == name)
            .map(|index| Month::ALL[index])
    }

    /// Sort key for a raw month string. Non-canonical names sort before January.
    pub fn sort_key(name: &str) -> Option<usize> {
        Month::from_name(name).map(Month::index)
    }
}

impl fmt::Display for Month {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Month {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Month::from_name(s).ok_or_else(|| {
            Error::configuration(format!(
                "Unknown month '{}': expected one of {}",
                s,
                MONTHS.join(", ")
            ))
        })
    }
}

/// The three datasets feeding the dashboard
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DatasetKind {
    Roadway,
    InState,
    Addendum,
}

impl DatasetKind {
    pub const ALL: [DatasetKind; 3] = [
        DatasetKind::Roadway,
        DatasetKind::InState,
        DatasetKind::Addendum,
    ];

    /// Human-readable dataset name
    pub fn display_name(self) -> &'static str {
        match self {
            DatasetKind::Roadway => "Roadway plan timing",
            DatasetKind::InState => "In-state vs. out-of-state contracts",
            DatasetKind::Addendum => "Addendum timing",
        }
    }
}

impl fmt::Display for DatasetKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// Records keyed by (year, month)
pub trait MonthlyRecord {
    fn year(&self) -> i32;
    fn month(&self) -> &str;
}

/// One month of roadway plan-set submission timing
///
/// Percentages are `None` when the source cell was empty or unparsable, which
/// is distinct from a reported 0%. Counts default to 0.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoadwayRecord {
    /// Reporting year (0 when absent)
    pub year: i32,
    pub month: String,
    pub before_pct: Option<f64>,
    pub after_pct: Option<f64>,
    pub after_adv_pct: Option<f64>,
    pub unknown_pct: Option<f64>,
    /// Plan sets received this month
    pub total: u64,
    pub early12: u64,
    pub early01: u64,
    pub on_due: u64,
    pub late01: u64,
    pub late12: u64,
}

impl RoadwayRecord {
    /// Share of submissions received after the due date or after advertisement
    pub fn late_pct(&self) -> f64 {
        self.after_pct.unwrap_or(0.0) + self.after_adv_pct.unwrap_or(0.0)
    }

    /// Timing bucket counts from earliest to latest
    pub fn timing_counts(&self) -> [u64; 5] {
        [
            self.early12,
            self.early01,
            self.on_due,
            self.late01,
            self.late12,
        ]
    }
}

impl MonthlyRecord for RoadwayRecord {
    fn year(&self) -> i32 {
        self.year
    }

    fn month(&self) -> &str {
        &self.month
    }
}

/// One year of in-state vs. out-of-state contract awards
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InStateRecord {
    pub year: i32,
    pub amount_in: f64,
    pub count_in: u64,
    pub amount_out: f64,
    pub count_out: u64,
    pub total_contracts: u64,
    pub total_amount: f64,
    /// Contracts with at least one in-state bidder
    pub with_in_count: u64,
    pub with_in_savings: f64,
    /// Contracts with no in-state bidders
    pub no_in_count: u64,
    pub no_in_savings: f64,
}

/// One month of addendum issuance timing
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddendumRecord {
    pub year: i32,
    pub month: String,
    pub advertisement: u64,
    pub three_weeks_before: u64,
    pub two_weeks_before: u64,
    pub one_week_before: u64,
    pub letting_week: u64,
    pub total: u64,
    pub advertisement_pct: f64,
    pub three_weeks_before_pct: f64,
    pub two_weeks_before_pct: f64,
    pub one_week_before_pct: f64,
    pub letting_week_pct: f64,
    pub total_pct: f64,
}

impl AddendumRecord {
    /// Share issued at advertisement or two or more weeks before letting
    pub fn early_pct(&self) -> f64 {
        self.advertisement_pct + self.three_weeks_before_pct + self.two_weeks_before_pct
    }

    /// Share issued in the final week or during letting week
    pub fn late_week_pct(&self) -> f64 {
        self.one_week_before_pct + self.letting_week_pct
    }

    /// Issuance counts from earliest to latest
    pub fn timing_counts(&self) -> [u64; 5] {
        [
            self.advertisement,
            self.three_weeks_before,
            self.two_weeks_before,
            self.one_week_before,
            self.letting_week,
        ]
    }

    /// Issuance percentages from earliest to latest
    pub fn timing_pcts(&self) -> [f64; 5] {
        [
            self.advertisement_pct,
            self.three_weeks_before_pct,
            self.two_weeks_before_pct,
            self.one_week_before_pct,
            self.letting_week_pct,
        ]
    }
}

impl MonthlyRecord for AddendumRecord {
    fn year(&self) -> i32 {
        self.year
    }

    fn month(&self) -> &str {
        &self.month
    }
}
