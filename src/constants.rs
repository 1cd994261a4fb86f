//! Application constants for the highway dashboard
//!
//! This module contains the dataset header texts, default file names,
//! classification thresholds and fixed display strings used throughout
//! the dashboard engine.

// =============================================================================
// Calendar
// =============================================================================

/// Canonical month names in calendar order
pub const MONTHS: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// Month selected when the dashboard first opens
pub const DEFAULT_MONTH: &str = "January";

// =============================================================================
// Data Resources
// =============================================================================

/// Default directory holding the three CSV resources
pub const DEFAULT_DATA_DIR: &str = "data";

/// Default roadway plan-set timing resource
pub const DEFAULT_ROADWAY_FILE: &str = "roadway_files.csv";

/// Default in-state vs. out-of-state contracting resource
pub const DEFAULT_INSTATE_FILE: &str = "InStateVsOutState.csv";

/// Default addendum timing resource
pub const DEFAULT_ADDENDUM_FILE: &str = "Addendum_data.csv";

/// Application directory name under the user config directory
pub const CONFIG_DIR_NAME: &str = "highway-dashboard";

/// Configuration file name inside the application config directory
pub const CONFIG_FILE_NAME: &str = "config.json";

/// Byte-order mark some spreadsheet exports prepend
pub const BYTE_ORDER_MARK: char = '\u{feff}';

/// Largest count accepted from a cell (2^53 - 1, the largest whole number a
/// spreadsheet cell holds exactly)
pub const MAX_CELL_COUNT: u64 = 9_007_199_254_740_991;

// =============================================================================
// Dataset Headers
// =============================================================================

/// Column headers of the roadway plan-set timing export
pub mod roadway_headers {
    pub const YEAR: &str = "Year";
    pub const MONTH: &str = "Month";
    pub const BEFORE_PCT: &str = "% Received Before Plan Due Date";
    pub const AFTER_PCT: &str = "% Received After Due Date";
    pub const AFTER_ADV_PCT: &str = "% Received After Advertisement";
    pub const UNKNOWN_PCT: &str = "Unknown Arrival";
    pub const TOTAL: &str = "Total Files Received";
    pub const EARLY_1_2: &str = "1-2 Weeks Early";
    pub const EARLY_0_1: &str = "0-1 Week Early";
    pub const ON_DUE: &str = "On Due Date";
    pub const LATE_0_1: &str = "0-1 Week Late";
    pub const LATE_1_2: &str = "1-2 Week(s) Late";

    /// Columns a row cannot be retained without
    pub const REQUIRED: &[&str] = &[YEAR, MONTH];
}

/// Column headers of the in-state vs. out-of-state contracting export
pub mod instate_headers {
    pub const YEAR: &str = "Year";
    pub const AMOUNT_IN: &str = "Amount Awarded to In-state Contractor";
    pub const COUNT_IN: &str = "Number of Contracts Awarded to In-state Contractor";
    pub const AMOUNT_OUT: &str = "Amount Awarded to Out-state Contractor";
    pub const COUNT_OUT: &str = "Number of Contracts Awarded to Out-state Contractor";
    pub const TOTAL_CONTRACTS: &str = "Total Contracts";
    pub const TOTAL_AMOUNT: &str = "Total Amount";
    pub const WITH_IN_COUNT: &str =
        "Contracts with at least one In-state Bidders - Number of contracts";
    pub const WITH_IN_SAVINGS: &str = "Contracts with at least one In-state Bidder - Savings";
    pub const NO_IN_COUNT: &str = "Contracts with No In-state Bidders - Number of contracts";
    pub const NO_IN_SAVINGS: &str = "Contracts with No In-state Bidders - Savings";

    pub const REQUIRED: &[&str] = &[YEAR];
}

/// Column headers of the addendum timing export
pub mod addendum_headers {
    pub const YEAR: &str = "Year";
    pub const MONTH: &str = "Month";
    pub const ADVERTISEMENT: &str = "Advertisement";
    pub const THREE_WEEKS_BEFORE: &str = "3 Weeks Before";
    pub const TWO_WEEKS_BEFORE: &str = "2 Weeks Before";
    pub const ONE_WEEK_BEFORE: &str = "1 Week Before";
    pub const LETTING_WEEK: &str = "Letting Week";
    pub const TOTAL: &str = "Total";
    pub const ADVERTISEMENT_PCT: &str = "Advertisement %";
    pub const THREE_WEEKS_BEFORE_PCT: &str = "3 Weeks Before %";
    pub const TWO_WEEKS_BEFORE_PCT: &str = "2 Weeks Before %";
    pub const ONE_WEEK_BEFORE_PCT: &str = "1 Week Before %";
    pub const LETTING_WEEK_PCT: &str = "Letting Week %";
    pub const TOTAL_PCT: &str = "Total %";

    pub const REQUIRED: &[&str] = &[YEAR, MONTH, TOTAL];
}

// =============================================================================
// Classification Thresholds
// =============================================================================

pub mod thresholds {
    /// Roadway late share at or above which a month is high risk
    pub const ROADWAY_LATE_HIGH: f64 = 50.0;

    /// Roadway late share at or below which a month is on track
    pub const ROADWAY_LATE_LOW: f64 = 20.0;

    /// Addendum early share at or above which a month is well planned
    pub const ADDENDUM_EARLY_GOOD: f64 = 70.0;

    /// Addendum final-week share at or above which a month is rushed
    pub const ADDENDUM_LATE_BAD: f64 = 60.0;

    /// In-state share of contract dollars below which money is leaving the state
    pub const INSTATE_MAJORITY: f64 = 50.0;
}

// =============================================================================
// Display
// =============================================================================

/// Placeholder shown for any unavailable value
pub const PLACEHOLDER: &str = "\u{2013}";

/// Agency named in the contracting narrative
pub const DEFAULT_AGENCY_NAME: &str = "ARDOT";

/// Labels of the roadway submission-timing buckets in display order
pub const ROADWAY_TIMING_LABELS: [&str; 5] = [
    "1\u{2013}2 Weeks Early",
    "0\u{2013}1 Week Early",
    "On Due Date",
    "0\u{2013}1 Week Late",
    "1\u{2013}2 Weeks Late",
];

/// Labels of the addendum issuance buckets in display order
pub const ADDENDUM_TIMING_LABELS: [&str; 5] = [
    "Advertisement",
    "3 Weeks Before",
    "2 Weeks Before",
    "1 Week Before",
    "Letting Week",
];

/// Narrative texts attached to classified views
pub mod narratives {
    pub const ROADWAY_HIGH_RISK: &str =
        "More than half of the plans arrived late this month. Strong evidence of schedule risk.";
    pub const ROADWAY_ON_TRACK: &str =
        "Most plans arrived on time this month. This could be a benchmark period.";
    pub const ROADWAY_MIXED: &str =
        "On-time performance is mixed this month. There is visible room for improvement.";
    pub const ROADWAY_NO_DATA: &str = "No roadway files recorded for this month.";

    pub const ADDENDUM_EARLY: &str = "Most addenda were issued well ahead of letting. This shows strong planning and preparation.";
    pub const ADDENDUM_LATE: &str = "Most addenda are being issued in the final week. This creates last-minute pressure and risk.";
    pub const ADDENDUM_MIXED: &str = "Addendum timing is distributed across the letting cycle. There is opportunity to push more issuances earlier.";
    pub const ADDENDUM_NO_DATA: &str = "No addendum data recorded for this month.";

    pub const INSTATE_LEAVING: &str = "More than half of contract dollars are still leaving the state. This may indicate an opportunity to grow in-state contractor capacity.";
    pub const INSTATE_STAYING: &str = "Most contract dollars are staying with in-state contractors. Continued focus on in-state competition could reinforce this trend.";
    pub const INSTATE_NO_BIDDERS: &str =
        " There were no contracts with in-state bidders recorded this year.";
    pub const INSTATE_NO_DATA: &str = "No data for this year.";

    pub const NO_DATA: &str = "No data";
}
