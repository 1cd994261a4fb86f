//! Aggregation engine for dashboard metrics
//!
//! Pure functions over borrowed record slices. Each call is run-to-completion
//! and linear in the number of records; nothing here holds state between
//! selection changes.
//!
//! - [`common`] - Lookups, month ordering, shares and best/worst selection
//! - [`classification`] - Threshold rules producing toned narratives
//! - [`roadway`] - Plan-set timing summaries and series
//! - [`instate`] - In-state contracting shares and series
//! - [`addendum`] - Addendum timing summaries and timelines

pub mod addendum;
pub mod classification;
pub mod common;
pub mod instate;
pub mod roadway;

#[cfg(test)]
pub mod tests;

pub use classification::{Insight, Tone};
pub use common::{MonthlySelection, YearValue, distinct_years, share};
