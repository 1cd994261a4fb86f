//! CSV parser for the dashboard's three data exports
//!
//! This module turns raw export text into typed Roadway, InStateVsOutState and
//! Addendum records. Each dataset is described by a declarative column table;
//! unknown columns are ignored and malformed cells fall back to defaults
//! without rejecting the row.
//!
//! ## Architecture
//!
//! The parser is organized into logical components:
//! - [`splitter`] - Single-line splitting with quoted fields
//! - [`column_mapping`] - Header-to-field binding per dataset
//! - [`record_parser`] - Column tables, retention rules and row construction
//! - [`field_parsers`] - Cell coercion for counts, percentages and currency
//! - [`parser`] - Whole-file orchestration
//! - [`stats`] - Parsing statistics and result structures
//!
//! ## Usage
//!
//! ```rust
//! use highway_dashboard::app::services::csv_parser::parse_roadway_csv;
//!
//! let text = "Year,Month,% Received Before Plan Due Date\n2024,January,80%";
//! let result = parse_roadway_csv(text);
//!
//! assert_eq!(result.records.len(), 1);
//! assert_eq!(result.records[0].before_pct, Some(80.0));
//! ```

pub mod column_mapping;
pub mod field_parsers;
pub mod parser;
pub mod record_parser;
pub mod splitter;
pub mod stats;

#[cfg(test)]
pub mod tests;

// Re-export main types for easy access
pub use column_mapping::{ColumnMapping, ColumnSpec};
pub use parser::{parse_addendum_csv, parse_dataset, parse_instate_csv, parse_roadway_csv};
pub use record_parser::DatasetRecord;
pub use splitter::split_line;
pub use stats::{ParseResult, ParseStats};
