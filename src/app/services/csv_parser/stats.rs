//! Parsing statistics and result structures for dashboard CSV exports
//!
//! This module provides types for tracking how many rows were read, kept and
//! dropped, and how many cells had to fall back to their defaults.

use crate::app::models::DatasetKind;
use serde::{Deserialize, Serialize};

/// Parsed records with the statistics gathered while parsing them
#[derive(Debug, Clone)]
pub struct ParseResult<R> {
    /// Retained records in input order
    pub records: Vec<R>,

    pub stats: ParseStats,
}

/// Parsing statistics for one dataset export
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParseStats {
    pub dataset: DatasetKind,

    /// Non-blank data rows encountered (header excluded)
    pub total_rows: usize,

    /// Blank lines skipped between data rows
    pub blank_lines: usize,

    /// Rows that passed the retention predicate
    pub records_retained: usize,

    /// Rows that failed the retention predicate
    pub rows_dropped: usize,

    /// Cells whose text could not be coerced
    pub coercion_failures: usize,

    /// Header cells that matched no known column
    pub unrecognized_columns: Vec<String>,

    /// Required columns missing from the header row
    pub missing_required_columns: Vec<String>,

    /// Text had no header plus data row
    pub structural_failure: bool,
}

impl ParseStats {
    /// Create new empty statistics
    pub fn new(dataset: DatasetKind) -> Self {
        Self {
            dataset,
            total_rows: 0,
            blank_lines: 0,
            records_retained: 0,
            rows_dropped: 0,
            coercion_failures: 0,
            unrecognized_columns: Vec::new(),
            missing_required_columns: Vec::new(),
            structural_failure: false,
        }
    }

    /// Calculate retention rate as a percentage
    pub fn success_rate(&self) -> f64 {
        if self.total_rows == 0 {
            0.0
        } else {
            (self.records_retained as f64 / self.total_rows as f64) * 100.0
        }
    }

    /// Check if the export is usable: well-formed, complete header, some records kept
    pub fn is_successful(&self) -> bool {
        !self.structural_failure
            && self.missing_required_columns.is_empty()
            && self.records_retained > 0
    }

    /// One-line summary for logs
    pub fn summary(&self) -> String {
        format!(
            "{}: {} of {} rows retained ({:.1}%), {} dropped, {} coercion failures",
            self.dataset,
            self.records_retained,
            self.total_rows,
            self.success_rate(),
            self.rows_dropped,
            self.coercion_failures
        )
    }
}
