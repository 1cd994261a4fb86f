//! Dataset parsing orchestration
//!
//! Turns the full text of one export into retained records plus statistics.
//! Parsing never fails: a structurally unusable file yields no records and is
//! flagged in [`ParseStats`].

use super::column_mapping::ColumnMapping;
use super::record_parser::{DatasetRecord, parse_record};
use super::splitter::split_line;
use super::stats::{ParseResult, ParseStats};
use crate::app::models::{AddendumRecord, InStateRecord, RoadwayRecord};
use crate::constants::BYTE_ORDER_MARK;
use tracing::{debug, warn};

/// Parse a complete export for any dataset record type
pub fn parse_dataset<R: DatasetRecord>(text: &str) -> ParseResult<R> {
    let mut stats = ParseStats::new(R::KIND);
    let text = text.trim_start_matches(BYTE_ORDER_MARK).trim();
    let lines: Vec<&str> = text.lines().collect();

    if lines.len() < 2 {
        warn!(
            "{}: expected a header and at least one data row, found {} line(s)",
            R::KIND,
            lines.len()
        );
        stats.structural_failure = true;
        return ParseResult {
            records: Vec::new(),
            stats,
        };
    }

    let headers = split_line(lines[0]);
    let mapping = ColumnMapping::<R>::analyze(&headers);

    if !mapping.unrecognized_columns.is_empty() {
        debug!(
            "{}: ignoring unrecognized columns {:?}",
            R::KIND,
            mapping.unrecognized_columns
        );
    }
    if !mapping.is_complete() {
        warn!(
            "{}: required columns missing from header: {:?}",
            R::KIND,
            mapping.missing_required
        );
    }
    stats.unrecognized_columns = mapping.unrecognized_columns.clone();
    stats.missing_required_columns = mapping
        .missing_required
        .iter()
        .map(|s| s.to_string())
        .collect();

    let mut records = Vec::new();
    for (offset, line) in lines[1..].iter().enumerate() {
        if line.trim().is_empty() {
            stats.blank_lines += 1;
            continue;
        }
        stats.total_rows += 1;

        // Line numbers are 1-based and count the header.
        let fields = split_line(line);
        let row = parse_record(&fields, &mapping, offset + 2);
        stats.coercion_failures += row.coercion_failures;

        if row.record.is_retained() {
            records.push(row.record);
        } else {
            stats.rows_dropped += 1;
        }
    }
    stats.records_retained = records.len();

    debug!("{}", stats.summary());
    ParseResult { records, stats }
}

/// Parse the roadway plan-set timing export
pub fn parse_roadway_csv(text: &str) -> ParseResult<RoadwayRecord> {
    parse_dataset(text)
}

/// Parse the in-state vs. out-of-state contracting export
pub fn parse_instate_csv(text: &str) -> ParseResult<InStateRecord> {
    parse_dataset(text)
}

/// Parse the addendum timing export
pub fn parse_addendum_csv(text: &str) -> ParseResult<AddendumRecord> {
    parse_dataset(text)
}
