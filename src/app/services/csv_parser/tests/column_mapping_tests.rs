//! Tests for header analysis

use super::*;
use crate::app::models::{AddendumRecord, InStateRecord, RoadwayRecord};
use crate::app::services::csv_parser::{ColumnMapping, DatasetRecord, split_line};

#[test]
fn test_full_roadway_header_binds_every_column() {
    let headers = split_line(ROADWAY_HEADER);
    let mapping = ColumnMapping::<RoadwayRecord>::analyze(&headers);

    assert_eq!(mapping.bindings.len(), RoadwayRecord::columns().len());
    assert!(mapping.unrecognized_columns.is_empty());
    assert!(mapping.is_complete());
    assert_eq!(mapping.get_index("1-2 Week(s) Late"), Some(11));
}

#[test]
fn test_header_match_is_case_sensitive() {
    let headers = split_line("year,Month");
    let mapping = ColumnMapping::<RoadwayRecord>::analyze(&headers);

    assert!(!mapping.has_column("Year"));
    assert_eq!(mapping.unrecognized_columns, vec!["year"]);
    assert_eq!(mapping.missing_required, vec!["Year"]);
}

#[test]
fn test_missing_required_columns_per_dataset() {
    let headers = split_line("Year,Month,Advertisement");
    let mapping = ColumnMapping::<AddendumRecord>::analyze(&headers);
    assert_eq!(mapping.missing_required, vec!["Total"]);

    let headers = split_line(INSTATE_HEADER);
    let mapping = ColumnMapping::<InStateRecord>::analyze(&headers);
    assert!(mapping.is_complete());
    assert_eq!(mapping.header_width, 11);
}

#[test]
fn test_quoted_headers_are_unwrapped() {
    let headers = split_line(r#""Year","Month","Total Files Received""#);
    let mapping = ColumnMapping::<RoadwayRecord>::analyze(&headers);
    assert_eq!(mapping.bindings.len(), 3);
}
