//! Test utilities for dashboard CSV parser testing
//!
//! This module provides sample exports and helper functions used across the
//! parser test modules.

// Test modules
mod column_mapping_tests;

/// Header row of the roadway export as the agency publishes it
pub const ROADWAY_HEADER: &str = "Year,Month,% Received Before Plan Due Date,% Received After Due Date,% Received After Advertisement,Unknown Arrival,Total Files Received,1-2 Weeks Early,0-1 Week Early,On Due Date,0-1 Week Late,1-2 Week(s) Late";

/// Header row of the in-state contracting export
pub const INSTATE_HEADER: &str = "Year,Amount Awarded to In-state Contractor,Number of Contracts Awarded to In-state Contractor,Amount Awarded to Out-state Contractor,Number of Contracts Awarded to Out-state Contractor,Total Contracts,Total Amount,Contracts with at least one In-state Bidders - Number of contracts,Contracts with at least one In-state Bidder - Savings,Contracts with No In-state Bidders - Number of contracts,Contracts with No In-state Bidders - Savings";

/// Header row of the addendum export
pub const ADDENDUM_HEADER: &str = "Year,Month,Advertisement,3 Weeks Before,2 Weeks Before,1 Week Before,Letting Week,Total,Advertisement %,3 Weeks Before %,2 Weeks Before %,1 Week Before %,Letting Week %,Total %";

/// Helper to join a header and data rows into export text
pub fn csv_text(header: &str, rows: &[&str]) -> String {
    let mut text = String::from(header);
    for row in rows {
        text.push('\n');
        text.push_str(row);
    }
    text
}

/// Helper to create a small roadway export
pub fn create_test_roadway_csv() -> String {
    csv_text(
        ROADWAY_HEADER,
        &[
            "2024,January,80%,15%,5%,0%,20,4,6,6,3,1",
            "2024,February,60%,30%,10%,,10,1,2,3,2,2",
            ",March,50%,50%,0%,0%,4,1,1,1,1,0",
            "2024,,50%,50%,0%,0%,4,1,1,1,1,0",
        ],
    )
}

/// Helper to create a small in-state export
pub fn create_test_instate_csv() -> String {
    csv_text(
        INSTATE_HEADER,
        &[
            r#"2023,"$500,000",10,"$500,000",8,18,"$1,000,000",6,"$25,000",2,"$40,000""#,
            r#",$1,1,$1,1,2,$2,0,$0,0,$0"#,
        ],
    )
}

/// Helper to create a small addendum export
pub fn create_test_addendum_csv() -> String {
    csv_text(
        ADDENDUM_HEADER,
        &[
            "2024,January,2,3,1,2,2,10,20%,30%,10%,20%,20%,100%",
            "2024,February,0,0,0,0,0,0,0%,0%,0%,0%,0%,0%",
            "2024,March,1,1,1,1,1,,20%,20%,20%,20%,20%,100%",
        ],
    )
}
