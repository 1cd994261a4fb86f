//! End-to-end tests: CSV exports on disk through loading, aggregation and report
//!
//! Each test writes its exports into a temporary data directory, loads them
//! the way the CLI does and checks the views the dashboard would show.

use highway_dashboard::app::services::aggregation::{Tone, addendum, common, instate};
use highway_dashboard::app::services::loader::load_dashboard_data;
use highway_dashboard::app::services::presentation::{BindOutcome, ChartId};
use highway_dashboard::app::services::session::{DashboardData, DashboardSession, SelectionEvent};
use highway_dashboard::config::InStateThresholds;
use highway_dashboard::{DashboardConfig, Month};
use tempfile::TempDir;

const ROADWAY_CSV: &str = "\u{feff}Year,Month,% Received Before Plan Due Date,% Received After Due Date,% Received After Advertisement,Unknown Arrival,Total Files Received,1-2 Weeks Early,0-1 Week Early,On Due Date,0-1 Week Late,1-2 Week(s) Late
2023,January,60%,30%,10%,0%,10,2,2,2,2,2
2023,March,70%,20%,10%,0%,10,3,3,2,1,1
2024,January,80%,15%,5%,0%,20,4,6,6,3,1

2024,February,40%,45%,15%,0%,8,1,1,1,3,2
,April,50%,50%,0%,0%,4,1,1,1,1,0
";

const INSTATE_CSV: &str = r#"Year,Amount Awarded to In-state Contractor,Number of Contracts Awarded to In-state Contractor,Amount Awarded to Out-state Contractor,Number of Contracts Awarded to Out-state Contractor,Total Contracts,Total Amount,Contracts with at least one In-state Bidders - Number of contracts,Contracts with at least one In-state Bidder - Savings,Contracts with No In-state Bidders - Number of contracts,Contracts with No In-state Bidders - Savings
2022,"$300,000",4,"$700,000",6,10,"$1,000,000",3,"$12,500",2,"$80,000"
2023,"$500,000",9,"$500,000",9,18,"$1,000,000",6,"$25,000",0,$0
"#;

const ADDENDUM_CSV: &str = "Year,Month,Advertisement,3 Weeks Before,2 Weeks Before,1 Week Before,Letting Week,Total,Advertisement %,3 Weeks Before %,2 Weeks Before %,1 Week Before %,Letting Week %,Total %
2023,March,1,1,1,3,4,10,10%,10%,10%,30%,40%,100%
2024,January,3,3,2,1,1,10,30%,30%,20%,10%,10%,100%
2024,February,0,0,0,0,0,0,0%,0%,0%,0%,0%,0%
";

fn write_exports(roadway: &str, instate: &str, addendum: &str) -> TempDir {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("roadway_files.csv"), roadway).unwrap();
    std::fs::write(dir.path().join("InStateVsOutState.csv"), instate).unwrap();
    std::fs::write(dir.path().join("Addendum_data.csv"), addendum).unwrap();
    dir
}

async fn session_for(dir: &TempDir) -> DashboardSession {
    let config = DashboardConfig::default().with_data_dir(dir.path());
    let loaded = load_dashboard_data(&config).await;
    let mut session = DashboardSession::new(loaded.into(), config);
    session.initialize();
    session
}

#[tokio::test]
async fn test_single_roadway_row_without_percentages() {
    let dir = write_exports(
        "Year,Month,Total Files Received,0-1 Week Early,On Due Date\n2024,January,10,4,6",
        INSTATE_CSV,
        ADDENDUM_CSV,
    );
    let config = DashboardConfig::default().with_data_dir(dir.path());
    let data: DashboardData = load_dashboard_data(&config).await.into();

    assert_eq!(data.roadway.len(), 1);
    let record = &data.roadway[0];
    assert_eq!(record.year, 2024);
    assert_eq!(record.month, "January");
    assert_eq!(record.total, 10);
    assert_eq!(record.early01, 4);
    assert_eq!(record.on_due, 6);
    assert_eq!((record.early12, record.late01, record.late12), (0, 0, 0));
    assert_eq!(record.before_pct, None);
    assert_eq!(record.after_pct, None);

    assert!(common::find_month(&data.roadway, 2024, "January").is_some());
    assert!(common::find_month(&data.roadway, 2024, "February").is_none());
}

#[tokio::test]
async fn test_instate_share_from_currency_cells() {
    let dir = write_exports(ROADWAY_CSV, INSTATE_CSV, ADDENDUM_CSV);
    let config = DashboardConfig::default().with_data_dir(dir.path());
    let data: DashboardData = load_dashboard_data(&config).await.into();

    let record = data.instate.iter().find(|r| r.year == 2023).unwrap();
    assert_eq!(record.amount_in, 500_000.0);
    assert_eq!(record.total_amount, 1_000_000.0);

    let summary = instate::year_summary(&data.instate, 2023, &InStateThresholds::default()).unwrap();
    assert_eq!(summary.share_by_amount, 50.0);
    assert_eq!(summary.insight.tone, Tone::Good);
}

#[tokio::test]
async fn test_parsing_drops_and_keeps_rows_in_order() {
    let dir = write_exports(ROADWAY_CSV, INSTATE_CSV, ADDENDUM_CSV);
    let config = DashboardConfig::default().with_data_dir(dir.path());
    let loaded = load_dashboard_data(&config).await;

    let roadway_stats = loaded.roadway.stats.clone().unwrap();
    assert_eq!(roadway_stats.records_retained, 4);
    assert_eq!(roadway_stats.rows_dropped, 1);
    assert_eq!(roadway_stats.blank_lines, 1);

    let months: Vec<&str> = loaded.roadway.records.iter().map(|r| r.month.as_str()).collect();
    assert_eq!(months, vec!["January", "March", "January", "February"]);

    // Total 0 drops the February addendum row.
    assert_eq!(loaded.addendum.records.len(), 2);
}

#[tokio::test]
async fn test_default_report() {
    let dir = write_exports(ROADWAY_CSV, INSTATE_CSV, ADDENDUM_CSV);
    let session = session_for(&dir).await;
    let report = session.report();

    let roadway = report.roadway.unwrap();
    assert_eq!(roadway.available_years, vec![2023, 2024]);
    assert_eq!(roadway.selection.year, 2024);
    assert_eq!(roadway.selection.compare_year, 2023);
    assert_eq!(roadway.selection.month, Month::January);
    assert_eq!(roadway.summary.total_files, "48");
    assert_eq!(roadway.month.on_time, "80.0%");
    assert_eq!(roadway.month.late, "20.0%");
    assert_eq!(roadway.month.insight.tone, Tone::Good);

    let instate = report.instate.unwrap();
    assert_eq!(instate.year, 2023);
    assert_eq!(
        instate.cards.headline,
        "2023: 50.0% of contract VALUE and 50.0% of contract COUNT went to in-state contractors."
    );
    assert!(instate.cards.insight.contains("ARDOT saved $25,000"));

    let addendum = report.addendum.unwrap();
    assert_eq!(addendum.month.total, "10");
    assert_eq!(addendum.month.early, "80.0%");
    assert_eq!(addendum.month.insight.tone, Tone::Good);

    assert_eq!(report.charts.len(), 12);
}

#[tokio::test]
async fn test_comparison_gaps_stay_null() {
    let dir = write_exports(ROADWAY_CSV, INSTATE_CSV, ADDENDUM_CSV);
    let session = session_for(&dir).await;

    let trend = session.charts().get(ChartId::RoadwayTrend).unwrap();
    // 2024 has no March record, 2023 does.
    assert_eq!(trend.datasets[0].values[2], None);
    assert_eq!(trend.datasets[1].values[2], Some(70.0));
    // 2023 has no February record, 2024 does.
    assert_eq!(trend.datasets[0].values[1], Some(40.0));
    assert_eq!(trend.datasets[1].values[1], None);

    let comparison = addendum::letting_week_comparison(&session.data().addendum, 2024, 2023);
    assert_eq!(comparison.0[2], None);
    assert_eq!(comparison.1[2], Some(40.0));
}

#[tokio::test]
async fn test_selection_events_rebind_charts() {
    let dir = write_exports(ROADWAY_CSV, INSTATE_CSV, ADDENDUM_CSV);
    let mut session = session_for(&dir).await;

    let updates = session
        .apply("roadway.month February".parse::<SelectionEvent>().unwrap())
        .unwrap();
    assert_eq!(updates, vec![(ChartId::RoadwayTiming, BindOutcome::Updated)]);

    let timing = session.charts().get(ChartId::RoadwayTiming).unwrap();
    assert_eq!(
        timing.datasets[0].values,
        vec![Some(1.0), Some(1.0), Some(1.0), Some(3.0), Some(2.0)]
    );

    let month = session.roadway_section().unwrap().month;
    assert_eq!(month.late, "60.0%");
    assert_eq!(month.insight.tone, Tone::Bad);

    session.apply(SelectionEvent::RoadwayMonth(Month::December)).unwrap();
    let month = session.roadway_section().unwrap().month;
    assert_eq!(month.on_time, "No data");
    assert_eq!(month.insight.tone, Tone::Neutral);

    assert!(session.apply(SelectionEvent::RoadwayYear(2030)).is_err());
}

#[tokio::test]
async fn test_missing_resource_disables_only_its_section() {
    let dir = write_exports(ROADWAY_CSV, INSTATE_CSV, ADDENDUM_CSV);
    std::fs::remove_file(dir.path().join("InStateVsOutState.csv")).unwrap();

    let session = session_for(&dir).await;
    let report = session.report();

    assert!(report.roadway.is_some());
    assert!(report.instate.is_none());
    assert!(report.addendum.is_some());
    assert!(!report.charts.contains_key(&ChartId::InStateAmounts));
    assert_eq!(report.datasets.len(), 2);
}

#[tokio::test]
async fn test_json_report_shape() {
    let dir = write_exports(ROADWAY_CSV, INSTATE_CSV, ADDENDUM_CSV);
    let session = session_for(&dir).await;

    let json = serde_json::to_value(session.report()).unwrap();
    assert_eq!(json["agencyName"], "ARDOT");
    assert_eq!(json["roadway"]["selection"]["month"], "January");
    assert_eq!(json["roadway"]["month"]["insight"]["tone"], "good");
    assert!(json["charts"]["roadway-trend"]["datasets"][0]["values"][2].is_null());
    assert_eq!(json["datasets"][0]["dataset"], "roadway");
}
