//! Report command implementation
//!
//! Loads the datasets, applies the requested selection over the defaults and
//! prints every dashboard section as text or JSON.

use super::render::{
    print_addendum_section, print_chart, print_disabled, print_instate_section,
    print_roadway_section,
};
use super::shared::{RunStats, load_configuration, load_datasets, setup_logging};
use crate::app::services::session::{DashboardReport, DashboardSession};
use crate::cli::args::{OutputFormat, ReportArgs};
use crate::{Error, Result};
use colored::*;
use std::path::Path;
use std::time::Instant;
use tracing::{debug, info};

pub async fn run_report(args: ReportArgs) -> Result<RunStats> {
    let start_time = Instant::now();

    setup_logging(&args.data)?;
    debug!("Report arguments: {:?}", args);
    args.validate()?;

    let config = load_configuration(&args.data)?;
    let loaded = load_datasets(&config, args.show_progress()).await;
    let mut stats = RunStats::from_loaded(&loaded);

    let mut session = DashboardSession::new(loaded.into(), config);
    stats.charts_bound = session.initialize().len();

    for event in args.selection.events() {
        let updates = session.apply(event)?;
        stats.charts_bound += updates.len();
        stats.events_applied += 1;
    }

    let report = session.report();
    match args.output_format {
        OutputFormat::Human => print_human_report(&report, args.show_charts),
        OutputFormat::Json => write_json_report(&report, args.output_file.as_deref())?,
    }

    stats.elapsed = start_time.elapsed();
    info!(
        "Report completed in {:.2}s: {} records, {} charts",
        stats.elapsed.as_secs_f64(),
        stats.records_loaded,
        report.charts.len()
    );
    Ok(stats)
}

fn print_human_report(report: &DashboardReport, show_charts: bool) {
    println!(
        "{} {}",
        format!("{} Highway Dashboard", report.agency_name).bright_green().bold(),
        report
            .generated_at
            .format("%Y-%m-%d %H:%M UTC")
            .to_string()
            .dimmed()
    );

    match &report.roadway {
        Some(section) => print_roadway_section(section),
        None => print_disabled("Roadway plan-set timing"),
    }
    match &report.instate {
        Some(section) => print_instate_section(section),
        None => print_disabled("In-state vs. out-of-state contracting"),
    }
    match &report.addendum {
        Some(section) => print_addendum_section(section),
        None => print_disabled("Addendum issuance timing"),
    }

    if show_charts {
        println!("\n{}", "Charts".bright_green().bold());
        for (id, chart) in &report.charts {
            print_chart(*id, chart);
        }
    }
}

/// Serialize the report as pretty JSON to a file or stdout
pub fn write_json_report(report: &DashboardReport, output_file: Option<&Path>) -> Result<()> {
    let json = serde_json::to_string_pretty(report)
        .map_err(|e| Error::serialization("Failed to serialize dashboard report", e))?;

    match output_file {
        Some(path) => {
            std::fs::write(path, json).map_err(|e| {
                Error::io(format!("Failed to write report to {}", path.display()), e)
            })?;
            info!("Report written to {}", path.display());
        }
        None => println!("{}", json),
    }
    Ok(())
}
