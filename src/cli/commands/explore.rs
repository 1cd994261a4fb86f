//! Explore command implementation
//!
//! Reads selection changes from stdin, one `"<control> <value>"` per line,
//! applies each to the session and prints the charts it touched together with
//! the refreshed section. Bad lines are reported and skipped.

use super::render::{
    print_addendum_section, print_chart, print_disabled, print_instate_section,
    print_roadway_section,
};
use super::shared::{RunStats, load_configuration, load_datasets, setup_logging};
use crate::app::models::DatasetKind;
use crate::app::services::presentation::BindOutcome;
use crate::app::services::presentation::charts::ChartId;
use crate::app::services::session::{DashboardSession, SelectionEvent};
use crate::cli::args::{ExploreArgs, OutputFormat};
use crate::{Error, Result};
use colored::*;
use serde::Serialize;
use std::time::Instant;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::{debug, info, warn};

/// JSON line emitted per event
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct EventOutcome<'a> {
    event: String,
    updates: Vec<ChartUpdate>,
    section: serde_json::Value,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<&'a str>,
}

#[derive(Debug, Serialize)]
struct ChartUpdate {
    chart: ChartId,
    outcome: BindOutcome,
}

pub async fn run_explore(args: ExploreArgs) -> Result<RunStats> {
    let start_time = Instant::now();

    setup_logging(&args.data)?;
    debug!("Explore arguments: {:?}", args);
    args.validate()?;

    let config = load_configuration(&args.data)?;
    let loaded = load_datasets(&config, args.show_progress()).await;
    let mut stats = RunStats::from_loaded(&loaded);

    let mut session = DashboardSession::new(loaded.into(), config);
    stats.charts_bound = session.initialize().len();

    if args.output_format == OutputFormat::Human {
        println!(
            "{}",
            "Enter selection changes such as 'roadway.month March' (empty line or 'quit' to stop)"
                .dimmed()
        );
    }

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines
        .next_line()
        .await
        .map_err(|e| Error::io("Failed to read selection events from stdin", e))?
    {
        let line = line.trim();
        if line.starts_with('#') {
            continue;
        }
        if line.is_empty() || line == "quit" || line == "exit" {
            break;
        }

        let result = line
            .parse::<SelectionEvent>()
            .and_then(|event| session.apply(event).map(|updates| (event, updates)));

        match result {
            Ok((event, updates)) => {
                stats.events_applied += 1;
                stats.charts_bound += updates.len();
                emit_event(&session, event, &updates, args.output_format)?;
            }
            Err(e) => {
                stats.events_rejected += 1;
                warn!("Rejected selection event '{}': {}", line, e);
                emit_rejection(line, &e, args.output_format)?;
            }
        }
    }

    stats.elapsed = start_time.elapsed();
    info!(
        "Explore session ended after {:.2}s: {} events applied, {} rejected",
        stats.elapsed.as_secs_f64(),
        stats.events_applied,
        stats.events_rejected
    );
    Ok(stats)
}

fn section_json(session: &DashboardSession, dataset: DatasetKind) -> Result<serde_json::Value> {
    let value = match dataset {
        DatasetKind::Roadway => serde_json::to_value(session.roadway_section()),
        DatasetKind::InState => serde_json::to_value(session.instate_section()),
        DatasetKind::Addendum => serde_json::to_value(session.addendum_section()),
    };
    value.map_err(|e| Error::serialization("Failed to serialize dashboard section", e))
}

fn print_json_line(outcome: &EventOutcome<'_>) -> Result<()> {
    let json = serde_json::to_string(outcome)
        .map_err(|e| Error::serialization("Failed to serialize event outcome", e))?;
    println!("{}", json);
    Ok(())
}

fn emit_event(
    session: &DashboardSession,
    event: SelectionEvent,
    updates: &[(ChartId, BindOutcome)],
    format: OutputFormat,
) -> Result<()> {
    match format {
        OutputFormat::Json => print_json_line(&EventOutcome {
            event: event.to_string(),
            updates: updates
                .iter()
                .map(|(chart, outcome)| ChartUpdate {
                    chart: *chart,
                    outcome: *outcome,
                })
                .collect(),
            section: section_json(session, event.dataset())?,
            error: None,
        }),
        OutputFormat::Human => {
            println!("\n{} {}", "\u{2713}".bright_green().bold(), event.to_string().bold());

            for (id, outcome) in updates {
                let data = session.charts().get(*id);
                match (outcome, data) {
                    (BindOutcome::Unchanged, _) => {
                        println!("   {} {}", id.title(), "(unchanged)".dimmed())
                    }
                    (_, Some(chart)) => print_chart(*id, chart),
                    (_, None) => {}
                }
            }

            match event.dataset() {
                DatasetKind::Roadway => match session.roadway_section() {
                    Some(section) => print_roadway_section(&section),
                    None => print_disabled("Roadway plan-set timing"),
                },
                DatasetKind::InState => match session.instate_section() {
                    Some(section) => print_instate_section(&section),
                    None => print_disabled("In-state vs. out-of-state contracting"),
                },
                DatasetKind::Addendum => match session.addendum_section() {
                    Some(section) => print_addendum_section(&section),
                    None => print_disabled("Addendum issuance timing"),
                },
            }
            Ok(())
        }
    }
}

fn emit_rejection(line: &str, error: &Error, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Json => {
            let message = error.to_string();
            print_json_line(&EventOutcome {
                event: line.to_string(),
                updates: Vec::new(),
                section: serde_json::Value::Null,
                error: Some(&message),
            })
        }
        OutputFormat::Human => {
            eprintln!("{} {}", "\u{2717}".bright_red().bold(), error);
            Ok(())
        }
    }
}
