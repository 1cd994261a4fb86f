//! Validate command implementation
//!
//! Reads the three exports and reports, per dataset, whether the file could
//! be read and how many rows were kept, dropped or had malformed cells.

use super::shared::{RunStats, load_configuration, load_datasets, setup_logging};
use crate::app::models::DatasetKind;
use crate::app::services::csv_parser::ParseStats;
use crate::app::services::loader::{DatasetLoad, LoadedDatasets};
use crate::cli::args::{OutputFormat, ValidateArgs};
use crate::{Error, Result};
use colored::*;
use serde::Serialize;
use std::time::Instant;
use tracing::{debug, info, warn};

/// Validation outcome for one dataset
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DatasetValidation {
    pub dataset: DatasetKind,
    pub path: String,
    pub usable: bool,
    pub error: Option<String>,
    pub stats: Option<ParseStats>,
}

impl DatasetValidation {
    fn from_load<R>(load: &DatasetLoad<R>) -> Self {
        Self {
            dataset: load.kind,
            path: load.path.display().to_string(),
            usable: load.stats.as_ref().is_some_and(ParseStats::is_successful),
            error: load.error.as_ref().map(|e| format!("{:#}", e)),
            stats: load.stats.clone(),
        }
    }
}

/// Per-dataset validation results in display order
pub fn collect_validations(loaded: &LoadedDatasets) -> Vec<DatasetValidation> {
    vec![
        DatasetValidation::from_load(&loaded.roadway),
        DatasetValidation::from_load(&loaded.instate),
        DatasetValidation::from_load(&loaded.addendum),
    ]
}

pub async fn run_validate(args: ValidateArgs) -> Result<RunStats> {
    let start_time = Instant::now();

    setup_logging(&args.data)?;
    debug!("Validation arguments: {:?}", args);
    args.validate()?;

    let config = load_configuration(&args.data)?;
    let loaded = load_datasets(&config, args.show_progress()).await;
    let mut stats = RunStats::from_loaded(&loaded);

    let validations = collect_validations(&loaded);
    match args.output_format {
        OutputFormat::Human => print_human_validation(&validations),
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&validations)
                .map_err(|e| Error::serialization("Failed to serialize validation results", e))?;
            println!("{}", json);
        }
    }

    let unusable: Vec<String> = validations
        .iter()
        .filter(|v| !v.usable)
        .map(|v| v.dataset.to_string())
        .collect();
    if !unusable.is_empty() {
        warn!("Unusable datasets: {}", unusable.join(", "));
        if args.strict {
            return Err(Error::data_validation(format!(
                "{} dataset(s) unusable: {}",
                unusable.len(),
                unusable.join(", ")
            )));
        }
    }

    stats.elapsed = start_time.elapsed();
    info!(
        "Validation completed in {:.2}s: {} of 3 datasets usable",
        stats.elapsed.as_secs_f64(),
        3 - unusable.len()
    );
    Ok(stats)
}

fn print_human_validation(validations: &[DatasetValidation]) {
    println!("\n{}", "Dashboard Data Validation".bright_green().bold());

    for v in validations {
        let status = if v.usable {
            "OK".bright_green().bold()
        } else {
            "UNUSABLE".bright_red().bold()
        };
        println!("\n{} {}", status, v.dataset.to_string().bold());
        println!("   • File: {}", v.path);

        if let Some(error) = &v.error {
            println!("   • {}", error.bright_red());
            continue;
        }
        let Some(stats) = &v.stats else {
            continue;
        };

        if stats.structural_failure {
            println!("   • {}", "No header and data row found".bright_red());
            continue;
        }
        println!(
            "   • Rows: {} read, {} kept, {} dropped ({:.1}% kept)",
            stats.total_rows,
            stats.records_retained.to_string().bright_white().bold(),
            stats.rows_dropped,
            stats.success_rate()
        );
        if stats.blank_lines > 0 {
            println!("   • Blank lines skipped: {}", stats.blank_lines);
        }
        if stats.coercion_failures > 0 {
            println!(
                "   • Malformed cells defaulted: {}",
                stats.coercion_failures.to_string().bright_yellow()
            );
        }
        if !stats.missing_required_columns.is_empty() {
            println!(
                "   • Missing required columns: {}",
                stats.missing_required_columns.join(", ").bright_red()
            );
        }
        if !stats.unrecognized_columns.is_empty() {
            println!(
                "   • Ignored columns: {}",
                stats.unrecognized_columns.join(", ").dimmed()
            );
        }
    }
}
