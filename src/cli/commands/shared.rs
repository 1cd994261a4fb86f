//! Shared components for CLI commands
//!
//! This module contains logging setup, configuration loading, the loading
//! spinner and run statistics used by every command.

use crate::app::services::loader::{LoadedDatasets, load_dashboard_data};
use crate::cli::args::DataArgs;
use crate::config::DashboardConfig;
use crate::{Error, Result};
use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;
use tracing::{debug, info};

/// Run statistics reported by every command
#[derive(Debug, Clone, Default)]
pub struct RunStats {
    /// Datasets read and parsed
    pub datasets_loaded: usize,
    /// Datasets whose resource could not be read
    pub datasets_failed: usize,
    /// Records retained across all datasets
    pub records_loaded: usize,
    /// Chart payloads bound during the run
    pub charts_bound: usize,
    /// Selection events applied
    pub events_applied: usize,
    /// Selection events rejected
    pub events_rejected: usize,
    /// Total run time
    pub elapsed: Duration,
}

impl RunStats {
    /// Counts taken from a completed load
    pub fn from_loaded(loaded: &LoadedDatasets) -> Self {
        let failed = loaded.failure_count();
        Self {
            datasets_loaded: 3 - failed,
            datasets_failed: failed,
            records_loaded: loaded.roadway.records.len()
                + loaded.instate.records.len()
                + loaded.addendum.records.len(),
            ..Default::default()
        }
    }
}

/// Set up structured logging on stderr
pub fn setup_logging(args: &DataArgs) -> Result<()> {
    use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

    let log_level = args.get_log_level();

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("highway_dashboard={}", log_level)));

    let result = if args.quiet {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_level(true)
                    .with_writer(std::io::stderr)
                    .compact(),
            )
            .try_init()
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_level(true)
                    .with_timer(fmt::time::uptime())
                    .with_writer(std::io::stderr),
            )
            .try_init()
    };
    result.map_err(|e| Error::configuration(format!("Failed to initialize logging: {}", e)))?;

    debug!("Logging initialized at level: {}", log_level);
    Ok(())
}

/// Load configuration: explicit file, else the default location if present, then CLI overrides
pub fn load_configuration(args: &DataArgs) -> Result<DashboardConfig> {
    let default_config_path = if args.config_file.is_none() {
        DashboardConfig::default_config_path().ok()
    } else {
        None
    };

    let config_file = match &args.config_file {
        Some(path) => Some(path.as_path()),
        None => default_config_path
            .as_ref()
            .filter(|path| path.exists())
            .map(|path| path.as_path()),
    };

    let mut config = match config_file {
        Some(path) => {
            info!("Using config file: {}", path.display());
            DashboardConfig::load_from_file(path)?
        }
        None => {
            info!("No config file found, using defaults");
            DashboardConfig::default()
        }
    };

    apply_cli_overrides(&mut config, args);
    config.validate()?;

    debug!("Effective configuration: {:?}", config);
    Ok(config)
}

/// Apply CLI argument overrides to configuration
pub fn apply_cli_overrides(config: &mut DashboardConfig, args: &DataArgs) {
    if let Some(data_dir) = &args.data_dir {
        config.data_dir = data_dir.clone();
    }
    if let Some(agency_name) = &args.agency_name {
        config.agency_name = agency_name.clone();
    }
    for (kind, name) in args.file_overrides() {
        *config = std::mem::take(config).with_file_name(kind, name);
    }
}

/// Create a steady-ticking spinner
pub fn create_spinner(message: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    if let Ok(style) = ProgressStyle::default_spinner().template("{spinner:.green} [{elapsed_precise}] {msg}") {
        pb.set_style(style);
    }
    pb.set_message(message.to_string());
    pb.enable_steady_tick(Duration::from_millis(100));
    pb
}

/// Load the three datasets, with a spinner when progress is shown
pub async fn load_datasets(config: &DashboardConfig, show_progress: bool) -> LoadedDatasets {
    info!("Loading datasets from {}", config.data_dir.display());

    let spinner = show_progress.then(|| create_spinner("Loading dashboard data..."));
    let loaded = load_dashboard_data(config).await;

    if let Some(pb) = spinner {
        pb.finish_and_clear();
    }
    loaded
}
