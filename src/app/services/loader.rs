//! Concurrent loading of the three dashboard datasets
//!
//! All three resources are read together and awaited jointly. Each dataset is
//! handled independently: a read failure is logged and leaves that dataset
//! empty while the others continue.

use crate::app::models::{AddendumRecord, DatasetKind, InStateRecord, RoadwayRecord};
use crate::app::services::csv_parser::{DatasetRecord, ParseStats, parse_dataset};
use crate::config::DashboardConfig;
use crate::{Error, Result};
use std::path::{Path, PathBuf};
use tracing::{error, info, warn};

/// Outcome of loading one dataset resource
#[derive(Debug)]
pub struct DatasetLoad<R> {
    pub kind: DatasetKind,
    pub path: PathBuf,

    /// Retained records; empty on failure
    pub records: Vec<R>,

    /// Parse statistics, absent when the resource could not be read
    pub stats: Option<ParseStats>,

    /// Read failure, if any
    pub error: Option<Error>,
}

impl<R> DatasetLoad<R> {
    /// Whether the dashboard section backed by this dataset can be shown
    pub fn is_available(&self) -> bool {
        !self.records.is_empty()
    }

    /// Short status line for terminal output
    pub fn status(&self) -> String {
        match (&self.error, &self.stats) {
            (Some(e), _) => format!("failed: {}", e),
            (None, Some(stats)) if stats.structural_failure => {
                "empty: no header and data row".to_string()
            }
            (None, Some(stats)) => format!(
                "{} records ({} dropped, {} malformed cells)",
                stats.records_retained, stats.rows_dropped, stats.coercion_failures
            ),
            (None, None) => "not loaded".to_string(),
        }
    }
}

/// The three datasets after loading
#[derive(Debug)]
pub struct LoadedDatasets {
    pub roadway: DatasetLoad<RoadwayRecord>,
    pub instate: DatasetLoad<InStateRecord>,
    pub addendum: DatasetLoad<AddendumRecord>,
}

impl LoadedDatasets {
    /// Parse statistics of every dataset that was read
    pub fn stats(&self) -> Vec<&ParseStats> {
        [
            self.roadway.stats.as_ref(),
            self.instate.stats.as_ref(),
            self.addendum.stats.as_ref(),
        ]
        .into_iter()
        .flatten()
        .collect()
    }

    /// Number of datasets that failed to load
    pub fn failure_count(&self) -> usize {
        [
            self.roadway.error.is_some(),
            self.instate.error.is_some(),
            self.addendum.error.is_some(),
        ]
        .into_iter()
        .filter(|failed| *failed)
        .count()
    }
}

/// Read one resource as text
///
/// Bytes that are not valid UTF-8 (spreadsheet exports in a legacy code page)
/// become U+FFFD instead of failing the whole resource.
async fn read_resource(kind: DatasetKind, path: &Path) -> Result<String> {
    let bytes = tokio::fs::read(path)
        .await
        .map_err(|e| Error::resource_load(kind.display_name(), path.display().to_string(), e))?;

    match String::from_utf8(bytes) {
        Ok(text) => Ok(text),
        Err(e) => {
            warn!(
                "{} at {} is not valid UTF-8; invalid bytes replaced",
                kind,
                path.display()
            );
            Ok(String::from_utf8_lossy(e.as_bytes()).into_owned())
        }
    }
}

/// Read and parse one dataset, never failing the caller
pub async fn load_dataset<R: DatasetRecord>(path: impl Into<PathBuf>) -> DatasetLoad<R> {
    let path = path.into();
    let kind = R::KIND;

    match read_resource(kind, &path).await {
        Ok(text) => {
            let result = parse_dataset::<R>(&text);
            if result.records.is_empty() {
                warn!(
                    "{} dataset at {} has no usable records; section disabled",
                    kind,
                    path.display()
                );
            } else {
                info!("Loaded {}: {}", path.display(), result.stats.summary());
            }
            DatasetLoad {
                kind,
                path,
                records: result.records,
                stats: Some(result.stats),
                error: None,
            }
        }
        Err(e) => {
            error!("{}", e);
            DatasetLoad {
                kind,
                path,
                records: Vec::new(),
                stats: None,
                error: Some(e),
            }
        }
    }
}

/// Load all three datasets concurrently from the configured locations
pub async fn load_dashboard_data(config: &DashboardConfig) -> LoadedDatasets {
    let (roadway, instate, addendum) = tokio::join!(
        load_dataset::<RoadwayRecord>(config.dataset_path(DatasetKind::Roadway)),
        load_dataset::<InStateRecord>(config.dataset_path(DatasetKind::InState)),
        load_dataset::<AddendumRecord>(config.dataset_path(DatasetKind::Addendum)),
    );

    info!(
        "Datasets loaded: {} roadway, {} in-state, {} addendum records",
        roadway.records.len(),
        instate.records.len(),
        addendum.records.len()
    );

    LoadedDatasets {
        roadway,
        instate,
        addendum,
    }
}
