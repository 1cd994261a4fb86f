//! Configuration management and validation.
//!
//! Provides the dashboard configuration: where the three CSV resources live,
//! the agency named in narratives, and the classification thresholds used by
//! the aggregation engine. Configuration is stored as JSON.

use crate::constants::{
    CONFIG_DIR_NAME, CONFIG_FILE_NAME, DEFAULT_ADDENDUM_FILE, DEFAULT_AGENCY_NAME,
    DEFAULT_DATA_DIR, DEFAULT_INSTATE_FILE, DEFAULT_ROADWAY_FILE, thresholds,
};
use crate::app::models::DatasetKind;
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Roadway month classification thresholds (percent late)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RoadwayThresholds {
    /// Late share at or above which a month is high risk
    pub late_high: f64,

    /// Late share at or below which a month is on track
    pub late_low: f64,
}

impl Default for RoadwayThresholds {
    fn default() -> Self {
        Self {
            late_high: thresholds::ROADWAY_LATE_HIGH,
            late_low: thresholds::ROADWAY_LATE_LOW,
        }
    }
}

/// Addendum month classification thresholds
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AddendumThresholds {
    /// Early share at or above which a month is well planned
    pub early_good: f64,

    /// Final-week share at or above which a month is rushed
    pub late_bad: f64,
}

impl Default for AddendumThresholds {
    fn default() -> Self {
        Self {
            early_good: thresholds::ADDENDUM_EARLY_GOOD,
            late_bad: thresholds::ADDENDUM_LATE_BAD,
        }
    }
}

/// In-state narrative threshold
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InStateThresholds {
    /// In-state share of contract dollars below which money is leaving the state
    pub majority_share: f64,
}

impl Default for InStateThresholds {
    fn default() -> Self {
        Self {
            majority_share: thresholds::INSTATE_MAJORITY,
        }
    }
}

/// All classification thresholds
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ThresholdConfig {
    pub roadway: RoadwayThresholds,
    pub addendum: AddendumThresholds,
    pub instate: InStateThresholds,
}

/// Main configuration for the dashboard engine
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
    /// Directory containing the CSV resources
    pub data_dir: PathBuf,

    /// Roadway resource file name, relative to `data_dir`
    pub roadway_file: String,

    /// In-state contracting resource file name, relative to `data_dir`
    pub instate_file: String,

    /// Addendum resource file name, relative to `data_dir`
    pub addendum_file: String,

    /// Agency named in the contracting narrative
    pub agency_name: String,

    pub thresholds: ThresholdConfig,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from(DEFAULT_DATA_DIR),
            roadway_file: DEFAULT_ROADWAY_FILE.to_string(),
            instate_file: DEFAULT_INSTATE_FILE.to_string(),
            addendum_file: DEFAULT_ADDENDUM_FILE.to_string(),
            agency_name: DEFAULT_AGENCY_NAME.to_string(),
            thresholds: ThresholdConfig::default(),
        }
    }
}

impl DashboardConfig {
    /// Create configuration with a custom data directory
    pub fn with_data_dir(mut self, data_dir: impl Into<PathBuf>) -> Self {
        self.data_dir = data_dir.into();
        self
    }

    /// Create configuration with a custom agency name
    pub fn with_agency_name(mut self, agency_name: impl Into<String>) -> Self {
        self.agency_name = agency_name.into();
        self
    }

    /// Create configuration with custom thresholds
    pub fn with_thresholds(mut self, thresholds: ThresholdConfig) -> Self {
        self.thresholds = thresholds;
        self
    }

    /// Create configuration with a custom file name for one dataset
    pub fn with_file_name(mut self, kind: DatasetKind, file_name: impl Into<String>) -> Self {
        let file_name = file_name.into();
        match kind {
            DatasetKind::Roadway => self.roadway_file = file_name,
            DatasetKind::InState => self.instate_file = file_name,
            DatasetKind::Addendum => self.addendum_file = file_name,
        }
        self
    }

    /// Full path of the resource for one dataset
    pub fn dataset_path(&self, kind: DatasetKind) -> PathBuf {
        let file_name = match kind {
            DatasetKind::Roadway => &self.roadway_file,
            DatasetKind::InState => &self.instate_file,
            DatasetKind::Addendum => &self.addendum_file,
        };
        self.data_dir.join(file_name)
    }

    /// Default configuration file location
    pub fn default_config_path() -> Result<PathBuf> {
        dirs::config_dir()
            .map(|dir| dir.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
            .ok_or_else(|| Error::configuration("Unable to determine user config directory"))
    }

    /// Load configuration from a JSON file; absent keys keep their defaults
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            Error::io(
                format!("Failed to read config file '{}'", path.display()),
                e,
            )
        })?;

        let config: DashboardConfig = serde_json::from_str(&content)
            .map_err(|e| Error::config_parse(path.display().to_string(), e))?;

        debug!("Loaded configuration from {}", path.display());
        config.validate()?;
        Ok(config)
    }

    /// Check thresholds and file names for consistency
    pub fn validate(&self) -> Result<()> {
        for (name, file) in [
            ("roadway_file", &self.roadway_file),
            ("instate_file", &self.instate_file),
            ("addendum_file", &self.addendum_file),
        ] {
            if file.trim().is_empty() {
                return Err(Error::configuration(format!("{} must not be empty", name)));
            }
        }

        let t = &self.thresholds;
        let all = [
            t.roadway.late_high,
            t.roadway.late_low,
            t.addendum.early_good,
            t.addendum.late_bad,
            t.instate.majority_share,
        ];
        if all.iter().any(|v| !v.is_finite() || *v < 0.0 || *v > 100.0) {
            return Err(Error::configuration(
                "Thresholds must be percentages between 0 and 100",
            ));
        }

        if t.roadway.late_low > t.roadway.late_high {
            return Err(Error::configuration(format!(
                "Roadway late_low ({}) must not exceed late_high ({})",
                t.roadway.late_low, t.roadway.late_high
            )));
        }

        Ok(())
    }
}
