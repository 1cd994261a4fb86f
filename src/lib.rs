//! Highway Dashboard Library
//!
//! Ingestion and derived-metrics engine behind a highway agency dashboard for
//! plan-submission timing, in-state contracting and addendum issuance data.
//!
//! This library provides tools for:
//! - Splitting CSV lines with quoted fields and mapping headers onto typed records
//! - Parsing the Roadway, InStateVsOutState and Addendum datasets with per-row recovery
//! - Computing per-year summaries, best/worst years and month-over-month series
//! - Formatting card text, narratives and chart payloads for a visualization sink
//! - Loading the three datasets concurrently and driving selection changes

pub mod config;
pub mod constants;

// Core application modules
pub mod app {
    pub mod models;
    pub mod services {
        pub mod aggregation;
        pub mod csv_parser;
        pub mod loader;
        pub mod presentation;
        pub mod session;
    }
}

// CLI modules
pub mod cli {
    pub mod args;
    pub mod commands;
}

// Re-export commonly used types
pub use app::models::{AddendumRecord, DatasetKind, InStateRecord, Month, RoadwayRecord};
pub use config::DashboardConfig;

/// Result type alias for the dashboard engine
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for dashboard loading, configuration and reporting
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// I/O operation failed
    #[error("I/O error: {message}")]
    Io {
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// A dataset resource could not be read
    #[error("Failed to load {dataset} data from '{path}'")]
    ResourceLoad {
        dataset: String,
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Configuration error
    #[error("Configuration error: {message}")]
    Configuration { message: String },

    /// Configuration file could not be decoded
    #[error("Invalid configuration file '{path}'")]
    ConfigParse {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    /// Data validation error
    #[error("Data validation error: {message}")]
    DataValidation { message: String },

    /// Operation cancelled before completion
    #[error("Interrupted: {reason}")]
    Interrupted { reason: String },

    /// Report serialization error
    #[error("Serialization error: {message}")]
    Serialization {
        message: String,
        #[source]
        source: serde_json::Error,
    },
}

impl Error {
    /// Create an I/O error with context
    pub fn io(message: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            message: message.into(),
            source,
        }
    }

    /// Create a resource load error for one dataset
    pub fn resource_load(
        dataset: impl Into<String>,
        path: impl Into<String>,
        source: std::io::Error,
    ) -> Self {
        Self::ResourceLoad {
            dataset: dataset.into(),
            path: path.into(),
            source,
        }
    }

    /// Create a configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Create a configuration file parse error
    pub fn config_parse(path: impl Into<String>, source: serde_json::Error) -> Self {
        Self::ConfigParse {
            path: path.into(),
            source,
        }
    }

    /// Create a data validation error
    pub fn data_validation(message: impl Into<String>) -> Self {
        Self::DataValidation {
            message: message.into(),
        }
    }

    /// Create an interruption error
    pub fn interrupted(reason: impl Into<String>) -> Self {
        Self::Interrupted {
            reason: reason.into(),
        }
    }

    /// Create a serialization error
    pub fn serialization(message: impl Into<String>, source: serde_json::Error) -> Self {
        Self::Serialization {
            message: message.into(),
            source,
        }
    }
}

// Automatic conversions from common error types
impl From<std::io::Error> for Error {
    fn from(error: std::io::Error) -> Self {
        Self::Io {
            message: "I/O operation failed".to_string(),
            source: error,
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(error: serde_json::Error) -> Self {
        Self::Serialization {
            message: "JSON serialization failed".to_string(),
            source: error,
        }
    }
}
