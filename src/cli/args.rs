//! Command-line argument definitions for the highway dashboard
//!
//! This module defines the complete CLI interface using the clap derive API.

use crate::app::models::{DatasetKind, Month};
use crate::app::services::session::SelectionEvent;
use crate::{Error, Result};
use clap::{Args as ClapArgs, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// CLI arguments for the highway dashboard engine
///
/// Loads the roadway plan-timing, in-state contracting and addendum exports
/// and renders the dashboard's cards, narratives and chart series.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "highway-dashboard",
    version,
    about = "Summarize highway agency plan-timing, contracting and addendum data",
    long_about = "Reads the agency's three CSV exports (roadway plan-set timing, in-state vs. \
                  out-of-state contracting and addendum issuance), derives yearly and monthly \
                  metrics and prints the dashboard's cards, narratives and chart series as text \
                  or JSON."
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands
#[derive(Debug, Clone, Subcommand)]
pub enum Commands {
    /// Print the dashboard for a selection of years and months
    Report(ReportArgs),
    /// Check the three exports and show parsing statistics
    Validate(ValidateArgs),
    /// Apply selection changes read from stdin, one per line
    Explore(ExploreArgs),
}

/// Data location, configuration and logging options shared by every command
#[derive(Debug, Clone, ClapArgs)]
pub struct DataArgs {
    /// Directory holding the three CSV exports
    ///
    /// Overrides the configured data directory. Defaults to ./data
    #[arg(
        short = 'd',
        long = "data-dir",
        value_name = "PATH",
        help = "Directory holding the CSV exports"
    )]
    pub data_dir: Option<PathBuf>,

    /// Path to configuration file
    ///
    /// JSON configuration file for file names, agency name and thresholds. If
    /// not specified, looks for <config dir>/highway-dashboard/config.json
    #[arg(
        short = 'c',
        long = "config",
        value_name = "FILE",
        help = "Path to configuration file (JSON format)"
    )]
    pub config_file: Option<PathBuf>,

    /// Roadway export file name inside the data directory
    #[arg(long = "roadway-file", value_name = "NAME")]
    pub roadway_file: Option<String>,

    /// In-state contracting export file name inside the data directory
    #[arg(long = "instate-file", value_name = "NAME")]
    pub instate_file: Option<String>,

    /// Addendum export file name inside the data directory
    #[arg(long = "addendum-file", value_name = "NAME")]
    pub addendum_file: Option<String>,

    /// Agency named in the contracting narrative
    #[arg(long = "agency", value_name = "NAME")]
    pub agency_name: Option<String>,

    /// Logging verbosity level
    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        help = "Increase logging verbosity (-v: info, -vv: debug, -vvv: trace)"
    )]
    pub verbose: u8,

    /// Suppress output (quiet mode)
    ///
    /// Only show errors. Overrides verbose settings.
    #[arg(
        short = 'q',
        long = "quiet",
        help = "Suppress output except errors",
        conflicts_with = "verbose"
    )]
    pub quiet: bool,
}

/// Initial control values for the report
#[derive(Debug, Clone, Default, ClapArgs)]
pub struct SelectionArgs {
    /// Roadway year (defaults to the latest available)
    #[arg(long = "roadway-year", value_name = "YEAR")]
    pub roadway_year: Option<i32>,

    /// Roadway month, canonical English name (defaults to January)
    #[arg(long = "roadway-month", value_name = "MONTH")]
    pub roadway_month: Option<Month>,

    /// Roadway comparison year (defaults to the earliest available)
    #[arg(long = "roadway-compare", value_name = "YEAR")]
    pub roadway_compare_year: Option<i32>,

    /// In-state contracting year (defaults to the latest available)
    #[arg(long = "instate-year", value_name = "YEAR")]
    pub instate_year: Option<i32>,

    /// Addendum year (defaults to the latest available)
    #[arg(long = "addendum-year", value_name = "YEAR")]
    pub addendum_year: Option<i32>,

    /// Addendum month, canonical English name (defaults to January)
    #[arg(long = "addendum-month", value_name = "MONTH")]
    pub addendum_month: Option<Month>,

    /// Addendum comparison year (defaults to the earliest available)
    #[arg(long = "addendum-compare", value_name = "YEAR")]
    pub addendum_compare_year: Option<i32>,
}

/// Arguments for the report command
#[derive(Debug, Clone, Parser)]
pub struct ReportArgs {
    #[command(flatten)]
    pub data: DataArgs,

    #[command(flatten)]
    pub selection: SelectionArgs,

    /// Include chart series in human-readable output
    #[arg(long = "charts", help = "Include chart series in human-readable output")]
    pub show_charts: bool,

    /// Output format for the report
    #[arg(
        long = "output-format",
        value_enum,
        default_value = "human",
        help = "Output format for results"
    )]
    pub output_format: OutputFormat,

    /// Write the report to a file instead of stdout
    #[arg(
        short = 'o',
        long = "output-file",
        value_name = "FILE",
        help = "Output file for the report"
    )]
    pub output_file: Option<PathBuf>,
}

/// Arguments for the validate command
#[derive(Debug, Clone, Parser)]
pub struct ValidateArgs {
    #[command(flatten)]
    pub data: DataArgs,

    /// Fail when any dataset is missing, empty or lacks required columns
    #[arg(long = "strict", help = "Exit with an error if any dataset is unusable")]
    pub strict: bool,

    /// Output format for validation results
    #[arg(
        long = "output-format",
        value_enum,
        default_value = "human",
        help = "Output format for results"
    )]
    pub output_format: OutputFormat,
}

/// Arguments for the explore command
#[derive(Debug, Clone, Parser)]
pub struct ExploreArgs {
    #[command(flatten)]
    pub data: DataArgs,

    /// Output format for each event's result
    #[arg(
        long = "output-format",
        value_enum,
        default_value = "human",
        help = "Output format for results (json emits one object per line)"
    )]
    pub output_format: OutputFormat,
}

/// Output format options
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON format for scripting
    Json,
}

impl DataArgs {
    /// Check that explicitly given paths exist
    pub fn validate(&self) -> Result<()> {
        if let Some(data_dir) = &self.data_dir {
            if !data_dir.is_dir() {
                return Err(Error::configuration(format!(
                    "Data directory does not exist: {}",
                    data_dir.display()
                )));
            }
        }

        if let Some(config_file) = &self.config_file {
            if !config_file.exists() {
                return Err(Error::configuration(format!(
                    "Config file does not exist: {}",
                    config_file.display()
                )));
            }
        }

        for (flag, name) in [
            ("--roadway-file", &self.roadway_file),
            ("--instate-file", &self.instate_file),
            ("--addendum-file", &self.addendum_file),
        ] {
            if name.as_deref().is_some_and(|n| n.trim().is_empty()) {
                return Err(Error::configuration(format!("{} must not be empty", flag)));
            }
        }

        Ok(())
    }

    /// Get the appropriate log level based on verbosity settings
    pub fn get_log_level(&self) -> &'static str {
        if self.quiet {
            return "error";
        }

        match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }

    /// File name overrides given on the command line
    pub fn file_overrides(&self) -> Vec<(DatasetKind, &str)> {
        [
            (DatasetKind::Roadway, self.roadway_file.as_deref()),
            (DatasetKind::InState, self.instate_file.as_deref()),
            (DatasetKind::Addendum, self.addendum_file.as_deref()),
        ]
        .into_iter()
        .filter_map(|(kind, name)| name.map(|n| (kind, n)))
        .collect()
    }
}

impl SelectionArgs {
    /// Selection changes to apply over the defaults
    ///
    /// Years come before months so a month is looked up in the chosen year.
    pub fn events(&self) -> Vec<SelectionEvent> {
        let mut events = Vec::new();
        events.extend(self.roadway_year.map(SelectionEvent::RoadwayYear));
        events.extend(self.roadway_compare_year.map(SelectionEvent::RoadwayCompareYear));
        events.extend(self.roadway_month.map(SelectionEvent::RoadwayMonth));
        events.extend(self.instate_year.map(SelectionEvent::InStateYear));
        events.extend(self.addendum_year.map(SelectionEvent::AddendumYear));
        events.extend(self.addendum_compare_year.map(SelectionEvent::AddendumCompareYear));
        events.extend(self.addendum_month.map(SelectionEvent::AddendumMonth));
        events
    }
}

impl ReportArgs {
    pub fn validate(&self) -> Result<()> {
        self.data.validate()?;

        if self.output_file.is_some() && self.output_format != OutputFormat::Json {
            return Err(Error::configuration(
                "--output-file requires --output-format json".to_string(),
            ));
        }

        Ok(())
    }

    /// Check if progress reporting should be shown
    pub fn show_progress(&self) -> bool {
        !self.data.quiet && self.output_format == OutputFormat::Human
    }
}

impl ValidateArgs {
    pub fn validate(&self) -> Result<()> {
        self.data.validate()
    }

    pub fn show_progress(&self) -> bool {
        !self.data.quiet && self.output_format == OutputFormat::Human
    }
}

impl ExploreArgs {
    pub fn validate(&self) -> Result<()> {
        self.data.validate()
    }

    pub fn show_progress(&self) -> bool {
        !self.data.quiet && self.output_format == OutputFormat::Human
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Args {
        Args::try_parse_from(args).unwrap()
    }

    #[test]
    fn test_report_defaults() {
        let args = parse(&["highway-dashboard", "report"]);
        let Some(Commands::Report(report)) = args.command else {
            panic!("expected report command");
        };

        assert_eq!(report.output_format, OutputFormat::Human);
        assert!(report.selection.events().is_empty());
        assert_eq!(report.data.get_log_level(), "warn");
        assert!(report.show_progress());
    }

    #[test]
    fn test_selection_flags_become_events_in_order() {
        let args = parse(&[
            "highway-dashboard",
            "report",
            "--roadway-month",
            "March",
            "--roadway-year",
            "2023",
            "--addendum-compare",
            "2021",
        ]);
        let Some(Commands::Report(report)) = args.command else {
            panic!("expected report command");
        };

        assert_eq!(
            report.selection.events(),
            vec![
                SelectionEvent::RoadwayYear(2023),
                SelectionEvent::RoadwayMonth(Month::March),
                SelectionEvent::AddendumCompareYear(2021),
            ]
        );
    }

    #[test]
    fn test_non_canonical_month_is_rejected() {
        assert!(
            Args::try_parse_from(["highway-dashboard", "report", "--roadway-month", "march"])
                .is_err()
        );
    }

    #[test]
    fn test_verbosity_levels() {
        let args = parse(&["highway-dashboard", "validate", "-vv"]);
        let Some(Commands::Validate(validate)) = args.command else {
            panic!("expected validate command");
        };
        assert_eq!(validate.data.get_log_level(), "debug");

        let args = parse(&["highway-dashboard", "explore", "-q"]);
        let Some(Commands::Explore(explore)) = args.command else {
            panic!("expected explore command");
        };
        assert_eq!(explore.data.get_log_level(), "error");
        assert!(!explore.show_progress());
    }

    #[test]
    fn test_quiet_conflicts_with_verbose() {
        assert!(Args::try_parse_from(["highway-dashboard", "report", "-q", "-v"]).is_err());
    }

    #[test]
    fn test_validate_rejects_missing_paths() {
        let args = parse(&[
            "highway-dashboard",
            "report",
            "--data-dir",
            "/nonexistent/highway-data",
        ]);
        let Some(Commands::Report(report)) = args.command else {
            panic!("expected report command");
        };
        assert!(report.validate().is_err());
    }

    #[test]
    fn test_output_file_requires_json() {
        let args = parse(&["highway-dashboard", "report", "-o", "out.json"]);
        let Some(Commands::Report(report)) = args.command else {
            panic!("expected report command");
        };
        assert!(report.validate().is_err());
    }

    #[test]
    fn test_file_overrides() {
        let args = parse(&["highway-dashboard", "validate", "--addendum-file", "add.csv"]);
        let Some(Commands::Validate(validate)) = args.command else {
            panic!("expected validate command");
        };
        assert_eq!(
            validate.data.file_overrides(),
            vec![(DatasetKind::Addendum, "add.csv")]
        );
    }
}
