//! Command implementations for the highway dashboard CLI
//!
//! Each command lives in its own module:
//! - `report`: print the dashboard for a selection
//! - `validate`: per-dataset parsing statistics
//! - `explore`: apply selection changes read from stdin

pub mod explore;
pub mod render;
pub mod report;
pub mod shared;
pub mod validate;

pub use shared::RunStats;

use crate::cli::args::{Args, Commands};
use crate::{Error, Result};

/// Dispatch to the subcommand handler
pub async fn run(args: Args) -> Result<RunStats> {
    let command = args
        .command
        .ok_or_else(|| Error::configuration("No command given"))?;

    match command {
        Commands::Report(report_args) => report::run_report(report_args).await,
        Commands::Validate(validate_args) => validate::run_validate(validate_args).await,
        Commands::Explore(explore_args) => explore::run_explore(explore_args).await,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_run_without_command_is_an_error() {
        let result = run(Args { command: None }).await;
        assert!(matches!(result, Err(Error::Configuration { .. })));
    }
}
