use clap::Parser;
use highway_dashboard::cli::{args::Args, commands};
use std::process;

fn main() {
    // Parse command line arguments
    let args = Args::parse();

    // If no subcommand was provided, show help and available commands
    if args.command.is_none() {
        show_help_and_commands();
        process::exit(0);
    }

    let runtime = tokio::runtime::Runtime::new().unwrap_or_else(|e| {
        eprintln!("Failed to create async runtime: {}", e);
        process::exit(1);
    });

    let result = runtime.block_on(async {
        let shutdown_signal = async {
            if let Err(e) = tokio::signal::ctrl_c().await {
                eprintln!("Failed to install CTRL+C signal handler: {}", e);
                std::future::pending::<()>().await;
            }
        };

        tokio::select! {
            result = commands::run(args) => {
                result
            }
            _ = shutdown_signal => {
                eprintln!("\nReceived CTRL+C, shutting down...");
                Err(highway_dashboard::Error::interrupted("Interrupted by user"))
            }
        }
    });

    match result {
        Ok(_stats) => process::exit(0),
        Err(error) => {
            eprintln!("Error: {:#}", error);
            process::exit(1);
        }
    }
}

/// Show help information and available commands when no subcommand is provided
fn show_help_and_commands() {
    println!("Highway Dashboard - plan timing, contracting and addendum metrics");
    println!("=================================================================");
    println!();
    println!("Reads the agency's roadway plan-set timing, in-state contracting and");
    println!("addendum CSV exports and prints the dashboard's cards and chart series.");
    println!();
    println!("USAGE:");
    println!("    highway-dashboard <COMMAND> [OPTIONS]");
    println!();
    println!("COMMANDS:");
    println!("    report      Print the dashboard for a selection of years and months");
    println!("    validate    Check the three exports and show parsing statistics");
    println!("    explore     Apply selection changes read from stdin");
    println!("    help        Show this help message or help for specific commands");
    println!();
    println!("EXAMPLES:");
    println!("    # Dashboard for the latest year, January:");
    println!("    highway-dashboard report --data-dir ./data");
    println!();
    println!("    # A specific month as JSON:");
    println!("    highway-dashboard report --roadway-year 2023 --roadway-month March \\");
    println!("                             --output-format json");
    println!();
    println!("    # Check the exports before publishing:");
    println!("    highway-dashboard validate --strict");
    println!();
    println!("    # Step through selections:");
    println!("    printf 'roadway.month June\\naddendum.year 2023\\n' | highway-dashboard explore");
    println!();
    println!("For detailed help on any command, use:");
    println!("    highway-dashboard <COMMAND> --help");
}
