//! FleetFlow - fleet management dashboard core
//!
//! A CLI over the fleet store: trucks, drivers, trips, reports,
//! maintenance, derived metrics, and AI insights.

use clap::Parser;
use fleetflow::cli::Cli;
use tracing_subscriber::EnvFilter;

fn main() {
    let cli = Cli::parse();

    let default_filter = if cli.verbose {
        "fleetflow=debug"
    } else {
        "fleetflow=warn"
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)),
        )
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = fleetflow::commands::execute(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
