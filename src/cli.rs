//! CLI definition using clap

use crate::metrics::TimeRange;
use crate::types::{ReportType, TruckStatus};
use clap::{Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Output format for results
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Table => write!(f, "table"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

#[derive(Parser)]
#[command(name = "fleetflow")]
#[command(version)]
#[command(about = "Fleet management core: trucks, drivers, trips, reports, and AI insights")]
#[command(long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output format (json, table). Uses config value if not specified.
    #[arg(long, short = 'f', global = true)]
    pub format: Option<OutputFormat>,

    /// Verbose output
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Seed empty collections with the default fleet
    Seed,

    /// Manage trucks
    Truck {
        #[command(subcommand)]
        action: TruckAction,
    },

    /// Manage drivers
    Driver {
        #[command(subcommand)]
        action: DriverAction,
    },

    /// Manage trips
    Trip {
        #[command(subcommand)]
        action: TripAction,
    },

    /// Manage reports
    Report {
        #[command(subcommand)]
        action: ReportAction,
    },

    /// Manage maintenance records
    Maintenance {
        #[command(subcommand)]
        action: MaintenanceAction,
    },

    /// Show derived metrics for a time range
    Metrics {
        /// Time range to aggregate over
        #[arg(long, short = 'r', value_enum, default_value_t = TimeRange::Month)]
        range: TimeRange,
    },

    /// Ask the AI collaborator for fleet insights
    Insights {
        /// Time range for the trip snapshot
        #[arg(long, short = 'r', value_enum, default_value_t = TimeRange::Month)]
        range: TimeRange,

        /// Dashboard view the insights are for
        #[arg(long, default_value = "overview")]
        context: String,
    },

    /// Manage configuration
    Config {
        /// Show current configuration
        #[arg(long)]
        show: bool,

        /// Set the Gemini API key
        #[arg(long)]
        set_api_key: Option<String>,

        /// Set the insight model
        #[arg(long)]
        set_model: Option<String>,

        /// Set the store directory
        #[arg(long)]
        set_store_dir: Option<PathBuf>,

        /// Set default output format
        #[arg(long)]
        set_output: Option<OutputFormat>,

        /// Reset to defaults
        #[arg(long)]
        reset: bool,
    },
}

#[derive(Subcommand)]
pub enum TruckAction {
    /// List all trucks
    List,

    /// Add a truck, or update it if the id already exists
    Add {
        /// Vehicle identification number
        #[arg(long)]
        vin: String,

        /// License plate
        #[arg(long)]
        plate: String,

        /// Model name, e.g. "Volvo FH16"
        #[arg(long)]
        model: String,

        #[arg(long)]
        year: i32,

        /// Diesel, Electric, Hydrogen, ...
        #[arg(long, default_value = "Diesel")]
        fuel_type: String,

        /// Maximum load in kg
        #[arg(long)]
        load_capacity: f64,

        #[arg(long, value_enum, default_value = "active")]
        status: TruckStatus,
    },

    /// Remove a truck. Trips and driver assignments are left untouched.
    Remove {
        /// Truck id
        id: String,

        /// Skip confirmation prompt
        #[arg(long, short = 'y')]
        yes: bool,
    },
}

#[derive(Subcommand)]
pub enum DriverAction {
    /// List all drivers
    List,

    /// Add a driver, or update them if the id already exists
    Add {
        #[arg(long)]
        name: String,

        /// License number
        #[arg(long)]
        license: String,

        /// Assigned truck id (not validated against the truck list)
        #[arg(long)]
        truck_id: Option<String>,
    },
}

#[derive(Subcommand)]
pub enum TripAction {
    /// List trips within a time range
    List {
        #[arg(long, short = 'r', value_enum, default_value_t = TimeRange::Month)]
        range: TimeRange,
    },

    /// Log a trip. Fuel figures are derived from distance.
    Add {
        #[arg(long)]
        truck_id: String,

        #[arg(long)]
        driver_id: String,

        #[arg(long)]
        origin: String,

        #[arg(long)]
        destination: String,

        /// Distance in km
        #[arg(long)]
        distance: f64,

        #[arg(long)]
        revenue: f64,
    },
}

#[derive(Subcommand)]
pub enum ReportAction {
    /// List all reports
    List,

    /// Add a report, or update it if the id already exists
    Add {
        title: String,

        #[arg(long = "type", value_enum, default_value = "operational")]
        report_type: ReportType,

        /// Free-text body
        #[arg(long)]
        content: Option<String>,
    },

    /// Remove a report
    Remove {
        /// Report id
        id: String,

        /// Skip confirmation prompt
        #[arg(long, short = 'y')]
        yes: bool,
    },
}

#[derive(Subcommand)]
pub enum MaintenanceAction {
    /// List all maintenance records
    List,

    /// Log a maintenance record
    Add {
        #[arg(long)]
        truck_id: String,

        #[arg(long)]
        description: String,

        #[arg(long)]
        cost: f64,

        /// Mileage at time of service
        #[arg(long)]
        mileage: f64,

        /// When the next service is due, e.g. "2026-12-01"
        #[arg(long)]
        next_due: String,
    },
}
