//! Command handlers

use crate::cli::{
    Cli, Commands, DriverAction, MaintenanceAction, OutputFormat, ReportAction, TripAction,
    TruckAction,
};
use crate::config::Config;
use crate::constants::{default_trucks, revenue_series};
use crate::error::Result;
use crate::insights::{fleet_insights, GeminiBackend, InsightBackend, InsightRequest};
use crate::metrics::{aggregate, filter_by_range, fleet_status, TimeRange};
use crate::output;
use crate::store::{FileBackend, FleetStore};
use crate::types::{Driver, MaintenanceRecord, Report, Trip, Truck};
use chrono::Utc;
use std::io::{BufRead, Write};
use std::path::PathBuf;
use tracing::info;

/// Execute CLI command
pub fn execute(cli: Cli) -> Result<()> {
    let mut config = Config::load()?;
    let format = cli.format.unwrap_or(config.output_format);

    match cli.command {
        // Config management does not need a store
        Commands::Config {
            show,
            set_api_key,
            set_model,
            set_store_dir,
            set_output,
            reset,
        } => cmd_config(
            &mut config,
            show,
            set_api_key,
            set_model,
            set_store_dir,
            set_output,
            reset,
        ),

        command => {
            let store = FleetStore::open(config.store_dir()?)?;
            dispatch(&store, &config, format, command)
        }
    }
}

fn dispatch(
    store: &FleetStore<FileBackend>,
    config: &Config,
    format: OutputFormat,
    command: Commands,
) -> Result<()> {
    match command {
        Commands::Seed => cmd_seed(store),

        Commands::Truck { action } => match action {
            TruckAction::List => output::output_trucks(format, &store.trucks()?),
            TruckAction::Add {
                vin,
                plate,
                model,
                year,
                fuel_type,
                load_capacity,
                status,
            } => {
                let truck = Truck::new(vin, plate, model, year, fuel_type, load_capacity, status);
                let id = truck.id.clone();
                store.save_truck(truck)?;
                println!("Saved truck {}", id);
                Ok(())
            }
            TruckAction::Remove { id, yes } => cmd_remove_truck(store, &id, yes),
        },

        Commands::Driver { action } => match action {
            DriverAction::List => output::output_drivers(format, &store.drivers()?),
            DriverAction::Add {
                name,
                license,
                truck_id,
            } => {
                let driver = Driver::new(name, license, truck_id);
                let id = driver.id.clone();
                store.save_driver(driver)?;
                println!("Saved driver {}", id);
                Ok(())
            }
        },

        Commands::Trip { action } => match action {
            TripAction::List { range } => {
                let trips = store.trips()?;
                let filtered = filter_by_range(&trips, range, Utc::now());
                output::output_trips(format, &filtered, range)
            }
            TripAction::Add {
                truck_id,
                driver_id,
                origin,
                destination,
                distance,
                revenue,
            } => {
                let trip = Trip::new(
                    truck_id,
                    driver_id,
                    origin,
                    destination,
                    distance,
                    revenue,
                    Utc::now(),
                );
                let id = trip.id.clone();
                store.save_trip(trip)?;
                println!("Logged trip {}", id);
                Ok(())
            }
        },

        Commands::Report { action } => match action {
            ReportAction::List => output::output_reports(format, &store.reports()?),
            ReportAction::Add {
                title,
                report_type,
                content,
            } => {
                let report = Report::new(title, report_type, content, Utc::now());
                let id = report.id.clone();
                store.save_report(report)?;
                println!("Saved report {}", id);
                Ok(())
            }
            ReportAction::Remove { id, yes } => cmd_remove_report(store, &id, yes),
        },

        Commands::Maintenance { action } => match action {
            MaintenanceAction::List => output::output_maintenance(format, &store.maintenance()?),
            MaintenanceAction::Add {
                truck_id,
                description,
                cost,
                mileage,
                next_due,
            } => {
                let record = MaintenanceRecord::new(
                    truck_id,
                    description,
                    cost,
                    mileage,
                    next_due,
                    Utc::now(),
                );
                let id = record.id.clone();
                store.save_maintenance(record)?;
                println!("Logged maintenance record {}", id);
                Ok(())
            }
        },

        Commands::Metrics { range } => cmd_metrics(store, format, range),

        Commands::Insights { range, context } => {
            cmd_insights(store, config, format, range, &context)
        }

        Commands::Config { .. } => unreachable!("handled in execute"),
    }
}

fn cmd_seed(store: &FleetStore<FileBackend>) -> Result<()> {
    store.seed(&default_trucks())?;
    info!("seed applied");
    println!(
        "Store seeded: {} trucks, {} drivers, {} reports",
        store.trucks()?.len(),
        store.drivers()?.len(),
        store.reports()?.len(),
    );
    Ok(())
}

/// Ask the user to confirm a destructive operation on stdin
fn confirm(prompt: &str, yes: bool) -> Result<bool> {
    if yes {
        return Ok(true);
    }

    print!("{} [y/N] ", prompt);
    std::io::stdout().flush()?;

    let mut line = String::new();
    std::io::stdin().lock().read_line(&mut line)?;
    Ok(matches!(line.trim(), "y" | "Y" | "yes"))
}

fn cmd_remove_truck(store: &FleetStore<FileBackend>, id: &str, yes: bool) -> Result<()> {
    if !confirm("Are you sure you want to remove this truck?", yes)? {
        println!("Aborted.");
        return Ok(());
    }

    // No cascade: trips, maintenance records and driver assignments
    // keep referencing the removed id.
    if store.remove_truck(id)? {
        println!("Removed truck {}", id);
    } else {
        println!("No truck with id {}", id);
    }
    Ok(())
}

fn cmd_remove_report(store: &FleetStore<FileBackend>, id: &str, yes: bool) -> Result<()> {
    if !confirm("Are you sure you want to remove this report?", yes)? {
        println!("Aborted.");
        return Ok(());
    }

    if store.remove_report(id)? {
        println!("Removed report {}", id);
    } else {
        println!("No report with id {}", id);
    }
    Ok(())
}

fn cmd_metrics(
    store: &FleetStore<FileBackend>,
    format: OutputFormat,
    range: TimeRange,
) -> Result<()> {
    let trips = store.trips()?;
    let trucks = store.trucks()?;

    let filtered = filter_by_range(&trips, range, Utc::now());
    let metrics = aggregate(&filtered);
    let status = fleet_status(&trucks);

    output::output_metrics(format, range, &metrics, &status)
}

fn cmd_insights(
    store: &FleetStore<FileBackend>,
    config: &Config,
    format: OutputFormat,
    range: TimeRange,
    context: &str,
) -> Result<()> {
    let trucks = store.trucks()?;
    let drivers = store.drivers()?;
    let trips = store.trips()?;
    let filtered = filter_by_range(&trips, range, Utc::now());
    let revenue = revenue_series();

    let request = InsightRequest {
        trucks: &trucks,
        drivers: &drivers,
        revenue: &revenue,
        context,
        time_range: range,
        filtered_trips: &filtered,
    };

    let backend = config
        .api_key()
        .map(|key| GeminiBackend::new(key, config.model.clone()));
    let insights = fleet_insights(
        backend.as_ref().map(|b| b as &dyn InsightBackend),
        &request,
    );

    output::output_insights(format, &insights)
}

fn cmd_config(
    config: &mut Config,
    show: bool,
    set_api_key: Option<String>,
    set_model: Option<String>,
    set_store_dir: Option<PathBuf>,
    set_output: Option<OutputFormat>,
    reset: bool,
) -> Result<()> {
    if reset {
        *config = Config::default();
        config.save()?;
        println!("Configuration reset to defaults.");
        return Ok(());
    }

    let mut changed = false;

    if let Some(key) = set_api_key {
        config.api_key = Some(key);
        changed = true;
    }
    if let Some(model) = set_model {
        config.model = model;
        changed = true;
    }
    if let Some(dir) = set_store_dir {
        config.store_dir = Some(dir);
        changed = true;
    }
    if let Some(fmt) = set_output {
        config.output_format = fmt;
        changed = true;
    }

    if changed {
        config.save()?;
        println!("Configuration saved.");
    }

    if show || !changed {
        println!("{}", config);
    }

    Ok(())
}
