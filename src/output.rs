//! Output formatting module

use crate::cli::OutputFormat;
use crate::error::Result;
use crate::insights::FleetInsights;
use crate::metrics::{FleetStatus, TimeRange, TripMetrics};
use crate::types::{Driver, MaintenanceRecord, Report, Trip, Truck};

fn print_json<T: serde::Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

pub fn output_trucks(format: OutputFormat, trucks: &[Truck]) -> Result<()> {
    if format == OutputFormat::Json {
        return print_json(&trucks);
    }

    if trucks.is_empty() {
        println!("No trucks registered.");
        return Ok(());
    }

    println!(
        "{:<10} {:<10} {:<24} {:<6} {:<13} {:>10} {:>7} {:>10}",
        "ID", "PLATE", "MODEL", "YEAR", "STATUS", "CAPACITY", "HEALTH", "MILEAGE"
    );
    for truck in trucks {
        println!(
            "{:<10} {:<10} {:<24} {:<6} {:<13} {:>10} {:>6}% {:>10}",
            truck.id,
            truck.plate,
            truck.model,
            truck.year,
            truck.status.label(),
            truck.load_capacity,
            truck.health_score,
            truck.mileage,
        );
    }
    Ok(())
}

pub fn output_drivers(format: OutputFormat, drivers: &[Driver]) -> Result<()> {
    if format == OutputFormat::Json {
        return print_json(&drivers);
    }

    if drivers.is_empty() {
        println!("No drivers registered.");
        return Ok(());
    }

    println!(
        "{:<10} {:<24} {:<10} {:<10} {:>6}",
        "ID", "NAME", "LICENSE", "TRUCK", "SCORE"
    );
    for driver in drivers {
        println!(
            "{:<10} {:<24} {:<10} {:<10} {:>5}%",
            driver.id,
            driver.name,
            driver.license_number,
            driver.assigned_truck_id.as_deref().unwrap_or("N/A"),
            driver.performance_score,
        );
    }
    Ok(())
}

pub fn output_trips(format: OutputFormat, trips: &[Trip], range: TimeRange) -> Result<()> {
    if format == OutputFormat::Json {
        return print_json(&trips);
    }

    println!("Trips ({})", range.label());
    if trips.is_empty() {
        println!("No trips logged in this period.");
        return Ok(());
    }

    for trip in trips {
        println!(
            "{}  {} -> {}  {} km  rev ${}  {}",
            trip.date.format("%Y-%m-%d"),
            trip.origin,
            trip.destination,
            trip.distance,
            trip.revenue,
            if trip.completed { "completed" } else { "en route" },
        );
    }
    Ok(())
}

pub fn output_reports(format: OutputFormat, reports: &[Report]) -> Result<()> {
    if format == OutputFormat::Json {
        return print_json(&reports);
    }

    if reports.is_empty() {
        println!("No reports generated yet.");
        return Ok(());
    }

    println!("{:<10} {:<40} {:<13} {}", "ID", "TITLE", "TYPE", "DATE");
    for report in reports {
        println!(
            "{:<10} {:<40} {:<13} {}",
            report.id,
            report.title,
            report.report_type.label(),
            report.date.format("%Y-%m-%d"),
        );
    }
    Ok(())
}

pub fn output_maintenance(format: OutputFormat, records: &[MaintenanceRecord]) -> Result<()> {
    if format == OutputFormat::Json {
        return print_json(&records);
    }

    if records.is_empty() {
        println!("No maintenance records.");
        return Ok(());
    }

    for record in records {
        println!(
            "{}  truck {}  ${:.2}  {} (next due {})",
            record.date.format("%Y-%m-%d"),
            record.truck_id,
            record.cost,
            record.description,
            record.next_service_due,
        );
    }
    Ok(())
}

pub fn output_metrics(
    format: OutputFormat,
    range: TimeRange,
    metrics: &TripMetrics,
    status: &FleetStatus,
) -> Result<()> {
    if format == OutputFormat::Json {
        let combined = serde_json::json!({
            "range": range,
            "trips": metrics,
            "fleet": status,
        });
        return print_json(&combined);
    }

    println!("\nFleet Metrics ({})", range.label());
    println!("==============================");
    println!("Active trucks:     {} / {}", status.active, status.total);
    println!("Health alerts:     {}", status.health_alerts);
    println!("Revenue:           ${}", metrics.revenue);
    println!("Avg fuel cost/km:  ${}", metrics.avg_fuel_cost_per_km);
    println!("Trips:             {}", metrics.trip_count);
    Ok(())
}

pub fn output_insights(format: OutputFormat, insights: &FleetInsights) -> Result<()> {
    if format == OutputFormat::Json {
        return print_json(&insights);
    }

    println!("\nAI Insights");
    println!("===========");
    println!("{}", insights.summary);

    if !insights.warnings.is_empty() {
        println!("\nWarnings:");
        for warning in &insights.warnings {
            println!("  - {}", warning);
        }
    }

    if !insights.recommendations.is_empty() {
        println!("\nRecommendations:");
        for rec in &insights.recommendations {
            match &rec.truck_id {
                Some(id) => println!("  - [truck {}] {} ({})", id, rec.action, rec.impact),
                None => println!("  - {} ({})", rec.action, rec.impact),
            }
        }
    }

    Ok(())
}
