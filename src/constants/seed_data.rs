//! Default seed data for a fresh store
//!
//! Applied by `FleetStore::seed` only to collections that are empty.
//! Ids are fixed so the driver seed's truck assignments line up with
//! the truck seed.

use crate::types::{
    Driver, Report, ReportType, RevenuePoint, Truck, TruckStatus,
};
use chrono::Utc;

/// The five starter trucks
pub fn default_trucks() -> Vec<Truck> {
    vec![
        Truck {
            id: "1".to_string(),
            vin: "TRK001".to_string(),
            plate: "FLT-101".to_string(),
            model: "Volvo FH16".to_string(),
            year: 2022,
            fuel_type: "Diesel".to_string(),
            load_capacity: 40000.0,
            status: TruckStatus::Active,
            health_score: 92,
            mileage: 45200.0,
        },
        Truck {
            id: "2".to_string(),
            vin: "TRK002".to_string(),
            plate: "FLT-202".to_string(),
            model: "Scania R500".to_string(),
            year: 2021,
            fuel_type: "Diesel".to_string(),
            load_capacity: 35000.0,
            status: TruckStatus::Active,
            health_score: 78,
            mileage: 88400.0,
        },
        Truck {
            id: "3".to_string(),
            vin: "TRK003".to_string(),
            plate: "FLT-303".to_string(),
            model: "Mercedes Actros".to_string(),
            year: 2023,
            fuel_type: "Electric".to_string(),
            load_capacity: 25000.0,
            status: TruckStatus::Idle,
            health_score: 98,
            mileage: 12000.0,
        },
        Truck {
            id: "4".to_string(),
            vin: "TRK004".to_string(),
            plate: "FLT-404".to_string(),
            model: "Kenworth T680".to_string(),
            year: 2020,
            fuel_type: "Diesel".to_string(),
            load_capacity: 42000.0,
            status: TruckStatus::UnderRepair,
            health_score: 45,
            mileage: 156000.0,
        },
        Truck {
            id: "5".to_string(),
            vin: "TRK005".to_string(),
            plate: "FLT-505".to_string(),
            model: "Freightliner Cascadia".to_string(),
            year: 2021,
            fuel_type: "Diesel".to_string(),
            load_capacity: 40000.0,
            status: TruckStatus::Active,
            health_score: 85,
            mileage: 92000.0,
        },
    ]
}

/// The two starter drivers, assigned to the first two seed trucks
pub fn default_drivers() -> Vec<Driver> {
    vec![
        Driver {
            id: "drv1".to_string(),
            performance_score: 94,
            assigned_truck_id: Some("1".to_string()),
            ..Driver::new("John Doe".to_string(), "L-55231".to_string(), None)
        },
        Driver {
            id: "drv2".to_string(),
            performance_score: 88,
            assigned_truck_id: Some("2".to_string()),
            ..Driver::new("Sarah Miller".to_string(), "L-88210".to_string(), None)
        },
    ]
}

/// The single starter report
pub fn default_reports() -> Vec<Report> {
    vec![Report {
        id: "rep1".to_string(),
        title: "Q1 Performance Summary".to_string(),
        report_type: ReportType::Operational,
        date: Utc::now(),
        content: None,
    }]
}

/// Monthly revenue/cost series shown on the overview chart and passed
/// to the insight collaborator
pub fn revenue_series() -> Vec<RevenuePoint> {
    [
        ("Jan", 45000.0, 32000.0, 13000.0),
        ("Feb", 52000.0, 34000.0, 18000.0),
        ("Mar", 48000.0, 31000.0, 17000.0),
        ("Apr", 61000.0, 38000.0, 23000.0),
        ("May", 55000.0, 35000.0, 20000.0),
        ("Jun", 67000.0, 42000.0, 25000.0),
    ]
    .into_iter()
    .map(|(name, revenue, cost, profit)| RevenuePoint {
        name: name.to_string(),
        revenue,
        cost,
        profit,
    })
    .collect()
}
