//! Core entity types for the fleet

use chrono::{DateTime, Utc};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::Error;

fn new_id() -> String {
    uuid::Uuid::new_v4().to_string()
}

/// Entity with a stable string id, usable as an upsert key
pub trait Keyed {
    fn id(&self) -> &str;
}

/// Operational status of a truck
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
pub enum TruckStatus {
    Active,
    Idle,
    #[serde(rename = "Under Repair")]
    UnderRepair,
    Retired,
}

impl TruckStatus {
    pub fn label(&self) -> &'static str {
        match self {
            TruckStatus::Active => "Active",
            TruckStatus::Idle => "Idle",
            TruckStatus::UnderRepair => "Under Repair",
            TruckStatus::Retired => "Retired",
        }
    }
}

impl FromStr for TruckStatus {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Active" => Ok(TruckStatus::Active),
            "Idle" => Ok(TruckStatus::Idle),
            "Under Repair" => Ok(TruckStatus::UnderRepair),
            "Retired" => Ok(TruckStatus::Retired),
            other => Err(Error::InvalidInput(format!(
                "unknown truck status: {}",
                other
            ))),
        }
    }
}

impl std::fmt::Display for TruckStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// A truck in the fleet
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Truck {
    pub id: String,
    pub vin: String,
    pub plate: String,
    pub model: String,
    pub year: i32,
    pub fuel_type: String,
    /// Maximum load in kg
    pub load_capacity: f64,
    pub status: TruckStatus,
    /// 0-100
    pub health_score: u8,
    pub mileage: f64,
}

impl Truck {
    /// Create a new truck. Health starts at 100, mileage at 0.
    pub fn new(
        vin: String,
        plate: String,
        model: String,
        year: i32,
        fuel_type: String,
        load_capacity: f64,
        status: TruckStatus,
    ) -> Self {
        Self {
            id: new_id(),
            vin,
            plate,
            model,
            year,
            fuel_type,
            load_capacity,
            status,
            health_score: 100,
            mileage: 0.0,
        }
    }
}

impl Keyed for Truck {
    fn id(&self) -> &str {
        &self.id
    }
}

/// Cost breakdown for a single trip
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TripCosts {
    pub fuel: f64,
    pub driver_pay: f64,
    pub tolls: f64,
    pub other: f64,
}

/// A logged trip. Trips are append-only; the foreign keys are not
/// validated and may reference entities that have since been removed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Trip {
    pub id: String,
    pub truck_id: String,
    pub driver_id: String,
    pub origin: String,
    pub destination: String,
    /// Timestamp of creation, not of travel
    pub date: DateTime<Utc>,
    pub distance: f64,
    pub fuel_consumed: f64,
    pub revenue: f64,
    pub costs: TripCosts,
    pub completed: bool,
}

impl Trip {
    /// Create a new trip. Fuel consumption and fuel cost are derived
    /// from distance once, at creation, and never recomputed.
    pub fn new(
        truck_id: String,
        driver_id: String,
        origin: String,
        destination: String,
        distance: f64,
        revenue: f64,
        date: DateTime<Utc>,
    ) -> Self {
        Self {
            id: new_id(),
            truck_id,
            driver_id,
            origin,
            destination,
            date,
            distance,
            fuel_consumed: distance * 0.3,
            revenue,
            costs: TripCosts {
                fuel: distance * 0.6,
                driver_pay: 400.0,
                tolls: 50.0,
                other: 0.0,
            },
            completed: true,
        }
    }
}

impl Keyed for Trip {
    fn id(&self) -> &str {
        &self.id
    }
}

/// Driver employment arrangement
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
pub enum Availability {
    #[serde(rename = "Full-time")]
    FullTime,
    #[serde(rename = "Part-time")]
    PartTime,
    Contract,
}

impl FromStr for Availability {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Full-time" => Ok(Availability::FullTime),
            "Part-time" => Ok(Availability::PartTime),
            "Contract" => Ok(Availability::Contract),
            other => Err(Error::InvalidInput(format!(
                "unknown availability: {}",
                other
            ))),
        }
    }
}

/// A driver on the roster
///
/// Everything beyond name, license number and performance score is
/// optional on the wire so records written before a field existed
/// still deserialize.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Driver {
    pub id: String,
    pub name: String,
    pub license_number: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub license_expiry: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub years_experience: Option<u32>,
    /// Free-text tags, e.g. Hazmat, Oversize, Refrigerated
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub specializations: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub availability: Option<Availability>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_background_check: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assigned_truck_id: Option<String>,
    /// 0-100
    pub performance_score: u8,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub photo_url: Option<String>,
}

impl Driver {
    /// Create a new driver with a perfect starting score
    pub fn new(name: String, license_number: String, assigned_truck_id: Option<String>) -> Self {
        Self {
            id: new_id(),
            name,
            license_number,
            license_expiry: None,
            years_experience: None,
            specializations: Vec::new(),
            availability: None,
            last_background_check: None,
            assigned_truck_id,
            performance_score: 100,
            phone_number: None,
            email: None,
            photo_url: None,
        }
    }
}

impl Keyed for Driver {
    fn id(&self) -> &str {
        &self.id
    }
}

/// Report category
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
pub enum ReportType {
    Financial,
    Operational,
    Safety,
}

impl ReportType {
    pub fn label(&self) -> &'static str {
        match self {
            ReportType::Financial => "Financial",
            ReportType::Operational => "Operational",
            ReportType::Safety => "Safety",
        }
    }
}

impl FromStr for ReportType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Financial" => Ok(ReportType::Financial),
            "Operational" => Ok(ReportType::Operational),
            "Safety" => Ok(ReportType::Safety),
            other => Err(Error::InvalidInput(format!(
                "unknown report type: {}",
                other
            ))),
        }
    }
}

impl std::fmt::Display for ReportType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// A generated report
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Report {
    pub id: String,
    pub title: String,
    #[serde(rename = "type")]
    pub report_type: ReportType,
    pub date: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
}

impl Report {
    pub fn new(
        title: String,
        report_type: ReportType,
        content: Option<String>,
        date: DateTime<Utc>,
    ) -> Self {
        Self {
            id: new_id(),
            title,
            report_type,
            date,
            content,
        }
    }
}

impl Keyed for Report {
    fn id(&self) -> &str {
        &self.id
    }
}

/// A maintenance log entry for a truck. Append-only, like trips.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MaintenanceRecord {
    pub id: String,
    pub truck_id: String,
    pub date: DateTime<Utc>,
    pub description: String,
    pub cost: f64,
    pub mileage_at_service: f64,
    pub next_service_due: String,
}

impl MaintenanceRecord {
    pub fn new(
        truck_id: String,
        description: String,
        cost: f64,
        mileage_at_service: f64,
        next_service_due: String,
        date: DateTime<Utc>,
    ) -> Self {
        Self {
            id: new_id(),
            truck_id,
            date,
            description,
            cost,
            mileage_at_service,
            next_service_due,
        }
    }
}

impl Keyed for MaintenanceRecord {
    fn id(&self) -> &str {
        &self.id
    }
}

/// One month of the revenue/cost series shown on the dashboard and
/// fed to the insight collaborator
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RevenuePoint {
    pub name: String,
    pub revenue: f64,
    pub cost: f64,
    pub profit: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trip_derives_costs_at_creation() {
        let now = Utc::now();
        let trip = Trip::new(
            "t1".to_string(),
            "d1".to_string(),
            "Paris".to_string(),
            "Berlin".to_string(),
            1050.0,
            2500.0,
            now,
        );

        assert_eq!(trip.fuel_consumed, 1050.0 * 0.3);
        assert_eq!(trip.costs.fuel, 1050.0 * 0.6);
        assert_eq!(trip.costs.driver_pay, 400.0);
        assert_eq!(trip.costs.tolls, 50.0);
        assert_eq!(trip.costs.other, 0.0);
        assert!(trip.completed);
        assert_eq!(trip.date, now);
    }

    #[test]
    fn test_truck_status_parses_wire_names() {
        assert_eq!("Active".parse::<TruckStatus>().unwrap(), TruckStatus::Active);
        assert_eq!(
            "Under Repair".parse::<TruckStatus>().unwrap(),
            TruckStatus::UnderRepair
        );
        assert!("Broken".parse::<TruckStatus>().is_err());
    }

    #[test]
    fn test_report_type_rejects_free_form() {
        assert_eq!(
            "Financial".parse::<ReportType>().unwrap(),
            ReportType::Financial
        );
        assert!("Quarterly".parse::<ReportType>().is_err());
    }

    #[test]
    fn test_legacy_driver_record_deserializes() {
        // A record written before the roster fields existed
        let raw = r#"{"id":"drv1","name":"John Doe","licenseNumber":"L-55231","assignedTruckId":"1","performanceScore":94}"#;
        let driver: Driver = serde_json::from_str(raw).unwrap();

        assert_eq!(driver.name, "John Doe");
        assert_eq!(driver.assigned_truck_id.as_deref(), Some("1"));
        assert!(driver.license_expiry.is_none());
        assert!(driver.specializations.is_empty());
        assert!(driver.availability.is_none());
    }

    #[test]
    fn test_truck_serializes_camel_case() {
        let truck = Truck::new(
            "TRK001".to_string(),
            "FLT-101".to_string(),
            "Volvo FH16".to_string(),
            2022,
            "Diesel".to_string(),
            40000.0,
            TruckStatus::UnderRepair,
        );
        let value = serde_json::to_value(&truck).unwrap();

        assert_eq!(value["fuelType"], "Diesel");
        assert_eq!(value["loadCapacity"], 40000.0);
        assert_eq!(value["status"], "Under Repair");
        assert_eq!(value["healthScore"], 100);
    }
}
