//! Derived display metrics over the trip and truck collections
//!
//! Everything here is pure and deterministic: the clock is an explicit
//! `now` parameter and nothing is persisted. Derived metrics are always
//! recomputed from the raw stored records.

use crate::error::Error;
use crate::types::{Trip, Truck, TruckStatus};
use chrono::{DateTime, Duration, Utc};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Rolling time window used to filter trips for display
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum, Serialize, Deserialize)]
pub enum TimeRange {
    #[value(name = "24h")]
    #[serde(rename = "24h")]
    Day,
    #[value(name = "7d")]
    #[serde(rename = "7d")]
    Week,
    #[default]
    #[value(name = "30d")]
    #[serde(rename = "30d")]
    Month,
}

impl TimeRange {
    /// Width of the rolling window
    pub fn window(&self) -> Duration {
        match self {
            TimeRange::Day => Duration::hours(24),
            TimeRange::Week => Duration::days(7),
            TimeRange::Month => Duration::days(30),
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            TimeRange::Day => "Last 24 Hours",
            TimeRange::Week => "Last 7 Days",
            TimeRange::Month => "Last 30 Days",
        }
    }
}

impl FromStr for TimeRange {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "24h" => Ok(TimeRange::Day),
            "7d" => Ok(TimeRange::Week),
            "30d" => Ok(TimeRange::Month),
            other => Err(Error::InvalidInput(format!(
                "unknown time range: {}",
                other
            ))),
        }
    }
}

impl std::fmt::Display for TimeRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TimeRange::Day => write!(f, "24h"),
            TimeRange::Week => write!(f, "7d"),
            TimeRange::Month => write!(f, "30d"),
        }
    }
}

/// Keep trips whose date lies within the window around `now`.
///
/// The predicate is `|now - date| <= window`: the absolute difference
/// deliberately admits trips dated in the future relative to `now`,
/// preserving the tolerance of the original dashboard.
pub fn filter_by_range(trips: &[Trip], range: TimeRange, now: DateTime<Utc>) -> Vec<Trip> {
    let window = range.window();
    trips
        .iter()
        .filter(|trip| (now - trip.date).abs() <= window)
        .cloned()
        .collect()
}

/// Aggregate figures for a filtered trip set
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TripMetrics {
    pub revenue: f64,
    /// Total fuel cost over total distance, formatted to two decimals.
    /// `"0.00"` when total distance is zero.
    pub avg_fuel_cost_per_km: String,
    pub trip_count: usize,
}

/// Derive display metrics from a filtered trip set
pub fn aggregate(trips: &[Trip]) -> TripMetrics {
    let revenue: f64 = trips.iter().map(|t| t.revenue).sum();
    let distance: f64 = trips.iter().map(|t| t.distance).sum();
    let fuel_cost: f64 = trips.iter().map(|t| t.costs.fuel).sum();

    let avg_fuel_cost_per_km = if distance > 0.0 {
        format!("{:.2}", fuel_cost / distance)
    } else {
        "0.00".to_string()
    };

    TripMetrics {
        revenue,
        avg_fuel_cost_per_km,
        trip_count: trips.len(),
    }
}

/// Fleet-wide profitability over a trip set
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Profitability {
    pub revenue: f64,
    pub costs: f64,
    pub profit: f64,
}

/// Revenue counts completed trips only; costs count every trip's
/// fuel, driver pay and tolls.
pub fn profitability(trips: &[Trip]) -> Profitability {
    let revenue: f64 = trips
        .iter()
        .filter(|t| t.completed)
        .map(|t| t.revenue)
        .sum();
    let costs: f64 = trips
        .iter()
        .map(|t| t.costs.fuel + t.costs.driver_pay + t.costs.tolls)
        .sum();
    Profitability {
        revenue,
        costs,
        profit: revenue - costs,
    }
}

/// Headline truck counters for the overview
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FleetStatus {
    pub active: usize,
    pub total: usize,
    /// Trucks with a health score below 70
    pub health_alerts: usize,
}

pub fn fleet_status(trucks: &[Truck]) -> FleetStatus {
    FleetStatus {
        active: trucks
            .iter()
            .filter(|t| t.status == TruckStatus::Active)
            .count(),
        total: trucks.len(),
        health_alerts: trucks.iter().filter(|t| t.health_score < 70).count(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::TripCosts;

    fn trip_at(date: DateTime<Utc>, revenue: f64, distance: f64, fuel_cost: f64) -> Trip {
        Trip {
            id: uuid::Uuid::new_v4().to_string(),
            truck_id: "1".to_string(),
            driver_id: "drv1".to_string(),
            origin: "A".to_string(),
            destination: "B".to_string(),
            date,
            distance,
            fuel_consumed: distance * 0.3,
            revenue,
            costs: TripCosts {
                fuel: fuel_cost,
                driver_pay: 400.0,
                tolls: 50.0,
                other: 0.0,
            },
            completed: true,
        }
    }

    #[test]
    fn test_aggregate_empty() {
        let metrics = aggregate(&[]);
        assert_eq!(metrics.revenue, 0.0);
        assert_eq!(metrics.avg_fuel_cost_per_km, "0.00");
        assert_eq!(metrics.trip_count, 0);
    }

    #[test]
    fn test_filter_and_aggregate_24h_window() {
        let now = Utc::now();
        let trips = vec![
            trip_at(now - Duration::hours(1), 100.0, 10.0, 6.0),
            trip_at(now - Duration::days(40), 500.0, 50.0, 30.0),
        ];

        let filtered = filter_by_range(&trips, TimeRange::Day, now);
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].id, trips[0].id);

        let metrics = aggregate(&filtered);
        assert_eq!(metrics.revenue, 100.0);
        assert_eq!(metrics.avg_fuel_cost_per_km, "0.60");
        assert_eq!(metrics.trip_count, 1);
    }

    #[test]
    fn test_filter_is_subset_satisfying_predicate() {
        let now = Utc::now();
        let trips = vec![
            trip_at(now - Duration::hours(2), 10.0, 1.0, 1.0),
            trip_at(now - Duration::days(3), 20.0, 1.0, 1.0),
            trip_at(now - Duration::days(10), 30.0, 1.0, 1.0),
            trip_at(now - Duration::days(45), 40.0, 1.0, 1.0),
        ];

        for range in [TimeRange::Day, TimeRange::Week, TimeRange::Month] {
            let filtered = filter_by_range(&trips, range, now);
            for trip in &filtered {
                assert!(trips.iter().any(|t| t.id == trip.id));
                assert!((now - trip.date).abs() <= range.window());
            }
        }

        assert_eq!(filter_by_range(&trips, TimeRange::Day, now).len(), 1);
        assert_eq!(filter_by_range(&trips, TimeRange::Week, now).len(), 2);
        assert_eq!(filter_by_range(&trips, TimeRange::Month, now).len(), 3);
    }

    #[test]
    fn test_future_dated_trip_within_window_is_included() {
        let now = Utc::now();
        let trips = vec![trip_at(now + Duration::hours(3), 100.0, 10.0, 6.0)];

        let filtered = filter_by_range(&trips, TimeRange::Day, now);
        assert_eq!(filtered.len(), 1);
    }

    #[test]
    fn test_aggregate_zero_distance_guard() {
        let now = Utc::now();
        let trips = vec![trip_at(now, 100.0, 0.0, 6.0)];
        let metrics = aggregate(&trips);
        assert_eq!(metrics.avg_fuel_cost_per_km, "0.00");
        assert_eq!(metrics.revenue, 100.0);
    }

    #[test]
    fn test_profitability_counts_completed_revenue_only() {
        let now = Utc::now();
        let mut incomplete = trip_at(now, 1000.0, 10.0, 6.0);
        incomplete.completed = false;
        let complete = trip_at(now, 500.0, 10.0, 6.0);

        let result = profitability(&[incomplete, complete]);
        assert_eq!(result.revenue, 500.0);
        // Costs count both trips
        assert_eq!(result.costs, 2.0 * (6.0 + 400.0 + 50.0));
        assert_eq!(result.profit, 500.0 - 912.0);
    }

    #[test]
    fn test_fleet_status_counts() {
        let trucks = crate::constants::default_trucks();
        let status = fleet_status(&trucks);
        assert_eq!(status.total, 5);
        assert_eq!(status.active, 3);
        assert_eq!(status.health_alerts, 1);
    }

    #[test]
    fn test_time_range_parsing() {
        assert_eq!("24h".parse::<TimeRange>().unwrap(), TimeRange::Day);
        assert_eq!("7d".parse::<TimeRange>().unwrap(), TimeRange::Week);
        assert_eq!("30d".parse::<TimeRange>().unwrap(), TimeRange::Month);
        assert!("90d".parse::<TimeRange>().is_err());
    }
}
