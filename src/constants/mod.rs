//! Baked-in defaults and reference data

pub mod seed_data;

pub use seed_data::{default_drivers, default_reports, default_trucks, revenue_series};
