//! FleetFlow Core Library
//!
//! Fleet management for a logistics operation: typed entity
//! collections persisted through a namespaced key-value store, pure
//! time-range metrics over trips, and an optional AI insight
//! collaborator.

pub mod cli;
pub mod commands;
pub mod config;
pub mod constants;
pub mod error;
pub mod insights;
pub mod metrics;
pub mod output;
pub mod store;
pub mod types;
