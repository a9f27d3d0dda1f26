//! Persistent store for fleet entity collections
//!
//! Five independent collections (trucks, trips, maintenance, drivers,
//! reports), each persisted as a plain JSON array under a fixed
//! namespaced key. There is no envelope, no version field, and no
//! referential integrity between collections: removing a truck leaves
//! its trips, maintenance records and driver assignments untouched.
//!
//! All operations are read-modify-write round trips against the
//! backend. That is O(n) per write and not atomic, which is acceptable
//! because the store is single-writer by design.

pub mod backend;

pub use backend::{FileBackend, MemoryBackend, StorageBackend};

use crate::constants::seed_data;
use crate::error::Result;
use crate::types::{Driver, Keyed, MaintenanceRecord, Report, Trip, Truck};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::path::PathBuf;
use tracing::debug;

/// Namespaced storage keys, one per collection
pub mod keys {
    pub const TRUCKS: &str = "fleet_flow_trucks";
    pub const TRIPS: &str = "fleet_flow_trips";
    pub const MAINTENANCE: &str = "fleet_flow_maintenance";
    pub const DRIVERS: &str = "fleet_flow_drivers";
    pub const REPORTS: &str = "fleet_flow_reports";
}

/// Typed collection accessors over an injected storage backend
///
/// Constructed once per application instance and passed by reference
/// to consumers; there is no ambient global store.
pub struct FleetStore<B: StorageBackend> {
    backend: B,
}

impl FleetStore<FileBackend> {
    /// Create or open a file-backed store rooted at `store_dir`
    pub fn open(store_dir: PathBuf) -> Result<Self> {
        Ok(Self::new(FileBackend::open(store_dir)?))
    }
}

impl<B: StorageBackend> FleetStore<B> {
    pub fn new(backend: B) -> Self {
        Self { backend }
    }

    /// Read a collection. An absent key and a malformed payload both
    /// yield an empty collection; parse failures never propagate.
    fn read_collection<T: DeserializeOwned>(&self, key: &str) -> Result<Vec<T>> {
        match self.backend.read(key)? {
            Some(raw) => Ok(serde_json::from_str(&raw).unwrap_or_default()),
            None => Ok(Vec::new()),
        }
    }

    /// Write a collection back in full. Errors propagate so callers
    /// can surface them instead of silently losing data.
    fn write_collection<T: Serialize>(&self, key: &str, items: &[T]) -> Result<()> {
        let raw = serde_json::to_string(items)?;
        self.backend.write(key, &raw)?;
        debug!(key, count = items.len(), "wrote collection");
        Ok(())
    }

    /// Insert-or-replace by id: linear scan, replace in place if the
    /// id matches, append otherwise.
    fn upsert_in<T>(&self, key: &str, item: T) -> Result<()>
    where
        T: Keyed + Serialize + DeserializeOwned,
    {
        let mut items: Vec<T> = self.read_collection(key)?;
        match items.iter().position(|e| e.id() == item.id()) {
            Some(index) => items[index] = item,
            None => items.push(item),
        }
        self.write_collection(key, &items)
    }

    /// Append without scanning. Used for the append-only collections.
    fn append_in<T>(&self, key: &str, item: T) -> Result<()>
    where
        T: Serialize + DeserializeOwned,
    {
        let mut items: Vec<T> = self.read_collection(key)?;
        items.push(item);
        self.write_collection(key, &items)
    }

    /// Filter out a matching id and write back. Returns whether
    /// anything was removed.
    fn remove_in<T>(&self, key: &str, id: &str) -> Result<bool>
    where
        T: Keyed + Serialize + DeserializeOwned,
    {
        let mut items: Vec<T> = self.read_collection(key)?;
        let before = items.len();
        items.retain(|e| e.id() != id);
        if items.len() == before {
            return Ok(false);
        }
        self.write_collection(key, &items)?;
        Ok(true)
    }

    // --- Trucks ---

    pub fn trucks(&self) -> Result<Vec<Truck>> {
        self.read_collection(keys::TRUCKS)
    }

    pub fn save_truck(&self, truck: Truck) -> Result<()> {
        self.upsert_in(keys::TRUCKS, truck)
    }

    pub fn remove_truck(&self, id: &str) -> Result<bool> {
        self.remove_in::<Truck>(keys::TRUCKS, id)
    }

    // --- Trips ---

    pub fn trips(&self) -> Result<Vec<Trip>> {
        self.read_collection(keys::TRIPS)
    }

    pub fn save_trip(&self, trip: Trip) -> Result<()> {
        self.append_in(keys::TRIPS, trip)
    }

    // --- Maintenance ---

    pub fn maintenance(&self) -> Result<Vec<MaintenanceRecord>> {
        self.read_collection(keys::MAINTENANCE)
    }

    pub fn save_maintenance(&self, record: MaintenanceRecord) -> Result<()> {
        self.append_in(keys::MAINTENANCE, record)
    }

    // --- Drivers ---

    pub fn drivers(&self) -> Result<Vec<Driver>> {
        self.read_collection(keys::DRIVERS)
    }

    pub fn save_driver(&self, driver: Driver) -> Result<()> {
        self.upsert_in(keys::DRIVERS, driver)
    }

    // --- Reports ---

    pub fn reports(&self) -> Result<Vec<Report>> {
        self.read_collection(keys::REPORTS)
    }

    pub fn save_report(&self, report: Report) -> Result<()> {
        self.upsert_in(keys::REPORTS, report)
    }

    pub fn remove_report(&self, id: &str) -> Result<bool> {
        self.remove_in::<Report>(keys::REPORTS, id)
    }

    // --- Seeding ---

    /// Populate collections with defaults, only where a collection is
    /// currently empty. Idempotent: existing data is never overwritten.
    /// Trucks, drivers and reports are each seeded independently.
    pub fn seed(&self, default_trucks: &[Truck]) -> Result<()> {
        if self.trucks()?.is_empty() {
            self.write_collection(keys::TRUCKS, default_trucks)?;
        }
        if self.drivers()?.is_empty() {
            self.write_collection(keys::DRIVERS, &seed_data::default_drivers())?;
        }
        if self.reports()?.is_empty() {
            self.write_collection(keys::REPORTS, &seed_data::default_reports())?;
        }
        Ok(())
    }
}
