//! Store semantics tests against the in-memory backend

use chrono::Utc;
use fleetflow::constants::default_trucks;
use fleetflow::store::{keys, FleetStore, MemoryBackend, StorageBackend};
use fleetflow::types::{Report, ReportType, Trip, Truck, TruckStatus};

fn truck_fixture(vin: &str) -> Truck {
    Truck::new(
        vin.to_string(),
        format!("PLT-{}", vin),
        "Volvo FH16".to_string(),
        2022,
        "Diesel".to_string(),
        40000.0,
        TruckStatus::Active,
    )
}

#[test]
fn test_empty_store_returns_empty_collections() {
    let store = FleetStore::new(MemoryBackend::new());

    assert!(store.trucks().expect("read trucks").is_empty());
    assert!(store.trips().expect("read trips").is_empty());
    assert!(store.drivers().expect("read drivers").is_empty());
    assert!(store.reports().expect("read reports").is_empty());
    assert!(store.maintenance().expect("read maintenance").is_empty());
}

#[test]
fn test_upsert_round_trip() {
    let store = FleetStore::new(MemoryBackend::new());
    let truck = truck_fixture("TRK100");

    store.save_truck(truck.clone()).expect("save truck");

    let trucks = store.trucks().expect("read trucks");
    let matching: Vec<_> = trucks.iter().filter(|t| t.id == truck.id).collect();
    assert_eq!(matching.len(), 1);
    assert_eq!(*matching[0], truck);
}

#[test]
fn test_upsert_replaces_never_duplicates() {
    let store = FleetStore::new(MemoryBackend::new());
    let mut truck = truck_fixture("TRK100");

    store.save_truck(truck.clone()).expect("first save");
    assert_eq!(store.trucks().expect("read").len(), 1);

    truck.status = TruckStatus::UnderRepair;
    truck.health_score = 45;
    store.save_truck(truck.clone()).expect("second save");

    let trucks = store.trucks().expect("read");
    assert_eq!(trucks.len(), 1);
    assert_eq!(trucks[0].status, TruckStatus::UnderRepair);
    assert_eq!(trucks[0].health_score, 45);
}

#[test]
fn test_upsert_preserves_order() {
    let store = FleetStore::new(MemoryBackend::new());
    let first = truck_fixture("TRK1");
    let second = truck_fixture("TRK2");
    let third = truck_fixture("TRK3");

    for truck in [&first, &second, &third] {
        store.save_truck(truck.clone()).expect("save");
    }

    // Replacing the middle entry keeps its position
    let mut updated = second.clone();
    updated.mileage = 5000.0;
    store.save_truck(updated).expect("update");

    let vins: Vec<_> = store
        .trucks()
        .expect("read")
        .into_iter()
        .map(|t| t.vin)
        .collect();
    assert_eq!(vins, vec!["TRK1", "TRK2", "TRK3"]);
}

#[test]
fn test_trips_are_append_only() {
    let store = FleetStore::new(MemoryBackend::new());
    let now = Utc::now();

    for _ in 0..3 {
        let trip = Trip::new(
            "1".to_string(),
            "drv1".to_string(),
            "Paris".to_string(),
            "Berlin".to_string(),
            1050.0,
            2500.0,
            now,
        );
        store.save_trip(trip).expect("save trip");
    }

    assert_eq!(store.trips().expect("read").len(), 3);
}

#[test]
fn test_remove_report() {
    let store = FleetStore::new(MemoryBackend::new());
    let report = Report::new(
        "Q1 Performance Summary".to_string(),
        ReportType::Operational,
        None,
        Utc::now(),
    );
    let id = report.id.clone();
    store.save_report(report).expect("save report");

    assert!(store.remove_report(&id).expect("remove"));
    assert!(store.reports().expect("read").is_empty());

    // Removing again finds nothing
    assert!(!store.remove_report(&id).expect("remove again"));
}

#[test]
fn test_corrupt_payload_degrades_to_empty() {
    let backend = MemoryBackend::new();
    backend
        .write(keys::TRUCKS, "{ this is not json ]")
        .expect("write garbage");

    let store = FleetStore::new(backend);
    assert!(store.trucks().expect("read").is_empty());
}

#[test]
fn test_seed_is_idempotent() {
    let store = FleetStore::new(MemoryBackend::new());
    let defaults = default_trucks();

    store.seed(&defaults).expect("first seed");
    assert_eq!(store.trucks().expect("read").len(), 5);
    assert_eq!(store.drivers().expect("read").len(), 2);
    assert_eq!(store.reports().expect("read").len(), 1);

    // Mutate, then seed again: nothing is overwritten
    store.save_truck(truck_fixture("TRK999")).expect("add truck");
    let before = store.trucks().expect("read");

    store.seed(&defaults).expect("second seed");
    assert_eq!(store.trucks().expect("read"), before);
    assert_eq!(store.drivers().expect("read").len(), 2);
}

#[test]
fn test_seed_returns_defaults_in_original_order() {
    let store = FleetStore::new(MemoryBackend::new());
    let defaults = default_trucks();

    store.seed(&defaults).expect("seed");
    assert_eq!(store.trucks().expect("read"), defaults);
}

#[test]
fn test_seed_fills_each_collection_independently() {
    let store = FleetStore::new(MemoryBackend::new());

    // Trucks already populated, drivers and reports empty
    store.save_truck(truck_fixture("TRK1")).expect("save");

    store.seed(&default_trucks()).expect("seed");

    // Existing trucks untouched, other collections seeded
    assert_eq!(store.trucks().expect("read").len(), 1);
    assert_eq!(store.drivers().expect("read").len(), 2);
    assert_eq!(store.reports().expect("read").len(), 1);
}

#[test]
fn test_removing_truck_leaves_dangling_references() {
    let store = FleetStore::new(MemoryBackend::new());
    store.seed(&default_trucks()).expect("seed");

    let trip = Trip::new(
        "1".to_string(),
        "drv1".to_string(),
        "Lyon".to_string(),
        "Madrid".to_string(),
        900.0,
        1800.0,
        Utc::now(),
    );
    store.save_trip(trip).expect("save trip");

    assert!(store.remove_truck("1").expect("remove truck"));

    // The trip and the driver assignment still reference truck "1";
    // dangling references are tolerated, not repaired.
    let trips = store.trips().expect("read trips");
    assert_eq!(trips.len(), 1);
    assert_eq!(trips[0].truck_id, "1");

    let drivers = store.drivers().expect("read drivers");
    let john = drivers.iter().find(|d| d.id == "drv1").expect("drv1");
    assert_eq!(john.assigned_truck_id.as_deref(), Some("1"));
}
