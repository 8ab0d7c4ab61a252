// ABOUTME: Integration tests for the persistence adapter
// ABOUTME: Covers round-trips, tolerant loading of bad slots, and slot independence
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use nutrition_tracker::{
    models::{EntryId, Food},
    persistence::PersistenceAdapter,
    storage::{memory::InMemoryStorage, StorageProvider},
};

mod common;

fn adapter_over(storage: &InMemoryStorage) -> PersistenceAdapter<InMemoryStorage> {
    common::init_test_logging();
    PersistenceAdapter::new(storage.clone())
}

#[test]
fn test_foods_round_trip() {
    let storage = InMemoryStorage::new();
    let adapter = adapter_over(&storage);
    let foods = vec![
        Food::new("Chicken Breast", 1.65, 0.31),
        Food::new("Rice", 1.3, 0.027),
        Food::new("Water", 0.0, 0.0),
    ];

    adapter.save_foods(&foods).unwrap();

    assert_eq!(adapter.load_foods(), foods);
}

#[test]
fn test_intake_round_trip() {
    let storage = InMemoryStorage::new();
    let adapter = adapter_over(&storage);
    let rice = Food::new("Rice", 1.3, 0.027);
    let entries = vec![
        common::entry(1_700_000_000_000, &rice, 100.0),
        common::entry(1_700_000_000_001, &rice, 33.3),
    ];

    adapter.save_intake(&entries).unwrap();

    assert_eq!(adapter.load_intake(), entries);
}

#[test]
fn test_absent_slots_load_empty() {
    let storage = InMemoryStorage::new();
    let adapter = adapter_over(&storage);

    assert!(adapter.load_foods().is_empty());
    assert!(adapter.load_intake().is_empty());
}

#[test]
fn test_undecodable_slots_load_empty() {
    for raw in ["not json", "{\"name\":\"Rice\"}", "[{\"name\":1}]", "null", "42"] {
        let storage = InMemoryStorage::with_items([("foods", raw), ("dailyIntake", raw)]);
        let adapter = adapter_over(&storage);

        assert!(adapter.load_foods().is_empty(), "foods slot {raw:?}");
        assert!(adapter.load_intake().is_empty(), "intake slot {raw:?}");
    }
}

#[test]
fn test_corrupt_slot_does_not_affect_the_other() {
    let storage = InMemoryStorage::with_items([
        ("foods", r#"[{"name":"Rice","caloriesPerGram":1.3,"proteinPerGram":0.027}]"#),
        ("dailyIntake", "{{{"),
    ]);
    let adapter = adapter_over(&storage);

    assert_eq!(adapter.load_foods(), [Food::new("Rice", 1.3, 0.027)]);
    assert!(adapter.load_intake().is_empty());
}

#[test]
fn test_slots_are_written_independently() {
    let storage = InMemoryStorage::new();
    let adapter = adapter_over(&storage);

    adapter.save_foods(&[Food::new("Rice", 1.3, 0.027)]).unwrap();

    assert!(storage.contains_key("foods").unwrap());
    assert!(!storage.contains_key("dailyIntake").unwrap());
}

#[test]
fn test_wire_format_uses_camel_case_fields() {
    let storage = InMemoryStorage::new();
    let adapter = adapter_over(&storage);
    adapter
        .save_foods(&[Food::new("Rice", 1.3, 0.027)])
        .unwrap();

    let raw = storage.get_item("foods").unwrap().unwrap();
    let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
    let food = &value[0];
    assert_eq!(food["name"], "Rice");
    assert_eq!(food["caloriesPerGram"], 1.3);
    assert_eq!(food["proteinPerGram"], 0.027);
}

#[test]
fn test_existing_intake_documents_decode() {
    let raw = r#"[
        {"id":1718000000123,"name":"Chicken Breast","grams":200,"calories":330,"protein":62,"time":"3:04:05 PM"}
    ]"#;
    let storage = InMemoryStorage::with_items([("dailyIntake", raw)]);
    let adapter = adapter_over(&storage);

    let entries = adapter.load_intake();

    assert_eq!(entries.len(), 1);
    let entry = &entries[0];
    assert_eq!(entry.id(), EntryId(1_718_000_000_123));
    assert_eq!(entry.name(), "Chicken Breast");
    common::assert_close(entry.grams(), 200.0);
    common::assert_close(entry.calories(), 330.0);
    common::assert_close(entry.protein(), 62.0);
    assert_eq!(entry.time(), "3:04:05 PM");
}

#[test]
fn test_clear_then_save_restores_slot() {
    let storage = InMemoryStorage::new();
    let adapter = adapter_over(&storage);
    let rice = Food::new("Rice", 1.3, 0.027);

    adapter.clear_intake().unwrap();
    assert!(!storage.contains_key("dailyIntake").unwrap());

    adapter.save_intake(&[common::entry(5, &rice, 1.0)]).unwrap();
    assert_eq!(common::ids(&adapter.load_intake()), [5]);
}
