// ABOUTME: Integration tests for file-backed storage and the storage factory
// ABOUTME: Uses temporary directories to exercise atomic writes, removal, and tracker reloads
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use nutrition_tracker::{
    config::{StorageBackend, StorageConfig},
    errors::ErrorCode,
    storage::{file::FileStorage, Storage, StorageProvider},
    tracker::NutritionTracker,
};
use std::fs;
use tempfile::TempDir;

mod common;

fn temp_storage() -> (FileStorage, TempDir) {
    common::init_test_logging();
    let dir = TempDir::new().unwrap();
    let storage = FileStorage::new(dir.path().join("data"));
    (storage, dir)
}

#[test]
fn test_missing_directory_reads_as_empty() {
    let (storage, _dir) = temp_storage();

    assert_eq!(storage.get_item("foods").unwrap(), None);
    assert!(!storage.root().exists());
}

#[test]
fn test_set_get_remove() {
    let (storage, _dir) = temp_storage();

    storage.set_item("foods", "[]").unwrap();
    assert_eq!(storage.get_item("foods").unwrap().as_deref(), Some("[]"));
    assert!(storage.slot_path("foods").unwrap().is_file());

    storage.set_item("foods", "[1]").unwrap();
    assert_eq!(storage.get_item("foods").unwrap().as_deref(), Some("[1]"));

    storage.remove_item("foods").unwrap();
    assert_eq!(storage.get_item("foods").unwrap(), None);
    storage.remove_item("foods").unwrap();
}

#[test]
fn test_slot_files_are_named_after_keys() {
    let (storage, _dir) = temp_storage();
    storage.set_item("dailyIntake", "[]").unwrap();

    assert_eq!(
        storage.slot_path("dailyIntake").unwrap(),
        storage.root().join("dailyIntake.json")
    );
    assert!(storage.root().join("dailyIntake.json").is_file());
}

#[test]
fn test_writes_leave_no_temp_files() {
    let (storage, _dir) = temp_storage();
    storage.set_item("foods", "[]").unwrap();
    storage.set_item("dailyIntake", "[]").unwrap();

    let mut names: Vec<String> = fs::read_dir(storage.root())
        .unwrap()
        .map(|entry| entry.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    names.sort();
    assert_eq!(names, ["dailyIntake.json", "foods.json"]);
}

#[test]
fn test_invalid_keys_rejected() {
    let (storage, _dir) = temp_storage();

    let err = storage.set_item("../escape", "[]").unwrap_err();
    assert_eq!(err.code, ErrorCode::InvalidInput);
    assert!(storage.get_item("").is_err());
}

#[test]
fn test_health_check_creates_directory() {
    let (storage, _dir) = temp_storage();

    storage.health_check().unwrap();

    assert!(storage.root().is_dir());
    assert_eq!(storage.backend_name(), "file");
}

#[test]
fn test_health_check_rejects_plain_file() {
    common::init_test_logging();
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("not-a-dir");
    fs::write(&path, "x").unwrap();

    let err = FileStorage::new(&path).health_check().unwrap_err();
    assert_eq!(err.code, ErrorCode::StorageError);
}

#[test]
fn test_write_into_file_path_is_storage_error() {
    common::init_test_logging();
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("blocker");
    fs::write(&path, "x").unwrap();

    let err = FileStorage::new(&path).set_item("foods", "[]").unwrap_err();
    assert_eq!(err.code, ErrorCode::StorageError);
}

#[test]
fn test_tracker_state_survives_restart() {
    let (storage, _dir) = temp_storage();

    let mut tracker = NutritionTracker::open(storage.clone());
    tracker.add_food("Chicken Breast", 1.65, 0.31).unwrap();
    let entry = tracker
        .log_intake_at("Chicken Breast", 200.0, &common::at_millis(1_000))
        .unwrap()
        .unwrap();
    drop(tracker);

    let reopened = NutritionTracker::open(storage);
    assert_eq!(reopened.foods().len(), 1);
    assert_eq!(reopened.entries(), [entry]);
}

#[test]
fn test_reset_deletes_intake_file() {
    let (storage, _dir) = temp_storage();
    let mut tracker = NutritionTracker::open(storage.clone());
    tracker.add_food("Rice", 1.3, 0.027).unwrap();
    tracker.log_intake("Rice", 100.0).unwrap();
    assert!(storage.slot_path("dailyIntake").unwrap().is_file());

    tracker.reset_day().unwrap();

    assert!(!storage.slot_path("dailyIntake").unwrap().exists());
    assert!(storage.slot_path("foods").unwrap().is_file());
}

#[test]
fn test_corrupt_file_loads_empty() {
    let (storage, _dir) = temp_storage();
    fs::create_dir_all(storage.root()).unwrap();
    fs::write(storage.slot_path("foods").unwrap(), "{ truncated").unwrap();

    let tracker = NutritionTracker::open(storage);
    assert!(tracker.foods().is_empty());
}

#[test]
fn test_factory_builds_file_backend() {
    common::init_test_logging();
    let dir = TempDir::new().unwrap();
    let config = StorageConfig {
        backend: StorageBackend::File,
        data_dir: dir.path().join("tracker"),
    };

    let storage = Storage::from_config(&config).unwrap();

    assert!(matches!(storage, Storage::File(_)));
    assert_eq!(storage.backend_name(), "file");
    assert!(config.data_dir.is_dir());
}

#[test]
fn test_factory_builds_memory_backend() {
    common::init_test_logging();
    let dir = TempDir::new().unwrap();
    let config = StorageConfig {
        backend: StorageBackend::Memory,
        data_dir: dir.path().join("unused"),
    };

    let storage = Storage::from_config(&config).unwrap();
    storage.set_item("foods", "[]").unwrap();

    assert!(matches!(storage, Storage::Memory(_)));
    assert_eq!(storage.backend_name(), "memory");
    assert!(!config.data_dir.exists());
}

#[test]
fn test_failed_food_write_leaves_catalog_unchanged() {
    common::init_test_logging();
    let dir = TempDir::new().unwrap();
    let root = dir.path().join("blocked");
    fs::write(&root, "x").unwrap();
    let mut tracker = NutritionTracker::open(FileStorage::new(&root));

    let err = tracker.add_food("Rice", 1.3, 0.027).unwrap_err();
    assert_eq!(err.code, ErrorCode::StorageError);
    assert!(tracker.foods().is_empty());
    assert!(tracker.find_food("Rice").is_none());

    fs::remove_file(&root).unwrap();
    let retried = tracker.add_food("Rice", 1.3, 0.027).unwrap();
    assert!(retried.is_some());

    let reopened = NutritionTracker::open(FileStorage::new(&root));
    assert_eq!(reopened.foods(), tracker.foods());
}

#[test]
fn test_failed_intake_writes_leave_log_unchanged() {
    let (storage, _dir) = temp_storage();
    let mut tracker = NutritionTracker::open(storage.clone());
    tracker.add_food("Rice", 1.3, 0.027).unwrap();
    let first = tracker
        .log_intake_at("Rice", 100.0, &common::at_millis(1_000))
        .unwrap()
        .unwrap();

    fs::remove_dir_all(storage.root()).unwrap();
    fs::write(storage.root(), "x").unwrap();

    let err = tracker
        .log_intake_at("Rice", 50.0, &common::at_millis(2_000))
        .unwrap_err();
    assert_eq!(err.code, ErrorCode::StorageError);
    assert_eq!(tracker.entries(), [first.clone()]);

    assert!(tracker.remove_entry(first.id()).is_err());
    assert_eq!(tracker.entries(), [first.clone()]);

    assert!(tracker.reset_day().is_err());
    assert_eq!(tracker.entries(), [first]);
    common::assert_close(tracker.totals().calories, 130.0);
}
