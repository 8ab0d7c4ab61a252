// ABOUTME: Shared test utilities and setup functions for integration tests
// ABOUTME: Provides quiet logging, in-memory trackers, fixed clocks, and seeded storage
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
#![allow(
    dead_code,
    clippy::missing_panics_doc,
    clippy::must_use_candidate,
    clippy::unwrap_used
)]
//! Shared test utilities for `nutrition_tracker`

use chrono::{DateTime, TimeZone, Utc};
use nutrition_tracker::{
    models::{EntryId, Food, IntakeEntry},
    storage::memory::InMemoryStorage,
    tracker::NutritionTracker,
};
use std::sync::Once;

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        let log_level = match std::env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => tracing::Level::TRACE,
            Ok("DEBUG") => tracing::Level::DEBUG,
            Ok("INFO") => tracing::Level::INFO,
            _ => tracing::Level::WARN,
        };

        let _ = tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .try_init();
    });
}

/// Fresh tracker over empty in-memory storage, plus a handle to inspect that storage
pub fn memory_tracker() -> (NutritionTracker<InMemoryStorage>, InMemoryStorage) {
    init_test_logging();
    let storage = InMemoryStorage::new();
    let tracker = NutritionTracker::open(storage.clone());
    (tracker, storage)
}

/// A fixed UTC instant `millis` after the epoch
pub fn at_millis(millis: i64) -> DateTime<Utc> {
    Utc.timestamp_millis_opt(millis).unwrap()
}

/// Intake entry for `grams` of `food` with a chosen id
pub fn entry(id: i64, food: &Food, grams: f64) -> IntakeEntry {
    IntakeEntry::from_food(EntryId(id), food, grams, "12:00:00 PM")
}

/// Ids of `entries`, in order
pub fn ids(entries: &[IntakeEntry]) -> Vec<i64> {
    entries.iter().map(|e| e.id().as_millis()).collect()
}

/// Approximate float equality for nutrition values
pub fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-9,
        "expected {expected}, got {actual}"
    );
}
