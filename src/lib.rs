// ABOUTME: Main library entry point for the nutrition tracker
// ABOUTME: Food catalog, daily intake log, aggregation, and pluggable key-value persistence
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Nutrition Tracker
//!
//! A single-user nutrition tracker. Foods are defined with per-gram calorie
//! and protein values, consumption is logged by choosing a food and a gram
//! quantity, and running totals are derived from the logged entries.
//!
//! ## Architecture
//!
//! - **Storage**: raw key-value slots behind [`storage::StorageProvider`]
//!   (in-memory for tests, one JSON file per slot in production)
//! - **Persistence**: typed load/save of both collections on top of a storage provider
//! - **Catalog / Intake log**: the two persistent collections
//! - **Aggregation**: pure totals over the current entries
//! - **Tracker**: application root owning both collections
//!
//! ## Example Usage
//!
//! ```rust
//! use nutrition_tracker::storage::memory::InMemoryStorage;
//! use nutrition_tracker::tracker::NutritionTracker;
//! # fn main() -> nutrition_tracker::errors::AppResult<()> {
//!
//! let mut tracker = NutritionTracker::open(InMemoryStorage::new());
//! tracker.add_food("Chicken Breast", 1.65, 0.31)?;
//! tracker.log_intake("Chicken Breast", 200.0)?;
//!
//! let totals = tracker.totals();
//! assert!((totals.calories - 330.0).abs() < 1e-6);
//! # Ok(())
//! # }
//! ```

/// Unified error handling re-exported from the core crate
pub mod errors;

/// Pluggable key-value storage backends
pub mod storage;

/// Typed load/save of the food catalog and intake log
pub mod persistence;

/// User-defined food catalog
pub mod catalog;

/// Today's intake entries
pub mod intake_log;

/// Totals derived from intake entries
pub mod aggregation;

/// Application root owning both collections
pub mod tracker;

/// Raw form input parsing
pub mod forms;

/// Output formats and display strings
pub mod formatters;

/// Environment-based configuration
pub mod config;

/// Structured logging setup
pub mod logging;

pub use nutrition_core::models;
