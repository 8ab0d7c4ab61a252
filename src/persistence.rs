// ABOUTME: Typed persistence of the food catalog and intake log over a storage provider
// ABOUTME: Corrupt or missing slots load as empty collections; write failures propagate
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Persistence Adapter
//!
//! Both collections are stored as JSON arrays in independent slots
//! (`foods` and `dailyIntake`). Loading never fails: an absent slot, a JSON
//! `null`, unreadable storage, or a document that does not decode all start
//! the collection empty.

use crate::errors::AppResult;
use crate::models::{Food, IntakeEntry};
use crate::storage::StorageProvider;
use nutrition_core::constants::storage::{DAILY_INTAKE_KEY, FOODS_KEY};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{debug, warn};

/// Load/save of both collections, mirroring in-memory state into storage
#[derive(Debug, Clone)]
pub struct PersistenceAdapter<S: StorageProvider> {
    storage: S,
}

impl<S: StorageProvider> PersistenceAdapter<S> {
    /// Wrap a storage provider
    pub const fn new(storage: S) -> Self {
        Self { storage }
    }

    /// Underlying storage provider
    pub const fn storage(&self) -> &S {
        &self.storage
    }

    /// Load the food catalog, empty if absent or undecodable
    pub fn load_foods(&self) -> Vec<Food> {
        self.load_collection(FOODS_KEY)
    }

    /// Overwrite the food catalog slot
    ///
    /// # Errors
    ///
    /// Returns an error if encoding or the storage write fails
    pub fn save_foods(&self, foods: &[Food]) -> AppResult<()> {
        self.save_collection(FOODS_KEY, foods)
    }

    /// Load today's intake entries, empty if absent or undecodable
    pub fn load_intake(&self) -> Vec<IntakeEntry> {
        self.load_collection(DAILY_INTAKE_KEY)
    }

    /// Overwrite the intake slot
    ///
    /// # Errors
    ///
    /// Returns an error if encoding or the storage write fails
    pub fn save_intake(&self, entries: &[IntakeEntry]) -> AppResult<()> {
        self.save_collection(DAILY_INTAKE_KEY, entries)
    }

    /// Remove the intake slot entirely
    ///
    /// Distinct from `save_intake(&[])`: afterwards the slot is absent.
    ///
    /// # Errors
    ///
    /// Returns an error if the storage removal fails
    pub fn clear_intake(&self) -> AppResult<()> {
        self.storage.remove_item(DAILY_INTAKE_KEY)?;
        debug!(slot = DAILY_INTAKE_KEY, "Intake slot cleared");
        Ok(())
    }

    fn load_collection<T: DeserializeOwned>(&self, key: &str) -> Vec<T> {
        let raw = match self.storage.get_item(key) {
            Ok(Some(raw)) => raw,
            Ok(None) => {
                debug!(slot = key, "Slot absent, starting empty");
                return Vec::new();
            }
            Err(e) => {
                warn!(slot = key, error = %e, "Slot unreadable, starting empty");
                return Vec::new();
            }
        };

        match serde_json::from_str::<Option<Vec<T>>>(&raw) {
            Ok(items) => {
                let items = items.unwrap_or_default();
                debug!(slot = key, count = items.len(), "Slot loaded");
                items
            }
            Err(e) => {
                warn!(slot = key, error = %e, "Slot could not be decoded, starting empty");
                Vec::new()
            }
        }
    }

    fn save_collection<T: Serialize>(&self, key: &str, items: &[T]) -> AppResult<()> {
        let raw = serde_json::to_string(items)?;
        self.storage.set_item(key, &raw)?;
        debug!(slot = key, count = items.len(), backend = self.storage.backend_name(), "Slot saved");
        Ok(())
    }
}
