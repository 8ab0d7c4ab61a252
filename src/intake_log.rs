// ABOUTME: Today's intake entries with frozen nutrition values and monotonic identifiers
// ABOUTME: Add, remove by id, and reset, each mirrored synchronously to storage
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::catalog::FoodCatalog;
use crate::errors::AppResult;
use crate::models::{EntryId, IntakeEntry};
use crate::persistence::PersistenceAdapter;
use crate::storage::StorageProvider;
use chrono::{DateTime, Local, TimeZone};
use std::fmt::Display;
use tracing::{debug, info};

/// Format of the cosmetic `time` field captured on each entry
pub const ENTRY_TIME_FORMAT: &str = "%-I:%M:%S %p";

/// Issues entry identifiers from a millisecond clock
///
/// Each id is the clock reading unless that would not exceed the previous id,
/// in which case it is the previous id plus one. Ids therefore stay unique
/// under same-millisecond additions and remain a close creation-time marker.
#[derive(Debug, Clone, Copy, Default)]
pub struct EntryIdGenerator {
    last: Option<i64>,
}

impl EntryIdGenerator {
    /// Generator that will only issue ids greater than every id in `entries`
    #[must_use]
    pub fn seeded_from(entries: &[IntakeEntry]) -> Self {
        Self {
            last: entries.iter().map(|e| e.id().as_millis()).max(),
        }
    }

    /// Next id for a clock reading of `now_millis`
    pub fn next_id(&mut self, now_millis: i64) -> EntryId {
        let id = match self.last {
            Some(last) if now_millis <= last => last.saturating_add(1),
            _ => now_millis,
        };
        self.last = Some(id);
        EntryId(id)
    }
}

/// The collection of today's intake entries, oldest first
#[derive(Debug)]
pub struct IntakeLog<S: StorageProvider> {
    entries: Vec<IntakeEntry>,
    ids: EntryIdGenerator,
    persistence: PersistenceAdapter<S>,
}

impl<S: StorageProvider> IntakeLog<S> {
    /// Load today's entries from storage
    pub fn load(persistence: PersistenceAdapter<S>) -> Self {
        let entries = persistence.load_intake();
        let ids = EntryIdGenerator::seeded_from(&entries);
        Self {
            entries,
            ids,
            persistence,
        }
    }

    /// Log `grams` of the catalog food named `food_name`, stamped with the current time
    ///
    /// # Errors
    ///
    /// Returns an error only if persisting the log fails
    pub fn add(
        &mut self,
        catalog: &FoodCatalog<S>,
        food_name: &str,
        grams: f64,
    ) -> AppResult<Option<IntakeEntry>> {
        self.add_at(catalog, food_name, grams, &Local::now())
    }

    /// Log `grams` of the catalog food named `food_name` at time `now`
    ///
    /// Returns `Ok(None)` without writing anything when no food has that name
    /// or `grams` is not a finite number.
    ///
    /// # Errors
    ///
    /// Returns an error only if persisting the log fails; the log is then left
    /// unchanged
    pub fn add_at<Tz>(
        &mut self,
        catalog: &FoodCatalog<S>,
        food_name: &str,
        grams: f64,
        now: &DateTime<Tz>,
    ) -> AppResult<Option<IntakeEntry>>
    where
        Tz: TimeZone,
        Tz::Offset: Display,
    {
        let Some(food) = catalog.find(food_name) else {
            debug!(food = food_name, "Intake rejected: food not in catalog");
            return Ok(None);
        };
        if !grams.is_finite() {
            debug!(food = food_name, "Intake rejected: grams must be a finite number");
            return Ok(None);
        }

        let id = self.ids.next_id(now.timestamp_millis());
        let time = now.format(ENTRY_TIME_FORMAT).to_string();
        let entry = IntakeEntry::from_food(id, food, grams, time);

        let mut entries = self.entries.clone();
        entries.push(entry.clone());
        self.persistence.save_intake(&entries)?;
        self.entries = entries;

        info!(
            entry_id = %entry.id(),
            food = entry.name(),
            grams = entry.grams(),
            calories = entry.calories(),
            protein = entry.protein(),
            "Intake logged"
        );
        Ok(Some(entry))
    }

    /// Remove the entry with `id`, returning whether one was removed
    ///
    /// The remaining entries are written back even when nothing matched.
    ///
    /// # Errors
    ///
    /// Returns an error if persisting the log fails; the entries are then
    /// left unchanged
    pub fn remove(&mut self, id: EntryId) -> AppResult<bool> {
        let remaining: Vec<IntakeEntry> = self
            .entries
            .iter()
            .filter(|entry| entry.id() != id)
            .cloned()
            .collect();
        let removed = remaining.len() != self.entries.len();

        self.persistence.save_intake(&remaining)?;
        self.entries = remaining;

        if removed {
            info!(entry_id = %id, "Intake entry removed");
        } else {
            debug!(entry_id = %id, "No intake entry with that id");
        }
        Ok(removed)
    }

    /// Empty the log and remove its storage slot
    ///
    /// # Errors
    ///
    /// Returns an error if removing the slot fails; the entries are then
    /// left unchanged
    pub fn reset_all(&mut self) -> AppResult<()> {
        self.persistence.clear_intake()?;
        let cleared = self.entries.len();
        self.entries.clear();
        info!(cleared, "Daily intake reset");
        Ok(())
    }

    /// Entries in insertion order
    #[must_use]
    pub fn list(&self) -> &[IntakeEntry] {
        &self.entries
    }

    /// Entry with `id`, if present
    #[must_use]
    pub fn get(&self, id: EntryId) -> Option<&IntakeEntry> {
        self.entries.iter().find(|entry| entry.id() == id)
    }

    /// Number of entries
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no entries are logged
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_generator_uses_clock_when_ahead() {
        let mut ids = EntryIdGenerator::default();
        assert_eq!(ids.next_id(1_000), EntryId(1_000));
        assert_eq!(ids.next_id(2_000), EntryId(2_000));
    }

    #[test]
    fn test_id_generator_same_millisecond() {
        let mut ids = EntryIdGenerator::default();
        assert_eq!(ids.next_id(5_000), EntryId(5_000));
        assert_eq!(ids.next_id(5_000), EntryId(5_001));
        assert_eq!(ids.next_id(4_000), EntryId(5_002));
        assert_eq!(ids.next_id(9_000), EntryId(9_000));
    }
}
