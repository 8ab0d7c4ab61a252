// ABOUTME: Application root owning the food catalog and intake log
// ABOUTME: Storage is injected so tests run in memory and the CLI runs on files
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::aggregation::IntakeTotals;
use crate::catalog::FoodCatalog;
use crate::errors::AppResult;
use crate::forms::{FoodForm, IntakeForm};
use crate::intake_log::IntakeLog;
use crate::models::{EntryId, Food, IntakeEntry};
use crate::persistence::PersistenceAdapter;
use crate::storage::StorageProvider;
use chrono::{DateTime, TimeZone};
use std::fmt::Display;
use tracing::{debug, info};

/// Nutrition tracker session
///
/// Every mutation is mirrored to storage before it returns. Totals are
/// derived from the current entries on each call to [`NutritionTracker::totals`].
#[derive(Debug)]
pub struct NutritionTracker<S: StorageProvider> {
    catalog: FoodCatalog<S>,
    intake: IntakeLog<S>,
    persistence: PersistenceAdapter<S>,
}

impl<S: StorageProvider> NutritionTracker<S> {
    /// Open a session, loading both collections from `storage`
    pub fn open(storage: S) -> Self {
        let persistence = PersistenceAdapter::new(storage);
        let catalog = FoodCatalog::load(persistence.clone());
        let intake = IntakeLog::load(persistence.clone());

        info!(
            backend = persistence.storage().backend_name(),
            foods = catalog.len(),
            entries = intake.len(),
            "Nutrition tracker opened"
        );

        Self {
            catalog,
            intake,
            persistence,
        }
    }

    /// Add a food to the catalog
    ///
    /// # Errors
    ///
    /// Returns an error if persisting the catalog fails
    pub fn add_food(
        &mut self,
        name: &str,
        calories_per_gram: f64,
        protein_per_gram: f64,
    ) -> AppResult<Option<Food>> {
        self.catalog.add(name, calories_per_gram, protein_per_gram)
    }

    /// Submit the "add food" form; incomplete forms are a no-op
    ///
    /// # Errors
    ///
    /// Returns an error if persisting the catalog fails
    pub fn submit_food(&mut self, form: &FoodForm) -> AppResult<Option<Food>> {
        let Some(food) = form.parse() else {
            debug!("Food form incomplete, nothing submitted");
            return Ok(None);
        };
        self.add_food(&food.name, food.calories_per_gram, food.protein_per_gram)
    }

    /// Foods in insertion order
    #[must_use]
    pub fn foods(&self) -> &[Food] {
        self.catalog.list()
    }

    /// First food named `name`
    #[must_use]
    pub fn find_food(&self, name: &str) -> Option<&Food> {
        self.catalog.find(name)
    }

    /// Log `grams` of a catalog food now
    ///
    /// # Errors
    ///
    /// Returns an error if persisting the log fails
    pub fn log_intake(&mut self, food_name: &str, grams: f64) -> AppResult<Option<IntakeEntry>> {
        self.intake.add(&self.catalog, food_name, grams)
    }

    /// Log `grams` of a catalog food at `now`
    ///
    /// # Errors
    ///
    /// Returns an error if persisting the log fails
    pub fn log_intake_at<Tz>(
        &mut self,
        food_name: &str,
        grams: f64,
        now: &DateTime<Tz>,
    ) -> AppResult<Option<IntakeEntry>>
    where
        Tz: TimeZone,
        Tz::Offset: Display,
    {
        self.intake.add_at(&self.catalog, food_name, grams, now)
    }

    /// Submit the "add intake" form; incomplete forms are a no-op
    ///
    /// # Errors
    ///
    /// Returns an error if persisting the log fails
    pub fn submit_intake(&mut self, form: &IntakeForm) -> AppResult<Option<IntakeEntry>> {
        let Some(request) = form.parse() else {
            debug!("Intake form incomplete, nothing submitted");
            return Ok(None);
        };
        self.log_intake(&request.food_name, request.grams)
    }

    /// Delete one intake entry
    ///
    /// # Errors
    ///
    /// Returns an error if persisting the log fails
    pub fn remove_entry(&mut self, id: EntryId) -> AppResult<bool> {
        self.intake.remove(id)
    }

    /// Clear today's intake
    ///
    /// # Errors
    ///
    /// Returns an error if removing the intake slot fails
    pub fn reset_day(&mut self) -> AppResult<()> {
        self.intake.reset_all()
    }

    /// Today's entries, oldest first
    #[must_use]
    pub fn entries(&self) -> &[IntakeEntry] {
        self.intake.list()
    }

    /// Totals over today's entries
    #[must_use]
    pub fn totals(&self) -> IntakeTotals {
        IntakeTotals::from_entries(self.intake.list())
    }

    /// Storage the session persists to
    #[must_use]
    pub fn storage(&self) -> &S {
        self.persistence.storage()
    }
}
