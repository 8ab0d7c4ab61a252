// ABOUTME: User-defined food catalog with insertion-ordered, uniquely named foods
// ABOUTME: Every successful add persists the full catalog
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::errors::AppResult;
use crate::models::Food;
use crate::persistence::PersistenceAdapter;
use crate::storage::StorageProvider;
use tracing::{debug, info, warn};

/// The user's collection of defined foods
///
/// Foods are never edited or deleted once added. Names are unique for foods
/// added through [`FoodCatalog::add`]; a catalog loaded from older data may
/// still contain duplicates, in which case [`FoodCatalog::find`] returns the
/// first one.
#[derive(Debug)]
pub struct FoodCatalog<S: StorageProvider> {
    foods: Vec<Food>,
    persistence: PersistenceAdapter<S>,
}

impl<S: StorageProvider> FoodCatalog<S> {
    /// Load the catalog from storage
    pub fn load(persistence: PersistenceAdapter<S>) -> Self {
        let foods = persistence.load_foods();
        Self { foods, persistence }
    }

    /// Add a food and persist the catalog
    ///
    /// Returns `Ok(None)` without writing anything when the name is blank, a
    /// value is not a finite number, or a food with the same name exists.
    ///
    /// # Errors
    ///
    /// Returns an error only if persisting the catalog fails; the in-memory
    /// catalog is then left unchanged
    pub fn add(
        &mut self,
        name: &str,
        calories_per_gram: f64,
        protein_per_gram: f64,
    ) -> AppResult<Option<Food>> {
        let name = name.trim();
        if name.is_empty() {
            debug!("Food rejected: empty name");
            return Ok(None);
        }
        if !calories_per_gram.is_finite() || !protein_per_gram.is_finite() {
            debug!(food = name, "Food rejected: per-gram values must be finite");
            return Ok(None);
        }
        if self.find(name).is_some() {
            warn!(food = name, "Food rejected: name already in catalog");
            return Ok(None);
        }

        let food = Food::new(name, calories_per_gram, protein_per_gram);
        let mut foods = self.foods.clone();
        foods.push(food.clone());
        self.persistence.save_foods(&foods)?;
        self.foods = foods;

        info!(
            food = %food.name,
            calories_per_gram = food.calories_per_gram,
            protein_per_gram = food.protein_per_gram,
            "Food added"
        );
        Ok(Some(food))
    }

    /// First food whose name equals `name`
    #[must_use]
    pub fn find(&self, name: &str) -> Option<&Food> {
        self.foods.iter().find(|food| food.name == name)
    }

    /// All foods in insertion order
    #[must_use]
    pub fn list(&self) -> &[Food] {
        &self.foods
    }

    /// Number of foods
    #[must_use]
    pub fn len(&self) -> usize {
        self.foods.len()
    }

    /// Whether the catalog has no foods
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.foods.is_empty()
    }
}
