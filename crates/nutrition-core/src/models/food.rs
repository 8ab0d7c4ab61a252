// ABOUTME: Food definition with per-gram calorie and protein values
// ABOUTME: Immutable once added to the catalog
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};

/// A named nutritional profile
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Food {
    /// Display name, also the lookup key within the catalog
    pub name: String,
    /// Kilocalories per gram
    pub calories_per_gram: f64,
    /// Grams of protein per gram
    pub protein_per_gram: f64,
}

impl Food {
    /// Create a food definition
    pub fn new(name: impl Into<String>, calories_per_gram: f64, protein_per_gram: f64) -> Self {
        Self {
            name: name.into(),
            calories_per_gram,
            protein_per_gram,
        }
    }

    /// Calories contained in `grams` of this food
    #[must_use]
    pub fn calories_for(&self, grams: f64) -> f64 {
        grams * self.calories_per_gram
    }

    /// Protein contained in `grams` of this food
    #[must_use]
    pub fn protein_for(&self, grams: f64) -> f64 {
        grams * self.protein_per_gram
    }
}
