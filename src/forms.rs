// ABOUTME: Raw string form inputs for adding foods and logging intake
// ABOUTME: Presence and numeric-parse checks applied before the core is invoked
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Form inputs arrive as strings (CLI arguments, text fields). A form parses
//! to `None` when any required field is empty or not a number, and the
//! caller treats that as "nothing to submit". `"0"` counts as present.

use serde::{Deserialize, Serialize};

/// Parse a numeric form field
///
/// Returns `None` for empty or whitespace-only input and for anything that is
/// not a finite decimal number.
#[must_use]
pub fn parse_number_field(raw: &str) -> Option<f64> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed.parse::<f64>().ok().filter(|value| value.is_finite())
}

/// Parse a required text field, trimming surrounding whitespace
#[must_use]
pub fn parse_text_field(raw: &str) -> Option<&str> {
    let trimmed = raw.trim();
    (!trimmed.is_empty()).then_some(trimmed)
}

/// Validated input for a new food
#[derive(Debug, Clone, PartialEq)]
pub struct NewFood {
    /// Food name, trimmed
    pub name: String,
    /// Kilocalories per gram
    pub calories_per_gram: f64,
    /// Protein grams per gram
    pub protein_per_gram: f64,
}

/// The "add food" form as typed by the user
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FoodForm {
    /// Food name
    pub name: String,
    /// Calories per gram, as typed
    pub calories_per_gram: String,
    /// Protein per gram, as typed
    pub protein_per_gram: String,
}

impl FoodForm {
    /// Build a form from its three fields
    pub fn new(
        name: impl Into<String>,
        calories_per_gram: impl Into<String>,
        protein_per_gram: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            calories_per_gram: calories_per_gram.into(),
            protein_per_gram: protein_per_gram.into(),
        }
    }

    /// Validate the form; `None` if any field is missing or non-numeric
    #[must_use]
    pub fn parse(&self) -> Option<NewFood> {
        Some(NewFood {
            name: parse_text_field(&self.name)?.to_owned(),
            calories_per_gram: parse_number_field(&self.calories_per_gram)?,
            protein_per_gram: parse_number_field(&self.protein_per_gram)?,
        })
    }
}

/// Validated input for an intake entry
#[derive(Debug, Clone, PartialEq)]
pub struct IntakeRequest {
    /// Name of the selected catalog food
    pub food_name: String,
    /// Quantity in grams
    pub grams: f64,
}

/// The "add intake" form: a selected food and a gram quantity
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct IntakeForm {
    /// Selected food name
    pub food_name: String,
    /// Grams, as typed
    pub grams: String,
}

impl IntakeForm {
    /// Build a form from its two fields
    pub fn new(food_name: impl Into<String>, grams: impl Into<String>) -> Self {
        Self {
            food_name: food_name.into(),
            grams: grams.into(),
        }
    }

    /// Validate the form; `None` if no food is selected or grams is missing or non-numeric
    #[must_use]
    pub fn parse(&self) -> Option<IntakeRequest> {
        Some(IntakeRequest {
            food_name: parse_text_field(&self.food_name)?.to_owned(),
            grams: parse_number_field(&self.grams)?,
        })
    }
}
