// ABOUTME: Intake entry recording a quantity of a food with frozen nutrition values
// ABOUTME: EntryId doubles as the creation timestamp in epoch milliseconds
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::Food;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::ParseIntError;
use std::str::FromStr;

/// Identifier of an intake entry
///
/// The value is the entry's creation time in milliseconds since the Unix
/// epoch, nudged forward when needed so identifiers stay unique.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EntryId(pub i64);

impl EntryId {
    /// Raw millisecond value
    #[must_use]
    pub const fn as_millis(self) -> i64 {
        self.0
    }

    /// Creation time encoded in the identifier
    #[must_use]
    pub fn created_at(self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp_millis(self.0)
    }
}

impl fmt::Display for EntryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for EntryId {
    type Err = ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim().parse().map(Self)
    }
}

/// A logged consumption event
///
/// `calories` and `protein` are computed once from the food's per-gram values
/// and never recomputed. Fields are read through accessors so nothing outside
/// this module can change them after creation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IntakeEntry {
    id: EntryId,
    name: String,
    grams: f64,
    calories: f64,
    protein: f64,
    time: String,
}

impl IntakeEntry {
    /// Build an entry for `grams` of `food`
    pub fn from_food(id: EntryId, food: &Food, grams: f64, time: impl Into<String>) -> Self {
        Self {
            id,
            name: food.name.clone(),
            grams,
            calories: food.calories_for(grams),
            protein: food.protein_for(grams),
            time: time.into(),
        }
    }

    /// Entry identifier
    #[must_use]
    pub const fn id(&self) -> EntryId {
        self.id
    }

    /// Name of the food at logging time
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Quantity consumed in grams
    #[must_use]
    pub const fn grams(&self) -> f64 {
        self.grams
    }

    /// Calories consumed
    #[must_use]
    pub const fn calories(&self) -> f64 {
        self.calories
    }

    /// Protein consumed in grams
    #[must_use]
    pub const fn protein(&self) -> f64 {
        self.protein
    }

    /// Local time string captured when the entry was logged
    #[must_use]
    pub fn time(&self) -> &str {
        &self.time
    }
}
