// ABOUTME: Pure totals of calories and protein over intake entries
// ABOUTME: Recomputed on every query; display rounding lives in formatters
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::models::IntakeEntry;
use serde::{Deserialize, Serialize};

/// Sum of `calories` over `entries`, 0 when empty
#[must_use]
pub fn total_calories(entries: &[IntakeEntry]) -> f64 {
    entries.iter().map(IntakeEntry::calories).sum()
}

/// Sum of `protein` over `entries`, 0 when empty
#[must_use]
pub fn total_protein(entries: &[IntakeEntry]) -> f64 {
    entries.iter().map(IntakeEntry::protein).sum()
}

/// Running totals for a set of entries
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct IntakeTotals {
    /// Total calories
    pub calories: f64,
    /// Total protein in grams
    pub protein: f64,
    /// Number of entries summed
    pub entries: usize,
}

impl IntakeTotals {
    /// Derive totals from `entries`
    #[must_use]
    pub fn from_entries(entries: &[IntakeEntry]) -> Self {
        Self {
            calories: total_calories(entries),
            protein: total_protein(entries),
            entries: entries.len(),
        }
    }
}
