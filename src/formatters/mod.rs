// ABOUTME: Output format selection and display strings for foods, entries, and totals
// ABOUTME: Text output mirrors the tracker's on-screen wording; JSON output is pretty-printed
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Output Format Abstraction Layer
//!
//! Rounding here is presentation only. Stored values keep full precision.
//!
//! ## Display rules
//!
//! - Totals: calories and protein with no decimals, rounded half away from zero
//! - Entries: calories and protein with two decimals
//! - Entry clock time: derived from the entry id, `hh:mm AM`

use crate::aggregation::IntakeTotals;
use crate::errors::{AppError, AppResult};
use crate::models::{Food, IntakeEntry};
use chrono::{DateTime, TimeZone};
use serde::Serialize;
use std::fmt::{self, Display};

/// Clock format used when showing an entry's creation time
pub const CLOCK_TIME_FORMAT: &str = "%I:%M %p";

/// Output serialization format selector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Human-readable text (default)
    #[default]
    Text,
    /// Pretty-printed JSON for scripting
    Json,
}

impl OutputFormat {
    /// Parse format from string parameter (case-insensitive)
    /// Returns `Text` for unrecognized values
    #[must_use]
    pub fn from_str_param(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "json" => Self::Json,
            _ => Self::Text,
        }
    }

    /// Get the format name as a string
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Json => "json",
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Serialize `data` as pretty JSON
///
/// # Errors
///
/// Returns `SerializationError` if the value cannot be encoded
pub fn format_json<T: Serialize + ?Sized>(data: &T) -> AppResult<String> {
    serde_json::to_string_pretty(data)
        .map_err(|e| AppError::serialization(format!("JSON serialization failed: {e}")))
}

/// Round half away from zero to `digits` decimal places
#[must_use]
pub fn round_to(value: f64, digits: i32) -> f64 {
    let factor = 10_f64.powi(digits);
    (value * factor).round() / factor
}

/// `"{grams}g {name}"`, e.g. `200g Chicken Breast`
#[must_use]
pub fn entry_headline(entry: &IntakeEntry) -> String {
    format!("{}g {}", entry.grams(), entry.name())
}

/// Clock time as `hh:mm AM`
#[must_use]
pub fn format_clock_time<Tz>(time: &DateTime<Tz>) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    time.format(CLOCK_TIME_FORMAT).to_string()
}

/// `Calories: 330.00, Protein: 62.00g, Time: 03:04 PM`, time shown in `tz`
#[must_use]
pub fn entry_details<Tz>(entry: &IntakeEntry, tz: &Tz) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    let time = entry.id().created_at().map_or_else(
        || entry.time().to_owned(),
        |created| format_clock_time(&created.with_timezone(tz)),
    );
    format!(
        "Calories: {:.2}, Protein: {:.2}g, Time: {time}",
        round_to(entry.calories(), 2),
        round_to(entry.protein(), 2),
    )
}

/// Total calories with no decimals
#[must_use]
pub fn calories_display(calories: f64) -> String {
    format!("{:.0}", round_to(calories, 0))
}

/// Total protein with no decimals and a `g` suffix
#[must_use]
pub fn protein_display(protein: f64) -> String {
    format!("{:.0}g", round_to(protein, 0))
}

/// The two-line totals banner
#[must_use]
pub fn totals_banner(totals: &IntakeTotals) -> String {
    format!(
        "Total Calories: {}\nTotal Protein: {}",
        calories_display(totals.calories),
        protein_display(totals.protein)
    )
}

/// One catalog line, e.g. `Rice: 1.3 kcal/g, 0.027 g protein/g`
#[must_use]
pub fn food_line(food: &Food) -> String {
    format!(
        "{}: {} kcal/g, {} g protein/g",
        food.name, food.calories_per_gram, food.protein_per_gram
    )
}
