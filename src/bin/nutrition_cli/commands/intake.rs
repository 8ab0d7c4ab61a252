// ABOUTME: Daily intake commands for nutrition-tracker
// ABOUTME: Handles logging, listing, removing, and resetting entries plus the totals summary
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use nutrition_tracker::{
    errors::AppResult,
    forms::{parse_text_field, IntakeForm},
    formatters::OutputFormat,
    models::EntryId,
    storage::StorageProvider,
    tracker::NutritionTracker,
};

use crate::helpers::display::{display_added_entry, display_intake, display_status, display_totals};

/// Log a quantity of a catalog food
pub fn add<S: StorageProvider>(
    tracker: &mut NutritionTracker<S>,
    food: String,
    grams: String,
    format: OutputFormat,
) -> AppResult<()> {
    let form = IntakeForm::new(food, grams);
    let logged = tracker.submit_intake(&form)?;

    if logged.is_none() && format == OutputFormat::Text {
        let reason = match parse_text_field(&form.food_name) {
            Some(name) if tracker.find_food(name).is_none() => {
                format!("Nothing logged: no food named '{name}' in the catalog.")
            }
            None => "Nothing logged: select a food.".to_owned(),
            Some(_) => "Nothing logged: grams must be a number.".to_owned(),
        };
        println!("{reason}");
    }
    display_added_entry(logged.as_ref(), format)
}

/// Show today's entries and totals
pub fn list<S: StorageProvider>(tracker: &NutritionTracker<S>, format: OutputFormat) -> AppResult<()> {
    display_intake(tracker.entries(), &tracker.totals(), format)
}

/// Delete one entry
pub fn remove<S: StorageProvider>(
    tracker: &mut NutritionTracker<S>,
    id: EntryId,
    format: OutputFormat,
) -> AppResult<()> {
    let removed = tracker.remove_entry(id)?;
    let message = if removed {
        format!("Removed entry {id}.")
    } else {
        format!("No entry with id {id}.")
    };
    display_status("removed", removed, &message, format)
}

/// Clear today's entries
pub fn reset<S: StorageProvider>(tracker: &mut NutritionTracker<S>, format: OutputFormat) -> AppResult<()> {
    tracker.reset_day()?;
    display_status("reset", true, "Daily intake reset.", format)
}

/// Show totals only
pub fn summary<S: StorageProvider>(tracker: &NutritionTracker<S>, format: OutputFormat) -> AppResult<()> {
    display_totals(&tracker.totals(), format)
}
