// ABOUTME: Food catalog commands for nutrition-tracker
// ABOUTME: Handles adding and listing foods
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use nutrition_tracker::{
    errors::AppResult,
    forms::{parse_text_field, FoodForm},
    formatters::OutputFormat,
    storage::StorageProvider,
    tracker::NutritionTracker,
};
use tracing::info;

use crate::helpers::display::{display_added_food, display_foods};

/// Add a food from raw form values
pub fn add<S: StorageProvider>(
    tracker: &mut NutritionTracker<S>,
    name: String,
    calories_per_gram: String,
    protein_per_gram: String,
    format: OutputFormat,
) -> AppResult<()> {
    let form = FoodForm::new(name, calories_per_gram, protein_per_gram);
    let added = tracker.submit_food(&form)?;

    if added.is_none() && format == OutputFormat::Text {
        println!("{}", rejection_reason(tracker, &form));
    }
    if let Some(food) = &added {
        info!(food = %food.name, total_foods = tracker.foods().len(), "Catalog updated");
    }
    display_added_food(added.as_ref(), format)
}

/// List all foods in the catalog
pub fn list<S: StorageProvider>(tracker: &NutritionTracker<S>, format: OutputFormat) -> AppResult<()> {
    display_foods(tracker.foods(), format)
}

fn rejection_reason<S: StorageProvider>(tracker: &NutritionTracker<S>, form: &FoodForm) -> String {
    match parse_text_field(&form.name) {
        None => "Food not added: a name is required.".to_owned(),
        Some(name) if tracker.find_food(name).is_some() => {
            format!("Food not added: '{name}' is already in the catalog.")
        }
        Some(_) => {
            "Food not added: calories and protein per gram must both be numbers.".to_owned()
        }
    }
}
