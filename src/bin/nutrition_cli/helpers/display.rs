// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
// ABOUTME: Output formatting helpers for nutrition-tracker
// ABOUTME: Consistent text and JSON rendering of foods, entries, and totals

use chrono::Local;
use nutrition_tracker::{
    aggregation::IntakeTotals,
    errors::AppResult,
    formatters::{entry_details, entry_headline, food_line, format_json, totals_banner, OutputFormat},
    models::{Food, IntakeEntry},
};
use serde::Serialize;

/// Entries plus totals, as emitted by `intake list --format json`
#[derive(Serialize)]
struct IntakeReport<'a> {
    entries: &'a [IntakeEntry],
    totals: IntakeTotals,
}

/// Print the food catalog
pub fn display_foods(foods: &[Food], format: OutputFormat) -> AppResult<()> {
    match format {
        OutputFormat::Json => println!("{}", format_json(foods)?),
        OutputFormat::Text if foods.is_empty() => {
            println!("No foods defined yet. Add one with `food add`.");
        }
        OutputFormat::Text => {
            println!("Foods ({})", foods.len());
            println!("{}", "=".repeat(40));
            for food in foods {
                println!("  {}", food_line(food));
            }
        }
    }
    Ok(())
}

/// Print today's entries followed by the totals banner
pub fn display_intake(
    entries: &[IntakeEntry],
    totals: &IntakeTotals,
    format: OutputFormat,
) -> AppResult<()> {
    match format {
        OutputFormat::Json => {
            let report = IntakeReport {
                entries,
                totals: *totals,
            };
            println!("{}", format_json(&report)?);
        }
        OutputFormat::Text => {
            println!("Today's Intake");
            println!("{}", "=".repeat(40));
            println!("{}", totals_banner(totals));
            println!("{}", "-".repeat(40));
            for entry in entries {
                println!("[{}] {}", entry.id(), entry_headline(entry));
                println!("    {}", entry_details(entry, &Local));
            }
        }
    }
    Ok(())
}

/// Print the totals banner only
pub fn display_totals(totals: &IntakeTotals, format: OutputFormat) -> AppResult<()> {
    match format {
        OutputFormat::Json => println!("{}", format_json(totals)?),
        OutputFormat::Text => println!("{}", totals_banner(totals)),
    }
    Ok(())
}

/// Print a newly created food, or `null` in JSON mode when nothing was added
pub fn display_added_food(food: Option<&Food>, format: OutputFormat) -> AppResult<()> {
    match (format, food) {
        (OutputFormat::Json, food) => println!("{}", format_json(&food)?),
        (OutputFormat::Text, Some(food)) => println!("Added {}", food_line(food)),
        (OutputFormat::Text, None) => {}
    }
    Ok(())
}

/// Print a newly logged entry, or `null` in JSON mode when nothing was logged
pub fn display_added_entry(entry: Option<&IntakeEntry>, format: OutputFormat) -> AppResult<()> {
    match (format, entry) {
        (OutputFormat::Json, entry) => println!("{}", format_json(&entry)?),
        (OutputFormat::Text, Some(entry)) => {
            println!("Logged [{}] {}", entry.id(), entry_headline(entry));
            println!("    {}", entry_details(entry, &Local));
        }
        (OutputFormat::Text, None) => {}
    }
    Ok(())
}

/// Print a one-line status message in text mode, or `{"<key>": value}` in JSON mode
pub fn display_status(key: &str, value: bool, message: &str, format: OutputFormat) -> AppResult<()> {
    match format {
        OutputFormat::Json => {
            let mut body = serde_json::Map::new();
            body.insert(key.to_owned(), value.into());
            println!("{}", format_json(&body)?);
        }
        OutputFormat::Text => println!("{message}"),
    }
    Ok(())
}
