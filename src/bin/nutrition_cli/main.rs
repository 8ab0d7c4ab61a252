// ABOUTME: nutrition-tracker CLI - define foods, log daily intake, and view totals
// ABOUTME: Presentation layer over the tracker core with file-backed storage
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
//!
//! Usage:
//! ```bash
//! # Define a food (values per gram)
//! nutrition-tracker food add --name "Chicken Breast" --calories-per-gram 1.65 --protein-per-gram 0.31
//!
//! # List defined foods
//! nutrition-tracker food list
//!
//! # Log 200g of a food
//! nutrition-tracker intake add --food "Chicken Breast" --grams 200
//!
//! # Show today's entries and totals
//! nutrition-tracker intake list
//!
//! # Delete one entry, or clear the day
//! nutrition-tracker intake remove 1718000000000
//! nutrition-tracker intake reset
//!
//! # Totals only, as JSON
//! nutrition-tracker --format json summary
//! ```

mod commands;
mod helpers;

use anyhow::Context;
use clap::{Parser, Subcommand};
use nutrition_tracker::{
    config::{LogLevel, StorageBackend, TrackerConfig},
    errors::{AppResult, ErrorResponse},
    formatters::{format_json, OutputFormat},
    logging::LoggingConfig,
    models::EntryId,
    storage::Storage,
    tracker::NutritionTracker,
};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::debug;

#[derive(Parser)]
#[command(
    name = "nutrition-tracker",
    about = "Track daily calories and protein",
    long_about = "Define foods with per-gram calorie and protein values, log what you eat by grams, and see running totals."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Data directory override (file storage)
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    /// Storage backend override (file or memory)
    #[arg(long, global = true, value_parser = parse_storage_backend)]
    storage: Option<StorageBackend>,

    /// Output format (text or json)
    #[arg(long, global = true, default_value = "text")]
    format: String,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

#[non_exhaustive]
#[derive(Subcommand)]
enum Command {
    /// Food catalog commands
    Food {
        #[command(subcommand)]
        action: FoodCommand,
    },

    /// Daily intake commands
    Intake {
        #[command(subcommand)]
        action: IntakeCommand,
    },

    /// Show today's totals
    Summary,
}

#[non_exhaustive]
#[derive(Subcommand)]
enum FoodCommand {
    /// Define a new food
    Add {
        /// Food name (must not already exist)
        #[arg(long)]
        name: String,

        /// Calories per gram
        #[arg(long, allow_hyphen_values = true)]
        calories_per_gram: String,

        /// Protein grams per gram
        #[arg(long, allow_hyphen_values = true)]
        protein_per_gram: String,
    },

    /// List defined foods
    List,
}

#[non_exhaustive]
#[derive(Subcommand)]
enum IntakeCommand {
    /// Log a quantity of a defined food
    Add {
        /// Name of a food in the catalog
        #[arg(long)]
        food: String,

        /// Quantity in grams
        #[arg(long, allow_hyphen_values = true)]
        grams: String,
    },

    /// List today's entries with totals
    List,

    /// Delete one entry by id
    Remove {
        /// Entry id as shown by `intake list`
        id: EntryId,
    },

    /// Clear all of today's entries
    Reset,
}

fn parse_storage_backend(value: &str) -> Result<StorageBackend, String> {
    match value.trim().to_lowercase().as_str() {
        "file" => Ok(StorageBackend::File),
        "memory" => Ok(StorageBackend::Memory),
        other => Err(format!("unknown storage backend '{other}' (expected file or memory)")),
    }
}

fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();

    let logging = if cli.verbose {
        LoggingConfig::from_env().with_level(LogLevel::Debug)
    } else {
        LoggingConfig::from_env()
    };
    logging.init().context("initializing logging")?;

    let config = TrackerConfig::from_env()
        .context("loading configuration")?
        .with_overrides(cli.data_dir.clone(), cli.storage);
    let format = OutputFormat::from_str_param(&cli.format);

    match run(cli.command, &config, format) {
        Ok(()) => Ok(ExitCode::SUCCESS),
        Err(e) if format == OutputFormat::Json => {
            println!("{}", format_json(&ErrorResponse::from(&e))?);
            Ok(ExitCode::FAILURE)
        }
        Err(e) => Err(e.into()),
    }
}

fn run(command: Command, config: &TrackerConfig, format: OutputFormat) -> AppResult<()> {
    let storage = Storage::from_config(&config.storage)?;
    let mut tracker = NutritionTracker::open(storage);
    debug!(format = %format, "Dispatching command");

    match command {
        Command::Food { action } => match action {
            FoodCommand::Add {
                name,
                calories_per_gram,
                protein_per_gram,
            } => {
                commands::food::add(
                    &mut tracker,
                    name,
                    calories_per_gram,
                    protein_per_gram,
                    format,
                )?;
            }
            FoodCommand::List => commands::food::list(&tracker, format)?,
        },
        Command::Intake { action } => match action {
            IntakeCommand::Add { food, grams } => {
                commands::intake::add(&mut tracker, food, grams, format)?;
            }
            IntakeCommand::List => commands::intake::list(&tracker, format)?,
            IntakeCommand::Remove { id } => commands::intake::remove(&mut tracker, id, format)?,
            IntakeCommand::Reset => commands::intake::reset(&mut tracker, format)?,
        },
        Command::Summary => commands::intake::summary(&tracker, format)?,
    }

    Ok(())
}
