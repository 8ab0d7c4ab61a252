// ABOUTME: Core data models for the nutrition tracker
// ABOUTME: Re-exports Food, IntakeEntry, and EntryId
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Data models shared by the catalog, intake log, and persistence layer.
//!
//! Field names serialize in camelCase so documents written by earlier
//! versions of the tracker (`caloriesPerGram`, `proteinPerGram`) load as-is.

mod food;
mod intake;

pub use food::Food;
pub use intake::{EntryId, IntakeEntry};
