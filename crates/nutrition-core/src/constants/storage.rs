// ABOUTME: Storage-related constants for slot names and file backend layout
// ABOUTME: Slot names match the JSON documents written by earlier versions of the tracker
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Slot holding the food catalog
pub const FOODS_KEY: &str = "foods";

/// Slot holding today's intake entries
pub const DAILY_INTAKE_KEY: &str = "dailyIntake";

/// Extension of a committed slot file
pub const SLOT_FILE_EXTENSION: &str = "json";

/// Extension of a slot file while it is being written
pub const SLOT_TEMP_EXTENSION: &str = "tmp";

/// Directory name appended to the platform data directory
pub const DEFAULT_DATA_DIR_NAME: &str = "nutrition-tracker";

/// Fallback data directory when the platform has none
pub const FALLBACK_DATA_DIR: &str = "./nutrition-tracker-data";
