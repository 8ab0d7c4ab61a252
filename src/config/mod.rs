// ABOUTME: Configuration management module for the nutrition tracker
// ABOUTME: Storage backend selection, data directory, and log level types
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Environment-driven configuration
pub mod environment;

pub use environment::{LogLevel, StorageBackend, StorageConfig, TrackerConfig};
