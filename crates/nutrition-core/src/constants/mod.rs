// ABOUTME: Application constants organized by domain
// ABOUTME: Storage slot names, environment variable names, and defaults
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Storage slot names and file layout
pub mod storage;

/// Environment variable names read by configuration and logging
pub mod env_config {
    /// Storage backend selector (`file` or `memory`)
    pub const STORAGE_BACKEND: &str = "NUTRITION_STORAGE_BACKEND";
    /// Directory holding the file backend's slots
    pub const DATA_DIR: &str = "NUTRITION_DATA_DIR";
    /// Log filter directive
    pub const RUST_LOG: &str = "RUST_LOG";
    /// Log output format (`json`, `pretty`, `compact`)
    pub const LOG_FORMAT: &str = "LOG_FORMAT";
    /// Include source file and line in log lines when set
    pub const LOG_INCLUDE_LOCATION: &str = "LOG_INCLUDE_LOCATION";
}

/// Service identity used in structured logs
pub mod service_names {
    /// Service name reported at startup
    pub const NUTRITION_TRACKER: &str = "nutrition-tracker";
}
