// ABOUTME: Environment configuration for storage backend and data directory
// ABOUTME: Environment-only configuration; CLI flags override individual values
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Environment-based configuration management

use crate::errors::{AppError, AppResult};
use nutrition_core::constants::env_config;
use nutrition_core::constants::storage::{DEFAULT_DATA_DIR_NAME, FALLBACK_DATA_DIR};
use serde::{Deserialize, Serialize};
use std::env;
use std::fmt;
use std::path::PathBuf;
use tracing::info;

/// Strongly typed log level configuration
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// Errors only
    Error,
    /// Warnings and errors
    #[default]
    Warn,
    /// Informational messages
    Info,
    /// Debug output
    Debug,
    /// Everything
    Trace,
}

impl LogLevel {
    /// Parse from string with fallback
    #[must_use]
    pub fn from_str_or_default(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "error" => Self::Error,
            "info" => Self::Info,
            "debug" => Self::Debug,
            "trace" => Self::Trace,
            _ => Self::Warn,
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Error => write!(f, "error"),
            Self::Warn => write!(f, "warn"),
            Self::Info => write!(f, "info"),
            Self::Debug => write!(f, "debug"),
            Self::Trace => write!(f, "trace"),
        }
    }
}

/// Which storage backend to persist to
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum StorageBackend {
    /// One JSON file per slot under the data directory
    #[default]
    File,
    /// Process memory only
    Memory,
}

impl StorageBackend {
    /// Parse from string with fallback to `File`
    #[must_use]
    pub fn from_str_or_default(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "memory" | "mem" | "in-memory" => Self::Memory,
            _ => Self::File,
        }
    }
}

impl fmt::Display for StorageBackend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::File => write!(f, "file"),
            Self::Memory => write!(f, "memory"),
        }
    }
}

/// Storage settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Selected backend
    pub backend: StorageBackend,
    /// Directory for the file backend
    pub data_dir: PathBuf,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            backend: StorageBackend::default(),
            data_dir: default_data_dir(),
        }
    }
}

/// Platform data directory for the tracker, or a local fallback
#[must_use]
pub fn default_data_dir() -> PathBuf {
    dirs::data_local_dir().map_or_else(
        || PathBuf::from(FALLBACK_DATA_DIR),
        |dir| dir.join(DEFAULT_DATA_DIR_NAME),
    )
}

/// Top-level tracker configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrackerConfig {
    /// Storage settings
    pub storage: StorageConfig,
}

impl TrackerConfig {
    /// Load configuration from environment variables
    ///
    /// # Errors
    ///
    /// Returns `ConfigInvalid` if `NUTRITION_DATA_DIR` is set but blank
    pub fn from_env() -> AppResult<Self> {
        let backend = env::var(env_config::STORAGE_BACKEND)
            .map(|v| StorageBackend::from_str_or_default(&v))
            .unwrap_or_default();

        let data_dir = match env::var(env_config::DATA_DIR) {
            Ok(dir) if dir.trim().is_empty() => {
                return Err(AppError::config(format!(
                    "{} is set but empty",
                    env_config::DATA_DIR
                )));
            }
            Ok(dir) => PathBuf::from(dir),
            Err(_) => default_data_dir(),
        };

        let config = Self {
            storage: StorageConfig { backend, data_dir },
        };
        config.log_summary();
        Ok(config)
    }

    /// Apply command-line overrides on top of the environment values
    #[must_use]
    pub fn with_overrides(
        mut self,
        data_dir: Option<PathBuf>,
        backend: Option<StorageBackend>,
    ) -> Self {
        if let Some(dir) = data_dir {
            self.storage.data_dir = dir;
        }
        if let Some(backend) = backend {
            self.storage.backend = backend;
        }
        self
    }

    fn log_summary(&self) {
        info!(
            storage.backend = %self.storage.backend,
            storage.data_dir = %self.storage.data_dir.display(),
            "Configuration loaded"
        );
    }
}
