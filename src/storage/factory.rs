// ABOUTME: Storage factory for configuration-based backend selection
// ABOUTME: Unified Storage handle delegating to the in-memory or file backend
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::{file::FileStorage, memory::InMemoryStorage, StorageProvider};
use crate::config::environment::{StorageBackend, StorageConfig};
use crate::errors::AppResult;
use tracing::{info, warn};

/// Unified storage interface
#[derive(Debug, Clone)]
pub enum Storage {
    /// Slots held in process memory, lost on exit
    Memory(InMemoryStorage),
    /// Slots held as files under a data directory
    File(FileStorage),
}

impl Storage {
    /// Create the backend described by `config`
    ///
    /// # Errors
    ///
    /// Returns an error if the backend fails its health check
    pub fn from_config(config: &StorageConfig) -> AppResult<Self> {
        let storage = match config.backend {
            StorageBackend::Memory => {
                warn!("Using in-memory storage; nothing will be kept after exit");
                Self::Memory(InMemoryStorage::new())
            }
            StorageBackend::File => {
                info!(data_dir = %config.data_dir.display(), "Initializing file storage");
                Self::File(FileStorage::new(config.data_dir.clone()))
            }
        };
        storage.health_check()?;
        Ok(storage)
    }
}

impl StorageProvider for Storage {
    fn get_item(&self, key: &str) -> AppResult<Option<String>> {
        match self {
            Self::Memory(inner) => inner.get_item(key),
            Self::File(inner) => inner.get_item(key),
        }
    }

    fn set_item(&self, key: &str, value: &str) -> AppResult<()> {
        match self {
            Self::Memory(inner) => inner.set_item(key, value),
            Self::File(inner) => inner.set_item(key, value),
        }
    }

    fn remove_item(&self, key: &str) -> AppResult<()> {
        match self {
            Self::Memory(inner) => inner.remove_item(key),
            Self::File(inner) => inner.remove_item(key),
        }
    }

    fn health_check(&self) -> AppResult<()> {
        match self {
            Self::Memory(inner) => inner.health_check(),
            Self::File(inner) => inner.health_check(),
        }
    }

    fn backend_name(&self) -> &'static str {
        match self {
            Self::Memory(inner) => inner.backend_name(),
            Self::File(inner) => inner.backend_name(),
        }
    }
}
