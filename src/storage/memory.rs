// ABOUTME: In-memory key-value storage shared between clones
// ABOUTME: Used by tests and by the `memory` backend for throwaway sessions
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::{validate_key, StorageProvider};
use crate::errors::{AppError, AppResult};
use std::collections::HashMap;
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

/// In-memory storage
///
/// Uses `Arc<RwLock<HashMap>>` so every clone sees the same slots. Tests keep
/// a clone to inspect what the tracker wrote.
#[derive(Debug, Clone, Default)]
pub struct InMemoryStorage {
    store: Arc<RwLock<HashMap<String, String>>>,
}

impl InMemoryStorage {
    /// Create an empty store
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-populated with slots
    pub fn with_items<K, V>(items: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        let map = items
            .into_iter()
            .map(|(k, v)| (k.into(), v.into()))
            .collect();
        Self {
            store: Arc::new(RwLock::new(map)),
        }
    }

    /// Number of slots currently present
    ///
    /// # Errors
    ///
    /// Returns an error if the lock is poisoned
    pub fn len(&self) -> AppResult<usize> {
        Ok(self.read()?.len())
    }

    /// Whether no slot is present
    ///
    /// # Errors
    ///
    /// Returns an error if the lock is poisoned
    pub fn is_empty(&self) -> AppResult<bool> {
        Ok(self.read()?.is_empty())
    }

    fn read(&self) -> AppResult<RwLockReadGuard<'_, HashMap<String, String>>> {
        self.store
            .read()
            .map_err(|_| AppError::internal("in-memory storage lock poisoned"))
    }

    fn write(&self) -> AppResult<RwLockWriteGuard<'_, HashMap<String, String>>> {
        self.store
            .write()
            .map_err(|_| AppError::internal("in-memory storage lock poisoned"))
    }
}

impl StorageProvider for InMemoryStorage {
    fn get_item(&self, key: &str) -> AppResult<Option<String>> {
        validate_key(key)?;
        Ok(self.read()?.get(key).cloned())
    }

    fn set_item(&self, key: &str, value: &str) -> AppResult<()> {
        validate_key(key)?;
        self.write()?.insert(key.to_owned(), value.to_owned());
        Ok(())
    }

    fn remove_item(&self, key: &str) -> AppResult<()> {
        validate_key(key)?;
        self.write()?.remove(key);
        Ok(())
    }

    fn health_check(&self) -> AppResult<()> {
        self.read().map(|_| ())
    }

    fn backend_name(&self) -> &'static str {
        "memory"
    }
}
