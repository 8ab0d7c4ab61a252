// ABOUTME: Key-value storage abstraction standing in for browser-local storage
// ABOUTME: Pluggable backend support (in-memory, file) following the provider pattern
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Storage factory for config-driven backend selection
pub mod factory;
/// File-backed storage, one JSON document per slot
pub mod file;
/// In-memory storage for tests and ephemeral sessions
pub mod memory;

pub use factory::Storage;

use crate::errors::{AppError, AppResult};

/// Storage provider trait for pluggable backend implementations
///
/// A provider holds named string slots. Slots are independent: writing one
/// never touches another, and removing a slot is different from writing an
/// empty value to it.
///
/// Implementations are cheap to clone and every clone addresses the same
/// underlying slots, so the catalog and the intake log can each hold a handle.
///
/// # Examples
///
/// ```rust
/// use nutrition_tracker::storage::{memory::InMemoryStorage, StorageProvider};
/// # fn main() -> nutrition_tracker::errors::AppResult<()> {
///
/// let storage = InMemoryStorage::new();
/// storage.set_item("foods", "[]")?;
/// assert_eq!(storage.get_item("foods")?.as_deref(), Some("[]"));
///
/// storage.remove_item("foods")?;
/// assert!(!storage.contains_key("foods")?);
/// # Ok(())
/// # }
/// ```
pub trait StorageProvider: Clone {
    /// Read a slot, `None` when it has never been written or was removed
    ///
    /// # Errors
    ///
    /// Returns an error if the key is invalid or the backend cannot be read
    fn get_item(&self, key: &str) -> AppResult<Option<String>>;

    /// Write a slot, replacing any previous content
    ///
    /// # Errors
    ///
    /// Returns an error if the key is invalid or the write fails
    fn set_item(&self, key: &str, value: &str) -> AppResult<()>;

    /// Remove a slot entirely; removing an absent slot succeeds
    ///
    /// # Errors
    ///
    /// Returns an error if the key is invalid or the removal fails
    fn remove_item(&self, key: &str) -> AppResult<()>;

    /// Check whether a slot is present
    ///
    /// # Errors
    ///
    /// Returns an error if the key is invalid or the backend cannot be read
    fn contains_key(&self, key: &str) -> AppResult<bool> {
        Ok(self.get_item(key)?.is_some())
    }

    /// Verify the backend is usable
    ///
    /// # Errors
    ///
    /// Returns an error if the backend cannot store data
    fn health_check(&self) -> AppResult<()>;

    /// Short backend name for logs
    fn backend_name(&self) -> &'static str;
}

/// Reject keys that are empty or could escape a storage directory
///
/// # Errors
///
/// Returns `InvalidInput` unless the key is non-empty ASCII alphanumerics, `_` or `-`
pub fn validate_key(key: &str) -> AppResult<()> {
    if key.is_empty() {
        return Err(AppError::invalid_input("storage key must not be empty"));
    }
    if !key
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
    {
        return Err(AppError::invalid_input(format!(
            "storage key '{key}' may only contain ASCII letters, digits, '_' or '-'"
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::ErrorCode;

    #[test]
    fn test_validate_key() {
        assert!(validate_key("foods").is_ok());
        assert!(validate_key("dailyIntake").is_ok());
        assert!(validate_key("slot_2-b").is_ok());

        for bad in ["", "../foods", "a/b", "foods.json", "with space"] {
            let err = validate_key(bad).unwrap_err();
            assert_eq!(err.code, ErrorCode::InvalidInput, "key {bad:?}");
        }
    }
}
