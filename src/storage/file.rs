// ABOUTME: File-backed key-value storage with one JSON document per slot
// ABOUTME: Writes go to a temp file that is renamed over the slot file
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::{validate_key, StorageProvider};
use crate::errors::{AppError, AppResult};
use nutrition_core::constants::storage::{SLOT_FILE_EXTENSION, SLOT_TEMP_EXTENSION};
use std::fs;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Durable storage rooted at a directory
///
/// Slot `foods` lives at `<root>/foods.json`. The directory is created by
/// [`StorageProvider::health_check`], which `Storage::from_config` runs on
/// every start, and again on any write if it has gone missing. Reads against a
/// missing directory return "no data yet".
#[derive(Debug, Clone)]
pub struct FileStorage {
    root: PathBuf,
}

impl FileStorage {
    /// Create storage rooted at `root` without touching the filesystem
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Root directory
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Path of the committed file for `key`
    ///
    /// # Errors
    ///
    /// Returns an error if the key is invalid
    pub fn slot_path(&self, key: &str) -> AppResult<PathBuf> {
        validate_key(key)?;
        Ok(self
            .root
            .join(key)
            .with_extension(SLOT_FILE_EXTENSION))
    }

    fn temp_path(&self, key: &str) -> PathBuf {
        self.root.join(key).with_extension(SLOT_TEMP_EXTENSION)
    }

    fn storage_error(action: &str, path: &Path, error: std::io::Error) -> AppError {
        AppError::storage(format!("failed to {action} {}: {error}", path.display())).with_source(error)
    }
}

impl StorageProvider for FileStorage {
    fn get_item(&self, key: &str) -> AppResult<Option<String>> {
        let path = self.slot_path(key)?;
        match fs::read_to_string(&path) {
            Ok(contents) => Ok(Some(contents)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(Self::storage_error("read", &path, e)),
        }
    }

    fn set_item(&self, key: &str, value: &str) -> AppResult<()> {
        let path = self.slot_path(key)?;
        let temp_path = self.temp_path(key);

        fs::create_dir_all(&self.root).map_err(|e| Self::storage_error("create", &self.root, e))?;

        let mut file = fs::OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .open(&temp_path)
            .map_err(|e| Self::storage_error("open", &temp_path, e))?;
        file.write_all(value.as_bytes())
            .and_then(|()| file.sync_all())
            .map_err(|e| Self::storage_error("write", &temp_path, e))?;
        drop(file);

        fs::rename(&temp_path, &path).map_err(|e| Self::storage_error("commit", &path, e))?;

        debug!(slot = key, bytes = value.len(), path = %path.display(), "Slot written");
        Ok(())
    }

    fn remove_item(&self, key: &str) -> AppResult<()> {
        let path = self.slot_path(key)?;
        match fs::remove_file(&path) {
            Ok(()) => {
                debug!(slot = key, path = %path.display(), "Slot removed");
                Ok(())
            }
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(Self::storage_error("remove", &path, e)),
        }
    }

    fn health_check(&self) -> AppResult<()> {
        fs::create_dir_all(&self.root).map_err(|e| Self::storage_error("create", &self.root, e))?;

        let metadata =
            fs::metadata(&self.root).map_err(|e| Self::storage_error("inspect", &self.root, e))?;
        if !metadata.is_dir() {
            return Err(AppError::storage(format!(
                "{} is not a directory",
                self.root.display()
            )));
        }
        if metadata.permissions().readonly() {
            return Err(AppError::storage(format!(
                "{} is read-only",
                self.root.display()
            )));
        }
        Ok(())
    }

    fn backend_name(&self) -> &'static str {
        "file"
    }
}
