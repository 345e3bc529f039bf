// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Typed JSON key-value storage rooted in a directory.
//!
//! [`JsonStore`] keeps one `<key>.json` file per key under its root
//! directory. Values are anything `serde` can (de)serialize. A missing key
//! reads as `Ok(None)`; malformed JSON on disk is an explicit error, never
//! silently discarded.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use pacer_core::{ErrorContext, PacerError, Result};
use serde::de::DeserializeOwned;
use serde::Serialize;

/// A JSON key-value store with one file per key.
///
/// Keys must be plain file names: non-empty, no path separators, not `.`
/// or `..`. The root directory is created when the store is opened.
#[derive(Clone, Debug)]
pub struct JsonStore {
    root: PathBuf,
}

impl JsonStore {
    /// Opens a store under the platform data directory, namespaced by
    /// application name.
    ///
    /// On Linux this is `~/.local/share/<app>`, with the usual platform
    /// equivalents elsewhere.
    ///
    /// # Errors
    /// Returns an error when the platform reports no data directory, the
    /// application name is not a plain file name, or the directory cannot
    /// be created.
    pub fn open_default(app: &str) -> Result<Self> {
        if !is_plain_name(app) {
            return Err(PacerError::invalid_input(format!(
                "application name {app:?} must name a plain directory"
            )));
        }
        let base = dirs::data_dir().ok_or_else(|| {
            PacerError::io_error(
                "platform data directory is not available",
                io::ErrorKind::NotFound.into(),
            )
        })?;
        Self::open(base.join(app))
    }

    /// Opens a store rooted at the given directory, creating it if needed.
    ///
    /// # Errors
    /// Returns an error when the directory cannot be created.
    pub fn open(root: impl Into<PathBuf>) -> Result<Self> {
        let root = root.into();
        fs::create_dir_all(&root)
            .with_context(|| format!("failed to create store directory {}", root.display()))?;
        Ok(Self { root })
    }

    /// Reads and decodes the value stored under `key`.
    ///
    /// A missing key is `Ok(None)`.
    ///
    /// # Errors
    /// Returns an error when the key is invalid, the file cannot be read,
    /// or its content is not valid JSON for `T`.
    pub fn get<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>> {
        let path = self.entry_path(key)?;
        let bytes = match fs::read(&path) {
            Ok(bytes) => bytes,
            Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(err) => {
                return Err(PacerError::io_error(
                    format!("failed to read store entry {}", path.display()),
                    err,
                ));
            }
        };
        let value = serde_json::from_slice(&bytes)
            .with_context(|| format!("store entry {} holds malformed JSON", path.display()))?;
        Ok(Some(value))
    }

    /// Encodes `value` as JSON and stores it under `key`, replacing any
    /// previous value.
    ///
    /// # Errors
    /// Returns an error when the key is invalid, the value cannot be
    /// encoded, or the file cannot be written.
    pub fn set<T: Serialize>(&self, key: &str, value: &T) -> Result<()> {
        let path = self.entry_path(key)?;
        let json = serde_json::to_vec_pretty(value)
            .with_context(|| format!("failed to encode value for store key {key:?}"))?;
        fs::write(&path, json)
            .with_context(|| format!("failed to write store entry {}", path.display()))
    }

    /// Removes the value stored under `key`.
    ///
    /// Returns whether the key existed.
    ///
    /// # Errors
    /// Returns an error when the key is invalid or the file cannot be
    /// removed for a reason other than not existing.
    pub fn remove(&self, key: &str) -> Result<bool> {
        let path = self.entry_path(key)?;
        match fs::remove_file(&path) {
            Ok(()) => Ok(true),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(false),
            Err(err) => Err(PacerError::io_error(
                format!("failed to remove store entry {}", path.display()),
                err,
            )),
        }
    }

    /// Lists all stored keys, sorted.
    ///
    /// Files under the root that are not `.json`, and names that are not
    /// valid UTF-8, are ignored.
    ///
    /// # Errors
    /// Returns an error when the root directory cannot be listed.
    pub fn keys(&self) -> Result<Vec<String>> {
        let entries = fs::read_dir(&self.root)
            .with_context(|| format!("failed to list store directory {}", self.root.display()))?;

        let mut keys = Vec::new();
        for entry in entries {
            let entry = entry.with_context(|| {
                format!("failed to list store directory {}", self.root.display())
            })?;
            let path = entry.path();
            if path.extension().is_some_and(|ext| ext == "json") {
                if let Some(stem) = path.file_stem().and_then(|stem| stem.to_str()) {
                    keys.push(stem.to_owned());
                }
            }
        }
        keys.sort();
        Ok(keys)
    }

    /// Removes every stored key.
    ///
    /// Files under the root that are not store entries are left alone.
    ///
    /// # Errors
    /// Returns an error when listing or removal fails.
    pub fn clear(&self) -> Result<()> {
        for key in self.keys()? {
            self.remove(&key)?;
        }
        Ok(())
    }

    /// The directory this store keeps its entries in.
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    fn entry_path(&self, key: &str) -> Result<PathBuf> {
        if !is_plain_name(key) {
            return Err(PacerError::invalid_input(format!(
                "store key {key:?} must name a plain file"
            )));
        }
        Ok(self.root.join(format!("{key}.json")))
    }
}

fn is_plain_name(name: &str) -> bool {
    !name.is_empty() && name != "." && name != ".." && !name.contains(['/', '\\', '\0'])
}
