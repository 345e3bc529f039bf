// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Async file system wrappers with path context on every error.

use std::io;
use std::path::Path;

use pacer_core::{ErrorContext, PacerError, Result};

/// Reads a file to a string.
///
/// # Errors
/// Returns an error when the file cannot be read or is not valid UTF-8.
/// A missing file reports [`PacerError::is_not_found`].
pub async fn read_file(path: impl AsRef<Path>) -> Result<String> {
    let path = path.as_ref();
    tokio::fs::read_to_string(path)
        .await
        .with_context(|| format!("failed to read file {}", path.display()))
}

/// Reads a file to raw bytes.
///
/// # Errors
/// Returns an error when the file cannot be read.
pub async fn read_file_bytes(path: impl AsRef<Path>) -> Result<Vec<u8>> {
    let path = path.as_ref();
    tokio::fs::read(path)
        .await
        .with_context(|| format!("failed to read file {}", path.display()))
}

/// Writes contents to a file, creating missing parent directories first.
///
/// An existing file is replaced.
///
/// # Errors
/// Returns an error when a parent directory cannot be created or the file
/// cannot be written.
pub async fn write_file(path: impl AsRef<Path>, contents: impl AsRef<[u8]>) -> Result<()> {
    let path = path.as_ref();
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            tokio::fs::create_dir_all(parent)
                .await
                .with_context(|| format!("failed to create parent directory {}", parent.display()))?;
        }
    }
    tokio::fs::write(path, contents)
        .await
        .with_context(|| format!("failed to write file {}", path.display()))
}

/// Lists the entry names of a directory, sorted.
///
/// Names that are not valid UTF-8 are decoded lossily.
///
/// # Errors
/// Returns an error when the directory cannot be listed.
pub async fn list_directory(path: impl AsRef<Path>) -> Result<Vec<String>> {
    let path = path.as_ref();
    let mut entries = tokio::fs::read_dir(path)
        .await
        .with_context(|| format!("failed to list directory {}", path.display()))?;

    let mut names = Vec::new();
    while let Some(entry) = entries
        .next_entry()
        .await
        .with_context(|| format!("failed to list directory {}", path.display()))?
    {
        names.push(entry.file_name().to_string_lossy().into_owned());
    }
    names.sort();
    Ok(names)
}

/// Removes a directory and everything under it.
///
/// Removing a directory that does not exist is a no-op success.
///
/// # Errors
/// Returns an error when the directory exists but cannot be removed.
pub async fn remove_directory(path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    match tokio::fs::remove_dir_all(path).await {
        Ok(()) => Ok(()),
        Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(()),
        Err(err) => Err(PacerError::io_error(
            format!("failed to remove directory {}", path.display()),
            err,
        )),
    }
}
