// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Lexical path manipulation.
//!
//! All helpers here work on the path text alone; none of them touch the
//! file system or resolve symlinks.

use std::path::{Component, Path, PathBuf};

use pacer_core::{ErrorContext, Result};

/// Joins path segments and lexically normalizes the result.
///
/// `.` segments are removed and `..` segments fold away the preceding
/// segment, never climbing above a root. An absolute segment restarts the
/// path, as with [`PathBuf::push`]. Joining nothing yields `.`.
///
/// # Examples
///
/// ```
/// use pacer_host::join_paths;
/// use std::path::PathBuf;
///
/// assert_eq!(join_paths(["a", "b", "..", "c"]), PathBuf::from("a/c"));
/// assert_eq!(join_paths(["/", "..", "etc"]), PathBuf::from("/etc"));
/// ```
#[must_use]
pub fn join_paths<I, S>(segments: I) -> PathBuf
where
    I: IntoIterator<Item = S>,
    S: AsRef<Path>,
{
    let mut joined = PathBuf::new();
    for segment in segments {
        joined.push(segment.as_ref());
    }
    normalize(&joined)
}

/// Resolves a path to an absolute, lexically normalized form.
///
/// Relative paths are interpreted against the current working directory.
/// Purely lexical: the result is not required to exist and symlinks are
/// not followed.
///
/// # Errors
/// Returns an error when the current working directory cannot be read.
pub fn resolve_path(path: impl AsRef<Path>) -> Result<PathBuf> {
    let path = path.as_ref();
    if path.is_absolute() {
        return Ok(normalize(path));
    }
    let cwd = std::env::current_dir().context("failed to read the current working directory")?;
    Ok(normalize(&cwd.join(path)))
}

/// Returns the parent directory of a path.
///
/// A bare file name (and the empty path) has dirname `.`; a root is its
/// own dirname.
///
/// # Examples
///
/// ```
/// use pacer_host::dirname;
/// use std::path::PathBuf;
///
/// assert_eq!(dirname("/var/log/syslog"), PathBuf::from("/var/log"));
/// assert_eq!(dirname("notes.txt"), PathBuf::from("."));
/// assert_eq!(dirname("/"), PathBuf::from("/"));
/// ```
#[must_use]
pub fn dirname(path: impl AsRef<Path>) -> PathBuf {
    let path = path.as_ref();
    match path.parent() {
        Some(parent) if parent.as_os_str().is_empty() => PathBuf::from("."),
        Some(parent) => parent.to_path_buf(),
        None if path.as_os_str().is_empty() => PathBuf::from("."),
        None => path.to_path_buf(),
    }
}

/// Returns the final extension of a path, without the dot.
///
/// Dotfiles and trailing dots have no extension; only the last extension
/// of a multi-extension name is returned.
///
/// # Examples
///
/// ```
/// use pacer_host::extension;
///
/// assert_eq!(extension("archive.tar.gz").as_deref(), Some("gz"));
/// assert_eq!(extension(".bashrc"), None);
/// assert_eq!(extension("README"), None);
/// ```
#[must_use]
pub fn extension(path: impl AsRef<Path>) -> Option<String> {
    path.as_ref()
        .extension()
        .and_then(|ext| ext.to_str())
        .filter(|ext| !ext.is_empty())
        .map(str::to_owned)
}

fn normalize(path: &Path) -> PathBuf {
    let mut parts: Vec<Component<'_>> = Vec::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => match parts.last() {
                Some(Component::Normal(_)) => {
                    parts.pop();
                }
                // A root absorbs `..`; leading `..`s of a relative path stay.
                Some(Component::RootDir | Component::Prefix(_)) => {}
                _ => parts.push(Component::ParentDir),
            },
            other => parts.push(other),
        }
    }

    let mut out = PathBuf::new();
    for part in &parts {
        out.push(part.as_os_str());
    }
    if out.as_os_str().is_empty() {
        out.push(".");
    }
    out
}
