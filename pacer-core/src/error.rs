// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Error types for the pacer helper crates.
//!
//! This module provides the error handling system shared by all pacer
//! helpers. It defines a root [`PacerError`] type with specific variants for
//! different failure modes, allowing library users to handle errors
//! appropriately.
//!
//! # Examples
//!
//! ```
//! use pacer_core::{PacerError, Result};
//!
//! fn check_key(key: &str) -> Result<()> {
//!     if key.is_empty() {
//!         return Err(PacerError::invalid_input("store key must not be empty"));
//!     }
//!     Ok(())
//! }
//! ```

/// Root error type for all pacer helpers
///
/// This enum encompasses all failure conditions the helper families can
/// produce: file system access, JSON storage, encryption, process execution
/// and input validation.
#[derive(Debug, thiserror::Error)]
pub enum PacerError {
    /// A file system operation failed
    ///
    /// The context names the path and operation so callers do not have to
    /// reconstruct it from the source error.
    #[error("I/O error: {context}")]
    Io {
        /// What was being accessed when the failure occurred
        context: String,
        /// The underlying I/O failure
        #[source]
        source: std::io::Error,
    },

    /// JSON serialization or deserialization failed
    ///
    /// Produced by the typed store helpers when a value on disk does not
    /// match the requested type or cannot be encoded.
    #[error("JSON error: {context}")]
    Json {
        /// What was being encoded or decoded
        context: String,
        /// The underlying serde failure
        #[source]
        source: serde_json::Error,
    },

    /// Encryption or decryption failed
    ///
    /// Covers malformed payloads (missing IV, truncated ciphertext) and
    /// padding failures from a wrong key. The cipher itself reports no
    /// detail beyond the padding check, so no source error is carried.
    #[error("Crypto error: {context}")]
    Crypto {
        /// What the cipher rejected
        context: String,
    },

    /// A child process could not be spawned or awaited
    ///
    /// A command that runs but exits non-zero is *not* this error; the exit
    /// status travels in the execution output instead.
    #[error("Command execution error: {context}")]
    Exec {
        /// The command that failed to run
        context: String,
        /// The underlying spawn/wait failure
        #[source]
        source: std::io::Error,
    },

    /// Caller-supplied input was rejected before touching the platform
    #[error("Invalid input: {context}")]
    InvalidInput {
        /// Why the input was rejected
        context: String,
    },
}

impl PacerError {
    /// Create an I/O error with the given context
    pub fn io_error(context: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            context: context.into(),
            source,
        }
    }

    /// Create a JSON error with the given context
    pub fn json_error(context: impl Into<String>, source: serde_json::Error) -> Self {
        Self::Json {
            context: context.into(),
            source,
        }
    }

    /// Create a crypto error with the given context
    pub fn crypto_error(context: impl Into<String>) -> Self {
        Self::Crypto {
            context: context.into(),
        }
    }

    /// Create an execution error with the given context
    pub fn exec_error(context: impl Into<String>, source: std::io::Error) -> Self {
        Self::Exec {
            context: context.into(),
            source,
        }
    }

    /// Create an invalid-input error with the given context
    pub fn invalid_input(context: impl Into<String>) -> Self {
        Self::InvalidInput {
            context: context.into(),
        }
    }

    /// Check whether this error wraps a missing file or directory
    ///
    /// File system helpers map `ENOENT` into [`PacerError::Io`]; callers
    /// that treat a missing path as an expected state can branch on this
    /// instead of digging out the source error.
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            Self::Io { source, .. } | Self::Exec { source, .. }
                if source.kind() == std::io::ErrorKind::NotFound
        )
    }
}

/// Specialized Result type for pacer operations
///
/// This is a type alias for `std::result::Result<T, PacerError>`, providing
/// a convenient shorthand for functions that return pacer errors.
///
/// # Examples
///
/// ```
/// use pacer_core::Result;
///
/// fn lookup() -> Result<String> {
///     Ok("found".to_string())
/// }
/// ```
pub type Result<T> = std::result::Result<T, PacerError>;

/// Helper trait for attaching context while converting into [`PacerError`]
///
/// Implemented for the raw result types the helpers meet at the platform
/// boundary (`std::io`, `serde_json`), so call sites read as a fluent chain
/// instead of repeated `map_err` closures.
pub trait ErrorContext<T> {
    /// Attach context to an error
    ///
    /// # Errors
    /// Returns `Err(PacerError)` if the underlying result is `Err`.
    fn context(self, context: impl Into<String>) -> Result<T>;

    /// Attach context lazily, building the message only on failure
    ///
    /// # Errors
    /// Returns `Err(PacerError)` if the underlying result is `Err`.
    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String;
}

impl<T> ErrorContext<T> for std::result::Result<T, std::io::Error> {
    fn context(self, context: impl Into<String>) -> Result<T> {
        self.map_err(|source| PacerError::io_error(context, source))
    }

    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|source| PacerError::io_error(f(), source))
    }
}

impl<T> ErrorContext<T> for std::result::Result<T, serde_json::Error> {
    fn context(self, context: impl Into<String>) -> Result<T> {
        self.map_err(|source| PacerError::json_error(context, source))
    }

    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|source| PacerError::json_error(f(), source))
    }
}
