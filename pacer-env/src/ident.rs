// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Identifier generation.

use uuid::Uuid;

/// Returns a fresh random (version 4) UUID as a hyphenated lowercase string.
///
/// # Examples
///
/// ```
/// let id = pacer_env::uuid();
/// assert_eq!(id.len(), 36);
/// ```
#[must_use]
pub fn uuid() -> String {
    Uuid::new_v4().to_string()
}
