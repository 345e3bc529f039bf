// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

#![allow(clippy::multiple_crate_versions, clippy::doc_markdown)]
//! Shared foundation for the pacer helper crates.
//!
//! Every pacer crate reports failures through the [`PacerError`] type defined
//! here. The helpers deliberately never swallow an error: anything that can
//! fail returns [`Result`], and absences that are *not* failures (a missing
//! cookie, a suppressed throttled call) are expressed as `Option` instead.

pub mod error;

pub use self::error::{ErrorContext, PacerError, Result};
