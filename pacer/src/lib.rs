// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! # Pacer
//!
//! Call-rate limiting and host utility helpers for async Rust.
//!
//! ## Overview
//!
//! The flagship pieces are the two rate limiters:
//!
//! - [`Debouncer`] - trailing-edge: coalesces a burst of calls into one
//!   invocation after a quiet period, keeping the latest arguments.
//! - [`Throttler`] - leading-edge: invokes immediately, then suppresses
//!   calls for a fixed window, reporting suppression through `Option`.
//!
//! Around them sit small, independent helper families: query-string and
//! cookie parsing, a typed JSON key-value store, UUIDs, lexical path
//! helpers, async file I/O, shell execution, AES-256-CBC wrappers, and OS
//! introspection. Every fallible helper returns [`Result`]; nothing is
//! swallowed.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use pacer::prelude::*;
//! use std::time::Duration;
//!
//! #[tokio::main]
//! async fn main() {
//!     // One search per quiet 300ms while the user types.
//!     let search = debounce(Duration::from_millis(300), |term: String| {
//!         println!("searching for {term}");
//!     });
//!     search.call("r".to_owned());
//!     search.call("ru".to_owned());
//!     search.call("rust".to_owned());
//!
//!     // At most one scroll handler run per 100ms.
//!     let mut on_scroll = throttle(Duration::from_millis(100), |offset: u32| {
//!         println!("rendering at {offset}");
//!     });
//!     on_scroll.call(0);
//! }
//! ```
//!
//! ## Runtime Support
//!
//! The timers behind [`Debouncer`] run on the active async runtime,
//! selected by feature: `runtime-tokio` (default) or `runtime-smol`.

// Re-export the error plumbing
pub use pacer_core::{ErrorContext, PacerError, Result};

// Re-export the rate limiters
#[cfg(any(feature = "runtime-tokio", feature = "runtime-smol"))]
pub use pacer_rate::{debounce, throttle, Debouncer, Throttler};

// Re-export the injected platform capability
pub use pacer_runtime::Clock;

// Re-export the environment helpers
pub use pacer_env::{get_cookie, parse_query_params, uuid, JsonStore};

// Re-export the host-system helpers
pub use pacer_host::{
    decrypt, derive_key, dirname, encrypt, exec, extension, join_paths, list_directory,
    network_interfaces, os_info, read_file, read_file_bytes, remove_directory, resolve_path,
    write_file, ExecOutput, NetworkInterface, OsInfo,
};

/// Prelude module for convenient imports
pub mod prelude {
    pub use pacer_core::{ErrorContext, PacerError, Result};
    #[cfg(any(feature = "runtime-tokio", feature = "runtime-smol"))]
    pub use pacer_rate::{debounce, throttle, Debouncer, Throttler};
    pub use pacer_runtime::Clock;
}
