// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Call-rate limiting with runtime-agnostic timer abstraction.
//!
//! This crate provides the two rate limiters: a trailing-edge [`Debouncer`]
//! that coalesces bursts of calls into one invocation after a quiet period,
//! and a leading-edge [`Throttler`] that invokes immediately and then
//! suppresses calls for a fixed window. Both are driven by the [`Clock`]
//! abstraction from `pacer-runtime`, so they work with any supported async
//! runtime and with virtual time in tests.
//!
//! # Overview
//!
//! - **[`Debouncer`]** - Owns a background driver task; `call` records the
//!   newest arguments and (re)arms a timer, the wrapped function runs once
//!   the delay elapses without further calls.
//! - **[`Throttler`]** - A synchronous gate; `call` invokes the wrapped
//!   function at most once per window and reports suppression through
//!   `Option`.
//! - **[`debounce`] / [`throttle`]** - Free-function shorthands for the
//!   common constructors.
//!
//! # Runtime Support
//!
//! Enable runtime-specific features in your `Cargo.toml`:
//! - `runtime-tokio` (default) - Tokio runtime support
//! - `runtime-smol` - smol runtime support
//!
//! # Example
//!
//! ```rust,no_run
//! use pacer_rate::{debounce, throttle};
//! use std::time::Duration;
//!
//! # async fn example() {
//! // One save per quiet 300ms, no matter how fast edits arrive.
//! let save = debounce(Duration::from_millis(300), |text: String| {
//!     println!("saving {} bytes", text.len());
//! });
//! save.call("draft one".to_owned());
//! save.call("draft two".to_owned());
//!
//! // At most one resize pass per 100ms, extra calls are suppressed.
//! let mut resize = throttle(Duration::from_millis(100), |(w, h): (u32, u32)| w * h);
//! assert_eq!(resize.call((800, 600)), Some(480_000));
//! assert_eq!(resize.call((801, 600)), None);
//! # }
//! ```

#[cfg(any(feature = "runtime-tokio", feature = "runtime-smol"))]
mod debounce;
#[cfg(any(feature = "runtime-tokio", feature = "runtime-smol"))]
mod throttle;

#[cfg(any(feature = "runtime-tokio", feature = "runtime-smol"))]
pub use debounce::{debounce, Debouncer};
#[cfg(any(feature = "runtime-tokio", feature = "runtime-smol"))]
pub use throttle::{throttle, Throttler};

pub use pacer_runtime::Clock;
