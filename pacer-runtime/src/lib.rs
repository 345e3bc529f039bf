// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Platform capabilities consumed by the pacer helpers.
//!
//! The rate limiters need two things from their host: a way to sleep for a
//! duration and a way to read the current instant. Both are captured by the
//! [`Clock`] trait so they are injected at construction instead of reached
//! for ad hoc at each call site. [`spawn_detached`] provides the matching
//! fire-and-forget task spawn for the active runtime.
//!
//! # Runtime support
//!
//! - `runtime-tokio` (default) - [`TokioClock`], driven by `tokio::time`
//!   (and therefore by `tokio::time::pause`/`advance` under test)
//! - `runtime-smol` - [`SmolClock`], driven by `async-io`
//!
//! [`DefaultClock`] aliases the clock selected by the enabled feature.

pub mod clock;
pub mod impls;
pub mod spawn;

pub use clock::Clock;

#[cfg(any(feature = "runtime-tokio", feature = "runtime-smol"))]
pub use spawn::spawn_detached;

#[cfg(feature = "runtime-tokio")]
pub use impls::TokioClock;

#[cfg(feature = "runtime-smol")]
pub use impls::SmolClock;

#[cfg(any(feature = "runtime-tokio", feature = "runtime-smol"))]
pub use impls::DefaultClock;
