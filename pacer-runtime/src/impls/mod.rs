// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

#[cfg(feature = "runtime-tokio")]
mod tokio_impl;

#[cfg(feature = "runtime-tokio")]
pub use tokio_impl::TokioClock;

#[cfg(feature = "runtime-smol")]
mod smol_impl;

#[cfg(feature = "runtime-smol")]
pub use smol_impl::SmolClock;

/// The clock selected by the enabled runtime feature.
///
/// Tokio wins when several runtime features are enabled at once, matching
/// the feature precedence used for [`crate::spawn_detached`].
#[cfg(feature = "runtime-tokio")]
pub type DefaultClock = TokioClock;

#[cfg(all(feature = "runtime-smol", not(feature = "runtime-tokio")))]
pub type DefaultClock = SmolClock;
