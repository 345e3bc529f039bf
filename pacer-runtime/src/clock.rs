// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use core::future::Future;
use core::ops::Sub;
use core::time::Duration;
use std::fmt::Debug;

/// Runtime-agnostic time source.
///
/// A `Clock` supplies the two collaborators the rate limiters consume: a
/// "sleep for this long" future (debounce) and a "what time is it" instant
/// (throttle). Implementations are cheap unit structs; cloning one clones
/// nothing but the type.
pub trait Clock: Clone + Default + Send + Sync + Debug + 'static {
    /// The future returned by [`Clock::sleep`]. Resolves once the duration
    /// has elapsed on this clock.
    type Sleep: Future<Output = ()> + Send;

    /// An opaque point in time on this clock. Subtracting an earlier
    /// instant from a later one yields the elapsed [`Duration`].
    type Instant: Copy
        + Debug
        + Ord
        + Send
        + Sync
        + Sub<Self::Instant, Output = Duration>;

    /// Creates a future that sleeps for the specified duration.
    ///
    /// A zero duration must resolve on the next poll, not never.
    fn sleep(&self, duration: Duration) -> Self::Sleep;

    /// Returns the current instant.
    fn now(&self) -> Self::Instant;
}
