// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Leading-edge throttle for repeated calls.
//!
//! A [`Throttler`] invokes the wrapped function at most once per time
//! window. The first call of a window invokes immediately; further calls
//! within `limit` of the last invocation are suppressed and report `None`.
//!
//! Semantics:
//! - **Leading edge**: the first call always invokes, with no initial delay.
//! - **Window from last invocation**: the window is measured from the last
//!   call that actually invoked, not from suppressed attempts. Suppressed
//!   calls never extend the window.
//! - **No trailing call**: suppressed arguments are discarded, nothing runs
//!   when the window later expires.
//! - **Synchronous**: the gate is a timestamp comparison; no task and no
//!   timer is armed.

use std::fmt;
use std::time::Duration;

use pacer_runtime::{Clock, DefaultClock};

/// Throttles calls to a wrapped function.
///
/// [`call`](Throttler::call) takes `&mut self`: the throttler is a
/// synchronous gate meant to be owned by one caller, or shared behind a
/// lock. The return value distinguishes an invocation (`Some` with the
/// function's result) from a suppressed call (`None`).
pub struct Throttler<F, C = DefaultClock>
where
    C: Clock,
{
    func: F,
    limit: Duration,
    clock: C,
    last_invoked: Option<C::Instant>,
}

impl<F> Throttler<F, DefaultClock> {
    /// Creates a throttler with the runtime's default clock.
    ///
    /// A `limit` of zero disables suppression; every call invokes.
    pub fn new(limit: Duration, func: F) -> Self {
        Self::with_clock(limit, func, DefaultClock::default())
    }
}

impl<F, C> Throttler<F, C>
where
    C: Clock,
{
    /// Creates a throttler reading time from the given clock.
    pub fn with_clock(limit: Duration, func: F, clock: C) -> Self {
        Self {
            func,
            limit,
            clock,
            last_invoked: None,
        }
    }

    /// Invokes the wrapped function if the window is open.
    ///
    /// Returns `Some` with the function's result when it ran, `None` when
    /// the call was suppressed. The invocation timestamp is recorded before
    /// the function runs, so a panicking function still closes the window.
    pub fn call<A, R>(&mut self, args: A) -> Option<R>
    where
        F: FnMut(A) -> R,
    {
        let now = self.clock.now();
        if let Some(last) = self.last_invoked {
            if now - last < self.limit {
                return None;
            }
        }
        self.last_invoked = Some(now);
        Some((self.func)(args))
    }

    /// The configured suppression window.
    #[must_use]
    pub fn limit(&self) -> Duration {
        self.limit
    }
}

impl<F, C> fmt::Debug for Throttler<F, C>
where
    C: Clock,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Throttler")
            .field("limit", &self.limit)
            .field("last_invoked", &self.last_invoked)
            .finish_non_exhaustive()
    }
}

/// Creates a [`Throttler`] with the runtime's default clock.
///
/// Shorthand for [`Throttler::new`].
pub fn throttle<F>(limit: Duration, func: F) -> Throttler<F> {
    Throttler::new(limit, func)
}
