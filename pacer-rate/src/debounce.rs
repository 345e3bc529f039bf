// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Trailing-edge debounce for repeated calls.
//!
//! A [`Debouncer`] coalesces bursts of calls into a single invocation of the
//! wrapped function. Every call records the newest arguments and restarts the
//! delay timer; the function runs once the delay elapses without a further
//! call, with the arguments of the last call.
//!
//! Semantics:
//! - **Trailing edge**: the first call never invokes immediately; the
//!   invocation happens `delay` after the *last* call of a burst.
//! - **Latest arguments win**: a call made before the pending invocation has
//!   run replaces it, even when the timer has already expired but the driver
//!   has not fired yet.
//! - **At most one timer**: there is never more than one pending invocation.
//! - **Drop discards**: dropping the `Debouncer` cancels a pending
//!   invocation without running it.

use std::convert::Infallible;
use std::fmt::{self, Display};
use std::future::Future;
use std::pin::Pin;
use std::task::{Context, Poll};
use std::time::Duration;

use futures::Stream;
use pacer_runtime::{spawn_detached, Clock, DefaultClock};
use pin_project::pin_project;
use tokio::sync::mpsc;
use tokio_stream::wrappers::UnboundedReceiverStream;

/// Debounces calls to a wrapped function.
///
/// Construct with [`Debouncer::new`] (infallible function),
/// [`Debouncer::with_error_handler`] (fallible function, explicit error
/// sink) or [`Debouncer::with_logged_errors`] (fallible function, errors
/// logged via `tracing`). All constructors spawn a driver task on the
/// current runtime, so they must be called from within one.
///
/// [`call`](Debouncer::call) hands the arguments to the driver and returns
/// immediately; it never blocks and never panics.
pub struct Debouncer<A> {
    calls: mpsc::UnboundedSender<A>,
    delay: Duration,
}

impl<A> Debouncer<A>
where
    A: Send + 'static,
{
    /// Creates a debouncer around an infallible function.
    ///
    /// `func` runs once per burst of calls, `delay` after the last call,
    /// with the arguments of that last call. A `delay` of zero still defers
    /// the invocation to the driver task; it never runs inside `call`.
    pub fn new<F>(delay: Duration, mut func: F) -> Self
    where
        F: FnMut(A) + Send + 'static,
    {
        Self::with_error_handler(
            delay,
            move |args| {
                func(args);
                Ok::<(), Infallible>(())
            },
            |err| match err {},
        )
    }

    /// Creates a debouncer around a fallible function, logging errors.
    ///
    /// Errors returned by `func` are reported with `tracing::error!` and do
    /// not stop the debouncer; later calls keep being delivered.
    pub fn with_logged_errors<F, E>(delay: Duration, func: F) -> Self
    where
        F: FnMut(A) -> Result<(), E> + Send + 'static,
        E: Display + Send + 'static,
    {
        Self::with_error_handler(delay, func, |err| {
            tracing::error!(error = %err, "debounced invocation failed");
        })
    }

    /// Creates a debouncer around a fallible function with an error sink.
    ///
    /// When `func` returns `Err`, the error is handed to `on_error` on the
    /// driver task. The debouncer stays usable afterwards.
    pub fn with_error_handler<F, E, S>(delay: Duration, func: F, on_error: S) -> Self
    where
        F: FnMut(A) -> Result<(), E> + Send + 'static,
        E: Send + 'static,
        S: FnMut(E) + Send + 'static,
    {
        let (calls, receiver) = mpsc::unbounded_channel();
        spawn_detached(DebounceDriver {
            calls: UnboundedReceiverStream::new(receiver),
            delay,
            clock: DefaultClock::default(),
            sleep: None,
            pending: None,
            func,
            on_error,
        });
        Self { calls, delay }
    }

    /// Records a call with the given arguments and restarts the delay timer.
    ///
    /// Returns immediately. If the driver task is gone (the runtime shut
    /// down), the call is dropped with a warning instead of panicking.
    pub fn call(&self, args: A) {
        if self.calls.send(args).is_err() {
            tracing::warn!("debounce driver is gone, call dropped");
        }
    }

    /// The configured quiet period.
    #[must_use]
    pub fn delay(&self) -> Duration {
        self.delay
    }
}

impl<A> fmt::Debug for Debouncer<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Debouncer")
            .field("delay", &self.delay)
            .finish_non_exhaustive()
    }
}

/// Creates a [`Debouncer`] around an infallible function.
///
/// Shorthand for [`Debouncer::new`].
pub fn debounce<A, F>(delay: Duration, func: F) -> Debouncer<A>
where
    A: Send + 'static,
    F: FnMut(A) + Send + 'static,
{
    Debouncer::new(delay, func)
}

#[pin_project]
struct DebounceDriver<A, C, F, S>
where
    C: Clock,
{
    #[pin]
    calls: UnboundedReceiverStream<A>,
    delay: Duration,
    clock: C,
    #[pin]
    sleep: Option<C::Sleep>,
    pending: Option<A>,
    func: F,
    on_error: S,
}

impl<A, C, F, S, E> Future for DebounceDriver<A, C, F, S>
where
    C: Clock,
    F: FnMut(A) -> Result<(), E>,
    S: FnMut(E),
{
    type Output = ();

    fn poll(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<()> {
        let mut this = self.project();

        loop {
            // Drain calls before consulting the timer: a call that arrived
            // before the pending invocation ran supersedes it, even when the
            // timer already expired.
            match this.calls.as_mut().poll_next(cx) {
                Poll::Ready(Some(args)) => {
                    *this.pending = Some(args);
                    this.sleep.set(Some(this.clock.sleep(*this.delay)));
                    continue;
                }
                Poll::Ready(None) => {
                    // All handles dropped; the pending invocation is discarded.
                    return Poll::Ready(());
                }
                Poll::Pending => {}
            }

            if this.pending.is_some() {
                if let Some(sleep) = this.sleep.as_mut().as_pin_mut() {
                    match sleep.poll(cx) {
                        Poll::Ready(()) => {
                            this.sleep.set(None);
                            if let Some(args) = this.pending.take() {
                                if let Err(err) = (this.func)(args) {
                                    (this.on_error)(err);
                                }
                            }
                            continue;
                        }
                        Poll::Pending => {}
                    }
                }
            }

            return Poll::Pending;
        }
    }
}
