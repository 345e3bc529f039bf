// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Fire-and-forget task spawning on the configured runtime.
//!
//! The debouncer's driver task is detached by construction: it owns no
//! join handle and terminates on its own when the last sender to it is
//! dropped. Runtime selection follows the feature precedence documented on
//! [`crate::DefaultClock`] (tokio wins when both runtimes are enabled).

use core::future::Future;

/// Spawn a future to run to completion in the background.
///
/// The spawned task is not joined and must arrange its own shutdown; the
/// caller keeps no handle to it.
#[cfg(feature = "runtime-tokio")]
pub fn spawn_detached<F>(future: F)
where
    F: Future<Output = ()> + Send + 'static,
{
    tokio::spawn(future);
}

/// Spawn a future to run to completion in the background.
///
/// The spawned task is not joined and must arrange its own shutdown; the
/// caller keeps no handle to it.
#[cfg(all(feature = "runtime-smol", not(feature = "runtime-tokio")))]
pub fn spawn_detached<F>(future: F)
where
    F: Future<Output = ()> + Send + 'static,
{
    smol::spawn(future).detach();
}
