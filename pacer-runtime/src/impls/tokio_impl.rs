// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use std::time::Duration;

use crate::clock::Clock;

/// Clock backed by `tokio::time`.
///
/// Sleeps are tokio sleeps, so tests running under
/// `tokio::time::pause`/`advance` control this clock's passage of time.
/// Instants are `tokio::time::Instant`, which tracks the paused clock too.
#[derive(Clone, Copy, Debug, Default)]
pub struct TokioClock;

impl Clock for TokioClock {
    type Sleep = tokio::time::Sleep;

    type Instant = tokio::time::Instant;

    fn sleep(&self, duration: Duration) -> Self::Sleep {
        tokio::time::sleep(duration)
    }

    fn now(&self) -> Self::Instant {
        tokio::time::Instant::now()
    }
}
