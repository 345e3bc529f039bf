// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! End-to-end scenario: an editor autosave loop.
//!
//! Keystrokes arrive much faster than saves should happen. A debouncer
//! coalesces them into one store write per quiet period; a throttler keeps
//! a status probe from running more than once per window.

use pacer::prelude::*;
use pacer::JsonStore;
use pacer_test_utils::{recv_timeout, CallLog};
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::time::{advance, pause};

#[tokio::test]
async fn test_autosave_writes_only_the_last_draft() -> anyhow::Result<()> {
    // Arrange
    pause();
    let dir = tempfile::tempdir()?;
    let store = JsonStore::open(dir.path())?;
    let sink = store.clone();
    let (saved_tx, mut saved_rx) = mpsc::unbounded_channel();

    let autosave =
        Debouncer::with_logged_errors(Duration::from_millis(300), move |draft: String| {
            sink.set("draft", &draft)?;
            let _ = saved_tx.send(());
            Ok::<(), PacerError>(())
        });

    // Act: three keystrokes inside one quiet period
    autosave.call("Dear diary".to_owned());
    advance(Duration::from_millis(50)).await;
    autosave.call("Dear diary, today".to_owned());
    advance(Duration::from_millis(50)).await;
    autosave.call("Dear diary, today I learned Rust.".to_owned());

    // Assert: exactly one write, with the final text
    recv_timeout(&mut saved_rx, 1000)
        .await
        .expect("expected one autosave");
    assert_eq!(
        store.get::<String>("draft")?,
        Some("Dear diary, today I learned Rust.".to_owned())
    );
    assert_eq!(store.keys()?, vec!["draft"]);
    Ok(())
}

#[tokio::test]
async fn test_status_probe_is_throttled() -> anyhow::Result<()> {
    // Arrange
    pause();
    let probes = CallLog::new();
    let log = probes.clone();
    let mut probe = throttle(Duration::from_millis(100), move |at: u64| log.push(at));

    // Act: every tick asks for a probe, only one per window runs
    for tick in 0..10u64 {
        probe.call(tick);
        advance(Duration::from_millis(25)).await;
    }

    // Assert: only the ticks at t=0, t=100 and t=200 made it through
    assert_eq!(probes.snapshot(), vec![0, 4, 8]);
    Ok(())
}
