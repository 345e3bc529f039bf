// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use std::fmt::Debug;
use std::time::Duration;

use tokio::sync::mpsc;
use tokio::time::sleep;

/// Receives the next item, giving up after `timeout_ms` of (virtual) time.
pub async fn recv_timeout<T>(rx: &mut mpsc::UnboundedReceiver<T>, timeout_ms: u64) -> Option<T> {
    tokio::select! {
        biased;
        item = rx.recv() => item,
        () = sleep(Duration::from_millis(timeout_ms)) => None,
    }
}

/// Asserts that nothing arrives on the channel within `window_ms`.
pub async fn assert_no_recv<T>(rx: &mut mpsc::UnboundedReceiver<T>, window_ms: u64)
where
    T: Debug,
{
    tokio::select! {
        biased;
        item = rx.recv() => {
            if let Some(item) = item {
                panic!("unexpected item received, expected no output: {item:?}");
            }
        }
        () = sleep(Duration::from_millis(window_ms)) => {}
    }
}
