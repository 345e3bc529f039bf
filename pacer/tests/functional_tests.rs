// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use pacer::prelude::*;
use pacer_test_utils::{assert_no_recv, recv_timeout};
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::time::{advance, pause};

#[tokio::test]
async fn test_debounce_through_facade() -> anyhow::Result<()> {
    // Arrange
    pause();
    let (result_tx, mut result_rx) = mpsc::unbounded_channel();
    let search = debounce(Duration::from_millis(300), move |term: String| {
        let _ = result_tx.send(term);
    });

    // Act
    search.call("r".to_owned());
    search.call("ru".to_owned());
    search.call("rust".to_owned());

    // Assert
    assert_eq!(recv_timeout(&mut result_rx, 1000).await.as_deref(), Some("rust"));
    assert_no_recv(&mut result_rx, 1000).await;
    Ok(())
}

#[tokio::test]
async fn test_throttle_through_facade() -> anyhow::Result<()> {
    // Arrange
    pause();
    let mut on_scroll = throttle(Duration::from_millis(100), |offset: u32| offset * 2);

    // Act & Assert
    assert_eq!(on_scroll.call(10), Some(20));
    assert_eq!(on_scroll.call(11), None);

    advance(Duration::from_millis(100)).await;
    assert_eq!(on_scroll.call(12), Some(24));
    Ok(())
}

#[tokio::test]
async fn test_error_plumbing_through_facade() -> anyhow::Result<()> {
    // Arrange
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("absent.txt");

    // Act
    let err: PacerError = pacer::read_file(&path).await.unwrap_err();

    // Assert
    assert!(err.is_not_found());
    Ok(())
}

#[tokio::test]
async fn test_rate_limiter_state_is_inspectable() -> anyhow::Result<()> {
    // Arrange
    let debouncer = debounce(Duration::from_millis(250), |_: u32| {});
    let throttler = throttle(Duration::from_millis(100), |_: u32| {});

    // Act & Assert
    assert_eq!(debouncer.delay(), Duration::from_millis(250));
    assert_eq!(throttler.limit(), Duration::from_millis(100));
    assert!(format!("{debouncer:?}").contains("Debouncer"));
    assert!(format!("{throttler:?}").contains("Throttler"));
    Ok(())
}
