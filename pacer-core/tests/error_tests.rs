// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use pacer_core::{ErrorContext, PacerError, Result};
use std::io;

#[test]
fn test_error_display() {
    let err = PacerError::invalid_input("store key must not be empty");
    assert_eq!(
        err.to_string(),
        "Invalid input: store key must not be empty"
    );
}

#[test]
fn test_error_constructors() {
    let err = PacerError::io_error("reading config.json", io::Error::other("boom"));
    assert!(matches!(err, PacerError::Io { .. }));

    let err = PacerError::crypto_error("payload shorter than the IV");
    assert!(matches!(err, PacerError::Crypto { .. }));
}

#[test]
fn test_io_error_preserves_source() {
    let source = io::Error::new(io::ErrorKind::PermissionDenied, "denied");
    let err = PacerError::io_error("writing /etc/hosts", source);

    assert!(err.to_string().contains("writing /etc/hosts"));
    let source = std::error::Error::source(&err).expect("io variant carries a source");
    assert!(source.to_string().contains("denied"));
}

#[test]
fn test_is_not_found() {
    let missing = PacerError::io_error(
        "reading gone.txt",
        io::Error::new(io::ErrorKind::NotFound, "no such file"),
    );
    assert!(missing.is_not_found());

    let denied = PacerError::io_error(
        "reading gone.txt",
        io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
    );
    assert!(!denied.is_not_found());

    assert!(!PacerError::invalid_input("nope").is_not_found());
}

#[test]
fn test_io_result_context() {
    let result: std::result::Result<(), io::Error> = Err(io::Error::other("disk on fire"));

    let err = result.context("flushing store").unwrap_err();
    assert!(matches!(err, PacerError::Io { .. }));
    assert!(err.to_string().contains("flushing store"));
}

#[test]
fn test_json_result_context() {
    let bad: std::result::Result<u32, serde_json::Error> = serde_json::from_str("not json");

    let err = bad
        .with_context(|| format!("decoding key {:?}", "retries"))
        .unwrap_err();
    assert!(matches!(err, PacerError::Json { .. }));
    assert!(err.to_string().contains("decoding key \"retries\""));
}

#[test]
fn test_context_passes_ok_through() {
    let result: std::result::Result<i32, io::Error> = Ok(42);
    let value: Result<i32> = result.context("never used");
    assert_eq!(value.unwrap(), 42);
}
