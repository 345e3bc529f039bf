// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Test utilities for the pacer workspace.
//!
//! This crate provides helper types and assertion functions for testing
//! rate limiters and other time-driven code. It is designed for use in
//! development and testing only, not for production code.
//!
//! # Key Types
//!
//! ## `CallLog<T>`
//!
//! A thread-safe record of invocations. Clones share the same log, so a
//! clone can be moved into the function under test while the test keeps
//! inspecting it:
//!
//! ```rust
//! use pacer_test_utils::CallLog;
//!
//! let log = CallLog::new();
//! let sink = log.clone();
//! let func = move |value: i32| sink.push(value);
//!
//! func(1);
//! func(2);
//! assert_eq!(log.snapshot(), vec![1, 2]);
//! ```
//!
//! ## Assertion Helpers
//!
//! [`recv_timeout`] and [`assert_no_recv`] observe an unbounded channel
//! under a virtual-time budget. Under `tokio::time::pause` the budget is
//! consumed instantly, so a generous window costs nothing in wall time.

#![allow(clippy::multiple_crate_versions, clippy::doc_markdown)]

pub mod call_log;
pub mod helpers;

pub use call_log::CallLog;
pub use helpers::{assert_no_recv, recv_timeout};
