// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Host-system helpers: paths, file I/O, shell execution, crypto, OS info.
//!
//! Each helper wraps one host facility and makes its failures explicit:
//!
//! - **[`paths`]** - Lexical path joining, resolution, dirname, extension.
//! - **[`fs`]** - Async file I/O with path context on every error.
//! - **[`exec`]** - Run a command line through the platform shell and
//!   capture its output.
//! - **[`crypto`]** - AES-256-CBC encryption with an IV-prepended payload,
//!   plus SHA-256 key derivation.
//! - **[`system`]** - OS and network-interface introspection.
//!
//! Fallible helpers return [`pacer_core::Result`]; a command that runs but
//! exits non-zero is data, not an error.

pub mod crypto;
pub mod exec;
pub mod fs;
pub mod paths;
pub mod system;

pub use crypto::{decrypt, derive_key, encrypt};
pub use exec::{exec, ExecOutput};
pub use fs::{list_directory, read_file, read_file_bytes, remove_directory, write_file};
pub use paths::{dirname, extension, join_paths, resolve_path};
pub use system::{network_interfaces, os_info, NetworkInterface, OsInfo};
