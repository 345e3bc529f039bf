// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Environment helpers: query strings, cookies, JSON storage, identifiers.
//!
//! Each helper in this crate is self-contained and wraps one environment
//! facility:
//!
//! - **[`query::parse_query_params`]** - Decodes the query parameters of a
//!   URL or bare query string into a map.
//! - **[`cookie::get_cookie`]** - Extracts one value from a `Cookie`-header
//!   style string.
//! - **[`store::JsonStore`]** - A typed JSON key-value store rooted in a
//!   directory, one file per key.
//! - **[`ident::uuid`]** - Random version 4 UUID strings.
//!
//! Parsing helpers never fail; absence is `None` or an empty map. The store
//! reports every failure through [`pacer_core::PacerError`], including
//! malformed JSON on disk.

pub mod cookie;
pub mod ident;
pub mod query;
pub mod store;

pub use cookie::get_cookie;
pub use ident::uuid;
pub use query::parse_query_params;
pub use store::JsonStore;
