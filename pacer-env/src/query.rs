// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Query-string parsing.

use std::collections::HashMap;

/// Parses query parameters from a full URL or a bare query string.
///
/// Accepts `https://host/path?a=1&b=2`, `?a=1&b=2` or `a=1&b=2` alike.
/// Keys and values are percent-decoded and `+` decodes to a space. When a
/// key repeats, the last occurrence wins. A fragment (`#...`) is ignored.
///
/// Parsing never fails: empty input, or a URL without a query, yields an
/// empty map; a pair without `=` becomes a key with an empty value.
///
/// # Examples
///
/// ```
/// use pacer_env::parse_query_params;
///
/// let params = parse_query_params("https://example.com/search?q=rust+lang&page=2");
/// assert_eq!(params.get("q").map(String::as_str), Some("rust lang"));
/// assert_eq!(params.get("page").map(String::as_str), Some("2"));
/// ```
#[must_use]
pub fn parse_query_params(input: &str) -> HashMap<String, String> {
    let query = match input.split_once('?') {
        Some((_, after)) => after,
        // A URL without a query has no parameters; anything else is
        // treated as a bare query string.
        None if input.contains("://") => "",
        None => input,
    };
    let query = query.split_once('#').map_or(query, |(before, _)| before);

    form_urlencoded::parse(query.as_bytes())
        .map(|(key, value)| (key.into_owned(), value.into_owned()))
        .collect()
}
