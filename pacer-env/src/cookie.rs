// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Cookie-string parsing.

use percent_encoding::percent_decode_str;

/// Extracts the value of `name` from a `Cookie`-header style string.
///
/// The input has the shape `name1=value1; name2=value2; ...`. Whitespace
/// around names and values is trimmed and the value is percent-decoded.
/// The first entry with a matching name wins.
///
/// Returns `None` when the name is absent, the matching value is not valid
/// UTF-8 after decoding, or `name` is empty. Entries without `=` are
/// skipped.
///
/// # Examples
///
/// ```
/// use pacer_env::get_cookie;
///
/// let header = "session=abc123; theme=dark; greeting=hello%20there";
/// assert_eq!(get_cookie(header, "theme").as_deref(), Some("dark"));
/// assert_eq!(get_cookie(header, "greeting").as_deref(), Some("hello there"));
/// assert_eq!(get_cookie(header, "missing"), None);
/// ```
#[must_use]
pub fn get_cookie(header: &str, name: &str) -> Option<String> {
    if name.is_empty() {
        return None;
    }

    for entry in header.split(';') {
        let Some((key, value)) = entry.split_once('=') else {
            continue;
        };
        if key.trim() == name {
            return percent_decode_str(value.trim())
                .decode_utf8()
                .ok()
                .map(|decoded| decoded.into_owned());
        }
    }

    None
}
