// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! HTML escaping for text that lands inside markup.

/// Escape `&`, `<`, `>`, `"` and `'`.
///
/// Safe for element content and quoted attribute values alike.
pub fn escape_html(value: &str) -> String {
    let mut out = String::with_capacity(value.len() + value.len() / 8);
    push_escaped(&mut out, value);
    out
}

/// Append the escaped form of `value` to `out`.
pub fn push_escaped(out: &mut String, value: &str) {
    let mut last = 0;
    for (i, b) in value.bytes().enumerate() {
        let entity = match b {
            b'&' => "&amp;",
            b'<' => "&lt;",
            b'>' => "&gt;",
            b'"' => "&quot;",
            b'\'' => "&#39;",
            _ => continue,
        };
        out.push_str(&value[last..i]);
        out.push_str(entity);
        last = i + 1;
    }
    out.push_str(&value[last..]);
}
