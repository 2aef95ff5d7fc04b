// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for highlighting.
//!
//! Arbitrary text and queries: combining marks with nothing before them,
//! Hangul, ligatures that lowercase to two chars. The markers must land on
//! char boundaries and every byte of the text must come back out.

#![no_main]

use arbitrary::Arbitrary;
use gleaner::util::escape_html;
use gleaner::Highlighter;
use libfuzzer_sys::fuzz_target;

#[derive(Debug, Arbitrary)]
struct HighlightInput {
    text: String,
    query: String,
}

fuzz_target!(|input: HighlightInput| {
    let text = &input.text[..floor_char_boundary(&input.text, 500)];
    let query = &input.query[..floor_char_boundary(&input.query, 100)];
    let highlighter = Highlighter::new(query);

    // INVARIANT 1: ranges are ordered, disjoint and sliceable
    let ranges = highlighter.source_ranges(text);
    let mut last_end = 0;
    for range in &ranges {
        assert!(range.start < range.end, "empty range {:?}", range);
        assert!(range.start >= last_end, "overlapping ranges {:?}", ranges);
        assert!(text.is_char_boundary(range.start) && text.is_char_boundary(range.end));
        last_end = range.end;
    }
    assert!(last_end <= text.len());

    // INVARIANT 2: dropping the markers gives back the escaped text
    let html = highlighter.highlight(text);
    let unmarked = html.replace("<mark>", "").replace("</mark>", "");
    assert_eq!(unmarked, escape_html(text));

    // INVARIANT 3: no token, no markers
    if !highlighter.is_active() {
        assert_eq!(html, escape_html(text));
    }
});

fn floor_char_boundary(s: &str, max: usize) -> usize {
    let mut end = s.len().min(max);
    while !s.is_char_boundary(end) {
        end -= 1;
    }
    end
}
