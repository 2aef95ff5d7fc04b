// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for the lenient date and amount parsers.
//!
//! Archive dates come in whatever shape the export tool chose. Unreadable
//! values must come back as `None`, never as a panic.

#![no_main]

use gleaner::filters::DateRange;
use gleaner::format::format_relative;
use gleaner::records::{parse_donor_date, parse_leading_float, parse_post_date};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|raw: &str| {
    let raw = &raw[..floor_char_boundary(raw, 64)];

    let posted = parse_post_date(raw);
    let _ = parse_donor_date(raw);
    let _ = parse_leading_float(raw);

    // INVARIANT 1: an open range admits anything, dated or not
    assert!(DateRange::all().contains(posted));

    // INVARIANT 2: zero age reads as "now"
    if let Some(when) = posted {
        assert_eq!(format_relative(when, when), "now");
    }
});

fn floor_char_boundary(s: &str, max: usize) -> usize {
    let mut end = s.len().min(max);
    while !s.is_char_boundary(end) {
        end -= 1;
    }
    end
}
