// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for query processing and filtering.
//!
//! Throws arbitrary bytes at the search box. Emoji, RTL text, null bytes: none
//! of it should panic, and the filter must stay an ordered subset.

#![no_main]

use gleaner::analysis::is_stopword;
use gleaner::process_search_terms;
use gleaner::search::{filter_indices, search, FieldSet};
use gleaner::testing::synthetic_posts;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|query: &[u8]| {
    static POSTS: std::sync::OnceLock<Vec<gleaner::records::Post>> = std::sync::OnceLock::new();
    let posts = POSTS.get_or_init(|| synthetic_posts(200));

    let query = String::from_utf8_lossy(query);
    let query = &query[..floor_char_boundary(&query, 200)];

    // INVARIANT 1: tokens are non-empty, whitespace-free and never stopwords
    let tokens = process_search_terms(query);
    for token in &tokens {
        assert!(!token.original.is_empty());
        assert!(!token.original.contains(char::is_whitespace));
        assert!(!is_stopword(&token.original));
    }

    // INVARIANT 2: results are an ordered subset of the input
    let fields = FieldSet::new(["text"]);
    let indices = filter_indices(posts, &fields, &tokens);
    assert!(indices.windows(2).all(|w| w[0] < w[1]));
    assert!(indices.iter().all(|&i| i < posts.len()));
    assert_eq!(search(posts, &fields, &tokens).len(), indices.len());

    // INVARIANT 3: no tokens means everything
    if tokens.is_empty() {
        assert_eq!(indices.len(), posts.len());
    }
});

fn floor_char_boundary(s: &str, max: usize) -> usize {
    let mut end = s.len().min(max);
    while !s.is_char_boundary(end) {
        end -= 1;
    }
    end
}
