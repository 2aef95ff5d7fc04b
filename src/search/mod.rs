// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Search: where the rubber meets the road.
//!
//! A raw query becomes tokens ([`query`]), tokens decide membership
//! ([`matcher`], [`filter`]), and the same tokens decide what to light up
//! ([`highlight`]). The filter and the highlighter never disagree about what
//! matched because they share the normalizer, the tokenizer and the matcher.
//!
//! ```text
//!   "Rent FREEZES"  ──▶  [rent/rent, freezes/freeze]  ──┬──▶  search(docs)
//!                                                       └──▶  highlight(text)
//! ```

pub mod filter;
pub mod highlight;
pub mod matcher;
pub mod query;

pub use filter::{filter_indices, search, FieldSet, Searchable};
#[cfg(feature = "parallel")]
pub use filter::filter_indices_parallel;
pub use highlight::{find_spans, highlight, merge_spans, Highlighter, Marker, Span};
pub use matcher::{word_match, word_matches_token, SearchableText, MIN_PARTIAL_LEN, MIN_PREFIX_LEN};
pub use query::{process_search_terms, Token};
