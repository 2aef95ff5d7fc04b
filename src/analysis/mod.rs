// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Text analysis: tokenizing, stemming, stopwords.
//!
//! All three operate on text that has already been through
//! [`normalize`](crate::util::normalize), and all three are pure functions of
//! their input. No state, no caches, no surprises.

pub mod stem;
pub mod stopwords;
pub mod tokenize;

pub use stem::{stem, StemRule, STEMMING_RULES};
pub use stopwords::{is_stopword, STOPWORDS};
pub use tokenize::{strip_punctuation, tokenize, word_spans, WordSpan};
