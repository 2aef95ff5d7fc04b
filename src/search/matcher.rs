// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Word and token matching.
//!
//! Three ways a token can hit a document, cheapest first:
//!
//! 1. **Substring**: the token appears anywhere in the searchable text.
//! 2. **Stem**: some word in the text stems to the token's stem.
//! 3. **Prefix**: some word is a prefix of the token or vice versa
//!    (original against word, or stem against stem).
//!
//! Prefix matching is what makes "child" find "childcare" and "buses" find
//! "bus" even though their stems ("buse", "bus") disagree.

use super::query::Token;
use crate::analysis::{stem, tokenize};

/// Below this many chars a word only matches exactly.
pub const MIN_PREFIX_LEN: usize = 3;

/// Minimum chars on both sides before rule 3 is tried.
pub const MIN_PARTIAL_LEN: usize = 2;

/// Exact match, or a prefix relation when both sides have at least 3 chars.
///
/// Symmetric: `word_match(a, b) == word_match(b, a)`.
pub fn word_match(query: &str, candidate: &str) -> bool {
    if query == candidate {
        return true;
    }
    if query.chars().count() < MIN_PREFIX_LEN || candidate.chars().count() < MIN_PREFIX_LEN {
        return false;
    }
    candidate.starts_with(query) || query.starts_with(candidate)
}

/// Does a single document word match the token (original or stemmed form)?
pub fn word_matches_token(token: &Token, word: &str) -> bool {
    word_match(&token.original, word) || word_match(&token.stemmed, &stem(word))
}

/// A document's normalized searchable text with its words pre-stemmed.
///
/// Built once per document per search, then checked against every token.
#[derive(Debug, Clone)]
pub struct SearchableText {
    text: String,
    /// (word, stem(word), word char count)
    words: Vec<(String, String, usize)>,
}

impl SearchableText {
    /// Wrap text that has already been normalized.
    pub fn from_normalized(text: String) -> Self {
        let words = tokenize(&text)
            .into_iter()
            .map(|w| (w.to_string(), stem(w), w.chars().count()))
            .collect();
        Self { text, words }
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Does the token match under any of the three rules?
    pub fn matches(&self, token: &Token) -> bool {
        if token.original.is_empty() {
            return true;
        }

        if self.text.contains(token.original.as_str()) {
            return true;
        }

        if self.words.iter().any(|(_, s, _)| *s == token.stemmed) {
            return true;
        }

        let original_len = token.original.chars().count();
        if original_len < MIN_PARTIAL_LEN {
            return false;
        }
        self.words.iter().any(|(w, s, len)| {
            *len >= MIN_PARTIAL_LEN
                && (word_match(&token.original, w) || word_match(&token.stemmed, s))
        })
    }

    /// AND across tokens. An empty token list matches everything.
    pub fn matches_all(&self, tokens: &[Token]) -> bool {
        tokens.iter().all(|t| self.matches(t))
    }
}
