// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Query processing: raw search box text → ordered tokens.

use crate::analysis::{is_stopword, stem, tokenize};
use crate::util::normalize;
use serde::{Deserialize, Serialize};

/// One processed query word.
///
/// Tokens from the same query are ANDed by the filter engine.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Token {
    /// Normalized word as typed.
    pub original: String,
    /// `stem(original)`.
    pub stemmed: String,
}

impl Token {
    pub fn new(original: impl Into<String>) -> Self {
        let original = original.into();
        let stemmed = stem(&original);
        Self { original, stemmed }
    }

    /// True when stemming changed the word.
    pub fn has_variation(&self) -> bool {
        self.original != self.stemmed
    }
}

/// Turn a raw query into tokens: trim, normalize, split, drop stopwords, stem.
///
/// Order follows the query left to right. Duplicates are kept.
///
/// ```
/// use gleaner::process_search_terms;
///
/// let tokens = process_search_terms("The Rent FREEZE");
/// let words: Vec<&str> = tokens.iter().map(|t| t.original.as_str()).collect();
/// assert_eq!(words, vec!["rent", "freeze"]);
/// ```
pub fn process_search_terms(query: &str) -> Vec<Token> {
    let normalized = normalize(query.trim());
    if normalized.is_empty() {
        return Vec::new();
    }

    tokenize(&normalized)
        .into_iter()
        .filter(|word| !is_stopword(word))
        .map(Token::new)
        .collect()
}
