// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Suffix-stripping stemmer.
//!
//! This is a heuristic affix stripper, not Porter. It exists so "buses" and
//! "bus", or "funding" and "fund", land close enough for the matcher to take
//! over. It has known false positives ("thing" → "th", "lies" → "ly") and we
//! keep them: changing the rule table changes which posts match a query.
//!
//! # Rule order
//!
//! First match wins. The table contains repeated `ies`/`ied` entries after
//! `ed`. They can never fire (an `ies` word is caught by the first `ies`
//! rule, and its result is always long enough), but they stay in the table
//! so the order is exactly the one the archive's search has always used.

/// One suffix rewrite: `suffix` at the end of the word becomes `replacement`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StemRule {
    pub suffix: &'static str,
    pub replacement: &'static str,
}

const fn rule(suffix: &'static str, replacement: &'static str) -> StemRule {
    StemRule {
        suffix,
        replacement,
    }
}

/// Ordered stemming rules. Do not deduplicate.
pub const STEMMING_RULES: &[StemRule] = &[
    rule("ies", "y"),
    rule("ied", "y"),
    rule("ying", "y"),
    rule("ing", ""),
    rule("ly", ""),
    rule("ed", ""),
    rule("ies", "y"),
    rule("ied", "y"),
    rule("ies", "y"),
    rule("s", ""),
];

/// Words this short (in chars) are never stemmed.
pub const MIN_STEM_INPUT: usize = 4;

/// A rewrite only counts if the result keeps at least this many chars.
pub const MIN_STEM_OUTPUT: usize = 2;

/// Stem a normalized word.
///
/// - `len ≤ 3` → unchanged
/// - first rule whose suffix matches and whose result has `len ≥ 2` wins
/// - otherwise unchanged
pub fn stem(word: &str) -> String {
    if word.chars().count() < MIN_STEM_INPUT {
        return word.to_string();
    }

    for rule in STEMMING_RULES {
        if let Some(base) = word.strip_suffix(rule.suffix) {
            if base.chars().count() + rule.replacement.chars().count() >= MIN_STEM_OUTPUT {
                let mut stemmed = String::with_capacity(base.len() + rule.replacement.len());
                stemmed.push_str(base);
                stemmed.push_str(rule.replacement);
                return stemmed;
            }
        }
    }

    word.to_string()
}
