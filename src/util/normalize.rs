// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Accent- and case-folding for search text.
//!
//! Every string the engine compares goes through here first: queries, document
//! fields, and the text we highlight. Folding happens one source character at a
//! time, which is what lets [`NormalizedText`] answer "which bytes of the raw
//! text produced this normalized character?". The highlighter depends on that
//! answer to put markers in the right place even when NFD changes lengths
//! (Hangul syllables, decomposed input, stray combining marks).

use std::ops::Range;
use unicode_normalization::UnicodeNormalization;

/// Normalize a string for search: NFD decompose, strip combining diacritical
/// marks, lowercase.
///
/// - "café" → "cafe"
/// - "NAÏVE" → "naive"
/// - "Zohrán" → "zohran"
///
/// Whitespace is left untouched so word positions survive.
/// Idempotent: `normalize(&normalize(s)) == normalize(s)`.
pub fn normalize(value: &str) -> String {
    NormalizedText::new(value).into_string()
}

/// Combining Diacritical Marks block (U+0300..=U+036F).
#[inline]
fn is_combining_mark(c: char) -> bool {
    matches!(c, '\u{0300}'..='\u{036F}')
}

/// Fold one source character into `out`.
fn fold_char(c: char, out: &mut String) {
    for base in std::iter::once(c).nfd().filter(|d| !is_combining_mark(*d)) {
        out.extend(base.to_lowercase());
    }
}

/// Normalized text that remembers where each of its characters came from.
///
/// **Invariant**: `starts.len() == sources.len() == text.chars().count()`, and
/// `sources` is non-decreasing (folding never reorders source characters).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedText {
    text: String,
    /// Byte offset in `text` where each normalized char starts.
    starts: Vec<usize>,
    /// Byte range in the source that produced each normalized char.
    sources: Vec<Range<usize>>,
}

impl NormalizedText {
    pub fn new(source: &str) -> Self {
        let mut text = String::with_capacity(source.len());
        let mut starts = Vec::with_capacity(source.len());
        let mut sources: Vec<Range<usize>> = Vec::with_capacity(source.len());
        let mut scratch = String::new();

        for (byte, c) in source.char_indices() {
            let source_range = byte..byte + c.len_utf8();
            scratch.clear();
            fold_char(c, &mut scratch);

            if scratch.is_empty() {
                // A lone combining mark: it belongs to whatever came before it.
                if let Some(prev) = sources.last_mut() {
                    prev.end = source_range.end;
                }
                continue;
            }

            for folded in scratch.chars() {
                starts.push(text.len());
                sources.push(source_range.clone());
                text.push(folded);
            }
        }

        Self {
            text,
            starts,
            sources,
        }
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn into_string(self) -> String {
        self.text
    }

    /// Number of normalized characters.
    pub fn char_len(&self) -> usize {
        self.starts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Character index of a byte offset in the normalized text.
    ///
    /// Offsets at or past the end map to `char_len()`.
    pub fn char_index(&self, byte: usize) -> usize {
        match self.starts.binary_search(&byte) {
            Ok(i) => i,
            Err(i) => i,
        }
    }

    /// Byte range of the source text covered by normalized chars `start..end`.
    ///
    /// Returns `None` for empty or out-of-bounds ranges.
    pub fn source_range(&self, start: usize, end: usize) -> Option<Range<usize>> {
        if start >= end || end > self.sources.len() {
            return None;
        }
        Some(self.sources[start].start..self.sources[end - 1].end)
    }
}
