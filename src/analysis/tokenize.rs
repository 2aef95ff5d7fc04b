// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Whitespace tokenization over normalized text.

/// Split normalized text on runs of whitespace, dropping empties.
pub fn tokenize(normalized: &str) -> Vec<&str> {
    normalized.split_whitespace().collect()
}

/// A whitespace-delimited word and its char range in the text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WordSpan<'a> {
    pub word: &'a str,
    /// Char index of the first char.
    pub start: usize,
    /// Char index one past the last char.
    pub end: usize,
}

/// Every whitespace-delimited word with its char offsets.
pub fn word_spans(normalized: &str) -> Vec<WordSpan<'_>> {
    let mut spans = Vec::new();
    let mut current: Option<(usize, usize)> = None; // (byte start, char start)
    let mut char_idx = 0;

    for (byte, c) in normalized.char_indices() {
        if c.is_whitespace() {
            if let Some((b, s)) = current.take() {
                spans.push(WordSpan {
                    word: &normalized[b..byte],
                    start: s,
                    end: char_idx,
                });
            }
        } else if current.is_none() {
            current = Some((byte, char_idx));
        }
        char_idx += 1;
    }

    if let Some((b, s)) = current {
        spans.push(WordSpan {
            word: &normalized[b..],
            start: s,
            end: char_idx,
        });
    }

    spans
}

/// Strip everything but alphanumerics and `_` (punctuation around a word).
pub fn strip_punctuation(word: &str) -> String {
    word.chars()
        .filter(|c| c.is_alphanumeric() || *c == '_')
        .collect()
}
