// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Search-term highlighting.
//!
//! Spans are found in normalized space (so "Café" lights up for "cafe"),
//! mapped back to byte ranges of the raw text, merged, and only then does any
//! markup get written. The output is assembled left to right: escape the raw
//! gap, open marker, escape the raw match, close marker. Escaping and marking
//! never see each other's output, so `&amp;` expansion cannot shift a span and
//! text can never close the marker early.
//!
//! ```text
//!   raw:         "Café & Bus"
//!   normalized:  "cafe & bus"      spans: [0,4) [7,10)
//!   raw bytes:   [0,5) [8,11)
//!   output:      "<mark>Café</mark> &amp; <mark>Bus</mark>"
//! ```

use super::matcher::word_matches_token;
use super::query::{process_search_terms, Token};
use crate::analysis::{strip_punctuation, word_spans};
use crate::util::escape::push_escaped;
use crate::util::{escape_html, NormalizedText};
use serde::{Deserialize, Serialize};
use std::ops::Range;

/// Half-open char interval `[start, end)` over normalized text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    pub fn is_empty(&self) -> bool {
        self.end <= self.start
    }
}

/// Sort by start, then fold together spans that touch or overlap.
pub fn merge_spans(mut spans: Vec<Span>) -> Vec<Span> {
    spans.sort_by_key(|s| s.start);
    let mut merged: Vec<Span> = Vec::with_capacity(spans.len());
    for span in spans {
        match merged.last_mut() {
            Some(last) if span.start <= last.end => last.end = last.end.max(span.end),
            _ => merged.push(span),
        }
    }
    merged
}

/// Same merge over byte ranges.
fn merge_ranges(mut ranges: Vec<Range<usize>>) -> Vec<Range<usize>> {
    ranges.sort_by_key(|r| r.start);
    let mut merged: Vec<Range<usize>> = Vec::with_capacity(ranges.len());
    for range in ranges {
        match merged.last_mut() {
            Some(last) if range.start <= last.end => last.end = last.end.max(range.end),
            _ => merged.push(range),
        }
    }
    merged
}

/// Raw spans for one token: every exact occurrence plus every matching word.
fn token_spans(normalized: &NormalizedText, token: &Token, out: &mut Vec<Span>) {
    let text = normalized.as_str();
    let token_chars = token.original.chars().count();

    if token_chars > 0 {
        for (byte, _) in text.match_indices(token.original.as_str()) {
            let start = normalized.char_index(byte);
            out.push(Span::new(start, start + token_chars));
        }
    }

    for word in word_spans(text) {
        let cleaned = strip_punctuation(word.word);
        let hit = word_matches_token(token, word.word)
            || (!cleaned.is_empty() && word_matches_token(token, &cleaned));
        if hit {
            out.push(Span::new(word.start, word.end));
        }
    }
}

/// Merged spans of every token over normalized text.
pub fn find_spans(normalized: &NormalizedText, tokens: &[Token]) -> Vec<Span> {
    let mut spans = Vec::new();
    for token in tokens {
        token_spans(normalized, token, &mut spans);
    }
    merge_spans(spans)
}

/// The strings wrapped around each highlighted run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Marker {
    pub open: String,
    pub close: String,
}

impl Default for Marker {
    fn default() -> Self {
        Self {
            open: "<mark>".to_string(),
            close: "</mark>".to_string(),
        }
    }
}

/// A processed query ready to highlight any number of fields.
#[derive(Debug, Clone, Default)]
pub struct Highlighter {
    tokens: Vec<Token>,
    marker: Marker,
}

impl Highlighter {
    pub fn new(query: &str) -> Self {
        Self::from_tokens(process_search_terms(query))
    }

    pub fn from_tokens(tokens: Vec<Token>) -> Self {
        Self {
            tokens,
            marker: Marker::default(),
        }
    }

    pub fn with_marker(mut self, marker: Marker) -> Self {
        self.marker = marker;
        self
    }

    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    /// False when the query had nothing but stopwords and whitespace.
    pub fn is_active(&self) -> bool {
        !self.tokens.is_empty()
    }

    /// Merged spans over the normalized form of `text`.
    pub fn spans(&self, text: &str) -> Vec<Span> {
        find_spans(&NormalizedText::new(text), &self.tokens)
    }

    /// Merged byte ranges of `text` to highlight.
    pub fn source_ranges(&self, text: &str) -> Vec<Range<usize>> {
        let normalized = NormalizedText::new(text);
        let ranges = find_spans(&normalized, &self.tokens)
            .into_iter()
            .filter_map(|span| normalized.source_range(span.start, span.end))
            .collect();
        merge_ranges(ranges)
    }

    /// Escaped HTML with every match wrapped in the marker.
    pub fn highlight(&self, text: &str) -> String {
        if text.is_empty() || !self.is_active() {
            return escape_html(text);
        }

        let ranges = self.source_ranges(text);
        let mut out = String::with_capacity(text.len() + ranges.len() * 16);
        let mut cursor = 0;
        for range in ranges {
            push_escaped(&mut out, &text[cursor..range.start]);
            out.push_str(&self.marker.open);
            push_escaped(&mut out, &text[range.clone()]);
            out.push_str(&self.marker.close);
            cursor = range.end;
        }
        push_escaped(&mut out, &text[cursor..]);
        out
    }
}

/// One-shot highlight with the default `<mark>` marker.
///
/// ```
/// use gleaner::highlight;
///
/// assert_eq!(
///     highlight("Fare-free BUSES <now>", "buses"),
///     "Fare-free <mark>BUSES</mark> &lt;now&gt;"
/// );
/// ```
pub fn highlight(text: &str, query: &str) -> String {
    if text.is_empty() || query.is_empty() {
        return escape_html(text);
    }
    Highlighter::new(query).highlight(text)
}
