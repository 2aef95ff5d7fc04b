// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The filter engine: tokens × documents → the documents that match.
//!
//! Posts and donors share this engine. What differs is which fields are
//! searchable, so that is a [`FieldSet`] handed in by the caller rather than
//! something each record type decides on its own.
//!
//! Filtering never touches the source collection. The result is a new ordered
//! view: either references ([`search`]) or positions ([`filter_indices`]).

use super::matcher::SearchableText;
use super::query::Token;
use crate::util::normalize;
use serde::{Deserialize, Serialize};

/// A record with named text fields.
pub trait Searchable {
    /// The field's text, or `None` if the record has no such field.
    fn field(&self, name: &str) -> Option<&str>;
}

impl Searchable for String {
    /// A bare string is a record with a single `text` field.
    fn field(&self, name: &str) -> Option<&str> {
        (name == "text").then_some(self.as_str())
    }
}

impl<T: Searchable + ?Sized> Searchable for &T {
    fn field(&self, name: &str) -> Option<&str> {
        (**self).field(name)
    }
}

/// Ordered list of field names that make up a document's searchable text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FieldSet {
    names: Vec<String>,
}

impl FieldSet {
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            names: names.into_iter().map(Into::into).collect(),
        }
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    /// Non-blank configured fields joined by single spaces, then normalized.
    pub fn searchable_text<D: Searchable + ?Sized>(&self, doc: &D) -> SearchableText {
        let mut joined = String::new();
        for value in self.names.iter().filter_map(|name| doc.field(name)) {
            if value.trim().is_empty() {
                continue;
            }
            if !joined.is_empty() {
                joined.push(' ');
            }
            joined.push_str(value);
        }
        SearchableText::from_normalized(normalize(&joined))
    }

    /// Does the document satisfy every token?
    pub fn matches<D: Searchable + ?Sized>(&self, doc: &D, tokens: &[Token]) -> bool {
        tokens.is_empty() || self.searchable_text(doc).matches_all(tokens)
    }
}

/// Filter `docs` down to those matching every token, keeping their order.
///
/// With no tokens this is the identity: every document, same order.
pub fn search<'a, D: Searchable>(docs: &'a [D], fields: &FieldSet, tokens: &[Token]) -> Vec<&'a D> {
    if tokens.is_empty() {
        return docs.iter().collect();
    }
    docs.iter().filter(|doc| fields.matches(*doc, tokens)).collect()
}

/// Positions (into `docs`) of the matching documents, ascending.
pub fn filter_indices<D: Searchable>(docs: &[D], fields: &FieldSet, tokens: &[Token]) -> Vec<usize> {
    if tokens.is_empty() {
        return (0..docs.len()).collect();
    }
    docs.iter()
        .enumerate()
        .filter(|(_, doc)| fields.matches(*doc, tokens))
        .map(|(i, _)| i)
        .collect()
}

/// Parallel [`filter_indices`]. Same result, same order.
#[cfg(feature = "parallel")]
pub fn filter_indices_parallel<D: Searchable + Sync>(
    docs: &[D],
    fields: &FieldSet,
    tokens: &[Token],
) -> Vec<usize> {
    use rayon::prelude::*;

    if tokens.is_empty() {
        return (0..docs.len()).collect();
    }
    docs.par_iter()
        .enumerate()
        .filter(|(_, doc)| fields.matches(*doc, tokens))
        .map(|(i, _)| i)
        .collect()
}
