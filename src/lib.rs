// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Stemmed, accent-insensitive search and highlighting for browsable archives.
//!
//! Two archives, one search engine: a list of social-media posts and a list of
//! campaign donations. Both are loaded once, filtered in memory by an
//! all-words-must-match query (exact, stemmed, or prefix matches), narrowed by
//! a date range or toolbar filters, and rendered with every match highlighted.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────┐    ┌───────────────┐    ┌────────────────┐
//! │    util      │───▶│   analysis    │───▶│  search::query │
//! │ (normalize,  │    │ (tokenize,    │    │    (Token)     │
//! │  escape)     │    │  stem, stops) │    └───────┬────────┘
//! └──────────────┘    └───────────────┘            │
//!                                       ┌──────────┴──────────┐
//!                                       ▼                     ▼
//!                             ┌──────────────────┐  ┌───────────────────┐
//!                             │ search::matcher  │  │ search::highlight │
//!                             │ search::filter   │  │  (Span, merge,    │
//!                             │ (AND over fields)│  │   Highlighter)    │
//!                             └────────┬─────────┘  └─────────┬─────────┘
//!                                      ▼                      │
//! ┌──────────────┐    ┌──────────────────────────────┐       │
//! │   records    │───▶│ session (PostBrowser,        │◀──────┘
//! │ (Post, Donor,│    │   DonorBrowser) + filters    │
//! │  dates)      │    └──────────────┬───────────────┘
//! └──────────────┘                   ▼
//!                       ┌──────────────────────────┐
//!                       │ render / format / summary│
//!                       └──────────────────────────┘
//! ```
//!
//! The filter path and the highlight path share one normalizer and one token
//! list, so whatever makes a record match is exactly what gets marked.
//!
//! # Usage
//!
//! ```
//! use gleaner::records::Post;
//! use gleaner::search::{search, FieldSet};
//! use gleaner::{highlight, process_search_terms};
//!
//! let posts = vec![
//!     Post::new("We will freeze the rent"),
//!     Post::new("Fare-free buses for every New Yorker"),
//! ];
//! let fields = FieldSet::new(["text"]);
//! let tokens = process_search_terms("freezing rents");
//!
//! let hits = search(&posts, &fields, &tokens);
//! assert_eq!(hits.len(), 1);
//! assert_eq!(
//!     highlight(&hits[0].text, "freezing rents"),
//!     "We will <mark>freeze</mark> the <mark>rent</mark>"
//! );
//! ```

// Module declarations
pub mod analysis;
pub mod analytics;
pub mod config;
pub mod convert;
pub mod error;
pub mod filters;
pub mod format;
pub mod load;
pub mod records;
pub mod render;
pub mod search;
pub mod session;
pub mod testing;
pub mod util;

#[cfg(feature = "wasm")]
mod wasm;

// Re-exports for public API
pub use error::{Error, Result};
pub use search::{highlight, process_search_terms, Highlighter, Token};
pub use util::normalize;
