// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Result counts and "what am I looking at" lines.
//!
//! Plain text through `Display`, markup through `to_html`. The query is the
//! only user text in here and it is always escaped on the HTML path.

use crate::filters::DateRange;
use crate::format::{format_count, format_date_range};
use crate::search::Token;
use crate::util::escape_html;
use serde::Serialize;
use std::fmt;

/// `"{n} / {total} posts"` while a query narrows the view, else `"{total} posts"`.
pub fn post_count_label(matched: usize, total: usize, searching: bool) -> String {
    if searching && matched != total {
        format!("{} / {} posts", matched, total)
    } else {
        format!("{} posts", total)
    }
}

/// Outcome of a post search, ready to describe.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SearchSummary {
    /// No query; nothing to say.
    Idle,
    NoResults {
        query: String,
    },
    AllMatch {
        query: String,
        count: usize,
    },
    Found {
        query: String,
        count: usize,
        total: usize,
        /// Normalized token words, in query order.
        terms: Vec<String>,
        /// Some token stems differently from how it was typed.
        variations: bool,
    },
}

impl SearchSummary {
    pub fn new(query: &str, tokens: &[Token], count: usize, total: usize) -> Self {
        let query = query.trim();
        if query.is_empty() {
            return SearchSummary::Idle;
        }
        let query = query.to_string();
        if count == 0 {
            SearchSummary::NoResults { query }
        } else if count == total {
            SearchSummary::AllMatch { query, count }
        } else {
            SearchSummary::Found {
                query,
                count,
                total,
                terms: tokens.iter().map(|t| t.original.clone()).collect(),
                variations: tokens.iter().any(Token::has_variation),
            }
        }
    }

    pub fn is_no_results(&self) -> bool {
        matches!(self, SearchSummary::NoResults { .. })
    }

    /// `Searching for: "a", "b" (including word variations)`.
    fn terms_line(terms: &[String], variations: bool) -> Option<String> {
        if terms.is_empty() {
            return None;
        }
        let quoted: Vec<String> = terms.iter().map(|t| format!("\"{}\"", t)).collect();
        let suffix = if variations {
            " (including word variations)"
        } else {
            ""
        };
        Some(format!("Searching for: {}{}", quoted.join(", "), suffix))
    }

    pub fn to_html(&self) -> String {
        match self {
            SearchSummary::Idle => String::new(),
            SearchSummary::NoResults { query } => format!(
                "No results found for \"<strong>{}</strong>\"",
                escape_html(query)
            ),
            SearchSummary::AllMatch { query, count } => format!(
                "All {} posts match \"<strong>{}</strong>\"",
                count,
                escape_html(query)
            ),
            SearchSummary::Found {
                query,
                count,
                total,
                terms,
                variations,
            } => {
                let mut out = format!(
                    "Found {} of {} posts matching \"<strong>{}</strong>\"",
                    count,
                    total,
                    escape_html(query)
                );
                if let Some(line) = Self::terms_line(terms, *variations) {
                    out.push_str("<br><span class=\"search-terms\">");
                    out.push_str(&escape_html(&line));
                    out.push_str("</span>");
                }
                out
            }
        }
    }
}

impl fmt::Display for SearchSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SearchSummary::Idle => Ok(()),
            SearchSummary::NoResults { query } => write!(f, "No results found for \"{}\"", query),
            SearchSummary::AllMatch { query, count } => {
                write!(f, "All {} posts match \"{}\"", count, query)
            }
            SearchSummary::Found {
                query,
                count,
                total,
                terms,
                variations,
            } => {
                write!(f, "Found {} of {} posts matching \"{}\"", count, total, query)?;
                if let Some(line) = Self::terms_line(terms, *variations) {
                    write!(f, "\n{}", line)?;
                }
                Ok(())
            }
        }
    }
}

/// The date filter's line, appended to the search line or standing alone.
pub fn date_range_line(range: &DateRange, searching: bool) -> Option<String> {
    let text = format_date_range(range)?;
    Some(if searching {
        format!(" • Filtered by date: {}", text)
    } else {
        format!("Showing posts from {}", text)
    })
}

/// `Showing X of Y donors` when anything is filtering, else `Y total donors`.
pub fn donor_results_line(filtered: usize, total: usize, active: bool) -> String {
    if active {
        format!(
            "Showing {} of {} donors",
            format_count(filtered),
            format_count(total)
        )
    } else {
        format!("{} total donors", format_count(total))
    }
}

/// `X of Y donors`.
pub fn donor_count_label(filtered: usize, total: usize) -> String {
    format!("{} of {} donors", format_count(filtered), format_count(total))
}

pub fn reset_button_label(active: bool) -> &'static str {
    if active {
        "Reset Filters"
    } else {
        "No Active Filters"
    }
}
