// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The post browser: one owner for everything the post view depends on.
//!
//! Query, date range, filtered view and paging position live together in
//! [`PostBrowser`], and only [`PostBrowser::handle`] changes them. Each event
//! is applied completely before the next one is looked at, so a half-updated
//! view is never observable.
//!
//! The filtered view holds positions into the loaded posts, never copies, and
//! the loaded posts are never reordered or mutated after construction.

use super::debounce::Debouncer;
use super::pager::{PageRequest, Pager};
use super::summary::{date_range_line, post_count_label, SearchSummary};
use crate::config::Config;
use crate::filters::{DateRange, DateRangeError};
use crate::records::Post;
use crate::render;
use crate::search::{process_search_terms, FieldSet, Highlighter, Marker, Token};
use chrono::{NaiveDate, NaiveDateTime};
use std::ops::Range;
use std::time::Duration;
use tracing::debug;

/// Things the user (or the viewport) can do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PostEvent {
    /// A keystroke in the search box; applied after the debounce delay.
    QueryInput { text: String, at: Duration },
    /// Enter pressed; applied now, cancelling any pending keystroke.
    QuerySubmit(String),
    ClearQuery,
    ApplyDateRange(DateRange),
    /// "Last N days", ending `today`.
    DatePreset { days: u32, today: NaiveDate },
    ClearDateRange,
    /// The sentinel near the end of the list came into view.
    LoadMore,
    /// The page handed out last has been rendered.
    PageRendered,
    /// Time passes; fires a due debounced query.
    Tick(Duration),
}

/// What the view should do in response to an event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewUpdate {
    Unchanged,
    /// The view was rebuilt: clear the list and render this first page.
    Reset(Range<usize>),
    /// Append this page.
    Append(Range<usize>),
    /// Everything is on screen; stop watching the sentinel.
    Exhausted,
    /// The date range was refused; the previous one stays in effect.
    Rejected(DateRangeError),
}

#[derive(Debug, Clone)]
pub struct PostBrowser {
    posts: Vec<Post>,
    /// `created_at`, parsed once.
    dates: Vec<Option<NaiveDateTime>>,
    fields: FieldSet,
    query: String,
    tokens: Vec<Token>,
    range: DateRange,
    view: Vec<usize>,
    pager: Pager,
    debouncer: Debouncer<String>,
    highlighter: Highlighter,
    marker: Marker,
    default_handle: String,
}

impl PostBrowser {
    pub fn new(posts: Vec<Post>) -> Self {
        Self::with_config(posts, &Config::default())
    }

    /// Blank posts are dropped here even if the loader let them through.
    pub fn with_config(mut posts: Vec<Post>, config: &Config) -> Self {
        posts.retain(|post| !post.is_blank());
        let dates = posts.iter().map(Post::created).collect();
        let view: Vec<usize> = (0..posts.len()).collect();
        let mut pager = Pager::new(config.posts.page_size);
        pager.reset(view.len());

        Self {
            posts,
            dates,
            fields: config.posts.field_set(),
            query: String::new(),
            tokens: Vec::new(),
            range: DateRange::all(),
            view,
            pager,
            debouncer: Debouncer::new(config.debounce()),
            highlighter: Highlighter::default().with_marker(config.highlight.clone()),
            marker: config.highlight.clone(),
            default_handle: config.posts.default_handle.clone(),
        }
    }

    pub fn handle(&mut self, event: PostEvent) -> ViewUpdate {
        match event {
            PostEvent::QueryInput { text, at } => {
                self.debouncer.schedule(text, at);
                ViewUpdate::Unchanged
            }
            PostEvent::Tick(now) => match self.debouncer.poll(now) {
                Some(text) => self.apply_query(&text),
                None => ViewUpdate::Unchanged,
            },
            PostEvent::QuerySubmit(text) => {
                self.debouncer.cancel();
                self.apply_query(&text)
            }
            PostEvent::ClearQuery => {
                self.debouncer.cancel();
                self.apply_query("")
            }
            PostEvent::ApplyDateRange(range) => {
                if let Err(err) = range.validate() {
                    debug!(%err, "date range rejected");
                    return ViewUpdate::Rejected(err);
                }
                self.range = range;
                self.refilter()
            }
            PostEvent::DatePreset { days, today } => {
                self.range = DateRange::last_days(days, today);
                self.refilter()
            }
            PostEvent::ClearDateRange => {
                self.range = DateRange::all();
                self.refilter()
            }
            PostEvent::LoadMore => match self.pager.request() {
                PageRequest::Page(range) => ViewUpdate::Append(range),
                PageRequest::Busy => ViewUpdate::Unchanged,
                PageRequest::Exhausted => ViewUpdate::Exhausted,
            },
            PostEvent::PageRendered => {
                self.pager.complete();
                ViewUpdate::Unchanged
            }
        }
    }

    fn apply_query(&mut self, text: &str) -> ViewUpdate {
        self.query = text.trim().to_string();
        self.tokens = process_search_terms(&self.query);
        self.highlighter =
            Highlighter::from_tokens(self.tokens.clone()).with_marker(self.marker.clone());
        self.refilter()
    }

    fn refilter(&mut self) -> ViewUpdate {
        let mut view = self.matching();
        if self.range.is_active() {
            view.retain(|&i| self.range.contains(self.dates[i]));
        }
        debug!(
            query = %self.query,
            tokens = self.tokens.len(),
            matched = view.len(),
            total = self.posts.len(),
            "post view rebuilt"
        );

        self.view = view;
        self.pager.reset(self.view.len());
        match self.pager.request() {
            PageRequest::Page(range) => ViewUpdate::Reset(range),
            PageRequest::Busy | PageRequest::Exhausted => ViewUpdate::Reset(0..0),
        }
    }

    #[cfg(feature = "parallel")]
    fn matching(&self) -> Vec<usize> {
        crate::search::filter_indices_parallel(&self.posts, &self.fields, &self.tokens)
    }

    #[cfg(not(feature = "parallel"))]
    fn matching(&self) -> Vec<usize> {
        crate::search::filter_indices(&self.posts, &self.fields, &self.tokens)
    }

    pub fn posts(&self) -> &[Post] {
        &self.posts
    }

    pub fn total(&self) -> usize {
        self.posts.len()
    }

    pub fn matched(&self) -> usize {
        self.view.len()
    }

    /// Positions into [`posts`](Self::posts), in display order.
    pub fn view(&self) -> &[usize] {
        &self.view
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    pub fn date_range(&self) -> DateRange {
        self.range
    }

    pub fn is_searching(&self) -> bool {
        !self.query.is_empty()
    }

    pub fn has_pending_input(&self) -> bool {
        self.debouncer.is_pending()
    }

    pub fn has_more(&self) -> bool {
        self.pager.has_more()
    }

    pub fn highlighter(&self) -> &Highlighter {
        &self.highlighter
    }

    /// Posts at view positions `range`, clamped to the view.
    pub fn page(&self, range: Range<usize>) -> impl Iterator<Item = &Post> + '_ {
        let end = range.end.min(self.view.len());
        let start = range.start.min(end);
        self.view[start..end]
            .iter()
            .map(move |&i| &self.posts[i])
    }

    pub fn count_label(&self) -> String {
        post_count_label(self.matched(), self.total(), self.is_searching())
    }

    pub fn search_summary(&self) -> SearchSummary {
        SearchSummary::new(&self.query, &self.tokens, self.matched(), self.total())
    }

    pub fn date_line(&self) -> Option<String> {
        date_range_line(&self.range, self.is_searching())
    }

    /// Cards for view positions `range`, or the empty state for an empty view.
    pub fn render_page(&self, range: Range<usize>, now: NaiveDateTime) -> String {
        if self.view.is_empty() && range.start == 0 {
            return render::no_results_panel();
        }
        self.page(range)
            .map(|post| render::post_card(post, &self.highlighter, now, &self.default_handle))
            .collect()
    }
}
