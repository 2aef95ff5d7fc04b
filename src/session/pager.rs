// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Incremental paging over a filtered view.
//!
//! The viewport sentinel is somebody else's problem. All the pager sees is a
//! "more, please" request, which it answers with the next slice, `Busy` while
//! a slice is still being rendered, or `Exhausted` once everything is out.
//!
//! ```text
//!   reset(n) ─▶ request() ─▶ Page(0..25) ─▶ complete() ─▶ request() ─▶ Page(25..50) ...
//!                   │
//!                   └─ request() again before complete() ─▶ Busy
//! ```

use serde::Serialize;
use std::ops::Range;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum PageRequest {
    /// Render these positions of the view, then call [`Pager::complete`].
    Page(Range<usize>),
    /// A page is in flight.
    Busy,
    /// Nothing left.
    Exhausted,
}

#[derive(Debug, Clone)]
pub struct Pager {
    page_size: usize,
    total: usize,
    next_page: usize,
    in_flight: bool,
}

impl Pager {
    pub fn new(page_size: usize) -> Self {
        Self {
            page_size: page_size.max(1),
            total: 0,
            next_page: 0,
            in_flight: false,
        }
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn total(&self) -> usize {
        self.total
    }

    /// Start over on a view of `total` items.
    pub fn reset(&mut self, total: usize) {
        self.total = total;
        self.next_page = 0;
        self.in_flight = false;
    }

    /// Ask for the next page.
    ///
    /// The first page of a view is always handed out, even when the view is
    /// empty, so the caller has a chance to show the "no results" state.
    pub fn request(&mut self) -> PageRequest {
        if self.in_flight {
            return PageRequest::Busy;
        }
        let start = self.next_page.saturating_mul(self.page_size);
        if self.next_page > 0 && start >= self.total {
            return PageRequest::Exhausted;
        }
        let end = start.saturating_add(self.page_size).min(self.total);
        self.in_flight = true;
        PageRequest::Page(start.min(end)..end)
    }

    /// The page handed out by [`request`](Self::request) has been rendered.
    pub fn complete(&mut self) {
        if self.in_flight {
            self.in_flight = false;
            self.next_page += 1;
        }
    }

    pub fn is_busy(&self) -> bool {
        self.in_flight
    }

    /// Items rendered so far.
    pub fn loaded(&self) -> usize {
        self.next_page.saturating_mul(self.page_size).min(self.total)
    }

    /// More items remain beyond what has been rendered.
    pub fn has_more(&self) -> bool {
        self.loaded() < self.total
    }
}
