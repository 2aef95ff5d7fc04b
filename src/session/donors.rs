// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The donor browser: query, toolbar filters and sort over one loaded file.
//!
//! Same shape as [`PostBrowser`](super::PostBrowser): one owner, one
//! `handle` entry point. There is no paging here; the view is capped at the
//! configured display limit instead.

use super::debounce::Debouncer;
use super::summary::{donor_count_label, donor_results_line, reset_button_label};
use crate::analytics::DonorAnalytics;
use crate::config::Config;
use crate::filters::{sort_donors, DonorFilters, DonorSort};
use crate::records::Donor;
use crate::render;
use crate::search::{process_search_terms, FieldSet, Highlighter, Marker, Token};
use std::time::Duration;
use tracing::debug;

#[derive(Debug, Clone, PartialEq)]
pub enum DonorEvent {
    QueryInput { text: String, at: Duration },
    QuerySubmit(String),
    ClearQuery,
    SetFilters(DonorFilters),
    /// Query and every filter back to their defaults.
    ResetAll,
    Tick(Duration),
}

#[derive(Debug, Clone)]
pub struct DonorBrowser {
    donors: Vec<Donor>,
    fields: FieldSet,
    query: String,
    tokens: Vec<Token>,
    filters: DonorFilters,
    /// Positions into `donors`, filtered and sorted.
    view: Vec<usize>,
    display_limit: usize,
    debouncer: Debouncer<String>,
    highlighter: Highlighter,
    marker: Marker,
    analytics: DonorAnalytics,
}

impl DonorBrowser {
    pub fn new(donors: Vec<Donor>) -> Self {
        Self::with_config(donors, &Config::default())
    }

    /// Donors are re-stamped with their position, so ids always index `donors()`.
    pub fn with_config(donors: Vec<Donor>, config: &Config) -> Self {
        let donors: Vec<Donor> = donors
            .into_iter()
            .enumerate()
            .map(|(i, donor)| donor.prepared(i))
            .collect();
        let analytics = DonorAnalytics::compute(&donors);

        let mut browser = Self {
            donors,
            fields: config.donors.field_set(),
            query: String::new(),
            tokens: Vec::new(),
            filters: DonorFilters::default(),
            view: Vec::new(),
            display_limit: config.donors.display_limit,
            debouncer: Debouncer::new(config.debounce()),
            highlighter: Highlighter::default().with_marker(config.highlight.clone()),
            marker: config.highlight.clone(),
            analytics,
        };
        browser.refilter();
        browser
    }

    /// Apply one event. Returns whether the view changed.
    pub fn handle(&mut self, event: DonorEvent) -> bool {
        match event {
            DonorEvent::QueryInput { text, at } => {
                self.debouncer.schedule(text, at);
                false
            }
            DonorEvent::Tick(now) => match self.debouncer.poll(now) {
                Some(text) => self.apply_query(&text),
                None => false,
            },
            DonorEvent::QuerySubmit(text) => {
                self.debouncer.cancel();
                self.apply_query(&text)
            }
            DonorEvent::ClearQuery => {
                self.debouncer.cancel();
                self.apply_query("")
            }
            DonorEvent::SetFilters(filters) => {
                self.filters = filters;
                self.refilter();
                true
            }
            DonorEvent::ResetAll => {
                self.debouncer.cancel();
                self.filters = DonorFilters::default();
                self.apply_query("")
            }
        }
    }

    fn apply_query(&mut self, text: &str) -> bool {
        self.query = text.trim().to_string();
        self.tokens = process_search_terms(&self.query);
        self.highlighter =
            Highlighter::from_tokens(self.tokens.clone()).with_marker(self.marker.clone());
        self.refilter();
        true
    }

    fn refilter(&mut self) {
        let mut matched: Vec<&Donor> = self
            .matching()
            .into_iter()
            .map(|i| &self.donors[i])
            .filter(|donor| self.filters.matches(donor))
            .collect();
        sort_donors(&mut matched, self.filters.sort);
        let view: Vec<usize> = matched.iter().map(|donor| donor.id).collect();

        debug!(
            query = %self.query,
            sort = %self.filters.sort,
            matched = view.len(),
            total = self.donors.len(),
            "donor view rebuilt"
        );
        self.view = view;
    }

    #[cfg(feature = "parallel")]
    fn matching(&self) -> Vec<usize> {
        crate::search::filter_indices_parallel(&self.donors, &self.fields, &self.tokens)
    }

    #[cfg(not(feature = "parallel"))]
    fn matching(&self) -> Vec<usize> {
        crate::search::filter_indices(&self.donors, &self.fields, &self.tokens)
    }

    pub fn donors(&self) -> &[Donor] {
        &self.donors
    }

    pub fn total(&self) -> usize {
        self.donors.len()
    }

    /// Donors passing the query and filters, before the display cap.
    pub fn matched(&self) -> usize {
        self.view.len()
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    pub fn filters(&self) -> &DonorFilters {
        &self.filters
    }

    pub fn sort(&self) -> DonorSort {
        self.filters.sort
    }

    pub fn highlighter(&self) -> &Highlighter {
        &self.highlighter
    }

    pub fn has_pending_input(&self) -> bool {
        self.debouncer.is_pending()
    }

    /// Computed once over every loaded donor, not the filtered view.
    pub fn analytics(&self) -> &DonorAnalytics {
        &self.analytics
    }

    /// A query or any toolbar control is away from its default.
    pub fn is_filtering(&self) -> bool {
        !self.query.is_empty() || self.filters.is_active()
    }

    /// The sorted view, capped at the display limit.
    pub fn visible(&self) -> impl Iterator<Item = &Donor> + '_ {
        self.view
            .iter()
            .take(self.display_limit)
            .map(move |&i| &self.donors[i])
    }

    pub fn results_line(&self) -> String {
        donor_results_line(self.matched(), self.total(), self.is_filtering())
    }

    pub fn count_label(&self) -> String {
        donor_count_label(self.matched(), self.total())
    }

    pub fn reset_label(&self) -> &'static str {
        reset_button_label(self.is_filtering())
    }

    /// Cards for the visible donors.
    pub fn render(&self) -> String {
        self.visible()
            .map(|donor| render::donor_card(donor, &self.highlighter))
            .collect()
    }
}
