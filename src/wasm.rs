// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! WebAssembly bindings for the archive pages.
//!
//! The host page fetches the JSON itself and hands the text over. From then
//! on it forwards DOM events here and pastes back the HTML fragments it gets:
//!
//! - `PostArchive`: search box, date filter, infinite scroll
//! - `DonorArchive`: search box, toolbar filters, dashboard numbers
//!
//! Timestamps come from `Date.now()` and the local calendar, read through
//! `js_sys` since there is no system clock on `wasm32-unknown-unknown`.

use crate::config::Config;
use crate::filters::{DateRange, DonorFilters};
use crate::load::{load_donors, load_posts};
use crate::render;
use crate::session::{DonorBrowser, DonorEvent, PostBrowser, PostEvent, ViewUpdate};
use chrono::{NaiveDate, NaiveDateTime};
use serde::Serialize;
use serde_wasm_bindgen::{from_value, to_value};
use std::fmt::Display;
use std::time::Duration;
use wasm_bindgen::prelude::*;

fn js_error(err: impl Display) -> JsValue {
    JsValue::from_str(&err.to_string())
}

/// `undefined` and `null` mean defaults.
fn config_from(value: JsValue) -> Result<Config, JsValue> {
    if value.is_undefined() || value.is_null() {
        return Ok(Config::default());
    }
    from_value(value).map_err(js_error)
}

/// Milliseconds since the epoch, for the debouncer.
fn clock() -> Duration {
    Duration::from_millis(js_sys::Date::now().max(0.0) as u64)
}

/// Local wall-clock time.
fn local_now() -> NaiveDateTime {
    let date = js_sys::Date::new_0();
    NaiveDate::from_ymd_opt(date.get_full_year() as i32, date.get_month() + 1, date.get_date())
        .and_then(|day| day.and_hms_opt(date.get_hours(), date.get_minutes(), date.get_seconds()))
        .unwrap_or_default()
}

/// `YYYY-MM-DD` from an `<input type="date">`; blank means unbounded.
fn input_date(value: Option<String>) -> Result<Option<NaiveDate>, JsValue> {
    match value.as_deref().map(str::trim) {
        None | Some("") => Ok(None),
        Some(raw) => raw
            .parse::<NaiveDate>()
            .map(Some)
            .map_err(|e| js_error(format!("invalid date '{}': {}", raw, e))),
    }
}

/// [`ViewUpdate`] as a plain JS object.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ViewUpdateOutput {
    kind: &'static str,
    start: usize,
    end: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

impl From<ViewUpdate> for ViewUpdateOutput {
    fn from(update: ViewUpdate) -> Self {
        let (kind, range, error) = match update {
            ViewUpdate::Unchanged => ("unchanged", 0..0, None),
            ViewUpdate::Reset(range) => ("reset", range, None),
            ViewUpdate::Append(range) => ("append", range, None),
            ViewUpdate::Exhausted => ("exhausted", 0..0, None),
            ViewUpdate::Rejected(err) => ("rejected", 0..0, Some(err.to_string())),
        };
        Self {
            kind,
            start: range.start,
            end: range.end,
            error,
        }
    }
}

fn update_to_js(update: ViewUpdate) -> Result<JsValue, JsValue> {
    to_value(&ViewUpdateOutput::from(update)).map_err(js_error)
}

/// The posts page.
#[wasm_bindgen]
pub struct PostArchive {
    browser: PostBrowser,
}

#[wasm_bindgen]
impl PostArchive {
    /// Decode the archive. `config` may be omitted.
    #[wasm_bindgen(constructor)]
    pub fn new(json: &str, config: JsValue) -> Result<PostArchive, JsValue> {
        let config = config_from(config)?;
        let posts = load_posts(json.as_bytes()).map_err(js_error)?;
        Ok(PostArchive {
            browser: PostBrowser::with_config(posts, &config),
        })
    }

    /// A keystroke; call [`tick`](Self::tick) from a timer to apply it.
    pub fn input(&mut self, text: String) {
        self.browser.handle(PostEvent::QueryInput { text, at: clock() });
    }

    pub fn tick(&mut self) -> Result<JsValue, JsValue> {
        update_to_js(self.browser.handle(PostEvent::Tick(clock())))
    }

    pub fn submit(&mut self, text: String) -> Result<JsValue, JsValue> {
        update_to_js(self.browser.handle(PostEvent::QuerySubmit(text)))
    }

    pub fn clear_query(&mut self) -> Result<JsValue, JsValue> {
        update_to_js(self.browser.handle(PostEvent::ClearQuery))
    }

    pub fn set_date_range(
        &mut self,
        start: Option<String>,
        end: Option<String>,
    ) -> Result<JsValue, JsValue> {
        let range = DateRange::new(input_date(start)?, input_date(end)?);
        update_to_js(self.browser.handle(PostEvent::ApplyDateRange(range)))
    }

    /// "Last N days" ending today.
    pub fn date_preset(&mut self, days: u32) -> Result<JsValue, JsValue> {
        let today = local_now().date();
        update_to_js(self.browser.handle(PostEvent::DatePreset { days, today }))
    }

    pub fn clear_date_range(&mut self) -> Result<JsValue, JsValue> {
        update_to_js(self.browser.handle(PostEvent::ClearDateRange))
    }

    /// The scroll sentinel is visible.
    pub fn load_more(&mut self) -> Result<JsValue, JsValue> {
        update_to_js(self.browser.handle(PostEvent::LoadMore))
    }

    pub fn page_rendered(&mut self) {
        self.browser.handle(PostEvent::PageRendered);
    }

    pub fn render_page(&self, start: usize, end: usize) -> String {
        self.browser.render_page(start..end, local_now())
    }

    pub fn count_label(&self) -> String {
        self.browser.count_label()
    }

    pub fn summary_html(&self) -> String {
        self.browser.search_summary().to_html()
    }

    pub fn date_line(&self) -> Option<String> {
        self.browser.date_line()
    }

    pub fn has_more(&self) -> bool {
        self.browser.has_more()
    }

    pub fn total(&self) -> usize {
        self.browser.total()
    }

    pub fn matched(&self) -> usize {
        self.browser.matched()
    }
}

/// The donors page.
#[wasm_bindgen]
pub struct DonorArchive {
    browser: DonorBrowser,
}

#[wasm_bindgen]
impl DonorArchive {
    #[wasm_bindgen(constructor)]
    pub fn new(json: &str, config: JsValue) -> Result<DonorArchive, JsValue> {
        let config = config_from(config)?;
        let donors = load_donors(json.as_bytes()).map_err(js_error)?;
        Ok(DonorArchive {
            browser: DonorBrowser::with_config(donors, &config),
        })
    }

    pub fn input(&mut self, text: String) {
        self.browser.handle(DonorEvent::QueryInput { text, at: clock() });
    }

    /// True when a pending query was applied and the list needs re-rendering.
    pub fn tick(&mut self) -> bool {
        self.browser.handle(DonorEvent::Tick(clock()))
    }

    pub fn submit(&mut self, text: String) -> bool {
        self.browser.handle(DonorEvent::QuerySubmit(text))
    }

    pub fn clear_query(&mut self) -> bool {
        self.browser.handle(DonorEvent::ClearQuery)
    }

    /// `{ amount: "25-100", borough: "K", intermediary: "yes", sort: "amount-desc" }`,
    /// every key optional.
    pub fn set_filters(&mut self, filters: JsValue) -> Result<bool, JsValue> {
        let filters: DonorFilters = from_value(filters).map_err(js_error)?;
        Ok(self.browser.handle(DonorEvent::SetFilters(filters)))
    }

    pub fn reset(&mut self) -> bool {
        self.browser.handle(DonorEvent::ResetAll)
    }

    pub fn render(&self) -> String {
        self.browser.render()
    }

    pub fn results_line(&self) -> String {
        self.browser.results_line()
    }

    pub fn count_label(&self) -> String {
        self.browser.count_label()
    }

    pub fn reset_label(&self) -> String {
        self.browser.reset_label().to_string()
    }

    pub fn is_filtering(&self) -> bool {
        self.browser.is_filtering()
    }

    /// Raw numbers: `{ totalAmount, donorCount, intermediaryAmount, averageAmount }`.
    pub fn analytics(&self) -> Result<JsValue, JsValue> {
        to_value(self.browser.analytics()).map_err(js_error)
    }

    /// The four dashboard cards, formatted.
    pub fn analytics_display(&self) -> Vec<String> {
        self.browser.analytics().display_values().to_vec()
    }
}

/// Escaped `text` with every match of `query` wrapped in `<mark>`.
#[wasm_bindgen]
pub fn highlight(text: &str, query: &str) -> String {
    crate::search::highlight(text, query)
}

/// Error panel for a failed posts fetch.
#[wasm_bindgen]
pub fn posts_error_html(message: &str) -> String {
    render::error_panel(render::POSTS_ERROR_TITLE, message)
}

/// Error panel for a failed donors fetch.
#[wasm_bindgen]
pub fn donors_error_html(message: &str) -> String {
    render::error_panel(render::DONORS_ERROR_TITLE, message)
}
