// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Interactive state for the two archive views.
//!
//! A browser owns its records and every piece of derived state. Events go in
//! through `handle`; the caller renders whatever the browser says changed.
//! Time is always passed in, so nothing here reads a clock.

pub mod debounce;
pub mod donors;
pub mod pager;
pub mod posts;
pub mod summary;

pub use debounce::Debouncer;
pub use donors::{DonorBrowser, DonorEvent};
pub use pager::{PageRequest, Pager};
pub use posts::{PostBrowser, PostEvent, ViewUpdate};
pub use summary::{
    date_range_line, donor_count_label, donor_results_line, post_count_label, reset_button_label,
    SearchSummary,
};
