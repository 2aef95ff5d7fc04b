// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Secondary filters that sit beside the text search.
//!
//! Text search narrows by meaning; these narrow by date, money, place and
//! provenance. They compose with the text filter by plain AND and know
//! nothing about tokens.

pub mod date_range;
pub mod donor;
pub mod sort;

pub use date_range::{DateRange, DateRangeError};
pub use donor::{AmountBracket, DonorFilters, IntermediaryFilter, ParseFilterError};
pub use sort::{collate, sort_donors, DonorSort};
