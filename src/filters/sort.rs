// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Donor ordering.
//!
//! Every comparator is total and every sort is stable, so donors that tie keep
//! their load order. Missing dates sort as if they were 1970-01-01.

use super::donor::ParseFilterError;
use crate::records::Donor;
use crate::util::normalize;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DonorSort {
    #[default]
    DateDesc,
    DateAsc,
    AmountDesc,
    AmountAsc,
    NameAsc,
    NameDesc,
}

impl DonorSort {
    pub const ALL: [DonorSort; 6] = [
        DonorSort::DateDesc,
        DonorSort::DateAsc,
        DonorSort::AmountDesc,
        DonorSort::AmountAsc,
        DonorSort::NameAsc,
        DonorSort::NameDesc,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            DonorSort::DateDesc => "date-desc",
            DonorSort::DateAsc => "date-asc",
            DonorSort::AmountDesc => "amount-desc",
            DonorSort::AmountAsc => "amount-asc",
            DonorSort::NameAsc => "name-asc",
            DonorSort::NameDesc => "name-desc",
        }
    }

    pub fn compare(self, a: &Donor, b: &Donor) -> Ordering {
        match self {
            DonorSort::DateDesc => date_key(b).cmp(&date_key(a)),
            DonorSort::DateAsc => date_key(a).cmp(&date_key(b)),
            DonorSort::AmountDesc => b.donation.total_cmp(&a.donation),
            DonorSort::AmountAsc => a.donation.total_cmp(&b.donation),
            DonorSort::NameAsc => collate(&a.name, &b.name),
            DonorSort::NameDesc => collate(&b.name, &a.name),
        }
    }
}

impl fmt::Display for DonorSort {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DonorSort {
    type Err = ParseFilterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Ok(DonorSort::default());
        }
        DonorSort::ALL
            .into_iter()
            .find(|sort| sort.as_str() == s)
            .ok_or_else(|| ParseFilterError::new("sort order", s))
    }
}

/// `NaiveDate::default()` is 1970-01-01.
fn date_key(donor: &Donor) -> NaiveDate {
    donor.donation_date.unwrap_or_default()
}

/// Accent- and case-insensitive order, raw text breaking ties.
pub fn collate(a: &str, b: &str) -> Ordering {
    normalize(a).cmp(&normalize(b)).then_with(|| a.cmp(b))
}

/// Stable in-place sort.
pub fn sort_donors(donors: &mut [&Donor], sort: DonorSort) {
    donors.sort_by(|a, b| sort.compare(a, b));
}
