// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Headline numbers for the donor dashboard.

use crate::format::{format_count, format_currency};
use crate::records::Donor;
use serde::Serialize;

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DonorAnalytics {
    pub total_amount: f64,
    pub donor_count: usize,
    /// Sum of donations that came through an intermediary.
    pub intermediary_amount: f64,
    /// `total_amount / donor_count`, or 0 with no donors.
    pub average_amount: f64,
}

impl DonorAnalytics {
    pub fn compute<'a, I>(donors: I) -> Self
    where
        I: IntoIterator<Item = &'a Donor>,
    {
        let mut stats = Self::default();
        for donor in donors {
            stats.total_amount += donor.donation;
            stats.donor_count += 1;
            if donor.has_intermediary() {
                stats.intermediary_amount += donor.donation;
            }
        }
        if stats.donor_count > 0 {
            stats.average_amount = stats.total_amount / stats.donor_count as f64;
        }
        stats
    }

    /// `[total, donors, via intermediaries, average]`, formatted for display.
    pub fn display_values(&self) -> [String; 4] {
        [
            format_currency(self.total_amount),
            format_count(self.donor_count),
            format_currency(self.intermediary_amount),
            format_currency(self.average_amount),
        ]
    }
}
