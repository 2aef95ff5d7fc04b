// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Categorical and numeric donor filters.
//!
//! Each filter is an independent predicate; [`DonorFilters::matches`] ANDs
//! them. The text query is not part of this struct, it goes through the shared
//! search engine first.

use super::sort::DonorSort;
use crate::records::Donor;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A filter value we do not recognize.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseFilterError {
    what: &'static str,
    value: String,
}

impl ParseFilterError {
    pub fn new(what: &'static str, value: &str) -> Self {
        Self {
            what,
            value: value.to_string(),
        }
    }
}

impl fmt::Display for ParseFilterError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown {} '{}'", self.what, self.value)
    }
}

impl std::error::Error for ParseFilterError {}

/// Donation amount brackets. Lower bounds are exclusive except for the first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AmountBracket {
    #[serde(rename = "0-25")]
    UpTo25,
    #[serde(rename = "25-100")]
    From25To100,
    #[serde(rename = "100-500")]
    From100To500,
    #[serde(rename = "500+")]
    Over500,
}

impl AmountBracket {
    pub const ALL: [AmountBracket; 4] = [
        AmountBracket::UpTo25,
        AmountBracket::From25To100,
        AmountBracket::From100To500,
        AmountBracket::Over500,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            AmountBracket::UpTo25 => "0-25",
            AmountBracket::From25To100 => "25-100",
            AmountBracket::From100To500 => "100-500",
            AmountBracket::Over500 => "500+",
        }
    }

    pub fn contains(self, amount: f64) -> bool {
        match self {
            AmountBracket::UpTo25 => (0.0..=25.0).contains(&amount),
            AmountBracket::From25To100 => amount > 25.0 && amount <= 100.0,
            AmountBracket::From100To500 => amount > 100.0 && amount <= 500.0,
            AmountBracket::Over500 => amount > 500.0,
        }
    }
}

impl fmt::Display for AmountBracket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AmountBracket {
    type Err = ParseFilterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        AmountBracket::ALL
            .into_iter()
            .find(|b| b.as_str() == s)
            .ok_or_else(|| ParseFilterError::new("amount bracket", s))
    }
}

/// Whether the donation came through an intermediary (bundler).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IntermediaryFilter {
    #[default]
    Any,
    Yes,
    No,
}

impl IntermediaryFilter {
    pub fn matches(self, has_intermediary: bool) -> bool {
        match self {
            IntermediaryFilter::Any => true,
            IntermediaryFilter::Yes => has_intermediary,
            IntermediaryFilter::No => !has_intermediary,
        }
    }
}

impl FromStr for IntermediaryFilter {
    type Err = ParseFilterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "" | "any" => Ok(IntermediaryFilter::Any),
            "yes" => Ok(IntermediaryFilter::Yes),
            "no" => Ok(IntermediaryFilter::No),
            other => Err(ParseFilterError::new("intermediary filter", other)),
        }
    }
}

/// Everything the donor toolbar can set, besides the query.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DonorFilters {
    pub amount: Option<AmountBracket>,
    /// Raw `BOROUGHCD` code to match exactly.
    pub borough: Option<String>,
    pub intermediary: IntermediaryFilter,
    pub sort: DonorSort,
}

impl DonorFilters {
    /// True when anything differs from the defaults, sort order included.
    pub fn is_active(&self) -> bool {
        self.amount.is_some()
            || self.borough.as_deref().is_some_and(|b| !b.is_empty())
            || self.intermediary != IntermediaryFilter::Any
            || self.sort != DonorSort::default()
    }

    pub fn matches(&self, donor: &Donor) -> bool {
        if let Some(bracket) = self.amount {
            if !bracket.contains(donor.donation) {
                return false;
            }
        }
        if let Some(code) = self.borough.as_deref().filter(|c| !c.is_empty()) {
            if donor.borough_code != code {
                return false;
            }
        }
        self.intermediary.matches(donor.has_intermediary())
    }
}
