// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Inclusive calendar-day ranges for the post view.
//!
//! A bound is a calendar day, not an instant: `start` admits everything from
//! 00:00:00 that day, `end` admits everything through 23:59:59. A range with
//! neither bound is inactive and lets every post through, dated or not. An
//! active range never admits a post whose date is missing or unreadable.

use chrono::{Days, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Why a range was rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DateRangeError {
    /// Both bounds are set and `start` falls after `end`.
    StartAfterEnd { start: NaiveDate, end: NaiveDate },
}

impl fmt::Display for DateRangeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DateRangeError::StartAfterEnd { start, end } => write!(
                f,
                "Start date must be before end date ({} is after {})",
                start, end
            ),
        }
    }
}

impl std::error::Error for DateRangeError {}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DateRange {
    pub start: Option<NaiveDate>,
    pub end: Option<NaiveDate>,
}

impl DateRange {
    pub fn new(start: Option<NaiveDate>, end: Option<NaiveDate>) -> Self {
        Self { start, end }
    }

    /// The inactive range.
    pub fn all() -> Self {
        Self::default()
    }

    /// The "last N days" preset: `today - days` through the end of `today`.
    pub fn last_days(days: u32, today: NaiveDate) -> Self {
        let start = today
            .checked_sub_days(Days::new(u64::from(days)))
            .unwrap_or(NaiveDate::MIN);
        Self {
            start: Some(start),
            end: Some(today),
        }
    }

    pub fn is_active(&self) -> bool {
        self.start.is_some() || self.end.is_some()
    }

    pub fn validate(&self) -> Result<(), DateRangeError> {
        match (self.start, self.end) {
            (Some(start), Some(end)) if start > end => {
                Err(DateRangeError::StartAfterEnd { start, end })
            }
            _ => Ok(()),
        }
    }

    /// First admitted instant.
    pub fn start_bound(&self) -> Option<NaiveDateTime> {
        self.start.and_then(|d| d.and_hms_opt(0, 0, 0))
    }

    /// Last admitted instant.
    pub fn end_bound(&self) -> Option<NaiveDateTime> {
        self.end.and_then(|d| d.and_hms_opt(23, 59, 59))
    }

    pub fn contains(&self, when: Option<NaiveDateTime>) -> bool {
        if !self.is_active() {
            return true;
        }
        let Some(when) = when else {
            return false;
        };
        if self.start_bound().is_some_and(|start| when < start) {
            return false;
        }
        if self.end_bound().is_some_and(|end| when > end) {
            return false;
        }
        true
    }
}
