// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Date literals found in the two archives.
//!
//! Neither parser ever fails loudly. A string we cannot read is `None`, and the
//! date-range filter decides what `None` means (excluded whenever a bound is
//! set). Impossible calendar dates like `2/30/2025` are `None` too; they are
//! not rolled over into March.

use chrono::{DateTime, NaiveDate, NaiveDateTime};

/// Date-and-time layouts tried in order. The archive export writes the first.
const POST_DATETIME_FORMATS: &[&str] = &[
    "%m/%d/%Y %H:%M",
    "%m/%d/%Y %H:%M:%S",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M",
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
];

/// Date-only layouts; these land on midnight.
const POST_DATE_FORMATS: &[&str] = &["%m/%d/%Y", "%Y-%m-%d"];

/// Layouts used by the donation export, most common first.
const DONOR_DATE_FORMATS: &[&str] = &["%m/%d/%Y", "%Y-%m-%d", "%m-%d-%Y"];

/// Parse a post's `created_at`.
///
/// Accepts `M/D/YYYY H:MM` (the export format), `M/D/YYYY`, ISO dates with or
/// without a time, and RFC 3339 timestamps. RFC 3339 keeps the wall-clock time
/// as written and drops the offset.
///
/// ```
/// use gleaner::records::parse_post_date;
///
/// let dt = parse_post_date("6/28/2025 10:56").unwrap();
/// assert_eq!(dt.to_string(), "2025-06-28 10:56:00");
/// assert!(parse_post_date("yesterday-ish").is_none());
/// ```
pub fn parse_post_date(raw: &str) -> Option<NaiveDateTime> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.naive_local());
    }

    POST_DATETIME_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(raw, fmt).ok())
        .or_else(|| {
            POST_DATE_FORMATS
                .iter()
                .find_map(|fmt| NaiveDate::parse_from_str(raw, fmt).ok())
                .and_then(|d| d.and_hms_opt(0, 0, 0))
        })
}

/// Parse a donor's `DATE OF DONATION`.
///
/// `M/D/YYYY`, `YYYY-MM-DD` and `MM-DD-YYYY`, then anything
/// [`parse_post_date`] understands (time of day discarded).
pub fn parse_donor_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }

    DONOR_DATE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(raw, fmt).ok())
        .or_else(|| parse_post_date(raw).map(|dt| dt.date()))
}
