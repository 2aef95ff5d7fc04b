// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Human-facing numbers and dates, in US English.

use crate::filters::DateRange;
use crate::records::parse_post_date;
use chrono::{NaiveDate, NaiveDateTime};

/// `1234567` → `"1,234,567"`.
pub fn group_thousands(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

pub fn format_count(n: usize) -> String {
    group_thousands(n as u64)
}

/// Whole US dollars, half away from zero: `1234.5` → `"$1,235"`.
pub fn format_currency(amount: f64) -> String {
    if !amount.is_finite() {
        return "$0".to_string();
    }
    let rounded = amount.round();
    let dollars = group_thousands(rounded.abs() as u64);
    if rounded < 0.0 {
        format!("-${}", dollars)
    } else {
        format!("${}", dollars)
    }
}

/// Raw amount as typed: `400.0` → `"400"`, `12.5` → `"12.5"`.
pub fn format_plain_amount(amount: f64) -> String {
    format!("{}", amount)
}

/// Compact age of a post: `now`, `5m`, `3h`, `Jun 28`, or `Jun 28, 2024`.
pub fn format_relative(when: NaiveDateTime, now: NaiveDateTime) -> String {
    let diff = if now >= when { now - when } else { when - now };
    let minutes = diff.num_minutes();
    let hours = diff.num_hours();
    let days = diff.num_days();

    if minutes < 60 {
        if minutes == 0 {
            "now".to_string()
        } else {
            format!("{}m", minutes)
        }
    } else if hours < 24 {
        format!("{}h", hours)
    } else if days < 30 {
        when.format("%b %-d").to_string()
    } else {
        when.format("%b %-d, %Y").to_string()
    }
}

/// `June 28, 2025 at 10:56 AM`.
pub fn format_full(when: NaiveDateTime) -> String {
    when.format("%B %-d, %Y at %-I:%M %p").to_string()
}

/// Relative date for a raw `created_at`. Unreadable strings come back as-is.
pub fn format_post_date(raw: Option<&str>, now: NaiveDateTime) -> String {
    match raw {
        None => "Unknown date".to_string(),
        Some(raw) if raw.trim().is_empty() => "Unknown date".to_string(),
        Some(raw) => parse_post_date(raw)
            .map(|when| format_relative(when, now))
            .unwrap_or_else(|| raw.to_string()),
    }
}

/// Full date for a raw `created_at`, for hover titles.
pub fn format_full_post_date(raw: Option<&str>) -> String {
    match raw {
        None => "Unknown date".to_string(),
        Some(raw) if raw.trim().is_empty() => "Unknown date".to_string(),
        Some(raw) => parse_post_date(raw)
            .map(format_full)
            .unwrap_or_else(|| raw.to_string()),
    }
}

/// `Jan 1, 2025`.
pub fn format_short_date(date: NaiveDate) -> String {
    date.format("%b %-d, %Y").to_string()
}

/// `1/5/2025`.
pub fn format_numeric_date(date: NaiveDate) -> String {
    date.format("%-m/%-d/%Y").to_string()
}

/// `Jan 1, 2025 - Jan 31, 2025`, `Jan 1, 2025 onwards`, `up to Jan 31, 2025`.
pub fn format_date_range(range: &DateRange) -> Option<String> {
    match (range.start, range.end) {
        (Some(start), Some(end)) => Some(format!(
            "{} - {}",
            format_short_date(start),
            format_short_date(end)
        )),
        (Some(start), None) => Some(format!("{} onwards", format_short_date(start))),
        (None, Some(end)) => Some(format!("up to {}", format_short_date(end))),
        (None, None) => None,
    }
}
