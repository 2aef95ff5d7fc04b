// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Test utilities shared across unit tests, integration tests and benches.
//!
//! This module is always compiled but hidden from documentation.

#![doc(hidden)]

use crate::records::{Donor, Post, PostKind};

/// A post with text and a creation date, everything else defaulted.
pub fn make_post(text: &str, created_at: &str) -> Post {
    Post {
        created_at: Some(created_at.to_string()),
        ..Post::new(text)
    }
}

/// A post with every field filled in.
pub fn make_full_post(text: &str, handle: &str, name: &str, kind: PostKind) -> Post {
    Post {
        user_screen_name: Some(handle.to_string()),
        user_name: Some(name.to_string()),
        link: Some(format!("https://x.com/{}/status/1", handle)),
        kind,
        ..Post::new(text)
    }
}

/// A Manhattan donor paying online. `date` may be any donor date format.
pub fn make_donor(name: &str, amount: f64, date: &str) -> Donor {
    Donor {
        name: name.to_string(),
        city: "New York".to_string(),
        state: "NY".to_string(),
        zip: "10001".to_string(),
        donation: amount,
        borough_code: "M".to_string(),
        pay_method: "4".to_string(),
        date_of_donation: Some(date.to_string()),
        ..Donor::default()
    }
}

/// `n` posts with a rotating vocabulary, one per day from 2025-01-01.
pub fn synthetic_posts(n: usize) -> Vec<Post> {
    const WORDS: &[&str] = &[
        "rent", "freeze", "buses", "childcare", "groceries", "housing", "tenants", "transit",
        "wages", "schools", "parks", "Bronx", "Queens", "Brooklyn", "café", "organizing",
    ];
    (0..n)
        .map(|i| {
            let text = (0..12)
                .map(|j| WORDS[(i * 7 + j * 3) % WORDS.len()])
                .collect::<Vec<_>>()
                .join(" ");
            let day = i % 365;
            let created = format!("{}/{}/2025 12:00", day / 31 + 1, day % 28 + 1);
            make_post(&text, &created)
        })
        .collect()
}
