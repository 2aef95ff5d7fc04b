// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for archive decoding.
//!
//! Loading either yields every record or an error. Whatever decodes must be
//! safe to search, sort and render.

#![no_main]

use gleaner::filters::{sort_donors, DonorSort};
use gleaner::load::{load_donors, load_posts};
use gleaner::records::Donor;
use gleaner::render::donor_card;
use gleaner::Highlighter;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|bytes: &[u8]| {
    if let Ok(posts) = load_posts(bytes) {
        assert!(posts.iter().all(|p| !p.is_blank()));
    }

    if let Ok(donors) = load_donors(bytes) {
        assert!(donors.iter().enumerate().all(|(i, d)| d.id == i));

        let highlighter = Highlighter::new("a");
        for sort in DonorSort::ALL {
            let mut view: Vec<&Donor> = donors.iter().collect();
            sort_donors(&mut view, sort);
            assert_eq!(view.len(), donors.len());
        }
        for donor in &donors {
            let _ = donor_card(donor, &highlighter);
        }
    }
});
