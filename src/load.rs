// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! One-shot archive loading.
//!
//! Each archive is a single JSON array. Loading either returns every record
//! or fails as a whole; nothing partially decoded escapes. Records are
//! prepared here (blank posts dropped, donor positions stamped, donor dates
//! parsed) so the browsers can trust what they get.

use crate::error::{Dataset, Error, Result};
use crate::records::{Donor, Post};
use serde::de::DeserializeOwned;
use std::fs;
use std::io::Read;
use std::path::Path;
use tracing::{error, info, warn};

/// Decode a posts archive.
///
/// ```
/// let posts = gleaner::load::load_posts(br#"[{"text": "Freeze the rent"}, {"text": "  "}]"#).unwrap();
/// assert_eq!(posts.len(), 1);
/// ```
pub fn load_posts(bytes: &[u8]) -> Result<Vec<Post>> {
    let mut posts: Vec<Post> = decode_array(bytes, Dataset::Posts)?;
    let decoded = posts.len();
    posts.retain(|post| !post.is_blank());

    let undated = posts
        .iter()
        .filter(|post| post.created_at.is_some() && post.created().is_none())
        .count();
    if undated > 0 {
        warn!(undated, "posts with unrecognised created_at dates");
    }
    info!(
        loaded = posts.len(),
        blank = decoded - posts.len(),
        "loaded posts"
    );
    Ok(posts)
}

pub fn load_posts_from_reader<R: Read>(reader: R) -> Result<Vec<Post>> {
    load_posts(&read_all(reader, Dataset::Posts)?)
}

pub fn load_posts_from_path(path: &Path) -> Result<Vec<Post>> {
    read_path(path).and_then(|bytes| load_posts(&bytes)).map_err(|err| {
        error!(path = %path.display(), %err, "failed to load posts");
        err
    })
}

/// Decode a donations archive. Every donor's `id` is its array position.
pub fn load_donors(bytes: &[u8]) -> Result<Vec<Donor>> {
    let donors: Vec<Donor> = decode_array(bytes, Dataset::Donors)?;
    let donors: Vec<Donor> = donors
        .into_iter()
        .enumerate()
        .map(|(i, donor)| donor.prepared(i))
        .collect();

    let undated = donors
        .iter()
        .filter(|donor| {
            donor
                .date_of_donation
                .as_deref()
                .is_some_and(|raw| !raw.trim().is_empty())
                && donor.donation_date.is_none()
        })
        .count();
    if undated > 0 {
        warn!(undated, "donors with unrecognised DATE OF DONATION values");
    }
    info!(loaded = donors.len(), "loaded donors");
    Ok(donors)
}

pub fn load_donors_from_reader<R: Read>(reader: R) -> Result<Vec<Donor>> {
    load_donors(&read_all(reader, Dataset::Donors)?)
}

pub fn load_donors_from_path(path: &Path) -> Result<Vec<Donor>> {
    read_path(path).and_then(|bytes| load_donors(&bytes)).map_err(|err| {
        error!(path = %path.display(), %err, "failed to load donors");
        err
    })
}

fn decode_array<T: DeserializeOwned>(bytes: &[u8], dataset: Dataset) -> Result<Vec<T>> {
    // Objects, scalars and empty input are refused before serde sees them.
    let first = bytes.iter().find(|b| !b.is_ascii_whitespace());
    if first != Some(&b'[') {
        return Err(Error::NotAnArray { dataset });
    }
    serde_json::from_slice(bytes).map_err(|source| Error::Json { dataset, source })
}

fn read_all<R: Read>(mut reader: R, dataset: Dataset) -> Result<Vec<u8>> {
    let mut bytes = Vec::new();
    reader
        .read_to_end(&mut bytes)
        .map_err(|source| Error::Read { dataset, source })?;
    Ok(bytes)
}

fn read_path(path: &Path) -> Result<Vec<u8>> {
    fs::read(path).map_err(|source| Error::Io {
        path: path.to_path_buf(),
        source,
    })
}
