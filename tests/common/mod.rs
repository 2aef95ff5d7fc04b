//! Shared test utilities and fixtures.

#![allow(dead_code)]

use gleaner::load::{load_donors_from_path, load_posts_from_path};
use gleaner::records::{Donor, Post};
use std::path::PathBuf;

// Re-export canonical test utilities from gleaner::testing
pub use gleaner::testing::{make_donor, make_full_post, make_post, synthetic_posts};

/// Directory holding the JSON and CSV fixtures.
pub const FIXTURES_DIR: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/tests/fixtures");

pub fn fixture(name: &str) -> PathBuf {
    PathBuf::from(FIXTURES_DIR).join(name)
}

/// `tests/fixtures/posts.json`, blank posts already dropped.
pub fn fixture_posts() -> Vec<Post> {
    load_posts_from_path(&fixture("posts.json")).expect("posts fixture should load")
}

pub fn fixture_donors() -> Vec<Donor> {
    load_donors_from_path(&fixture("donors.json")).expect("donors fixture should load")
}

pub fn post_texts<'a, I>(posts: I) -> Vec<&'a str>
where
    I: IntoIterator<Item = &'a Post>,
{
    posts.into_iter().map(|p| p.text.as_str()).collect()
}

pub fn donor_names<'a, I>(donors: I) -> Vec<&'a str>
where
    I: IntoIterator<Item = &'a Donor>,
{
    donors.into_iter().map(|d| d.name.as_str()).collect()
}
