// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Runtime settings.
//!
//! Every field has a default, so an empty `{}` is a complete config and a
//! config file only needs the keys it changes:
//!
//! ```json
//! {
//!   "posts":  { "page_size": 50, "default_handle": "nycmayor" },
//!   "donors": { "fields": ["NAME", "CITY"] },
//!   "search": { "debounce_ms": 150 },
//!   "highlight": { "open": "<em>", "close": "</em>" }
//! }
//! ```

use crate::error::{Error, Result};
use crate::records::{Donor, Post};
use crate::search::{FieldSet, Marker};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use std::time::Duration;
use tracing::{debug, warn};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PostsConfig {
    pub page_size: usize,
    /// Searchable fields, joined in this order.
    pub fields: Vec<String>,
    /// Shown (and highlighted) when a post has no `user_screen_name`.
    pub default_handle: String,
}

impl Default for PostsConfig {
    fn default() -> Self {
        Self {
            page_size: 25,
            fields: vec!["text".into(), "user_screen_name".into(), "user_name".into()],
            default_handle: "ZohranKMamdani".into(),
        }
    }
}

impl PostsConfig {
    pub fn field_set(&self) -> FieldSet {
        known_fields(&self.fields, Post::FIELDS, "posts")
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DonorsConfig {
    /// Cards rendered at most.
    pub display_limit: usize,
    pub fields: Vec<String>,
}

impl Default for DonorsConfig {
    fn default() -> Self {
        Self {
            display_limit: 50,
            fields: ["NAME", "CITY", "STATE", "EMPCITY", "EMPSTATE", "INTERMEDIARY_NAME"]
                .into_iter()
                .map(String::from)
                .collect(),
        }
    }
}

impl DonorsConfig {
    pub fn field_set(&self) -> FieldSet {
        known_fields(&self.fields, Donor::FIELDS, "donors")
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    pub debounce_ms: u64,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self { debounce_ms: 300 }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub posts: PostsConfig,
    pub donors: DonorsConfig,
    pub search: SearchConfig,
    pub highlight: Marker,
}

impl Config {
    pub fn from_json(text: &str) -> serde_json::Result<Self> {
        serde_json::from_str(text)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path).map_err(|source| Error::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_json(&text).map_err(|source| Error::Config {
            path: path.to_path_buf(),
            source,
        })?;
        debug!(path = %path.display(), "loaded config");
        Ok(config)
    }

    /// Defaults when no path is given.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }

    pub fn debounce(&self) -> Duration {
        Duration::from_millis(self.search.debounce_ms)
    }
}

/// Keep the names the record type knows; warn about the rest.
fn known_fields(names: &[String], known: &[&str], dataset: &str) -> FieldSet {
    FieldSet::new(names.iter().filter(|name| {
        let ok = known.contains(&name.as_str());
        if !ok {
            warn!(dataset, field = %name, "ignoring unknown searchable field");
        }
        ok
    }).cloned())
}
