// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Archived social-media posts.

use super::dates::parse_post_date;
use super::lenient;
use crate::search::Searchable;
use chrono::NaiveDateTime;
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::str::FromStr;

/// What kind of post this was on the original platform.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
pub enum PostKind {
    #[default]
    Post,
    Reply,
    Repost,
}

impl PostKind {
    pub fn as_str(self) -> &'static str {
        match self {
            PostKind::Post => "Post",
            PostKind::Reply => "Reply",
            PostKind::Repost => "Repost",
        }
    }

    /// Material Symbols icon name shown next to the kind label.
    pub fn icon(self) -> &'static str {
        match self {
            PostKind::Post => "edit_note",
            PostKind::Reply => "reply",
            PostKind::Repost => "repeat",
        }
    }
}

impl fmt::Display for PostKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PostKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "post" | "" => Ok(PostKind::Post),
            "reply" => Ok(PostKind::Reply),
            "repost" | "retweet" => Ok(PostKind::Repost),
            other => Err(format!("unknown post type '{}'", other)),
        }
    }
}

/// Unknown or missing kinds fall back to [`PostKind::Post`].
impl<'de> Deserialize<'de> for PostKind {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = lenient::string(deserializer)?;
        Ok(raw.parse().unwrap_or_default())
    }
}

/// One archived post. Keys other than these are ignored on load.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Post {
    #[serde(default, deserialize_with = "lenient::string")]
    pub text: String,
    #[serde(default, deserialize_with = "lenient::opt_string")]
    pub user_screen_name: Option<String>,
    #[serde(default, deserialize_with = "lenient::opt_string")]
    pub user_name: Option<String>,
    #[serde(default, deserialize_with = "lenient::opt_string")]
    pub link: Option<String>,
    #[serde(rename = "type", default)]
    pub kind: PostKind,
    #[serde(default, deserialize_with = "lenient::opt_string")]
    pub created_at: Option<String>,
}

impl Post {
    /// Field names a [`FieldSet`](crate::search::FieldSet) may refer to.
    pub const FIELDS: &'static [&'static str] =
        &["text", "user_screen_name", "user_name", "link", "type", "created_at"];

    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Self::default()
        }
    }

    /// Posts with nothing but whitespace are not worth showing.
    pub fn is_blank(&self) -> bool {
        self.text.trim().is_empty()
    }

    /// Parsed `created_at`, if there is one we can read.
    pub fn created(&self) -> Option<NaiveDateTime> {
        self.created_at.as_deref().and_then(parse_post_date)
    }
}

impl Searchable for Post {
    fn field(&self, name: &str) -> Option<&str> {
        match name {
            "text" => Some(&self.text),
            "user_screen_name" => self.user_screen_name.as_deref(),
            "user_name" => self.user_name.as_deref(),
            "link" => self.link.as_deref(),
            "type" => Some(self.kind.as_str()),
            "created_at" => self.created_at.as_deref(),
            _ => None,
        }
    }
}
