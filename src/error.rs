// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Crate-wide error type.
//!
//! Only I/O and decoding can fail. Search, matching and highlighting are
//! total functions and never return `Result`.

use crate::filters::{DateRangeError, ParseFilterError};
use std::fmt;
use std::path::PathBuf;

/// Which archive an error is about.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dataset {
    Posts,
    Donors,
}

impl fmt::Display for Dataset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Dataset::Posts => "posts",
            Dataset::Donors => "donors",
        })
    }
}

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to read {dataset} data: {source}")]
    Read {
        dataset: Dataset,
        source: std::io::Error,
    },

    #[error("malformed {dataset} JSON: {source}")]
    Json {
        dataset: Dataset,
        source: serde_json::Error,
    },

    #[error("{dataset} data must be a JSON array")]
    NotAnArray { dataset: Dataset },

    #[error("invalid config {}: {source}", path.display())]
    Config {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to encode JSON: {0}")]
    Encode(#[source] serde_json::Error),

    #[error(transparent)]
    DateRange(#[from] DateRangeError),

    #[error(transparent)]
    Filter(#[from] ParseFilterError),
}

pub type Result<T> = std::result::Result<T, Error>;
