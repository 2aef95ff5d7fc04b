// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! CSV export → posts archive.
//!
//! Scraper exports come as CSV with whatever columns the tool felt like
//! emitting. We keep every column, in order, and add a `link` permalink built
//! from the first column that looks like a post id. Rows without one are
//! skipped and counted.

use crate::error::{Error, Result};
use csv::StringRecord;
use serde::ser::{Serialize, SerializeMap, Serializer};
use std::fs::File;
use std::io::{BufWriter, Read, Write};
use std::path::{Path, PathBuf};
use tracing::{info, warn};

#[cfg(feature = "parallel")]
use indicatif::{ProgressBar, ProgressStyle};

/// One converted row: the CSV columns in header order, `link` included.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConvertedPost {
    columns: Vec<(String, String)>,
}

impl ConvertedPost {
    pub fn columns(&self) -> &[(String, String)] {
        &self.columns
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.columns
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    pub fn link(&self) -> Option<&str> {
        self.get("link")
    }
}

impl Serialize for ConvertedPost {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.columns.len()))?;
        for (key, value) in &self.columns {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ConvertReport {
    pub converted: usize,
    pub skipped: usize,
}

/// `https://x.com/{username}/status/{id}`
pub fn post_link(username: &str, id: &str) -> String {
    format!("https://x.com/{}/status/{}", username, id)
}

/// The first column whose header mentions `id` and whose value is all digits
/// once whitespace and quotes are stripped.
pub fn find_post_id<'r>(headers: &StringRecord, row: &'r StringRecord) -> Option<&'r str> {
    headers
        .iter()
        .zip(row.iter())
        .filter(|(header, _)| header.to_lowercase().contains("id"))
        .map(|(_, value)| value.trim().trim_matches(|c| c == '\'' || c == '"'))
        .find(|value| !value.is_empty() && value.bytes().all(|b| b.is_ascii_digit()))
}

/// Convert a CSV export read from `reader`.
pub fn convert_posts_csv<R: Read>(
    reader: R,
    username: &str,
) -> Result<(Vec<ConvertedPost>, ConvertReport)> {
    convert_with(reader, username, |_| {})
}

fn convert_with<R: Read>(
    reader: R,
    username: &str,
    mut on_row: impl FnMut(usize),
) -> Result<(Vec<ConvertedPost>, ConvertReport)> {
    let mut reader = csv::ReaderBuilder::new().flexible(true).from_reader(reader);
    let headers = reader.headers()?.clone();
    let link_column = headers.iter().position(|h| h == "link");

    let mut posts = Vec::new();
    let mut report = ConvertReport::default();
    for (row_number, record) in reader.records().enumerate() {
        let record = record?;
        on_row(row_number + 1);

        let Some(id) = find_post_id(&headers, &record) else {
            warn!(
                line = record.position().map(|p| p.line()),
                "skipping row without a numeric post id"
            );
            report.skipped += 1;
            continue;
        };
        let link = post_link(username, id);

        let mut columns: Vec<(String, String)> = headers
            .iter()
            .enumerate()
            .map(|(i, header)| (header.to_string(), record.get(i).unwrap_or("").to_string()))
            .collect();
        match link_column {
            Some(i) => columns[i].1 = link,
            None => columns.push(("link".to_string(), link)),
        }
        posts.push(ConvertedPost { columns });
        report.converted += 1;
    }
    Ok((posts, report))
}

/// Pretty-printed UTF-8 JSON array.
pub fn write_posts_json<W: Write>(writer: W, posts: &[ConvertedPost]) -> Result<()> {
    serde_json::to_writer_pretty(writer, posts).map_err(Error::Encode)
}

/// `posts.csv` → `posts.json`, next to the input.
pub fn default_output_path(input: &Path) -> PathBuf {
    input.with_extension("json")
}

/// Convert `input` and write the archive to `output`, replacing it if present.
pub fn convert_file(input: &Path, output: &Path, username: &str) -> Result<ConvertReport> {
    if output.exists() {
        warn!(path = %output.display(), "output file exists and will be overwritten");
    }
    let file = File::open(input).map_err(|source| Error::Io {
        path: input.to_path_buf(),
        source,
    })?;

    #[cfg(feature = "parallel")]
    let (posts, report) = {
        let spinner = ProgressBar::new_spinner();
        spinner.set_style(
            ProgressStyle::with_template("{spinner:.cyan} {prefix:<12} {pos} rows {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_spinner()),
        );
        spinner.set_prefix("Converting");
        let result = convert_with(file, username, |row| spinner.set_position(row as u64));
        spinner.finish_and_clear();
        result?
    };
    #[cfg(not(feature = "parallel"))]
    let (posts, report) = convert_with(file, username, |_| {})?;

    let out = File::create(output).map_err(|source| Error::Write {
        path: output.to_path_buf(),
        source,
    })?;
    let mut out = BufWriter::new(out);
    write_posts_json(&mut out, &posts)?;
    out.flush().map_err(|source| Error::Write {
        path: output.to_path_buf(),
        source,
    })?;

    info!(
        converted = report.converted,
        skipped = report.skipped,
        output = %output.display(),
        "converted posts"
    );
    Ok(report)
}
