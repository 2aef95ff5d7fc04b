// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! CLI definitions for the gleaner command-line interface.
//!
//! Four subcommands: `posts` and `donors` search an archive and print a page
//! of results (boxed for the terminal, or as the same HTML the web page gets),
//! `highlight` marks up one string, and `convert` turns a scraper's CSV export
//! into a posts archive.

pub mod display;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "gleaner",
    about = "Search and highlight archived posts and donation records",
    version
)]
pub struct Cli {
    /// JSON config file (page size, searchable fields, highlight markers)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// More log output on stderr (-v info, -vv debug); RUST_LOG wins if set
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Search a posts archive
    Posts {
        /// Posts JSON file
        file: PathBuf,

        /// Search query (all words must match)
        query: Option<String>,

        /// Earliest day to include (YYYY-MM-DD or M/D/YYYY)
        #[arg(long)]
        from: Option<String>,

        /// Latest day to include (YYYY-MM-DD or M/D/YYYY)
        #[arg(long)]
        to: Option<String>,

        /// Only the last N days, ending today
        #[arg(long, conflicts_with_all = ["from", "to"])]
        last_days: Option<u32>,

        /// Which page of results to show, starting at 1
        #[arg(long, default_value = "1")]
        page: usize,

        /// Print the page as HTML cards instead of terminal boxes
        #[arg(long)]
        html: bool,
    },

    /// Search a donations archive
    Donors {
        /// Donors JSON file
        file: PathBuf,

        /// Search query (all words must match)
        query: Option<String>,

        /// Amount bracket: 0-25, 25-100, 100-500 or 500+
        #[arg(long)]
        amount: Option<String>,

        /// Borough code: M, K, Q, X or R
        #[arg(long)]
        borough: Option<String>,

        /// Only donations with (yes) or without (no) an intermediary
        #[arg(long)]
        intermediary: Option<String>,

        /// date-desc, date-asc, amount-desc, amount-asc, name-asc or name-desc
        #[arg(long, default_value = "date-desc")]
        sort: String,

        /// Show the dashboard totals
        #[arg(long)]
        stats: bool,

        /// Print the cards as HTML instead of terminal boxes
        #[arg(long)]
        html: bool,
    },

    /// Highlight every match of a query in a piece of text (prints HTML)
    Highlight {
        text: String,
        query: String,
    },

    /// Convert a CSV export of posts into a posts archive
    Convert {
        /// CSV file with a header row
        csv: PathBuf,

        /// Account the posts belong to, used in permalinks
        #[arg(short, long)]
        username: String,

        /// Output file (default: the CSV path with a .json extension)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}
