// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

use clap::Parser;
use std::path::Path;

use gleaner::config::Config;
use gleaner::convert::{convert_file, default_output_path};
use gleaner::filters::{AmountBracket, DateRange, DonorFilters, ParseFilterError};
use gleaner::format::{format_currency, format_numeric_date, format_post_date};
use gleaner::load::{load_donors_from_path, load_posts_from_path};
use gleaner::records::parse_donor_date;
use gleaner::session::{DonorBrowser, DonorEvent, PostBrowser, PostEvent, ViewUpdate};
use gleaner::{highlight, Error, Result};
use tracing_subscriber::EnvFilter;

mod cli;
use cli::display::*;
use cli::{Cli, Commands};

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Err(e) = run(cli) {
        failure(&e.to_string());
        std::process::exit(1);
    }
}

/// `RUST_LOG` if set, else warnings, raised by each `-v`.
fn init_tracing(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run(cli: Cli) -> Result<()> {
    let config = Config::load_or_default(cli.config.as_deref())?;

    match cli.command {
        Commands::Posts {
            file,
            query,
            from,
            to,
            last_days,
            page,
            html,
        } => {
            let range = match last_days {
                Some(days) => DateRange::last_days(days, chrono::Local::now().date_naive()),
                None => DateRange::new(parse_day(from.as_deref())?, parse_day(to.as_deref())?),
            };
            run_posts(&file, &config, query, range, page, html)
        }
        Commands::Donors {
            file,
            query,
            amount,
            borough,
            intermediary,
            sort,
            stats,
            html,
        } => {
            let filters = DonorFilters {
                amount: amount
                    .as_deref()
                    .map(str::parse::<AmountBracket>)
                    .transpose()?,
                borough: borough.map(|b| b.trim().to_uppercase()),
                intermediary: intermediary.as_deref().unwrap_or("").parse()?,
                sort: sort.parse()?,
            };
            run_donors(&file, &config, query, filters, stats, html)
        }
        Commands::Highlight { text, query } => {
            println!("{}", highlight(&text, &query));
            Ok(())
        }
        Commands::Convert {
            csv,
            username,
            output,
        } => {
            let output = output.unwrap_or_else(|| default_output_path(&csv));
            let report = convert_file(&csv, &output, &username)?;
            success(&format!(
                "Converted {} posts to {}",
                report.converted,
                output.display()
            ));
            if report.skipped > 0 {
                warning(&format!(
                    "Skipped {} rows without a numeric post id",
                    report.skipped
                ));
            }
            Ok(())
        }
    }
}

/// A day on the command line; impossible dates are refused, not ignored.
fn parse_day(raw: Option<&str>) -> Result<Option<chrono::NaiveDate>> {
    match raw.map(str::trim).filter(|s| !s.is_empty()) {
        None => Ok(None),
        Some(raw) => parse_donor_date(raw)
            .map(Some)
            .ok_or_else(|| Error::Filter(ParseFilterError::new("date", raw))),
    }
}

fn run_posts(
    file: &Path,
    config: &Config,
    query: Option<String>,
    range: DateRange,
    page: usize,
    html: bool,
) -> Result<()> {
    let posts = load_posts_from_path(file)?;
    let mut browser = PostBrowser::with_config(posts, config);

    if range.is_active() {
        if let ViewUpdate::Rejected(err) = browser.handle(PostEvent::ApplyDateRange(range)) {
            return Err(err.into());
        }
    }
    let mut update = browser.handle(PostEvent::QuerySubmit(query.unwrap_or_default()));

    // Walk the pager forward the same way scrolling would.
    for _ in 1..page.max(1) {
        browser.handle(PostEvent::PageRendered);
        update = browser.handle(PostEvent::LoadMore);
    }
    let shown = match update {
        ViewUpdate::Reset(range) | ViewUpdate::Append(range) => range,
        _ => 0..0,
    };

    let now = chrono::Local::now().naive_local();
    if html {
        println!("{}", browser.render_page(shown, now));
        return Ok(());
    }

    section_top(&format!("POSTS · {}", browser.count_label()));
    let summary = browser.search_summary().to_string();
    for line in summary.lines() {
        row(&format!("  {}", line));
    }
    if let Some(line) = browser.date_line() {
        row(&format!("  {}", line.trim_start_matches(" • ")));
    }

    if browser.matched() == 0 {
        section_mid();
        row(&format!("  {}", dim("No posts found")));
    } else if shown.is_empty() {
        section_mid();
        row(&format!("  {}", dim(&format!("Page {} is past the end", page))));
    }

    let handle_fallback = config.posts.default_handle.as_str();
    for post in browser.page(shown.clone()) {
        section_mid();
        let handle = post.user_screen_name.as_deref().unwrap_or(handle_fallback);
        row(&format!(
            "  {} {} {}",
            paint_bold(Role::Handle, &format!("@{}", handle)),
            dim(&format_post_date(post.created_at.as_deref(), now)),
            kind_badge(post.kind)
        ));
        paragraph(&terminal_highlight(&post.text, browser.highlighter()));
        if let Some(link) = &post.link {
            row(&format!("  {}", dim(link)));
        }
    }
    section_bot();

    if browser.has_more() && !shown.is_empty() {
        eprintln!(
            "{}",
            dim(&format!(
                "showing {}-{} of {}; --page {} for more",
                shown.start + 1,
                shown.end,
                browser.matched(),
                page.max(1) + 1
            ))
        );
    }
    Ok(())
}

fn run_donors(
    file: &Path,
    config: &Config,
    query: Option<String>,
    filters: DonorFilters,
    stats: bool,
    html: bool,
) -> Result<()> {
    let donors = load_donors_from_path(file)?;
    let mut browser = DonorBrowser::with_config(donors, config);
    browser.handle(DonorEvent::SetFilters(filters));
    browser.handle(DonorEvent::QuerySubmit(query.unwrap_or_default()));

    if html {
        println!("{}", browser.render());
        return Ok(());
    }

    if stats {
        let stats = browser.analytics();
        let [total, count, via, average] = stats.display_values();
        section_top("DASHBOARD");
        for (label, value) in [
            ("Total raised", total),
            ("Donors", count),
            ("Via intermediaries", via),
            ("Average donation", average),
        ] {
            row(&format!("  {}{}", pad_right(label, 22), paint_bold(Role::Money, &value)));
        }
        section_bot();
    }

    section_top(&format!("DONORS · {}", browser.count_label()));
    row(&format!("  {}", browser.results_line()));
    for donor in browser.visible() {
        section_mid();
        let name = terminal_highlight(&donor.name, browser.highlighter());
        let amount = amount_colored(&format_currency(donor.donation), donor.donation);
        row(&format!("  {}{}", pad_right(&name, 60), amount));

        let mut place = format!("{}, {}", donor.city, donor.state);
        if let Some(borough) = donor.borough() {
            place.push_str(&format!(" ({})", borough));
        }
        let date = donor
            .donation_date
            .map(format_numeric_date)
            .unwrap_or_else(|| "Unknown".to_string());
        row(&format!("  {}  {}", dim(&place), dim(&date)));
        if donor.has_intermediary() {
            row(&format!(
                "  Via {}",
                terminal_highlight(&donor.intermediary_name, browser.highlighter())
            ));
        }
    }
    section_bot();
    Ok(())
}
