// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! HTML fragments for the browser views.
//!
//! Every byte of record text reaches the output through either
//! [`escape_html`] or a [`Highlighter`] (which escapes too). Nothing here
//! concatenates raw data into markup.

use crate::format::{
    format_currency, format_full_post_date, format_numeric_date, format_plain_amount,
    format_post_date,
};
use crate::records::{Donor, Post};
use crate::search::Highlighter;
use crate::util::escape_html;
use chrono::NaiveDateTime;

pub const POSTS_ERROR_TITLE: &str = "Failed to Load Posts";
pub const DONORS_ERROR_TITLE: &str = "Error Loading Donors";

/// One post card.
pub fn post_card(
    post: &Post,
    highlighter: &Highlighter,
    now: NaiveDateTime,
    default_handle: &str,
) -> String {
    let handle = post.user_screen_name.as_deref().unwrap_or(default_handle);
    let link = escape_html(post.link.as_deref().unwrap_or("#"));
    let kind = post.kind;

    format!(
        concat!(
            "<article class=\"post\">",
            "<div class=\"meta\">",
            "<span class=\"handle\">{handle}</span>",
            "<a href=\"{link}\" target=\"_blank\" rel=\"noopener noreferrer\" class=\"date\" title=\"{full}\">{relative}</a>",
            "<span class=\"post-type {kind_class}\">",
            "<span class=\"material-symbols-outlined\">{icon}</span><span>{kind}</span>",
            "</span>",
            "</div>",
            "<div class=\"text\">{text}</div>",
            "</article>"
        ),
        handle = highlighter.highlight(handle),
        link = link,
        full = escape_html(&format_full_post_date(post.created_at.as_deref())),
        relative = escape_html(&format_post_date(post.created_at.as_deref(), now)),
        kind_class = kind.as_str().to_ascii_lowercase(),
        icon = kind.icon(),
        kind = kind,
        text = highlighter.highlight(&post.text),
    )
}

/// One donor card. Pass an inactive highlighter for plain escaping.
pub fn donor_card(donor: &Donor, highlighter: &Highlighter) -> String {
    let mut out = String::with_capacity(512);

    out.push_str("<div class=\"donor-card\"><div class=\"donor-header\"><div>");
    out.push_str(&format!(
        "<div class=\"donor-name\">{}</div>",
        highlighter.highlight(&donor.name)
    ));

    out.push_str("<div class=\"donor-location\">");
    out.push_str(&format!(
        "{}, {} {}",
        highlighter.highlight(&donor.city),
        escape_html(&donor.state),
        escape_html(&donor.zip)
    ));
    if let Some(borough) = donor.borough() {
        out.push_str(&format!(" ({})", borough));
    }
    out.push_str("</div></div>");

    out.push_str("<div class=\"donor-amount\">");
    out.push_str(&format_currency(donor.donation));
    if donor.match_amount > 0.0 {
        out.push_str(&format!(
            " (+${} match)",
            format_plain_amount(donor.match_amount)
        ));
    }
    out.push_str("</div></div>");

    out.push_str("<div class=\"donor-details\">");
    if !donor.emp_city.trim().is_empty() {
        out.push_str(&detail(
            "Employment",
            &format!(
                "{}, {}",
                highlighter.highlight(&donor.emp_city),
                escape_html(&donor.emp_state)
            ),
        ));
    }
    out.push_str(&detail("Payment Method", donor.payment_method().label()));
    if donor.previous_donation > 0.0 {
        out.push_str(&detail(
            "Previous Donations",
            &format!("${}", format_plain_amount(donor.previous_donation)),
        ));
    }
    out.push_str("</div>");

    let date = match (donor.donation_date, donor.date_of_donation.as_deref()) {
        (Some(date), _) => format_numeric_date(date),
        (None, Some(raw)) => escape_html(raw),
        (None, None) => "Unknown".to_string(),
    };
    out.push_str("<div class=\"donor-footer\">");
    out.push_str(&format!("<div class=\"donor-date\">{}</div>", date));
    if donor.has_intermediary() {
        out.push_str(&format!(
            "<div class=\"donor-intermediary\">Via {}</div>",
            highlighter.highlight(&donor.intermediary_name)
        ));
    }
    out.push_str("</div></div>");
    out
}

/// `value_html` must already be escaped.
fn detail(label: &str, value_html: &str) -> String {
    format!(
        "<div class=\"donor-detail\"><div class=\"donor-detail-label\">{}</div><div class=\"donor-detail-value\">{}</div></div>",
        label, value_html
    )
}

/// Load failure panel. The message is shown verbatim, escaped.
pub fn error_panel(title: &str, message: &str) -> String {
    format!(
        concat!(
            "<div class=\"error-state\">",
            "<span class=\"material-symbols-outlined\">error</span>",
            "<h2>{}</h2>",
            "<p>There was an issue fetching the data. Please try again later.</p>",
            "<small>Error: {}</small>",
            "</div>"
        ),
        escape_html(title),
        escape_html(message)
    )
}

pub fn no_results_panel() -> String {
    concat!(
        "<div class=\"no-results\">",
        "<span class=\"material-symbols-outlined\">search_off</span>",
        "<h3>No posts found</h3>",
        "<p>Try adjusting your search terms or clear the search</p>",
        "</div>"
    )
    .to_string()
}
