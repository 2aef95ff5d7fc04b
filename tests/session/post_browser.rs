//! The posts page, one event at a time.

use crate::common::{fixture_posts, post_texts};
use chrono::{NaiveDate, NaiveDateTime};
use gleaner::config::{Config, PostsConfig};
use gleaner::filters::DateRange;
use gleaner::session::{PostBrowser, PostEvent, SearchSummary, ViewUpdate};
use std::time::Duration;

fn day(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn now() -> NaiveDateTime {
    day(2025, 7, 1).and_hms_opt(12, 0, 0).unwrap()
}

fn small_pages() -> Config {
    Config {
        posts: PostsConfig {
            page_size: 3,
            ..PostsConfig::default()
        },
        ..Config::default()
    }
}

#[test]
fn test_initial_state() {
    let browser = PostBrowser::new(fixture_posts());
    assert_eq!(browser.total(), 7);
    assert_eq!(browser.matched(), 7);
    assert_eq!(browser.count_label(), "7 posts");
    assert_eq!(browser.search_summary(), SearchSummary::Idle);
    assert!(browser.date_line().is_none());
    assert!(!browser.highlighter().is_active());
}

#[test]
fn test_scrolling_walks_every_page() {
    let mut browser = PostBrowser::with_config(fixture_posts(), &small_pages());

    assert_eq!(browser.handle(PostEvent::LoadMore), ViewUpdate::Append(0..3));
    // a second request before the page is drawn is ignored
    assert_eq!(browser.handle(PostEvent::LoadMore), ViewUpdate::Unchanged);
    browser.handle(PostEvent::PageRendered);

    assert_eq!(browser.handle(PostEvent::LoadMore), ViewUpdate::Append(3..6));
    browser.handle(PostEvent::PageRendered);
    assert_eq!(browser.handle(PostEvent::LoadMore), ViewUpdate::Append(6..7));
    browser.handle(PostEvent::PageRendered);

    assert!(!browser.has_more());
    assert_eq!(browser.handle(PostEvent::LoadMore), ViewUpdate::Exhausted);
}

#[test]
fn test_new_query_starts_from_first_page() {
    let mut browser = PostBrowser::with_config(fixture_posts(), &small_pages());
    browser.handle(PostEvent::LoadMore);
    browser.handle(PostEvent::PageRendered);

    assert_eq!(
        browser.handle(PostEvent::QuerySubmit("bus".into())),
        ViewUpdate::Reset(0..2)
    );
    assert_eq!(
        post_texts(browser.page(0..3)),
        vec!["Fare-free buses will move New York forward", "The bus lanes are working"]
    );
    assert_eq!(browser.count_label(), "2 / 7 posts");
}

#[test]
fn test_typing_is_debounced() {
    let mut browser = PostBrowser::new(fixture_posts());
    let ms = Duration::from_millis;

    for (i, prefix) in ["c", "ca", "caf", "cafe"].into_iter().enumerate() {
        let update = browser.handle(PostEvent::QueryInput {
            text: prefix.into(),
            at: ms(i as u64 * 50),
        });
        assert_eq!(update, ViewUpdate::Unchanged);
    }
    assert!(browser.has_pending_input());
    assert_eq!(browser.handle(PostEvent::Tick(ms(300))), ViewUpdate::Unchanged);

    assert_eq!(browser.handle(PostEvent::Tick(ms(450))), ViewUpdate::Reset(0..1));
    assert_eq!(browser.query(), "cafe");
    assert_eq!(
        post_texts(browser.page(0..1)),
        vec!["Café con leche at the bodega before canvassing"]
    );
}

#[test]
fn test_clear_query_restores_everything() {
    let mut browser = PostBrowser::new(fixture_posts());
    browser.handle(PostEvent::QuerySubmit("childcare".into()));
    assert_eq!(browser.matched(), 1);

    browser.handle(PostEvent::ClearQuery);
    assert_eq!(browser.matched(), 7);
    assert_eq!(browser.query(), "");
    assert!(!browser.is_searching());
}

#[test]
fn test_preset_and_query_compose() {
    let mut browser = PostBrowser::new(fixture_posts());
    browser.handle(PostEvent::DatePreset {
        days: 30,
        today: day(2025, 2, 10),
    });
    assert_eq!(
        post_texts(browser.page(0..25)),
        vec![
            "We need a RENT FREEZE now",
            "Fare-free buses will move New York forward",
            "The bus lanes are working",
        ]
    );

    browser.handle(PostEvent::QuerySubmit("bus".into()));
    assert_eq!(browser.matched(), 2);

    browser.handle(PostEvent::ClearDateRange);
    assert!(!browser.date_range().is_active());
    assert_eq!(browser.matched(), 2);
}

#[test]
fn test_inverted_range_rejected() {
    let mut browser = PostBrowser::new(fixture_posts());
    let inverted = DateRange::new(Some(day(2025, 3, 1)), Some(day(2025, 1, 1)));
    assert!(matches!(
        browser.handle(PostEvent::ApplyDateRange(inverted)),
        ViewUpdate::Rejected(_)
    ));
    assert_eq!(browser.matched(), 7);
}

#[test]
fn test_rendered_cards_are_highlighted_and_escaped() {
    let mut browser = PostBrowser::new(fixture_posts());
    browser.handle(PostEvent::QuerySubmit("freeze".into()));
    assert!(browser.render_page(0..1, now()).contains("<mark>FREEZE</mark>"));

    browser.handle(PostEvent::QuerySubmit("grocery".into()));
    let html = browser.render_page(0..1, now());
    assert!(html.contains("&lt;pilot&gt; &amp; more"));
    assert!(!html.contains("<pilot>"));
}

#[test]
fn test_summary_reports_counts() {
    let mut browser = PostBrowser::new(fixture_posts());
    browser.handle(PostEvent::QuerySubmit("the".into()));
    // stopwords only: nothing to filter on
    assert_eq!(browser.matched(), 7);

    browser.handle(PostEvent::QuerySubmit("rent".into()));
    assert!(matches!(
        browser.search_summary(),
        SearchSummary::Found { count: 1, total: 7, .. }
    ));
}
