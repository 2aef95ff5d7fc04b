//! The donors page: query, toolbar filters, sort and the dashboard.

use crate::common::{donor_names, fixture_donors};
use gleaner::filters::{DonorFilters, DonorSort, IntermediaryFilter};
use gleaner::session::{DonorBrowser, DonorEvent};

fn browser() -> DonorBrowser {
    DonorBrowser::new(fixture_donors())
}

fn filters(f: impl FnOnce(&mut DonorFilters)) -> DonorFilters {
    let mut filters = DonorFilters::default();
    f(&mut filters);
    filters
}

#[test]
fn test_default_view_is_newest_first() {
    let b = browser();
    assert_eq!(b.total(), 6);
    assert!(!b.is_filtering());
    // undated donors sort as the epoch, keeping file order among themselves
    assert_eq!(
        donor_names(b.visible()),
        vec!["Ana Rivera", "Bo Chen", "Mary O'Brien", "José Núñez", "Priya Patel", "Sam Lee"]
    );
    assert_eq!(b.results_line(), "6 total donors");
    assert_eq!(b.reset_label(), "No Active Filters");
}

#[test]
fn test_intermediary_filter_ignores_blank_names() {
    let mut b = browser();
    b.handle(DonorEvent::SetFilters(filters(|f| {
        f.intermediary = IntermediaryFilter::Yes
    })));
    assert_eq!(donor_names(b.visible()), vec!["Mary O'Brien", "José Núñez"]);

    b.handle(DonorEvent::SetFilters(filters(|f| {
        f.intermediary = IntermediaryFilter::No
    })));
    assert_eq!(b.matched(), 4);
}

#[test]
fn test_borough_and_amount_sort() {
    let mut b = browser();
    b.handle(DonorEvent::SetFilters(filters(|f| f.sort = DonorSort::AmountDesc)));
    assert_eq!(
        donor_names(b.visible()),
        vec!["Priya Patel", "José Núñez", "Sam Lee", "Ana Rivera", "Bo Chen", "Mary O'Brien"]
    );
    // a non-default sort alone counts as filtering
    assert!(b.is_filtering());
    assert_eq!(b.reset_label(), "Reset Filters");

    b.handle(DonorEvent::SetFilters(filters(|f| f.borough = Some("Q".into()))));
    assert_eq!(donor_names(b.visible()), vec!["Mary O'Brien"]);
    assert_eq!(b.results_line(), "Showing 1 of 6 donors");
    assert_eq!(b.count_label(), "1 of 6 donors");
}

#[test]
fn test_query_and_filters_compose_then_reset() {
    let mut b = browser();
    b.handle(DonorEvent::QuerySubmit("york".into()));
    assert_eq!(b.matched(), 3);

    b.handle(DonorEvent::SetFilters(filters(|f| f.sort = DonorSort::NameAsc)));
    assert_eq!(donor_names(b.visible()), vec!["Ana Rivera", "Bo Chen", "Sam Lee"]);

    b.handle(DonorEvent::ResetAll);
    assert_eq!(b.query(), "");
    assert_eq!(b.sort(), DonorSort::DateDesc);
    assert_eq!(b.matched(), 6);
}

#[test]
fn test_analytics_cover_all_donors() {
    let mut b = browser();
    b.handle(DonorEvent::QuerySubmit("uft".into()));
    assert_eq!(b.matched(), 1);

    let stats = b.analytics();
    assert_eq!(stats.donor_count, 6);
    assert_eq!(stats.total_amount, 1687.5);
    assert_eq!(stats.intermediary_amount, 512.5);
    assert_eq!(stats.average_amount, 281.25);
    assert_eq!(stats.display_values()[0], "$1,688");
}

#[test]
fn test_rendered_cards_highlight_matches() {
    let mut b = browser();
    b.handle(DonorEvent::QuerySubmit("nunez".into()));
    let html = b.render();
    assert!(html.contains("<mark>Núñez</mark>"));
    assert_eq!(html.matches("donor-card\"").count(), 1);
}
