//! One engine, two field sets: posts and donors.

use crate::common::{donor_names, fixture_donors, fixture_posts, post_texts};
use gleaner::config::{DonorsConfig, PostsConfig};
use gleaner::process_search_terms;
use gleaner::search::{search, FieldSet};

#[test]
fn test_post_handles_are_searchable_by_default() {
    let posts = fixture_posts();
    let tokens = process_search_terms("nyctransit");

    assert!(search(&posts, &FieldSet::new(["text"]), &tokens).is_empty());
    assert_eq!(
        post_texts(search(&posts, &PostsConfig::default().field_set(), &tokens)),
        vec!["The bus lanes are working"]
    );
}

#[test]
fn test_donor_search_spans_configured_fields() {
    let donors = fixture_donors();
    let fields = DonorsConfig::default().field_set();
    let find = |query: &str| donor_names(search(&donors, &fields, &process_search_terms(query)));

    assert_eq!(find("uft"), vec!["José Núñez"]);
    assert_eq!(find("jose nunez"), vec!["José Núñez"]);
    assert_eq!(find("brooklyn"), vec!["Ana Rivera"]);
    // "new" is a stopword, so this is a search for "york" in any field
    assert_eq!(find("new york"), vec!["Ana Rivera", "Bo Chen", "Sam Lee"]);
}

#[test]
fn test_field_set_decides_what_is_searched() {
    let donors = fixture_donors();
    let tokens = process_search_terms("k");
    let by_borough = FieldSet::new(["BOROUGHCD"]);
    assert_eq!(donor_names(search(&donors, &by_borough, &tokens)), vec!["Ana Rivera"]);
}

#[test]
fn test_searchable_text_skips_blank_fields() {
    let posts = fixture_posts();
    let fields = PostsConfig::default().field_set();
    let tenants = posts
        .iter()
        .find(|p| p.text.starts_with("Tenants"))
        .unwrap();
    assert_eq!(
        fields.searchable_text(tenants).as_str(),
        "tenants organizing in the bronx zohran"
    );
}
