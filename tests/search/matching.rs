//! Word matching, token processing and the three-way document rule.

use crate::common::{make_post, post_texts};
use gleaner::search::{search, word_match, word_matches_token, FieldSet, SearchableText, Token};
use gleaner::{normalize, process_search_terms};

fn originals(query: &str) -> Vec<String> {
    process_search_terms(query)
        .into_iter()
        .map(|t| t.original)
        .collect()
}

#[test]
fn test_word_match_is_symmetric() {
    let pairs = [
        ("child", "childcare"),
        ("bus", "buses"),
        ("a", "apple"),
        ("ab", "abc"),
        ("rent", "rent"),
        ("tenant", "tent"),
    ];
    for (a, b) in pairs {
        assert_eq!(word_match(a, b), word_match(b, a), "{a} / {b}");
    }
}

#[test]
fn test_short_words_only_match_exactly() {
    assert!(!word_match("a", "apple"));
    assert!(!word_match("ab", "abc"));
    assert!(word_match("ab", "ab"));
    assert!(word_match("abc", "abcdef"));
}

#[test]
fn test_case_and_accent_insensitive() {
    assert!(word_match(&normalize("café"), &normalize("CAFE")));

    let posts = vec![make_post("Café con leche", "6/28/2025 10:56")];
    let fields = FieldSet::new(["text"]);
    for query in ["cafe", "CAFÉ", "Cafè"] {
        let hits = search(&posts, &fields, &process_search_terms(query));
        assert_eq!(post_texts(hits), vec!["Café con leche"], "{query}");
    }
}

#[test]
fn test_tokens_are_anded() {
    let posts = vec![
        make_post("Rent freeze for stabilized tenants", ""),
        make_post("Rent control explained", ""),
        make_post("Freeze frame", ""),
    ];
    let hits = search(&posts, &FieldSet::new(["text"]), &process_search_terms("rent freeze"));
    assert_eq!(post_texts(hits), vec!["Rent freeze for stabilized tenants"]);
}

#[test]
fn test_stopwords_dropped_duplicates_and_order_kept() {
    assert_eq!(originals("The RENT and the rent"), vec!["rent", "rent"]);
    assert_eq!(originals("freeze the rent"), vec!["freeze", "rent"]);
    assert!(originals("the and of").is_empty());
}

#[test]
fn test_stem_equality_matches() {
    let token = Token::new("tenants");
    assert_eq!(token.stemmed, "tenant");
    assert!(word_matches_token(&token, "tenant"));

    let text = SearchableText::from_normalized(normalize("Tenant rights hotline"));
    assert!(text.matches(&token));
}

#[test]
fn test_single_char_token_needs_containment() {
    let token = Token::new("x");
    assert!(SearchableText::from_normalized(normalize("Bronx")).matches(&token));
    assert!(!SearchableText::from_normalized(normalize("Queens")).matches(&token));
}

#[test]
fn test_matches_all_with_processed_query() {
    let text = SearchableText::from_normalized(normalize("We need a RENT FREEZE now"));
    assert!(text.matches_all(&process_search_terms("rent freeze")));
    assert!(!text.matches_all(&process_search_terms("rent buses")));
    assert!(text.matches_all(&[]));
}
