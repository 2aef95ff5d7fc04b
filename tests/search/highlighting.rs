//! Highlighting: spans on the normalized text, markup on the raw text.

use gleaner::highlight;
use gleaner::search::{merge_spans, Highlighter, Marker, Span};

#[test]
fn test_empty_inputs_only_escape() {
    assert_eq!(highlight("", "rent"), "");
    assert_eq!(highlight("<b>rent</b>", ""), "&lt;b&gt;rent&lt;/b&gt;");
    // nothing but stopwords leaves no tokens
    assert_eq!(highlight("a & b", "the"), "a &amp; b");
}

#[test]
fn test_original_case_and_accents_preserved() {
    assert_eq!(highlight("CAFÉ con leche", "cafe"), "<mark>CAFÉ</mark> con leche");
    assert_eq!(highlight("Ñandú y Zürich", "zurich"), "Ñandú y <mark>Zürich</mark>");
}

#[test]
fn test_combining_mark_stays_inside_marker() {
    assert_eq!(
        highlight("Cafe\u{301} au lait", "cafe"),
        "<mark>Cafe\u{301}</mark> au lait"
    );
}

#[test]
fn test_whole_word_marked_punctuation_included() {
    assert_eq!(
        highlight("Freeze the rent, today", "rent"),
        "Freeze the <mark>rent,</mark> today"
    );
}

#[test]
fn test_separate_words_stay_separate() {
    assert_eq!(
        highlight("rent freeze", "rent freeze"),
        "<mark>rent</mark> <mark>freeze</mark>"
    );
}

#[test]
fn test_touching_spans_merge() {
    assert_eq!(
        merge_spans(vec![Span::new(4, 6), Span::new(0, 4), Span::new(10, 12)]),
        vec![Span::new(0, 6), Span::new(10, 12)]
    );
}

#[test]
fn test_markup_in_text_never_escapes() {
    let out = highlight("<script>alert('x')</script> rent", "script");
    assert!(!out.contains("<script"));
    assert!(out.starts_with("<mark>&lt;script&gt;"));
    assert!(out.ends_with("</mark> rent"));
}

#[test]
fn test_ampersand_query() {
    assert_eq!(highlight("Tom & Jerry", "&"), "Tom <mark>&amp;</mark> Jerry");
}

#[test]
fn test_custom_marker() {
    let marker = Marker {
        open: "<em>".into(),
        close: "</em>".into(),
    };
    let highlighter = Highlighter::new("buses").with_marker(marker);
    assert_eq!(highlighter.highlight("Fare-free buses"), "Fare-free <em>buses</em>");
}

#[test]
fn test_one_highlighter_many_fields() {
    let highlighter = Highlighter::new("mamdani");
    assert_eq!(highlighter.highlight("Zohran Mamdani"), "Zohran <mark>Mamdani</mark>");
    assert_eq!(highlighter.highlight("ZohranKMamdani"), "ZohranK<mark>Mamdani</mark>");
    assert_eq!(highlighter.highlight("nyctransit"), "nyctransit");
}
