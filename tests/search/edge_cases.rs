//! Identity, ordering and degenerate inputs.

use crate::common::{fixture_posts, synthetic_posts};
use gleaner::process_search_terms;
use gleaner::search::{filter_indices, search, FieldSet};

#[test]
fn test_no_tokens_is_identity() {
    let posts = fixture_posts();
    let fields = FieldSet::new(["text"]);
    for query in ["", "   ", "the and of"] {
        let hits = search(&posts, &fields, &process_search_terms(query));
        assert_eq!(hits.len(), posts.len());
        assert!(hits.iter().zip(&posts).all(|(a, b)| std::ptr::eq(*a, b)));
    }
}

#[test]
fn test_results_keep_source_order() {
    let posts = synthetic_posts(200);
    let fields = FieldSet::new(["text"]);
    let tokens = process_search_terms("rent bronx");

    let indices = filter_indices(&posts, &fields, &tokens);
    assert!(!indices.is_empty());
    assert!(indices.windows(2).all(|w| w[0] < w[1]));

    let hits = search(&posts, &fields, &tokens);
    assert_eq!(hits.len(), indices.len());
    for (hit, &i) in hits.iter().zip(&indices) {
        assert!(std::ptr::eq(*hit, &posts[i]));
    }
}

#[cfg(feature = "parallel")]
#[test]
fn test_parallel_filter_agrees() {
    use gleaner::search::filter_indices_parallel;

    let posts = synthetic_posts(1000);
    let fields = FieldSet::new(["text"]);
    for query in ["rent", "cafe queens", "organize", "zzzz", ""] {
        let tokens = process_search_terms(query);
        assert_eq!(
            filter_indices_parallel(&posts, &fields, &tokens),
            filter_indices(&posts, &fields, &tokens),
            "{query}"
        );
    }
}

#[test]
fn test_unknown_field_names_match_nothing() {
    let posts = fixture_posts();
    let fields = FieldSet::new(["likes"]);
    assert!(search(&posts, &fields, &process_search_terms("rent")).is_empty());
}
