//! Matching and query processing invariants.

use super::strategies::{query, text, word};
use gleaner::analysis::{is_stopword, stem};
use gleaner::search::{search, word_match, FieldSet};
use gleaner::testing::make_post;
use gleaner::{normalize, process_search_terms};
use proptest::prelude::*;

proptest! {
    #[test]
    fn prop_word_match_symmetric(a in word(), b in word()) {
        prop_assert_eq!(word_match(&a, &b), word_match(&b, &a));
    }

    #[test]
    fn prop_word_match_reflexive(a in word()) {
        prop_assert!(word_match(&a, &a));
    }

    #[test]
    fn prop_short_words_never_stemmed(a in "[a-z]{1,3}") {
        prop_assert_eq!(stem(&a), a);
    }

    #[test]
    fn prop_stem_never_below_two_chars(a in word()) {
        let stemmed = stem(&a);
        prop_assert!(stemmed.chars().count() >= a.chars().count().min(2));
    }

    #[test]
    fn prop_normalize_idempotent(s in "[a-zA-Z àáâäéèêëíïñóöúüçÀÉÑÜ]{0,30}") {
        let once = normalize(&s);
        prop_assert_eq!(normalize(&once), once);
    }

    #[test]
    fn prop_tokens_are_clean(q in query()) {
        for token in process_search_terms(&q) {
            prop_assert!(!token.original.is_empty());
            prop_assert!(!token.original.contains(char::is_whitespace));
            prop_assert!(!is_stopword(&token.original));
            prop_assert_eq!(token.stemmed, stem(&token.original));
        }
    }

    /// Every word of a post, typed back as a query, finds that post.
    #[test]
    fn prop_own_words_always_match(t in text()) {
        let posts = vec![make_post(&t, "")];
        let fields = FieldSet::new(["text"]);
        for w in t.split_whitespace() {
            prop_assert_eq!(search(&posts, &fields, &process_search_terms(w)).len(), 1, "{}", w);
        }
        prop_assert_eq!(search(&posts, &fields, &process_search_terms(&t)).len(), 1);
    }

    /// Filtering keeps source order and never invents documents.
    #[test]
    fn prop_search_is_ordered_subset(texts in prop::collection::vec(text(), 0..20), q in query()) {
        let posts: Vec<_> = texts.iter().map(|t| make_post(t, "")).collect();
        let fields = FieldSet::new(["text"]);
        let tokens = process_search_terms(&q);
        let indices = gleaner::search::filter_indices(&posts, &fields, &tokens);

        prop_assert!(indices.windows(2).all(|w| w[0] < w[1]));
        for (i, post) in posts.iter().enumerate() {
            prop_assert_eq!(indices.contains(&i), fields.matches(post, &tokens));
        }
        if tokens.is_empty() {
            prop_assert_eq!(indices.len(), posts.len());
        }
    }
}
