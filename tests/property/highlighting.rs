//! Highlighting never loses text and never lets markup through.

use super::strategies::{noisy_text, query};
use gleaner::highlight;
use gleaner::util::escape_html;
use proptest::prelude::*;

fn unmark(html: &str) -> String {
    html.replace("<mark>", "")
        .replace("</mark>", "")
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&#39;", "'")
        .replace("&amp;", "&")
}

proptest! {
    #[test]
    fn prop_markers_removed_give_back_text(t in noisy_text(), q in query()) {
        prop_assert_eq!(unmark(&highlight(&t, &q)), t);
    }

    #[test]
    fn prop_no_raw_markup_from_text(t in noisy_text(), q in query()) {
        let html = highlight(&t, &q);
        let stripped = html.replace("<mark>", "").replace("</mark>", "");
        prop_assert!(!stripped.contains('<'));
        prop_assert!(!stripped.contains('>'));
        prop_assert!(!stripped.contains('"'));
    }

    #[test]
    fn prop_markers_balanced_and_flat(t in noisy_text(), q in query()) {
        let html = highlight(&t, &q);
        let mut depth = 0i32;
        let mut rest = html.as_str();
        while let Some(i) = rest.find('<') {
            rest = &rest[i..];
            if rest.starts_with("<mark>") {
                depth += 1;
                rest = &rest[6..];
            } else {
                prop_assert!(rest.starts_with("</mark>"));
                depth -= 1;
                rest = &rest[7..];
            }
            prop_assert!(depth == 0 || depth == 1);
        }
        prop_assert_eq!(depth, 0);
    }

    #[test]
    fn prop_empty_query_only_escapes(t in noisy_text()) {
        prop_assert_eq!(highlight(&t, ""), escape_html(&t));
        prop_assert_eq!(highlight(&t, "the and"), escape_html(&t));
    }
}
