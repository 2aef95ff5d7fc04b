//! Shared generators.

use proptest::prelude::*;

/// Lowercase Latin words, accents included.
pub fn word() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-zéñü]{1,9}").unwrap()
}

/// Words as someone might type them: mixed case, accents, a trailing comma.
pub fn typed_word() -> impl Strategy<Value = String> {
    prop::sample::select(vec![
        "Rent".to_string(),
        "FREEZE".to_string(),
        "buses".to_string(),
        "bus".to_string(),
        "Café".to_string(),
        "childcare".to_string(),
        "tenants,".to_string(),
        "Bronx".to_string(),
        "Zürich".to_string(),
        "the".to_string(),
        "and".to_string(),
        "a".to_string(),
        "<b>".to_string(),
        "&".to_string(),
        "\"quoted\"".to_string(),
        "it's".to_string(),
    ])
}

pub fn text() -> impl Strategy<Value = String> {
    prop::collection::vec(typed_word(), 0..12).prop_map(|words| words.join(" "))
}

/// Arbitrary text with markup characters mixed in.
pub fn noisy_text() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-zA-Z éÉñ<>&\"'/]{0,40}").unwrap()
}

pub fn query() -> impl Strategy<Value = String> {
    prop::collection::vec(typed_word(), 0..4).prop_map(|words| words.join(" "))
}
