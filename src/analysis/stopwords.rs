// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Query stopwords.
//!
//! Only queries are filtered. Document text keeps every word, so a stopword
//! inside a longer query token still matches by substring.

/// Common English words dropped from search queries (154 entries).
///
/// Entries are already normalized (lowercase, no diacritics).
pub const STOPWORDS: &[&str] = &[
    "a", "an", "and", "are", "as", "at", "be", "by", "for", "from", "has", "he", "in",
    "is", "it", "its", "of", "on", "that", "the", "to", "was", "will", "with", "would",
    "i", "you", "we", "they", "she", "her", "him", "his", "my", "our", "your", "their",
    "this", "these", "those", "but", "or", "not", "can", "do", "have", "had", "been",
    "were", "am", "all", "any", "some", "if", "so", "what", "when", "where", "who", "why",
    "how", "there", "here", "then", "than", "more", "most", "much", "many", "very", "just",
    "only", "also", "even", "still", "now", "get", "got", "go", "going", "come", "came",
    "see", "saw", "know", "knew", "think", "thought", "say", "said", "tell", "told", "ask",
    "asked", "give", "gave", "take", "took", "make", "made", "want", "wanted", "need",
    "needed", "try", "tried", "look", "looked", "feel", "felt", "seem", "seemed", "find",
    "found", "work", "worked", "use", "used", "call", "called", "way", "ways", "time",
    "times", "day", "days", "year", "years", "new", "old", "first", "last", "long", "good",
    "great", "little", "own", "other", "right", "left", "high", "low", "big", "small",
    "large", "next", "early", "young", "important", "few", "public", "bad", "same", "able",
];

/// Is `word` (already normalized) a stopword?
pub fn is_stopword(word: &str) -> bool {
    STOPWORDS.contains(&word)
}
