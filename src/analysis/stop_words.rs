//! Stop words for shop queries.
//!
//! Hungarian articles, conjunctions and conversational filler ("keresek egy
//! ...") plus the English equivalents. These never become free-text terms and
//! are never spell-corrected. Lists are in normalized form.

use std::collections::HashSet;
use std::sync::LazyLock;

const HUNGARIAN_STOP_WORDS: &[&str] = &[
    "a", "az", "egy", "es", "is", "vagy", "de", "meg", "nem", "ami", "amely", "aki", "olyan",
    "mint", "nagyon", "kell", "kellene", "keresek", "szeretnek", "valami", "valamilyen", "van",
    "legyen", "lehet", "kb", "kozel", "hogy", "ez", "azt", "ezt", "pl", "db",
];

const ENGLISH_STOP_WORDS: &[&str] = &[
    "an", "and", "the", "or", "for", "with", "of", "in", "to", "some", "looking", "want",
];

/// Combined stop word set.
pub static STOP_WORDS: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    HUNGARIAN_STOP_WORDS
        .iter()
        .chain(ENGLISH_STOP_WORDS.iter())
        .copied()
        .collect()
});

/// Check whether a normalized token is a stop word.
pub fn is_stop_word(token: &str) -> bool {
    STOP_WORDS.contains(token)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stop_words() {
        assert!(is_stop_word("egy"));
        assert!(is_stop_word("es"));
        assert!(is_stop_word("the"));
        assert!(!is_stop_word("kanape"));
        assert!(!is_stop_word("modern"));
    }
}
