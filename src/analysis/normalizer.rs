//! Canonical folding of query and catalog text.
//!
//! Every equality comparison in the crate goes through [`normalize`]: two
//! surface forms are the same word iff their normalized forms are equal.
//! Diacritics are removed before punctuation is stripped, so `kanapé` folds to
//! `kanape` instead of `kanap `.

use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::is_combining_mark;

/// Fold diacritics and case, keeping punctuation and spacing as is.
///
/// NFD decomposition splits `ő` into `o` + U+030B (double acute), `é` into
/// `e` + U+0301 and so on, so dropping combining marks covers the whole
/// Hungarian vowel set.
pub fn fold(input: &str) -> String {
    input
        .chars()
        .flat_map(char::to_lowercase)
        .nfd()
        .filter(|c| !is_combining_mark(*c))
        .collect()
}

/// Normalize text into the canonical ASCII-lowercase token space.
///
/// Characters outside `[a-z0-9]` become spaces and whitespace runs collapse to
/// a single space. Empty input yields an empty string. Idempotent.
pub fn normalize(input: &str) -> String {
    if input.trim().is_empty() {
        return String::new();
    }

    let folded = fold(input);
    let mut spaced = String::with_capacity(folded.len());
    for ch in folded.chars() {
        if ch.is_ascii_lowercase() || ch.is_ascii_digit() {
            spaced.push(ch);
        } else {
            spaced.push(' ');
        }
    }

    spaced.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Normalize and split into tokens.
pub fn tokenize(input: &str) -> Vec<String> {
    normalize(input)
        .split(' ')
        .filter(|t| !t.is_empty())
        .map(str::to_string)
        .collect()
}
