//! "Did you mean" suggestions against the synonym registry.

use std::cmp::Ordering;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::analysis::{is_stop_word, normalize, tokenize};
use crate::intent::price::is_price_word;
use crate::synonym::index::ExpansionIndex;
use crate::util::levenshtein::damerau_levenshtein_within;

/// Thresholds for spelling suggestions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SpellingConfig {
    /// Words shorter than this get no suggestion.
    pub min_word_len: usize,
    /// Words up to this length use `max_distance_short`.
    pub short_word_len: usize,
    pub max_distance_short: usize,
    pub max_distance_long: usize,
}

impl Default for SpellingConfig {
    fn default() -> Self {
        SpellingConfig {
            min_word_len: 3,
            short_word_len: 4,
            max_distance_short: 1,
            max_distance_long: 2,
        }
    }
}

impl SpellingConfig {
    /// Maximum edit distance allowed for a word of `len` characters.
    pub fn max_distance(&self, len: usize) -> usize {
        if len <= self.short_word_len {
            self.max_distance_short
        } else {
            self.max_distance_long
        }
    }
}

#[derive(Debug, PartialEq, Eq)]
struct Candidate<'a> {
    form: &'a str,
    distance: usize,
    is_root: bool,
}

impl Ord for Candidate<'_> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.distance
            .cmp(&other.distance)
            .then_with(|| other.is_root.cmp(&self.is_root))
            .then_with(|| self.form.len().cmp(&other.form.len()))
            .then_with(|| self.form.cmp(other.form))
    }
}

impl PartialOrd for Candidate<'_> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Spelling advisor over the single-word forms of an expansion index.
#[derive(Debug, Clone, Copy)]
pub struct DidYouMean<'a> {
    index: &'a ExpansionIndex,
    config: SpellingConfig,
}

impl<'a> DidYouMean<'a> {
    pub fn new(index: &'a ExpansionIndex) -> Self {
        Self::with_config(index, SpellingConfig::default())
    }

    pub fn with_config(index: &'a ExpansionIndex, config: SpellingConfig) -> Self {
        DidYouMean { index, config }
    }

    /// Suggest a correction for a single word.
    ///
    /// Returns `None` for words the registry already knows (including
    /// inflected forms), for words that are too short, and when nothing is
    /// close enough. A root is returned in its display form ("kanapé").
    /// Input normalizing to several words is corrected as a query.
    pub fn suggest(&self, word: &str) -> Option<String> {
        let normalized = normalize(word);
        if normalized.contains(' ') {
            return self.correct_query(&normalized);
        }
        self.suggest_token(&normalized)
    }

    /// Replace every correctable token of a query; `None` if nothing changed.
    pub fn correct_query(&self, query: &str) -> Option<String> {
        let tokens = tokenize(query);
        let mut changed = false;
        let corrected: Vec<String> = tokens
            .into_iter()
            .map(|token| match self.suggest_token(&token) {
                Some(suggestion) => {
                    changed = true;
                    suggestion
                }
                None => token,
            })
            .collect();

        changed.then(|| corrected.join(" "))
    }

    fn suggest_token(&self, token: &str) -> Option<String> {
        let len = token.chars().count();
        if len < self.config.min_word_len
            || token.chars().any(|c| c.is_ascii_digit())
            || is_stop_word(token)
            || is_price_word(token)
            || self.index.lookup(token).is_some()
        {
            return None;
        }

        let threshold = self.config.max_distance(len);
        let best = self
            .index
            .forms()
            .filter(|(form, _)| !form.contains(' '))
            .filter_map(|(form, _)| {
                damerau_levenshtein_within(token, form, threshold).map(|distance| Candidate {
                    form,
                    distance,
                    is_root: self.index.is_root(form),
                })
            })
            .min()?;

        debug!(
            "Suggesting '{}' for '{}' (distance {})",
            best.form, token, best.distance
        );

        let suggestion = if best.is_root {
            self.index.display(best.form).unwrap_or(best.form)
        } else {
            best.form
        };
        Some(suggestion.to_string())
    }
}
