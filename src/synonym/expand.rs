//! Term expansion through the synonym index.

use std::collections::BTreeSet;

use crate::analysis::normalize;
use crate::synonym::index::ExpansionIndex;

/// Input accepted by [`ExpansionIndex::expand_search_terms`]: either a
/// pre-tokenized list or a raw string split on whitespace.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchTerms {
    Tokens(Vec<String>),
    Text(String),
}

impl SearchTerms {
    /// The individual words.
    pub fn words(&self) -> Vec<&str> {
        match self {
            SearchTerms::Tokens(tokens) => tokens.iter().map(String::as_str).collect(),
            SearchTerms::Text(text) => text.split_whitespace().collect(),
        }
    }
}

impl From<&str> for SearchTerms {
    fn from(text: &str) -> Self {
        SearchTerms::Text(text.to_string())
    }
}

impl From<String> for SearchTerms {
    fn from(text: String) -> Self {
        SearchTerms::Text(text)
    }
}

impl From<&String> for SearchTerms {
    fn from(text: &String) -> Self {
        SearchTerms::Text(text.clone())
    }
}

impl From<Vec<String>> for SearchTerms {
    fn from(tokens: Vec<String>) -> Self {
        SearchTerms::Tokens(tokens)
    }
}

impl From<&[String]> for SearchTerms {
    fn from(tokens: &[String]) -> Self {
        SearchTerms::Tokens(tokens.to_vec())
    }
}

impl From<Vec<&str>> for SearchTerms {
    fn from(tokens: Vec<&str>) -> Self {
        SearchTerms::Tokens(tokens.into_iter().map(str::to_string).collect())
    }
}

impl From<&[&str]> for SearchTerms {
    fn from(tokens: &[&str]) -> Self {
        SearchTerms::Tokens(tokens.iter().map(|t| t.to_string()).collect())
    }
}

impl<const N: usize> From<[&str; N]> for SearchTerms {
    fn from(tokens: [&str; N]) -> Self {
        SearchTerms::Tokens(tokens.iter().map(|t| t.to_string()).collect())
    }
}

impl ExpansionIndex {
    /// Expand words into their normalized forms plus every synonym reachable
    /// through the registry.
    ///
    /// The result is a set, returned sorted. A word that normalizes to several
    /// tokens is expanded token by token, and as a whole when the phrase is a
    /// registry form.
    pub fn expand_with_synonyms<S: AsRef<str>>(&self, words: &[S]) -> Vec<String> {
        let mut expanded = BTreeSet::new();
        for word in words {
            let normalized = normalize(word.as_ref());
            if normalized.is_empty() {
                continue;
            }
            if normalized.contains(' ') {
                if self.contains_form(&normalized) {
                    self.expand_form(&normalized, &mut expanded);
                }
                for token in normalized.split(' ') {
                    self.expand_form(token, &mut expanded);
                }
            } else {
                self.expand_form(&normalized, &mut expanded);
            }
        }
        expanded.into_iter().collect()
    }

    /// Backend-facing variant accepting a token list or a raw string.
    ///
    /// Equivalent token sets give identical results.
    pub fn expand_search_terms<T: Into<SearchTerms>>(&self, terms: T) -> Vec<String> {
        let terms = terms.into();
        self.expand_with_synonyms(&terms.words())
    }

    fn expand_form(&self, form: &str, out: &mut BTreeSet<String>) {
        out.insert(form.to_string());
        if let Some(forms) = self.lookup(form).and_then(|root| self.expansions(root)) {
            out.extend(forms.iter().cloned());
        }
    }
}
