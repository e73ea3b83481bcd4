use serde::Serialize;

use crate::intent::SearchIntent;
use crate::search::product::ProductRecord;

/// Outcome of a catalog search.
///
/// Results borrow from the catalog slice passed to the search; ordering is
/// deterministic for a given catalog and query.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResult<'a> {
    pub results: Vec<&'a ProductRecord>,
    /// Number of matches before the result limit was applied.
    pub total: usize,
    pub intent: SearchIntent,
    pub did_you_mean: Option<String>,
    pub broaden_suggestions: Vec<String>,
}

impl<'a> SearchResult<'a> {
    /// A result without matches.
    pub fn empty(intent: SearchIntent) -> Self {
        SearchResult {
            results: Vec::new(),
            total: 0,
            intent,
            did_you_mean: None,
            broaden_suggestions: Vec::new(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }

    pub fn len(&self) -> usize {
        self.results.len()
    }

    pub fn first(&self) -> Option<&'a ProductRecord> {
        self.results.first().copied()
    }
}
