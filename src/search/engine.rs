//! Catalog search combining intent parsing, filtering, ranking and fallback
//! suggestions.

use std::sync::Arc;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::intent::{IntentParser, SearchIntent};
use crate::search::broaden::{BroadenAdvisor, DEFAULT_PLENTY_THRESHOLD};
use crate::search::matcher::{MatchPlan, prepare};
use crate::search::product::ProductRecord;
use crate::search::result::SearchResult;
use crate::spelling::{DidYouMean, SpellingConfig};
use crate::synonym::index::ExpansionIndex;

/// Options for a single search call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchOptions {
    /// Maximum number of results returned; `total` is not affected.
    pub limit: Option<usize>,
    /// Maximum number of broaden suggestions.
    pub max_suggestions: usize,
    /// Result count from which no broadening is offered.
    pub plenty_threshold: usize,
    /// Offer broaden suggestions for thin result sets.
    pub broaden: bool,
    /// Offer a spelling correction when nothing matches.
    pub did_you_mean: bool,
}

impl Default for SearchOptions {
    fn default() -> Self {
        SearchOptions {
            limit: None,
            max_suggestions: 3,
            plenty_threshold: DEFAULT_PLENTY_THRESHOLD,
            broaden: true,
            did_you_mean: true,
        }
    }
}

impl SearchOptions {
    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }

    pub fn max_suggestions(mut self, max_suggestions: usize) -> Self {
        self.max_suggestions = max_suggestions;
        self
    }
}

/// Search engine over a shared expansion index.
///
/// The engine holds no catalog: each call receives a read-only slice and
/// returns references into it.
#[derive(Debug, Clone)]
pub struct SearchEngine {
    index: Arc<ExpansionIndex>,
    spelling: SpellingConfig,
}

impl SearchEngine {
    pub fn new(index: Arc<ExpansionIndex>) -> Self {
        Self::with_spelling(index, SpellingConfig::default())
    }

    pub fn with_spelling(index: Arc<ExpansionIndex>, spelling: SpellingConfig) -> Self {
        SearchEngine { index, spelling }
    }

    pub fn index(&self) -> &ExpansionIndex {
        &self.index
    }

    pub fn parse_intent(&self, query: &str) -> SearchIntent {
        IntentParser::new(&self.index).parse(query)
    }

    pub fn did_you_mean(&self) -> DidYouMean<'_> {
        DidYouMean::with_config(&self.index, self.spelling)
    }

    pub fn broaden_advisor(&self, plenty_threshold: usize) -> BroadenAdvisor<'_> {
        BroadenAdvisor::with_threshold(&self.index, plenty_threshold)
    }

    /// Search a catalog with a free-text query.
    ///
    /// Never fails: malformed input degrades to an empty result. With no
    /// matches a spelling correction of the query is offered; with fewer
    /// than `plenty_threshold` matches the advisor suggests relaxed queries
    /// that find more records in this catalog.
    pub fn smart_search<'a>(
        &self,
        catalog: &'a [ProductRecord],
        query: &str,
        options: &SearchOptions,
    ) -> SearchResult<'a> {
        let intent = self.parse_intent(query);
        if intent.is_empty() {
            debug!("Nothing to search for in {query:?}");
            return SearchResult::empty(intent);
        }

        let records = prepare(catalog);
        let plan = MatchPlan::new(&self.index, &intent);
        let ranked = plan.rank(&records);
        let total = ranked.len();
        debug!("Query {query:?} matched {total} of {} records", catalog.len());

        let did_you_mean = if total == 0 && options.did_you_mean {
            self.did_you_mean().correct_query(query)
        } else {
            None
        };

        let broaden_suggestions = if options.broaden && total < options.plenty_threshold {
            self.broaden_advisor(options.plenty_threshold).suggest_for_catalog(
                &records,
                &intent,
                total,
                options.max_suggestions,
            )
        } else {
            Vec::new()
        };

        let limit = options.limit.unwrap_or(total);
        SearchResult {
            results: ranked.into_iter().take(limit).map(|(record, _)| record).collect(),
            total,
            intent,
            did_you_mean,
            broaden_suggestions,
        }
    }
}
