//! "Broaden your search" suggestions.
//!
//! Suggestions are relaxed versions of the parsed intent rendered back into
//! query strings. Without a catalog the facets are dropped in a fixed order;
//! with one, the advisor greedily drops whichever filter frees up the most
//! records.

use log::debug;

use crate::intent::{SearchIntent, parse_search_intent};
use crate::search::matcher::{MatchPlan, PreparedRecord};
use crate::synonym::category::Facet;
use crate::synonym::index::ExpansionIndex;

/// Result count from which broadening is not offered.
pub const DEFAULT_PLENTY_THRESHOLD: usize = 10;

/// One way of loosening an intent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Relaxation {
    DropPrice,
    DropSale,
    DropFacet(Facet),
}

/// Drop order, cheapest first.
pub const DROP_ORDER: [Relaxation; 7] = [
    Relaxation::DropPrice,
    Relaxation::DropSale,
    Relaxation::DropFacet(Facet::Color),
    Relaxation::DropFacet(Facet::Material),
    Relaxation::DropFacet(Facet::Style),
    Relaxation::DropFacet(Facet::Room),
    Relaxation::DropFacet(Facet::ProductType),
];

impl Relaxation {
    /// Apply to an intent; `None` when there is nothing to drop.
    pub fn apply(&self, intent: &SearchIntent) -> Option<SearchIntent> {
        match self {
            Relaxation::DropPrice => intent.price_range.map(|_| intent.without_price()),
            Relaxation::DropSale => intent.is_on_sale.then(|| intent.without_sale()),
            Relaxation::DropFacet(facet) => {
                (!intent.facet(*facet).is_empty()).then(|| intent.without(*facet))
            }
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct BroadenAdvisor<'a> {
    index: &'a ExpansionIndex,
    plenty_threshold: usize,
}

impl<'a> BroadenAdvisor<'a> {
    pub fn new(index: &'a ExpansionIndex) -> Self {
        Self::with_threshold(index, DEFAULT_PLENTY_THRESHOLD)
    }

    pub fn with_threshold(index: &'a ExpansionIndex, plenty_threshold: usize) -> Self {
        BroadenAdvisor {
            index,
            plenty_threshold,
        }
    }

    pub fn plenty_threshold(&self) -> usize {
        self.plenty_threshold
    }

    /// Catalog-free suggestions: cumulative relaxations in [`DROP_ORDER`].
    ///
    /// Empty when `current_result_count` already reaches the plenty
    /// threshold. Never more than `max_suggestions`.
    pub fn suggest(
        &self,
        query: &str,
        current_result_count: usize,
        max_suggestions: usize,
    ) -> Vec<String> {
        if max_suggestions == 0 || current_result_count >= self.plenty_threshold {
            return Vec::new();
        }

        let intent = parse_search_intent(self.index, query);
        let original = intent.to_query_string(self.index);
        let mut current = intent;
        let mut suggestions: Vec<String> = Vec::new();

        for relaxation in DROP_ORDER {
            if suggestions.len() >= max_suggestions {
                break;
            }
            let Some(relaxed) = relaxation.apply(&current) else {
                continue;
            };
            current = relaxed;

            let rendered = current.to_query_string(self.index);
            if rendered.is_empty() || rendered == original || suggestions.contains(&rendered) {
                continue;
            }
            suggestions.push(rendered);
        }

        suggestions
    }

    /// Catalog-aware suggestions.
    ///
    /// Repeatedly drops the filter whose removal yields the most matches
    /// (ties go to the earlier entry of [`DROP_ORDER`]) until the plenty
    /// threshold is reached, filters run out, or `max_suggestions` are
    /// collected. A step that does not beat the last suggested count is
    /// taken silently, so only relaxations that find more records are
    /// suggested.
    pub fn suggest_for_catalog(
        &self,
        records: &[PreparedRecord<'_>],
        intent: &SearchIntent,
        current_result_count: usize,
        max_suggestions: usize,
    ) -> Vec<String> {
        let mut suggestions: Vec<String> = Vec::new();
        let mut current = intent.clone();
        let mut count = current_result_count;

        while count < self.plenty_threshold && suggestions.len() < max_suggestions {
            let mut best: Option<(SearchIntent, usize)> = None;
            for relaxation in DROP_ORDER {
                let Some(relaxed) = relaxation.apply(&current) else {
                    continue;
                };
                let relaxed_count = MatchPlan::new(self.index, &relaxed).count(records);
                if best.as_ref().is_none_or(|(_, n)| relaxed_count > *n) {
                    best = Some((relaxed, relaxed_count));
                }
            }

            let Some((relaxed, relaxed_count)) = best else {
                break;
            };
            if relaxed_count > count {
                let rendered = relaxed.to_query_string(self.index);
                if !rendered.is_empty() && !suggestions.contains(&rendered) {
                    debug!("Broaden suggestion '{rendered}' yields {relaxed_count} results");
                    suggestions.push(rendered);
                    count = relaxed_count;
                }
            }
            current = relaxed;
        }

        suggestions
    }
}
