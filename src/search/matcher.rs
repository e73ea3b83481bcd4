//! Record filtering and match classification.
//!
//! A [`MatchPlan`] is compiled once per intent and evaluated against
//! pre-tokenized records, so relaxed variants of the same query can be
//! counted over the catalog cheaply.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::analysis::{matches_compound, matches_inflected, tokenize};
use crate::intent::{PriceRange, SearchIntent};
use crate::search::product::ProductRecord;
use crate::synonym::index::ExpansionIndex;

/// How strongly a record matched, best first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchTier {
    /// A query concept occurs in the product name.
    Name,
    /// Query concepts occur only in the category path.
    Category,
    /// The record passed price / sale filters without any text match.
    FilterOnly,
}

/// A record with its name and category tokenized.
#[derive(Debug, Clone)]
pub struct PreparedRecord<'a> {
    pub record: &'a ProductRecord,
    name: Vec<String>,
    category: Vec<String>,
}

impl<'a> PreparedRecord<'a> {
    pub fn new(record: &'a ProductRecord) -> Self {
        PreparedRecord {
            record,
            name: tokenize(&record.name),
            category: tokenize(&record.category),
        }
    }
}

/// Tokenize a whole catalog.
pub fn prepare(catalog: &[ProductRecord]) -> Vec<PreparedRecord<'_>> {
    catalog.iter().map(PreparedRecord::new).collect()
}

/// One query concept: a facet root or a free-text term, with every surface
/// form that counts as an occurrence.
#[derive(Debug, Clone, PartialEq, Eq)]
struct Concept {
    forms: Vec<String>,
}

impl Concept {
    fn found_in(&self, tokens: &[String]) -> bool {
        self.forms.iter().any(|form| contains_term(tokens, form))
    }
}

/// Whether a (possibly multi-word) normalized term occurs in a token list.
/// Each word may carry a Hungarian case or plural ending; a single-word term
/// also matches as the last member of a compound ("borkanape").
pub fn contains_term(tokens: &[String], term: &str) -> bool {
    let words: Vec<&str> = term.split(' ').collect();
    if words.len() == 1 {
        return tokens.iter().any(|token| matches_compound(token, term));
    }
    tokens.windows(words.len()).any(|window| {
        window
            .iter()
            .zip(&words)
            .all(|(token, word)| matches_inflected(token, word))
    })
}

/// Outcome of matching one record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RecordMatch {
    pub tier: MatchTier,
    /// Distinct query concepts found in the product name.
    pub name_concepts: usize,
}

/// Compiled filters of one intent.
#[derive(Debug, Clone)]
pub struct MatchPlan {
    /// Conjunctive facet filters; each group is satisfied by any concept.
    facets: Vec<Vec<Concept>>,
    /// Free-text concepts from residual terms.
    free_text: Vec<Concept>,
    price_range: Option<PriceRange>,
    on_sale: bool,
    /// Without facet, price or sale filters a free-text hit is mandatory.
    require_text: bool,
}

impl MatchPlan {
    pub fn new(index: &ExpansionIndex, intent: &SearchIntent) -> Self {
        let facets = intent
            .active_facets()
            .map(|facet| {
                intent
                    .facet(facet)
                    .iter()
                    .map(|root| Concept {
                        forms: match index.expansions(root) {
                            Some(forms) => forms.iter().cloned().collect(),
                            None => vec![root.clone()],
                        },
                    })
                    .collect()
            })
            .collect();

        let free_text = intent
            .residual_terms
            .iter()
            .map(|term| Concept {
                forms: index.expand_with_synonyms(&[term]),
            })
            .filter(|concept| !concept.forms.is_empty())
            .collect();

        MatchPlan {
            facets,
            free_text,
            price_range: intent.price_range,
            on_sale: intent.is_on_sale,
            require_text: !intent.has_filters(),
        }
    }

    /// Evaluate a record; `None` when any active filter rejects it.
    pub fn evaluate(&self, record: &PreparedRecord<'_>) -> Option<RecordMatch> {
        if let Some(range) = &self.price_range
            && !range.contains(record.record.effective_price())
        {
            return None;
        }
        if self.on_sale && !record.record.is_discounted() {
            return None;
        }

        let mut name_concepts = 0;
        let mut in_category = false;
        for group in &self.facets {
            let mut satisfied = false;
            for concept in group {
                if concept.found_in(&record.name) {
                    name_concepts += 1;
                    satisfied = true;
                } else if concept.found_in(&record.category) {
                    in_category = true;
                    satisfied = true;
                }
            }
            if !satisfied {
                return None;
            }
        }

        let mut text_hit = false;
        for concept in &self.free_text {
            if concept.found_in(&record.name) {
                name_concepts += 1;
                text_hit = true;
            } else if concept.found_in(&record.category) {
                in_category = true;
                text_hit = true;
            }
        }
        if self.require_text && !text_hit {
            return None;
        }

        let tier = if name_concepts > 0 {
            MatchTier::Name
        } else if in_category {
            MatchTier::Category
        } else {
            MatchTier::FilterOnly
        };
        Some(RecordMatch {
            tier,
            name_concepts,
        })
    }

    /// Number of records passing the plan.
    pub fn count(&self, records: &[PreparedRecord<'_>]) -> usize {
        records.iter().filter(|r| self.evaluate(r).is_some()).count()
    }

    /// Matching records in rank order.
    pub fn rank<'a>(&self, records: &[PreparedRecord<'a>]) -> Vec<(&'a ProductRecord, RecordMatch)> {
        let mut hits: Vec<(&'a ProductRecord, RecordMatch)> = records
            .iter()
            .filter_map(|r| self.evaluate(r).map(|m| (r.record, m)))
            .collect();
        hits.sort_by(|a, b| compare_hits(a, b));
        hits
    }
}

/// Tier, then concepts in the name (more first), then effective price
/// (cheaper first), then id.
fn compare_hits(a: &(&ProductRecord, RecordMatch), b: &(&ProductRecord, RecordMatch)) -> Ordering {
    let (ra, ma) = a;
    let (rb, mb) = b;
    ma.tier
        .cmp(&mb.tier)
        .then_with(|| mb.name_concepts.cmp(&ma.name_concepts))
        .then_with(|| ra.effective_price().total_cmp(&rb.effective_price()))
        .then_with(|| ra.id.cmp(&rb.id))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::intent::parse_search_intent;
    use crate::synonym::registry::SynonymRegistry;

    fn catalog() -> Vec<ProductRecord> {
        vec![
            ProductRecord::new("1", "Modern kanapé bézs", "Nappali > Kanapék", 150_000.0),
            ProductRecord::new("2", "Skandináv fotel", "Nappali > Fotelok", 80_000.0),
            ProductRecord::new("3", "Irodai szék", "Iroda > Székek", 45_000.0),
            ProductRecord::new("4", "Bársony ülőgarnitúra", "Nappali / Kanapék", 120_000.0)
                .with_sale_price(99_000.0),
        ]
    }

    fn ranked_ids(query: &str) -> Vec<String> {
        let index = SynonymRegistry::builtin().build_index().unwrap();
        let catalog = catalog();
        let prepared = prepare(&catalog);
        let plan = MatchPlan::new(&index, &parse_search_intent(&index, query));
        plan.rank(&prepared).into_iter().map(|(r, _)| r.id.clone()).collect()
    }

    #[test]
    fn test_contains_term() {
        let tokens = tokenize("Fekete TV-szekrények");
        assert!(contains_term(&tokens, "tv szekreny"));
        assert!(contains_term(&tokens, "fekete"));
        assert!(!contains_term(&tokens, "szek"));
        assert!(!contains_term(&tokens, "szekreny tv"));

        let tokens = tokenize("Chesterfield bőrkanapé");
        assert!(contains_term(&tokens, "kanape"));
        assert!(!contains_term(&tokens, "bor"));
    }

    #[test]
    fn test_compound_names_pass_facet_filter() {
        let index = SynonymRegistry::builtin().build_index().unwrap();
        let catalog = vec![
            ProductRecord::new("1", "Chesterfield bőrkanapé", "Nappali", 300_000.0),
            ProductRecord::new("2", "Relaxfotel-kanapé", "Bútor", 200_000.0),
            ProductRecord::new("3", "Bőrkanapé", "Akció", 100_000.0),
            ProductRecord::new("4", "Kanapéágy keret", "Hálószoba", 90_000.0),
        ];
        let prepared = prepare(&catalog);
        let plan = MatchPlan::new(&index, &parse_search_intent(&index, "kanapé"));
        let ids: Vec<&str> = plan.rank(&prepared).iter().map(|(r, _)| r.id.as_str()).collect();
        // "kanapéágy" is a kanapé synonym in its own right
        assert_eq!(ids, vec!["4", "3", "2", "1"]);
    }

    #[test]
    fn test_facet_filter_uses_synonyms() {
        // "ülőgarnitúra" is a kanapé synonym; name hits rank before price
        assert_eq!(ranked_ids("kanapé"), vec!["4", "1"]);
        assert_eq!(ranked_ids("szófa"), vec!["4", "1"]);
    }

    #[test]
    fn test_facets_are_conjunctive() {
        assert_eq!(ranked_ids("bézs kanapé"), vec!["1"]);
        assert_eq!(ranked_ids("nappali"), vec!["2", "4", "1"]);
        assert_eq!(ranked_ids("nappali fotel"), vec!["2"]);
    }

    #[test]
    fn test_price_and_sale_filters() {
        assert_eq!(ranked_ids("kanapé 100e alatt"), vec!["4"]);
        assert_eq!(ranked_ids("100e alatt"), vec!["3", "2", "4"]);
        assert_eq!(ranked_ids("akciós"), vec!["4"]);
    }

    #[test]
    fn test_name_matches_rank_above_category_matches() {
        let index = SynonymRegistry::builtin().build_index().unwrap();
        let catalog = catalog();
        let prepared = prepare(&catalog);
        let plan = MatchPlan::new(&index, &parse_search_intent(&index, "kanapé"));
        let ranked = plan.rank(&prepared);
        assert!(ranked.iter().all(|(_, m)| m.tier == MatchTier::Name));

        let plan = MatchPlan::new(&index, &parse_search_intent(&index, "iroda"));
        let ranked = plan.rank(&prepared);
        assert_eq!(ranked.len(), 1);
        assert_eq!(ranked[0].1.tier, MatchTier::Name);

        let plan = MatchPlan::new(&index, &parse_search_intent(&index, "szék iroda"));
        let ranked = plan.rank(&prepared);
        assert_eq!(ranked[0].1.name_concepts, 2);
    }

    #[test]
    fn test_free_text_required_without_filters() {
        assert!(ranked_ids("xyznonexistent123").is_empty());
        assert!(ranked_ids("és a").is_empty());
    }
}
