//! Free-text query → [`SearchIntent`].

use std::collections::HashMap;

use log::debug;

use crate::analysis::{fold, is_stop_word, tokenize};
use crate::intent::price;
use crate::intent::search_intent::SearchIntent;
use crate::synonym::category::Category;
use crate::synonym::index::ExpansionIndex;

/// Intent parser over a frozen expansion index.
///
/// Parsing happens in two passes. Price phrases are recognized first and
/// their tokens removed; the remaining tokens are matched greedily against
/// the registry, longest phrase first.
#[derive(Debug, Clone, Copy)]
pub struct IntentParser<'a> {
    index: &'a ExpansionIndex,
}

impl<'a> IntentParser<'a> {
    pub fn new(index: &'a ExpansionIndex) -> Self {
        IntentParser { index }
    }

    pub fn index(&self) -> &'a ExpansionIndex {
        self.index
    }

    /// Parse a raw query. Never fails; an empty query gives an empty intent.
    pub fn parse(&self, query: &str) -> SearchIntent {
        let mut intent = SearchIntent::new();
        let tokens = tokenize(query);
        if tokens.is_empty() {
            return intent;
        }

        let scan = price::scan(&fold(query));
        intent.price_range = scan.range;
        let available = Self::mark_available(&tokens, &scan.consumed);

        let max_words = self.index.max_phrase_words().max(1);
        let mut i = 0;
        while i < tokens.len() {
            if !available[i] {
                i += 1;
                continue;
            }

            let run = available[i..].iter().take_while(|a| **a).count();
            if let Some((root, len)) = self.match_phrase(&tokens[i..i + run.min(max_words)]) {
                self.apply(&mut intent, root, &tokens[i..i + len]);
                i += len;
                continue;
            }

            let token = &tokens[i];
            if !is_stop_word(token) {
                match self.index.lookup(token) {
                    Some(root) => self.apply(&mut intent, root, std::slice::from_ref(token)),
                    None => intent.residual_terms.push(token.clone()),
                }
            }
            i += 1;
        }

        debug!("Parsed {query:?} into {intent:?}");
        intent
    }

    /// Flags tokens not consumed by price phrases. Consumed tokens are taken
    /// off by count, first occurrence first.
    fn mark_available(tokens: &[String], consumed: &[String]) -> Vec<bool> {
        let mut pending: HashMap<&str, usize> = HashMap::new();
        for token in consumed {
            *pending.entry(token.as_str()).or_default() += 1;
        }
        tokens
            .iter()
            .map(|token| match pending.get_mut(token.as_str()) {
                Some(count) if *count > 0 => {
                    *count -= 1;
                    false
                }
                _ => true,
            })
            .collect()
    }

    /// Longest multi-word registry form at the start of `window`.
    fn match_phrase(&self, window: &[String]) -> Option<(&'a str, usize)> {
        (2..=window.len()).rev().find_map(|len| {
            let phrase = window[..len].join(" ");
            self.index.root_of(&phrase).map(|root| (root, len))
        })
    }

    fn apply(&self, intent: &mut SearchIntent, root: &str, matched: &[String]) {
        match self.index.category(root) {
            Some(Category::Sale) => intent.is_on_sale = true,
            Some(category) => match category.facet() {
                Some(facet) => {
                    intent.facet_mut(facet).insert(root.to_string());
                }
                // expansion-only roots stay free text
                None => intent.residual_terms.extend(matched.iter().cloned()),
            },
            None => intent.residual_terms.extend(matched.iter().cloned()),
        }
    }
}

/// Parse a query against an explicit index.
pub fn parse_search_intent(index: &ExpansionIndex, query: &str) -> SearchIntent {
    IntentParser::new(index).parse(query)
}
