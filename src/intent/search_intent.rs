use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::intent::price::PriceRange;
use crate::synonym::category::Facet;
use crate::synonym::index::ExpansionIndex;

/// Display form of the sale modifier used when rendering queries.
const SALE_WORD: &str = "akciós";

/// Structured interpretation of a free-text query.
///
/// Facet sets hold normalized roots and are empty, never absent, when the
/// query mentions nothing of that facet.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchIntent {
    pub product_types: BTreeSet<String>,
    pub colors: BTreeSet<String>,
    pub styles: BTreeSet<String>,
    pub materials: BTreeSet<String>,
    pub rooms: BTreeSet<String>,
    pub price_range: Option<PriceRange>,
    pub is_on_sale: bool,
    /// Normalized tokens not consumed by a facet, price phrase, sale word or
    /// stop word, in query order.
    pub residual_terms: Vec<String>,
}

impl SearchIntent {
    /// Create an empty intent.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether nothing at all was recognized.
    pub fn is_empty(&self) -> bool {
        !self.has_filters() && self.residual_terms.is_empty()
    }

    /// Whether any facet, price or sale filter was detected.
    pub fn has_filters(&self) -> bool {
        Facet::ALL.iter().any(|f| !self.facet(*f).is_empty())
            || self.price_range.is_some()
            || self.is_on_sale
    }

    pub fn facet(&self, facet: Facet) -> &BTreeSet<String> {
        match facet {
            Facet::ProductType => &self.product_types,
            Facet::Color => &self.colors,
            Facet::Style => &self.styles,
            Facet::Material => &self.materials,
            Facet::Room => &self.rooms,
        }
    }

    pub fn facet_mut(&mut self, facet: Facet) -> &mut BTreeSet<String> {
        match facet {
            Facet::ProductType => &mut self.product_types,
            Facet::Color => &mut self.colors,
            Facet::Style => &mut self.styles,
            Facet::Material => &mut self.materials,
            Facet::Room => &mut self.rooms,
        }
    }

    /// Facets with at least one root, in render order.
    pub fn active_facets(&self) -> impl Iterator<Item = Facet> + '_ {
        Facet::ALL
            .into_iter()
            .filter(|facet| !self.facet(*facet).is_empty())
    }

    /// Copy of the intent with a facet cleared.
    pub fn without(&self, facet: Facet) -> Self {
        let mut relaxed = self.clone();
        relaxed.facet_mut(facet).clear();
        relaxed
    }

    pub fn without_price(&self) -> Self {
        SearchIntent {
            price_range: None,
            ..self.clone()
        }
    }

    pub fn without_sale(&self) -> Self {
        SearchIntent {
            is_on_sale: false,
            ..self.clone()
        }
    }

    /// Render the intent as a query string the parser understands.
    ///
    /// Order: sale word, facets (style, color, material, product type,
    /// room), residual terms, then the price phrase. Roots use their display
    /// form from `index`.
    pub fn to_query_string(&self, index: &ExpansionIndex) -> String {
        let mut parts: Vec<String> = Vec::new();
        if self.is_on_sale {
            parts.push(SALE_WORD.to_string());
        }
        for facet in Facet::ALL {
            for root in self.facet(facet) {
                parts.push(index.display(root).unwrap_or(root).to_string());
            }
        }
        parts.extend(self.residual_terms.iter().cloned());
        if let Some(phrase) = self.price_range.as_ref().and_then(PriceRange::to_phrase) {
            parts.push(phrase);
        }
        parts.join(" ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::synonym::registry::SynonymRegistry;

    fn sample() -> SearchIntent {
        let mut intent = SearchIntent::new();
        intent.product_types.insert("kanape".to_string());
        intent.colors.insert("bezs".to_string());
        intent.styles.insert("modern".to_string());
        intent.price_range = Some(PriceRange::below(100_000.0));
        intent.is_on_sale = true;
        intent.residual_terms.push("harom".to_string());
        intent
    }

    #[test]
    fn test_empty_intent() {
        let intent = SearchIntent::new();
        assert!(intent.is_empty());
        assert!(!intent.has_filters());
        assert_eq!(intent.active_facets().count(), 0);
    }

    #[test]
    fn test_relaxation_helpers() {
        let intent = sample();
        assert!(intent.without(Facet::Color).colors.is_empty());
        assert_eq!(intent.without(Facet::Color).product_types, intent.product_types);
        assert_eq!(intent.without_price().price_range, None);
        assert!(!intent.without_sale().is_on_sale);
        assert_eq!(
            intent.active_facets().collect::<Vec<_>>(),
            vec![Facet::Style, Facet::Color, Facet::ProductType]
        );
    }

    #[test]
    fn test_to_query_string() {
        let index = SynonymRegistry::builtin().build_index().unwrap();
        assert_eq!(
            sample().to_query_string(&index),
            "akciós modern bézs kanapé harom 100e alatt"
        );
        assert_eq!(SearchIntent::new().to_query_string(&index), "");
    }

    #[test]
    fn test_serializes_camel_case() {
        let json = serde_json::to_value(sample()).unwrap();
        assert_eq!(json["isOnSale"], serde_json::json!(true));
        assert_eq!(json["productTypes"], serde_json::json!(["kanape"]));
        assert_eq!(json["priceRange"]["max"], serde_json::json!(100000.0));
    }
}
