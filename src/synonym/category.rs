//! Closed set of categories a synonym root can belong to.

use std::fmt;

use serde::{Deserialize, Serialize};

/// One classification dimension of a search intent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Facet {
    ProductType,
    Color,
    Style,
    Material,
    Room,
}

impl Facet {
    /// All facets, in the order they are rendered into query strings.
    pub const ALL: [Facet; 5] = [
        Facet::Style,
        Facet::Color,
        Facet::Material,
        Facet::ProductType,
        Facet::Room,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Facet::ProductType => "product_type",
            Facet::Color => "color",
            Facet::Style => "style",
            Facet::Material => "material",
            Facet::Room => "room",
        }
    }
}

impl fmt::Display for Facet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Category of a synonym root.
///
/// The five facet categories drive intent parsing. `Sale` marks the
/// "olcsó/akciós" group that sets the on-sale flag, and `General` roots only
/// take part in term expansion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    ProductType,
    Color,
    Style,
    Material,
    Room,
    Sale,
    General,
}

impl Category {
    /// The facet this category classifies into, if any.
    pub fn facet(&self) -> Option<Facet> {
        match self {
            Category::ProductType => Some(Facet::ProductType),
            Category::Color => Some(Facet::Color),
            Category::Style => Some(Facet::Style),
            Category::Material => Some(Facet::Material),
            Category::Room => Some(Facet::Room),
            Category::Sale | Category::General => None,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Category::Sale => "sale",
            Category::General => "general",
            other => other.facet().map(|f| f.name()).unwrap_or("general"),
        }
    }
}

impl From<Facet> for Category {
    fn from(facet: Facet) -> Self {
        match facet {
            Facet::ProductType => Category::ProductType,
            Facet::Color => Category::Color,
            Facet::Style => Category::Style,
            Facet::Material => Category::Material,
            Facet::Room => Category::Room,
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_facet_round_trip() {
        for facet in Facet::ALL {
            assert_eq!(Category::from(facet).facet(), Some(facet));
        }
        assert_eq!(Category::Sale.facet(), None);
        assert_eq!(Category::General.facet(), None);
    }

    #[test]
    fn test_serde_names() {
        let json = serde_json::to_string(&Category::ProductType).unwrap();
        assert_eq!(json, "\"product_type\"");
        let category: Category = serde_json::from_str("\"sale\"").unwrap();
        assert_eq!(category, Category::Sale);
    }
}
