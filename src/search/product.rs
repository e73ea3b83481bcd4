//! Catalog records as supplied by the shop.

use std::fmt;
use std::path::Path;

use serde::{Deserialize, Deserializer, Serialize};

use crate::error::{Result, SearchError};

/// One product of the catalog. Read only; the engine never copies records.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductRecord {
    #[serde(deserialize_with = "string_or_number")]
    pub id: String,
    pub name: String,
    /// Category path delimited by `>`, `/` or `|` ("Nappali > Kanapék").
    #[serde(default)]
    pub category: String,
    pub price: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sale_price: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub original_price: Option<f64>,
}

impl ProductRecord {
    pub fn new(id: impl Into<String>, name: impl Into<String>, category: impl Into<String>, price: f64) -> Self {
        ProductRecord {
            id: id.into(),
            name: name.into(),
            category: category.into(),
            price,
            sale_price: None,
            original_price: None,
        }
    }

    pub fn with_sale_price(mut self, sale_price: f64) -> Self {
        self.sale_price = Some(sale_price);
        self
    }

    pub fn with_original_price(mut self, original_price: f64) -> Self {
        self.original_price = Some(original_price);
        self
    }

    /// The price the customer pays: the sale price when it undercuts the
    /// list price.
    pub fn effective_price(&self) -> f64 {
        match self.sale_price {
            Some(sale) if sale < self.price => sale,
            _ => self.price,
        }
    }

    pub fn is_discounted(&self) -> bool {
        self.sale_price.is_some_and(|sale| sale < self.price)
            || self.original_price.is_some_and(|original| original > self.price)
    }
}

impl fmt::Display for ProductRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {} ({})", self.id, self.name, self.category)
    }
}

/// Load a catalog from a JSON array of records.
pub fn load_catalog<P: AsRef<Path>>(path: P) -> Result<Vec<ProductRecord>> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path).map_err(|e| {
        SearchError::invalid_argument(format!(
            "Failed to read catalog '{}': {}",
            path.display(),
            e
        ))
    })?;
    Ok(serde_json::from_str(&content)?)
}

fn string_or_number<'de, D>(deserializer: D) -> std::result::Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Id {
        Text(String),
        Integer(i64),
        Float(f64),
    }

    Ok(match Id::deserialize(deserializer)? {
        Id::Text(text) => text,
        Id::Integer(n) => n.to_string(),
        Id::Float(n) => n.to_string(),
    })
}
