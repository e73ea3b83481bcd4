//! Search intent extraction.
//!
//! Turns a free-text query into structured facets, a price range and a sale
//! flag, leaving unrecognized words as residual free text.

pub mod parser;
pub mod price;
pub mod search_intent;

pub use parser::{IntentParser, parse_search_intent};
pub use price::PriceRange;
pub use search_intent::SearchIntent;
