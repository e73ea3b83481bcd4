//! # butorkereso
//!
//! Search-intent parsing and synonym expansion for a Hungarian furniture
//! shop.
//!
//! ## Features
//!
//! - Diacritic and case folding of Hungarian queries
//! - Synonym registry with external JSON extension
//! - Facet, price range and sale detection from free text
//! - Catalog filtering and deterministic ranking
//! - "Did you mean" and "broaden your search" fallbacks
//!
//! ```
//! use butorkereso::{ProductRecord, SearchOptions, smart_search};
//!
//! let catalog = vec![
//!     ProductRecord::new("1", "Modern kanapé bézs", "Nappali > Kanapék", 150_000.0),
//!     ProductRecord::new("2", "Skandináv fotel", "Nappali > Fotelok", 80_000.0),
//! ];
//! let result = smart_search(&catalog, "bézs szófa 200e alatt", &SearchOptions::default());
//! assert_eq!(result.results[0].id, "1");
//! ```

pub mod analysis;
pub mod cli;
pub mod config;
pub mod error;
pub mod global;
pub mod intent;
pub mod search;
pub mod spelling;
pub mod synonym;
pub mod util;

pub use analysis::normalize;
pub use config::EngineConfig;
pub use error::{Result, SearchError};
pub use global::{
    expand_search_terms, expand_with_synonyms, get_broaden_suggestions,
    get_did_you_mean_suggestion, parse_search_intent, smart_search,
};
pub use intent::{PriceRange, SearchIntent};
pub use search::{ProductRecord, SearchEngine, SearchOptions, SearchResult};
pub use synonym::{Category, ExpansionIndex, Facet, SynonymRegistry};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
