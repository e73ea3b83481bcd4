//! Catalog search: filtering, ranking and fallback suggestions.

pub mod broaden;
pub mod engine;
pub mod matcher;
pub mod product;
pub mod result;

pub use self::broaden::{BroadenAdvisor, DEFAULT_PLENTY_THRESHOLD, Relaxation};
pub use self::engine::{SearchEngine, SearchOptions};
pub use self::matcher::{MatchPlan, MatchTier};
pub use self::product::{ProductRecord, load_catalog};
pub use self::result::SearchResult;
