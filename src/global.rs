//! Process-wide default index and convenience functions over it.
//!
//! The index is initialized once, either explicitly with [`install`] during
//! start-up or lazily on first use from the built-in registry merged with
//! the synonym file named by `BUTORKERESO_SYNONYMS`. After that it is
//! read-only and shared by every thread.

use std::sync::{Arc, OnceLock};

use log::{debug, error};

use crate::error::{Result, SearchError};
use crate::intent::{self, SearchIntent};
use crate::search::{BroadenAdvisor, ProductRecord, SearchEngine, SearchOptions, SearchResult};
use crate::spelling::DidYouMean;
use crate::synonym::expand::SearchTerms;
use crate::synonym::index::ExpansionIndex;
use crate::synonym::registry::SynonymRegistry;

/// Environment variable naming an external synonym JSON file.
pub const SYNONYMS_ENV: &str = "BUTORKERESO_SYNONYMS";

static INDEX: OnceLock<Arc<ExpansionIndex>> = OnceLock::new();

/// Install the process-wide index. Fails if one is already in place.
pub fn install(index: ExpansionIndex) -> Result<()> {
    INDEX
        .set(Arc::new(index))
        .map_err(|_| SearchError::other("the global synonym index is already initialized"))
}

/// The process-wide index, built on first use if nothing was installed.
pub fn index() -> &'static Arc<ExpansionIndex> {
    INDEX.get_or_init(|| Arc::new(build_default_index()))
}

fn build_default_index() -> ExpansionIndex {
    let registry = match std::env::var_os(SYNONYMS_ENV) {
        Some(path) => {
            debug!("Loading external synonyms from {}", path.to_string_lossy());
            SynonymRegistry::with_external_file(path)
        }
        None => SynonymRegistry::builtin(),
    };

    registry
        .build_index()
        .or_else(|e| {
            error!("{e}; falling back to the built-in synonym registry");
            SynonymRegistry::builtin().build_index()
        })
        .unwrap_or_else(|e| {
            error!("{e}; synonym expansion is disabled");
            ExpansionIndex::default()
        })
}

/// A search engine over the process-wide index.
pub fn engine() -> SearchEngine {
    SearchEngine::new(Arc::clone(index()))
}

pub fn expand_with_synonyms<S: AsRef<str>>(words: &[S]) -> Vec<String> {
    index().expand_with_synonyms(words)
}

pub fn expand_search_terms<T: Into<SearchTerms>>(terms: T) -> Vec<String> {
    index().expand_search_terms(terms)
}

pub fn parse_search_intent(query: &str) -> SearchIntent {
    intent::parse_search_intent(index(), query)
}

pub fn smart_search<'a>(
    catalog: &'a [ProductRecord],
    query: &str,
    options: &SearchOptions,
) -> SearchResult<'a> {
    engine().smart_search(catalog, query, options)
}

pub fn get_did_you_mean_suggestion(word: &str) -> Option<String> {
    DidYouMean::new(index()).suggest(word)
}

pub fn get_broaden_suggestions(
    query: &str,
    current_result_count: usize,
    max_suggestions: usize,
) -> Vec<String> {
    BroadenAdvisor::new(index()).suggest(query, current_result_count, max_suggestions)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_global_functions() {
        assert!(expand_with_synonyms(&["kanapé"]).contains(&"szofa".to_string()));
        assert_eq!(
            expand_search_terms("bézs kanapé"),
            expand_with_synonyms(&["bézs", "kanapé"])
        );
        assert!(!parse_search_intent("modern szekrény").styles.is_empty());
        assert!(get_did_you_mean_suggestion("kanapa").is_some());
        assert!(get_broaden_suggestions("kanapé 100e alatt", 20, 3).is_empty());
    }

    #[test]
    fn test_install_after_init_fails() {
        let _ = index();
        assert!(install(ExpansionIndex::default()).is_err());
    }
}
