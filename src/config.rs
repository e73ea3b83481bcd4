//! Engine configuration.
//!
//! ```json
//! {
//!   "search": { "limit": 20, "max_suggestions": 3, "plenty_threshold": 10 },
//!   "spelling": { "max_distance_long": 2 },
//!   "synonyms_path": "synonyms.json"
//! }
//! ```
//!
//! Every section is optional and falls back to its defaults.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::error::{Result, SearchError};
use crate::search::engine::{SearchEngine, SearchOptions};
use crate::spelling::SpellingConfig;
use crate::synonym::index::ExpansionIndex;
use crate::synonym::registry::SynonymRegistry;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Default options for search calls.
    pub search: SearchOptions,
    /// Did-you-mean thresholds.
    pub spelling: SpellingConfig,
    /// External synonym file merged into the built-in registry.
    pub synonyms_path: Option<PathBuf>,
}

impl EngineConfig {
    /// Load configuration from a JSON file.
    ///
    /// A relative `synonyms_path` is resolved against the directory of the
    /// configuration file.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            SearchError::config(format!(
                "Failed to read config file '{}': {}",
                path.display(),
                e
            ))
        })?;
        let mut config: EngineConfig = serde_json::from_str(&content).map_err(|e| {
            SearchError::config(format!(
                "Failed to parse config file '{}': {}",
                path.display(),
                e
            ))
        })?;

        if let Some(synonyms) = &config.synonyms_path
            && synonyms.is_relative()
            && let Some(dir) = path.parent()
        {
            config.synonyms_path = Some(dir.join(synonyms));
        }
        debug!("Loaded config from {}: {config:?}", path.display());
        Ok(config)
    }

    /// The synonym registry this configuration describes.
    ///
    /// An unreadable synonym file is logged and skipped.
    pub fn registry(&self) -> SynonymRegistry {
        match &self.synonyms_path {
            Some(path) => SynonymRegistry::with_external_file(path),
            None => SynonymRegistry::builtin(),
        }
    }

    pub fn build_index(&self) -> Result<ExpansionIndex> {
        self.registry().build_index()
    }

    pub fn build_engine(&self) -> Result<SearchEngine> {
        let index = Arc::new(self.build_index()?);
        Ok(SearchEngine::with_spelling(index, self.spelling))
    }
}
