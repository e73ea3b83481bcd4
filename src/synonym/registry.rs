//! Synonym registry: root concepts and their surface forms.
//!
//! The registry is the editable side of synonym handling. It starts from the
//! built-in furniture vocabulary, can be extended with an external JSON
//! document at start-up, and is then frozen into an
//! [`ExpansionIndex`](super::index::ExpansionIndex).

use std::collections::{BTreeMap, HashMap, HashSet};
use std::path::Path;

use log::{debug, warn};
use serde::{Deserialize, Serialize};

use crate::analysis::normalize;
use crate::error::{Result, SearchError};
use crate::synonym::builtin::BUILTIN_SYNONYMS;
use crate::synonym::category::Category;
use crate::synonym::index::ExpansionIndex;

/// A root concept together with its synonymous surface forms.
///
/// The root is implicitly a member of its own synonym set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SynonymEntry {
    /// Display form of the root (e.g. "kanapé").
    pub root: String,
    /// Facet category the root classifies into.
    pub category: Category,
    /// Additional surface forms, in declaration order.
    #[serde(default)]
    pub synonyms: Vec<String>,
}

impl SynonymEntry {
    /// Create a new synonym entry.
    pub fn new<R, I, S>(root: R, category: Category, synonyms: I) -> Self
    where
        R: Into<String>,
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        SynonymEntry {
            root: root.into(),
            category,
            synonyms: synonyms.into_iter().map(Into::into).collect(),
        }
    }

    /// The root followed by every synonym.
    pub fn forms(&self) -> impl Iterator<Item = &str> {
        std::iter::once(self.root.as_str()).chain(self.synonyms.iter().map(String::as_str))
    }
}

/// Externally supplied partial mapping: root → additional synonyms.
///
/// Deserialized from a flat JSON object:
///
/// ```json
/// { "kanapé": ["díván", "lounge sofa"], "puff": ["ülőke"] }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ExternalSynonyms(BTreeMap<String, Vec<String>>);

impl ExternalSynonyms {
    /// Create an empty mapping.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add synonyms for a root.
    pub fn insert<R, I, S>(&mut self, root: R, synonyms: I)
    where
        R: Into<String>,
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.0
            .entry(root.into())
            .or_default()
            .extend(synonyms.into_iter().map(Into::into));
    }

    /// Parse the mapping from a JSON string.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load the mapping from a JSON file.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            SearchError::config(format!(
                "Failed to read synonym file '{}': {}",
                path.display(),
                e
            ))
        })?;

        serde_json::from_str(&content).map_err(|e| {
            SearchError::config(format!(
                "Failed to parse synonym file '{}': {}",
                path.display(),
                e
            ))
        })
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &Vec<String>)> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Merge an external mapping into a base entry collection.
///
/// Union semantics, returning a new collection:
/// - a root present in both gets the union of both synonym lists
///   (deduplicated by normalized form, base order first);
/// - an external root that normalizes to a surface form of a base entry is
///   merged into that entry;
/// - a root present only externally becomes a new [`Category::General`] entry.
pub fn merge_synonyms(base: &[SynonymEntry], external: &ExternalSynonyms) -> Vec<SynonymEntry> {
    let mut merged: Vec<SynonymEntry> = base.to_vec();
    let mut seen_forms: Vec<HashSet<String>> = merged
        .iter()
        .map(|entry| entry.forms().map(normalize).collect())
        .collect();

    // Root keys take precedence over synonym forms when resolving an
    // external root to an existing entry.
    let mut root_owner: HashMap<String, usize> = HashMap::new();
    let mut form_owner: HashMap<String, usize> = HashMap::new();
    for (idx, entry) in merged.iter().enumerate() {
        root_owner.entry(normalize(&entry.root)).or_insert(idx);
        for form in entry.synonyms.iter().map(|s| normalize(s)) {
            form_owner.entry(form).or_insert(idx);
        }
    }

    for (root, synonyms) in external.iter() {
        let key = normalize(root);
        if key.is_empty() {
            warn!("Ignoring external synonym root {root:?}: empty after normalization");
            continue;
        }

        let owner = root_owner
            .get(&key)
            .or_else(|| form_owner.get(&key))
            .copied();

        let idx = match owner {
            Some(idx) => idx,
            None => {
                debug!("Adding external synonym root {root:?}");
                merged.push(SynonymEntry::new(
                    root.clone(),
                    Category::General,
                    Vec::<String>::new(),
                ));
                seen_forms.push(HashSet::from([key.clone()]));
                root_owner.insert(key, merged.len() - 1);
                merged.len() - 1
            }
        };

        for synonym in synonyms {
            let form = normalize(synonym);
            if form.is_empty() || !seen_forms[idx].insert(form.clone()) {
                continue;
            }
            merged[idx].synonyms.push(synonym.clone());
            form_owner.entry(form).or_insert(idx);
        }
    }

    merged
}

/// Ordered collection of synonym entries.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SynonymRegistry {
    entries: Vec<SynonymEntry>,
}

impl SynonymRegistry {
    /// Create a registry from explicit entries.
    pub fn new(entries: Vec<SynonymEntry>) -> Self {
        SynonymRegistry { entries }
    }

    /// The built-in furniture vocabulary.
    pub fn builtin() -> Self {
        let entries = BUILTIN_SYNONYMS
            .iter()
            .map(|(root, category, synonyms)| {
                SynonymEntry::new(*root, *category, synonyms.iter().copied())
            })
            .collect();
        SynonymRegistry { entries }
    }

    /// The built-in vocabulary merged with an external synonym file.
    ///
    /// A file that cannot be read or parsed is reported with a warning and
    /// the built-in registry is used unchanged.
    pub fn with_external_file<P: AsRef<Path>>(path: P) -> Self {
        let builtin = Self::builtin();
        match ExternalSynonyms::load_from_file(path.as_ref()) {
            Ok(external) => {
                debug!(
                    "Merging {} external synonym roots from {}",
                    external.len(),
                    path.as_ref().display()
                );
                builtin.merge(&external)
            }
            Err(e) => {
                warn!("{e}; continuing with the built-in synonym registry");
                builtin
            }
        }
    }

    /// Return a new registry with `external` merged in.
    pub fn merge(&self, external: &ExternalSynonyms) -> Self {
        SynonymRegistry {
            entries: merge_synonyms(&self.entries, external),
        }
    }

    pub fn entries(&self) -> &[SynonymEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Freeze the registry into an expansion index.
    pub fn build_index(&self) -> Result<ExpansionIndex> {
        ExpansionIndex::build(&self.entries)
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use tempfile::NamedTempFile;

    use super::*;

    fn base() -> Vec<SynonymEntry> {
        vec![
            SynonymEntry::new("kanapé", Category::ProductType, ["szófa", "sofa"]),
            SynonymEntry::new("bézs", Category::Color, ["beige"]),
        ]
    }

    #[test]
    fn test_merge_unions_existing_root() {
        let mut external = ExternalSynonyms::new();
        external.insert("kanape", ["díván", "Sofa"]);

        let merged = merge_synonyms(&base(), &external);
        assert_eq!(merged.len(), 2);
        assert_eq!(merged[0].synonyms, vec!["szófa", "sofa", "díván"]);
    }

    #[test]
    fn test_merge_resolves_root_through_synonym_form() {
        let mut external = ExternalSynonyms::new();
        external.insert("szofa", ["lounge"]);

        let merged = merge_synonyms(&base(), &external);
        assert_eq!(merged.len(), 2);
        assert!(merged[0].synonyms.contains(&"lounge".to_string()));
    }

    #[test]
    fn test_merge_adds_new_general_root() {
        let mut external = ExternalSynonyms::new();
        external.insert("ikea", ["ikeas", "ikea"]);

        let merged = merge_synonyms(&base(), &external);
        assert_eq!(merged.len(), 3);
        assert_eq!(merged[2].root, "ikea");
        assert_eq!(merged[2].category, Category::General);
        // the root itself is not repeated as a synonym
        assert_eq!(merged[2].synonyms, vec!["ikeas"]);
    }

    #[test]
    fn test_merge_does_not_touch_base() {
        let base = base();
        let mut external = ExternalSynonyms::new();
        external.insert("bézs", ["drapp"]);

        let merged = merge_synonyms(&base, &external);
        assert_eq!(base[1].synonyms, vec!["beige"]);
        assert_eq!(merged[1].synonyms, vec!["beige", "drapp"]);
    }

    #[test]
    fn test_external_from_json() {
        let external =
            ExternalSynonyms::from_json(r#"{"kanapé": ["díván"], "puff": ["ülőke"]}"#).unwrap();
        assert_eq!(external.len(), 2);
        assert!(ExternalSynonyms::from_json("[1, 2]").is_err());
    }

    #[test]
    fn test_with_external_file() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, r#"{{"kanapé": ["díván"]}}"#).unwrap();

        let registry = SynonymRegistry::with_external_file(file.path());
        let kanape = registry
            .entries()
            .iter()
            .find(|e| e.root == "kanapé")
            .unwrap();
        assert!(kanape.synonyms.contains(&"díván".to_string()));
        assert_eq!(registry.len(), SynonymRegistry::builtin().len());
    }

    #[test]
    fn test_with_broken_external_file_falls_back() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "not json").unwrap();

        let registry = SynonymRegistry::with_external_file(file.path());
        assert_eq!(registry, SynonymRegistry::builtin());

        let missing = SynonymRegistry::with_external_file("/nonexistent/synonyms.json");
        assert_eq!(missing, SynonymRegistry::builtin());
    }

    #[test]
    fn test_builtin_builds() {
        let registry = SynonymRegistry::builtin();
        assert!(!registry.is_empty());
        assert!(registry.build_index().is_ok());
    }
}
