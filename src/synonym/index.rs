//! Frozen expansion index derived from the synonym registry.

use std::collections::{BTreeMap, BTreeSet};

use ahash::AHashMap;
use log::warn;

use crate::analysis::normalize;
use crate::analysis::stemmer::stem_candidates;
use crate::error::{Result, SearchError};
use crate::synonym::category::Category;
use crate::synonym::registry::SynonymEntry;

/// Read-only lookup structure shared by every query.
///
/// Built once from a collection of [`SynonymEntry`]s; the mappings are the
/// same regardless of the order of the entries.
#[derive(Debug, Clone, Default)]
pub struct ExpansionIndex {
    /// Every normalized surface form (including roots) → normalized root.
    word_to_root: AHashMap<String, String>,
    /// Normalized root → every normalized form of the root.
    root_to_expanded: AHashMap<String, BTreeSet<String>>,
    /// Normalized root → category.
    root_category: AHashMap<String, Category>,
    /// Normalized root → display form.
    root_display: AHashMap<String, String>,
    /// Longest surface form, in words.
    max_phrase_words: usize,
}

impl ExpansionIndex {
    /// Build an index from synonym entries.
    ///
    /// Fails when a root is assigned to two different categories or when a
    /// root normalizes to an empty string. Entries repeating a root in the
    /// same category are unioned.
    ///
    /// A surface form claimed by several roots maps to itself when it is a
    /// root, otherwise to the lexicographically smallest claiming root.
    pub fn build(entries: &[SynonymEntry]) -> Result<Self> {
        let mut categories: BTreeMap<String, Category> = BTreeMap::new();
        let mut displays: BTreeMap<String, String> = BTreeMap::new();
        let mut expanded: BTreeMap<String, BTreeSet<String>> = BTreeMap::new();

        for entry in entries {
            let root = normalize(&entry.root);
            if root.is_empty() {
                return Err(SearchError::registry(format!(
                    "root {:?} is empty after normalization",
                    entry.root
                )));
            }

            if let Some(existing) = categories.get(&root)
                && *existing != entry.category
            {
                return Err(SearchError::registry(format!(
                    "root '{}' is assigned to both {} and {}",
                    root, existing, entry.category
                )));
            }
            categories.insert(root.clone(), entry.category);

            displays
                .entry(root.clone())
                .and_modify(|display| {
                    if entry.root < *display {
                        *display = entry.root.clone();
                    }
                })
                .or_insert_with(|| entry.root.clone());

            let forms = expanded.entry(root.clone()).or_default();
            forms.insert(root.clone());
            forms.extend(
                entry
                    .synonyms
                    .iter()
                    .map(|s| normalize(s))
                    .filter(|f| !f.is_empty()),
            );
        }

        let mut claims: BTreeMap<&str, BTreeSet<&str>> = BTreeMap::new();
        for (root, forms) in &expanded {
            for form in forms {
                claims.entry(form.as_str()).or_default().insert(root.as_str());
            }
        }

        let mut word_to_root = AHashMap::with_capacity(claims.len());
        let mut max_phrase_words = 0;
        for (form, roots) in &claims {
            let owner = if expanded.contains_key(*form) {
                *form
            } else {
                // BTreeSet iteration is ordered: first is the smallest root.
                let first = roots.iter().next().copied().unwrap_or(*form);
                if roots.len() > 1 {
                    warn!("Surface form '{form}' is claimed by roots {roots:?}; using '{first}'");
                }
                first
            };
            max_phrase_words = max_phrase_words.max(form.split(' ').count());
            word_to_root.insert(form.to_string(), owner.to_string());
        }

        Ok(ExpansionIndex {
            word_to_root,
            root_to_expanded: expanded.into_iter().collect(),
            root_category: categories.into_iter().collect(),
            root_display: displays.into_iter().collect(),
            max_phrase_words,
        })
    }

    /// Root of an already normalized form, exact lookup only.
    pub fn root_of(&self, form: &str) -> Option<&str> {
        self.word_to_root.get(form).map(String::as_str)
    }

    /// Root of a normalized token, falling back to Hungarian suffix stripping
    /// for single words ("kanapekat" → "kanape").
    pub fn lookup(&self, token: &str) -> Option<&str> {
        if let Some(root) = self.root_of(token) {
            return Some(root);
        }
        if token.contains(' ') {
            return None;
        }
        stem_candidates(token)
            .into_iter()
            .find_map(|stem| self.root_of(stem))
    }

    /// Whether the normalized form is a registry member.
    pub fn contains_form(&self, form: &str) -> bool {
        self.word_to_root.contains_key(form)
    }

    /// Whether the normalized form is itself a root.
    pub fn is_root(&self, form: &str) -> bool {
        self.root_category.contains_key(form)
    }

    /// Every normalized form of a root (root included).
    pub fn expansions(&self, root: &str) -> Option<&BTreeSet<String>> {
        self.root_to_expanded.get(root)
    }

    pub fn category(&self, root: &str) -> Option<Category> {
        self.root_category.get(root).copied()
    }

    /// Display form of a root, e.g. "kanapé" for "kanape".
    pub fn display(&self, root: &str) -> Option<&str> {
        self.root_display.get(root).map(String::as_str)
    }

    /// Iterate `(form, root)` pairs in unspecified order.
    pub fn forms(&self) -> impl Iterator<Item = (&str, &str)> {
        self.word_to_root
            .iter()
            .map(|(form, root)| (form.as_str(), root.as_str()))
    }

    /// Iterate normalized roots in unspecified order.
    pub fn roots(&self) -> impl Iterator<Item = &str> {
        self.root_category.keys().map(String::as_str)
    }

    pub fn max_phrase_words(&self) -> usize {
        self.max_phrase_words
    }

    /// Number of distinct surface forms.
    pub fn len(&self) -> usize {
        self.word_to_root.len()
    }

    pub fn is_empty(&self) -> bool {
        self.word_to_root.is_empty()
    }
}
