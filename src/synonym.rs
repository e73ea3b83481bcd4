//! Synonym registry, expansion index and term expansion.
//!
//! - [`registry`] holds the editable entries (built-in vocabulary plus an
//!   optional external JSON document),
//! - [`index`] freezes them into the read-only [`ExpansionIndex`],
//! - [`expand`] implements term expansion on top of the index.

mod builtin;
pub mod category;
pub mod expand;
pub mod index;
pub mod registry;

pub use category::{Category, Facet};
pub use expand::SearchTerms;
pub use index::ExpansionIndex;
pub use registry::{ExternalSynonyms, SynonymEntry, SynonymRegistry, merge_synonyms};
