//! Spelling correction for search queries.

pub mod did_you_mean;

pub use did_you_mean::{DidYouMean, SpellingConfig};
