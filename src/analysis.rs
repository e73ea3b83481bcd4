//! Text analysis for butorkereso.
//!
//! Folding of Hungarian (and mixed-language) text into the comparison key
//! space shared by the synonym index, the intent parser and catalog matching.

pub mod normalizer;
pub mod stemmer;
pub mod stop_words;

pub use normalizer::{fold, normalize, tokenize};
pub use stemmer::{matches_compound, matches_inflected};
pub use stop_words::is_stop_word;
