//! Shared utility modules used across butorkereso components.

pub mod levenshtein;
