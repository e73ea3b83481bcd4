//! Error types for butorkereso.
//!
//! Searching itself never fails: malformed queries degrade to empty results.
//! The errors here cover the parts that touch the outside world, i.e. building
//! the synonym index, loading configuration and reading catalog files.
//!
//! # Examples
//!
//! ```
//! use butorkereso::error::{Result, SearchError};
//!
//! fn check_root(root: &str) -> Result<()> {
//!     if root.trim().is_empty() {
//!         return Err(SearchError::registry("empty root"));
//!     }
//!     Ok(())
//! }
//!
//! assert!(check_root("kanapé").is_ok());
//! assert!(check_root("  ").is_err());
//! ```

use std::io;

use thiserror::Error;

/// The main error type for butorkereso operations.
#[derive(Error, Debug)]
pub enum SearchError {
    /// I/O errors while reading configuration, synonym or catalog files.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// JSON serialization/deserialization errors.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Synonym registry defects detected while building the index.
    #[error("Registry error: {0}")]
    Registry(String),

    /// Invalid or unreadable configuration.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Invalid argument passed to an operation.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Generic error for other cases.
    #[error("Error: {0}")]
    Other(String),
}

/// Result type alias for operations that may fail with SearchError.
pub type Result<T> = std::result::Result<T, SearchError>;

impl SearchError {
    /// Create a new registry error.
    pub fn registry<S: Into<String>>(msg: S) -> Self {
        SearchError::Registry(msg.into())
    }

    /// Create a new configuration error.
    pub fn config<S: Into<String>>(msg: S) -> Self {
        SearchError::Config(msg.into())
    }

    /// Create a new invalid argument error.
    pub fn invalid_argument<S: Into<String>>(msg: S) -> Self {
        SearchError::InvalidArgument(msg.into())
    }

    /// Create a new generic error.
    pub fn other<S: Into<String>>(msg: S) -> Self {
        SearchError::Other(msg.into())
    }
}
