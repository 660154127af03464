//! Error types for the Remez library.
//!
//! All fallible operations return [`Result`], whose error type is the
//! [`RemezError`] enum. Only loading and parsing paths can fail; the query
//! paths (encoding, range membership, searching) are total by design and
//! report malformed input as an empty result instead of an error.
//!
//! # Examples
//!
//! ```
//! use remez::error::{RemezError, Result};
//!
//! fn example_operation() -> Result<()> {
//!     Err(RemezError::corpus("corpus file is empty"))
//! }
//!
//! match example_operation() {
//!     Ok(_) => println!("Success"),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use std::io;

use anyhow;
use thiserror::Error;

/// The main error type for Remez operations.
#[derive(Error, Debug)]
pub enum RemezError {
    /// I/O errors (reading corpus or reference files).
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Corpus-related errors (unrecognized shape, empty data).
    #[error("Corpus error: {0}")]
    Corpus(String),

    /// Catalog-related errors (unknown section name).
    #[error("Catalog error: {0}")]
    Catalog(String),

    /// The corpus has not been loaded, or its last load failed.
    #[error("Corpus unavailable: {0}")]
    Unavailable(String),

    /// JSON serialization/deserialization errors.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic error for other cases.
    #[error("Error: {0}")]
    Other(String),

    /// Generic anyhow error.
    #[error("Anyhow error: {0}")]
    Anyhow(#[from] anyhow::Error),
}

/// Result type alias for operations that may fail with RemezError.
pub type Result<T> = std::result::Result<T, RemezError>;

impl RemezError {
    /// Create a new corpus error.
    pub fn corpus<S: Into<String>>(msg: S) -> Self {
        RemezError::Corpus(msg.into())
    }

    /// Create a new catalog error.
    pub fn catalog<S: Into<String>>(msg: S) -> Self {
        RemezError::Catalog(msg.into())
    }

    /// Create a new unavailable error.
    pub fn unavailable<S: Into<String>>(msg: S) -> Self {
        RemezError::Unavailable(msg.into())
    }

    /// Create a new generic error.
    pub fn other<S: Into<String>>(msg: S) -> Self {
        RemezError::Other(msg.into())
    }

    /// Create a new invalid argument error.
    pub fn invalid_argument<S: Into<String>>(msg: S) -> Self {
        RemezError::Other(format!("Invalid argument: {}", msg.into()))
    }

    /// Create a new not found error.
    pub fn not_found<S: Into<String>>(msg: S) -> Self {
        RemezError::Other(format!("Not found: {}", msg.into()))
    }
}
