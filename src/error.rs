//! Error types for the autotag library.
//!
//! All fallible operations return [`AutotagError`] through the crate-wide
//! [`Result`] alias.
//!
//! # Examples
//!
//! ```
//! use autotag::error::{AutotagError, Result};
//!
//! fn example_operation() -> Result<()> {
//!     Err(AutotagError::invalid_config("score_cutoff must not be negative"))
//! }
//!
//! match example_operation() {
//!     Ok(_) => println!("Success"),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use std::io;

use thiserror::Error;

/// The main error type for autotag operations.
#[derive(Error, Debug)]
pub enum AutotagError {
    /// I/O errors (reading word lists, config files, input text)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Invalid tagger configuration
    #[error("Configuration error: {0}")]
    Config(String),

    /// Stopword, whitelist or tag-constant data could not be loaded
    #[error("Lexicon error: {0}")]
    Lexicon(String),

    /// Analysis errors (pattern compilation, pipeline failures)
    #[error("Analysis error: {0}")]
    Analysis(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic anyhow error
    #[error("{0:#}")]
    Anyhow(#[from] anyhow::Error),
}

/// Result type alias for operations that may fail with AutotagError.
pub type Result<T> = std::result::Result<T, AutotagError>;

impl AutotagError {
    /// Create a new invalid config error.
    pub fn invalid_config<S: Into<String>>(msg: S) -> Self {
        AutotagError::Config(msg.into())
    }

    /// Create a new lexicon error.
    pub fn lexicon<S: Into<String>>(msg: S) -> Self {
        AutotagError::Lexicon(msg.into())
    }

    /// Create a new analysis error.
    pub fn analysis<S: Into<String>>(msg: S) -> Self {
        AutotagError::Analysis(msg.into())
    }
}
