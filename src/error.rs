//! Error types for the Hanseg library.
//!
//! All errors are represented by the [`HansegError`] enum. Tokenizers never
//! recover from these locally: a failed pull or a failed segmentation is
//! surfaced to the caller as-is.
//!
//! # Examples
//!
//! ```
//! use hanseg::error::{HansegError, Result};
//!
//! fn example_operation() -> Result<()> {
//!     Err(HansegError::config("min_gram must be at least 1"))
//! }
//!
//! match example_operation() {
//!     Ok(_) => println!("Success"),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use std::io;

use thiserror::Error;

/// The main error type for Hanseg operations.
#[derive(Error, Debug)]
pub enum HansegError {
    /// A token was pulled from a tokenizer that was never given a sequence.
    #[error("Tokenizer not initialized: no token sequence has been supplied")]
    NotInitialized,

    /// A token was pulled after the last one had been returned.
    #[error("Token stream exhausted after {consumed} tokens")]
    Exhausted {
        /// Number of tokens the stream produced before running dry.
        consumed: usize,
    },

    /// The segmenter failed while splitting the input text.
    #[error("Segmentation error: {0}")]
    Segmentation(String),

    /// Invalid tokenizer or factory configuration.
    #[error("Configuration error: {0}")]
    Config(String),

    /// I/O errors (configuration and input files)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for operations that may fail with HansegError.
pub type Result<T> = std::result::Result<T, HansegError>;

impl HansegError {
    /// Create a new segmentation error.
    pub fn segmentation<S: Into<String>>(msg: S) -> Self {
        HansegError::Segmentation(msg.into())
    }

    /// Create a new configuration error.
    pub fn config<S: Into<String>>(msg: S) -> Self {
        HansegError::Config(msg.into())
    }

    /// Create a new exhaustion error.
    pub fn exhausted(consumed: usize) -> Self {
        HansegError::Exhausted { consumed }
    }

    /// Whether this error reports a pull past the end of a stream.
    pub fn is_exhausted(&self) -> bool {
        matches!(self, HansegError::Exhausted { .. })
    }
}
