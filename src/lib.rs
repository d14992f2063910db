//! # Hanseg
//!
//! Pull-based Chinese tokenization over word segmentation.
//!
//! ## Features
//!
//! - Forward-only token streams with explicit exhaustion errors
//! - Pluggable segmenters, with `jieba-rs` as the default
//! - Per-token pre-processing applied at pull time
//! - Whitespace and n-gram tokenizers behind the same trait
//! - Factories with parallel batch tokenization

pub mod analysis;
pub mod cli;
pub mod config;
pub mod error;

pub mod prelude {
    pub use crate::analysis::factory::{TokenizerFactory, tokenize_batch};
    pub use crate::analysis::pre_processor::{SharedPreProcess, TokenPreProcess};
    pub use crate::analysis::segmenter::Segmenter;
    pub use crate::analysis::term::Term;
    pub use crate::analysis::tokenizer::Tokenizer;
    pub use crate::config::TokenizerConfig;
    pub use crate::error::{HansegError, Result};
}

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
