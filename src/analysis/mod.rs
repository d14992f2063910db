//! Text analysis module for Hanseg.
//!
//! This module provides segmentation, the pull-based tokenizers built on top
//! of it, the pre-processors applied to their output and the factories that
//! tie those together.

pub mod factory;
pub mod nature;
pub mod pre_processor;
pub mod segmenter;
pub mod term;
pub mod tokenizer;

// Re-export commonly used types
pub use factory::*;
pub use nature::Nature;
pub use pre_processor::*;
pub use segmenter::*;
pub use term::Term;
pub use tokenizer::*;
