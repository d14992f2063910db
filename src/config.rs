//! Configuration for building tokenizer factories.
//!
//! ```
//! use hanseg::config::{PreProcessorKind, TokenizerConfig, TokenizerKind};
//!
//! let config = TokenizerConfig::from_json_str(
//!     r#"{ "tokenizer": { "type": "ngram", "min_gram": 1, "max_gram": 2 },
//!          "pre_processor": "lowercase" }"#,
//! )
//! .unwrap();
//!
//! assert_eq!(config.pre_processor, PreProcessorKind::Lowercase);
//! assert!(matches!(config.tokenizer, TokenizerKind::Ngram { min_gram: 1, max_gram: 2 }));
//! ```

use std::fs;
use std::path::Path;
use std::sync::Arc;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::analysis::factory::{
    ChineseTokenizerFactory, NgramTokenizerFactory, TokenizerFactory, WhitespaceTokenizerFactory,
};
use crate::analysis::pre_processor::{
    CommonPreProcessor, LowercasePreProcessor, SharedPreProcess, UppercasePreProcessor,
};
use crate::analysis::segmenter::{JiebaSegmenter, UserWord, default_segmenter};
use crate::analysis::tokenizer::ngram::validate_gram_range;
use crate::error::Result;

/// Top-level tokenizer configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TokenizerConfig {
    /// Which tokenizer the factory builds.
    pub tokenizer: TokenizerKind,

    /// Pre-processor installed on every tokenizer.
    pub pre_processor: PreProcessorKind,

    /// Thread pool size for batch tokenization.
    /// If None, uses the number of CPU cores.
    pub threads: Option<usize>,
}

impl Default for TokenizerConfig {
    fn default() -> Self {
        Self {
            tokenizer: TokenizerKind::default(),
            pre_processor: PreProcessorKind::None,
            threads: None,
        }
    }
}

/// Tokenizer variant and its parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum TokenizerKind {
    /// Segmenter-backed Chinese tokenizer.
    Chinese {
        /// Enable HMM new-word discovery.
        #[serde(default = "default_hmm")]
        hmm: bool,

        /// Words added on top of the built-in dictionary.
        #[serde(default)]
        user_words: Vec<UserWord>,
    },

    /// Split on whitespace.
    Whitespace,

    /// Character n-grams.
    Ngram { min_gram: usize, max_gram: usize },
}

fn default_hmm() -> bool {
    true
}

impl Default for TokenizerKind {
    fn default() -> Self {
        TokenizerKind::Chinese {
            hmm: default_hmm(),
            user_words: Vec::new(),
        }
    }
}

/// Stock pre-processors selectable from configuration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PreProcessorKind {
    /// Tokens are returned as segmented.
    #[default]
    None,
    Lowercase,
    Uppercase,
    /// Strip digits and punctuation, then lowercase.
    Common,
}

impl PreProcessorKind {
    /// Build the pre-processor, or `None` for pass-through.
    pub fn build(&self) -> Option<SharedPreProcess> {
        match self {
            PreProcessorKind::None => None,
            PreProcessorKind::Lowercase => Some(Arc::new(LowercasePreProcessor)),
            PreProcessorKind::Uppercase => Some(Arc::new(UppercasePreProcessor)),
            PreProcessorKind::Common => Some(Arc::new(CommonPreProcessor)),
        }
    }
}

impl TokenizerConfig {
    /// Parse a configuration from JSON and validate it.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: TokenizerConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Load a configuration from a JSON file and validate it.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        debug!("loading tokenizer config from {}", path.display());
        Self::from_json_str(&fs::read_to_string(path)?)
    }

    pub fn validate(&self) -> Result<()> {
        if let TokenizerKind::Ngram { min_gram, max_gram } = self.tokenizer {
            validate_gram_range(min_gram, max_gram)?;
        }
        Ok(())
    }

    /// Build the configured factory with its pre-processor installed.
    ///
    /// A Chinese tokenizer with HMM on and no user words reuses the shared
    /// default segmenter; any other setting builds a dedicated one.
    pub fn build_factory(&self) -> Result<Box<dyn TokenizerFactory>> {
        self.validate()?;

        let factory: Box<dyn TokenizerFactory> = match &self.tokenizer {
            TokenizerKind::Chinese { hmm, user_words } => {
                if *hmm && user_words.is_empty() {
                    Box::new(ChineseTokenizerFactory::new(default_segmenter()))
                } else {
                    let segmenter = JiebaSegmenter::with_options(*hmm, user_words);
                    Box::new(ChineseTokenizerFactory::new(Arc::new(segmenter)))
                }
            }
            TokenizerKind::Whitespace => Box::new(WhitespaceTokenizerFactory::new()),
            TokenizerKind::Ngram { min_gram, max_gram } => {
                Box::new(NgramTokenizerFactory::new(*min_gram, *max_gram)?)
            }
        };

        if let Some(pre_processor) = self.pre_processor.build() {
            factory.set_token_pre_processor(pre_processor);
        }

        debug!(
            "built {} tokenizer factory (pre_processor: {:?})",
            factory.name(),
            self.pre_processor
        );
        Ok(factory)
    }
}
