//! Tokenizer factories.
//!
//! A factory picks the tokenizer variant once and then builds a fresh
//! tokenizer for every text it is given. Since tokenizers cannot rewind,
//! asking the factory again for the same text is how a caller starts over.
//!
//! The pre-processor installed on a factory is shared with every tokenizer
//! it creates from then on. Replacing it does not touch tokenizers that
//! already exist.
//!
//! # Examples
//!
//! ```
//! use std::sync::Arc;
//!
//! use hanseg::analysis::factory::{TokenizerFactory, WhitespaceTokenizerFactory};
//! use hanseg::analysis::pre_processor::LowercasePreProcessor;
//!
//! let factory = WhitespaceTokenizerFactory::new();
//! factory.set_token_pre_processor(Arc::new(LowercasePreProcessor));
//!
//! let mut tokenizer = factory.create("Hello World").unwrap();
//! assert_eq!(tokenizer.get_tokens().unwrap(), vec!["hello", "world"]);
//! ```

use std::fmt;
use std::sync::Arc;

use log::debug;
use parking_lot::RwLock;
use rayon::prelude::*;

use crate::analysis::pre_processor::SharedPreProcess;
use crate::analysis::segmenter::{Segmenter, default_segmenter};
use crate::analysis::tokenizer::ngram::validate_gram_range;
use crate::analysis::tokenizer::{
    ChineseTokenizer, NgramTokenizer, Tokenizer, WhitespaceTokenizer,
};
use crate::error::{HansegError, Result};

/// Trait for factories that build a tokenizer per text.
pub trait TokenizerFactory: Send + Sync {
    /// Build a tokenizer positioned at the first token of `text`.
    fn create(&self, text: &str) -> Result<Box<dyn Tokenizer>>;

    /// Install or replace the pre-processor for tokenizers created later.
    fn set_token_pre_processor(&self, pre_processor: SharedPreProcess);

    /// The pre-processor currently installed, if any.
    fn token_pre_processor(&self) -> Option<SharedPreProcess>;

    /// Get the name of the tokenizers this factory builds.
    fn name(&self) -> &'static str;
}

/// Pre-processor storage shared by all factories.
#[derive(Default)]
struct PreProcessorSlot(RwLock<Option<SharedPreProcess>>);

impl PreProcessorSlot {
    fn get(&self) -> Option<SharedPreProcess> {
        self.0.read().clone()
    }

    fn set(&self, pre_processor: SharedPreProcess) {
        *self.0.write() = Some(pre_processor);
    }

    fn install<T: Tokenizer + 'static>(&self, mut tokenizer: T) -> Box<dyn Tokenizer> {
        if let Some(pre_processor) = self.get() {
            tokenizer.set_token_pre_processor(pre_processor);
        }
        Box::new(tokenizer)
    }
}

impl fmt::Debug for PreProcessorSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PreProcessorSlot({})", self.0.read().is_some())
    }
}

/// Builds [`ChineseTokenizer`]s that share one segmenter.
pub struct ChineseTokenizerFactory {
    segmenter: Arc<dyn Segmenter>,
    pre_processor: PreProcessorSlot,
}

impl ChineseTokenizerFactory {
    pub fn new(segmenter: Arc<dyn Segmenter>) -> Self {
        ChineseTokenizerFactory {
            segmenter,
            pre_processor: PreProcessorSlot::default(),
        }
    }

    pub fn segmenter(&self) -> &Arc<dyn Segmenter> {
        &self.segmenter
    }
}

impl Default for ChineseTokenizerFactory {
    fn default() -> Self {
        Self::new(default_segmenter())
    }
}

impl TokenizerFactory for ChineseTokenizerFactory {
    fn create(&self, text: &str) -> Result<Box<dyn Tokenizer>> {
        let tokenizer = ChineseTokenizer::new(text, self.segmenter.as_ref())?;
        Ok(self.pre_processor.install(tokenizer))
    }

    fn set_token_pre_processor(&self, pre_processor: SharedPreProcess) {
        self.pre_processor.set(pre_processor);
    }

    fn token_pre_processor(&self) -> Option<SharedPreProcess> {
        self.pre_processor.get()
    }

    fn name(&self) -> &'static str {
        "chinese"
    }
}

/// Builds [`WhitespaceTokenizer`]s.
#[derive(Debug, Default)]
pub struct WhitespaceTokenizerFactory {
    pre_processor: PreProcessorSlot,
}

impl WhitespaceTokenizerFactory {
    pub fn new() -> Self {
        Self::default()
    }
}

impl TokenizerFactory for WhitespaceTokenizerFactory {
    fn create(&self, text: &str) -> Result<Box<dyn Tokenizer>> {
        Ok(self.pre_processor.install(WhitespaceTokenizer::new(text)))
    }

    fn set_token_pre_processor(&self, pre_processor: SharedPreProcess) {
        self.pre_processor.set(pre_processor);
    }

    fn token_pre_processor(&self) -> Option<SharedPreProcess> {
        self.pre_processor.get()
    }

    fn name(&self) -> &'static str {
        "whitespace"
    }
}

/// Builds [`NgramTokenizer`]s with a fixed gram range.
#[derive(Debug)]
pub struct NgramTokenizerFactory {
    min_gram: usize,
    max_gram: usize,
    pre_processor: PreProcessorSlot,
}

impl NgramTokenizerFactory {
    /// Create a factory; fails on the same ranges [`NgramTokenizer::new`] rejects.
    pub fn new(min_gram: usize, max_gram: usize) -> Result<Self> {
        validate_gram_range(min_gram, max_gram)?;
        Ok(NgramTokenizerFactory {
            min_gram,
            max_gram,
            pre_processor: PreProcessorSlot::default(),
        })
    }

    pub fn min_gram(&self) -> usize {
        self.min_gram
    }

    pub fn max_gram(&self) -> usize {
        self.max_gram
    }
}

impl TokenizerFactory for NgramTokenizerFactory {
    fn create(&self, text: &str) -> Result<Box<dyn Tokenizer>> {
        let tokenizer = NgramTokenizer::new(text, self.min_gram, self.max_gram)?;
        Ok(self.pre_processor.install(tokenizer))
    }

    fn set_token_pre_processor(&self, pre_processor: SharedPreProcess) {
        self.pre_processor.set(pre_processor);
    }

    fn token_pre_processor(&self) -> Option<SharedPreProcess> {
        self.pre_processor.get()
    }

    fn name(&self) -> &'static str {
        "ngram"
    }
}

/// Tokenize many texts in parallel, one tokenizer per text.
///
/// Results come back in input order. The first error aborts the batch.
/// `threads` defaults to the number of CPUs.
pub fn tokenize_batch<S>(
    factory: &dyn TokenizerFactory,
    texts: &[S],
    threads: Option<usize>,
) -> Result<Vec<Vec<String>>>
where
    S: AsRef<str> + Sync,
{
    let threads = threads.unwrap_or_else(num_cpus::get).max(1);
    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(threads)
        .build()
        .map_err(|e| HansegError::config(format!("Failed to build thread pool: {e}")))?;

    debug!(
        "tokenizing {} texts with {} on {} threads",
        texts.len(),
        factory.name(),
        threads
    );

    pool.install(|| {
        texts
            .par_iter()
            .map(|text| factory.create(text.as_ref())?.get_tokens())
            .collect()
    })
}
