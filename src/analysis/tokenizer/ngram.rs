//! N-gram tokenizer implementation.

use crate::analysis::pre_processor::SharedPreProcess;
use crate::analysis::tokenizer::{TokenCursor, Tokenizer};
use crate::error::{HansegError, Result};

/// A tokenizer that generates character n-grams.
///
/// Grams are emitted by start position and, for each start, from the
/// shortest to the longest size. Unsegmented Chinese text is the main use:
/// bigrams give a dictionary-free fallback to word segmentation.
///
/// # Examples
///
/// ```
/// use hanseg::analysis::tokenizer::Tokenizer;
/// use hanseg::analysis::tokenizer::ngram::NgramTokenizer;
///
/// let mut tokenizer = NgramTokenizer::bigram("北京是首都");
/// assert_eq!(
///     tokenizer.get_tokens().unwrap(),
///     vec!["北京", "京是", "是首", "首都"]
/// );
///
/// let mut tokenizer = NgramTokenizer::new("abc", 2, 3).unwrap();
/// assert_eq!(tokenizer.get_tokens().unwrap(), vec!["ab", "abc", "bc"]);
/// ```
#[derive(Debug)]
pub struct NgramTokenizer {
    cursor: TokenCursor<String>,
}

impl NgramTokenizer {
    /// Create a new n-gram tokenizer over `text`.
    ///
    /// # Errors
    ///
    /// Returns a configuration error if `min_gram` is 0 or `max_gram` is
    /// less than `min_gram`.
    pub fn new(text: &str, min_gram: usize, max_gram: usize) -> Result<Self> {
        validate_gram_range(min_gram, max_gram)?;
        Ok(Self::build(text, min_gram, max_gram))
    }

    /// Create a bigram tokenizer (n=2).
    pub fn bigram(text: &str) -> Self {
        Self::build(text, 2, 2)
    }

    /// Create a trigram tokenizer (n=3).
    pub fn trigram(text: &str) -> Self {
        Self::build(text, 3, 3)
    }

    fn build(text: &str, min_gram: usize, max_gram: usize) -> Self {
        let chars: Vec<char> = text.chars().collect();
        let mut tokens: Vec<String> = Vec::new();

        for start in 0..chars.len() {
            for gram_size in min_gram..=max_gram {
                let end = start + gram_size;
                if end > chars.len() {
                    break;
                }
                tokens.push(chars[start..end].iter().collect());
            }
        }

        NgramTokenizer {
            cursor: TokenCursor::new(tokens),
        }
    }
}

/// Check an n-gram size range.
pub fn validate_gram_range(min_gram: usize, max_gram: usize) -> Result<()> {
    if min_gram == 0 {
        return Err(HansegError::config("min_gram must be at least 1"));
    }
    if max_gram < min_gram {
        return Err(HansegError::config(format!(
            "max_gram ({max_gram}) must be >= min_gram ({min_gram})"
        )));
    }
    Ok(())
}

impl Tokenizer for NgramTokenizer {
    fn has_more_tokens(&self) -> bool {
        self.cursor.has_more()
    }

    fn count_tokens(&self) -> usize {
        self.cursor.count()
    }

    fn next_token(&mut self) -> Result<String> {
        self.cursor.next_token()
    }

    fn set_token_pre_processor(&mut self, pre_processor: SharedPreProcess) {
        self.cursor.set_pre_processor(pre_processor);
    }

    fn name(&self) -> &'static str {
        "ngram"
    }
}
