//! Whitespace tokenizer implementation.

use super::{TokenCursor, Tokenizer};

use crate::analysis::pre_processor::SharedPreProcess;
use crate::error::Result;

/// A tokenizer that splits text on whitespace.
#[derive(Debug)]
pub struct WhitespaceTokenizer {
    cursor: TokenCursor<String>,
}

impl WhitespaceTokenizer {
    /// Create a new whitespace tokenizer over `text`.
    pub fn new(text: &str) -> Self {
        let tokens = text.split_whitespace().map(str::to_string).collect();
        WhitespaceTokenizer {
            cursor: TokenCursor::new(tokens),
        }
    }
}

impl Tokenizer for WhitespaceTokenizer {
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
        "whitespace"
    }
}
