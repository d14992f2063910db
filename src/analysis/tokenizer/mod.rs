//! Pull-based tokenizers.
//!
//! Every tokenizer is built for one piece of text and walks a token
//! sequence computed up front. Callers check [`Tokenizer::has_more_tokens`]
//! before each [`Tokenizer::next_token`]; pulling past the end is an error,
//! not a silent stop.
//!
//! # Available Tokenizers
//!
//! - [`chinese::ChineseTokenizer`] - Words found by a [`Segmenter`](crate::analysis::segmenter::Segmenter)
//! - [`whitespace::WhitespaceTokenizer`] - Splits on whitespace characters
//! - [`ngram::NgramTokenizer`] - Character n-gram tokenization
//!
//! # Examples
//!
//! ```
//! use hanseg::analysis::tokenizer::Tokenizer;
//! use hanseg::analysis::tokenizer::whitespace::WhitespaceTokenizer;
//!
//! let mut tokenizer = WhitespaceTokenizer::new("Hello world");
//! assert_eq!(tokenizer.count_tokens(), 2);
//! while tokenizer.has_more_tokens() {
//!     println!("{}", tokenizer.next_token().unwrap());
//! }
//! ```

use crate::analysis::pre_processor::SharedPreProcess;
use crate::error::Result;

/// Trait for tokenizers that hand out string tokens one at a time.
///
/// The trait requires `Send` so a tokenizer can be moved to a worker thread;
/// a single instance is never meant to be pulled from concurrently.
pub trait Tokenizer: Send {
    /// Whether another token can be pulled.
    fn has_more_tokens(&self) -> bool;

    /// Total number of tokens, including those already pulled.
    fn count_tokens(&self) -> usize;

    /// Pull the next token.
    ///
    /// # Errors
    ///
    /// [`HansegError::Exhausted`](crate::error::HansegError::Exhausted) when
    /// no token is left. The tokenizer state is unchanged in that case.
    fn next_token(&mut self) -> Result<String>;

    /// Pull all remaining tokens in order.
    ///
    /// On an exhausted tokenizer this returns an empty vector.
    fn get_tokens(&mut self) -> Result<Vec<String>> {
        let mut tokens = Vec::new();
        while self.has_more_tokens() {
            tokens.push(self.next_token()?);
        }
        Ok(tokens)
    }

    /// Install or replace the pre-processor applied to subsequent pulls.
    fn set_token_pre_processor(&mut self, pre_processor: SharedPreProcess);

    /// Get the name of this tokenizer (for debugging and configuration).
    fn name(&self) -> &'static str;
}

// Individual tokenizer modules
pub mod chinese;
pub mod cursor;
pub mod ngram;
pub mod whitespace;

// Re-export all tokenizers for convenient access
pub use chinese::ChineseTokenizer;
pub use cursor::TokenCursor;
pub use ngram::NgramTokenizer;
pub use whitespace::WhitespaceTokenizer;
