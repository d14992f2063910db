//! Forward-only cursor over a precomputed token sequence.

use std::fmt;

use crate::analysis::pre_processor::SharedPreProcess;
use crate::error::{HansegError, Result};

/// The pull state every tokenizer is built on.
///
/// The sequence is set once and never mutated; only the position moves, and
/// only forward. A cursor created with [`TokenCursor::uninitialized`] has no
/// sequence at all and refuses to hand out tokens.
pub struct TokenCursor<T> {
    tokens: Option<Vec<T>>,
    position: usize,
    pre_processor: Option<SharedPreProcess>,
}

impl<T: AsRef<str>> TokenCursor<T> {
    /// Create a cursor positioned at the first token of `tokens`.
    pub fn new(tokens: Vec<T>) -> Self {
        TokenCursor {
            tokens: Some(tokens),
            position: 0,
            pre_processor: None,
        }
    }

    /// Create a cursor with no backing sequence.
    pub fn uninitialized() -> Self {
        TokenCursor {
            tokens: None,
            position: 0,
            pre_processor: None,
        }
    }

    pub fn is_initialized(&self) -> bool {
        self.tokens.is_some()
    }

    /// Whether at least one token is left. Always false without a sequence.
    pub fn has_more(&self) -> bool {
        self.position < self.count()
    }

    /// Total size of the sequence, independent of the position.
    pub fn count(&self) -> usize {
        self.tokens.as_ref().map_or(0, Vec::len)
    }

    /// Number of tokens already pulled.
    pub fn position(&self) -> usize {
        self.position
    }

    /// The backing sequence, empty when there is none.
    pub fn items(&self) -> &[T] {
        self.tokens.as_deref().unwrap_or(&[])
    }

    /// Pull the next token, applying the pre-processor if one is installed.
    ///
    /// Fails without moving when the cursor is uninitialized or exhausted.
    pub fn next_token(&mut self) -> Result<String> {
        let tokens = self.tokens.as_ref().ok_or(HansegError::NotInitialized)?;
        let token = tokens
            .get(self.position)
            .ok_or_else(|| HansegError::exhausted(self.position))?;
        self.position += 1;

        Ok(match &self.pre_processor {
            Some(pre_processor) => pre_processor.pre_process(token.as_ref()),
            None => token.as_ref().to_string(),
        })
    }

    /// Pull every remaining token in order.
    pub fn drain(&mut self) -> Result<Vec<String>> {
        if !self.is_initialized() {
            return Err(HansegError::NotInitialized);
        }

        let mut tokens = Vec::with_capacity(self.count() - self.position);
        while self.has_more() {
            tokens.push(self.next_token()?);
        }
        Ok(tokens)
    }

    /// Install or replace the pre-processor used by subsequent pulls.
    pub fn set_pre_processor(&mut self, pre_processor: SharedPreProcess) {
        self.pre_processor = Some(pre_processor);
    }
}

impl<T: AsRef<str>> Default for TokenCursor<T> {
    fn default() -> Self {
        Self::uninitialized()
    }
}

impl<T> fmt::Debug for TokenCursor<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TokenCursor")
            .field("count", &self.tokens.as_ref().map(Vec::len))
            .field("position", &self.position)
            .field("pre_processor", &self.pre_processor.is_some())
            .finish()
    }
}
