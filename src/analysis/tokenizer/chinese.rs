//! Chinese tokenizer over segmenter output.

use log::debug;

use crate::analysis::pre_processor::SharedPreProcess;
use crate::analysis::segmenter::{Segmenter, default_segmenter};
use crate::analysis::term::Term;
use crate::error::Result;

use super::{TokenCursor, Tokenizer};

/// A tokenizer that walks the terms a [`Segmenter`] found in a text.
///
/// Segmentation happens once, in the constructor. The terms are kept in the
/// order the segmenter returned them and each pull yields a term name, run
/// through the pre-processor when one is installed. There is no reset: to
/// start over, build a new tokenizer from the same text.
///
/// # Examples
///
/// ```
/// use hanseg::analysis::term::Term;
/// use hanseg::analysis::tokenizer::{ChineseTokenizer, Tokenizer};
///
/// let mut tokenizer = ChineseTokenizer::from_terms(vec![
///     Term::new("北京", 0),
///     Term::new("是", 2),
///     Term::new("首都", 3),
/// ]);
/// assert_eq!(tokenizer.count_tokens(), 3);
/// assert_eq!(tokenizer.next_token().unwrap(), "北京");
/// assert_eq!(tokenizer.get_tokens().unwrap(), vec!["是", "首都"]);
/// assert!(tokenizer.next_token().is_err());
/// ```
#[derive(Debug, Default)]
pub struct ChineseTokenizer {
    cursor: TokenCursor<Term>,
}

impl ChineseTokenizer {
    /// Create a tokenizer with no terms.
    ///
    /// Pulling from it fails with
    /// [`HansegError::NotInitialized`](crate::error::HansegError::NotInitialized).
    pub fn empty() -> Self {
        Self::default()
    }

    /// Segment `text` with `segmenter` and position at the first term.
    ///
    /// Segmentation errors are returned unchanged.
    pub fn new<S: Segmenter + ?Sized>(text: &str, segmenter: &S) -> Result<Self> {
        let terms = segmenter.parse(text)?;
        debug!(
            "{} produced {} terms for chinese tokenizer",
            segmenter.name(),
            terms.len()
        );
        Ok(Self::from_terms(terms))
    }

    /// Segment `text` with the shared default segmenter.
    pub fn with_default_segmenter(text: &str) -> Result<Self> {
        Self::new(text, default_segmenter().as_ref())
    }

    /// Walk an already segmented term list.
    pub fn from_terms(terms: Vec<Term>) -> Self {
        ChineseTokenizer {
            cursor: TokenCursor::new(terms),
        }
    }

    /// The terms behind this tokenizer.
    pub fn terms(&self) -> &[Term] {
        self.cursor.items()
    }

    /// Number of tokens already pulled.
    pub fn position(&self) -> usize {
        self.cursor.position()
    }
}

impl Tokenizer for ChineseTokenizer {
    fn has_more_tokens(&self) -> bool {
        self.cursor.has_more()
    }

    fn count_tokens(&self) -> usize {
        self.cursor.count()
    }

    fn next_token(&mut self) -> Result<String> {
        self.cursor.next_token()
    }

    fn get_tokens(&mut self) -> Result<Vec<String>> {
        self.cursor.drain()
    }

    fn set_token_pre_processor(&mut self, pre_processor: SharedPreProcess) {
        self.cursor.set_pre_processor(pre_processor);
    }

    fn name(&self) -> &'static str {
        "chinese"
    }
}
