//! Segmented terms.
//!
//! A [`Term`] is what a [`Segmenter`](crate::analysis::segmenter::Segmenter)
//! produces for each word it finds: the word itself, where it starts in the
//! source text and its part-of-speech [`Nature`]. Tokenizers only ever read
//! the name.
//!
//! # Examples
//!
//! ```
//! use hanseg::analysis::nature::Nature;
//! use hanseg::analysis::term::Term;
//!
//! let term = Term::new("北京", 0).with_nature(Nature::new("ns"));
//! assert_eq!(term.name(), "北京");
//! assert_eq!(term.end_offset(), 2);
//! assert_eq!(term.nature().as_str(), "ns");
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::analysis::nature::Nature;

/// A single word produced by segmentation.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Term {
    /// The display name of the term
    name: String,

    /// Character offset where this term starts in the source text
    offset: usize,

    /// Part-of-speech information
    nature: Nature,
}

impl Term {
    /// Create a term with no part-of-speech information.
    pub fn new<S: Into<String>>(name: S, offset: usize) -> Self {
        Term {
            name: name.into(),
            offset,
            nature: Nature::default(),
        }
    }

    /// Set the nature of this term.
    pub fn with_nature(mut self, nature: Nature) -> Self {
        self.nature = nature;
        self
    }

    /// The display name of the term.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Character offset of the first character.
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Character offset one past the last character.
    pub fn end_offset(&self) -> usize {
        self.offset + self.name.chars().count()
    }

    pub fn nature(&self) -> &Nature {
        &self.nature
    }
}

impl AsRef<str> for Term {
    fn as_ref(&self) -> &str {
        &self.name
    }
}

impl fmt::Display for Term {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.name, self.nature.as_str())
    }
}
