//! Part-of-speech tags attached to segmented terms.
//!
//! A [`Nature`] is a plain immutable record. Segmenters that know nothing
//! beyond the tag string build one with [`Nature::new`]; the numeric fields
//! then stay zero.
//!
//! # Examples
//!
//! ```
//! use hanseg::analysis::nature::Nature;
//!
//! let nature = Nature::with_stats("ns", 12, 3, 4500);
//! assert_eq!(nature.to_string(), "ns:12:3");
//!
//! let tag_only = Nature::new("v");
//! assert_eq!(tag_only.all_frequency, 0);
//! ```

use std::fmt;

use lazy_static::lazy_static;
use serde::{Deserialize, Serialize};

lazy_static! {
    /// New word discovered outside the dictionary.
    pub static ref NW: Nature = Nature::new("nw");
    /// Transliterated foreign person name.
    pub static ref NRF: Nature = Nature::new("nrf");
    /// Person name.
    pub static ref NR: Nature = Nature::new("nr");
    /// No tag available.
    pub static ref NULL: Nature = Nature::new("null");
}

/// Part-of-speech information for a term.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Nature {
    /// Tag name, e.g. `"n"` or `"nr"`
    pub nature_str: String,

    /// Position of the tag in the tag table
    pub index: usize,

    /// Index of the tag within its tag class
    pub nature_index: usize,

    /// Corpus frequency of the tag
    pub all_frequency: u64,
}

impl Nature {
    /// Create a nature from its tag name alone.
    pub fn new<S: Into<String>>(nature_str: S) -> Self {
        Self::with_stats(nature_str, 0, 0, 0)
    }

    /// Create a nature with table position and frequency information.
    pub fn with_stats<S: Into<String>>(
        nature_str: S,
        index: usize,
        nature_index: usize,
        all_frequency: u64,
    ) -> Self {
        Nature {
            nature_str: nature_str.into(),
            index,
            nature_index,
            all_frequency,
        }
    }

    /// The tag name.
    pub fn as_str(&self) -> &str {
        &self.nature_str
    }

    /// Whether this is the `null` nature.
    pub fn is_null(&self) -> bool {
        self.nature_str == NULL.nature_str
    }
}

impl Default for Nature {
    fn default() -> Self {
        NULL.clone()
    }
}

impl fmt::Display for Nature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}:{}", self.nature_str, self.index, self.nature_index)
    }
}
