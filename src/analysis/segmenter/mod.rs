//! Word segmentation backends.
//!
//! A [`Segmenter`] turns raw text into an ordered list of [`Term`]s. The
//! Chinese tokenizer never segments on its own; it asks a segmenter once at
//! construction time and then only walks the result.
//!
//! # Available Segmenters
//!
//! - [`jieba::JiebaSegmenter`] - Dictionary and HMM based Chinese segmentation

use std::sync::Arc;

use lazy_static::lazy_static;

use crate::analysis::term::Term;
use crate::error::Result;

/// Trait for segmenters that split text into terms.
///
/// Terms must come back in left-to-right document order. Failures are
/// reported as [`HansegError::Segmentation`](crate::error::HansegError::Segmentation)
/// and are passed through unchanged by every tokenizer.
///
/// # Examples
///
/// Implementing a custom segmenter:
///
/// ```
/// use hanseg::analysis::segmenter::Segmenter;
/// use hanseg::analysis::term::Term;
/// use hanseg::error::Result;
///
/// struct CharSegmenter;
///
/// impl Segmenter for CharSegmenter {
///     fn parse(&self, text: &str) -> Result<Vec<Term>> {
///         Ok(text
///             .chars()
///             .enumerate()
///             .map(|(i, c)| Term::new(c.to_string(), i))
///             .collect())
///     }
///
///     fn name(&self) -> &'static str {
///         "char"
///     }
/// }
///
/// let terms = CharSegmenter.parse("中文").unwrap();
/// assert_eq!(terms.len(), 2);
/// ```
pub trait Segmenter: Send + Sync {
    /// Segment the given text into terms.
    fn parse(&self, text: &str) -> Result<Vec<Term>>;

    /// Get the name of this segmenter (for debugging and configuration).
    fn name(&self) -> &'static str;
}

impl<S: Segmenter + ?Sized> Segmenter for Arc<S> {
    fn parse(&self, text: &str) -> Result<Vec<Term>> {
        (**self).parse(text)
    }

    fn name(&self) -> &'static str {
        (**self).name()
    }
}

lazy_static! {
    static ref DEFAULT_SEGMENTER: Arc<JiebaSegmenter> = Arc::new(JiebaSegmenter::new());
}

/// The process-wide segmenter used when none is given explicitly.
///
/// The underlying dictionary is built on first use and shared afterwards.
pub fn default_segmenter() -> Arc<JiebaSegmenter> {
    Arc::clone(&DEFAULT_SEGMENTER)
}

pub mod jieba;

pub use jieba::{JiebaSegmenter, UserWord};
