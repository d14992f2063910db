use jieba_rs::Jieba;
use log::debug;
use serde::{Deserialize, Serialize};

use crate::analysis::nature::Nature;
use crate::analysis::term::Term;
use crate::error::Result;

use super::Segmenter;

/// A word added to the segmenter on top of the built-in dictionary.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserWord {
    /// The word itself
    pub word: String,

    /// Frequency; when absent one is suggested so the word can be cut out
    #[serde(default)]
    pub freq: Option<usize>,

    /// Part-of-speech tag
    #[serde(default)]
    pub tag: Option<String>,
}

impl UserWord {
    pub fn new<S: Into<String>>(word: S) -> Self {
        UserWord {
            word: word.into(),
            freq: None,
            tag: None,
        }
    }

    pub fn with_freq(mut self, freq: usize) -> Self {
        self.freq = Some(freq);
        self
    }

    pub fn with_tag<S: Into<String>>(mut self, tag: S) -> Self {
        self.tag = Some(tag.into());
        self
    }
}

/// Chinese segmenter backed by `jieba-rs`.
///
/// Whitespace-only segments are dropped; every other segment becomes a
/// [`Term`] carrying its character offset and the jieba part-of-speech tag.
pub struct JiebaSegmenter {
    inner: Jieba,
    hmm: bool,
}

impl JiebaSegmenter {
    /// Create a segmenter over the built-in dictionary with HMM enabled.
    pub fn new() -> Self {
        Self::with_options(true, &[])
    }

    /// Create a segmenter with explicit HMM setting and extra words.
    pub fn with_options(hmm: bool, user_words: &[UserWord]) -> Self {
        let mut inner = Jieba::new();
        for user_word in user_words {
            inner.add_word(&user_word.word, user_word.freq, user_word.tag.as_deref());
        }
        if !user_words.is_empty() {
            debug!("added {} user words to jieba dictionary", user_words.len());
        }

        Self { inner, hmm }
    }

    /// Whether HMM new-word discovery is enabled.
    pub fn hmm(&self) -> bool {
        self.hmm
    }
}

impl Default for JiebaSegmenter {
    fn default() -> Self {
        Self::new()
    }
}

impl Segmenter for JiebaSegmenter {
    fn parse(&self, text: &str) -> Result<Vec<Term>> {
        let mut terms = Vec::new();
        let mut offset = 0;

        for tag in self.inner.tag(text, self.hmm) {
            let len = tag.word.chars().count();
            if !tag.word.trim().is_empty() {
                terms.push(Term::new(tag.word, offset).with_nature(Nature::new(tag.tag)));
            }
            offset += len;
        }

        debug!(
            "jieba segmented {} chars into {} terms",
            offset,
            terms.len()
        );
        Ok(terms)
    }

    fn name(&self) -> &'static str {
        "jieba"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(terms: &[Term]) -> Vec<&str> {
        terms.iter().map(|t| t.name()).collect()
    }

    #[test]
    fn test_segment_chinese() {
        let segmenter = JiebaSegmenter::new();
        let terms = segmenter.parse("北京是首都").unwrap();

        assert_eq!(names(&terms), vec!["北京", "是", "首都"]);
        assert_eq!(terms[0].offset(), 0);
        assert_eq!(terms[1].offset(), 2);
        assert_eq!(terms[2].offset(), 3);
        assert_eq!(terms[0].nature().as_str(), "ns");
    }

    #[test]
    fn test_whitespace_is_dropped() {
        let segmenter = JiebaSegmenter::new();
        let terms = segmenter.parse("北京 首都").unwrap();

        assert_eq!(names(&terms), vec!["北京", "首都"]);
        assert_eq!(terms[1].offset(), 3);
    }

    #[test]
    fn test_empty_text() {
        let segmenter = JiebaSegmenter::new();
        assert!(segmenter.parse("").unwrap().is_empty());
    }

    #[test]
    fn test_user_words() {
        let segmenter = JiebaSegmenter::with_options(
            false,
            &[UserWord::new("深度学习框架").with_tag("nz")],
        );
        let terms = segmenter.parse("深度学习框架").unwrap();

        assert_eq!(names(&terms), vec!["深度学习框架"]);
        assert_eq!(terms[0].nature().as_str(), "nz");
        assert!(!segmenter.hmm());
    }

    #[test]
    fn test_segmenter_name() {
        assert_eq!(JiebaSegmenter::new().name(), "jieba");
    }
}
