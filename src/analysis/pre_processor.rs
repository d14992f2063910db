//! Token pre-processors.
//!
//! A pre-processor maps each raw token name to the string a tokenizer hands
//! out. It is applied at pull time, so installing one only affects tokens
//! that have not been pulled yet. Plain closures work too:
//!
//! ```
//! use std::sync::Arc;
//!
//! use hanseg::analysis::pre_processor::{SharedPreProcess, TokenPreProcess};
//!
//! let exclaim: SharedPreProcess = Arc::new(|token: &str| format!("{token}!"));
//! assert_eq!(exclaim.pre_process("好"), "好!");
//! ```

use std::sync::Arc;

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref COMMON_PUNCTUATION: Regex =
        Regex::new(r#"[\d.:,"'()\[\]|/?!;]+"#).expect("punctuation pattern is valid");
}

/// Trait for functions applied to every token a tokenizer returns.
pub trait TokenPreProcess: Send + Sync {
    /// Transform a raw token name.
    fn pre_process(&self, token: &str) -> String;
}

impl<F> TokenPreProcess for F
where
    F: Fn(&str) -> String + Send + Sync,
{
    fn pre_process(&self, token: &str) -> String {
        self(token)
    }
}

/// A pre-processor shared between a factory and the tokenizers it creates.
pub type SharedPreProcess = Arc<dyn TokenPreProcess>;

/// Lowercases tokens.
#[derive(Clone, Debug, Default)]
pub struct LowercasePreProcessor;

impl TokenPreProcess for LowercasePreProcessor {
    fn pre_process(&self, token: &str) -> String {
        token.to_lowercase()
    }
}

/// Uppercases tokens.
#[derive(Clone, Debug, Default)]
pub struct UppercasePreProcessor;

impl TokenPreProcess for UppercasePreProcessor {
    fn pre_process(&self, token: &str) -> String {
        token.to_uppercase()
    }
}

/// Strips ASCII digits and common punctuation, then lowercases.
///
/// Tokens made only of stripped characters come out empty; they are still
/// returned so the token count is unaffected.
#[derive(Clone, Debug, Default)]
pub struct CommonPreProcessor;

impl TokenPreProcess for CommonPreProcessor {
    fn pre_process(&self, token: &str) -> String {
        COMMON_PUNCTUATION.replace_all(token, "").to_lowercase()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_case_pre_processors() {
        assert_eq!(LowercasePreProcessor.pre_process("HeLLo"), "hello");
        assert_eq!(UppercasePreProcessor.pre_process("hello"), "HELLO");
        assert_eq!(UppercasePreProcessor.pre_process("北京"), "北京");
    }

    #[test]
    fn test_common_pre_processor() {
        let pre = CommonPreProcessor;
        assert_eq!(pre.pre_process("Hello,"), "hello");
        assert_eq!(pre.pre_process("(2019)"), "");
        assert_eq!(pre.pre_process("don't"), "dont");
        assert_eq!(pre.pre_process("首都!"), "首都");
    }

    #[test]
    fn test_closure_pre_processor() {
        let pre: SharedPreProcess = Arc::new(|token: &str| -> String { token.chars().rev().collect() });
        assert_eq!(pre.pre_process("abc"), "cba");
    }
}
