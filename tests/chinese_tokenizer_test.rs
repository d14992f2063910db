//! Integration tests for the pull contract shared by all tokenizers

use std::sync::Arc;

use hanseg::analysis::factory::{
    ChineseTokenizerFactory, NgramTokenizerFactory, WhitespaceTokenizerFactory,
};
use hanseg::analysis::pre_processor::UppercasePreProcessor;
use hanseg::analysis::segmenter::JiebaSegmenter;
use hanseg::analysis::tokenizer::{ChineseTokenizer, NgramTokenizer, WhitespaceTokenizer};
use hanseg::prelude::*;

/// Segmenter that splits on '|' so tests control the exact term list.
struct PipeSegmenter;

impl Segmenter for PipeSegmenter {
    fn parse(&self, text: &str) -> Result<Vec<Term>> {
        let mut offset = 0;
        let mut terms = Vec::new();
        for name in text.split('|').filter(|s| !s.is_empty()) {
            terms.push(Term::new(name, offset));
            offset += name.chars().count();
        }
        Ok(terms)
    }

    fn name(&self) -> &'static str {
        "pipe"
    }
}

const SAMPLES: &[&str] = &[
    "",
    "北京|是|首都",
    "我|爱|自然|语言|处理",
    "single",
    "a|b|c|d|e|f|g|h",
];

#[test]
fn test_count_matches_segmenter_output() -> Result<()> {
    for text in SAMPLES {
        let expected = PipeSegmenter.parse(text)?.len();
        let tokenizer = ChineseTokenizer::new(text, &PipeSegmenter)?;
        assert_eq!(tokenizer.count_tokens(), expected, "count for {text:?}");
    }
    Ok(())
}

#[test]
fn test_untransformed_tokens_equal_term_names() -> Result<()> {
    for text in SAMPLES {
        let names: Vec<String> = PipeSegmenter
            .parse(text)?
            .iter()
            .map(|t| t.name().to_string())
            .collect();

        let mut tokenizer = ChineseTokenizer::new(text, &PipeSegmenter)?;
        let mut pulled = Vec::new();
        while tokenizer.has_more_tokens() {
            pulled.push(tokenizer.next_token()?);
        }

        assert_eq!(pulled, names);
        assert!(!tokenizer.has_more_tokens());
    }
    Ok(())
}

#[test]
fn test_transform_maps_each_token() -> Result<()> {
    let reverse: SharedPreProcess = Arc::new(|token: &str| -> String { token.chars().rev().collect() });

    for text in SAMPLES {
        let expected: Vec<String> = PipeSegmenter
            .parse(text)?
            .iter()
            .map(|t| reverse.pre_process(t.name()))
            .collect();

        let mut tokenizer = ChineseTokenizer::new(text, &PipeSegmenter)?;
        tokenizer.set_token_pre_processor(Arc::clone(&reverse));

        assert_eq!(tokenizer.get_tokens()?, expected);
    }
    Ok(())
}

#[test]
fn test_drain_matches_manual_iteration() -> Result<()> {
    let mut manual = ChineseTokenizer::new("我|爱|自然|语言|处理", &PipeSegmenter)?;
    let mut drained = ChineseTokenizer::new("我|爱|自然|语言|处理", &PipeSegmenter)?;

    let mut pulled = Vec::new();
    while manual.has_more_tokens() {
        pulled.push(manual.next_token()?);
    }

    assert_eq!(drained.get_tokens()?, pulled);
    assert!(!drained.has_more_tokens());
    assert!(drained.get_tokens()?.is_empty());
    Ok(())
}

#[test]
fn test_exhausted_pull_leaves_state() -> Result<()> {
    let mut tokenizer = ChineseTokenizer::new("北京|是|首都", &PipeSegmenter)?;
    tokenizer.get_tokens()?;

    for _ in 0..3 {
        let err = tokenizer.next_token().unwrap_err();
        assert!(matches!(err, HansegError::Exhausted { consumed: 3 }));
        assert_eq!(tokenizer.position(), 3);
        assert_eq!(tokenizer.count_tokens(), 3);
    }
    Ok(())
}

#[test]
fn test_capital_scenario_with_jieba() -> Result<()> {
    let segmenter = JiebaSegmenter::new();
    let mut tokenizer = ChineseTokenizer::new("北京是首都", &segmenter)?;

    assert_eq!(tokenizer.count_tokens(), 3);
    assert_eq!(tokenizer.next_token()?, "北京");
    assert_eq!(tokenizer.next_token()?, "是");
    assert_eq!(tokenizer.next_token()?, "首都");
    assert!(tokenizer.next_token().unwrap_err().is_exhausted());
    Ok(())
}

#[test]
fn test_capital_scenario_uppercase() -> Result<()> {
    let mut plain = ChineseTokenizer::new("Beijing|is|capital", &PipeSegmenter)?;
    let mut upper = ChineseTokenizer::new("Beijing|is|capital", &PipeSegmenter)?;
    upper.set_token_pre_processor(Arc::new(UppercasePreProcessor));

    let plain_tokens = plain.get_tokens()?;
    let upper_tokens = upper.get_tokens()?;

    assert_eq!(upper_tokens, vec!["BEIJING", "IS", "CAPITAL"]);
    assert_eq!(upper_tokens.len(), plain_tokens.len());
    for (u, p) in upper_tokens.iter().zip(&plain_tokens) {
        assert_eq!(u, &p.to_uppercase());
    }
    Ok(())
}

#[test]
fn test_default_segmenter_tokenizer() -> Result<()> {
    let mut tokenizer = ChineseTokenizer::with_default_segmenter("北京是首都")?;
    assert_eq!(tokenizer.get_tokens()?, vec!["北京", "是", "首都"]);
    assert_eq!(tokenizer.terms()[2].offset(), 3);
    Ok(())
}

#[test]
fn test_variants_share_contract() -> Result<()> {
    let mut tokenizers: Vec<Box<dyn Tokenizer>> = vec![
        Box::new(ChineseTokenizer::new("a|b", &PipeSegmenter)?),
        Box::new(WhitespaceTokenizer::new("a b")),
        Box::new(NgramTokenizer::new("ab", 1, 1)?),
    ];

    for tokenizer in tokenizers.iter_mut() {
        assert_eq!(tokenizer.count_tokens(), 2, "{}", tokenizer.name());
        tokenizer.set_token_pre_processor(Arc::new(UppercasePreProcessor));
        assert_eq!(tokenizer.get_tokens()?, vec!["A", "B"]);
        assert!(!tokenizer.has_more_tokens());
        assert!(tokenizer.next_token().unwrap_err().is_exhausted());
        assert_eq!(tokenizer.count_tokens(), 2);
    }
    Ok(())
}

#[test]
fn test_factories_rebuild_from_text() -> Result<()> {
    let factories: Vec<Box<dyn TokenizerFactory>> = vec![
        Box::new(ChineseTokenizerFactory::new(Arc::new(PipeSegmenter))),
        Box::new(WhitespaceTokenizerFactory::new()),
        Box::new(NgramTokenizerFactory::new(2, 2)?),
    ];

    for factory in &factories {
        let mut first = factory.create("北京|是 首都")?;
        let all = first.get_tokens()?;

        let mut again = factory.create("北京|是 首都")?;
        assert_eq!(again.get_tokens()?, all, "{}", factory.name());
    }
    Ok(())
}

#[test]
fn test_batch_with_shared_segmenter() -> Result<()> {
    let factory = ChineseTokenizerFactory::new(Arc::new(PipeSegmenter));
    factory.set_token_pre_processor(Arc::new(UppercasePreProcessor));

    let texts = vec!["a|b", "", "c", "d|e|f"];
    let results = tokenize_batch(&factory, &texts, Some(3))?;

    assert_eq!(
        results,
        vec![
            vec!["A".to_string(), "B".to_string()],
            vec![],
            vec!["C".to_string()],
            vec!["D".to_string(), "E".to_string(), "F".to_string()],
        ]
    );
    Ok(())
}
