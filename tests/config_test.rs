//! Integration tests for building factories from configuration files

use std::fs;

use hanseg::config::{PreProcessorKind, TokenizerConfig, TokenizerKind};
use hanseg::prelude::*;
use tempfile::TempDir;

#[test]
fn test_load_config_file() -> Result<()> {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("tokenizer.json");
    fs::write(
        &path,
        r#"{
            "tokenizer": { "type": "ngram", "min_gram": 2, "max_gram": 2 },
            "pre_processor": "uppercase",
            "threads": 2
        }"#,
    )?;

    let config = TokenizerConfig::from_file(&path)?;
    assert_eq!(
        config.tokenizer,
        TokenizerKind::Ngram {
            min_gram: 2,
            max_gram: 2
        }
    );
    assert_eq!(config.pre_processor, PreProcessorKind::Uppercase);

    let factory = config.build_factory()?;
    let mut tokenizer = factory.create("abc")?;
    assert_eq!(tokenizer.get_tokens()?, vec!["AB", "BC"]);
    Ok(())
}

#[test]
fn test_missing_config_file() {
    let temp_dir = TempDir::new().unwrap();
    let result = TokenizerConfig::from_file(temp_dir.path().join("missing.json"));
    assert!(matches!(result, Err(HansegError::Io(_))));
}

#[test]
fn test_chinese_config_with_user_words() -> Result<()> {
    let config = TokenizerConfig::from_json_str(
        r#"{ "tokenizer": { "type": "chinese", "hmm": false,
             "user_words": [{ "word": "自然语言处理", "freq": 100000 }] } }"#,
    )?;

    let factory = config.build_factory()?;
    let mut tokenizer = factory.create("自然语言处理")?;
    assert_eq!(tokenizer.get_tokens()?, vec!["自然语言处理"]);
    Ok(())
}

#[test]
fn test_config_roundtrip_through_json() -> Result<()> {
    let config = TokenizerConfig {
        tokenizer: TokenizerKind::Whitespace,
        pre_processor: PreProcessorKind::Common,
        threads: Some(1),
    };

    let json = serde_json::to_string(&config)?;
    assert_eq!(TokenizerConfig::from_json_str(&json)?, config);
    Ok(())
}
