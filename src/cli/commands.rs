//! Command implementations for Hanseg CLI.

use std::fs;
use std::io::{self, BufRead};
use std::time::Instant;

use log::info;

use crate::analysis::factory::tokenize_batch;
use crate::cli::args::*;
use crate::cli::output::*;
use crate::config::{TokenizerConfig, TokenizerKind};
use crate::error::Result;

/// Execute a CLI command.
pub fn execute_command(args: HansegArgs) -> Result<()> {
    match &args.command {
        Command::Tokenize(input) => tokenize(input, &args),
        Command::Count(input) => count(input, &args),
    }
}

/// Tokenize every input and print the tokens.
fn tokenize(input: &InputArgs, cli_args: &HansegArgs) -> Result<()> {
    let config = resolve_config(input)?;
    let texts = read_inputs(input)?;
    let factory = config.build_factory()?;

    let start_time = Instant::now();
    let tokens = tokenize_batch(factory.as_ref(), &texts, config.threads)?;
    let duration = start_time.elapsed();

    info!("tokenized {} inputs in {:?}", texts.len(), duration);

    let results = TokenizeResults {
        tokenizer: factory.name().to_string(),
        results: texts
            .into_iter()
            .zip(tokens)
            .map(|(text, tokens)| TokenizedText { text, tokens })
            .collect(),
        duration_ms: duration.as_millis() as u64,
    };

    output_result(&results, cli_args)
}

/// Count the tokens of every input without pulling them.
fn count(input: &InputArgs, cli_args: &HansegArgs) -> Result<()> {
    let config = resolve_config(input)?;
    let texts = read_inputs(input)?;
    let factory = config.build_factory()?;

    let mut counts = Vec::with_capacity(texts.len());
    for text in texts {
        let count = factory.create(&text)?.count_tokens();
        counts.push(TokenCount { text, count });
    }

    let results = CountResults {
        tokenizer: factory.name().to_string(),
        total: counts.iter().map(|c| c.count).sum(),
        counts,
    };

    output_result(&results, cli_args)
}

/// Merge the configuration file (if any) with command line overrides.
fn resolve_config(input: &InputArgs) -> Result<TokenizerConfig> {
    let mut config = match &input.config {
        Some(path) => TokenizerConfig::from_file(path)?,
        None => TokenizerConfig::default(),
    };

    if let Some(choice) = input.tokenizer {
        config.tokenizer = match choice {
            TokenizerChoice::Chinese => TokenizerKind::Chinese {
                hmm: !input.no_hmm,
                user_words: Vec::new(),
            },
            TokenizerChoice::Whitespace => TokenizerKind::Whitespace,
            TokenizerChoice::Ngram => TokenizerKind::Ngram {
                min_gram: input.min_gram,
                max_gram: input.max_gram,
            },
        };
    } else if input.no_hmm
        && let TokenizerKind::Chinese { hmm, .. } = &mut config.tokenizer
    {
        *hmm = false;
    }

    if let Some(choice) = input.pre_processor {
        config.pre_processor = choice.into();
    }
    if input.threads.is_some() {
        config.threads = input.threads;
    }

    config.validate()?;
    Ok(config)
}

/// Collect the texts to tokenize: inline text, file lines or stdin lines.
fn read_inputs(input: &InputArgs) -> Result<Vec<String>> {
    if let Some(text) = &input.text {
        return Ok(vec![text.clone()]);
    }

    if let Some(path) = &input.file {
        info!("reading input from {}", path.display());
        let content = fs::read_to_string(path)?;
        return Ok(content.lines().map(str::to_string).collect());
    }

    let stdin = io::stdin();
    let mut lines = Vec::new();
    for line in stdin.lock().lines() {
        lines.push(line?);
    }
    Ok(lines)
}
