//! Command line argument parsing for Hanseg CLI using clap.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};

use crate::config::PreProcessorKind;

/// Hanseg - Pull-based Chinese tokenization
#[derive(Parser, Debug, Clone)]
#[command(name = "hanseg")]
#[command(about = "Tokenize Chinese and other text from the command line")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(long_about = None)]
pub struct HansegArgs {
    /// Verbosity level (0=quiet, 1=normal, 2=verbose, 3=debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode (overrides verbose)
    #[arg(short, long)]
    pub quiet: bool,

    /// Output format
    #[arg(short = 'f', long = "format", default_value = "human")]
    pub output_format: OutputFormat,

    /// Pretty-print JSON output
    #[arg(long)]
    pub pretty: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

impl HansegArgs {
    /// Get the effective verbosity level
    pub fn verbosity(&self) -> u8 {
        if self.quiet {
            0
        } else {
            match self.verbose {
                0 => 1, // Default to normal
                n => n,
            }
        }
    }
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Print the tokens of each input
    Tokenize(InputArgs),

    /// Print the token count of each input
    Count(InputArgs),
}

/// Where the text comes from and how it is tokenized
#[derive(Args, Debug, Clone)]
pub struct InputArgs {
    /// Text to tokenize (reads stdin line by line when neither TEXT nor --file is given)
    #[arg(value_name = "TEXT", conflicts_with = "file")]
    pub text: Option<String>,

    /// File whose lines are tokenized independently
    #[arg(long, value_name = "FILE")]
    pub file: Option<PathBuf>,

    /// Tokenizer configuration file (JSON)
    #[arg(short, long, value_name = "CONFIG_FILE", env = "HANSEG_CONFIG")]
    pub config: Option<PathBuf>,

    /// Tokenizer to use (overrides the configuration file)
    #[arg(short, long)]
    pub tokenizer: Option<TokenizerChoice>,

    /// Minimum gram size for the ngram tokenizer
    #[arg(long, default_value = "2")]
    pub min_gram: usize,

    /// Maximum gram size for the ngram tokenizer
    #[arg(long, default_value = "2")]
    pub max_gram: usize,

    /// Disable HMM new-word discovery for the chinese tokenizer
    #[arg(long)]
    pub no_hmm: bool,

    /// Pre-processor applied to every token (overrides the configuration file)
    #[arg(short, long)]
    pub pre_processor: Option<PreProcessorChoice>,

    /// Threads used for multi-line input
    #[arg(long)]
    pub threads: Option<usize>,
}

/// Tokenizers selectable from the command line
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TokenizerChoice {
    /// Segmenter-backed Chinese tokenizer
    Chinese,
    /// Split on whitespace
    Whitespace,
    /// Character n-grams
    Ngram,
}

/// Pre-processors selectable from the command line
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PreProcessorChoice {
    None,
    Lowercase,
    Uppercase,
    /// Strip digits and punctuation, then lowercase
    Common,
}

impl From<PreProcessorChoice> for PreProcessorKind {
    fn from(choice: PreProcessorChoice) -> Self {
        match choice {
            PreProcessorChoice::None => PreProcessorKind::None,
            PreProcessorChoice::Lowercase => PreProcessorKind::Lowercase,
            PreProcessorChoice::Uppercase => PreProcessorKind::Uppercase,
            PreProcessorChoice::Common => PreProcessorKind::Common,
        }
    }
}

/// Output formats for CLI
#[derive(ValueEnum, Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON output
    Json,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tokenize_args() {
        let args = HansegArgs::try_parse_from([
            "hanseg",
            "-f",
            "json",
            "tokenize",
            "北京是首都",
            "--tokenizer",
            "ngram",
            "--min-gram",
            "1",
            "-p",
            "uppercase",
        ])
        .unwrap();

        assert!(matches!(args.output_format, OutputFormat::Json));
        if let Command::Tokenize(input) = args.command {
            assert_eq!(input.text.as_deref(), Some("北京是首都"));
            assert_eq!(input.tokenizer, Some(TokenizerChoice::Ngram));
            assert_eq!(input.min_gram, 1);
            assert_eq!(input.max_gram, 2);
            assert_eq!(input.pre_processor, Some(PreProcessorChoice::Uppercase));
        } else {
            panic!("Expected tokenize command");
        }
    }

    #[test]
    fn test_verbosity() {
        let args = HansegArgs::try_parse_from(["hanseg", "count", "x"]).unwrap();
        assert_eq!(args.verbosity(), 1);

        let args = HansegArgs::try_parse_from(["hanseg", "-vvv", "count", "x"]).unwrap();
        assert_eq!(args.verbosity(), 3);

        let args = HansegArgs::try_parse_from(["hanseg", "-q", "-vv", "count", "x"]).unwrap();
        assert_eq!(args.verbosity(), 0);
    }

    #[test]
    fn test_text_conflicts_with_file() {
        let result =
            HansegArgs::try_parse_from(["hanseg", "tokenize", "text", "--file", "input.txt"]);
        assert!(result.is_err());
    }
}
