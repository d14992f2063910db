//! Output formatting for CLI commands.

use serde::{Deserialize, Serialize};

use crate::cli::args::{HansegArgs, OutputFormat};
use crate::error::Result;

/// Tokens produced for one input.
#[derive(Debug, Serialize, Deserialize)]
pub struct TokenizedText {
    pub text: String,
    pub tokens: Vec<String>,
}

/// Result structure for the tokenize command.
#[derive(Debug, Serialize, Deserialize)]
pub struct TokenizeResults {
    pub tokenizer: String,
    pub results: Vec<TokenizedText>,
    pub duration_ms: u64,
}

/// Token count for one input.
#[derive(Debug, Serialize, Deserialize)]
pub struct TokenCount {
    pub text: String,
    pub count: usize,
}

/// Result structure for the count command.
#[derive(Debug, Serialize, Deserialize)]
pub struct CountResults {
    pub tokenizer: String,
    pub counts: Vec<TokenCount>,
    pub total: usize,
}

/// Results that know how to print themselves for people.
pub trait HumanOutput {
    fn print_human(&self, args: &HansegArgs);
}

impl HumanOutput for TokenizeResults {
    fn print_human(&self, args: &HansegArgs) {
        for result in &self.results {
            println!("{}", result.tokens.join(" "));
        }
        if args.verbosity() > 1 {
            println!();
            println!(
                "{} inputs tokenized with {} in {}ms",
                self.results.len(),
                self.tokenizer,
                self.duration_ms
            );
        }
    }
}

impl HumanOutput for CountResults {
    fn print_human(&self, args: &HansegArgs) {
        for count in &self.counts {
            println!("{}", count.count);
        }
        if args.verbosity() > 1 {
            println!();
            println!("Total tokens: {}", self.total);
        }
    }
}

/// Output a result in the specified format.
pub fn output_result<T>(result: &T, args: &HansegArgs) -> Result<()>
where
    T: Serialize + HumanOutput,
{
    match args.output_format {
        OutputFormat::Human => {
            result.print_human(args);
            Ok(())
        }
        OutputFormat::Json => output_json(result, args),
    }
}

/// Output in JSON format.
fn output_json<T: Serialize>(result: &T, args: &HansegArgs) -> Result<()> {
    let json = if args.pretty {
        serde_json::to_string_pretty(result)?
    } else {
        serde_json::to_string(result)?
    };
    println!("{json}");
    Ok(())
}
