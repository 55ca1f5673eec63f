use anyhow::Context;
use clap::Parser;
use std::path::PathBuf;

mod config;
mod decode;
mod error;
mod evaluation;
mod models;
mod output;
mod rubric;
mod runner;

use crate::config::Config;
use crate::output::OutputFormat;
use crate::rubric::{RubricVariant, Technique};
use crate::runner::Runner;

/// Prompt Grader CLI - Score a prompt against the four core prompting
/// techniques and get a rewritten version
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Prompt text to analyze
    #[arg(conflicts_with_all = ["file", "example"])]
    prompt: Option<String>,

    /// Read the prompt from a file
    #[arg(short, long, conflicts_with = "example")]
    file: Option<PathBuf>,

    /// Analyze one of the built-in example prompts
    #[arg(short, long, value_enum)]
    example: Option<Technique>,

    /// Rubric to grade against
    #[arg(short, long, value_enum, default_value = "advanced")]
    rubric: RubricVariant,

    /// Path to a TOML configuration file (environment variables are the fallback)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Output format: plain or json
    #[arg(short, long, default_value = "plain")]
    output: OutputFormat,

    /// Verbose output - show progress for the API request
    #[arg(short, long)]
    verbose: bool,
}

/// Pick the prompt source: direct text, a file, or a built-in example.
fn resolve_prompt(args: &Args) -> anyhow::Result<String> {
    if let Some(prompt) = &args.prompt {
        return Ok(prompt.clone());
    }
    if let Some(path) = &args.file {
        return std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read prompt file: {}", path.display()));
    }
    if let Some(technique) = args.example {
        return Ok(technique.sample_prompt().to_string());
    }
    anyhow::bail!("No prompt given. Pass the text directly, or use --file / --example.")
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let prompt = resolve_prompt(&args)?;
    anyhow::ensure!(
        !prompt.trim().is_empty(),
        "Prompt is empty. Provide some text to analyze."
    );

    let config = Config::load(args.config.as_deref())?;
    let runner = Runner::new(&config, args.verbose);

    let analysis = runner.analyze(&prompt, args.rubric).await?;

    output::print_analysis(&analysis, args.rubric, args.output, &config.app_title);

    Ok(())
}
