use crate::config::Config;
use crate::decode;
use crate::evaluation::AnalysisClient;
use crate::models::PromptAnalysis;
use crate::rubric::{self, RubricVariant};
use anyhow::{Context, Result, bail};

/// Runs one build/request/decode cycle against the analysis model.
pub struct Runner {
    client: AnalysisClient,
    model: String,
    debug: bool,
    verbose: bool,
}

impl Runner {
    /// Create a new runner with the given configuration
    pub fn new(config: &Config, verbose: bool) -> Self {
        Self {
            client: AnalysisClient::new(config),
            model: config.model.clone(),
            debug: config.debug,
            verbose,
        }
    }

    /// Analyze a single prompt. Each call is one stateless
    /// request/response/decode transaction; a failed attempt is terminal and
    /// the user decides whether to resubmit.
    pub async fn analyze(
        &self,
        raw_prompt: &str,
        rubric: RubricVariant,
    ) -> Result<PromptAnalysis> {
        if raw_prompt.trim().is_empty() {
            bail!("prompt is empty, nothing to analyze");
        }

        let instruction = rubric::build_instruction(raw_prompt, rubric);

        if self.verbose {
            println!(
                "Requesting analysis from {} ({} rubric)",
                self.model,
                rubric.name()
            );
        }

        let raw = self
            .client
            .request_analysis(rubric, &instruction)
            .await
            .context("Failed to get an analysis from the model")?;

        if self.debug {
            eprintln!("--- raw model response ---");
            eprintln!("{}", raw);
            eprintln!("--------------------------");
        }
        if self.verbose {
            println!("Decoding model response ({} bytes)", raw.len());
        }

        decode::decode(&raw, rubric).context("Failed to decode the model response")
    }
}
