//! Review command - run a code review and record it in history

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use clap::Args;
use nitpick_core::{languages, Config, OpenAiClient, ReviewRequest, ReviewType, Reviewer};
use nitpick_store::NewReview;

use super::open_store;

/// Review a source file
#[derive(Args, Debug)]
pub struct ReviewArgs {
    /// File containing the code to review
    pub file: PathBuf,

    /// Language tag (detected from the file extension when omitted)
    #[arg(short, long)]
    pub language: Option<String>,

    /// Review style: comprehensive, security, performance or style
    #[arg(short = 't', long = "type", default_value = "comprehensive")]
    pub review_type: String,

    /// Skip saving the result to history
    #[arg(long)]
    pub no_save: bool,
}

impl ReviewArgs {
    /// Execute the review command
    pub async fn execute(&self, config: &Config) -> anyhow::Result<()> {
        let code = std::fs::read_to_string(&self.file)
            .with_context(|| format!("Failed to read {}", self.file.display()))?;

        let language = match self.language.clone() {
            Some(language) => language,
            None => languages::detect_from_path(&self.file)
                .map(String::from)
                .with_context(|| {
                    format!(
                        "Could not detect language for {}; pass --language (known tags: {})",
                        self.file.display(),
                        known_tags()
                    )
                })?,
        };

        let review_type: ReviewType = self
            .review_type
            .parse()
            .map_err(|e: String| anyhow::anyhow!(e))?;

        let client = OpenAiClient::from_config(&config.model)?;
        let reviewer = Reviewer::new(Arc::new(client));

        println!(
            "Reviewing {} ({}, {} review)...",
            self.file.display(),
            language,
            review_type
        );
        println!();

        let outcome = reviewer
            .review(&ReviewRequest {
                code: code.clone(),
                language: language.clone(),
                review_type,
            })
            .await
            .context("Failed to generate code review")?;

        println!("{}", outcome.review);
        println!();

        if self.no_save {
            return Ok(());
        }

        let store = open_store(config)?;
        let record = store.save(NewReview {
            code,
            language: outcome.language,
            review_type: outcome.review_type.name().to_string(),
            review: outcome.review,
            timestamp: outcome.timestamp,
        })?;

        println!("Saved to history as {}", record.id);

        Ok(())
    }
}

fn known_tags() -> String {
    languages::LANGUAGES
        .iter()
        .map(|lang| lang.tag)
        .collect::<Vec<_>>()
        .join(", ")
}
