//! Review engine
//!
//! Validates a review request, builds the prompt for the requested review
//! type and runs a single completion call. The completion call is the only
//! suspending operation; failures are terminal and never retried.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::completion::CompletionClient;
use crate::review::{prompts, ReviewType};
use crate::{Error, Result};

/// A validated request for a code review
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReviewRequest {
    /// The raw source code to review
    pub code: String,

    /// Free-form language tag (e.g. "rust", "python")
    pub language: String,

    /// The angle of analysis to apply
    pub review_type: ReviewType,
}

/// The result of a completed review
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReviewOutcome {
    /// Generated review text, returned verbatim from the model
    pub review: String,

    /// Language tag echoed from the request
    pub language: String,

    /// Review type echoed from the request
    pub review_type: ReviewType,

    /// When the review completed
    pub timestamp: DateTime<Utc>,
}

/// Runs review requests against a completion backend
pub struct Reviewer {
    client: Arc<dyn CompletionClient>,
}

impl Reviewer {
    /// Create a new reviewer over the given completion client
    pub fn new(client: Arc<dyn CompletionClient>) -> Self {
        Self { client }
    }

    /// Run a single review to completion.
    ///
    /// Returns a validation error before any network activity when `code` or
    /// `language` is empty.
    pub async fn review(&self, request: &ReviewRequest) -> Result<ReviewOutcome> {
        if request.code.is_empty() {
            return Err(Error::Validation("Code and language are required".to_string()));
        }
        if request.language.is_empty() {
            return Err(Error::Validation("Code and language are required".to_string()));
        }

        let prompt = prompts::build_prompt(request.review_type, &request.language, &request.code);

        debug!(
            review_type = %request.review_type,
            language = %request.language,
            prompt_len = prompt.len(),
            "Requesting completion"
        );

        let review = self.client.complete(&prompt).await?;

        info!(
            review_type = %request.review_type,
            language = %request.language,
            review_len = review.len(),
            "Review generated"
        );

        Ok(ReviewOutcome {
            review,
            language: request.language.clone(),
            review_type: request.review_type,
            timestamp: Utc::now(),
        })
    }
}
