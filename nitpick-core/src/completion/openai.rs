//! OpenAI-compatible chat completion client

use async_trait::async_trait;
use serde::Deserialize;
use serde_json::json;
use tracing::debug;

use crate::completion::CompletionClient;
use crate::config::ModelConfig;
use crate::{Error, Result};

/// Sampling temperature for review generation
const TEMPERATURE: f64 = 0.7;

/// Cap on generated output length, in tokens
const MAX_TOKENS: u32 = 2000;

/// Client for OpenAI-compatible `/chat/completions` endpoints
pub struct OpenAiClient {
    http: reqwest::Client,
    base_url: String,
    model: String,
    api_key: String,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatMessage,
}

#[derive(Debug, Deserialize)]
struct ChatMessage {
    content: String,
}

impl OpenAiClient {
    /// Create a client from model configuration.
    ///
    /// The API key is read from the environment variable named by
    /// `config.api_key_env`; a missing key is a configuration error.
    pub fn from_config(config: &ModelConfig) -> Result<Self> {
        let api_key = std::env::var(&config.api_key_env).map_err(|_| {
            Error::Config(format!(
                "API key not found. Set the {} environment variable",
                config.api_key_env
            ))
        })?;

        Ok(Self::new(&config.base_url, &config.model, api_key))
    }

    /// Create a client with explicit connection parameters
    pub fn new(base_url: impl Into<String>, model: impl Into<String>, api_key: String) -> Self {
        let base_url = base_url.into();
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            model: model.into(),
            api_key,
        }
    }

    /// Get the configured model identifier
    pub fn model(&self) -> &str {
        &self.model
    }
}

#[async_trait]
impl CompletionClient for OpenAiClient {
    fn name(&self) -> &'static str {
        "openai"
    }

    async fn complete(&self, prompt: &str) -> Result<String> {
        let url = format!("{}/chat/completions", self.base_url);

        debug!(model = %self.model, url = %url, "Sending completion request");

        let response = self
            .http
            .post(&url)
            .bearer_auth(&self.api_key)
            .json(&json!({
                "model": self.model,
                "messages": [
                    {"role": "user", "content": prompt}
                ],
                "temperature": TEMPERATURE,
                "max_tokens": MAX_TOKENS,
            }))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(Error::Completion(format!(
                "completion API returned {}: {}",
                status,
                body.chars().take(200).collect::<String>()
            )));
        }

        let chat: ChatResponse = response
            .json()
            .await
            .map_err(|e| Error::Completion(format!("malformed completion response: {}", e)))?;

        chat.choices
            .into_iter()
            .next()
            .map(|choice| choice.message.content)
            .ok_or_else(|| Error::Completion("completion response contained no choices".to_string()))
    }
}
