//! Completion backend abstraction
//!
//! The review engine treats the completion service as an opaque collaborator:
//! a prompt goes in, generated text comes out, and any failure along the way
//! is terminal for the current review.

mod openai;

use async_trait::async_trait;

use crate::Result;

pub use openai::OpenAiClient;

/// Trait for text completion backends
#[async_trait]
pub trait CompletionClient: Send + Sync {
    /// Get the name of this backend
    fn name(&self) -> &'static str;

    /// Run a single prompt to completion and return the generated text
    async fn complete(&self, prompt: &str) -> Result<String>;
}
