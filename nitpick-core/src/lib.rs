//! Nitpick Core - Core library for the nitpick code review service
//!
//! This crate provides review types and prompt templates, the completion
//! client used to generate reviews, and layered configuration.

pub mod completion;
pub mod config;
pub mod error;
pub mod languages;
pub mod review;

pub use completion::{CompletionClient, OpenAiClient};
pub use config::Config;
pub use error::{Error, Result};
pub use review::{ReviewOutcome, ReviewRequest, ReviewType, Reviewer};
