//! Review types, prompt templates and the review engine
//!
//! A review request pairs source code with a review type. The review type
//! selects an instruction template, the code is appended as a fenced block,
//! and the composed prompt runs through the completion client.

pub mod engine;
pub mod prompts;
mod types;

pub use engine::{ReviewOutcome, ReviewRequest, Reviewer};
pub use types::ReviewType;
