//! Review prompt templates
//!
//! This module provides embedded instruction templates for each review type.
//! Templates use `{{LANGUAGE}}` placeholders that are rendered with the
//! language tag of the code under review.

use crate::review::ReviewType;

/// Embedded instruction templates for each review type
const COMPREHENSIVE_PROMPT: &str = include_str!("prompts/comprehensive.md");
const SECURITY_PROMPT: &str = include_str!("prompts/security.md");
const PERFORMANCE_PROMPT: &str = include_str!("prompts/performance.md");
const STYLE_PROMPT: &str = include_str!("prompts/style.md");

/// Get the raw instruction template for a review type
pub fn get_template(review_type: ReviewType) -> &'static str {
    match review_type {
        ReviewType::Comprehensive => COMPREHENSIVE_PROMPT,
        ReviewType::Security => SECURITY_PROMPT,
        ReviewType::Performance => PERFORMANCE_PROMPT,
        ReviewType::Style => STYLE_PROMPT,
    }
}

/// Render a template string with variable substitution
fn render_template(template: &str, language: &str) -> String {
    template.replace("{{LANGUAGE}}", language)
}

/// Build the full prompt sent to the completion service.
///
/// The rendered instructions are followed by a fenced code block tagged with
/// the language so the model sees the raw code exactly as submitted.
pub fn build_prompt(review_type: ReviewType, language: &str, code: &str) -> String {
    let instructions = render_template(get_template(review_type), language);
    format!(
        "{}\n\nCode to review:\n```{}\n{}\n```",
        instructions.trim_end(),
        language,
        code
    )
}
