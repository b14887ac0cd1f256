//! Review type definitions for nitpick
//!
//! Each review type selects a specialized instruction template:
//! - Comprehensive: full review across quality, bugs, performance and security
//! - Security: vulnerability-focused review
//! - Performance: optimization-focused review
//! - Style: naming, organization and readability review

use serde::{Deserialize, Serialize};
use std::fmt;

/// The angle of analysis requested for a review
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ReviewType {
    /// Full review across quality, bugs, performance and security
    #[default]
    Comprehensive,
    /// Vulnerability-focused review
    Security,
    /// Optimization-focused review
    Performance,
    /// Naming, organization and readability review
    Style,
}

impl ReviewType {
    /// Get all available review types
    pub fn all() -> &'static [ReviewType] {
        &[
            ReviewType::Comprehensive,
            ReviewType::Security,
            ReviewType::Performance,
            ReviewType::Style,
        ]
    }

    /// Get the short name for this review type
    pub fn name(&self) -> &'static str {
        match self {
            ReviewType::Comprehensive => "comprehensive",
            ReviewType::Security => "security",
            ReviewType::Performance => "performance",
            ReviewType::Style => "style",
        }
    }

    /// Get a description of what this review type covers
    pub fn description(&self) -> &'static str {
        match self {
            ReviewType::Comprehensive => "Full review: quality, bugs, performance, security",
            ReviewType::Security => "Security vulnerabilities and unsafe patterns",
            ReviewType::Performance => "Performance bottlenecks and optimization opportunities",
            ReviewType::Style => "Naming, organization, documentation and readability",
        }
    }

    /// Parse an optional request parameter, falling back to the default.
    ///
    /// Absent and unrecognized values both map to `Comprehensive`, matching
    /// the lenient behavior expected at the HTTP boundary.
    pub fn from_param(param: Option<&str>) -> ReviewType {
        param
            .and_then(|s| s.parse().ok())
            .unwrap_or(ReviewType::Comprehensive)
    }
}

impl fmt::Display for ReviewType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl std::str::FromStr for ReviewType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "comprehensive" | "full" => Ok(ReviewType::Comprehensive),
            "security" | "sec" => Ok(ReviewType::Security),
            "performance" | "perf" => Ok(ReviewType::Performance),
            "style" => Ok(ReviewType::Style),
            _ => Err(format!("Unknown review type: {}", s)),
        }
    }
}
