//! Data models for persisted review history

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One persisted record of a past review request and its result
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewRecord {
    /// Unique identifier, generated at write time
    pub id: String,

    /// The code that was reviewed
    pub code: String,

    /// Free-form language tag
    pub language: String,

    /// Review type tag (e.g. "comprehensive", "security")
    pub review_type: String,

    /// Generated review text
    pub review: String,

    /// When the review completed
    pub timestamp: DateTime<Utc>,
}

/// A review about to be saved; the store assigns the id
#[derive(Debug, Clone)]
pub struct NewReview {
    /// The code that was reviewed
    pub code: String,

    /// Free-form language tag
    pub language: String,

    /// Review type tag
    pub review_type: String,

    /// Generated review text
    pub review: String,

    /// When the review completed
    pub timestamp: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_serializes_with_camel_case_keys() {
        let record = ReviewRecord {
            id: "abc".to_string(),
            code: "x = 1".to_string(),
            language: "python".to_string(),
            review_type: "security".to_string(),
            review: "fine".to_string(),
            timestamp: Utc::now(),
        };

        let json = serde_json::to_value(&record).unwrap();
        assert!(json.get("reviewType").is_some());
        assert!(json.get("review_type").is_none());
    }

    #[test]
    fn test_timestamp_round_trips_as_iso8601() {
        let record = ReviewRecord {
            id: "abc".to_string(),
            code: String::new(),
            language: "go".to_string(),
            review_type: "style".to_string(),
            review: String::new(),
            timestamp: "2025-06-01T12:30:00Z".parse().unwrap(),
        };

        let json = serde_json::to_string(&record).unwrap();
        assert!(json.contains("2025-06-01T12:30:00Z"));

        let parsed: ReviewRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, record);
    }
}
