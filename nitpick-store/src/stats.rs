//! Aggregate statistics over the review history

use std::collections::HashMap;

use serde::Serialize;

use crate::models::ReviewRecord;

/// How many of the newest records `recent` carries
pub const RECENT_REVIEWS: usize = 5;

/// Frequency statistics derived from the review history
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewStats {
    /// Total number of stored reviews
    pub total_reviews: usize,

    /// Occurrences per language tag
    pub language_count: HashMap<String, usize>,

    /// Occurrences per review type tag
    pub review_type_count: HashMap<String, usize>,

    /// The newest records, most recent first
    pub recent: Vec<ReviewRecord>,
}

impl ReviewStats {
    /// Derive statistics from a most-recent-first record list
    pub fn from_records(records: &[ReviewRecord]) -> Self {
        let mut language_count: HashMap<String, usize> = HashMap::new();
        let mut review_type_count: HashMap<String, usize> = HashMap::new();

        for record in records {
            *language_count.entry(record.language.clone()).or_insert(0) += 1;
            *review_type_count
                .entry(record.review_type.clone())
                .or_insert(0) += 1;
        }

        Self {
            total_reviews: records.len(),
            language_count,
            review_type_count,
            recent: records.iter().take(RECENT_REVIEWS).cloned().collect(),
        }
    }

    /// The most frequent language, if any reviews exist.
    /// Ties break toward the lexicographically smaller tag.
    pub fn top_language(&self) -> Option<(&str, usize)> {
        top_entry(&self.language_count)
    }

    /// The most frequent review type, if any reviews exist.
    /// Ties break toward the lexicographically smaller tag.
    pub fn top_review_type(&self) -> Option<(&str, usize)> {
        top_entry(&self.review_type_count)
    }
}

fn top_entry(counts: &HashMap<String, usize>) -> Option<(&str, usize)> {
    counts
        .iter()
        .max_by(|(tag_a, count_a), (tag_b, count_b)| {
            count_a.cmp(count_b).then_with(|| tag_b.cmp(tag_a))
        })
        .map(|(tag, count)| (tag.as_str(), *count))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn record(language: &str, review_type: &str) -> ReviewRecord {
        ReviewRecord {
            id: uuid::Uuid::new_v4().to_string(),
            code: "code".to_string(),
            language: language.to_string(),
            review_type: review_type.to_string(),
            review: "review".to_string(),
            timestamp: Utc::now(),
        }
    }

    #[test]
    fn test_counts_by_language_and_type() {
        let records = vec![
            record("js", "comprehensive"),
            record("js", "security"),
            record("py", "comprehensive"),
        ];

        let stats = ReviewStats::from_records(&records);

        assert_eq!(stats.total_reviews, 3);
        assert_eq!(stats.language_count["js"], 2);
        assert_eq!(stats.language_count["py"], 1);
        assert_eq!(stats.review_type_count["comprehensive"], 2);
        assert_eq!(stats.review_type_count["security"], 1);
    }

    #[test]
    fn test_top_entries() {
        let records = vec![
            record("js", "comprehensive"),
            record("js", "security"),
            record("py", "comprehensive"),
        ];

        let stats = ReviewStats::from_records(&records);

        assert_eq!(stats.top_language(), Some(("js", 2)));
        assert_eq!(stats.top_review_type(), Some(("comprehensive", 2)));
    }

    #[test]
    fn test_top_entry_tie_breaks_lexicographically() {
        let records = vec![record("rust", "style"), record("go", "style")];
        let stats = ReviewStats::from_records(&records);
        assert_eq!(stats.top_language(), Some(("go", 1)));
    }

    #[test]
    fn test_empty_history() {
        let stats = ReviewStats::from_records(&[]);
        assert_eq!(stats.total_reviews, 0);
        assert!(stats.language_count.is_empty());
        assert!(stats.top_language().is_none());
        assert!(stats.recent.is_empty());
    }

    #[test]
    fn test_recent_is_capped() {
        let records: Vec<ReviewRecord> =
            (0..10).map(|_| record("rust", "comprehensive")).collect();
        let stats = ReviewStats::from_records(&records);
        assert_eq!(stats.recent.len(), RECENT_REVIEWS);
        assert_eq!(stats.recent[0], records[0]);
    }
}
