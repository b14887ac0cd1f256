//! Stats command - aggregate statistics over the review history

use clap::Args;
use nitpick_core::Config;

use super::open_store;

/// Show aggregate review statistics
#[derive(Args, Debug)]
pub struct StatsArgs {}

impl StatsArgs {
    /// Execute the stats command
    pub fn execute(&self, config: &Config) -> anyhow::Result<()> {
        let store = open_store(config)?;
        let stats = store.stats()?;

        if stats.total_reviews == 0 {
            println!("No reviews in history.");
            return Ok(());
        }

        println!("Review Statistics");
        println!("=================");
        println!();
        println!("Total reviews: {}", stats.total_reviews);
        println!("Languages: {}", stats.language_count.len());
        if let Some((language, count)) = stats.top_language() {
            println!("Top language: {} ({})", language, count);
        }
        if let Some((review_type, count)) = stats.top_review_type() {
            println!("Top review type: {} ({})", review_type, count);
        }

        println!();
        println!("By language:");
        for (language, count) in sorted_counts(&stats.language_count) {
            println!("  {:<14} {}", language, count);
        }

        println!();
        println!("By review type:");
        for (review_type, count) in sorted_counts(&stats.review_type_count) {
            println!("  {:<14} {}", review_type, count);
        }

        println!();
        println!("Recent:");
        for record in &stats.recent {
            println!(
                "  {}  {} | {} | {}",
                record.timestamp.format("%Y-%m-%d %H:%M"),
                record.language,
                record.review_type,
                record.id
            );
        }

        Ok(())
    }
}

/// Sort counts descending, then by tag for stable output
fn sorted_counts(counts: &std::collections::HashMap<String, usize>) -> Vec<(&str, usize)> {
    let mut entries: Vec<(&str, usize)> = counts
        .iter()
        .map(|(tag, count)| (tag.as_str(), *count))
        .collect();
    entries.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));
    entries
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_sorted_counts_orders_by_count_then_tag() {
        let mut counts = HashMap::new();
        counts.insert("python".to_string(), 2);
        counts.insert("rust".to_string(), 5);
        counts.insert("go".to_string(), 2);

        let sorted = sorted_counts(&counts);
        assert_eq!(sorted, vec![("rust", 5), ("go", 2), ("python", 2)]);
    }
}
