//! History command - browse and manage past reviews

use std::io::Write;

use clap::{Args, Subcommand};
use nitpick_core::Config;
use nitpick_store::ReviewRecord;

use super::open_store;

/// Browse and manage past reviews
#[derive(Args, Debug)]
pub struct HistoryArgs {
    #[command(subcommand)]
    command: HistoryCommand,
}

#[derive(Subcommand, Debug)]
enum HistoryCommand {
    /// List stored reviews, most recent first
    List,

    /// Show one stored review in full
    Show {
        /// Id of the review to show
        id: String,
    },

    /// Delete one stored review
    Delete {
        /// Id of the review to delete
        id: String,
    },

    /// Delete all stored reviews
    Clear {
        /// Skip the confirmation prompt
        #[arg(long)]
        yes: bool,
    },
}

impl HistoryArgs {
    /// Execute the history command
    pub fn execute(&self, config: &Config) -> anyhow::Result<()> {
        let store = open_store(config)?;

        match &self.command {
            HistoryCommand::List => {
                let records = store.list()?;

                if records.is_empty() {
                    println!("No reviews in history.");
                    return Ok(());
                }

                println!("{} review(s):", records.len());
                println!();
                for record in &records {
                    print_summary(record);
                }
            }
            HistoryCommand::Show { id } => match store.get(id)? {
                Some(record) => print_full(&record),
                None => println!("No review with id {}", id),
            },
            HistoryCommand::Delete { id } => {
                if store.delete(id)? {
                    println!("Deleted {}", id);
                } else {
                    println!("No review with id {}", id);
                }
            }
            HistoryCommand::Clear { yes } => {
                if !yes && !confirm("Clear all review history?")? {
                    println!("Aborted.");
                    return Ok(());
                }

                store.clear()?;
                println!("History cleared.");
            }
        }

        Ok(())
    }
}

fn print_summary(record: &ReviewRecord) {
    let first_line = record.code.lines().next().unwrap_or("").trim();
    let snippet: String = first_line.chars().take(40).collect();

    println!("  {}", record.id);
    println!(
        "      {} | {} | {}",
        record.language,
        record.review_type,
        record.timestamp.format("%Y-%m-%d %H:%M:%S UTC")
    );
    println!("      {}", snippet);
    println!();
}

fn print_full(record: &ReviewRecord) {
    println!("Review {}", record.id);
    println!(
        "{} | {} | {}",
        record.language,
        record.review_type,
        record.timestamp.format("%Y-%m-%d %H:%M:%S UTC")
    );
    println!();
    println!("Code:");
    println!("```{}", record.language);
    println!("{}", record.code);
    println!("```");
    println!();
    println!("{}", record.review);
}

fn confirm(question: &str) -> anyhow::Result<bool> {
    print!("{} [y/N] ", question);
    std::io::stdout().flush()?;

    let mut answer = String::new();
    std::io::stdin().read_line(&mut answer)?;

    Ok(matches!(answer.trim().to_lowercase().as_str(), "y" | "yes"))
}
