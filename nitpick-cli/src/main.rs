//! Nitpick CLI - Command line interface for the nitpick code review service
//!
//! Paste-a-file code reviews backed by an LLM completion API, with a local
//! bounded history of past reviews and simple aggregate statistics.

mod commands;

use clap::{Parser, Subcommand};
use nitpick_core::Config;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use commands::{HistoryArgs, ReviewArgs, ServeArgs, StatsArgs};

/// Nitpick: AI code review from your terminal
#[derive(Parser, Debug)]
#[command(name = "nitpick")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Model to use (overrides config and env)
    #[arg(long, global = true, env = "NITPICK_MODEL")]
    model: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Review a source file
    #[command(visible_alias = "r")]
    Review(ReviewArgs),

    /// Browse and manage past reviews
    #[command(visible_alias = "h")]
    History(HistoryArgs),

    /// Show aggregate review statistics
    Stats(StatsArgs),

    /// Run the review HTTP API
    Serve(ServeArgs),

    /// Show current configuration
    Config,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    // Load configuration with overrides
    let config = Config::load_with_overrides(cli.model.clone(), None)?;

    if cli.verbose {
        tracing::info!(
            model = %config.model.model,
            base_url = %config.model.base_url,
            "Configuration loaded"
        );
    }

    match cli.command {
        Some(Commands::Review(args)) => {
            args.execute(&config).await?;
        }
        Some(Commands::History(args)) => {
            args.execute(&config)?;
        }
        Some(Commands::Stats(args)) => {
            args.execute(&config)?;
        }
        Some(Commands::Serve(args)) => {
            args.execute(&config).await?;
        }
        Some(Commands::Config) => {
            println!("Nitpick Configuration");
            println!("=====================");
            println!();
            println!("Model Settings:");
            println!("  base_url: {}", config.model.base_url);
            println!("  model: {}", config.model.model);
            println!("  api_key_env: {}", config.model.api_key_env);
            println!();
            println!("Server Settings:");
            println!("  bind: {}", config.server.bind);
            println!();
            println!("History Settings:");
            match config.history.path {
                Some(ref path) => println!("  path: {}", path.display()),
                None => println!("  path: (default)"),
            }
            println!("  max_items: {}", config.history.max_items);
            println!();
            if let Some(path) = Config::default_config_path() {
                println!("Config file: {}", path.display());
                if path.exists() {
                    println!("  (exists)");
                } else {
                    println!("  (not found - using defaults)");
                }
            }
        }
        None => {
            println!("Nitpick - AI code review from your terminal");
            println!();
            println!("Use --help for usage information");
        }
    }

    Ok(())
}
