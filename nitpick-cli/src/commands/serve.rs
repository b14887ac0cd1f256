//! Serve command - run the review HTTP API

use std::sync::Arc;

use clap::Args;
use nitpick_core::{Config, OpenAiClient};
use nitpick_server::AppState;

/// Run the review HTTP API
#[derive(Args, Debug)]
pub struct ServeArgs {
    /// Address to bind (overrides config and env)
    #[arg(long, env = "NITPICK_BIND")]
    pub bind: Option<String>,
}

impl ServeArgs {
    /// Execute the serve command
    pub async fn execute(&self, config: &Config) -> anyhow::Result<()> {
        let bind = self.bind.clone().unwrap_or_else(|| config.server.bind.clone());

        let client = OpenAiClient::from_config(&config.model)?;
        let state = Arc::new(AppState::new(Arc::new(client)));

        nitpick_server::serve(&bind, state).await?;

        Ok(())
    }
}
