//! CLI command implementations

pub mod history;
pub mod review;
pub mod serve;
pub mod stats;

use nitpick_core::Config;
use nitpick_store::{HistoryStore, JsonFileBackend};

pub use history::HistoryArgs;
pub use review::ReviewArgs;
pub use serve::ServeArgs;
pub use stats::StatsArgs;

/// Open the review history store described by the configuration
pub fn open_store(config: &Config) -> anyhow::Result<HistoryStore> {
    let path = match config.history.path {
        Some(ref path) => path.clone(),
        None => JsonFileBackend::default_path()?,
    };

    Ok(HistoryStore::with_capacity(
        Box::new(JsonFileBackend::new(path)),
        config.history.max_items,
    ))
}
