//! Configuration management for nitpick
//!
//! Configuration is loaded with the following priority (highest to lowest):
//! 1. CLI flags
//! 2. Environment variables (NITPICK_*)
//! 3. Config file (~/.config/nitpick/config.toml)
//! 4. Default values

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// Completion model configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ModelConfig {
    /// Base URL of the OpenAI-compatible completion API
    pub base_url: String,

    /// Model identifier sent with each completion request
    pub model: String,

    /// Name of the environment variable holding the API key
    pub api_key_env: String,
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            base_url: "https://api.openai.com/v1".to_string(),
            model: "gpt-4o-mini".to_string(),
            api_key_env: "OPENAI_API_KEY".to_string(),
        }
    }
}

/// HTTP server configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Address the review API binds to
    pub bind: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind: "127.0.0.1:8787".to_string(),
        }
    }
}

/// Review history configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct HistoryConfig {
    /// Path to the history file (defaults to the platform data directory)
    pub path: Option<PathBuf>,

    /// Maximum number of retained history entries
    pub max_items: usize,
}

impl Default for HistoryConfig {
    fn default() -> Self {
        Self {
            path: None,
            max_items: 50,
        }
    }
}

/// Root configuration structure
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct Config {
    /// Completion model configuration
    pub model: ModelConfig,

    /// HTTP server configuration
    pub server: ServerConfig,

    /// Review history configuration
    pub history: HistoryConfig,
}

impl Config {
    /// Load configuration from the default config file location
    ///
    /// Returns default config if file doesn't exist
    pub fn load() -> Result<Self> {
        let config_path = Self::default_config_path();

        if let Some(path) = config_path {
            if path.exists() {
                return Self::load_from_file(&path);
            }
        }

        Ok(Self::default())
    }

    /// Load configuration from a specific file
    pub fn load_from_file(path: &PathBuf) -> Result<Self> {
        let contents = std::fs::read_to_string(path).map_err(Error::Io)?;
        toml::from_str(&contents)
            .map_err(|e| Error::Config(format!("Failed to parse config: {}", e)))
    }

    /// Get the default config file path
    ///
    /// Returns `~/.config/nitpick/config.toml` on Unix
    pub fn default_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("nitpick").join("config.toml"))
    }

    /// Apply environment variable overrides
    ///
    /// Supported variables:
    /// - NITPICK_BASE_URL: Base URL of the completion API
    /// - NITPICK_MODEL: Model identifier
    /// - NITPICK_BIND: Server bind address
    pub fn with_env_overrides(mut self) -> Self {
        if let Ok(base_url) = std::env::var("NITPICK_BASE_URL") {
            self.model.base_url = base_url;
        }

        if let Ok(model) = std::env::var("NITPICK_MODEL") {
            self.model.model = model;
        }

        if let Ok(bind) = std::env::var("NITPICK_BIND") {
            self.server.bind = bind;
        }

        self
    }

    /// Apply CLI flag overrides
    pub fn with_cli_overrides(mut self, model: Option<String>, bind: Option<String>) -> Self {
        if let Some(m) = model {
            self.model.model = m;
        }

        if let Some(b) = bind {
            self.server.bind = b;
        }

        self
    }

    /// Load configuration with all overrides applied
    ///
    /// Priority: CLI > env > config file > defaults
    pub fn load_with_overrides(model: Option<String>, bind: Option<String>) -> Result<Self> {
        Ok(Self::load()?
            .with_env_overrides()
            .with_cli_overrides(model, bind))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.model.base_url, "https://api.openai.com/v1");
        assert_eq!(config.model.model, "gpt-4o-mini");
        assert_eq!(config.model.api_key_env, "OPENAI_API_KEY");
        assert_eq!(config.server.bind, "127.0.0.1:8787");
        assert_eq!(config.history.max_items, 50);
        assert!(config.history.path.is_none());
    }

    #[test]
    fn test_cli_overrides() {
        let config = Config::default()
            .with_cli_overrides(Some("gpt-4o".to_string()), Some("0.0.0.0:9000".to_string()));

        assert_eq!(config.model.model, "gpt-4o");
        assert_eq!(config.server.bind, "0.0.0.0:9000");
    }

    #[test]
    fn test_parse_toml() {
        let toml = r#"
[model]
base_url = "http://localhost:11434/v1"
model = "llama3"

[server]
bind = "127.0.0.1:3000"

[history]
max_items = 10
"#;
        let config: Config = toml::from_str(toml).unwrap();
        assert_eq!(config.model.base_url, "http://localhost:11434/v1");
        assert_eq!(config.model.model, "llama3");
        assert_eq!(config.server.bind, "127.0.0.1:3000");
        assert_eq!(config.history.max_items, 10);
        // Unset sections fall back to defaults
        assert_eq!(config.model.api_key_env, "OPENAI_API_KEY");
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config.model.model, "gpt-4o-mini");
        assert_eq!(config.server.bind, "127.0.0.1:8787");
    }
}
