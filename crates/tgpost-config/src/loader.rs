//! Configuration loading from TOML with environment variable overrides.

use crate::schema::Config;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tgpost_common::{ChatId, PostError};
use tracing::{debug, info};

/// Environment variable naming the configuration file.
pub const CONFIG_PATH_ENV: &str = "TGPOST_CONFIG";

/// Configuration file looked up in the working directory.
pub const DEFAULT_CONFIG_FILE: &str = "tgpost.toml";

/// Configuration loading errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// I/O error when reading configuration file.
    #[error("Failed to read configuration file '{path}': {source}")]
    Io {
        /// File that could not be read.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// TOML parsing error.
    #[error("Failed to parse TOML configuration: {0}")]
    Parse(#[from] toml::de::Error),

    /// Environment variable parsing error.
    #[error("Failed to parse environment variable '{var}': {source}")]
    EnvParse {
        /// Variable name.
        var: String,
        /// Underlying parse error.
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// Configuration validation error.
    #[error("Configuration validation failed: {0}")]
    Validation(#[from] PostError),
}

impl From<ConfigError> for PostError {
    fn from(err: ConfigError) -> Self {
        match err {
            ConfigError::Validation(inner) => inner,
            other => Self::config_with_source("Failed to load configuration", other),
        }
    }
}

/// Configuration loader for the application.
#[derive(Debug, Clone, Default)]
pub struct ConfigLoader {
    path: Option<PathBuf>,
}

impl ConfigLoader {
    /// Creates a loader reading the given file.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: Some(path.into()),
        }
    }

    /// Creates a loader from `TGPOST_CONFIG`, falling back to `tgpost.toml` in the
    /// working directory, or to pure defaults when neither exists.
    pub fn from_env() -> Self {
        if let Ok(path) = std::env::var(CONFIG_PATH_ENV) {
            return Self::new(path);
        }
        if Path::new(DEFAULT_CONFIG_FILE).exists() {
            return Self::new(DEFAULT_CONFIG_FILE);
        }
        Self::default()
    }

    /// The file this loader reads, if any.
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Loads the file, applies process environment overrides, and validates.
    pub async fn load(&self) -> Result<Config, ConfigError> {
        self.load_with(|key| std::env::var(key).ok()).await
    }

    /// Like [`ConfigLoader::load`], reading overrides through `lookup`.
    pub async fn load_with<F>(&self, lookup: F) -> Result<Config, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = match &self.path {
            Some(path) => {
                info!("Loading configuration from {}", path.display());
                let content = tokio::fs::read_to_string(path)
                    .await
                    .map_err(|source| ConfigError::Io {
                        path: path.clone(),
                        source,
                    })?;
                Self::parse(&content)?
            }
            None => {
                info!("No configuration file found, using defaults");
                Config::default()
            }
        };

        Self::apply_overrides(&mut config, lookup)?;
        config.validate()?;

        debug!(?config, "Configuration loaded");
        Ok(config)
    }

    /// Parses a TOML document; absent sections and keys take their defaults.
    pub fn parse(content: &str) -> Result<Config, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    /// Apply environment variable overrides to configuration.
    pub fn apply_overrides<F>(config: &mut Config, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(token) = lookup("TELEGRAM_BOT_TOKEN") {
            config.telegram.bot_token = token.trim().to_string();
        }

        if let Some(chats) = lookup("TELEGRAM_CHAT_IDS") {
            config.telegram.chat_ids = parse_chat_ids(&chats);
        }

        if let Some(url) = lookup("TELEGRAM_API_URL") {
            config.telegram.api_base_url = url;
        }

        if let Some(retries) = lookup("TGPOST_MAX_RETRIES") {
            config.delivery.max_retries =
                retries.trim().parse().map_err(|e| ConfigError::EnvParse {
                    var: "TGPOST_MAX_RETRIES".to_string(),
                    source: Box::new(e),
                })?;
        }

        if let Some(delay) = lookup("TGPOST_RETRY_DELAY_SECS") {
            config.delivery.retry_delay_secs =
                delay.trim().parse().map_err(|e| ConfigError::EnvParse {
                    var: "TGPOST_RETRY_DELAY_SECS".to_string(),
                    source: Box::new(e),
                })?;
        }

        if let Some(level) = lookup("TGPOST_LOG_LEVEL") {
            config.logging.level = level;
        }

        Ok(())
    }
}

/// Splits a comma-separated chat list; integers become numeric ids.
pub fn parse_chat_ids(raw: &str) -> Vec<ChatId> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .filter_map(|s| s.parse().ok())
        .collect()
}
