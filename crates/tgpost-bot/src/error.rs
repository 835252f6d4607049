//! Application-wide error types using thiserror.

use std::path::PathBuf;
use tgpost_common::PostError;
use tgpost_config::ConfigError;

/// Main application error type.
#[derive(thiserror::Error, Debug)]
pub enum BotError {
    /// Configuration could not be loaded.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Error raised by the publishing pipeline.
    #[error(transparent)]
    Post(#[from] PostError),

    /// A listing file could not be read.
    #[error("Failed to read listing file '{path}': {source}")]
    Io {
        /// File that could not be read.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// A listing file is not valid listing JSON.
    #[error("Invalid listing JSON in '{path}': {source}")]
    Input {
        /// Offending file.
        path: PathBuf,
        /// Underlying parse error.
        #[source]
        source: serde_json::Error,
    },
}

/// Result type for the bot application.
pub type BotResult<T> = Result<T, BotError>;
