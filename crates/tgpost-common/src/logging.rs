//! Structured logging infrastructure for tgpost.

use crate::error::{PostError, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Configuration for the logging system.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log level filter (e.g., "info", "tgpost_delivery=debug").
    pub level: String,
    /// Whether to emit JSON lines instead of human readable text.
    pub json_format: bool,
    /// Optional file path for log output; stdout when absent.
    pub file_path: Option<PathBuf>,
    /// Whether to include target module information.
    pub include_targets: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            json_format: false,
            file_path: None,
            include_targets: true,
        }
    }
}

impl LoggingConfig {
    /// Builds the filter, letting `RUST_LOG` take precedence over the configured level.
    pub fn env_filter(&self) -> Result<EnvFilter> {
        EnvFilter::try_from_default_env()
            .or_else(|_| EnvFilter::try_new(&self.level))
            .map_err(|e| {
                PostError::config_with_source(format!("Invalid log level '{}'", self.level), e)
            })
    }
}

/// Initialize the tracing subscriber with the given configuration.
///
/// The returned guard flushes buffered log lines on drop and must be held for
/// the lifetime of the process.
pub fn init_logging(config: &LoggingConfig) -> Result<WorkerGuard> {
    let env_filter = config.env_filter()?;

    let (writer, guard) = match &config.file_path {
        Some(path) => {
            let file_name = path.file_name().ok_or_else(|| {
                PostError::config(format!("Log file path '{}' has no file name", path.display()))
            })?;
            let directory = path
                .parent()
                .filter(|p| !p.as_os_str().is_empty())
                .map_or_else(|| PathBuf::from("."), PathBuf::from);
            tracing_appender::non_blocking(tracing_appender::rolling::never(directory, file_name))
        }
        None => tracing_appender::non_blocking(std::io::stdout()),
    };

    let layer = fmt::layer()
        .with_writer(writer)
        .with_ansi(config.file_path.is_none())
        .with_target(config.include_targets);

    let registry = tracing_subscriber::registry().with(env_filter);
    let installed = if config.json_format {
        registry.with(layer.json()).try_init()
    } else {
        registry.with(layer).try_init()
    };
    installed
        .map_err(|e| PostError::config_with_source("Failed to install tracing subscriber", e))?;

    Ok(guard)
}
