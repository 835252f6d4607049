//! Error types and helpers for tgpost.

use thiserror::Error;

/// Result type alias for tgpost operations.
pub type Result<T> = std::result::Result<T, PostError>;

/// Main error type for tgpost operations.
#[derive(Error, Debug)]
pub enum PostError {
    /// Configuration related errors.
    #[error("Configuration error: {message}")]
    Config {
        /// Human readable description.
        message: String,
        /// Underlying cause, if any.
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// I/O related errors.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Network level failure: connect, timeout, or reading the response body.
    #[error("Network error: {message}")]
    Network {
        /// Human readable description.
        message: String,
        /// Underlying cause, if any.
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// The Telegram Bot API answered with a non-success status.
    #[error("Telegram API error ({status}): {message}")]
    Api {
        /// Description reported by the API or derived from the status.
        message: String,
        /// HTTP status code.
        status: u16,
    },

    /// An image entry carries no usable resolution variant.
    #[error("Image has no usable resolution variant ({labels} label(s) present)")]
    MissingImageData {
        /// Number of labels the image carried, none of them parseable.
        labels: usize,
    },

    /// A resolution label is not of the form `WxH`.
    #[error("Invalid resolution label '{label}'")]
    InvalidResolution {
        /// The offending label.
        label: String,
    },

    /// Serialization/deserialization errors.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Validation errors for configuration or input data.
    #[error("Validation error: {message}")]
    Validation {
        /// Human readable description.
        message: String,
        /// Field that failed validation.
        field: Option<String>,
    },
}

impl PostError {
    /// Create a new configuration error.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config {
            message: msg.into(),
            source: None,
        }
    }

    /// Create a new configuration error with source.
    pub fn config_with_source(
        msg: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self::Config {
            message: msg.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create a new network error.
    pub fn network(msg: impl Into<String>) -> Self {
        Self::Network {
            message: msg.into(),
            source: None,
        }
    }

    /// Create a new network error with source.
    pub fn network_with_source(
        msg: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self::Network {
            message: msg.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create a new API error with status code.
    pub fn api_with_status(msg: impl Into<String>, status: u16) -> Self {
        Self::Api {
            message: msg.into(),
            status,
        }
    }

    /// Create a new validation error.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation {
            message: msg.into(),
            field: None,
        }
    }

    /// Create a new validation error for a specific field.
    pub fn validation_field(msg: impl Into<String>, field: impl Into<String>) -> Self {
        Self::Validation {
            message: msg.into(),
            field: Some(field.into()),
        }
    }

    /// HTTP status attached to this error, if any.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Api { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Whether a retry of the same request may succeed.
    ///
    /// Network failures and every API status except 400 are transient. A 400
    /// means the request itself is malformed and is never retried.
    pub fn is_transient(&self) -> bool {
        match self {
            Self::Network { .. } => true,
            Self::Api { status, .. } => *status != 400,
            _ => false,
        }
    }
}
