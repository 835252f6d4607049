//! HTTP transport for the Bot API.

use crate::payload::{ApiErrorBody, SendMediaGroupRequest};
use async_trait::async_trait;
use reqwest::Client;
use std::fmt;
use tgpost_common::{PostError, Result};
use tgpost_config::TelegramConfig;
use tracing::debug;
use url::Url;

/// Status code and body of an API response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiResponse {
    /// HTTP status code.
    pub status: u16,
    /// Raw response body.
    pub body: String,
}

impl ApiResponse {
    /// Creates a response.
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    /// A `200 OK` with an empty success body.
    pub fn ok() -> Self {
        Self::new(200, r#"{"ok":true}"#)
    }

    /// Whether the status is a client or server error.
    pub const fn is_error(&self) -> bool {
        self.status >= 400
    }

    /// The API's own description of the failure, or the raw body.
    pub fn description(&self) -> String {
        ApiErrorBody::parse(&self.body)
            .and_then(|body| body.description)
            .unwrap_or_else(|| self.body.clone())
    }
}

/// Sends a media-group request and reports the raw response.
///
/// Implementations return `Ok` for every HTTP response, error statuses
/// included, and [`PostError::Network`] when no response was received.
#[cfg_attr(any(test, feature = "testing"), mockall::automock)]
#[async_trait]
pub trait MediaGroupTransport: Send + Sync {
    /// Posts one `sendMediaGroup` request.
    async fn post_media_group(&self, request: &SendMediaGroupRequest) -> Result<ApiResponse>;
}

/// [`MediaGroupTransport`] backed by a pooled `reqwest` client.
#[derive(Clone)]
pub struct HttpTransport {
    client: Client,
    endpoint: Url,
}

impl HttpTransport {
    /// Bot API method used for albums.
    pub const METHOD: &'static str = "sendMediaGroup";

    /// Builds a transport from the Telegram settings.
    pub fn new(config: &TelegramConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(config.request_timeout())
            .build()
            .map_err(|e| PostError::network_with_source("Failed to create HTTP client", e))?;
        let endpoint = Self::endpoint_url(&config.api_base_url, &config.bot_token, Self::METHOD)?;

        Ok(Self { client, endpoint })
    }

    /// Bot API method URL: `{base}/bot{token}/{method}`.
    pub fn endpoint_url(base_url: &str, token: &str, method: &str) -> Result<Url> {
        Url::parse(&format!(
            "{}/bot{}/{}",
            base_url.trim_end_matches('/'),
            token,
            method
        ))
        .map_err(|e| PostError::config_with_source("Invalid Telegram API URL", e))
    }
}

impl fmt::Debug for HttpTransport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HttpTransport")
            .field("host", &self.endpoint.host_str())
            .field("method", &Self::METHOD)
            .finish_non_exhaustive()
    }
}

#[async_trait]
impl MediaGroupTransport for HttpTransport {
    async fn post_media_group(&self, request: &SendMediaGroupRequest) -> Result<ApiResponse> {
        debug!(chat_id = %request.chat_id, "Posting media group");

        // Errors are stripped of their URL: it carries the bot token.
        let response = self
            .client
            .post(self.endpoint.clone())
            .json(request)
            .send()
            .await
            .map_err(|e| {
                let message = if e.is_timeout() {
                    "Request timeout"
                } else if e.is_connect() {
                    "Connection error"
                } else {
                    "Request failed"
                };
                PostError::network_with_source(message, e.without_url())
            })?;

        let status = response.status().as_u16();
        let body = response.text().await.map_err(|e| {
            PostError::network_with_source("Failed to read response body", e.without_url())
        })?;

        Ok(ApiResponse { status, body })
    }
}
