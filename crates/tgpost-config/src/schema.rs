//! Configuration schema definitions using serde.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Duration;
use tgpost_common::{mask_secret, ChatId, LoggingConfig, Result};

/// Main configuration structure for tgpost.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Telegram Bot API configuration.
    pub telegram: TelegramConfig,
    /// Retry configuration for media-group delivery.
    pub delivery: DeliveryConfig,
    /// Caption and album composition configuration.
    pub compose: ComposeConfig,
    /// Logging configuration.
    pub logging: LoggingConfig,
}

/// Telegram Bot API configuration.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TelegramConfig {
    /// Bot token, embedded in the request path.
    pub bot_token: String,
    /// Chats every listing is published to.
    pub chat_ids: Vec<ChatId>,
    /// Bot API base URL.
    pub api_base_url: String,
    /// Per-request timeout in seconds.
    pub request_timeout_secs: u64,
}

/// Retry configuration for media-group delivery.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DeliveryConfig {
    /// Maximum number of attempts per destination.
    pub max_retries: u32,
    /// Fixed delay between attempts in seconds.
    pub retry_delay_secs: u64,
}

/// Caption and album composition configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ComposeConfig {
    /// Base the listing id is appended to for the title link.
    pub listing_base_url: String,
    /// Photo sent when a listing has no usable image.
    pub placeholder_image_url: String,
    /// Label in front of the price.
    pub price_label: String,
    /// Label in front of the seller id.
    pub seller_label: String,
}

impl fmt::Debug for TelegramConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TelegramConfig")
            .field("bot_token", &mask_secret(&self.bot_token))
            .field("chat_ids", &self.chat_ids)
            .field("api_base_url", &self.api_base_url)
            .field("request_timeout_secs", &self.request_timeout_secs)
            .finish()
    }
}

impl TelegramConfig {
    /// Request timeout as a [`Duration`].
    pub const fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}

impl DeliveryConfig {
    /// Delay between attempts as a [`Duration`].
    pub const fn retry_delay(&self) -> Duration {
        Duration::from_secs(self.retry_delay_secs)
    }
}

impl Config {
    /// Validates the configuration.
    pub fn validate(&self) -> Result<()> {
        crate::validator::ConfigValidator::validate(self)
    }
}
