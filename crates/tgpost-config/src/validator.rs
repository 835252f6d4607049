//! Runtime validation of a loaded configuration.

use crate::schema::Config;
use tgpost_common::{ChatId, PostError, Result};
use url::Url;

/// Configuration validator.
pub struct ConfigValidator;

impl ConfigValidator {
    /// Validates a configuration, reporting the first offending field.
    pub fn validate(config: &Config) -> Result<()> {
        let telegram = &config.telegram;

        if telegram.bot_token.trim().is_empty() {
            return Err(PostError::validation_field(
                "Telegram bot token cannot be empty",
                "telegram.bot_token",
            ));
        }
        if telegram.bot_token.chars().any(|c| c.is_whitespace() || c == '/') {
            return Err(PostError::validation_field(
                "Telegram bot token contains invalid characters",
                "telegram.bot_token",
            ));
        }

        if telegram.chat_ids.is_empty() {
            return Err(PostError::validation_field(
                "At least one chat id is required",
                "telegram.chat_ids",
            ));
        }
        if telegram
            .chat_ids
            .iter()
            .any(|id| matches!(id, ChatId::Username(name) if name.trim().is_empty()))
        {
            return Err(PostError::validation_field(
                "Chat ids cannot be empty strings",
                "telegram.chat_ids",
            ));
        }

        Self::validate_http_url(&telegram.api_base_url, "telegram.api_base_url")?;

        if telegram.request_timeout_secs == 0 {
            return Err(PostError::validation_field(
                "Request timeout must be greater than 0",
                "telegram.request_timeout_secs",
            ));
        }

        if config.delivery.max_retries == 0 {
            return Err(PostError::validation_field(
                "max_retries must be at least 1",
                "delivery.max_retries",
            ));
        }

        Self::validate_http_url(&config.compose.listing_base_url, "compose.listing_base_url")?;
        Self::validate_http_url(
            &config.compose.placeholder_image_url,
            "compose.placeholder_image_url",
        )?;

        Ok(())
    }

    fn validate_http_url(raw: &str, field: &str) -> Result<()> {
        let url = Url::parse(raw)
            .map_err(|e| PostError::validation_field(format!("Invalid URL '{raw}': {e}"), field))?;
        match url.scheme() {
            "http" | "https" => Ok(()),
            scheme => Err(PostError::validation_field(
                format!("Unsupported URL scheme '{scheme}'"),
                field,
            )),
        }
    }
}
