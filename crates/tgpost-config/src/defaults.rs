//! Type-safe default values using const functions.

use crate::schema::{ComposeConfig, DeliveryConfig, TelegramConfig};

/// Default Telegram Bot API base URL.
pub const DEFAULT_API_BASE_URL: &str = "https://api.telegram.org";

/// Default base of the canonical listing URL.
pub const DEFAULT_LISTING_BASE_URL: &str = "https://avito.ru/";

/// Default photo used when a listing carries no usable image.
pub const DEFAULT_PLACEHOLDER_IMAGE_URL: &str = "https://i.ibb.co/rG7MgdfF/1887013-middle.png";

/// Default maximum number of delivery attempts per destination.
pub const fn default_max_retries() -> u32 {
    5
}

/// Default delay between delivery attempts, in seconds.
pub const fn default_retry_delay_secs() -> u64 {
    5
}

/// Default per-request timeout, in seconds.
pub const fn default_request_timeout_secs() -> u64 {
    30
}

impl Default for TelegramConfig {
    fn default() -> Self {
        Self {
            bot_token: String::new(),
            chat_ids: Vec::new(),
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            request_timeout_secs: default_request_timeout_secs(),
        }
    }
}

impl Default for DeliveryConfig {
    fn default() -> Self {
        Self {
            max_retries: default_max_retries(),
            retry_delay_secs: default_retry_delay_secs(),
        }
    }
}

impl Default for ComposeConfig {
    fn default() -> Self {
        Self {
            listing_base_url: DEFAULT_LISTING_BASE_URL.to_string(),
            placeholder_image_url: DEFAULT_PLACEHOLDER_IMAGE_URL.to_string(),
            price_label: "Цена".to_string(),
            seller_label: "Продавец".to_string(),
        }
    }
}
