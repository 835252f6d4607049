//! Test utilities and shared fixtures for the tgpost workspace.
//!
//! Listing fixtures are plain JSON values in the shape the classified-ads API
//! delivers, so every crate can deserialize them into its own model.

use std::sync::Once;
use tracing_subscriber::{fmt, EnvFilter};

/// Initialize test logging once per test run.
static INIT: Once = Once::new();

/// Initialize logging for tests with a sensible default configuration.
/// This function is safe to call multiple times and will only initialize once.
pub fn init_test_logging() {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"));

        fmt().with_test_writer().with_env_filter(filter).init();
    });
}

/// Listing fixtures.
pub mod listing_fixtures {
    use serde_json::{json, Value};

    /// A listing with every optional part present and three photos.
    pub fn full_listing() -> Value {
        json!({
            "id": 4_123_456_789_u64,
            "title": "Bike",
            "description": "  Nice  ",
            "sellerId": "42",
            "priceDetailed": { "value": 500 },
            "geo": { "formattedAddress": "Main St" },
            "images": [
                { "100x200": "https://img.example/1/s", "300x300": "https://img.example/1/l", "50x50": "https://img.example/1/xs" },
                { "640x480": "https://img.example/2/l", "208x156": "https://img.example/2/s" },
                { "1280x960": "https://img.example/3/l" }
            ]
        })
    }

    /// A listing carrying nothing but a title.
    pub fn title_only_listing() -> Value {
        json!({ "id": "abc", "title": "Bike" })
    }

    /// A listing with `count` single-variant photos.
    pub fn listing_with_images(count: usize) -> Value {
        let images: Vec<Value> = (0..count)
            .map(|i| json!({ "640x480": format!("https://img.example/{i}") }))
            .collect();
        json!({ "id": 1, "title": "Sofa", "images": images })
    }
}

/// Telegram-related test utilities.
pub mod chat_fixtures {
    use crate::types::ChatId;

    /// A numeric group chat id.
    pub fn test_group_id() -> ChatId {
        ChatId::Id(-1_001_234_567_890)
    }

    /// A public channel username.
    pub fn test_channel() -> ChatId {
        ChatId::Username("@tgpost_test".to_string())
    }
}
