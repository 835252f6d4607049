//! Integration tests for tgpost-common crate.

use proptest::prelude::*;
use tgpost_common::{mask_secret, truncate_chars, ChatId, LoggingConfig, PostError};

#[test]
fn test_chat_id_display() {
    assert_eq!(format!("{}", ChatId::Id(-100_123)), "-100123");
    assert_eq!(format!("{}", ChatId::from("@ads")), "@ads");
}

#[test]
fn test_chat_id_round_trips_through_display() {
    for raw in ["-1001234567890", "@ads_channel", "42"] {
        let id: ChatId = raw.parse().unwrap();
        assert_eq!(id.to_string(), raw);
    }
}

#[test]
fn test_bad_request_is_permanent() {
    let err = PostError::api_with_status("Bad Request: wrong file identifier", 400);
    assert!(!err.is_transient());
    assert_eq!(err.status(), Some(400));
}

#[test]
fn test_logging_config_from_toml_like_json() {
    let config: LoggingConfig =
        serde_json::from_str(r#"{"level": "debug", "file_path": "/tmp/tgpost.log"}"#).unwrap();
    assert_eq!(config.level, "debug");
    assert_eq!(
        config.file_path.as_deref(),
        Some(std::path::Path::new("/tmp/tgpost.log"))
    );
}

#[test]
fn test_mask_secret_hides_bot_token() {
    let masked = mask_secret("123456789:AAHdqTcvCH1vGWJxfSeofSAs0K5PALDsaw");
    assert_eq!(masked, "1234***");
}

proptest! {
    #[test]
    fn prop_truncate_chars_never_exceeds_limit(input in "\\PC{0,64}", limit in 0usize..80) {
        let truncated = truncate_chars(&input, limit);
        prop_assert!(truncated.chars().count() <= limit);
        prop_assert!(input.starts_with(truncated));
    }

    #[test]
    fn prop_truncate_chars_is_identity_when_short(input in "\\PC{0,32}") {
        prop_assert_eq!(truncate_chars(&input, 32), input.as_str());
    }
}
