//! Integration tests for tgpost-bot crate.
//!
//! These tests run the whole pipeline from a listing file on disk to the
//! requests handed to the transport.

use std::io::Write;
use std::sync::{Arc, Mutex};
use tempfile::NamedTempFile;
use tgpost_bot::{read_listings, AdPublisher, BotError};
use tgpost_common::test_utils::{chat_fixtures, init_test_logging, listing_fixtures};
use tgpost_config::{Config, ConfigLoader};
use tgpost_delivery::{ApiResponse, DeliveryOutcome, MockMediaGroupTransport};

fn config() -> Config {
    let mut config = Config::default();
    config.telegram.bot_token = "123:abc".to_string();
    config.telegram.chat_ids = vec![chat_fixtures::test_group_id(), chat_fixtures::test_channel()];
    config
}

#[tokio::test(start_paused = true)]
async fn test_publish_listing_file() {
    init_test_logging();

    let mut file = NamedTempFile::new().unwrap();
    let content = serde_json::json!([
        listing_fixtures::full_listing(),
        listing_fixtures::listing_with_images(12)
    ]);
    write!(file, "{content}").unwrap();

    let listings = read_listings(file.path()).await.unwrap();
    assert_eq!(listings.len(), 2);

    let sent = Arc::new(Mutex::new(Vec::new()));
    let recorded = Arc::clone(&sent);
    let mut mock = MockMediaGroupTransport::new();
    mock.expect_post_media_group()
        .times(4)
        .returning(move |request| {
            recorded.lock().unwrap().push(request.clone());
            Ok(ApiResponse::ok())
        });

    let publisher = AdPublisher::with_transport(&config(), mock);
    for listing in &listings {
        let report = publisher.publish(listing).await;
        assert!(report.all_delivered());
    }

    let sent = sent.lock().unwrap();
    let first: serde_json::Value = serde_json::from_str(&sent[0].media).unwrap();
    assert_eq!(
        first[0]["caption"],
        "[Bike](https://avito.ru/4123456789)\nNice\n\nЦена: *500*\nПродавец: 42\nMain St"
    );
    assert_eq!(first.as_array().unwrap().len(), 3);
    assert_eq!(sent[0].media, sent[1].media);

    let album: serde_json::Value = serde_json::from_str(&sent[2].media).unwrap();
    assert_eq!(album.as_array().unwrap().len(), 10);
}

#[tokio::test(start_paused = true)]
async fn test_failures_are_reported_not_raised() {
    let mut mock = MockMediaGroupTransport::new();
    mock.expect_post_media_group()
        .returning(|_| Ok(ApiResponse::new(500, "Internal Server Error")));

    let mut config = config();
    config.delivery.max_retries = 2;
    let publisher = AdPublisher::with_transport(&config, mock);
    let listing = serde_json::from_value(listing_fixtures::full_listing()).unwrap();

    let report = publisher.publish(&listing).await;
    assert_eq!(report.failed(), 2);
    assert!(report
        .outcomes()
        .iter()
        .all(|(_, outcome)| matches!(outcome, DeliveryOutcome::Exhausted { attempts: 2, .. })));
}

#[tokio::test]
async fn test_missing_listing_file() {
    let err = read_listings(std::path::Path::new("/nonexistent/listing.json"))
        .await
        .unwrap_err();
    assert!(matches!(err, BotError::Io { .. }));
}

#[tokio::test]
async fn test_config_file_drives_publisher() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(
        file,
        r#"
[telegram]
bot_token = "123:abc"
chat_ids = [-1001234567890, "@tgpost_test"]

[delivery]
max_retries = 3
retry_delay_secs = 1
"#
    )
    .unwrap();

    let config = ConfigLoader::new(file.path())
        .load_with(|_| None)
        .await
        .unwrap();
    let publisher = AdPublisher::from_config(&config).unwrap();

    assert_eq!(publisher.chat_ids().len(), 2);
    assert_eq!(publisher.engine().policy().max_attempts, 3);
}
