//! Integration tests for tgpost-compose crate.
//!
//! These tests run the composer over listings in the shape the classified-ads
//! API delivers them.

use proptest::prelude::*;
use tgpost_common::test_utils::{init_test_logging, listing_fixtures};
use tgpost_common::MAX_MEDIA_GROUP_ITEMS;
use tgpost_compose::{
    escape_markdown, escape_markdown_str, first_image_url, Composer, Listing, MARKDOWN_V2_SPECIAL,
};
use tgpost_config::ComposeConfig;

fn load(value: serde_json::Value) -> Listing {
    serde_json::from_value(value).expect("fixture should deserialize")
}

#[test]
fn test_full_listing_composition() {
    init_test_logging();

    let ad = Composer::default().compose(&load(listing_fixtures::full_listing()));

    assert_eq!(
        ad.caption,
        "[Bike](https://avito.ru/4123456789)\nNice\n\nЦена: *500*\nПродавец: 42\nMain St"
    );
    assert_eq!(
        ad.image_urls,
        vec![
            "https://img.example/1/l",
            "https://img.example/2/l",
            "https://img.example/3/l"
        ]
    );
}

#[test]
fn test_title_only_listing() {
    let ad = Composer::default().compose(&load(listing_fixtures::title_only_listing()));

    assert_eq!(ad.caption, "[Bike](https://avito.ru/abc)");
    assert_eq!(ad.image_urls.len(), 1);
    assert_eq!(ad.image_urls[0], ComposeConfig::default().placeholder_image_url);
}

#[test]
fn test_album_limit() {
    let ad = Composer::default().compose(&load(listing_fixtures::listing_with_images(25)));
    assert_eq!(ad.image_urls.len(), MAX_MEDIA_GROUP_ITEMS);
}

#[test]
fn test_first_image_helper() {
    let listing = load(listing_fixtures::full_listing());
    assert_eq!(
        first_image_url(&listing).as_deref(),
        Some("https://img.example/1/l")
    );
}

proptest! {
    #[test]
    fn prop_special_character_is_escaped(idx in 0usize..MARKDOWN_V2_SPECIAL.len()) {
        let c = MARKDOWN_V2_SPECIAL[idx];
        prop_assert_eq!(escape_markdown_str(&format!("a{c}b")), format!("a\\{c}b"));
    }

    #[test]
    fn prop_plain_alphanumerics_unchanged(input in "[a-zA-Z0-9 ]{0,40}") {
        prop_assert_eq!(escape_markdown(Some(input.as_str())), input);
    }

    #[test]
    fn prop_one_backslash_per_special_character(input in "\\PC{0,40}") {
        let specials = input.chars().filter(|c| MARKDOWN_V2_SPECIAL.contains(c)).count();
        let escaped = escape_markdown_str(&input);
        let nbsp = '\u{a0}';
        prop_assert_eq!(escaped.chars().count(), input.chars().count() + specials);
        prop_assert!(!escaped.contains(nbsp));
    }
}
