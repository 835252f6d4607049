//! Listing input files.

use crate::error::{BotError, BotResult};
use serde_json::Value;
use std::path::Path;
use tgpost_compose::Listing;
use tracing::debug;

/// Parses a JSON document holding either one listing or an array of them.
pub fn parse_listings(content: &str) -> serde_json::Result<Vec<Listing>> {
    match serde_json::from_str::<Value>(content)? {
        Value::Array(items) => items.into_iter().map(serde_json::from_value).collect(),
        other => Ok(vec![serde_json::from_value(other)?]),
    }
}

/// Reads the listings stored in `path`.
pub async fn read_listings(path: &Path) -> BotResult<Vec<Listing>> {
    let content = tokio::fs::read_to_string(path)
        .await
        .map_err(|source| BotError::Io {
            path: path.to_path_buf(),
            source,
        })?;

    let listings = parse_listings(&content).map_err(|source| BotError::Input {
        path: path.to_path_buf(),
        source,
    })?;
    debug!(path = %path.display(), count = listings.len(), "Read listings");

    Ok(listings)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tgpost_common::test_utils::listing_fixtures;

    #[test]
    fn test_single_object() {
        let content = listing_fixtures::full_listing().to_string();
        let listings = parse_listings(&content).unwrap();
        assert_eq!(listings.len(), 1);
        assert_eq!(listings[0].id, "4123456789");
    }

    #[test]
    fn test_array_of_listings() {
        let content = serde_json::json!([
            listing_fixtures::full_listing(),
            listing_fixtures::title_only_listing()
        ])
        .to_string();
        assert_eq!(parse_listings(&content).unwrap().len(), 2);
    }

    #[test]
    fn test_invalid_json() {
        assert!(parse_listings("{not json").is_err());
        assert!(parse_listings("[1, 2]").is_err());
    }
}
