//! Caption composition in MarkdownV2.

use crate::escape::{escape_link_url, escape_markdown_str};
use crate::listing::Listing;
use serde_json::Number;
use tgpost_config::ComposeConfig;

/// Builds the caption for a listing.
///
/// Parts are joined by newlines in a fixed order and each is included only
/// when its field is non-empty: title link, description (followed by a blank
/// line), price, seller, address. No length limit is applied here.
pub fn compose_caption(listing: &Listing, config: &ComposeConfig) -> String {
    let mut parts = Vec::with_capacity(5);

    let title = listing.title.trim();
    if !title.is_empty() {
        let url = listing.canonical_url(&config.listing_base_url);
        parts.push(format!(
            "[{}]({})",
            escape_markdown_str(title),
            escape_link_url(&url)
        ));
    }

    let description = listing.description.trim();
    if !description.is_empty() {
        parts.push(format!("{}\n", escape_markdown_str(description)));
    }

    if let Some(price) = listing.price().filter(|p| !is_zero(p)) {
        parts.push(format!(
            "{}: *{}*",
            escape_markdown_str(&config.price_label),
            escape_markdown_str(&price.to_string())
        ));
    }

    if let Some(seller) = listing
        .seller_id
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty())
    {
        parts.push(format!(
            "{}: {}",
            escape_markdown_str(&config.seller_label),
            escape_markdown_str(seller)
        ));
    }

    if let Some(address) = listing.address().map(str::trim).filter(|a| !a.is_empty()) {
        parts.push(escape_markdown_str(address));
    }

    parts.join("\n")
}

fn is_zero(value: &Number) -> bool {
    value.as_f64().is_some_and(|v| v == 0.0)
}
