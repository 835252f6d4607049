//! Turns a listing into the caption and photo list handed to delivery.

use crate::caption::compose_caption;
use crate::images::select_image_urls;
use crate::listing::Listing;
use tgpost_common::MAX_MEDIA_GROUP_ITEMS;
use tgpost_config::ComposeConfig;
use tracing::warn;

/// Caption and photo URLs for one listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComposedAd {
    /// Escaped MarkdownV2 caption, not yet truncated.
    pub caption: String,
    /// Between 1 and [`MAX_MEDIA_GROUP_ITEMS`] photo URLs.
    pub image_urls: Vec<String>,
}

/// Builds captions and photo lists from listings.
#[derive(Debug, Clone, Default)]
pub struct Composer {
    config: ComposeConfig,
}

impl Composer {
    /// Creates a composer with the given settings.
    pub const fn new(config: ComposeConfig) -> Self {
        Self { config }
    }

    /// The composer settings.
    pub const fn config(&self) -> &ComposeConfig {
        &self.config
    }

    /// Composes the caption and photo list for a listing.
    ///
    /// When no image is usable the configured placeholder is substituted.
    pub fn compose(&self, listing: &Listing) -> ComposedAd {
        let caption = compose_caption(listing, &self.config);

        let mut image_urls = select_image_urls(&listing.images);
        if image_urls.is_empty() {
            warn!(listing_id = %listing.id, "No images found, using placeholder");
            image_urls.push(self.config.placeholder_image_url.clone());
        }
        image_urls.truncate(MAX_MEDIA_GROUP_ITEMS);

        ComposedAd {
            caption,
            image_urls,
        }
    }
}
