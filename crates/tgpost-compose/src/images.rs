//! Picks the highest-resolution variant of each listing photo.

use crate::listing::{Image, Listing};
use tgpost_common::{PostError, Result};
use tracing::{debug, warn};

/// Parses a `"WxH"` label into `(width, height)`.
pub fn parse_resolution(label: &str) -> Result<(u32, u32)> {
    let invalid = || PostError::InvalidResolution {
        label: label.to_string(),
    };
    let (width, height) = label.split_once('x').ok_or_else(invalid)?;
    let width = width.trim().parse().map_err(|_| invalid())?;
    let height = height.trim().parse().map_err(|_| invalid())?;
    Ok((width, height))
}

/// Pixel area of a `"WxH"` label.
pub fn resolution_area(label: &str) -> Result<u64> {
    let (width, height) = parse_resolution(label)?;
    Ok(u64::from(width) * u64::from(height))
}

/// URL of the variant with the largest area.
///
/// Labels that do not parse are ignored. On equal areas the first label in
/// ascending order wins.
pub fn largest_variant(image: &Image) -> Result<&str> {
    let mut best: Option<(u64, &str)> = None;
    for (label, url) in image.variants() {
        let area = match resolution_area(label) {
            Ok(area) => area,
            Err(e) => {
                debug!("Skipping image variant: {}", e);
                continue;
            }
        };
        if best.map_or(true, |(best_area, _)| area > best_area) {
            best = Some((area, url));
        }
    }
    best.map(|(_, url)| url)
        .ok_or(PostError::MissingImageData {
            labels: image.len(),
        })
}

/// Largest-variant URL of every usable image, in listing order.
///
/// Images without a usable variant are skipped with a warning.
pub fn select_image_urls(images: &[Image]) -> Vec<String> {
    images
        .iter()
        .enumerate()
        .filter_map(|(index, image)| match largest_variant(image) {
            Ok(url) => Some(url.to_string()),
            Err(e) => {
                warn!(index, "Skipping image: {}", e);
                None
            }
        })
        .collect()
}

/// Largest-variant URL of the first usable image of a listing.
pub fn first_image_url(listing: &Listing) -> Option<String> {
    listing
        .images
        .iter()
        .find_map(|image| largest_variant(image).ok())
        .map(str::to_string)
}
