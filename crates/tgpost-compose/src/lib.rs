//! # tgpost Compose
//!
//! Caption and photo-album composition for classified-ad listings.
//!
//! A [`Listing`] is turned into an escaped MarkdownV2 caption and an ordered
//! list of at most ten photo URLs, each the largest variant of its image.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod caption;
pub mod composer;
pub mod escape;
pub mod images;
pub mod listing;

pub use caption::*;
pub use composer::*;
pub use escape::*;
pub use images::*;
pub use listing::*;
