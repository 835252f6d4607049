//! # tgpost Bot
//!
//! Publishes classified-ad listings to Telegram chats as photo albums.
//!
//! This is the main binary crate. It wires the configuration, the composer and
//! the delivery engine together behind [`AdPublisher`].

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod error;
pub mod input;
pub mod publisher;

pub use error::*;
pub use input::*;
pub use publisher::*;
