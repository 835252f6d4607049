//! # tgpost Delivery
//!
//! Sends composed listings to Telegram chats as photo albums through the Bot
//! API `sendMediaGroup` method.
//!
//! ## Features
//!
//! - **Wire payload**: caption truncation and MarkdownV2 attachment on the first photo
//! - **Pluggable transport**: a `reqwest` client in production, a mock in tests
//! - **Bounded retries**: fixed-delay retries with an immediate stop on `400 Bad Request`
//! - **Per-destination outcomes**: failures are reported, never raised

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod engine;
pub mod outcome;
pub mod payload;
pub mod transport;

pub use engine::*;
pub use outcome::*;
pub use payload::*;
pub use transport::*;
