//! Publishing pipeline: compose once, deliver to every configured chat.

use crate::error::BotResult;
use tgpost_common::ChatId;
use tgpost_compose::{Composer, Listing};
use tgpost_config::Config;
use tgpost_delivery::{
    DeliveryEngine, DeliveryReport, HttpTransport, MediaGroupTransport, RetryPolicy,
};
use tracing::{info, instrument, warn};

/// Posts listings as photo albums to the configured chats.
#[derive(Debug)]
pub struct AdPublisher<T = HttpTransport> {
    composer: Composer,
    engine: DeliveryEngine<T>,
    chat_ids: Vec<ChatId>,
}

impl AdPublisher<HttpTransport> {
    /// Builds a publisher talking to the Bot API.
    pub fn from_config(config: &Config) -> BotResult<Self> {
        config.validate()?;
        let engine = DeliveryEngine::from_config(config)?;
        Ok(Self::with_engine(config, engine))
    }
}

impl<T: MediaGroupTransport> AdPublisher<T> {
    /// Builds a publisher over a custom transport.
    pub fn with_transport(config: &Config, transport: T) -> Self {
        let engine = DeliveryEngine::new(transport, RetryPolicy::from(&config.delivery));
        Self::with_engine(config, engine)
    }

    fn with_engine(config: &Config, engine: DeliveryEngine<T>) -> Self {
        Self {
            composer: Composer::new(config.compose.clone()),
            engine,
            chat_ids: config.telegram.chat_ids.clone(),
        }
    }

    /// Destination chats, in delivery order.
    pub fn chat_ids(&self) -> &[ChatId] {
        &self.chat_ids
    }

    /// The delivery engine.
    pub const fn engine(&self) -> &DeliveryEngine<T> {
        &self.engine
    }

    /// Posts one listing to every destination.
    ///
    /// Delivery is best effort: failures are logged and reported, never raised.
    #[instrument(skip(self, listing), fields(listing_id = %listing.id))]
    pub async fn publish(&self, listing: &Listing) -> DeliveryReport {
        let ad = self.composer.compose(listing);
        let report = self
            .engine
            .deliver_all(&self.chat_ids, &ad.caption, &ad.image_urls)
            .await;

        if report.all_delivered() {
            info!(chats = report.delivered(), "Listing published");
        } else {
            for (chat_id, outcome) in report.outcomes() {
                if !outcome.is_success() {
                    warn!(chat_id = %chat_id, "Listing not delivered: {}", outcome);
                }
            }
            warn!(
                delivered = report.delivered(),
                failed = report.failed(),
                "Listing partially published"
            );
        }

        report
    }
}
