//! Bounded-retry delivery of media groups.
//!
//! Each destination gets up to [`RetryPolicy::max_attempts`] requests spaced a
//! fixed delay apart. A `400 Bad Request` ends delivery immediately since the
//! same payload would be refused again. Failures never propagate to the
//! caller; they are reported as a [`DeliveryOutcome`].

use crate::outcome::{DeliveryOutcome, DeliveryReport};
use crate::payload::{MediaGroup, SendMediaGroupRequest};
use crate::transport::{HttpTransport, MediaGroupTransport};
use std::time::Duration;
use tgpost_common::{ChatId, PostError, Result};
use tgpost_config::{Config, DeliveryConfig};
use tokio_retry::strategy::FixedInterval;
use tracing::{error, info, instrument, warn};

/// Status the Bot API returns for malformed requests.
const BAD_REQUEST: u16 = 400;

/// Attempt budget and spacing for one destination.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    /// Total requests per destination, the first one included.
    pub max_attempts: u32,
    /// Pause between consecutive attempts.
    pub delay: Duration,
}

impl RetryPolicy {
    /// Creates a policy. A zero attempt budget is raised to one.
    pub const fn new(max_attempts: u32, delay: Duration) -> Self {
        Self {
            max_attempts: if max_attempts == 0 { 1 } else { max_attempts },
            delay,
        }
    }

    /// Pauses taken between attempts; one fewer than the attempt budget.
    pub fn delays(&self) -> impl Iterator<Item = Duration> {
        FixedInterval::new(self.delay).take(self.max_attempts.saturating_sub(1) as usize)
    }
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self::from(&DeliveryConfig::default())
    }
}

impl From<&DeliveryConfig> for RetryPolicy {
    fn from(config: &DeliveryConfig) -> Self {
        Self::new(config.max_retries, config.retry_delay())
    }
}

/// Sends media groups through a [`MediaGroupTransport`].
#[derive(Debug, Clone)]
pub struct DeliveryEngine<T = HttpTransport> {
    transport: T,
    policy: RetryPolicy,
}

impl DeliveryEngine<HttpTransport> {
    /// Engine talking to the Bot API configured in `config`.
    pub fn from_config(config: &Config) -> Result<Self> {
        let transport = HttpTransport::new(&config.telegram)?;
        Ok(Self::new(transport, RetryPolicy::from(&config.delivery)))
    }
}

impl<T: MediaGroupTransport> DeliveryEngine<T> {
    /// Creates an engine.
    pub const fn new(transport: T, policy: RetryPolicy) -> Self {
        Self { transport, policy }
    }

    /// The retry policy in use.
    pub const fn policy(&self) -> &RetryPolicy {
        &self.policy
    }

    /// The underlying transport.
    pub const fn transport(&self) -> &T {
        &self.transport
    }

    /// Sends `image_urls` captioned with `caption` to one chat.
    pub async fn send(
        &self,
        chat_id: &ChatId,
        caption: &str,
        image_urls: &[String],
    ) -> DeliveryOutcome {
        match MediaGroup::new(image_urls, caption) {
            Ok(group) => self.deliver(chat_id, &group).await,
            Err(e) => unsendable(chat_id, &e),
        }
    }

    /// Sends the same album to every chat in order.
    ///
    /// Destinations are independent: a failure for one chat does not stop
    /// delivery to the others.
    pub async fn deliver_all(
        &self,
        chat_ids: &[ChatId],
        caption: &str,
        image_urls: &[String],
    ) -> DeliveryReport {
        let group = MediaGroup::new(image_urls, caption);
        let mut report = DeliveryReport::default();

        for chat_id in chat_ids {
            let outcome = match &group {
                Ok(group) => self.deliver(chat_id, group).await,
                Err(e) => unsendable(chat_id, e),
            };
            report.push(chat_id.clone(), outcome);
        }

        report
    }

    /// Delivers a prepared album to one chat, retrying transient failures.
    #[instrument(skip(self, group), fields(chat_id = %chat_id, photos = group.len()))]
    pub async fn deliver(&self, chat_id: &ChatId, group: &MediaGroup) -> DeliveryOutcome {
        let request = match SendMediaGroupRequest::new(chat_id.clone(), group) {
            Ok(request) => request,
            Err(e) => return unsendable(chat_id, &e),
        };
        info!(media = %request.media, "Sending media group");

        let mut delays = self.policy.delays();
        let mut attempts = 0;

        loop {
            attempts += 1;

            let failure = match self.transport.post_media_group(&request).await {
                Ok(response) if !response.is_error() => {
                    info!(attempts, "Media group delivered");
                    return DeliveryOutcome::Delivered { attempts };
                }
                Ok(response) if response.status == BAD_REQUEST => {
                    warn!(
                        status = response.status,
                        body = %response.body,
                        media = %request.media,
                        "Telegram rejected the media group"
                    );
                    return DeliveryOutcome::Rejected {
                        attempts,
                        status: Some(response.status),
                        reason: response.description(),
                    };
                }
                Ok(response) => PostError::api_with_status(response.description(), response.status),
                Err(e) => e,
            };

            if !failure.is_transient() {
                warn!(attempts, error = %failure, "Media group delivery failed permanently");
                return DeliveryOutcome::Rejected {
                    attempts,
                    status: failure.status(),
                    reason: failure.to_string(),
                };
            }

            match delays.next() {
                Some(delay) => {
                    warn!(
                        attempt = attempts,
                        max_attempts = self.policy.max_attempts,
                        error = %failure,
                        "Delivery attempt failed, retrying in {:?}",
                        delay
                    );
                    tokio::time::sleep(delay).await;
                }
                None => {
                    error!(attempts, error = %failure, "Giving up on media group delivery");
                    return DeliveryOutcome::Exhausted {
                        attempts,
                        last_error: failure.to_string(),
                    };
                }
            }
        }
    }
}

fn unsendable(chat_id: &ChatId, error: &PostError) -> DeliveryOutcome {
    warn!(chat_id = %chat_id, error = %error, "Media group could not be built");
    DeliveryOutcome::Rejected {
        attempts: 0,
        status: None,
        reason: error.to_string(),
    }
}
