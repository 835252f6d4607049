//! Terminal results of a delivery.

use std::fmt;
use tgpost_common::ChatId;

/// How delivery to one destination ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeliveryOutcome {
    /// The API accepted the media group.
    Delivered {
        /// Attempts used, including the successful one.
        attempts: u32,
    },
    /// The request was refused as malformed; it was not retried.
    Rejected {
        /// Attempts used; `0` when the payload could not be built.
        attempts: u32,
        /// HTTP status of the refusal, if one was received.
        status: Option<u16>,
        /// Response body or local reason.
        reason: String,
    },
    /// Every attempt failed transiently.
    Exhausted {
        /// Attempts used.
        attempts: u32,
        /// The error of the final attempt.
        last_error: String,
    },
}

impl DeliveryOutcome {
    /// Whether the media group was delivered.
    pub const fn is_success(&self) -> bool {
        matches!(self, Self::Delivered { .. })
    }

    /// Number of requests issued.
    pub const fn attempts(&self) -> u32 {
        match self {
            Self::Delivered { attempts }
            | Self::Rejected { attempts, .. }
            | Self::Exhausted { attempts, .. } => *attempts,
        }
    }
}

impl fmt::Display for DeliveryOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Delivered { attempts } => write!(f, "delivered after {attempts} attempt(s)"),
            Self::Rejected {
                status: Some(status),
                reason,
                ..
            } => write!(f, "rejected with status {status}: {reason}"),
            Self::Rejected { reason, .. } => write!(f, "rejected: {reason}"),
            Self::Exhausted {
                attempts,
                last_error,
            } => write!(f, "gave up after {attempts} attempt(s): {last_error}"),
        }
    }
}

/// Outcomes of one fan-out, in destination order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DeliveryReport {
    outcomes: Vec<(ChatId, DeliveryOutcome)>,
}

impl DeliveryReport {
    /// Records the outcome for a destination.
    pub fn push(&mut self, chat_id: ChatId, outcome: DeliveryOutcome) {
        self.outcomes.push((chat_id, outcome));
    }

    /// Outcomes in destination order.
    pub fn outcomes(&self) -> &[(ChatId, DeliveryOutcome)] {
        &self.outcomes
    }

    /// Outcome recorded for `chat_id`.
    pub fn outcome_for(&self, chat_id: &ChatId) -> Option<&DeliveryOutcome> {
        self.outcomes
            .iter()
            .find(|(id, _)| id == chat_id)
            .map(|(_, outcome)| outcome)
    }

    /// Number of successful destinations.
    pub fn delivered(&self) -> usize {
        self.outcomes.iter().filter(|(_, o)| o.is_success()).count()
    }

    /// Number of failed destinations.
    pub fn failed(&self) -> usize {
        self.outcomes.len() - self.delivered()
    }

    /// Whether every destination succeeded.
    pub fn all_delivered(&self) -> bool {
        self.failed() == 0
    }
}
