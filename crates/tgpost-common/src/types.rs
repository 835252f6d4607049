//! Common type definitions and newtype wrappers for domain modeling.

use serde::{Deserialize, Serialize};
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

/// Maximum number of photos Telegram accepts in one media group.
pub const MAX_MEDIA_GROUP_ITEMS: usize = 10;

/// Caption length, in characters, attached to an outgoing media group.
pub const MAX_CAPTION_CHARS: usize = 1000;

/// A Telegram chat identifier.
///
/// The Bot API accepts either a numeric chat id or a public `@username`, so both
/// shapes are kept and serialised untagged.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ChatId {
    /// Numeric chat id (negative for groups and channels).
    Id(i64),
    /// Channel or group username, e.g. `@my_channel`.
    Username(String),
}

impl fmt::Display for ChatId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Id(id) => write!(f, "{id}"),
            Self::Username(name) => write!(f, "{name}"),
        }
    }
}

impl FromStr for ChatId {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        Ok(s.parse::<i64>()
            .map_or_else(|_| Self::Username(s.to_string()), Self::Id))
    }
}

impl From<i64> for ChatId {
    fn from(id: i64) -> Self {
        Self::Id(id)
    }
}

impl From<&str> for ChatId {
    fn from(name: &str) -> Self {
        Self::Username(name.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chat_id_from_str() {
        assert_eq!("-1001234".parse::<ChatId>().unwrap(), ChatId::Id(-1_001_234));
        assert_eq!(
            " @ads_channel ".parse::<ChatId>().unwrap(),
            ChatId::Username("@ads_channel".to_string())
        );
    }

    #[test]
    fn test_chat_id_serializes_untagged() {
        assert_eq!(serde_json::to_string(&ChatId::Id(42)).unwrap(), "42");
        assert_eq!(
            serde_json::to_string(&ChatId::from("@chan")).unwrap(),
            "\"@chan\""
        );
    }

    #[test]
    fn test_chat_id_deserializes_both_shapes() {
        let ids: Vec<ChatId> = serde_json::from_str(r#"[7, "@chan"]"#).unwrap();
        assert_eq!(ids, vec![ChatId::Id(7), ChatId::Username("@chan".into())]);
    }
}
