//! Wire payload for the `sendMediaGroup` Bot API method.

use serde::{Deserialize, Serialize};
use tgpost_common::{
    truncate_chars, ChatId, PostError, Result, MAX_CAPTION_CHARS, MAX_MEDIA_GROUP_ITEMS,
};

/// Kind of a media group entry. Only photos are sent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaKind {
    /// A photo referenced by URL.
    Photo,
}

/// Caption markup dialect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ParseMode {
    /// Telegram MarkdownV2, the dialect the caption escaping targets.
    MarkdownV2,
}

/// One entry of a media group.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MediaGroupItem {
    /// Entry kind.
    #[serde(rename = "type")]
    pub kind: MediaKind,
    /// Photo URL.
    pub media: String,
    /// Caption; only ever set on the first entry.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub caption: Option<String>,
    /// Caption dialect; set together with the caption.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parse_mode: Option<ParseMode>,
}

/// An album of 1 to 10 photos, captioned on the first one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MediaGroup {
    items: Vec<MediaGroupItem>,
}

impl MediaGroupItem {
    /// An uncaptioned photo.
    pub fn photo(url: impl Into<String>) -> Self {
        Self {
            kind: MediaKind::Photo,
            media: url.into(),
            caption: None,
            parse_mode: None,
        }
    }
}

impl MediaGroup {
    /// Builds an album from photo URLs.
    ///
    /// Only the first [`MAX_MEDIA_GROUP_ITEMS`] URLs are used. The caption is
    /// truncated to [`MAX_CAPTION_CHARS`] characters and attached to the first
    /// photo in MarkdownV2 mode. Fails when `image_urls` is empty.
    ///
    /// The cut is a plain character count, so it may split an escape sequence
    /// and leave a trailing `\`; Telegram answers such captions with `400`.
    pub fn new<S: AsRef<str>>(image_urls: &[S], caption: &str) -> Result<Self> {
        let mut items: Vec<MediaGroupItem> = image_urls
            .iter()
            .take(MAX_MEDIA_GROUP_ITEMS)
            .map(|url| MediaGroupItem::photo(url.as_ref()))
            .collect();

        let first = items.first_mut().ok_or_else(|| {
            PostError::validation_field("A media group needs at least one photo", "images")
        })?;
        first.caption = Some(truncate_chars(caption, MAX_CAPTION_CHARS).to_string());
        first.parse_mode = Some(ParseMode::MarkdownV2);

        Ok(Self { items })
    }

    /// Entries in send order.
    pub fn items(&self) -> &[MediaGroupItem] {
        &self.items
    }

    /// Number of photos.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Always `false`; a group holds at least one photo.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Caption attached to the first photo.
    pub fn caption(&self) -> Option<&str> {
        self.items.first()?.caption.as_deref()
    }
}

/// JSON body of a `sendMediaGroup` call.
///
/// The Bot API expects `media` as a JSON-encoded string of the entry list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SendMediaGroupRequest {
    /// Destination chat.
    pub chat_id: ChatId,
    /// JSON-encoded list of [`MediaGroupItem`].
    pub media: String,
}

impl SendMediaGroupRequest {
    /// Serializes `group` for `chat_id`.
    pub fn new(chat_id: ChatId, group: &MediaGroup) -> Result<Self> {
        Ok(Self {
            chat_id,
            media: serde_json::to_string(group.items())?,
        })
    }
}

/// Error body returned by the Bot API, e.g.
/// `{"ok":false,"error_code":400,"description":"Bad Request: chat not found"}`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ApiErrorBody {
    /// Always `false` for errors.
    #[serde(default)]
    pub ok: bool,
    /// Mirrors the HTTP status.
    pub error_code: Option<u16>,
    /// Human readable reason.
    pub description: Option<String>,
}

impl ApiErrorBody {
    /// Parses an error body, returning `None` for anything that is not one.
    pub fn parse(body: &str) -> Option<Self> {
        serde_json::from_str(body).ok()
    }
}
