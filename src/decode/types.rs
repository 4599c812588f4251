//! Decoder trait and payload source selection

use super::decoders::{AccountMediaListDecoder, MediaPageDecoder, SearchMediaListDecoder};
use crate::model::Media;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Upstream surface a payload was produced by
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MediaSource {
    /// Single post detail page
    MediaPage,
    /// Legacy per-account media listing
    AccountMediaList,
    /// Search result listing
    SearchMediaList,
}

impl MediaSource {
    /// Decoder for payloads of this source
    pub fn decoder(self) -> Box<dyn MediaDecoder> {
        match self {
            MediaSource::MediaPage => Box::new(MediaPageDecoder),
            MediaSource::AccountMediaList => Box::new(AccountMediaListDecoder),
            MediaSource::SearchMediaList => Box::new(SearchMediaListDecoder),
        }
    }

    /// Where the list of elements lives in a full listing response
    pub fn default_record_path(self) -> Option<&'static str> {
        match self {
            MediaSource::AccountMediaList => Some("items"),
            MediaSource::MediaPage | MediaSource::SearchMediaList => None,
        }
    }
}

/// Trait for projecting one upstream payload onto a [`Media`]
pub trait MediaDecoder: Send + Sync {
    /// The payload shape this decoder understands
    fn source(&self) -> MediaSource;

    /// Decode an already parsed payload.
    ///
    /// Returns `None` when the value is not an object or one of its fields
    /// has an incompatible JSON type.
    fn decode_value(&self, value: Value) -> Option<Media>;

    /// Decode a raw response body
    fn decode(&self, body: &[u8]) -> Option<Media> {
        let value: Value = serde_json::from_slice(body).ok()?;
        self.decode_value(value)
    }
}
