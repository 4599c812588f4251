//! Decoder implementations
//!
//! Each decoder deserializes its upstream shape into private payload
//! structs and converts them into the canonical record.

use super::lenient::{count, count_u32, decimal_string, null_as_default, string};
use super::types::{MediaDecoder, MediaSource};
use crate::model::{Account, Media, TYPE_IMAGE, TYPE_VIDEO};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::Value;

/// Deserialize a payload, refusing anything but a JSON object at the top
fn from_object<T: DeserializeOwned>(value: Value) -> Option<T> {
    if !value.is_object() {
        return None;
    }
    serde_json::from_value(value).ok()
}

fn type_tag(is_video: bool) -> String {
    if is_video { TYPE_VIDEO } else { TYPE_IMAGE }.to_string()
}

// ============================================================================
// Shared payload pieces
// ============================================================================

/// `{"count": n}` wrapper used for likes and comments
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct Counter {
    #[serde(deserialize_with = "count_u32")]
    count: u32,
}

/// `{"text": "..."}` wrapper used for captions
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct TextNode {
    #[serde(deserialize_with = "string")]
    text: String,
}

// ============================================================================
// Media Page Decoder
// ============================================================================

/// Decoder for the post detail page, keyed by `graphql.shortcode_media`
#[derive(Debug, Clone, Copy, Default)]
pub struct MediaPageDecoder;

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct MediaPagePayload {
    #[serde(deserialize_with = "null_as_default")]
    graphql: Graphql,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct Graphql {
    #[serde(deserialize_with = "null_as_default")]
    shortcode_media: ShortcodeMedia,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct ShortcodeMedia {
    #[serde(deserialize_with = "string")]
    id: String,
    #[serde(deserialize_with = "string")]
    shortcode: String,
    #[serde(deserialize_with = "string")]
    display_url: String,
    #[serde(deserialize_with = "string")]
    video_url: String,
    #[serde(deserialize_with = "null_as_default")]
    is_video: bool,
    #[serde(deserialize_with = "null_as_default")]
    edge_media_to_caption: CaptionEdges,
    #[serde(deserialize_with = "null_as_default")]
    edge_media_to_comment: Counter,
    #[serde(deserialize_with = "count")]
    taken_at_timestamp: u64,
    #[serde(deserialize_with = "null_as_default")]
    edge_media_preview_like: Counter,
    #[serde(deserialize_with = "null_as_default")]
    owner: PageOwner,
    #[serde(deserialize_with = "null_as_default")]
    is_ad: bool,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct CaptionEdges {
    // Elements may be null upstream
    #[serde(deserialize_with = "null_as_default")]
    edges: Vec<Option<CaptionEdge>>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct CaptionEdge {
    #[serde(deserialize_with = "null_as_default")]
    node: TextNode,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct PageOwner {
    #[serde(deserialize_with = "string")]
    id: String,
    #[serde(deserialize_with = "string")]
    profile_pic_url: String,
    #[serde(deserialize_with = "string")]
    username: String,
    #[serde(deserialize_with = "string")]
    full_name: String,
    #[serde(deserialize_with = "null_as_default")]
    is_private: bool,
}

impl ShortcodeMedia {
    fn into_media(self) -> Media {
        let caption = self
            .edge_media_to_caption
            .edges
            .into_iter()
            .next()
            .flatten()
            .map(|edge| edge.node.text)
            .unwrap_or_default();

        let media_url = if self.is_video {
            self.video_url
        } else {
            self.display_url
        };

        Media {
            code: self.shortcode,
            id: self.id,
            media_type: type_tag(self.is_video),
            media_url,
            caption,
            date: self.taken_at_timestamp,
            likes_count: self.edge_media_preview_like.count,
            comments_count: self.edge_media_to_comment.count,
            ad: self.is_ad,
            owner: Account {
                id: self.owner.id,
                username: self.owner.username,
                full_name: self.owner.full_name,
                profile_pic_url: self.owner.profile_pic_url,
                private: self.owner.is_private,
            },
        }
    }
}

impl MediaDecoder for MediaPageDecoder {
    fn source(&self) -> MediaSource {
        MediaSource::MediaPage
    }

    fn decode_value(&self, value: Value) -> Option<Media> {
        let payload: MediaPagePayload = from_object(value)?;
        Some(payload.graphql.shortcode_media.into_media())
    }
}

/// Decode a post detail page body
pub fn media_from_media_page(data: &[u8]) -> Option<Media> {
    MediaPageDecoder.decode(data)
}

// ============================================================================
// Account Media List Decoder
// ============================================================================

/// Decoder for one element of the legacy per-account media listing
#[derive(Debug, Clone, Copy, Default)]
pub struct AccountMediaListDecoder;

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct AccountMediaItem {
    #[serde(deserialize_with = "string")]
    id: String,
    #[serde(deserialize_with = "string")]
    code: String,
    #[serde(deserialize_with = "null_as_default")]
    user: ListUser,
    #[serde(deserialize_with = "null_as_default")]
    images: Renditions,
    #[serde(deserialize_with = "null_as_default")]
    videos: Renditions,
    #[serde(deserialize_with = "decimal_string")]
    created_time: u64,
    #[serde(deserialize_with = "null_as_default")]
    caption: TextNode,
    #[serde(deserialize_with = "null_as_default")]
    likes: Counter,
    #[serde(deserialize_with = "null_as_default")]
    comments: Counter,
    #[serde(rename = "type", deserialize_with = "string")]
    media_type: String,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct ListUser {
    #[serde(deserialize_with = "string")]
    id: String,
    #[serde(deserialize_with = "string")]
    username: String,
    #[serde(deserialize_with = "string")]
    full_name: String,
    #[serde(deserialize_with = "string")]
    profile_picture: String,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct Renditions {
    #[serde(deserialize_with = "null_as_default")]
    standard_resolution: Rendition,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct Rendition {
    #[serde(deserialize_with = "string")]
    url: String,
}

impl AccountMediaItem {
    fn into_media(self) -> Media {
        // The type string is trusted as sent, only "video" switches renditions
        let media_url = if self.media_type == TYPE_VIDEO {
            self.videos.standard_resolution.url
        } else {
            self.images.standard_resolution.url
        };

        Media {
            code: self.code,
            id: self.id,
            media_type: self.media_type,
            media_url,
            caption: self.caption.text,
            date: self.created_time,
            likes_count: self.likes.count,
            comments_count: self.comments.count,
            ad: false,
            owner: Account {
                id: self.user.id,
                username: self.user.username,
                full_name: self.user.full_name,
                profile_pic_url: self.user.profile_picture,
                private: false,
            },
        }
    }
}

impl MediaDecoder for AccountMediaListDecoder {
    fn source(&self) -> MediaSource {
        MediaSource::AccountMediaList
    }

    fn decode_value(&self, value: Value) -> Option<Media> {
        let item: AccountMediaItem = from_object(value)?;
        Some(item.into_media())
    }
}

/// Decode one element of an account media listing
pub fn media_from_account_media_list(data: &[u8]) -> Option<Media> {
    AccountMediaListDecoder.decode(data)
}

// ============================================================================
// Search Media List Decoder
// ============================================================================

/// Decoder for one element of a search result listing.
///
/// This shape has no video rendition, so `media_url` is always the display
/// image even for videos.
#[derive(Debug, Clone, Copy, Default)]
pub struct SearchMediaListDecoder;

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct SearchMediaItem {
    #[serde(deserialize_with = "string")]
    id: String,
    #[serde(deserialize_with = "string")]
    code: String,
    #[serde(deserialize_with = "null_as_default")]
    owner: OwnerRef,
    #[serde(deserialize_with = "null_as_default")]
    is_video: bool,
    #[serde(deserialize_with = "count")]
    date: u64,
    #[serde(deserialize_with = "string")]
    display_src: String,
    #[serde(deserialize_with = "string")]
    caption: String,
    #[serde(deserialize_with = "null_as_default")]
    comments: Counter,
    #[serde(deserialize_with = "null_as_default")]
    likes: Counter,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct OwnerRef {
    #[serde(deserialize_with = "string")]
    id: String,
}

impl SearchMediaItem {
    fn into_media(self) -> Media {
        Media {
            code: self.code,
            id: self.id,
            media_type: type_tag(self.is_video),
            media_url: self.display_src,
            caption: self.caption,
            date: self.date,
            likes_count: self.likes.count,
            comments_count: self.comments.count,
            ad: false,
            owner: Account {
                id: self.owner.id,
                ..Account::default()
            },
        }
    }
}

impl MediaDecoder for SearchMediaListDecoder {
    fn source(&self) -> MediaSource {
        MediaSource::SearchMediaList
    }

    fn decode_value(&self, value: Value) -> Option<Media> {
        let item: SearchMediaItem = from_object(value)?;
        Some(item.into_media())
    }
}

/// Decode one element of a search result listing
pub fn media_from_search_media_list(data: &[u8]) -> Option<Media> {
    SearchMediaListDecoder.decode(data)
}
