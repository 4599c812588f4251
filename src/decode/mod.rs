//! Media payload decoders
//!
//! Upstream returns the same post under three unrelated JSON shapes:
//!
//! - **Media page**: `{"graphql": {"shortcode_media": {...}}}`
//! - **Account media list**: one element of the legacy per-account listing
//! - **Search media list**: one element of a search result listing
//!
//! Each decoder projects its shape onto [`Media`](crate::model::Media). A
//! decoder only fails when the body is not a JSON object; missing fields,
//! nulls and odd numeric encodings fall back to zero values.

mod decoders;
mod lenient;
mod list;
mod types;

pub use decoders::{
    media_from_account_media_list, media_from_media_page, media_from_search_media_list,
    AccountMediaListDecoder, MediaPageDecoder, SearchMediaListDecoder,
};
pub use list::MediaListDecoder;
pub use types::{MediaDecoder, MediaSource};
