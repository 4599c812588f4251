//! # instagram-media
//!
//! Normalizes public Instagram media payloads into one canonical record.
//!
//! Upstream serves the same post under three incompatible JSON shapes
//! (post page, per-account listing, search listing), each with its own
//! field names, nesting and numeric encodings. The decoders in [`decode`]
//! project all three onto [`Media`].
//!
//! ## Quick Start
//!
//! ```rust
//! use instagram_media::decode::media_from_search_media_list;
//! use instagram_media::TYPE_VIDEO;
//!
//! let body = br#"{"id": "1", "code": "C", "is_video": true,
//!                 "display_src": "http://d.jpg", "caption": "c",
//!                 "date": 1500000000.0, "owner": {"id": "9"},
//!                 "likes": {"count": 1}, "comments": {"count": 0}}"#;
//!
//! let media = media_from_search_media_list(body).unwrap();
//! assert_eq!(media.media_type, TYPE_VIDEO);
//! assert_eq!(media.owner.id, "9");
//! ```
//!
//! Refreshing a record over the network:
//!
//! ```rust,ignore
//! use instagram_media::{InstagramClient, Media};
//!
//! let client = InstagramClient::new()?;
//! let mut media: Media = load_somewhere();
//! media.update(&client).await;
//! ```

#![warn(clippy::all)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::doc_markdown)]

/// Error types for transport and configuration
pub mod error;

/// Common types
pub mod types;

/// Canonical media model
pub mod model;

/// Payload decoders
pub mod decode;

/// HTTP client with retry and rate limiting
pub mod http;

/// Media fetching by shortcode
pub mod fetch;

/// Client configuration
pub mod config;

pub use config::ClientConfig;
pub use decode::{MediaDecoder, MediaSource};
pub use error::{Error, Result};
pub use fetch::{InstagramClient, MediaFetcher};
pub use model::{Account, Media, TYPE_IMAGE, TYPE_VIDEO};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
