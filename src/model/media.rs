//! The canonical media record and its in-place refresh

use super::Account;
use crate::fetch::MediaFetcher;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Media type tag for still images
pub const TYPE_IMAGE: &str = "image";

/// Media type tag for videos
pub const TYPE_VIDEO: &str = "video";

const PERMALINK_BASE: &str = "https://www.instagram.com/p/";

/// A single post, normalized from any of the upstream payload shapes
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Media {
    /// Shortcode used in post URLs
    pub code: String,
    /// Numeric media id rendered as a decimal string
    pub id: String,
    /// [`TYPE_IMAGE`] or [`TYPE_VIDEO`]. Account listings copy upstream's
    /// value verbatim, so anything else is possible there.
    #[serde(rename = "type")]
    pub media_type: String,
    /// Video file for videos, still image otherwise
    pub media_url: String,
    pub caption: String,
    /// Seconds since the Unix epoch
    pub date: u64,
    pub likes_count: u32,
    pub comments_count: u32,
    /// Flagged as an advertisement upstream
    pub ad: bool,
    pub owner: Account,
}

impl Media {
    pub fn is_video(&self) -> bool {
        self.media_type == TYPE_VIDEO
    }

    pub fn is_image(&self) -> bool {
        self.media_type == TYPE_IMAGE
    }

    /// Post timestamp, `None` when upstream did not provide one
    pub fn taken_at(&self) -> Option<DateTime<Utc>> {
        if self.date == 0 {
            return None;
        }
        DateTime::from_timestamp(i64::try_from(self.date).ok()?, 0)
    }

    /// Public URL of the post page
    pub fn permalink(&self) -> Option<String> {
        if self.code.is_empty() {
            return None;
        }
        Some(format!("{PERMALINK_BASE}{}/", self.code))
    }

    /// Re-fetch this post by its code and replace the record with the result.
    ///
    /// The record is left untouched when it has no code or when the fetch
    /// fails for any reason. Failures are not reported; compare the record
    /// before and after if staleness matters.
    pub async fn update<F>(&mut self, fetcher: &F)
    where
        F: MediaFetcher + ?Sized,
    {
        if self.code.is_empty() {
            debug!("Skipping update of media without a code");
            return;
        }

        let result = fetcher.fetch_media_by_code(&self.code).await;
        match result {
            Ok(fresh) => *self = fresh,
            Err(e) => debug!("Update of media {} failed, keeping record: {}", self.code, e),
        }
    }
}
