//! Fetcher trait

use crate::error::Result;
use crate::model::Media;
use async_trait::async_trait;

/// Anything that can produce a fresh [`Media`] for a shortcode
#[async_trait]
pub trait MediaFetcher: Send + Sync {
    /// Fetch and decode the post identified by `code`
    async fn fetch_media_by_code(&self, code: &str) -> Result<Media>;
}
