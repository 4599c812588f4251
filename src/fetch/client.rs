//! reqwest-backed media fetcher

use super::shortcode::{is_valid_shortcode, shortcode_from_url};
use super::types::MediaFetcher;
use crate::config::ClientConfig;
use crate::decode::media_from_media_page;
use crate::error::{Error, Result};
use crate::http::{HttpClient, RequestConfig};
use crate::model::Media;
use async_trait::async_trait;
use tracing::debug;

/// Fetches post pages from the public web endpoint
#[derive(Debug)]
pub struct InstagramClient {
    http: HttpClient,
}

impl InstagramClient {
    /// Client with the default configuration
    pub fn new() -> Result<Self> {
        Self::from_config(&ClientConfig::default())
    }

    /// Client built from a validated configuration
    pub fn from_config(config: &ClientConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            http: HttpClient::new(config.http_config())?,
        })
    }

    /// Wrap an already configured HTTP client
    pub fn with_http(http: HttpClient) -> Self {
        Self { http }
    }

    /// Raw media page body for `code`
    pub async fn media_page(&self, code: &str) -> Result<Vec<u8>> {
        if !is_valid_shortcode(code) {
            return Err(Error::invalid_shortcode(code));
        }

        let path = format!("/p/{code}/");
        match self
            .http
            .get_bytes(&path, RequestConfig::new().query("__a", "1"))
            .await
        {
            Err(Error::HttpStatus { status: 404, .. }) => Err(Error::not_found(code)),
            other => other,
        }
    }

    /// Fetch the post a URL points at
    pub async fn fetch_media_by_url(&self, url: &str) -> Result<Media> {
        let code = shortcode_from_url(url)?;
        self.fetch_media_by_code(&code).await
    }
}

#[async_trait]
impl MediaFetcher for InstagramClient {
    async fn fetch_media_by_code(&self, code: &str) -> Result<Media> {
        let body = self.media_page(code).await?;
        debug!("Fetched media page for {} ({} bytes)", code, body.len());

        media_from_media_page(&body)
            .ok_or_else(|| Error::decode(format!("media page for '{code}' is not a JSON object")))
    }
}
