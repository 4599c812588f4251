//! HTTP transport
//!
//! A thin reqwest wrapper that the fetch layer uses to reach the media
//! page endpoint:
//!
//! - **Retries**: 429, transient 5xx, timeouts and connection errors
//! - **Backoff**: constant, linear or exponential, capped
//! - **Rate limiting**: governor token bucket shared by all requests

mod client;
mod rate_limit;

pub use client::{HttpClient, HttpClientConfig, HttpClientConfigBuilder, RequestConfig};
pub use rate_limit::{RateLimiter, RateLimiterConfig};
