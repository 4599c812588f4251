//! HTTP client with retry and rate limiting
//!
//! Every request goes through the rate limiter, then is retried on
//! throttling (429), transient server errors, timeouts and connection
//! failures. Other 4xx responses fail immediately. Every delay, including
//! one advertised by `retry-after`, is capped at `max_backoff`.

use super::rate_limit::{RateLimiter, RateLimiterConfig};
use crate::error::{Error, Result};
use crate::types::BackoffType;
use reqwest::{Client, Response, StatusCode};
use std::collections::HashMap;
use std::time::Duration;
use tracing::{debug, warn};

/// Configuration for the HTTP client
#[derive(Debug, Clone)]
pub struct HttpClientConfig {
    /// Base URL that relative paths are joined onto
    pub base_url: Option<String>,
    /// Request timeout
    pub timeout: Duration,
    /// Retries after the first attempt
    pub max_retries: u32,
    pub initial_backoff: Duration,
    pub max_backoff: Duration,
    pub backoff_type: BackoffType,
    /// `None` disables throttling
    pub rate_limit: Option<RateLimiterConfig>,
    /// Headers sent with every request
    pub default_headers: HashMap<String, String>,
    pub user_agent: String,
}

impl Default for HttpClientConfig {
    fn default() -> Self {
        Self {
            base_url: None,
            timeout: Duration::from_secs(30),
            max_retries: 3,
            initial_backoff: Duration::from_millis(500),
            max_backoff: Duration::from_secs(30),
            backoff_type: BackoffType::Exponential,
            rate_limit: Some(RateLimiterConfig::default()),
            default_headers: HashMap::new(),
            user_agent: format!("instagram-media/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

impl HttpClientConfig {
    pub fn builder() -> HttpClientConfigBuilder {
        HttpClientConfigBuilder::default()
    }
}

/// Builder for [`HttpClientConfig`]
#[derive(Debug, Default)]
pub struct HttpClientConfigBuilder {
    config: HttpClientConfig,
}

impl HttpClientConfigBuilder {
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.config.base_url = Some(url.into());
        self
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.config.timeout = timeout;
        self
    }

    pub fn max_retries(mut self, retries: u32) -> Self {
        self.config.max_retries = retries;
        self
    }

    pub fn backoff(mut self, backoff_type: BackoffType, initial: Duration, max: Duration) -> Self {
        self.config.backoff_type = backoff_type;
        self.config.initial_backoff = initial;
        self.config.max_backoff = max;
        self
    }

    pub fn rate_limit(mut self, config: RateLimiterConfig) -> Self {
        self.config.rate_limit = Some(config);
        self
    }

    pub fn no_rate_limit(mut self) -> Self {
        self.config.rate_limit = None;
        self
    }

    pub fn header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.config.default_headers.insert(key.into(), value.into());
        self
    }

    pub fn user_agent(mut self, agent: impl Into<String>) -> Self {
        self.config.user_agent = agent.into();
        self
    }

    pub fn build(self) -> HttpClientConfig {
        self.config
    }
}

/// Per-request overrides
#[derive(Debug, Clone, Default)]
pub struct RequestConfig {
    pub query: Vec<(String, String)>,
    pub headers: HashMap<String, String>,
    pub timeout: Option<Duration>,
    pub max_retries: Option<u32>,
}

impl RequestConfig {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn query(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.query.push((key.into(), value.into()));
        self
    }

    #[must_use]
    pub fn header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(key.into(), value.into());
        self
    }

    #[must_use]
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    #[must_use]
    pub fn retries(mut self, retries: u32) -> Self {
        self.max_retries = Some(retries);
        self
    }
}

/// What to do after one attempt
enum Attempt {
    Done(Response),
    Retry { delay: Duration, error: Error },
    Fail(Error),
}

/// HTTP client with retry and rate limiting
pub struct HttpClient {
    client: Client,
    config: HttpClientConfig,
    rate_limiter: Option<RateLimiter>,
}

impl HttpClient {
    /// Create a client, failing if the TLS backend can't be initialized
    pub fn new(config: HttpClientConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(config.timeout)
            .user_agent(&config.user_agent)
            .build()?;

        let rate_limiter = config.rate_limit.as_ref().map(RateLimiter::new);

        Ok(Self {
            client,
            config,
            rate_limiter,
        })
    }

    pub fn config(&self) -> &HttpClientConfig {
        &self.config
    }

    pub fn has_rate_limiter(&self) -> bool {
        self.rate_limiter.is_some()
    }

    /// GET a path (or absolute URL)
    pub async fn get(&self, url: &str) -> Result<Response> {
        self.get_with_config(url, RequestConfig::default()).await
    }

    /// GET a path and read the whole body
    pub async fn get_bytes(&self, url: &str, config: RequestConfig) -> Result<Vec<u8>> {
        let response = self.get_with_config(url, config).await?;
        Ok(response.bytes().await?.to_vec())
    }

    /// GET with per-request overrides, retrying transient failures
    pub async fn get_with_config(&self, url: &str, config: RequestConfig) -> Result<Response> {
        let full_url = self.build_url(url);
        let max_retries = config.max_retries.unwrap_or(self.config.max_retries);
        let timeout = config.timeout.unwrap_or(self.config.timeout);

        let mut attempt = 0;
        loop {
            if let Some(ref limiter) = self.rate_limiter {
                limiter.wait().await;
            }

            let mut req = self.client.get(&full_url).timeout(timeout);
            for (key, value) in self.config.default_headers.iter().chain(&config.headers) {
                req = req.header(key.as_str(), value.as_str());
            }
            if !config.query.is_empty() {
                req = req.query(&config.query);
            }

            let can_retry = attempt < max_retries;
            match self.classify(req.send().await, attempt, can_retry, timeout).await {
                Attempt::Done(response) => {
                    debug!("GET {} succeeded", full_url);
                    return Ok(response);
                }
                Attempt::Retry { delay, error } => {
                    warn!(
                        "GET {} failed ({}), attempt {}/{}, retrying in {:?}",
                        full_url,
                        error,
                        attempt + 1,
                        max_retries + 1,
                        delay
                    );
                    tokio::time::sleep(delay).await;
                    attempt += 1;
                }
                Attempt::Fail(error) => return Err(error),
            }
        }
    }

    async fn classify(
        &self,
        result: reqwest::Result<Response>,
        attempt: u32,
        can_retry: bool,
        timeout: Duration,
    ) -> Attempt {
        let response = match result {
            Ok(response) => response,
            Err(e) if e.is_timeout() => {
                let error = Error::Timeout {
                    timeout_ms: timeout.as_millis() as u64,
                };
                return self.retry_or_fail(error, attempt, can_retry);
            }
            Err(e) if e.is_connect() => return self.retry_or_fail(Error::Http(e), attempt, can_retry),
            Err(e) => return Attempt::Fail(Error::Http(e)),
        };

        let status = response.status();
        if status.is_success() || status.is_redirection() || status.is_informational() {
            return Attempt::Done(response);
        }

        if status == StatusCode::TOO_MANY_REQUESTS {
            let advertised = retry_after_secs(&response);
            let delay = match advertised {
                Some(secs) => Duration::from_secs(secs).min(self.config.max_backoff),
                None => self.calculate_backoff(attempt),
            };
            let error = Error::RateLimited {
                retry_after_seconds: advertised.unwrap_or(delay.as_secs()),
            };
            return if can_retry {
                Attempt::Retry { delay, error }
            } else {
                Attempt::Fail(error)
            };
        }

        let error = Error::http_status(status.as_u16(), String::new());
        if can_retry && error.is_retryable() {
            return Attempt::Retry {
                delay: self.calculate_backoff(attempt),
                error,
            };
        }

        let body = response.text().await.unwrap_or_default();
        Attempt::Fail(Error::http_status(status.as_u16(), body))
    }

    fn retry_or_fail(&self, error: Error, attempt: u32, can_retry: bool) -> Attempt {
        if can_retry && error.is_retryable() {
            Attempt::Retry {
                delay: self.calculate_backoff(attempt),
                error,
            }
        } else {
            Attempt::Fail(error)
        }
    }

    fn build_url(&self, path: &str) -> String {
        if path.starts_with("http://") || path.starts_with("https://") {
            return path.to_string();
        }

        match &self.config.base_url {
            Some(base) => format!(
                "{}/{}",
                base.trim_end_matches('/'),
                path.trim_start_matches('/')
            ),
            None => path.to_string(),
        }
    }

    /// Delay before retry number `attempt + 1`, capped at `max_backoff`
    pub fn calculate_backoff(&self, attempt: u32) -> Duration {
        let initial = self.config.initial_backoff;
        let delay = match self.config.backoff_type {
            BackoffType::Constant => initial,
            BackoffType::Linear => initial.saturating_mul(attempt.saturating_add(1)),
            BackoffType::Exponential => initial.saturating_mul(2u32.saturating_pow(attempt)),
        };

        delay.min(self.config.max_backoff)
    }
}

impl std::fmt::Debug for HttpClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpClient")
            .field("config", &self.config)
            .field("has_rate_limiter", &self.rate_limiter.is_some())
            .finish_non_exhaustive()
    }
}

/// Seconds advertised by `retry-after`, if present and numeric
fn retry_after_secs(response: &Response) -> Option<u64> {
    response
        .headers()
        .get(reqwest::header::RETRY_AFTER)
        .and_then(|v| v.to_str().ok())
        .and_then(|s| s.trim().parse().ok())
}
