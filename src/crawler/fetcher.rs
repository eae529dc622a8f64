//! HTTP fetcher implementation
//!
//! This module handles all HTTP requests for the scraper:
//! - Building the HTTP client with the configured user agent and timeouts
//! - GET requests for HTML pages and image bytes
//! - The optional politeness pause before each request
//! - Error classification into `ScrapeError::Fetch` / `ScrapeError::HttpStatus`
//!
//! No retries are made: a failed request is reported to the caller.

use crate::config::HttpConfig;
use crate::{Result, ScrapeError};
use reqwest::{Client, Response};
use std::time::Duration;
use url::Url;

/// Builds an HTTP client with proper configuration
///
/// # Example
///
/// ```no_run
/// use bookshelf_scraper::config::HttpConfig;
/// use bookshelf_scraper::crawler::build_http_client;
///
/// let client = build_http_client(&HttpConfig::default()).unwrap();
/// ```
pub fn build_http_client(config: &HttpConfig) -> std::result::Result<Client, reqwest::Error> {
    Client::builder()
        .user_agent(config.user_agent.as_str())
        .timeout(Duration::from_secs(config.timeout_secs))
        .connect_timeout(Duration::from_secs(config.connect_timeout_secs))
        .gzip(true)
        .brotli(true)
        .build()
}

/// HTTP fetcher shared by every stage of a scrape
#[derive(Debug, Clone)]
pub struct Fetcher {
    client: Client,
    delay: Duration,
}

impl Fetcher {
    /// Creates a fetcher from the HTTP configuration
    pub fn new(config: &HttpConfig) -> Result<Self> {
        let client = build_http_client(config)?;

        Ok(Self {
            client,
            delay: Duration::from_millis(config.request_delay_ms),
        })
    }

    /// Fetches a page and returns its body as text
    pub async fn fetch_html(&self, url: &Url) -> Result<String> {
        let response = self.get(url).await?;

        response.text().await.map_err(|source| ScrapeError::Fetch {
            url: url.to_string(),
            source,
        })
    }

    /// Fetches a resource and returns its raw bytes
    pub async fn fetch_bytes(&self, url: &Url) -> Result<Vec<u8>> {
        let response = self.get(url).await?;

        let bytes = response.bytes().await.map_err(|source| ScrapeError::Fetch {
            url: url.to_string(),
            source,
        })?;

        Ok(bytes.to_vec())
    }

    /// Sends a GET request and checks for a success status
    async fn get(&self, url: &Url) -> Result<Response> {
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }

        tracing::debug!("GET {}", url);

        let response = self
            .client
            .get(url.clone())
            .send()
            .await
            .map_err(|source| {
                if source.is_timeout() {
                    tracing::debug!("Request timeout for {}", url);
                } else if source.is_connect() {
                    tracing::debug!("Connection failed for {}", url);
                }
                ScrapeError::Fetch {
                    url: url.to_string(),
                    source,
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(ScrapeError::HttpStatus {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        Ok(response)
    }
}
