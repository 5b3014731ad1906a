use anyhow::Context;
use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, COOKIE};
use reqwest::Client;
use std::time::Duration;

use crate::config::HttpConfig;
use crate::ScrapeError;

pub mod cookies;

pub use cookies::CookieJar;

/// A fetched document: status plus full textual body
#[derive(Debug, Clone)]
pub struct FetchedDocument {
    pub status: u16,
    pub body: String,
}

/// The external fetch capability the pipeline runs against
///
/// Transport concerns (redirects, TLS, timeouts) live behind this seam;
/// the pipeline only sees a body or a `FetchFailed`.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PageFetcher: Send + Sync {
    async fn fetch(&self, url: &str) -> Result<FetchedDocument, ScrapeError>;
}

/// HTTP fetcher backed by a configured reqwest client
pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    /// Build a fetcher from HTTP settings and an optional cookie jar
    pub fn new(http: &HttpConfig, cookies: Option<CookieJar>) -> crate::Result<Self> {
        let mut headers = HeaderMap::new();

        if let Some(jar) = cookies {
            if let Some(value) = jar.header_value() {
                tracing::debug!("Sending {} cookies with every request", jar.len());
                let header = HeaderValue::from_str(&value)
                    .context("Cookie file contains characters not allowed in a header")?;
                headers.insert(COOKIE, header);
            }
        }

        let client = Client::builder()
            .user_agent(&http.user_agent)
            .timeout(Duration::from_secs(http.timeout_secs))
            .default_headers(headers)
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self { client })
    }
}

#[async_trait]
impl PageFetcher for HttpFetcher {
    async fn fetch(&self, url: &str) -> Result<FetchedDocument, ScrapeError> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| ScrapeError::FetchFailed {
                url: url.to_string(),
                reason: e.to_string(),
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(ScrapeError::FetchFailed {
                url: url.to_string(),
                reason: format!("HTTP {}", status),
            });
        }

        let body = response
            .text()
            .await
            .map_err(|e| ScrapeError::FetchFailed {
                url: url.to_string(),
                reason: e.to_string(),
            })?;

        tracing::debug!("Fetched {} ({} bytes)", url, body.len());

        Ok(FetchedDocument {
            status: status.as_u16(),
            body,
        })
    }
}
