//! HTTP client for remote HTML documents
//!
//! Two operations only: a HEAD request that confirms a server answers for a
//! page, and a GET that returns its body as text. There is no retry or rate limiting;
//! any failure is reported once as `UnreachableUrl`.

use crate::error::{GraderError, GraderResult};
use anyhow::{Context, Result};
use reqwest::{Client, ClientBuilder, StatusCode};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{debug, info, warn};
use url::Url;

/// Configuration for HTTP client behavior
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HttpClientConfig {
    /// Request timeout in seconds
    pub timeout_seconds: u64,
    /// User agent string
    pub user_agent: String,
    /// Whether to follow redirects
    pub follow_redirects: bool,
}

impl Default for HttpClientConfig {
    fn default() -> Self {
        Self {
            timeout_seconds: 30,
            user_agent: format!("html-grader/{}", env!("CARGO_PKG_VERSION")),
            follow_redirects: true,
        }
    }
}

#[derive(Debug, Clone)]
pub struct HttpClient {
    client: Client,
}

impl HttpClient {
    /// Create a new HTTP client with custom configuration
    pub fn with_config(config: &HttpClientConfig) -> Result<Self> {
        let client = ClientBuilder::new()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .user_agent(&config.user_agent)
            .gzip(true)
            .brotli(true)
            .redirect(if config.follow_redirects {
                reqwest::redirect::Policy::limited(10)
            } else {
                reqwest::redirect::Policy::none()
            })
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self { client })
    }

    /// Confirm a server answers for `url` with a header-only request.
    ///
    /// Only a transport failure (DNS, refused connection, timeout) is an
    /// error. Any status the server sends back is returned to the caller,
    /// with a warning when it is not a success.
    pub async fn check_reachable(&self, url: &Url) -> GraderResult<StatusCode> {
        debug!("🌐 HTTP HEAD: {}", url);
        let response = self
            .client
            .head(url.clone())
            .send()
            .await
            .map_err(|e| GraderError::unreachable_url(url.as_str(), e))?;

        let status = response.status();
        if status.is_success() {
            debug!("HEAD {} answered {}", url, status);
        } else {
            warn!("⚠️ HEAD {} answered {}, fetching anyway", url, status);
        }
        Ok(status)
    }

    /// Fetch the body of `url` as text. An empty body is a valid document.
    pub async fn fetch_html_string(&self, url: &Url) -> GraderResult<String> {
        info!("🌐 HTTP GET: {}", url);
        let response = self
            .client
            .get(url.clone())
            .send()
            .await
            .map_err(|e| GraderError::unreachable_url(url.as_str(), e))?;

        let status = response.status();
        if !status.is_success() {
            warn!("❌ GET {} answered {}", url, status);
            return Err(GraderError::unreachable_url(url.as_str(), format!("HTTP {status}")));
        }

        let body = response.text().await.map_err(|e| {
            GraderError::unreachable_url(url.as_str(), format!("failed to read response body: {e}"))
        })?;

        debug!("Fetched {} bytes from {}", body.len(), url);
        Ok(body)
    }
}
