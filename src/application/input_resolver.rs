//! Input resolution: local file or remote URL
//!
//! `ensure_available` confirms the source exists before any checks are
//! loaded; `retrieve` then returns the HTML text. For URLs a HEAD request
//! runs first: a page whose server cannot be reached is never fetched.

use crate::error::{GraderError, GraderResult};
use crate::infrastructure::files::{ensure_file_exists, read_html_file};
use crate::infrastructure::HttpClient;
use std::fmt;
use std::path::PathBuf;
use tracing::{debug, info};
use url::Url;

/// Where the HTML comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HtmlSource {
    File(PathBuf),
    Url(Url),
}

impl HtmlSource {
    /// Pick the source from CLI options. A file wins when both are given.
    pub fn from_options(file: Option<PathBuf>, url: Option<String>) -> GraderResult<Self> {
        match (file, url) {
            (Some(path), _) => Ok(Self::File(path)),
            (None, Some(raw)) => Url::parse(&raw)
                .map(Self::Url)
                .map_err(|e| GraderError::unreachable_url(&raw, format!("invalid URL: {e}"))),
            (None, None) => Err(GraderError::MissingSource),
        }
    }
}

impl fmt::Display for HtmlSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::File(path) => write!(f, "{}", path.display()),
            Self::Url(url) => write!(f, "{url}"),
        }
    }
}

pub struct InputResolver {
    client: HttpClient,
}

impl InputResolver {
    #[must_use]
    pub const fn new(client: HttpClient) -> Self {
        Self { client }
    }

    /// File must exist; URL's server must answer a HEAD request
    pub async fn ensure_available(&self, source: &HtmlSource) -> GraderResult<()> {
        match source {
            HtmlSource::File(path) => ensure_file_exists(path),
            HtmlSource::Url(url) => {
                let status = self.client.check_reachable(url).await?;
                debug!("{} answered HEAD with {}", url, status);
                Ok(())
            }
        }
    }

    pub async fn retrieve(&self, source: &HtmlSource) -> GraderResult<String> {
        info!("Retrieving HTML from {}", source);
        match source {
            HtmlSource::File(path) => read_html_file(path),
            HtmlSource::Url(url) => self.client.fetch_html_string(url).await,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_takes_precedence() {
        let source = HtmlSource::from_options(
            Some(PathBuf::from("index.html")),
            Some("https://example.com/".to_string()),
        )
        .unwrap();
        assert_eq!(source, HtmlSource::File(PathBuf::from("index.html")));
    }

    #[test]
    fn test_url_only() {
        let source =
            HtmlSource::from_options(None, Some("https://example.com/a".to_string())).unwrap();
        assert!(matches!(source, HtmlSource::Url(ref u) if u.as_str() == "https://example.com/a"));
        assert_eq!(source.to_string(), "https://example.com/a");
    }

    #[test]
    fn test_neither_is_a_usage_error() {
        let err = HtmlSource::from_options(None, None).unwrap_err();
        assert!(matches!(err, GraderError::MissingSource));
        assert_eq!(err.exit_code(), 2);
    }

    #[test]
    fn test_unparseable_url() {
        let err = HtmlSource::from_options(None, Some("not a url".to_string())).unwrap_err();
        assert!(matches!(err, GraderError::UnreachableUrl { .. }));
    }
}
