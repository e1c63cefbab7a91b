//! Grading use case
//!
//! One run: make sure both inputs exist, load the checks, retrieve the HTML,
//! evaluate. Checks are loaded before the HTML is fetched so a malformed
//! checks file fails without any network traffic.

use super::input_resolver::{HtmlSource, InputResolver};
use crate::domain::CheckReport;
use crate::error::GraderResult;
use crate::infrastructure::{
    check_html_data, ensure_file_exists, load_checks, AppConfig, HttpClient,
};
use anyhow::Result;
use std::path::Path;
use tracing::info;

pub struct Grader {
    resolver: InputResolver,
}

impl Grader {
    pub fn new(config: &AppConfig) -> Result<Self> {
        let client = HttpClient::with_config(&config.http)?;
        Ok(Self {
            resolver: InputResolver::new(client),
        })
    }

    pub async fn run(&self, source: &HtmlSource, checks_path: &Path) -> GraderResult<CheckReport> {
        ensure_file_exists(checks_path)?;
        self.resolver.ensure_available(source).await?;

        let checks = load_checks(checks_path)?;
        let html = self.resolver.retrieve(source).await?;

        let report = check_html_data(&html, &checks)?;
        info!(
            "Graded {}: {}/{} checks present",
            source,
            report.passed(),
            report.len()
        );
        Ok(report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::GraderError;
    use std::fs;

    fn grader() -> Grader {
        Grader::new(&AppConfig::default()).unwrap()
    }

    #[tokio::test]
    async fn test_file_mode_end_to_end() {
        let dir = tempfile::tempdir().unwrap();
        let checks = dir.path().join("checks.json");
        let html = dir.path().join("index.html");
        fs::write(&checks, r#"["h1", "a"]"#).unwrap();
        fs::write(&html, "<html><body><h1>Hi</h1></body></html>").unwrap();

        let report = grader().run(&HtmlSource::File(html), &checks).await.unwrap();
        let entries: Vec<(&str, bool)> = report.iter().collect();
        assert_eq!(entries, vec![("a", false), ("h1", true)]);
    }

    #[tokio::test]
    async fn test_missing_html_file() {
        let dir = tempfile::tempdir().unwrap();
        let checks = dir.path().join("checks.json");
        fs::write(&checks, r#"["h1"]"#).unwrap();

        let missing = dir.path().join("absent.html");
        let err = grader().run(&HtmlSource::File(missing), &checks).await.unwrap_err();
        assert!(matches!(
            err,
            GraderError::MissingFile { ref path } if path.ends_with("absent.html")
        ));
    }

    #[tokio::test]
    async fn test_missing_checks_file_reported_first() {
        let dir = tempfile::tempdir().unwrap();
        let missing_html = dir.path().join("absent.html");
        let missing_checks = dir.path().join("checks.json");

        let err = grader()
            .run(&HtmlSource::File(missing_html), &missing_checks)
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            GraderError::MissingFile { ref path } if path.ends_with("checks.json")
        ));
    }

    #[tokio::test]
    async fn test_malformed_checks() {
        let dir = tempfile::tempdir().unwrap();
        let checks = dir.path().join("checks.json");
        let html = dir.path().join("index.html");
        fs::write(&checks, "not json").unwrap();
        fs::write(&html, "<h1>Hi</h1>").unwrap();

        let err = grader().run(&HtmlSource::File(html), &checks).await.unwrap_err();
        assert!(matches!(err, GraderError::MalformedChecks { .. }));
    }
}
