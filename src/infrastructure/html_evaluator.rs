//! HTML parsing and selector evaluation
//!
//! The document is parsed once and handed around explicitly; each check is
//! compiled and run against it in specification order. A selector the engine
//! cannot parse fails the whole evaluation instead of reporting `false`.

use crate::domain::{Check, CheckReport, ChecksSpec};
use crate::error::{GraderError, GraderResult};
use scraper::{Html, Selector};
use tracing::{debug, trace};

/// A parsed, queryable HTML document
pub struct HtmlDocument {
    html: Html,
}

impl HtmlDocument {
    /// Parse a full HTML document. Malformed markup is repaired by the
    /// parser, never rejected.
    #[must_use]
    pub fn parse(content: &str) -> Self {
        Self {
            html: Html::parse_document(content),
        }
    }

    /// Whether at least one element matches `check`
    pub fn contains(&self, check: &Check) -> GraderResult<bool> {
        let selector = compile_selector(check)?;
        let present = self.html.select(&selector).next().is_some();
        trace!("{} -> {}", check, present);
        Ok(present)
    }
}

fn compile_selector(check: &Check) -> GraderResult<Selector> {
    Selector::parse(check.selector())
        .map_err(|e| GraderError::invalid_selector(check.selector(), e))
}

/// Evaluate every check against `document`
pub fn evaluate(document: &HtmlDocument, checks: &ChecksSpec) -> GraderResult<CheckReport> {
    let mut report = CheckReport::new();
    for check in checks {
        report.record(check, document.contains(check)?);
    }

    debug!("Evaluated {} checks, {} present", checks.len(), report.passed());
    Ok(report)
}

/// Parse `html` and evaluate `checks` against it in one step
pub fn check_html_data(html: &str, checks: &ChecksSpec) -> GraderResult<CheckReport> {
    let document = HtmlDocument::parse(html);
    evaluate(&document, checks)
}
