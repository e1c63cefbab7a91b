//! html-grader - check an HTML document for elements matching CSS selectors
//!
//! Reads HTML from a local file or a URL, evaluates a sorted list of
//! selectors against it and reports, per selector, whether at least one
//! element matched.

pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;

pub use application::{render_report, write_report, Grader, HtmlSource};
pub use domain::{Check, CheckReport, ChecksSpec};
pub use error::{GraderError, GraderResult};
pub use infrastructure::{check_html_data, AppConfig};

/// Checks file used when `--checks` is not given
pub const DEFAULT_CHECKS_FILE: &str = "checks.json";
