//! Error taxonomy for grading runs
//!
//! Every failure is terminal for a run; there is no retry or recovery path.
//! `exit_code` maps each variant to the process status reported by the CLI.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum GraderError {
    #[error("file {} does not exist", path.display())]
    MissingFile { path: PathBuf },

    #[error("url {url} not found ({reason})")]
    UnreachableUrl { url: String, reason: String },

    #[error("checks file {} is not a JSON array of selector strings: {source}", path.display())]
    MalformedChecks {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid CSS selector '{selector}': {reason}")]
    InvalidSelector { selector: String, reason: String },

    #[error("must provide either --file or --url")]
    MissingSource,

    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to serialize report: {0}")]
    Report(#[from] serde_json::Error),

    #[error("failed to write report: {0}")]
    Output(#[source] std::io::Error),
}

impl GraderError {
    pub fn missing_file(path: impl Into<PathBuf>) -> Self {
        Self::MissingFile { path: path.into() }
    }

    pub fn unreachable_url(url: &str, reason: impl ToString) -> Self {
        Self::UnreachableUrl {
            url: url.to_string(),
            reason: reason.to_string(),
        }
    }

    pub fn invalid_selector(selector: &str, reason: impl ToString) -> Self {
        Self::InvalidSelector {
            selector: selector.to_string(),
            reason: reason.to_string(),
        }
    }

    /// Usage errors exit with 2, everything else with 1
    pub const fn exit_code(&self) -> u8 {
        match self {
            Self::MissingSource => 2,
            _ => 1,
        }
    }
}

pub type GraderResult<T> = Result<T, GraderError>;
