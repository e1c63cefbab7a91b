//! # Checks
//!
//! A check is one CSS selector that a document is expected to contain.
//! A checks specification is the sorted list of them loaded from a JSON array.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A single selector string identifying a required element
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Check(String);

impl Check {
    #[must_use]
    pub fn new(selector: impl Into<String>) -> Self {
        Self(selector.into())
    }

    /// Returns the raw selector text
    #[must_use]
    pub fn selector(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Check {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Check {
    fn from(selector: &str) -> Self {
        Self::new(selector)
    }
}

/// Checks in ascending lexicographic order.
///
/// Sorting happens on construction, so the original file order is never
/// observable. Duplicates are kept and evaluated independently.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChecksSpec {
    checks: Vec<Check>,
}

impl ChecksSpec {
    #[must_use]
    pub fn new(mut checks: Vec<Check>) -> Self {
        checks.sort();
        Self { checks }
    }

    /// Parse a JSON array of selector strings.
    ///
    /// Anything other than an array of strings is rejected.
    pub fn from_json_str(raw: &str) -> Result<Self, serde_json::Error> {
        let checks: Vec<Check> = serde_json::from_str(raw)?;
        Ok(Self::new(checks))
    }

    pub fn from_json_slice(raw: &[u8]) -> Result<Self, serde_json::Error> {
        let checks: Vec<Check> = serde_json::from_slice(raw)?;
        Ok(Self::new(checks))
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Check> {
        self.checks.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.checks.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.checks.is_empty()
    }
}

impl<'a> IntoIterator for &'a ChecksSpec {
    type Item = &'a Check;
    type IntoIter = std::slice::Iter<'a, Check>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
