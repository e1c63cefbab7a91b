//! Result mapping from selector to presence

use super::checks::Check;
use serde::Serialize;
use std::collections::BTreeMap;

/// Selector -> "at least one matching element".
///
/// Keys iterate in ascending order, which is the order checks are evaluated
/// in, so serialization is stable across runs. Recording the same selector
/// twice keeps the last value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct CheckReport {
    results: BTreeMap<String, bool>,
}

impl CheckReport {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, check: &Check, present: bool) {
        self.results.insert(check.selector().to_string(), present);
    }

    #[must_use]
    pub fn get(&self, selector: &str) -> Option<bool> {
        self.results.get(selector).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, bool)> {
        self.results.iter().map(|(k, v)| (k.as_str(), *v))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.results.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }

    /// Number of checks that matched at least one element
    #[must_use]
    pub fn passed(&self) -> usize {
        self.results.values().filter(|present| **present).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keys_iterate_sorted() {
        let mut report = CheckReport::new();
        report.record(&Check::from("h1"), true);
        report.record(&Check::from("a"), false);
        report.record(&Check::from("#main"), true);

        let keys: Vec<&str> = report.iter().map(|(k, _)| k).collect();
        assert_eq!(keys, vec!["#main", "a", "h1"]);
        assert_eq!(report.passed(), 2);
    }

    #[test]
    fn test_duplicate_key_last_write_wins() {
        let mut report = CheckReport::new();
        report.record(&Check::from("p"), false);
        report.record(&Check::from("p"), true);
        assert_eq!(report.len(), 1);
        assert_eq!(report.get("p"), Some(true));
    }
}
