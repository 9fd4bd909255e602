//! The diagnostic produced when two values are not equal.

use conform_types::{Key, Value};
use serde::Serialize;
use similar::TextDiff;

/// Why a single key of a keyed collection did not match.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DiscrepancyKind {
    /// The key exists in the expected collection only.
    MissingKey,
    /// The key exists in the actual collection only.
    ExtraKey,
    /// The key exists on both sides but the values differ.
    ValueMismatch,
}

/// One mismatching key of a keyed collection.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Discrepancy {
    pub key: Key,
    pub kind: DiscrepancyKind,
}

impl Discrepancy {
    pub fn new(key: Key, kind: DiscrepancyKind) -> Self {
        Self { key, kind }
    }
}

/// A failed comparison.
///
/// Carries both raw values, optional pre-rendered expected/actual strings
/// (collection comparators fill these with aligned diffs), and a summary
/// message. Parent collection comparators nest the rendered strings under
/// the mismatching key.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
#[error("{message}")]
pub struct ComparisonFailure {
    expected: Value,
    actual: Value,
    expected_as_string: Option<String>,
    actual_as_string: Option<String>,
    canonicalized: bool,
    message: String,
    discrepancies: Vec<Discrepancy>,
}

impl ComparisonFailure {
    /// A failure without pre-rendered strings.
    pub fn new(expected: Value, actual: Value, message: impl Into<String>) -> Self {
        Self {
            expected,
            actual,
            expected_as_string: None,
            actual_as_string: None,
            canonicalized: false,
            message: message.into(),
            discrepancies: Vec::new(),
        }
    }

    /// Attach pre-rendered expected and actual strings.
    pub fn with_strings(mut self, expected: impl Into<String>, actual: impl Into<String>) -> Self {
        self.expected_as_string = Some(expected.into());
        self.actual_as_string = Some(actual.into());
        self
    }

    /// Record whether the compared collections were canonicalized.
    pub fn with_canonicalized(mut self, canonicalized: bool) -> Self {
        self.canonicalized = canonicalized;
        self
    }

    pub fn with_discrepancies(mut self, discrepancies: Vec<Discrepancy>) -> Self {
        self.discrepancies = discrepancies;
        self
    }

    pub fn expected(&self) -> &Value {
        &self.expected
    }

    pub fn actual(&self) -> &Value {
        &self.actual
    }

    pub fn expected_as_string(&self) -> Option<&str> {
        self.expected_as_string.as_deref()
    }

    pub fn actual_as_string(&self) -> Option<&str> {
        self.actual_as_string.as_deref()
    }

    pub fn canonicalized(&self) -> bool {
        self.canonicalized
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// Top-level key discrepancies (empty for scalar failures).
    pub fn discrepancies(&self) -> &[Discrepancy] {
        &self.discrepancies
    }

    /// Unified diff of the rendered strings, or an empty string when either
    /// side has no rendering.
    pub fn diff(&self) -> String {
        let (Some(expected), Some(actual)) = (self.expected_as_string(), self.actual_as_string())
        else {
            return String::new();
        };
        let expected = format!("{expected}\n");
        let actual = format!("{actual}\n");
        let radius = expected.lines().count().max(actual.lines().count());

        TextDiff::from_lines(expected.as_str(), actual.as_str())
            .unified_diff()
            .context_radius(radius)
            .header("Expected", "Actual")
            .to_string()
    }

    /// The message followed by the diff, as shown in a test report.
    pub fn report(&self) -> String {
        let diff = self.diff();
        if diff.is_empty() {
            self.message.clone()
        } else {
            format!("{}\n{diff}", self.message)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_is_message() {
        let failure = ComparisonFailure::new(Value::Int(1), Value::Int(2), "values differ");
        assert_eq!(failure.to_string(), "values differ");
        assert!(failure.expected_as_string().is_none());
        assert!(!failure.canonicalized());
    }

    #[test]
    fn diff_requires_both_strings() {
        let failure = ComparisonFailure::new(Value::Int(1), Value::Int(2), "values differ");
        assert_eq!(failure.diff(), "");
        assert_eq!(failure.report(), "values differ");
    }

    #[test]
    fn unified_diff_marks_changed_lines() {
        let failure = ComparisonFailure::new(Value::Null, Value::Null, "arrays differ").with_strings(
            "Array\n(\n    [0] => 1\n    [1] => 2\n)",
            "Array\n(\n    [0] => 1\n    [1] => 3\n)",
        );
        let diff = failure.diff();
        assert!(diff.starts_with("--- Expected\n+++ Actual\n"));
        assert!(diff.contains("-    [1] => 2\n"));
        assert!(diff.contains("+    [1] => 3\n"));
        assert!(diff.contains("     [0] => 1\n"));
        assert!(!diff.contains("No newline"));

        let report = failure.report();
        assert!(report.starts_with("arrays differ\n--- Expected"));
    }

    #[test]
    fn discrepancy_kind_serializes_snake_case() {
        let discrepancy = Discrepancy::new(Key::from("a"), DiscrepancyKind::MissingKey);
        assert_eq!(
            serde_json::to_string(&discrepancy).unwrap(),
            r#"{"key":"a","kind":"missing_key"}"#
        );
    }
}
