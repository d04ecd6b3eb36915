//! # Validation Errors
//!
//! Structured validation failures shared by the manifest validator and the
//! service schemas. A [`ValidationError`] carries every [`ValidationIssue`]
//! found in a single pass so callers can report all problems at once.
use std::fmt;

use thiserror::Error;

/// A single problem found while validating a document.
///
/// `path` is a dotted field path such as `routes.0.path`; the empty path
/// refers to the document root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationIssue {
    pub path: String,
    pub message: String,
}

impl ValidationIssue {
    pub fn new(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            message: message.into(),
        }
    }
}

impl fmt::Display for ValidationIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.path.is_empty() {
            write!(f, "{}", self.message)
        } else {
            write!(f, "{}: {}", self.path, self.message)
        }
    }
}

/// Error returned when a manifest, service input or service output fails validation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{}", join_issues(.issues))]
pub struct ValidationError {
    pub issues: Vec<ValidationIssue>,
}

fn join_issues(issues: &[ValidationIssue]) -> String {
    if issues.is_empty() {
        return "validation failed".to_string();
    }
    issues
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

impl ValidationError {
    pub fn new(issues: Vec<ValidationIssue>) -> Self {
        Self { issues }
    }

    /// Error with a single issue at `path`.
    pub fn single(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            issues: vec![ValidationIssue::new(path, message)],
        }
    }

    pub fn issues(&self) -> &[ValidationIssue] {
        &self.issues
    }

    /// Paths of all issues, in the order they were found.
    pub fn paths(&self) -> Vec<&str> {
        self.issues.iter().map(|i| i.path.as_str()).collect()
    }

    /// True if any issue sits at exactly `path`.
    pub fn has_issue_at(&self, path: &str) -> bool {
        self.issues.iter().any(|i| i.path == path)
    }

    /// True if any issue message contains `needle`.
    pub fn mentions(&self, needle: &str) -> bool {
        self.issues.iter().any(|i| i.message.contains(needle))
    }
}

/// Accumulates issues while walking a document.
///
/// Checks never short-circuit; [`Issues::finish`] turns the collected issues
/// into a result once every field has been inspected.
#[derive(Debug, Default)]
pub struct Issues {
    found: Vec<ValidationIssue>,
}

impl Issues {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, path: impl Into<String>, message: impl Into<String>) {
        self.found.push(ValidationIssue::new(path, message));
    }

    /// Record an issue when `ok` is false.
    pub fn check(&mut self, ok: bool, path: impl Into<String>, message: impl Into<String>) {
        if !ok {
            self.push(path, message);
        }
    }

    /// Record an issue when `value` is empty.
    pub fn non_empty(&mut self, value: &str, path: impl Into<String>) {
        self.check(!value.is_empty(), path, "String must contain at least 1 character(s)");
    }

    pub fn extend(&mut self, issues: impl IntoIterator<Item = ValidationIssue>) {
        self.found.extend(issues);
    }

    pub fn is_empty(&self) -> bool {
        self.found.is_empty()
    }

    pub fn into_vec(self) -> Vec<ValidationIssue> {
        self.found
    }

    /// `Ok(value)` when nothing was recorded.
    pub fn finish<T>(self, value: T) -> Result<T, ValidationError> {
        if self.found.is_empty() {
            Ok(value)
        } else {
            Err(ValidationError::new(self.found))
        }
    }
}
