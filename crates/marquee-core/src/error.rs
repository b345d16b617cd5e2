use crate::id::MovieId;
use serde::Serialize;
use std::fmt::Display;
use thiserror::Error;

/// Machine-readable reason attached to a [`FieldIssue`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum IssueCode {
    Required,
    InvalidType,
    TooSmall,
    TooBig,
    InvalidUrl,
    InvalidEnumValue,
    Duplicate,
    UnrecognizedKey,
    EmptyUpdate,
}

/// A single violated constraint on a candidate movie.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldIssue {
    /// Field the issue refers to; array elements are written as `genre[1]`.
    pub field: String,
    pub code: IssueCode,
    pub message: String,
}

impl FieldIssue {
    pub fn new(field: impl Into<String>, code: IssueCode, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            code,
            message: message.into(),
        }
    }
}

impl Display for FieldIssue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.field.is_empty() {
            f.write_str(&self.message)
        } else {
            write!(f, "{}: {}", self.field, self.message)
        }
    }
}

/// Every constraint a candidate violated, in field order.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("validation failed: {}", summarize(.issues))]
pub struct ValidationError {
    pub issues: Vec<FieldIssue>,
}

impl ValidationError {
    pub fn new(issues: Vec<FieldIssue>) -> Self {
        Self { issues }
    }

    /// Returns `true` if any issue refers to `field`.
    pub fn has_field(&self, field: &str) -> bool {
        self.issues.iter().any(|issue| issue.field == field)
    }
}

fn summarize(issues: &[FieldIssue]) -> String {
    issues
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

#[derive(Debug, Clone, Error)]
pub enum StorageError {
    #[error("movie id already exists: {0}")]
    Conflict(MovieId),
    #[error("merged record is invalid: {0}")]
    Rejected(#[from] ValidationError),
}

/// Outcomes of the catalog operations that are not a success.
#[derive(Debug, Clone, Error)]
pub enum CatalogError {
    #[error(transparent)]
    Validation(ValidationError),
    #[error("movie not found: {0}")]
    NotFound(MovieId),
    #[error("storage error: {0}")]
    Storage(String),
}

impl From<ValidationError> for CatalogError {
    fn from(value: ValidationError) -> Self {
        Self::Validation(value)
    }
}

impl From<StorageError> for CatalogError {
    fn from(value: StorageError) -> Self {
        match value {
            StorageError::Rejected(error) => Self::Validation(error),
            other => Self::Storage(other.to_string()),
        }
    }
}
