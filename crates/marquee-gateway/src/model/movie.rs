use marquee_core::{FieldIssue, ValidationError};
use serde::Serialize;

#[derive(Debug, Default, PartialEq, Eq)]
pub struct ListQuery {
    pub genre: Option<String>,
}

impl ListQuery {
    /// Picks the recognized parameters out of raw query pairs.
    ///
    /// A repeated `genre` keeps its first value; other keys are ignored.
    pub fn from_pairs(pairs: Vec<(String, String)>) -> Self {
        let genre = pairs
            .into_iter()
            .find(|(key, _)| key == "genre")
            .map(|(_, value)| value);
        Self { genre }
    }
}

#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Body of a 400 caused by schema validation: every violated field.
#[derive(Debug, Serialize)]
pub struct ValidationErrorResponse {
    pub error: Vec<FieldIssue>,
}

impl From<ValidationError> for ValidationErrorResponse {
    fn from(error: ValidationError) -> Self {
        Self {
            error: error.issues,
        }
    }
}
