use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Identifier of a stored movie.
///
/// Identifiers are opaque strings assigned by the server. Freshly created
/// movies receive UUID-shaped ids, but seeded records may carry any string.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MovieId(String);

impl MovieId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the id as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for MovieId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for MovieId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<&str> for MovieId {
    fn from(value: &str) -> Self {
        Self(value.to_owned())
    }
}
