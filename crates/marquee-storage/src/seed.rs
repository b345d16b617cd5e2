//! Loading of the initial movie collection.
//!
//! A dataset is a JSON array of movie objects, each carrying its own `id`.
//! Every entry goes through the same [`Schema`] as client writes, so the
//! store never starts out holding a record a client could not have created.

use crate::error::SeedError;
use marquee_core::{Movie, MovieId, Schema};
use serde_json::{Map, Value};
use std::collections::HashSet;
use std::path::Path;
use tracing::debug;

/// The dataset compiled into the binary.
pub const BUNDLED: &str = include_str!("../data/movies.json");

/// Loads the bundled dataset.
pub fn bundled(schema: &Schema) -> Result<Vec<Movie>, SeedError> {
    parse(BUNDLED, schema)
}

/// Loads a dataset from a file on disk.
pub fn from_path(path: impl AsRef<Path>, schema: &Schema) -> Result<Vec<Movie>, SeedError> {
    let path = path.as_ref();
    debug!(path = %path.display(), "reading seed dataset");
    let json = std::fs::read_to_string(path)?;
    parse(&json, schema)
}

/// Parses and validates a dataset, preserving its order.
pub fn parse(json: &str, schema: &Schema) -> Result<Vec<Movie>, SeedError> {
    let entries: Vec<Map<String, Value>> = serde_json::from_str(json)?;
    let mut seen = HashSet::with_capacity(entries.len());
    let mut movies = Vec::with_capacity(entries.len());

    for (index, mut entry) in entries.into_iter().enumerate() {
        let id = match entry.remove("id") {
            Some(Value::String(id)) => MovieId::new(id),
            _ => return Err(SeedError::MissingId { index }),
        };
        let draft = schema
            .validate_full(&Value::Object(entry))
            .map_err(|source| SeedError::Invalid { index, source })?;

        if !seen.insert(id.clone()) {
            return Err(SeedError::DuplicateId(id));
        }
        movies.push(Movie::new(id, draft));
    }

    debug!(count = movies.len(), "parsed seed dataset");
    Ok(movies)
}
