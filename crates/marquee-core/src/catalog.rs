use crate::error::CatalogError;
use crate::id::MovieId;
use crate::movie::Movie;
use async_trait::async_trait;
use serde_json::Value;

type Result<T> = std::result::Result<T, CatalogError>;

/// The movie resource operations exposed to the transport layer.
///
/// Write operations take the raw request body; validation happens inside
/// the catalog so every transport gets the same contract.
#[async_trait]
pub trait Catalog: Send + Sync + 'static {
    /// Lists movies, optionally filtered by a case-insensitive genre tag.
    /// An empty result is not an error.
    async fn list(&self, genre: Option<&str>) -> Result<Vec<Movie>>;

    /// Fetches a movie by id, or `Err(NotFound)`.
    async fn get(&self, id: &MovieId) -> Result<Movie>;

    /// Validates `body` as a full movie, assigns a fresh id and stores it.
    async fn create(&self, body: &Value) -> Result<Movie>;

    /// Validates `body` as a partial movie and merges it into the stored record.
    async fn update(&self, id: &MovieId, body: &Value) -> Result<Movie>;

    /// Deletes a movie by id, or `Err(NotFound)` if nothing was removed.
    async fn delete(&self, id: &MovieId) -> Result<()>;
}
