use crate::error::StorageError;
use crate::id::MovieId;
use crate::movie::{Movie, MoviePatch};
use async_trait::async_trait;

type Result<T> = std::result::Result<T, StorageError>;

/// A read-only view of the movie store.
#[async_trait]
pub trait ReadRepository: Send + Sync + 'static {
    /// Returns every movie in insertion order, or only those carrying a
    /// genre that matches `genre` case-insensitively.
    async fn list(&self, genre: Option<&str>) -> Result<Vec<Movie>>;

    /// Retrieves the movie with the given id.
    /// Returns `None` if no such movie exists.
    async fn get(&self, id: &MovieId) -> Result<Option<Movie>>;
}

/// The authoritative, ordered movie store.
#[async_trait]
pub trait Repository: ReadRepository {
    /// Appends a movie. Returns `Err(Conflict)` if its id is already stored.
    async fn insert(&self, movie: Movie) -> Result<Movie>;

    /// Removes the movie with the given id.
    /// Returns `true` if the record existed and was removed.
    async fn remove(&self, id: &MovieId) -> Result<bool>;

    /// Merges `patch` into the stored movie and returns the merged record.
    ///
    /// Returns `None` without touching the store if no such movie exists.
    /// Returns `Err(Rejected)` and leaves the record unchanged if the merged
    /// result no longer satisfies the schema.
    async fn update(&self, id: &MovieId, patch: &MoviePatch) -> Result<Option<Movie>>;
}
