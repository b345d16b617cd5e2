use async_trait::async_trait;
use marquee_core::{
    Movie, MovieId, MoviePatch, ReadRepository, Repository, Schema, StorageError,
};
use parking_lot::RwLock;
use tracing::trace;

type Result<T> = std::result::Result<T, StorageError>;

/// In-memory implementation of the Repository trait.
///
/// Movies live in a single `Vec` so listing keeps insertion order. Every
/// operation takes the lock exactly once, which makes check-then-write
/// sequences (duplicate ids on insert, merge-check-commit on update)
/// atomic with respect to other requests.
#[derive(Debug)]
pub struct InMemoryRepository {
    movies: RwLock<Vec<Movie>>,
    schema: Schema,
}

impl InMemoryRepository {
    /// Creates an empty repository checking merges against the current schema.
    pub fn new() -> Self {
        Self::with_movies(Schema::current(), Vec::new())
    }

    /// Creates a repository holding `movies` in the given order.
    ///
    /// The movies are trusted to be valid and to carry unique ids; use
    /// [`crate::seed`] to build them from an untrusted dataset.
    pub fn with_movies(schema: Schema, movies: Vec<Movie>) -> Self {
        Self {
            movies: RwLock::new(movies),
            schema,
        }
    }

    /// Number of stored movies.
    pub fn len(&self) -> usize {
        self.movies.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.movies.read().is_empty()
    }
}

impl Default for InMemoryRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ReadRepository for InMemoryRepository {
    async fn list(&self, genre: Option<&str>) -> Result<Vec<Movie>> {
        let movies = self.movies.read();
        let listed = match genre {
            Some(tag) => movies
                .iter()
                .filter(|movie| movie.has_genre(tag))
                .cloned()
                .collect(),
            None => movies.clone(),
        };
        trace!(genre = ?genre, count = listed.len(), "listed movies");
        Ok(listed)
    }

    async fn get(&self, id: &MovieId) -> Result<Option<Movie>> {
        Ok(self
            .movies
            .read()
            .iter()
            .find(|movie| movie.id == *id)
            .cloned())
    }
}

#[async_trait]
impl Repository for InMemoryRepository {
    async fn insert(&self, movie: Movie) -> Result<Movie> {
        let mut movies = self.movies.write();
        if movies.iter().any(|stored| stored.id == movie.id) {
            return Err(StorageError::Conflict(movie.id));
        }
        movies.push(movie.clone());
        Ok(movie)
    }

    async fn remove(&self, id: &MovieId) -> Result<bool> {
        let mut movies = self.movies.write();
        let Some(index) = movies.iter().position(|movie| movie.id == *id) else {
            return Ok(false);
        };
        movies.remove(index);
        Ok(true)
    }

    async fn update(&self, id: &MovieId, patch: &MoviePatch) -> Result<Option<Movie>> {
        let mut movies = self.movies.write();
        let Some(stored) = movies.iter_mut().find(|movie| movie.id == *id) else {
            return Ok(None);
        };

        let merged = patch.merge(stored);
        self.schema.check(&merged)?;
        *stored = merged.clone();
        Ok(Some(merged))
    }
}
