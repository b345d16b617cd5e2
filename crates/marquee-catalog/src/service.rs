use async_trait::async_trait;
use marquee_core::{Catalog, CatalogError, Movie, MovieId, Repository, Schema};
use marquee_generator::Generator;
use serde_json::Value;
use std::sync::Arc;
use tracing::{debug, trace};

type Result<T> = std::result::Result<T, CatalogError>;

/// A concrete implementation of the `Catalog` trait.
///
/// This service wraps a `Repository` and a `Generator` to handle:
/// - Validation of create and update bodies
/// - Id assignment for new movies
/// - Translation of store outcomes into catalog errors
///
/// Note: The `Generator` implementation is responsible for ensuring
/// uniqueness of generated ids. No collision retry is performed.
#[derive(Debug)]
pub struct CatalogService<R, G> {
    repository: Arc<R>,
    generator: Arc<G>,
    schema: Schema,
}

impl<R, G> Clone for CatalogService<R, G> {
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
            generator: Arc::clone(&self.generator),
            schema: self.schema,
        }
    }
}

impl<R: Repository, G: Generator> CatalogService<R, G> {
    /// Creates a new `CatalogService` validating against the current schema.
    pub fn new(repository: R, generator: G) -> Self {
        Self::with_schema(repository, generator, Schema::current())
    }

    /// Creates a new `CatalogService` with explicit schema bounds.
    pub fn with_schema(repository: R, generator: G, schema: Schema) -> Self {
        Self {
            repository: Arc::new(repository),
            generator: Arc::new(generator),
            schema,
        }
    }

    /// Returns the underlying repository.
    pub fn repository(&self) -> &R {
        &self.repository
    }
}

#[async_trait]
impl<R: Repository, G: Generator> Catalog for CatalogService<R, G> {
    async fn list(&self, genre: Option<&str>) -> Result<Vec<Movie>> {
        let genre = genre.map(str::trim).filter(|tag| !tag.is_empty());
        Ok(self.repository.list(genre).await?)
    }

    async fn get(&self, id: &MovieId) -> Result<Movie> {
        trace!(id = %id, "fetching movie");
        self.repository
            .get(id)
            .await?
            .ok_or_else(|| CatalogError::NotFound(id.clone()))
    }

    async fn create(&self, body: &Value) -> Result<Movie> {
        let draft = self.schema.validate_full(body)?;
        let movie = Movie::new(self.generator.generate().into(), draft);

        let created = self.repository.insert(movie).await?;
        debug!(id = %created.id, title = %created.title, "created movie");
        Ok(created)
    }

    async fn update(&self, id: &MovieId, body: &Value) -> Result<Movie> {
        let patch = self.schema.validate_partial(body)?;

        let updated = self
            .repository
            .update(id, &patch)
            .await?
            .ok_or_else(|| CatalogError::NotFound(id.clone()))?;
        debug!(id = %id, "updated movie");
        Ok(updated)
    }

    async fn delete(&self, id: &MovieId) -> Result<()> {
        if !self.repository.remove(id).await? {
            return Err(CatalogError::NotFound(id.clone()));
        }
        debug!(id = %id, "deleted movie");
        Ok(())
    }
}
