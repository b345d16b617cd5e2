//! Core types and traits for the Marquee movie catalog.
//!
//! This crate provides the movie domain model, the schema validator used on
//! every write, and the store/catalog seams shared by the storage, catalog
//! and gateway crates.

pub mod catalog;
pub mod error;
pub mod genre;
pub mod id;
pub mod movie;
pub mod repository;
pub mod schema;

pub use catalog::Catalog;
pub use error::{CatalogError, FieldIssue, IssueCode, StorageError, ValidationError};
pub use genre::Genre;
pub use id::MovieId;
pub use movie::{Movie, MoviePatch, NewMovie, DEFAULT_RATE};
pub use repository::{ReadRepository, Repository};
pub use schema::Schema;
