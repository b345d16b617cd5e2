//! Movie catalog service implementation.
//!
//! This crate wires the schema validator, a movie store and an id
//! generator into the resource operations. Core types are re-exported
//! from `marquee_core`.

pub mod service;

pub use marquee_core::{Catalog, CatalogError};
pub use service::CatalogService;
