pub mod error;
pub mod memory;
pub mod seed;

pub use error::SeedError;
pub use marquee_core::{ReadRepository, Repository, StorageError};
pub use memory::InMemoryRepository;
