pub mod random;
pub mod seq;

use marquee_core::MovieId;

pub use crate::random::UuidGenerator;
pub use crate::seq::SeqGenerator;

/// Trait for assigning identifiers to newly created movies.
///
/// Implementations are pure generators that don't interact with storage.
pub trait Generator: Send + Sync + 'static {
    type Output: Into<MovieId>;
    /// Generates a value that can be converted into a unique movie id.
    ///
    /// The generated id should never repeat, including ids of deleted movies.
    fn generate(&self) -> Self::Output;
}
