use marquee_core::{MovieId, ValidationError};
use thiserror::Error;

/// Errors raised while loading the seed dataset.
#[derive(Debug, Error)]
pub enum SeedError {
    #[error("failed to read seed file: {0}")]
    Io(#[from] std::io::Error),
    #[error("seed dataset is not a JSON array of objects: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("seed entry #{index} has no string id")]
    MissingId { index: usize },
    #[error("seed entry #{index} is invalid: {source}")]
    Invalid {
        index: usize,
        #[source]
        source: ValidationError,
    },
    #[error("seed dataset contains duplicate id: {0}")]
    DuplicateId(MovieId),
}
