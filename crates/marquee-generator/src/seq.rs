use crate::Generator;
use marquee_core::MovieId;
use std::sync::atomic::{AtomicU64, Ordering};

/// A movie id generator using a sequential counter.
///
/// This generator produces ids like "mv000000", "mv000001", etc. Ids are
/// unique within a single instance; the counter never goes backwards, so
/// ids of deleted movies are never handed out again.
#[derive(Debug)]
pub struct SeqGenerator {
    counter: AtomicU64,
    prefix: String,
}

impl SeqGenerator {
    /// Creates a new sequential generator with a custom prefix.
    pub fn with_prefix(prefix: impl Into<String>) -> Self {
        Self::with_offset(prefix, 0)
    }

    /// Creates a new sequential generator starting from a specific counter value.
    pub fn with_offset(prefix: impl Into<String>, offset: u64) -> Self {
        Self {
            counter: AtomicU64::new(offset),
            prefix: prefix.into(),
        }
    }
}

impl Generator for SeqGenerator {
    type Output = MovieId;

    fn generate(&self) -> Self::Output {
        let count = self.counter.fetch_add(1, Ordering::SeqCst);
        MovieId::new(format!("{}{:06}", self.prefix, count))
    }
}
