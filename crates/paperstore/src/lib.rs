//! Persistence for processed paper records.
//!
//! The results file is a flat JSON list appended across runs. Reads are
//! forgiving (a missing or corrupt file starts fresh); writes are not.

mod store;

pub use store::{InMemoryStore, JsonFileStore, PaperStore};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    Ser(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, StoreError>;
