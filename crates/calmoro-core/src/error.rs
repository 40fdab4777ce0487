//! Error types for calmoro-core.
//!
//! The core itself has no fatal failure modes: invalid commands are rejected
//! by returning `false`, and corrupt persisted state degrades to defaults.
//! Typed errors exist only at the storage boundary.

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised by [`KvStore`](crate::storage::KvStore) implementations.
#[derive(Error, Debug)]
pub enum StorageError {
    /// The data directory could not be created
    #[error("Failed to create data directory {path}: {source}")]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Writing a value failed
    #[error("Failed to write key '{key}': {source}")]
    Write {
        key: String,
        #[source]
        source: std::io::Error,
    },
}
