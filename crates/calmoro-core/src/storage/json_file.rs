//! File-backed store: one file per key in the data directory.
//!
//! Keys double as file names (they are plain `ht_*` identifiers, never
//! paths). A missing or unreadable file is simply an absent key.

use std::fs;
use std::path::PathBuf;

use super::{data_dir, KvStore};
use crate::error::StorageError;

#[derive(Debug, Clone)]
pub struct JsonFileStore {
    dir: PathBuf,
}

impl JsonFileStore {
    /// Open the store in the default data directory, creating it if needed.
    pub fn open() -> Result<Self, StorageError> {
        Ok(Self { dir: data_dir()? })
    }

    /// Open the store in an explicit directory (tests, portable installs).
    pub fn open_at(dir: impl Into<PathBuf>) -> Result<Self, StorageError> {
        let dir = dir.into();
        fs::create_dir_all(&dir).map_err(|source| StorageError::CreateDir {
            path: dir.clone(),
            source,
        })?;
        Ok(Self { dir })
    }
}

impl KvStore for JsonFileStore {
    fn get(&self, key: &str) -> Option<String> {
        fs::read_to_string(self.dir.join(key)).ok()
    }

    fn put(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        fs::write(self.dir.join(key), value).map_err(|source| StorageError::Write {
            key: key.to_owned(),
            source,
        })
    }
}
