//! Key-value persistence boundary.
//!
//! The core persists everything as string blobs under four well-known keys,
//! the same keys and JSON formats the original web client used, so data
//! migrated from it loads unchanged. Values are opaque to the store;
//! (de)serialization happens in the aggregate.

mod json_file;
mod memory;

pub use json_file::JsonFileStore;
pub use memory::MemoryStore;

use std::path::PathBuf;

use crate::error::StorageError;

/// Settings blob (JSON `Settings`).
pub const SETTINGS_KEY: &str = "ht_settings";
/// Task-list blob (JSON array of `Task`).
pub const TASKS_KEY: &str = "ht_tasks";
/// Daily-statistics blob (JSON array of `DailyStat`).
pub const STATS_KEY: &str = "ht_stats";
/// Theme preference (bare string, `"light"` / `"dark"`).
pub const THEME_KEY: &str = "ht_theme";

/// String key-value store the aggregate persists through.
///
/// `get` treats every failure as absence; the caller substitutes defaults.
/// `put` reports failures so the caller can log them, but nothing in the
/// core ever aborts on a failed write.
pub trait KvStore {
    fn get(&self, key: &str) -> Option<String>;
    fn put(&mut self, key: &str, value: &str) -> Result<(), StorageError>;
}

/// Returns `~/.config/calmoro[-dev]/` based on CALMORO_ENV.
///
/// Set CALMORO_ENV=dev to use the development data directory.
///
/// # Errors
/// Returns an error if creating the directory fails.
pub fn data_dir() -> Result<PathBuf, StorageError> {
    let base_dir = dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".config");

    let env = std::env::var("CALMORO_ENV").unwrap_or_else(|_| "production".to_string());

    let dir = if env == "dev" {
        base_dir.join("calmoro-dev")
    } else {
        base_dir.join("calmoro")
    };

    std::fs::create_dir_all(&dir).map_err(|source| StorageError::CreateDir {
        path: dir.clone(),
        source,
    })?;
    Ok(dir)
}
