//! Persistence of the training tree and the user profile.
//!
//! Storage is a plain async key-value store of strings ([`KeyValueStore`]).
//! [`TrainingRepository`] serializes whole records to JSON under two fixed
//! keys and always overwrites what was there before.
//!
//! - [`FileStore`]: one file per key below a data directory
//! - [`MemoryStore`]: shared in-process map, for tests and throwaway sessions

pub mod file;
pub mod memory;
pub mod repository;

use std::future::Future;
use thiserror::Error;

pub use file::FileStore;
pub use memory::MemoryStore;
pub use repository::{LoadSource, LoadedDays, TrainingRepository};

/// Key holding the JSON array of training days.
pub const TRAINING_DAYS_KEY: &str = "trainingDaysData";

/// Key holding the JSON user profile object.
pub const USER_PROFILE_KEY: &str = "userProfileData";

/// Errors that can occur while reading or writing persisted records
#[derive(Error, Debug)]
pub enum StorageError {
    #[error("Failed to read '{key}': {source}")]
    Read {
        key: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write '{key}': {source}")]
    Write {
        key: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Stored value for '{key}' could not be parsed: {source}")]
    Parse {
        key: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Failed to serialize '{key}': {source}")]
    Serialize {
        key: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Async string key-value storage.
///
/// `get` returns `Ok(None)` for a key that was never written. `set`
/// replaces any previous value unconditionally.
pub trait KeyValueStore: Send + Sync {
    fn get(&self, key: &str) -> impl Future<Output = Result<Option<String>, StorageError>> + Send;

    fn set(
        &self,
        key: &str,
        value: String,
    ) -> impl Future<Output = Result<(), StorageError>> + Send;

    /// Removing a missing key is not an error.
    fn remove(&self, key: &str) -> impl Future<Output = Result<(), StorageError>> + Send;
}
