//! Key-value persistence.
//!
//! One blob per key. [`FileKeyValueStore`] keeps each key in its own file
//! under a data directory; [`MemoryKeyValueStore`] is the in-process
//! equivalent for tests.

mod file;
mod memory;

pub use file::FileKeyValueStore;
pub use memory::MemoryKeyValueStore;

use std::path::PathBuf;

use thiserror::Error;

/// Errors from a key-value backend.
///
/// Callers in this crate log and swallow these; they never reach a
/// presentation layer.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Invalid storage key '{key}'")]
    InvalidKey { key: String },

    #[error("Failed to access '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Byte blobs addressed by a namespaced key.
pub trait KeyValueStore: Send + Sync {
    /// Read a key. A key that was never written is `Ok(None)`.
    fn get(&self, key: &str) -> Result<Option<Vec<u8>>, StorageError>;

    /// Replace the whole value stored under `key`.
    fn set(&self, key: &str, value: &[u8]) -> Result<(), StorageError>;

    /// Delete a key. Deleting a missing key succeeds.
    fn remove(&self, key: &str) -> Result<(), StorageError>;
}

/// Keys become file names, so keep them to a conservative alphabet.
pub fn validate_key(key: &str) -> Result<(), StorageError> {
    let valid = !key.is_empty()
        && !key.starts_with('.')
        && key
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '-' | '.'));
    if valid {
        Ok(())
    } else {
        Err(StorageError::InvalidKey {
            key: key.to_string(),
        })
    }
}
