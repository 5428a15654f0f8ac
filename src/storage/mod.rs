// ABOUTME: Persistence port for the profile blob with pluggable backends
// ABOUTME: Best-effort key/value storage of serialized profiles (memory, file)
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Backend selection from configuration
pub mod factory;
/// One JSON file per key under a data directory
pub mod file;
/// Process-local map, used by tests and ephemeral sessions
pub mod memory;

pub use factory::ProfileStorage;
pub use file::FileProfileStore;
pub use memory::InMemoryProfileStore;

use dpapa_core::errors::{AppResult, StorageError};

/// Key/value store holding one serialized profile per key
///
/// Implementations store opaque text. Decoding lives in the caller so a
/// corrupt blob is handled the same way whatever the backend.
#[async_trait::async_trait]
pub trait ProfileStore: Send + Sync {
    /// Short backend name for logs
    fn backend_name(&self) -> &'static str;

    /// Read the blob stored under `key`
    ///
    /// # Errors
    ///
    /// Returns an error if the backend cannot be read. A missing key is
    /// `Ok(None)`, not an error.
    async fn load_raw(&self, key: &str) -> AppResult<Option<String>>;

    /// Store `blob` under `key`, replacing any previous value
    ///
    /// # Errors
    ///
    /// Returns an error if the backend rejects the write
    async fn save_raw(&self, key: &str, blob: &str) -> AppResult<()>;

    /// Remove the blob under `key`; removing a missing key succeeds
    ///
    /// # Errors
    ///
    /// Returns an error if the backend rejects the removal
    async fn remove(&self, key: &str) -> AppResult<()>;
}

/// Reject keys that cannot map to a single blob name
///
/// # Errors
///
/// Returns `StorageError::InvalidKey` for empty keys, path separators, or
/// relative path components.
pub fn validate_key(key: &str) -> Result<(), StorageError> {
    let valid = !key.trim().is_empty()
        && !key.contains(['/', '\\'])
        && key != "."
        && key != "..";
    if valid {
        Ok(())
    } else {
        Err(StorageError::InvalidKey {
            key: key.to_owned(),
        })
    }
}
