// ABOUTME: File-backed profile store writing one JSON file per key
// ABOUTME: Writes go through a temporary file and a rename
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::{validate_key, ProfileStore};
use dpapa_core::constants::storage::BLOB_EXTENSION;
use dpapa_core::errors::{AppResult, StorageError};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::debug;

/// Profile store rooted at a data directory
#[derive(Debug, Clone)]
pub struct FileProfileStore {
    root: PathBuf,
}

impl FileProfileStore {
    /// Create a store rooted at `root`; the directory is created on first write
    #[must_use]
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Data directory
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Path of the blob for `key`
    #[must_use]
    pub fn blob_path(&self, key: &str) -> PathBuf {
        self.root.join(format!("{key}.{BLOB_EXTENSION}"))
    }
}

#[async_trait::async_trait]
impl ProfileStore for FileProfileStore {
    fn backend_name(&self) -> &'static str {
        "file"
    }

    async fn load_raw(&self, key: &str) -> AppResult<Option<String>> {
        validate_key(key)?;
        let path = self.blob_path(key);
        match fs::read_to_string(&path).await {
            Ok(blob) => Ok(Some(blob)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(StorageError::ReadFailed {
                key: key.to_owned(),
                details: e.to_string(),
            }
            .into()),
        }
    }

    async fn save_raw(&self, key: &str, blob: &str) -> AppResult<()> {
        validate_key(key)?;
        let write_failed = |e: std::io::Error| StorageError::WriteFailed {
            key: key.to_owned(),
            details: e.to_string(),
        };

        fs::create_dir_all(&self.root).await.map_err(write_failed)?;
        let path = self.blob_path(key);
        let tmp = path.with_extension(format!("{BLOB_EXTENSION}.tmp"));
        fs::write(&tmp, blob).await.map_err(write_failed)?;
        fs::rename(&tmp, &path).await.map_err(write_failed)?;
        debug!(path = %path.display(), bytes = blob.len(), "Profile blob written");
        Ok(())
    }

    async fn remove(&self, key: &str) -> AppResult<()> {
        validate_key(key)?;
        match fs::remove_file(self.blob_path(key)).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(StorageError::RemoveFailed {
                key: key.to_owned(),
                details: e.to_string(),
            }
            .into()),
        }
    }
}
