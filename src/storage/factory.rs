// ABOUTME: Profile store factory selecting a backend from application config
// ABOUTME: Unified enum dispatching to the memory or file backend
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::{FileProfileStore, InMemoryProfileStore, ProfileStore};
use crate::config::{AppConfig, StorageBackend};
use dpapa_core::errors::AppResult;
use tracing::info;

/// Backend chosen at startup
#[derive(Debug, Clone)]
pub enum ProfileStorage {
    /// Process-local map
    Memory(InMemoryProfileStore),
    /// JSON files under a data directory
    File(FileProfileStore),
}

impl ProfileStorage {
    /// Build the backend named in `config`
    #[must_use]
    pub fn from_config(config: &AppConfig) -> Self {
        let storage = match config.storage_backend {
            StorageBackend::Memory => Self::Memory(InMemoryProfileStore::new()),
            StorageBackend::File => Self::File(FileProfileStore::new(&config.data_dir)),
        };
        info!(
            backend = storage.backend_name(),
            data_dir = %config.data_dir.display(),
            "Profile storage initialized"
        );
        storage
    }

    fn inner(&self) -> &dyn ProfileStore {
        match self {
            Self::Memory(store) => store,
            Self::File(store) => store,
        }
    }
}

#[async_trait::async_trait]
impl ProfileStore for ProfileStorage {
    fn backend_name(&self) -> &'static str {
        self.inner().backend_name()
    }

    async fn load_raw(&self, key: &str) -> AppResult<Option<String>> {
        self.inner().load_raw(key).await
    }

    async fn save_raw(&self, key: &str, blob: &str) -> AppResult<()> {
        self.inner().save_raw(key, blob).await
    }

    async fn remove(&self, key: &str) -> AppResult<()> {
        self.inner().remove(key).await
    }
}
