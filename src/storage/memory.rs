// ABOUTME: In-memory profile store backed by a shared map
// ABOUTME: Clones share state, contents vanish with the process
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::{validate_key, ProfileStore};
use dpapa_core::errors::AppResult;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

/// Process-local profile store
#[derive(Debug, Clone, Default)]
pub struct InMemoryProfileStore {
    blobs: Arc<RwLock<HashMap<String, String>>>,
}

impl InMemoryProfileStore {
    /// Create an empty store
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored blobs
    pub async fn len(&self) -> usize {
        self.blobs.read().await.len()
    }

    /// Whether nothing is stored
    pub async fn is_empty(&self) -> bool {
        self.blobs.read().await.is_empty()
    }
}

#[async_trait::async_trait]
impl ProfileStore for InMemoryProfileStore {
    fn backend_name(&self) -> &'static str {
        "memory"
    }

    async fn load_raw(&self, key: &str) -> AppResult<Option<String>> {
        validate_key(key)?;
        Ok(self.blobs.read().await.get(key).cloned())
    }

    async fn save_raw(&self, key: &str, blob: &str) -> AppResult<()> {
        validate_key(key)?;
        self.blobs
            .write()
            .await
            .insert(key.to_owned(), blob.to_owned());
        Ok(())
    }

    async fn remove(&self, key: &str) -> AppResult<()> {
        validate_key(key)?;
        self.blobs.write().await.remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_clones_share_blobs() {
        let store = InMemoryProfileStore::new();
        let other = store.clone();
        store.save_raw("k", "{}").await.unwrap();
        assert_eq!(other.load_raw("k").await.unwrap().as_deref(), Some("{}"));
        other.remove("k").await.unwrap();
        assert!(store.is_empty().await);
    }
}
