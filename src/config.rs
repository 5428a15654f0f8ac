// ABOUTME: Application configuration loaded from environment variables
// ABOUTME: Storage backend, data directory, profile key, and logging settings
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::logging::LoggingConfig;
use dpapa_core::constants::storage::{DATA_DIR_NAME, PROFILE_KEY};
use dpapa_core::errors::{AppError, AppResult};
use std::env;
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;
use tracing::{info, warn};

/// Where the profile blob lives
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum StorageBackend {
    /// Lost when the process exits
    Memory,
    /// JSON files under the data directory
    #[default]
    File,
}

impl FromStr for StorageBackend {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "memory" => Ok(Self::Memory),
            "file" => Ok(Self::File),
            other => Err(AppError::config(format!(
                "Unknown storage backend '{other}' (expected memory or file)"
            ))),
        }
    }
}

impl fmt::Display for StorageBackend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Memory => "memory",
            Self::File => "file",
        })
    }
}

/// Application configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Profile storage backend
    pub storage_backend: StorageBackend,
    /// Directory for the file backend
    pub data_dir: PathBuf,
    /// Key the profile blob is stored under
    pub profile_key: String,
    /// Logging settings
    pub logging: LoggingConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            storage_backend: StorageBackend::default(),
            data_dir: default_data_dir(),
            profile_key: PROFILE_KEY.to_owned(),
            logging: LoggingConfig::default(),
        }
    }
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// - `DPAPA_STORAGE`: `memory` or `file` (default `file`)
    /// - `DPAPA_DATA_DIR`: data directory (default: platform data dir + `dpapa`)
    /// - `DPAPA_PROFILE_KEY`: storage key (default `dpapa_profile`)
    ///
    /// # Errors
    ///
    /// Returns an error if `DPAPA_STORAGE` names an unknown backend or the
    /// profile key is blank
    pub fn from_env() -> AppResult<Self> {
        let storage_backend = match env::var("DPAPA_STORAGE") {
            Ok(value) => value.parse()?,
            Err(_) => StorageBackend::default(),
        };

        let data_dir = env::var("DPAPA_DATA_DIR")
            .ok()
            .filter(|dir| !dir.trim().is_empty())
            .map_or_else(default_data_dir, PathBuf::from);

        let profile_key = env::var("DPAPA_PROFILE_KEY").unwrap_or_else(|_| PROFILE_KEY.to_owned());
        if profile_key.trim().is_empty() {
            return Err(AppError::config("DPAPA_PROFILE_KEY must not be empty"));
        }

        let config = Self {
            storage_backend,
            data_dir,
            profile_key,
            logging: LoggingConfig::from_env(),
        };
        info!(
            storage = %config.storage_backend,
            data_dir = %config.data_dir.display(),
            "Configuration loaded"
        );
        Ok(config)
    }

    /// Override the data directory
    #[must_use]
    pub fn with_data_dir(mut self, data_dir: impl Into<PathBuf>) -> Self {
        self.data_dir = data_dir.into();
        self
    }
}

/// Platform data directory joined with `dpapa`, or `./data` when unknown
fn default_data_dir() -> PathBuf {
    dirs::data_dir().map_or_else(
        || {
            warn!("No platform data directory; falling back to ./data");
            PathBuf::from("data")
        },
        |dir| dir.join(DATA_DIR_NAME),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_storage_backend_parsing() {
        assert_eq!(
            "Memory".parse::<StorageBackend>().unwrap(),
            StorageBackend::Memory
        );
        assert_eq!(" file ".parse::<StorageBackend>().unwrap(), StorageBackend::File);
        assert!("redis".parse::<StorageBackend>().is_err());
    }

    #[test]
    fn test_defaults() {
        let config = AppConfig::default().with_data_dir("/tmp/dpapa-test");
        assert_eq!(config.profile_key, "dpapa_profile");
        assert_eq!(config.storage_backend, StorageBackend::File);
        assert_eq!(config.data_dir, PathBuf::from("/tmp/dpapa-test"));
    }
}
