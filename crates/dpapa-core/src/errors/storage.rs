// ABOUTME: Storage-specific error types for the profile persistence port
// ABOUTME: Provides structured errors that integrate with the main AppError system
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Storage Error Types
//!
//! Structured errors raised by profile store backends, with a conversion into
//! `AppError` so callers can propagate them with `?`.

use super::{AppError, ErrorCode};
use std::error::Error;
use std::fmt;

/// Errors specific to profile store backends
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StorageError {
    /// Key is not usable by the backend (empty, or contains a path separator)
    InvalidKey {
        /// The rejected key
        key: String,
    },
    /// Reading the blob failed
    ReadFailed {
        /// Key being read
        key: String,
        /// Details about the failure
        details: String,
    },
    /// Writing the blob failed
    WriteFailed {
        /// Key being written
        key: String,
        /// Details about the failure
        details: String,
    },
    /// Removing the blob failed
    RemoveFailed {
        /// Key being removed
        key: String,
        /// Details about the failure
        details: String,
    },
}

impl StorageError {
    /// Key the failed operation targeted
    #[must_use]
    pub fn key(&self) -> &str {
        match self {
            Self::InvalidKey { key }
            | Self::ReadFailed { key, .. }
            | Self::WriteFailed { key, .. }
            | Self::RemoveFailed { key, .. } => key,
        }
    }

    /// Error code for this storage error
    #[must_use]
    pub const fn error_code(&self) -> ErrorCode {
        match self {
            Self::InvalidKey { .. } => ErrorCode::InvalidInput,
            Self::ReadFailed { .. } | Self::WriteFailed { .. } | Self::RemoveFailed { .. } => {
                ErrorCode::StorageError
            }
        }
    }
}

impl fmt::Display for StorageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidKey { key } => write!(f, "Storage key '{key}' is not valid"),
            Self::ReadFailed { key, details } => {
                write!(f, "Failed to read '{key}': {details}")
            }
            Self::WriteFailed { key, details } => {
                write!(f, "Failed to write '{key}': {details}")
            }
            Self::RemoveFailed { key, details } => {
                write!(f, "Failed to remove '{key}': {details}")
            }
        }
    }
}

impl Error for StorageError {}

impl From<StorageError> for AppError {
    fn from(error: StorageError) -> Self {
        let code = error.error_code();
        Self::new(code, error.to_string()).with_source(error)
    }
}
