// ABOUTME: Shared test utilities and setup functions for integration tests
// ABOUTME: Quiet logging setup plus canned profiles and stores
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
#![allow(
    dead_code,
    clippy::expect_used,
    clippy::missing_panics_doc,
    clippy::must_use_candidate,
    clippy::module_name_repetitions
)]
//! Shared test utilities for `dpapa_coach`

use dpapa_coach::dpapa_core::models::{ActivityLevel, Gender, Goal, Profile};
use dpapa_coach::storage::FileProfileStore;
use std::sync::Once;
use tempfile::TempDir;

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        // TEST_LOG selects the level; default keeps tests quiet
        let log_level = match std::env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => tracing::Level::TRACE,
            Ok("DEBUG") => tracing::Level::DEBUG,
            Ok("INFO") => tracing::Level::INFO,
            _ => tracing::Level::WARN,
        };

        let _ = tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .try_init();
    });
}

/// 30-year-old male, 175 cm, 78 kg, moderate activity, fat loss
pub fn reference_male_profile() -> Profile {
    Profile {
        name: Some("Omar".to_owned()),
        age: Some(30),
        gender: Some(Gender::Male),
        height_cm: Some(175.0),
        weight_kg: Some(78.0),
        goal: Some(Goal::FatLoss),
        activity_level: Some(ActivityLevel::Moderate),
        ..Profile::default()
    }
}

/// 25-year-old female, 165 cm, 60 kg, nothing else set
pub fn reference_female_profile() -> Profile {
    Profile {
        age: Some(25),
        gender: Some(Gender::Female),
        height_cm: Some(165.0),
        weight_kg: Some(60.0),
        ..Profile::default()
    }
}

/// File store in a fresh temporary directory; keep the `TempDir` alive
pub fn temp_file_store() -> (TempDir, FileProfileStore) {
    let dir = tempfile::tempdir().expect("create temp dir");
    let store = FileProfileStore::new(dir.path());
    (dir, store)
}
