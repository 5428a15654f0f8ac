// ABOUTME: Application-wide constants for energy math, storage, and service naming
// ABOUTME: Values shared by the estimator, the storage backends, and the CLI
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Energy density of macronutrients (kcal per gram)
pub mod energy {
    /// Protein: 4 kcal/g
    pub const KCAL_PER_GRAM_PROTEIN: f64 = 4.0;
    /// Carbohydrate: 4 kcal/g
    pub const KCAL_PER_GRAM_CARBS: f64 = 4.0;
    /// Fat: 9 kcal/g
    pub const KCAL_PER_GRAM_FAT: f64 = 9.0;
}

/// Persistence identifiers
pub mod storage {
    /// Fixed key the active profile blob is stored under
    pub const PROFILE_KEY: &str = "dpapa_profile";
    /// Directory name created under the platform data dir
    pub const DATA_DIR_NAME: &str = "dpapa";
    /// Extension used by the file-backed store
    pub const BLOB_EXTENSION: &str = "json";
}

/// Service identity used in structured logs
pub mod service_names {
    /// Name reported by the CLI and library logs
    pub const DPAPA_COACH: &str = "dpapa-coach";
}

/// Display placeholders
pub mod display {
    /// Shown in place of a missing measurement
    pub const MISSING_VALUE: &str = "-";
    /// Shown in place of a missing name
    pub const UNKNOWN_NAME: &str = "unknown";
}
