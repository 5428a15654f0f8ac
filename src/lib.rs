// ABOUTME: Main library entry point for the Dpapa coaching client core
// ABOUTME: Onboarding intake, physiology estimation, profile persistence, and dashboard data
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Dpapa Coach
//!
//! Client-side core of a fitness coaching app. A multi-step onboarding wizard
//! collects a profile; the profile drives BMI, BMR, TDEE, and macro targets
//! shown on the dashboard and nutrition screens.
//!
//! ## Architecture
//!
//! - **intake**: merges partial step updates into a draft profile and finalizes it
//! - **storage**: best-effort persistence of the profile blob (memory or file)
//! - **state**: current profile, onboarding routing, rename and reset
//! - **dashboard**: display-ready summary of a profile
//! - **config** / **logging**: environment-driven settings and tracing setup
//!
//! Estimation lives in `dpapa-intelligence`; shared models and errors live in
//! `dpapa-core`.
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use dpapa_coach::intake::{ProfileIntake, ProfileUpdate};
//! use dpapa_coach::intelligence::{estimate_nutrition_targets, NutritionConfig};
//!
//! let mut intake = ProfileIntake::new();
//! intake.update_profile_fields(&ProfileUpdate::basics("Sara", "30", "male", "moderate"));
//! intake.update_profile_fields(&ProfileUpdate::body_metrics("175", "78"));
//! let profile = intake.finalize_profile();
//!
//! let targets = estimate_nutrition_targets(&profile, &NutritionConfig::default());
//! println!("TDEE: {:?} kcal", targets.tdee);
//! ```

/// Application configuration from environment variables
pub mod config;

/// Dashboard summary
pub mod dashboard;

/// Onboarding intake aggregator
pub mod intake;

/// Structured logging setup
pub mod logging;

/// Application state and onboarding routing
pub mod state;

/// Profile persistence port and backends
pub mod storage;

/// Shared models, constants, and errors
pub use dpapa_core;

/// Physiology estimation and its configuration
pub use dpapa_intelligence as intelligence;

pub use dpapa_core::errors::{AppError, AppResult, ErrorCode};
pub use dpapa_core::models::Profile;
