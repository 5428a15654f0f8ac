// ABOUTME: Core types and constants for the Dpapa fitness coaching client
// ABOUTME: Foundation crate with the profile model, error handling, and constants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Dpapa Core
//!
//! Foundation crate providing the shared types used by the intake aggregator,
//! the physiology estimator, and the application shell. It is designed to
//! change infrequently so the other workspace members compile incrementally.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError`, `ErrorCode`, and storage errors
//! - **constants**: Energy densities, storage keys, and other fixed values
//! - **models**: `Profile`, enums, nutrition targets, workout templates, progress series

/// Unified error handling system with standard error codes
pub mod errors;

/// Application constants organized by domain
pub mod constants;

/// Core data models (Profile, NutritionTargets, WorkoutTemplate, ProgressSeries)
pub mod models;
