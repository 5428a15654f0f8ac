// ABOUTME: Core data models for the coaching client
// ABOUTME: Re-exports profile, nutrition, workout, and progress types
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Aggregated intake record and its enumerations
pub mod profile;

/// Derived nutrition targets
pub mod nutrition;

/// Workout templates (days and exercise prescriptions)
pub mod workout;

/// Dated body-weight progress series
pub mod progress;

pub use nutrition::{format_bmi, MacroTargets, NutritionTargets};
pub use profile::{ActivityLevel, Gender, Goal, Profile};
pub use progress::{ProgressPoint, ProgressSeries};
pub use workout::{ExerciseSet, WorkoutDay, WorkoutTemplate};
