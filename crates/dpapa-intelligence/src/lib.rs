// ABOUTME: Physiology estimation engine for the coaching client
// ABOUTME: BMI, Mifflin-St Jeor BMR, TDEE, and goal-based macro targets
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Dpapa Intelligence
//!
//! Referentially transparent estimators over a `Profile` snapshot. None of
//! them fail: missing or unusable measurements degrade to "unknown" and
//! unknown enumerations fall back to their defaults, because every screen
//! must always have something to render.

/// Estimator configuration with defaults, environment overrides, and validation
pub mod config;

/// BMI, BMR, TDEE, and macro target calculations
pub mod nutrition_calculator;

pub use config::{
    ActivityFactorsConfig, BmrConfig, ConfigError, GoalFactorsConfig, MacronutrientConfig,
    NutritionConfig, ProteinBasis,
};
pub use nutrition_calculator::{
    compute_bmi, compute_bmr, compute_macro_targets, compute_macro_targets_for_weight,
    compute_tdee, estimate_nutrition_targets,
};
