// ABOUTME: Estimator configuration container with loading, env overrides, and validation
// ABOUTME: Provides a lazily loaded process-global instance that falls back to defaults
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Nutrition Estimator Configuration
//!
//! Configuration is loaded in three steps: compiled-in defaults, then
//! `DPAPA_NUTRITION_*` environment overrides, then validation. Estimator
//! functions take the sections by reference, so tests can pass a hand-built
//! configuration instead of the global one.

pub mod error;
pub mod nutrition;

pub use error::ConfigError;
pub use nutrition::{
    ActivityFactorsConfig, BmrConfig, GoalFactorsConfig, MacronutrientConfig, ProteinBasis,
};

use serde::{Deserialize, Serialize};
use std::env;
use std::str::FromStr;
use std::sync::OnceLock;
use tracing::warn;

/// Global configuration singleton
static NUTRITION_CONFIG: OnceLock<NutritionConfig> = OnceLock::new();

/// Estimator configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NutritionConfig {
    /// Mifflin-St Jeor coefficients
    pub bmr: BmrConfig,
    /// Activity multipliers for TDEE
    pub activity_factors: ActivityFactorsConfig,
    /// Goal multipliers for the calorie target
    pub goal_factors: GoalFactorsConfig,
    /// Macro split settings
    pub macronutrients: MacronutrientConfig,
}

impl NutritionConfig {
    /// Get the global configuration instance
    pub fn global() -> &'static Self {
        NUTRITION_CONFIG.get_or_init(|| {
            Self::load().unwrap_or_else(|e| {
                warn!("Failed to load nutrition config: {e}, using defaults");
                Self::default()
            })
        })
    }

    /// Load configuration from defaults and environment overrides
    ///
    /// # Errors
    ///
    /// Returns an error if environment variables contain invalid values or validation fails
    pub fn load() -> Result<Self, ConfigError> {
        let config = Self::default().apply_env_overrides()?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns an error if any multiplier, percentage, or weight is out of range
    pub fn validate(&self) -> Result<(), ConfigError> {
        let factors = [
            self.activity_factors.low,
            self.activity_factors.moderate,
            self.activity_factors.high,
        ];
        if !factors.iter().all(|f| f.is_finite() && *f > 0.0) {
            return Err(ConfigError::ValueOutOfRange(
                "Activity factors must be positive",
            ));
        }

        let goals = [
            self.goal_factors.fat_loss,
            self.goal_factors.muscle_gain,
            self.goal_factors.recomp,
            self.goal_factors.performance,
        ];
        if !goals.iter().all(|f| f.is_finite() && *f > 0.0) {
            return Err(ConfigError::ValueOutOfRange("Goal factors must be positive"));
        }

        let macros = &self.macronutrients;
        if !(macros.protein_g_per_kg.is_finite() && macros.protein_g_per_kg > 0.0) {
            return Err(ConfigError::ValueOutOfRange(
                "Protein factor must be positive",
            ));
        }
        if !(macros.reference_body_weight_kg.is_finite() && macros.reference_body_weight_kg > 0.0)
        {
            return Err(ConfigError::ValueOutOfRange(
                "Reference body weight must be positive",
            ));
        }
        if !(macros.fat_percent_of_calories > 0.0 && macros.fat_percent_of_calories < 100.0) {
            return Err(ConfigError::InvalidRange(
                "Fat percentage must be between 0 and 100",
            ));
        }

        Ok(())
    }

    /// Helper function to parse and apply an environment variable override
    fn apply_env_var<T: FromStr>(env_var_name: &str, target: &mut T) -> Result<(), ConfigError> {
        match env::var(env_var_name) {
            Ok(val) => {
                *target = val
                    .trim()
                    .parse()
                    .map_err(|_| ConfigError::Parse(format!("Invalid {env_var_name}")))?;
                Ok(())
            }
            Err(env::VarError::NotPresent) => Ok(()),
            Err(e) => Err(e.into()),
        }
    }

    /// Apply environment variable overrides
    fn apply_env_overrides(mut self) -> Result<Self, ConfigError> {
        // Activity multipliers
        Self::apply_env_var(
            "DPAPA_NUTRITION_ACTIVITY_LOW",
            &mut self.activity_factors.low,
        )?;
        Self::apply_env_var(
            "DPAPA_NUTRITION_ACTIVITY_MODERATE",
            &mut self.activity_factors.moderate,
        )?;
        Self::apply_env_var(
            "DPAPA_NUTRITION_ACTIVITY_HIGH",
            &mut self.activity_factors.high,
        )?;

        // Goal multipliers
        Self::apply_env_var(
            "DPAPA_NUTRITION_GOAL_FAT_LOSS",
            &mut self.goal_factors.fat_loss,
        )?;
        Self::apply_env_var(
            "DPAPA_NUTRITION_GOAL_MUSCLE_GAIN",
            &mut self.goal_factors.muscle_gain,
        )?;
        Self::apply_env_var(
            "DPAPA_NUTRITION_GOAL_RECOMP",
            &mut self.goal_factors.recomp,
        )?;
        Self::apply_env_var(
            "DPAPA_NUTRITION_GOAL_PERFORMANCE",
            &mut self.goal_factors.performance,
        )?;

        // Macro split
        Self::apply_env_var(
            "DPAPA_NUTRITION_PROTEIN_G_PER_KG",
            &mut self.macronutrients.protein_g_per_kg,
        )?;
        Self::apply_env_var(
            "DPAPA_NUTRITION_REFERENCE_WEIGHT_KG",
            &mut self.macronutrients.reference_body_weight_kg,
        )?;
        Self::apply_env_var(
            "DPAPA_NUTRITION_FAT_PERCENT",
            &mut self.macronutrients.fat_percent_of_calories,
        )?;
        Self::apply_env_var(
            "DPAPA_NUTRITION_PROTEIN_BASIS",
            &mut self.macronutrients.protein_basis,
        )?;

        Ok(self)
    }
}
