// ABOUTME: Nutrition estimator configuration sections with their defaults
// ABOUTME: BMR coefficients, activity and goal multipliers, and macro split settings
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Nutrition Estimator Configuration Sections
//!
//! # Scientific References
//!
//! - BMR: Mifflin et al. (1990) DOI: 10.1093/ajcn/51.2.241

use super::error::ConfigError;
use dpapa_core::models::{ActivityLevel, Goal};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// BMR (Basal Metabolic Rate) calculation configuration
///
/// Reference: Mifflin, M.D., et al. (1990). A new predictive equation for resting energy expenditure.
/// American Journal of Clinical Nutrition, 51(2), 241-247. DOI: 10.1093/ajcn/51.2.241
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BmrConfig {
    /// Mifflin-St Jeor weight coefficient (10.0)
    pub msj_weight_coef: f64,
    /// Mifflin-St Jeor height coefficient (6.25)
    pub msj_height_coef: f64,
    /// Mifflin-St Jeor age coefficient (-5.0)
    pub msj_age_coef: f64,
    /// Mifflin-St Jeor male constant (+5)
    pub msj_male_constant: f64,
    /// Mifflin-St Jeor female constant (-161)
    pub msj_female_constant: f64,
}

impl Default for BmrConfig {
    fn default() -> Self {
        Self {
            msj_weight_coef: 10.0,
            msj_height_coef: 6.25,
            msj_age_coef: -5.0,
            msj_male_constant: 5.0,
            msj_female_constant: -161.0,
        }
    }
}

/// Activity factor multipliers for TDEE calculation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActivityFactorsConfig {
    /// Low activity: 1.20
    pub low: f64,
    /// Moderate activity: 1.55
    pub moderate: f64,
    /// High activity: 1.80
    pub high: f64,
}

impl Default for ActivityFactorsConfig {
    fn default() -> Self {
        Self {
            low: 1.2,
            moderate: 1.55,
            high: 1.8,
        }
    }
}

impl ActivityFactorsConfig {
    /// Multiplier for an activity level
    #[must_use]
    pub const fn factor_for(&self, level: ActivityLevel) -> f64 {
        match level {
            ActivityLevel::Low => self.low,
            ActivityLevel::Moderate => self.moderate,
            ActivityLevel::High => self.high,
        }
    }
}

/// Goal-based calorie multipliers applied to TDEE
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GoalFactorsConfig {
    /// Fat loss: 0.80 (20% deficit)
    pub fat_loss: f64,
    /// Muscle gain: 1.10 (10% surplus)
    pub muscle_gain: f64,
    /// Recomposition: 1.00
    pub recomp: f64,
    /// Performance: 1.05
    pub performance: f64,
}

impl Default for GoalFactorsConfig {
    fn default() -> Self {
        Self {
            fat_loss: 0.8,
            muscle_gain: 1.1,
            recomp: 1.0,
            performance: 1.05,
        }
    }
}

impl GoalFactorsConfig {
    /// Multiplier for a goal
    #[must_use]
    pub const fn factor_for(&self, goal: Goal) -> f64 {
        match goal {
            Goal::FatLoss => self.fat_loss,
            Goal::MuscleGain => self.muscle_gain,
            Goal::Recomp => self.recomp,
            Goal::Performance => self.performance,
        }
    }
}

/// Body weight the protein target is derived from
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProteinBasis {
    /// Fixed `reference_body_weight_kg`, ignoring the profile
    #[default]
    ReferenceWeight,
    /// Profile weight when known, reference weight otherwise
    ProfileWeight,
}

impl FromStr for ProteinBasis {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "reference_weight" | "reference" => Ok(Self::ReferenceWeight),
            "profile_weight" | "profile" => Ok(Self::ProfileWeight),
            other => Err(ConfigError::Parse(format!(
                "unknown protein basis '{other}'"
            ))),
        }
    }
}

/// Macronutrient split configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MacronutrientConfig {
    /// Protein per kilogram of body weight: 2.0 g/kg
    pub protein_g_per_kg: f64,
    /// Body weight assumed for protein when the profile is not used: 80 kg
    pub reference_body_weight_kg: f64,
    /// Share of the calorie target allotted to fat: 25%
    pub fat_percent_of_calories: f64,
    /// Which body weight drives the protein target
    pub protein_basis: ProteinBasis,
}

impl Default for MacronutrientConfig {
    fn default() -> Self {
        Self {
            protein_g_per_kg: 2.0,
            reference_body_weight_kg: 80.0,
            fat_percent_of_calories: 25.0,
            protein_basis: ProteinBasis::ReferenceWeight,
        }
    }
}
