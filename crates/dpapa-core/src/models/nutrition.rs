// ABOUTME: Derived nutrition targets (BMI, BMR, TDEE, and macronutrient grams)
// ABOUTME: Recomputed from a profile on every read, never persisted
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::constants::display::MISSING_VALUE;
use serde::{Deserialize, Serialize};

/// Daily calorie target and its macronutrient split
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MacroTargets {
    /// TDEE scaled by the goal multiplier (kcal)
    pub calorie_target: u32,
    /// Protein (grams)
    pub protein_g: u32,
    /// Fat (grams)
    pub fat_g: u32,
    /// Carbohydrates (grams), never negative
    pub carbs_g: u32,
}

/// Everything the estimator derives from a profile
///
/// `None` means "unknown": a required measurement was missing or unusable.
/// Macro targets are always present; with an unknown TDEE they are computed
/// from zero calories so a caller always has something to show.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct NutritionTargets {
    /// Body mass index, one decimal
    pub bmi: Option<f64>,
    /// Basal metabolic rate (kcal/day)
    pub bmr: Option<u32>,
    /// Total daily energy expenditure (kcal/day)
    pub tdee: Option<u32>,
    /// Calorie target and macro split
    pub macros: MacroTargets,
}

impl NutritionTargets {
    /// BMI formatted to one decimal, or `-`
    #[must_use]
    pub fn bmi_text(&self) -> String {
        format_bmi(self.bmi)
    }

    /// BMR in kcal with the legacy `0` for unknown
    #[must_use]
    pub fn bmr_or_zero(&self) -> u32 {
        self.bmr.unwrap_or(0)
    }

    /// TDEE in kcal with the legacy `0` for unknown
    #[must_use]
    pub fn tdee_or_zero(&self) -> u32 {
        self.tdee.unwrap_or(0)
    }
}

/// Format a BMI value to one decimal place, or `-` when unknown
#[must_use]
pub fn format_bmi(bmi: Option<f64>) -> String {
    bmi.map_or_else(|| MISSING_VALUE.to_owned(), |value| format!("{value:.1}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bmi_text() {
        let targets = NutritionTargets {
            bmi: Some(25.5),
            ..NutritionTargets::default()
        };
        assert_eq!(targets.bmi_text(), "25.5");
        assert_eq!(NutritionTargets::default().bmi_text(), "-");
    }

    #[test]
    fn test_legacy_zero_accessors() {
        let targets = NutritionTargets::default();
        assert_eq!(targets.bmr_or_zero(), 0);
        assert_eq!(targets.tdee_or_zero(), 0);
    }
}
