// ABOUTME: Dashboard summary derived from an onboarded profile
// ABOUTME: Display-ready strings with "-" for unknown values, plus nutrition targets
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use dpapa_core::constants::display::{MISSING_VALUE, UNKNOWN_NAME};
use dpapa_core::models::{ActivityLevel, Goal, NutritionTargets, Profile};
use dpapa_intelligence::{estimate_nutrition_targets, NutritionConfig};
use serde::Serialize;

/// What the dashboard shows for one profile
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardSummary {
    /// Name, or `unknown`
    pub display_name: String,
    /// Weight in kg, or `-`
    pub weight_text: String,
    /// Height in cm, or `-`
    pub height_text: String,
    /// Goal with the default applied
    pub goal: Goal,
    /// Activity level with the default applied
    pub activity_level: ActivityLevel,
    /// BMI to one decimal, or `-`
    pub bmi_text: String,
    /// Derived nutrition targets
    pub targets: NutritionTargets,
    /// Whether onboarding has been completed
    pub onboarded: bool,
}

impl DashboardSummary {
    /// Summarize a profile
    #[must_use]
    pub fn from_profile(profile: &Profile, config: &NutritionConfig) -> Self {
        let targets = estimate_nutrition_targets(profile, config);
        Self {
            display_name: profile
                .name
                .clone()
                .unwrap_or_else(|| UNKNOWN_NAME.to_owned()),
            weight_text: measurement_text(profile.weight_kg),
            height_text: measurement_text(profile.height_cm),
            goal: profile.effective_goal(),
            activity_level: profile.effective_activity_level(),
            bmi_text: targets.bmi_text(),
            targets,
            onboarded: profile.onboarded,
        }
    }
}

fn measurement_text(value: Option<f64>) -> String {
    value.map_or_else(|| MISSING_VALUE.to_owned(), |v| v.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_measurement_text() {
        assert_eq!(measurement_text(Some(78.0)), "78");
        assert_eq!(measurement_text(Some(175.5)), "175.5");
        assert_eq!(measurement_text(None), "-");
    }
}
