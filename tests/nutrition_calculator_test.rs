// ABOUTME: Algorithm tests for the physiology estimator
// ABOUTME: BMI, Mifflin-St Jeor BMR, TDEE, macro targets, and degrade-never-fail behavior
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
//! Physiology estimator tests
//!
//! Covers the worked reference values, every missing-input combination for
//! BMR, default enum fallbacks, and the carb clamp at zero calories.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic, clippy::float_cmp)]
#![allow(missing_docs)]

use dpapa_coach::dpapa_core::models::{ActivityLevel, Gender, Goal, MacroTargets, Profile};
use dpapa_coach::intelligence::{
    compute_bmi, compute_bmr, compute_macro_targets, compute_tdee, estimate_nutrition_targets,
    NutritionConfig, ProteinBasis,
};

mod common;

// ============================================================================
// BMI
// ============================================================================

#[test]
fn test_bmi_reference_values() {
    assert_eq!(compute_bmi(Some(175.0), Some(78.0)), Some(25.5));
    assert_eq!(compute_bmi(Some(165.0), Some(60.0)), Some(22.0));
    assert_eq!(compute_bmi(Some(200.0), Some(100.0)), Some(25.0));
}

#[test]
fn test_bmi_matches_formula_to_one_decimal() {
    for (height, weight) in [(150.0, 45.0), (182.5, 91.3), (190.0, 120.0), (160.0, 52.4)] {
        let expected = (weight / ((height / 100.0) * (height / 100.0)) * 10.0_f64).round() / 10.0;
        assert_eq!(compute_bmi(Some(height), Some(weight)), Some(expected));
    }
}

#[test]
fn test_bmi_unknown_for_unusable_inputs() {
    assert_eq!(compute_bmi(Some(0.0), Some(78.0)), None);
    assert_eq!(compute_bmi(Some(175.0), None), None);
    assert_eq!(compute_bmi(None, Some(78.0)), None);
    assert_eq!(compute_bmi(Some(-175.0), Some(78.0)), None);
    assert_eq!(compute_bmi(Some(f64::NAN), Some(78.0)), None);
    assert_eq!(compute_bmi(Some(175.0), Some(f64::INFINITY)), None);
}

// ============================================================================
// BMR - Mifflin-St Jeor
// ============================================================================

#[test]
fn test_bmr_male_reference() {
    let config = NutritionConfig::default();
    let bmr = compute_bmr(Some(Gender::Male), Some(78.0), Some(175.0), Some(30), &config.bmr);
    // 780 + 1093.75 - 150 + 5 = 1728.75
    assert_eq!(bmr, Some(1729));
}

#[test]
fn test_bmr_female_reference() {
    let config = NutritionConfig::default();
    let bmr = compute_bmr(Some(Gender::Female), Some(60.0), Some(165.0), Some(25), &config.bmr);
    // 600 + 1031.25 - 125 - 161 = 1345.25
    assert_eq!(bmr, Some(1345));
}

#[test]
fn test_bmr_missing_gender_uses_male_equation() {
    let config = NutritionConfig::default();
    let bmr = compute_bmr(None, Some(78.0), Some(175.0), Some(30), &config.bmr);
    assert_eq!(bmr, Some(1729));
}

#[test]
fn test_bmr_unknown_for_every_missing_combination() {
    let config = NutritionConfig::default();
    let weights = [Some(78.0), None];
    let heights = [Some(175.0), None];
    let ages = [Some(30), None];
    let genders = [Some(Gender::Male), Some(Gender::Female), None];

    for weight in weights {
        for height in heights {
            for age in ages {
                if weight.is_some() && height.is_some() && age.is_some() {
                    continue;
                }
                for gender in genders {
                    assert_eq!(
                        compute_bmr(gender, weight, height, age, &config.bmr),
                        None,
                        "weight={weight:?} height={height:?} age={age:?} gender={gender:?}"
                    );
                }
            }
        }
    }
}

#[test]
fn test_bmr_zero_age_is_not_computable() {
    let config = NutritionConfig::default();
    assert_eq!(
        compute_bmr(Some(Gender::Male), Some(78.0), Some(175.0), Some(0), &config.bmr),
        None
    );
}

#[test]
fn test_bmr_rejects_zero_and_negative_measurements() {
    let config = NutritionConfig::default();
    assert_eq!(
        compute_bmr(Some(Gender::Male), Some(0.0), Some(175.0), Some(30), &config.bmr),
        None
    );
    assert_eq!(
        compute_bmr(Some(Gender::Male), Some(78.0), Some(-1.0), Some(30), &config.bmr),
        None
    );
}

#[test]
fn test_bmr_non_positive_result_is_unknown() {
    let config = NutritionConfig::default();
    // 10 + 6.25 - 600 - 161 < 0
    assert_eq!(
        compute_bmr(Some(Gender::Female), Some(1.0), Some(1.0), Some(120), &config.bmr),
        None
    );
}

// ============================================================================
// TDEE
// ============================================================================

#[test]
fn test_tdee_reference() {
    let config = NutritionConfig::default();
    assert_eq!(
        compute_tdee(Some(1729), Some(ActivityLevel::Moderate), &config.activity_factors),
        Some(2680)
    );
}

#[test]
fn test_tdee_activity_levels() {
    let config = NutritionConfig::default();
    let factors = &config.activity_factors;
    assert_eq!(compute_tdee(Some(1729), Some(ActivityLevel::Low), factors), Some(2075));
    assert_eq!(compute_tdee(Some(1729), Some(ActivityLevel::High), factors), Some(3112));
    // Missing activity level behaves as moderate
    assert_eq!(compute_tdee(Some(1729), None, factors), Some(2680));
}

#[test]
fn test_tdee_unknown_bmr_stays_unknown() {
    let config = NutritionConfig::default();
    assert_eq!(
        compute_tdee(None, Some(ActivityLevel::High), &config.activity_factors),
        None
    );
}

// ============================================================================
// MACRO TARGETS
// ============================================================================

#[test]
fn test_macros_fat_loss_reference() {
    let config = NutritionConfig::default();
    let macros = compute_macro_targets(
        Some(Goal::FatLoss),
        2680,
        &config.goal_factors,
        &config.macronutrients,
    );
    // 2144 kcal; protein 80 kg x 2.0; fat 2144 x 0.25 / 9; carbs (2144 - 640 - 540) / 4
    assert_eq!(
        macros,
        MacroTargets {
            calorie_target: 2144,
            protein_g: 160,
            fat_g: 60,
            carbs_g: 241,
        }
    );
}

#[test]
fn test_macros_carbs_round_half_grams_up() {
    let config = NutritionConfig::default();
    let macros = compute_macro_targets(
        Some(Goal::FatLoss),
        2004,
        &config.goal_factors,
        &config.macronutrients,
    );
    // 1603 kcal; fat 1603 x 0.25 / 9 = 44.53 -> 45; carbs (1603 - 640 - 405) / 4 = 139.5
    assert_eq!(
        macros,
        MacroTargets {
            calorie_target: 1603,
            protein_g: 160,
            fat_g: 45,
            carbs_g: 140,
        }
    );
}

#[test]
fn test_macros_goal_multipliers() {
    let config = NutritionConfig::default();
    let calories = |goal| {
        compute_macro_targets(Some(goal), 2680, &config.goal_factors, &config.macronutrients)
            .calorie_target
    };
    assert_eq!(calories(Goal::FatLoss), 2144);
    assert_eq!(calories(Goal::MuscleGain), 2948);
    assert_eq!(calories(Goal::Recomp), 2680);
    assert_eq!(calories(Goal::Performance), 2814);
}

#[test]
fn test_macros_performance_split() {
    let config = NutritionConfig::default();
    let macros = compute_macro_targets(
        Some(Goal::Performance),
        2680,
        &config.goal_factors,
        &config.macronutrients,
    );
    assert_eq!(macros.fat_g, 78);
    assert_eq!(macros.carbs_g, 368);
}

#[test]
fn test_macros_missing_goal_defaults_to_fat_loss() {
    let config = NutritionConfig::default();
    let missing = compute_macro_targets(None, 2680, &config.goal_factors, &config.macronutrients);
    let fat_loss = compute_macro_targets(
        Some(Goal::FatLoss),
        2680,
        &config.goal_factors,
        &config.macronutrients,
    );
    assert_eq!(missing, fat_loss);
}

#[test]
fn test_macros_protein_ignores_profile_weight_by_default() {
    let config = NutritionConfig::default();
    let light = Profile {
        weight_kg: Some(55.0),
        ..common::reference_male_profile()
    };
    let targets = estimate_nutrition_targets(&light, &config);
    assert_eq!(targets.macros.protein_g, 160);
}

#[test]
fn test_macros_protein_from_profile_weight_when_configured() {
    let mut config = NutritionConfig::default();
    config.macronutrients.protein_basis = ProteinBasis::ProfileWeight;
    let targets = estimate_nutrition_targets(&common::reference_female_profile(), &config);
    assert_eq!(targets.macros.protein_g, 120);
}

#[test]
fn test_macros_carbs_never_negative() {
    let config = NutritionConfig::default();
    for tdee in [0, 100, 500, 900] {
        let macros =
            compute_macro_targets(Some(Goal::FatLoss), tdee, &config.goal_factors, &config.macronutrients);
        let carb_kcal = f64::from(macros.calorie_target)
            - f64::from(macros.protein_g) * 4.0
            - f64::from(macros.fat_g) * 9.0;
        if carb_kcal < 0.0 {
            assert_eq!(macros.carbs_g, 0, "tdee={tdee}");
        }
    }
}

// ============================================================================
// WHOLE-PROFILE ESTIMATION
// ============================================================================

#[test]
fn test_estimate_reference_profile() {
    common::init_test_logging();
    let targets =
        estimate_nutrition_targets(&common::reference_male_profile(), &NutritionConfig::default());
    assert_eq!(targets.bmi, Some(25.5));
    assert_eq!(targets.bmr, Some(1729));
    assert_eq!(targets.tdee, Some(2680));
    assert_eq!(targets.macros.calorie_target, 2144);
    assert_eq!(targets.bmi_text(), "25.5");
}

#[test]
fn test_estimate_empty_profile_degrades() {
    common::init_test_logging();
    let targets = estimate_nutrition_targets(&Profile::default(), &NutritionConfig::default());
    assert_eq!(targets.bmi, None);
    assert_eq!(targets.bmr, None);
    assert_eq!(targets.tdee, None);
    assert_eq!(targets.bmr_or_zero(), 0);
    assert_eq!(targets.tdee_or_zero(), 0);
    assert_eq!(targets.bmi_text(), "-");
    assert_eq!(
        targets.macros,
        MacroTargets {
            calorie_target: 0,
            protein_g: 160,
            fat_g: 0,
            carbs_g: 0,
        }
    );
}

#[test]
fn test_estimate_does_not_mutate_profile() {
    let profile = common::reference_male_profile();
    let before = profile.clone();
    let _ = estimate_nutrition_targets(&profile, &NutritionConfig::default());
    assert_eq!(profile, before);
}
