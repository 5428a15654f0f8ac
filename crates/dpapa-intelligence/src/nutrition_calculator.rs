// ABOUTME: Physiology estimation: BMI, Mifflin-St Jeor BMR, TDEE, and macro targets
// ABOUTME: Degrade-never-fail computations over optional profile measurements
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Nutrition Calculator Module
//!
//! Every function here is total. Absent, zero, negative, or non-finite
//! measurements yield `None` ("unknown") rather than an error, and absent
//! enumerations fall back to their defaults (`male`, `moderate`,
//! `fat_loss`). No function divides by zero or hands back `NaN`.
//!
//! # Scientific References
//!
//! - Mifflin, M.D., et al. (1990). A new predictive equation for resting energy expenditure.
//!   *American Journal of Clinical Nutrition*, 51(2), 241-247.
//!   <https://doi.org/10.1093/ajcn/51.2.241>

use crate::config::{
    ActivityFactorsConfig, BmrConfig, GoalFactorsConfig, MacronutrientConfig, NutritionConfig,
    ProteinBasis,
};
use dpapa_core::constants::energy::{
    KCAL_PER_GRAM_CARBS, KCAL_PER_GRAM_FAT, KCAL_PER_GRAM_PROTEIN,
};
use dpapa_core::models::{ActivityLevel, Gender, Goal, MacroTargets, NutritionTargets, Profile};
use tracing::debug;

/// Keep a measurement only if it is finite and strictly positive
fn usable(value: Option<f64>) -> Option<f64> {
    value.filter(|v| v.is_finite() && *v > 0.0)
}

/// Round a kcal or gram quantity to a non-negative integer
///
/// `as` saturates, so negative values become 0 and `NaN` becomes 0.
fn round_non_negative(value: f64) -> u32 {
    value.round().max(0.0) as u32
}

/// Calculate Body Mass Index
///
/// Formula: BMI = `weight_kg` / (`height_cm` / 100)², rounded to one decimal
///
/// Returns `None` when either input is absent, zero, negative, or non-finite.
#[must_use]
pub fn compute_bmi(height_cm: Option<f64>, weight_kg: Option<f64>) -> Option<f64> {
    let height_m = usable(height_cm)? / 100.0;
    let weight_kg = usable(weight_kg)?;
    let bmi = weight_kg / (height_m * height_m);
    bmi.is_finite().then(|| (bmi * 10.0).round() / 10.0)
}

/// Calculate Basal Metabolic Rate using Mifflin-St Jeor equation (1990)
///
/// Formula: BMR = (10 x `weight_kg`) + (6.25 x `height_cm`) - (5 x age) + `gender_offset`
/// - Men: +5
/// - Women: -161
///
/// Rounded to the nearest kcal. Returns `None` when weight, height, or age is
/// absent or zero, or when the equation does not produce a positive value.
/// A missing gender is treated as male.
///
/// # Reference
/// Mifflin et al. (1990) DOI: 10.1093/ajcn/51.2.241
#[must_use]
pub fn compute_bmr(
    gender: Option<Gender>,
    weight_kg: Option<f64>,
    height_cm: Option<f64>,
    age: Option<u32>,
    config: &BmrConfig,
) -> Option<u32> {
    let (Some(weight_kg), Some(height_cm), Some(age)) =
        (usable(weight_kg), usable(height_cm), age.filter(|a| *a > 0))
    else {
        debug!("BMR not computable: weight, height, or age missing");
        return None;
    };

    let gender_constant = match gender.unwrap_or_default() {
        Gender::Male => config.msj_male_constant,
        Gender::Female => config.msj_female_constant,
    };

    let bmr = config.msj_weight_coef.mul_add(
        weight_kg,
        config
            .msj_height_coef
            .mul_add(height_cm, config.msj_age_coef * f64::from(age)),
    ) + gender_constant;

    let rounded = bmr.round();
    (rounded.is_finite() && rounded > 0.0).then_some(rounded as u32)
}

/// Calculate Total Daily Energy Expenditure
///
/// Formula: TDEE = BMR x Activity Factor, rounded to the nearest kcal
///
/// Activity factors: low 1.20, moderate 1.55, high 1.80. A missing activity
/// level is treated as moderate. Unknown BMR gives unknown TDEE.
#[must_use]
pub fn compute_tdee(
    bmr: Option<u32>,
    activity_level: Option<ActivityLevel>,
    config: &ActivityFactorsConfig,
) -> Option<u32> {
    let factor = config.factor_for(activity_level.unwrap_or_default());
    bmr.map(|bmr| round_non_negative(f64::from(bmr) * factor))
}

/// Calculate calorie target and macro split using the reference body weight
///
/// 1. Calorie target = TDEE x goal factor (fat loss 0.80, muscle gain 1.10,
///    recomp 1.00, performance 1.05), rounded.
/// 2. Protein = `protein_g_per_kg` x `reference_body_weight_kg`, rounded.
/// 3. Fat = calorie target x fat share / 9 kcal/g, rounded.
/// 4. Carbs = (calorie target - protein x 4 - fat x 9) / 4, rounded, never below zero.
///
/// Carbs round to nearest rather than flooring, as the nutrition screen has
/// always shown them: 139.5 g is reported as 140 g, not 139 g.
///
/// A missing goal is treated as fat loss.
#[must_use]
pub fn compute_macro_targets(
    goal: Option<Goal>,
    tdee: u32,
    goal_factors: &GoalFactorsConfig,
    macros: &MacronutrientConfig,
) -> MacroTargets {
    compute_macro_targets_for_weight(
        goal,
        tdee,
        macros.reference_body_weight_kg,
        goal_factors,
        macros,
    )
}

/// Calculate calorie target and macro split for an explicit body weight
///
/// Same steps as [`compute_macro_targets`], with protein derived from
/// `body_weight_kg`. An unusable weight falls back to the reference weight.
#[must_use]
pub fn compute_macro_targets_for_weight(
    goal: Option<Goal>,
    tdee: u32,
    body_weight_kg: f64,
    goal_factors: &GoalFactorsConfig,
    macros: &MacronutrientConfig,
) -> MacroTargets {
    let goal_factor = goal_factors.factor_for(goal.unwrap_or_default());
    let calorie_target = round_non_negative(f64::from(tdee) * goal_factor);
    let calories = f64::from(calorie_target);

    let body_weight_kg = usable(Some(body_weight_kg)).unwrap_or(macros.reference_body_weight_kg);
    let protein_g = round_non_negative(body_weight_kg * macros.protein_g_per_kg);

    let fat_kcal = calories * macros.fat_percent_of_calories / 100.0;
    let fat_g = round_non_negative(fat_kcal / KCAL_PER_GRAM_FAT);

    let remaining_kcal = f64::from(fat_g).mul_add(
        -KCAL_PER_GRAM_FAT,
        f64::from(protein_g).mul_add(-KCAL_PER_GRAM_PROTEIN, calories),
    );
    let carbs_g = round_non_negative(remaining_kcal / KCAL_PER_GRAM_CARBS);

    MacroTargets {
        calorie_target,
        protein_g,
        fat_g,
        carbs_g,
    }
}

/// Derive every nutrition target from a profile snapshot
///
/// Unknown TDEE feeds zero calories into the macro split, matching what the
/// nutrition screen has always shown for an incomplete profile.
#[must_use]
pub fn estimate_nutrition_targets(profile: &Profile, config: &NutritionConfig) -> NutritionTargets {
    let bmi = compute_bmi(profile.height_cm, profile.weight_kg);
    let bmr = compute_bmr(
        profile.gender,
        profile.weight_kg,
        profile.height_cm,
        profile.age,
        &config.bmr,
    );
    let tdee = compute_tdee(bmr, profile.activity_level, &config.activity_factors);

    let macros = match config.macronutrients.protein_basis {
        ProteinBasis::ReferenceWeight => compute_macro_targets(
            profile.goal,
            tdee.unwrap_or(0),
            &config.goal_factors,
            &config.macronutrients,
        ),
        ProteinBasis::ProfileWeight => compute_macro_targets_for_weight(
            profile.goal,
            tdee.unwrap_or(0),
            profile
                .weight_kg
                .unwrap_or(config.macronutrients.reference_body_weight_kg),
            &config.goal_factors,
            &config.macronutrients,
        ),
    };

    NutritionTargets {
        bmi,
        bmr,
        tdee,
        macros,
    }
}
