// ABOUTME: Tests for the onboarding intake aggregator
// ABOUTME: Merge semantics, idempotence, parse-on-input, and permissive finalize
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic, clippy::float_cmp)]
#![allow(missing_docs)]

use chrono::NaiveDate;
use dpapa_coach::dpapa_core::models::{ActivityLevel, Gender, Goal, Profile};
use dpapa_coach::intake::{FieldUpdate, OnboardingStep, ProfileIntake, ProfileUpdate};

mod common;

#[test]
fn test_same_update_twice_is_idempotent() {
    let update = ProfileUpdate::new().name("A");

    let mut once = ProfileIntake::new();
    once.update_profile_fields(&update);

    let mut twice = ProfileIntake::new();
    twice.update_profile_fields(&update);
    twice.update_profile_fields(&update);

    assert_eq!(once.draft(), twice.draft());
    assert_eq!(twice.draft().name.as_deref(), Some("A"));
}

#[test]
fn test_later_update_preserves_earlier_fields() {
    let mut intake = ProfileIntake::new();
    intake.update_profile_fields(&ProfileUpdate::new().age(30));
    let draft = intake.update_profile_fields(&ProfileUpdate::new().name("B"));

    assert_eq!(draft.age, Some(30));
    assert_eq!(draft.name.as_deref(), Some("B"));
}

#[test]
fn test_last_write_wins() {
    let mut intake = ProfileIntake::new();
    intake.update_profile_fields(&ProfileUpdate::new().weight_kg(80.0));
    intake.update_profile_fields(&ProfileUpdate::new().weight_kg(78.5));
    assert_eq!(intake.draft().weight_kg, Some(78.5));
}

#[test]
fn test_finalize_empty_profile() {
    common::init_test_logging();
    let profile = ProfileIntake::new().finalize_profile();

    assert!(profile.onboarded);
    assert_eq!(
        profile,
        Profile {
            onboarded: true,
            ..Profile::default()
        }
    );
}

#[test]
fn test_wizard_steps_build_full_profile() {
    common::init_test_logging();
    let mut intake = ProfileIntake::new();

    intake.update_profile_fields(&ProfileUpdate::basics(" Sara ", "25", "Female", "low"));
    intake.update_profile_fields(&ProfileUpdate::body_metrics("165", "60"));
    assert_eq!(intake.bmi_preview(), Some(22.0));
    intake.update_profile_fields(&ProfileUpdate::goal_timeline(
        "muscle_gain",
        "63",
        "2025-12-31",
        "left knee",
    ));
    let profile = intake.finalize_profile();

    assert_eq!(profile.name.as_deref(), Some("Sara"));
    assert_eq!(profile.age, Some(25));
    assert_eq!(profile.gender, Some(Gender::Female));
    assert_eq!(profile.activity_level, Some(ActivityLevel::Low));
    assert_eq!(profile.height_cm, Some(165.0));
    assert_eq!(profile.weight_kg, Some(60.0));
    assert_eq!(profile.goal, Some(Goal::MuscleGain));
    assert_eq!(profile.target_weight_kg, Some(63.0));
    assert_eq!(profile.deadline, NaiveDate::from_ymd_opt(2025, 12, 31));
    assert_eq!(profile.injury_notes.as_deref(), Some("left knee"));
    assert!(profile.onboarded);
}

#[test]
fn test_revisiting_basics_keeps_later_steps() {
    let mut intake = ProfileIntake::new();
    intake.update_profile_fields(&ProfileUpdate::basics("Sara", "25", "female", "low"));
    intake.update_profile_fields(&ProfileUpdate::body_metrics("165", "60"));
    intake.update_profile_fields(&ProfileUpdate::goal_timeline("recomp", "", "", ""));

    let draft = intake.update_profile_fields(&ProfileUpdate::basics("Sara", "26", "female", "low"));

    assert_eq!(draft.age, Some(26));
    assert_eq!(draft.height_cm, Some(165.0));
    assert_eq!(draft.goal, Some(Goal::Recomp));
}

#[test]
fn test_unusable_text_clears_field() {
    let mut intake = ProfileIntake::resume(common::reference_male_profile());
    let draft = intake.update_profile_fields(&ProfileUpdate::body_metrics("abc", "   "));

    assert_eq!(draft.height_cm, None);
    assert_eq!(draft.weight_kg, None);
    assert_eq!(draft.age, Some(30));
    assert_eq!(intake.bmi_preview(), None);
}

#[test]
fn test_non_positive_and_fractional_values() {
    let update = ProfileUpdate::new()
        .height_text("0")
        .weight_text("-70")
        .age_text("30.5")
        .deadline_text("next week");

    assert_eq!(update.height_cm, FieldUpdate::Clear);
    assert_eq!(update.weight_kg, FieldUpdate::Clear);
    assert_eq!(update.age, FieldUpdate::Clear);
    assert_eq!(update.deadline, FieldUpdate::Clear);
}

#[test]
fn test_unknown_enum_text_falls_back_to_default_on_read() {
    let mut intake = ProfileIntake::new();
    intake.update_profile_fields(&ProfileUpdate::new().goal_text("bulk").activity_text("extreme"));
    let profile = intake.finalize_profile();

    assert_eq!(profile.goal, None);
    assert_eq!(profile.effective_goal(), Goal::FatLoss);
    assert_eq!(profile.effective_activity_level(), ActivityLevel::Moderate);
    assert_eq!(profile.effective_gender(), Gender::Male);
}

#[test]
fn test_empty_update_changes_nothing() {
    let update = ProfileUpdate::new();
    assert!(update.is_empty());

    let mut intake = ProfileIntake::resume(common::reference_female_profile());
    let before = intake.draft().clone();
    intake.update_profile_fields(&update);
    assert_eq!(intake.draft(), &before);
}

#[test]
fn test_step_order() {
    assert_eq!(OnboardingStep::Basics.next(), Some(OnboardingStep::BodyMetrics));
    assert_eq!(OnboardingStep::GoalTimeline.next(), Some(OnboardingStep::Review));
    assert_eq!(OnboardingStep::Review.next(), None);
    assert_eq!(OnboardingStep::BodyMetrics.index(), 2);
}
