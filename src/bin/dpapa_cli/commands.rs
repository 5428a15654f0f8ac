// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
// ABOUTME: Command handlers for dpapa-cli
// ABOUTME: Each handler drives the library and prints through the display helpers

use crate::display;
use clap::Args;
use dpapa_coach::dpapa_core::models::{ProgressSeries, WorkoutTemplate};
use dpapa_coach::intake::OnboardingAnswers;
use dpapa_coach::intelligence::NutritionConfig;
use dpapa_coach::state::AppState;
use dpapa_coach::storage::ProfileStore;
use dpapa_coach::AppResult;

/// Onboarding answers; anything left out stays unknown
#[derive(Args, Debug, Default)]
pub struct OnboardArgs {
    /// Display name
    #[arg(long, default_value = "")]
    pub name: String,
    /// Age in whole years
    #[arg(long, default_value = "")]
    pub age: String,
    /// male or female
    #[arg(long, default_value = "")]
    pub gender: String,
    /// low, moderate, or high
    #[arg(long, default_value = "")]
    pub activity: String,
    /// Height in cm
    #[arg(long, default_value = "")]
    pub height: String,
    /// Weight in kg
    #[arg(long, default_value = "")]
    pub weight: String,
    /// fat_loss, muscle_gain, recomp, or performance
    #[arg(long, default_value = "")]
    pub goal: String,
    /// Target weight in kg
    #[arg(long, default_value = "")]
    pub target_weight: String,
    /// Target date (YYYY-MM-DD)
    #[arg(long, default_value = "")]
    pub deadline: String,
    /// Injuries or restrictions
    #[arg(long, default_value = "")]
    pub injuries: String,
}

impl OnboardArgs {
    fn answers(&self) -> OnboardingAnswers {
        OnboardingAnswers {
            name: self.name.clone(),
            age: self.age.clone(),
            gender: self.gender.clone(),
            activity_level: self.activity.clone(),
            height_cm: self.height.clone(),
            weight_kg: self.weight.clone(),
            goal: self.goal.clone(),
            target_weight_kg: self.target_weight.clone(),
            deadline: self.deadline.clone(),
            injury_notes: self.injuries.clone(),
        }
    }
}

pub async fn onboard<S: ProfileStore>(
    state: &mut AppState<S>,
    config: &NutritionConfig,
    args: &OnboardArgs,
) -> AppResult<()> {
    let intake = args.answers().intake();
    display::bmi_preview(intake.bmi_preview());
    state.complete_onboarding(intake).await;
    display::dashboard(&state.dashboard(config), false)
}

pub fn show<S: ProfileStore>(
    state: &AppState<S>,
    config: &NutritionConfig,
    json: bool,
) -> AppResult<()> {
    if !state.is_onboarded() {
        display::not_onboarded();
        return Ok(());
    }
    display::dashboard(&state.dashboard(config), json)
}

pub fn nutrition<S: ProfileStore>(
    state: &AppState<S>,
    config: &NutritionConfig,
    json: bool,
) -> AppResult<()> {
    display::nutrition(&state.nutrition_targets(config), json)
}

pub async fn rename<S: ProfileStore>(state: &mut AppState<S>, name: &str) {
    if !state.is_onboarded() {
        display::not_onboarded();
        return;
    }
    let profile = state.rename(name).await;
    display::renamed(profile.name.as_deref());
}

pub async fn reset<S: ProfileStore>(state: &mut AppState<S>) {
    state.reset().await;
    println!("Profile cleared. Run `dpapa-cli onboard` to start again.");
}

pub fn workouts() {
    display::workouts(&WorkoutTemplate::starter());
}

pub fn progress() {
    display::progress(&ProgressSeries::sample());
}
