// ABOUTME: Raw text answers for the whole onboarding wizard
// ABOUTME: Split into one update per step and folded into a draft in step order
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::{OnboardingStep, ProfileIntake, ProfileUpdate};

/// Form text for every onboarding field; empty strings mean "not answered"
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OnboardingAnswers {
    /// Display name
    pub name: String,
    /// Age in whole years
    pub age: String,
    /// `male` or `female`
    pub gender: String,
    /// `low`, `moderate`, or `high`
    pub activity_level: String,
    /// Height in centimeters
    pub height_cm: String,
    /// Weight in kilograms
    pub weight_kg: String,
    /// Goal wire name
    pub goal: String,
    /// Target weight in kilograms
    pub target_weight_kg: String,
    /// Target date, `YYYY-MM-DD`
    pub deadline: String,
    /// Injuries or restrictions
    pub injury_notes: String,
}

impl OnboardingAnswers {
    /// The update a given wizard step submits
    #[must_use]
    pub fn step_update(&self, step: OnboardingStep) -> ProfileUpdate {
        match step {
            OnboardingStep::Basics => {
                ProfileUpdate::basics(&self.name, &self.age, &self.gender, &self.activity_level)
            }
            OnboardingStep::BodyMetrics => {
                ProfileUpdate::body_metrics(&self.height_cm, &self.weight_kg)
            }
            OnboardingStep::GoalTimeline => ProfileUpdate::goal_timeline(
                &self.goal,
                &self.target_weight_kg,
                &self.deadline,
                &self.injury_notes,
            ),
            OnboardingStep::Review => ProfileUpdate::new(),
        }
    }

    /// Walk every step in order and return the resulting draft
    #[must_use]
    pub fn intake(&self) -> ProfileIntake {
        let mut intake = ProfileIntake::new();
        for step in OnboardingStep::ALL {
            intake.update_profile_fields(&self.step_update(step));
        }
        intake
    }
}
