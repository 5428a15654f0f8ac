// ABOUTME: Onboarding intake aggregator merging partial step updates into one profile
// ABOUTME: Last-write-wins per field, finalize marks the profile as onboarded
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Profile intake
//!
//! The wizard produces one [`ProfileUpdate`] per step. [`ProfileIntake`] folds
//! them into a draft [`Profile`]; fields absent from an update keep their
//! current value. Nothing is validated beyond parse-on-input: an empty draft
//! can be finalized and the estimator copes with the gaps.

/// Whole-wizard text answers
pub mod answers;
/// Raw form text parsing
pub mod parse;
/// Wizard step ordering
pub mod step;
/// Partial profile updates
pub mod update;

pub use answers::OnboardingAnswers;
pub use step::OnboardingStep;
pub use update::{FieldUpdate, ProfileUpdate};

use dpapa_core::models::Profile;
use dpapa_intelligence::compute_bmi;
use tracing::{debug, info};

/// Merge an update into a profile, returning a new profile
///
/// Pure: the input profile is left untouched. `onboarded` is never changed
/// here.
#[must_use]
pub fn merge_profile(profile: &Profile, update: &ProfileUpdate) -> Profile {
    Profile {
        name: update.name.resolve(profile.name.as_ref()),
        age: update.age.resolve(profile.age.as_ref()),
        gender: update.gender.resolve(profile.gender.as_ref()),
        height_cm: update.height_cm.resolve(profile.height_cm.as_ref()),
        weight_kg: update.weight_kg.resolve(profile.weight_kg.as_ref()),
        goal: update.goal.resolve(profile.goal.as_ref()),
        activity_level: update
            .activity_level
            .resolve(profile.activity_level.as_ref()),
        target_weight_kg: update
            .target_weight_kg
            .resolve(profile.target_weight_kg.as_ref()),
        deadline: update.deadline.resolve(profile.deadline.as_ref()),
        injury_notes: update.injury_notes.resolve(profile.injury_notes.as_ref()),
        onboarded: profile.onboarded,
    }
}

/// Draft profile accumulated across onboarding steps
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProfileIntake {
    draft: Profile,
}

impl ProfileIntake {
    /// Start from an empty draft
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Continue from an existing profile (e.g. a previously saved draft)
    #[must_use]
    pub fn resume(profile: Profile) -> Self {
        Self { draft: profile }
    }

    /// Current draft
    #[must_use]
    pub const fn draft(&self) -> &Profile {
        &self.draft
    }

    /// Apply one step's update and return the new draft
    ///
    /// Applying the same update twice gives the same draft as applying it once.
    pub fn update_profile_fields(&mut self, update: &ProfileUpdate) -> &Profile {
        if update.is_empty() {
            return &self.draft;
        }
        self.draft = merge_profile(&self.draft, update);
        debug!(
            has_height = self.draft.height_cm.is_some(),
            has_weight = self.draft.weight_kg.is_some(),
            has_age = self.draft.age.is_some(),
            "Merged onboarding update"
        );
        &self.draft
    }

    /// Live BMI for the body metrics step, one decimal
    #[must_use]
    pub fn bmi_preview(&self) -> Option<f64> {
        compute_bmi(self.draft.height_cm, self.draft.weight_kg)
    }

    /// Close the intake and hand back the onboarded profile
    ///
    /// Consumes the aggregator so no further updates can follow.
    #[must_use]
    pub fn finalize_profile(self) -> Profile {
        let mut profile = self.draft;
        profile.onboarded = true;
        info!(
            complete = profile.age.is_some()
                && profile.height_cm.is_some()
                && profile.weight_kg.is_some(),
            "Onboarding finalized"
        );
        profile
    }
}
