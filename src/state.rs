// ABOUTME: Application state holding the current profile and its persistence
// ABOUTME: Loads leniently, persists best-effort, and routes onboarded users to the dashboard
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::dashboard::DashboardSummary;
use crate::intake::{merge_profile, ProfileIntake, ProfileUpdate};
use crate::storage::ProfileStore;
use dpapa_core::errors::AppResult;
use dpapa_core::models::{NutritionTargets, Profile};
use dpapa_intelligence::{estimate_nutrition_targets, NutritionConfig};
use tracing::{debug, info, warn};

/// Current profile plus the store it is mirrored to
///
/// Storage failures never surface to the user: a missing or unreadable blob
/// loads as an empty profile and failed writes are logged and dropped.
pub struct AppState<S: ProfileStore> {
    store: S,
    key: String,
    profile: Profile,
}

impl<S: ProfileStore> AppState<S> {
    /// Load the profile stored under `key`
    pub async fn load(store: S, key: impl Into<String>) -> Self {
        let key = key.into();
        let profile = match store.load_raw(&key).await {
            Ok(Some(blob)) => serde_json::from_str::<Profile>(&blob).unwrap_or_else(|e| {
                warn!(key = %key, error = %e, "Stored profile is corrupt; starting empty");
                Profile::default()
            }),
            Ok(None) => {
                debug!(key = %key, "No stored profile");
                Profile::default()
            }
            Err(e) => {
                warn!(
                    key = %key,
                    backend = store.backend_name(),
                    error = %e,
                    "Profile load failed; starting empty"
                );
                Profile::default()
            }
        };
        info!(
            key = %key,
            backend = store.backend_name(),
            onboarded = profile.onboarded,
            "Profile loaded"
        );
        Self {
            store,
            key,
            profile,
        }
    }

    /// Current profile
    #[must_use]
    pub const fn profile(&self) -> &Profile {
        &self.profile
    }

    /// Whether the dashboard should be shown instead of onboarding
    #[must_use]
    pub const fn is_onboarded(&self) -> bool {
        self.profile.onboarded
    }

    /// Underlying store
    #[must_use]
    pub const fn store(&self) -> &S {
        &self.store
    }

    /// Storage key
    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Replace the profile and mirror it to storage
    ///
    /// Returns whether the write reached the store.
    pub async fn replace_profile(&mut self, profile: Profile) -> bool {
        self.profile = profile;
        match self.persist().await {
            Ok(()) => true,
            Err(e) => {
                warn!(
                    key = %self.key,
                    backend = self.store.backend_name(),
                    error = %e,
                    "Profile save failed"
                );
                false
            }
        }
    }

    async fn persist(&self) -> AppResult<()> {
        let blob = serde_json::to_string(&self.profile)?;
        self.store.save_raw(&self.key, &blob).await
    }

    /// Finalize an intake and make it the current profile
    pub async fn complete_onboarding(&mut self, intake: ProfileIntake) -> &Profile {
        let profile = intake.finalize_profile();
        self.replace_profile(profile).await;
        &self.profile
    }

    /// Change the display name; a blank name clears it
    ///
    /// Before onboarding is finished only the in-memory draft changes: a
    /// partial profile is never written to the store.
    pub async fn rename(&mut self, name: &str) -> &Profile {
        let renamed = merge_profile(&self.profile, &ProfileUpdate::new().name(name));
        if self.is_onboarded() {
            self.replace_profile(renamed).await;
        } else {
            debug!(key = %self.key, "Rename before onboarding; not persisted");
            self.profile = renamed;
        }
        &self.profile
    }

    /// Forget the profile and go back to onboarding
    pub async fn reset(&mut self) {
        self.profile = Profile::default();
        if let Err(e) = self.store.remove(&self.key).await {
            warn!(key = %self.key, error = %e, "Profile removal failed");
        } else {
            info!(key = %self.key, "Profile reset");
        }
    }

    /// Nutrition targets for the current profile
    #[must_use]
    pub fn nutrition_targets(&self, config: &NutritionConfig) -> NutritionTargets {
        estimate_nutrition_targets(&self.profile, config)
    }

    /// Dashboard summary for the current profile
    #[must_use]
    pub fn dashboard(&self, config: &NutritionConfig) -> DashboardSummary {
        DashboardSummary::from_profile(&self.profile, config)
    }
}
