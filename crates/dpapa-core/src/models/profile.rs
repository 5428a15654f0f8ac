// ABOUTME: Profile intake record with gender, goal, and activity level enumerations
// ABOUTME: Optional typed fields with documented defaults applied on read
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Biological sex used by the Mifflin-St Jeor equation
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Gender {
    /// Male (+5 kcal constant)
    #[default]
    Male,
    /// Female (-161 kcal constant)
    Female,
}

impl Gender {
    /// Parse from its wire name, case-insensitively
    #[must_use]
    pub fn from_str_lossy(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "male" => Some(Self::Male),
            "female" => Some(Self::Female),
            _ => None,
        }
    }

    /// Wire name
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Male => "male",
            Self::Female => "female",
        }
    }
}

/// Training goal selecting the calorie multiplier
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Goal {
    /// Caloric deficit
    #[default]
    FatLoss,
    /// Caloric surplus
    MuscleGain,
    /// Maintenance calories, body recomposition
    Recomp,
    /// Slight surplus for training performance
    Performance,
}

impl Goal {
    /// Parse from its wire name, case-insensitively
    #[must_use]
    pub fn from_str_lossy(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "fat_loss" => Some(Self::FatLoss),
            "muscle_gain" => Some(Self::MuscleGain),
            "recomp" => Some(Self::Recomp),
            "performance" => Some(Self::Performance),
            _ => None,
        }
    }

    /// Wire name
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::FatLoss => "fat_loss",
            Self::MuscleGain => "muscle_gain",
            Self::Recomp => "recomp",
            Self::Performance => "performance",
        }
    }
}

/// Activity level selecting the TDEE multiplier
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum ActivityLevel {
    /// Little or no exercise
    Low,
    /// Regular exercise a few days a week
    #[default]
    Moderate,
    /// Hard training most days
    High,
}

impl ActivityLevel {
    /// Parse from its wire name, case-insensitively
    #[must_use]
    pub fn from_str_lossy(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "low" => Some(Self::Low),
            "moderate" => Some(Self::Moderate),
            "high" => Some(Self::High),
            _ => None,
        }
    }

    /// Wire name
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Moderate => "moderate",
            Self::High => "high",
        }
    }
}

macro_rules! display_as_wire_name {
    ($($ty:ty),*) => {
        $(
            impl fmt::Display for $ty {
                fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    f.write_str(self.as_str())
                }
            }
        )*
    };
}

display_as_wire_name!(Gender, Goal, ActivityLevel);

/// Aggregated onboarding intake record
///
/// Every field is optional. Enumerated fields fall back to their defaults
/// (`male`, `fat_loss`, `moderate`) through the `effective_*` accessors, so a
/// profile finalized with nothing filled in is still usable downstream.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Profile {
    /// Display name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Age in whole years
    #[serde(skip_serializing_if = "Option::is_none")]
    pub age: Option<u32>,
    /// Biological sex for BMR
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gender: Option<Gender>,
    /// Height in centimeters
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height_cm: Option<f64>,
    /// Body weight in kilograms
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weight_kg: Option<f64>,
    /// Training goal
    #[serde(skip_serializing_if = "Option::is_none")]
    pub goal: Option<Goal>,
    /// Activity level
    #[serde(skip_serializing_if = "Option::is_none")]
    pub activity_level: Option<ActivityLevel>,
    /// Target body weight in kilograms
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_weight_kg: Option<f64>,
    /// Date the target weight should be reached by
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deadline: Option<NaiveDate>,
    /// Free-form injuries or restrictions
    #[serde(skip_serializing_if = "Option::is_none")]
    pub injury_notes: Option<String>,
    /// Set by finalize; an onboarded profile lands on the dashboard
    pub onboarded: bool,
}

impl Profile {
    /// Gender with the `male` default applied
    #[must_use]
    pub fn effective_gender(&self) -> Gender {
        self.gender.unwrap_or_default()
    }

    /// Goal with the `fat_loss` default applied
    #[must_use]
    pub fn effective_goal(&self) -> Goal {
        self.goal.unwrap_or_default()
    }

    /// Activity level with the `moderate` default applied
    #[must_use]
    pub fn effective_activity_level(&self) -> ActivityLevel {
        self.activity_level.unwrap_or_default()
    }
}
