// ABOUTME: Partial profile updates produced by each onboarding step
// ABOUTME: Typed per-field set/clear/unchanged markers built from raw form text
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::parse::{normalize_text, parse_age, parse_date, parse_measurement, positive_measurement};
use chrono::NaiveDate;
use dpapa_core::models::{ActivityLevel, Gender, Goal};

/// What an update does to one profile field
#[derive(Debug, Clone, Default, PartialEq)]
pub enum FieldUpdate<T> {
    /// Leave the current value in place
    #[default]
    Unchanged,
    /// Overwrite with a new value
    Set(T),
    /// Remove the current value
    Clear,
}

impl<T> FieldUpdate<T> {
    /// `Some` sets the field, `None` clears it
    #[must_use]
    pub fn from_option(value: Option<T>) -> Self {
        value.map_or(Self::Clear, Self::Set)
    }

    /// Whether this update leaves the field alone
    #[must_use]
    pub const fn is_unchanged(&self) -> bool {
        matches!(self, Self::Unchanged)
    }
}

impl<T: Clone> FieldUpdate<T> {
    /// Resolve against the current value (last write wins)
    #[must_use]
    pub fn resolve(&self, current: Option<&T>) -> Option<T> {
        match self {
            Self::Unchanged => current.cloned(),
            Self::Set(value) => Some(value.clone()),
            Self::Clear => None,
        }
    }
}

/// Partial set of profile fields
///
/// Raw-text setters parse immediately: text that does not hold a usable value
/// clears the field instead of failing, so a form can be merged on every
/// keystroke.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProfileUpdate {
    /// Display name
    pub name: FieldUpdate<String>,
    /// Age in whole years
    pub age: FieldUpdate<u32>,
    /// Biological sex
    pub gender: FieldUpdate<Gender>,
    /// Height in centimeters
    pub height_cm: FieldUpdate<f64>,
    /// Body weight in kilograms
    pub weight_kg: FieldUpdate<f64>,
    /// Training goal
    pub goal: FieldUpdate<Goal>,
    /// Activity level
    pub activity_level: FieldUpdate<ActivityLevel>,
    /// Target body weight in kilograms
    pub target_weight_kg: FieldUpdate<f64>,
    /// Target date
    pub deadline: FieldUpdate<NaiveDate>,
    /// Injuries or restrictions
    pub injury_notes: FieldUpdate<String>,
}

impl ProfileUpdate {
    /// Empty update
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Basics step: name, age, gender, activity level
    #[must_use]
    pub fn basics(name: &str, age: &str, gender: &str, activity_level: &str) -> Self {
        Self::new()
            .name(name)
            .age_text(age)
            .gender_text(gender)
            .activity_text(activity_level)
    }

    /// Body metrics step: height and weight
    #[must_use]
    pub fn body_metrics(height_cm: &str, weight_kg: &str) -> Self {
        Self::new().height_text(height_cm).weight_text(weight_kg)
    }

    /// Goal and timeline step: goal, target weight, deadline, injury notes
    #[must_use]
    pub fn goal_timeline(goal: &str, target_weight_kg: &str, deadline: &str, injuries: &str) -> Self {
        Self::new()
            .goal_text(goal)
            .target_weight_text(target_weight_kg)
            .deadline_text(deadline)
            .injury_notes(injuries)
    }

    /// Set the name; blank text clears it
    #[must_use]
    pub fn name(mut self, name: &str) -> Self {
        self.name = FieldUpdate::from_option(normalize_text(name));
        self
    }

    /// Set the age
    #[must_use]
    pub fn age(mut self, age: u32) -> Self {
        self.age = FieldUpdate::Set(age);
        self
    }

    /// Set the age from form text
    #[must_use]
    pub fn age_text(mut self, text: &str) -> Self {
        self.age = FieldUpdate::from_option(parse_age(text));
        self
    }

    /// Set the gender
    #[must_use]
    pub fn gender(mut self, gender: Gender) -> Self {
        self.gender = FieldUpdate::Set(gender);
        self
    }

    /// Set the gender from its wire name; unknown text clears it
    #[must_use]
    pub fn gender_text(mut self, text: &str) -> Self {
        self.gender = FieldUpdate::from_option(Gender::from_str_lossy(text));
        self
    }

    /// Set the height; non-positive values clear it
    #[must_use]
    pub fn height_cm(mut self, height_cm: f64) -> Self {
        self.height_cm = FieldUpdate::from_option(positive_measurement(height_cm));
        self
    }

    /// Set the height from form text
    #[must_use]
    pub fn height_text(mut self, text: &str) -> Self {
        self.height_cm = FieldUpdate::from_option(parse_measurement(text));
        self
    }

    /// Set the weight; non-positive values clear it
    #[must_use]
    pub fn weight_kg(mut self, weight_kg: f64) -> Self {
        self.weight_kg = FieldUpdate::from_option(positive_measurement(weight_kg));
        self
    }

    /// Set the weight from form text
    #[must_use]
    pub fn weight_text(mut self, text: &str) -> Self {
        self.weight_kg = FieldUpdate::from_option(parse_measurement(text));
        self
    }

    /// Set the goal
    #[must_use]
    pub fn goal(mut self, goal: Goal) -> Self {
        self.goal = FieldUpdate::Set(goal);
        self
    }

    /// Set the goal from its wire name; unknown text clears it
    #[must_use]
    pub fn goal_text(mut self, text: &str) -> Self {
        self.goal = FieldUpdate::from_option(Goal::from_str_lossy(text));
        self
    }

    /// Set the activity level
    #[must_use]
    pub fn activity_level(mut self, level: ActivityLevel) -> Self {
        self.activity_level = FieldUpdate::Set(level);
        self
    }

    /// Set the activity level from its wire name; unknown text clears it
    #[must_use]
    pub fn activity_text(mut self, text: &str) -> Self {
        self.activity_level = FieldUpdate::from_option(ActivityLevel::from_str_lossy(text));
        self
    }

    /// Set the target weight; non-positive values clear it
    #[must_use]
    pub fn target_weight_kg(mut self, target_weight_kg: f64) -> Self {
        self.target_weight_kg = FieldUpdate::from_option(positive_measurement(target_weight_kg));
        self
    }

    /// Set the target weight from form text
    #[must_use]
    pub fn target_weight_text(mut self, text: &str) -> Self {
        self.target_weight_kg = FieldUpdate::from_option(parse_measurement(text));
        self
    }

    /// Set the deadline
    #[must_use]
    pub fn deadline(mut self, deadline: NaiveDate) -> Self {
        self.deadline = FieldUpdate::Set(deadline);
        self
    }

    /// Set the deadline from `YYYY-MM-DD` text
    #[must_use]
    pub fn deadline_text(mut self, text: &str) -> Self {
        self.deadline = FieldUpdate::from_option(parse_date(text));
        self
    }

    /// Set the injury notes; blank text clears them
    #[must_use]
    pub fn injury_notes(mut self, notes: &str) -> Self {
        self.injury_notes = FieldUpdate::from_option(normalize_text(notes));
        self
    }

    /// Whether the update touches no field at all
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.name.is_unchanged()
            && self.age.is_unchanged()
            && self.gender.is_unchanged()
            && self.height_cm.is_unchanged()
            && self.weight_kg.is_unchanged()
            && self.goal.is_unchanged()
            && self.activity_level.is_unchanged()
            && self.target_weight_kg.is_unchanged()
            && self.deadline.is_unchanged()
            && self.injury_notes.is_unchanged()
    }
}
