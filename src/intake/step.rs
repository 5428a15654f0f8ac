// ABOUTME: Onboarding wizard steps in presentation order
// ABOUTME: Informational only; the aggregator accepts updates in any order
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};

/// Wizard step
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OnboardingStep {
    /// Name, age, gender, activity level
    #[default]
    Basics,
    /// Height and weight, with a live BMI preview
    BodyMetrics,
    /// Goal, target weight, deadline, injuries
    GoalTimeline,
    /// Summary before finalize
    Review,
}

impl OnboardingStep {
    /// All steps in order
    pub const ALL: [Self; 4] = [
        Self::Basics,
        Self::BodyMetrics,
        Self::GoalTimeline,
        Self::Review,
    ];

    /// 1-based position
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Self::Basics => 1,
            Self::BodyMetrics => 2,
            Self::GoalTimeline => 3,
            Self::Review => 4,
        }
    }

    /// Following step; `Review` is last
    #[must_use]
    pub const fn next(self) -> Option<Self> {
        match self {
            Self::Basics => Some(Self::BodyMetrics),
            Self::BodyMetrics => Some(Self::GoalTimeline),
            Self::GoalTimeline => Some(Self::Review),
            Self::Review => None,
        }
    }

    /// Preceding step; `Basics` is first
    #[must_use]
    pub const fn previous(self) -> Option<Self> {
        match self {
            Self::Basics => None,
            Self::BodyMetrics => Some(Self::Basics),
            Self::GoalTimeline => Some(Self::BodyMetrics),
            Self::Review => Some(Self::GoalTimeline),
        }
    }
}
