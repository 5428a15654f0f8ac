// ABOUTME: Workout template models: training days and exercise prescriptions
// ABOUTME: Ships the built-in upper/lower starter split
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};
use std::fmt;

/// One exercise prescription (exercise, sets, reps)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExerciseSet {
    /// Exercise name
    pub exercise: String,
    /// Number of working sets
    pub sets: u8,
    /// Repetitions per set
    pub reps: u8,
}

impl ExerciseSet {
    /// Create an exercise prescription
    pub fn new(exercise: impl Into<String>, sets: u8, reps: u8) -> Self {
        Self {
            exercise: exercise.into(),
            sets,
            reps,
        }
    }

    /// Total repetitions across all sets
    #[must_use]
    pub fn total_reps(&self) -> u32 {
        u32::from(self.sets) * u32::from(self.reps)
    }
}

impl fmt::Display for ExerciseSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}×{}", self.sets, self.reps)
    }
}

/// A named training day
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkoutDay {
    /// Day label, e.g. "Upper A"
    pub name: String,
    /// Exercises in order
    pub exercises: Vec<ExerciseSet>,
}

/// Ordered list of training days
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkoutTemplate {
    /// Days in rotation order
    pub days: Vec<WorkoutDay>,
}

impl WorkoutTemplate {
    /// Built-in upper/lower starter split
    #[must_use]
    pub fn starter() -> Self {
        Self {
            days: vec![
                WorkoutDay {
                    name: "Upper A".to_owned(),
                    exercises: vec![
                        ExerciseSet::new("Bench Press", 4, 8),
                        ExerciseSet::new("Incline Dumbbell Press", 3, 10),
                        ExerciseSet::new("Lat Pulldown", 4, 10),
                        ExerciseSet::new("Lateral Raise", 4, 12),
                    ],
                },
                WorkoutDay {
                    name: "Lower A".to_owned(),
                    exercises: vec![
                        ExerciseSet::new("Back Squat", 4, 6),
                        ExerciseSet::new("Romanian Deadlift", 3, 8),
                        ExerciseSet::new("Leg Press", 3, 12),
                    ],
                },
            ],
        }
    }

    /// First day in the rotation
    #[must_use]
    pub fn next_session(&self) -> Option<&WorkoutDay> {
        self.days.first()
    }

    /// Append a training day
    pub fn add_day(&mut self, day: WorkoutDay) {
        self.days.push(day);
    }
}
