// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Workout, exercise and workout-exercise join models.

use serde::{Deserialize, Serialize};
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

/// Workout document as stored in Firestore.
///
/// Stored workouts never carry their exercise list; see [`Workout`].
/// Missing descriptive fields load as empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkoutRecord {
    /// Workout ID (also used as document ID)
    pub workout_id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: String,
}

/// Workout with its exercises assembled, as returned by the API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct Workout {
    pub workout_id: String,
    pub name: String,
    pub description: String,
    /// Exercises in join scan order, with workout-specific sets/reps
    pub exercises: Vec<Exercise>,
}

impl Workout {
    /// Attach assembled exercises to a stored workout.
    pub fn assemble(record: WorkoutRecord, exercises: Vec<Exercise>) -> Self {
        Self {
            workout_id: record.workout_id,
            name: record.name,
            description: record.description,
            exercises,
        }
    }
}

/// Exercise document.
///
/// The stored `sets`/`reps` are only templates. Fields missing from a stored
/// record load as empty or zero.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct Exercise {
    /// Exercise ID (also used as document ID)
    pub exercise_id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub sets: u32,
    #[serde(default)]
    pub reps: u32,
}

impl Exercise {
    /// Replace the template sets/reps with the values from a join row.
    pub fn with_volume_from(mut self, link: &WorkoutExercise) -> Self {
        self.sets = link.sets;
        self.reps = link.reps;
        self
    }
}

/// Workout-exercise join record carrying per-workout sets/reps.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkoutExercise {
    pub workout_id: String,
    pub exercise_id: String,
    #[serde(default)]
    pub sets: u32,
    #[serde(default)]
    pub reps: u32,
}

impl WorkoutExercise {
    /// Firestore document ID: both keys, url-encoded, joined by `_`.
    pub fn document_id(&self) -> String {
        format!(
            "{}_{}",
            urlencoding::encode(&self.workout_id),
            urlencoding::encode(&self.exercise_id)
        )
    }
}
