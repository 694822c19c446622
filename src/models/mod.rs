// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Data models for the application.

pub mod log;
pub mod user;
pub mod workout;

pub use log::{LogEntry, UserWorkout, UserWorkoutLog};
pub use user::User;
pub use workout::{Exercise, Workout, WorkoutExercise, WorkoutRecord};
