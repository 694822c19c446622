// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! User workout sessions and per-exercise logs.

use serde::{Deserialize, Serialize};
#[cfg(feature = "binding-generation")]
use ts_rs::TS;
use validator::Validate;

/// One performed session of a workout by a user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct UserWorkout {
    /// Session ID (also used as document ID)
    pub id: String,
    pub user_id: String,
    pub workout_id: String,
    /// When the session was started (RFC 3339, UTC)
    pub date: String,
}

impl UserWorkout {
    /// Parsed session date. Unparseable dates sort before any valid one.
    pub fn started_at(&self) -> Option<chrono::DateTime<chrono::Utc>> {
        chrono::DateTime::parse_from_rfc3339(&self.date)
            .ok()
            .map(|dt| dt.with_timezone(&chrono::Utc))
    }
}

/// Result for one exercise within a session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct UserWorkoutLog {
    /// Log ID (also used as document ID)
    pub log_id: String,
    pub user_workout_id: String,
    pub exercise_id: String,
    pub sets: u32,
    pub reps: u32,
    /// Heaviest weight lifted across the sets
    pub max_weight: f64,
}

/// Client-supplied result for one exercise, before IDs are assigned.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct LogEntry {
    #[validate(length(min = 1))]
    pub exercise_id: String,
    pub sets: u32,
    pub reps: u32,
    pub max_weight: f64,
}
