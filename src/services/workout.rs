// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Workout assembly: a workout plus its exercises with per-workout volume.

use crate::db::WorkoutStore;
use crate::error::{AppError, Result};
use crate::models::{Exercise, Workout, WorkoutExercise};
use futures_util::{stream, StreamExt, TryStreamExt};
use std::sync::Arc;

/// Upper bound on in-flight exercise lookups for one request.
const MAX_CONCURRENT_EXERCISE_FETCHES: usize = 16;

#[derive(Clone)]
pub struct WorkoutService {
    store: Arc<dyn WorkoutStore>,
}

impl WorkoutService {
    pub fn new(store: Arc<dyn WorkoutStore>) -> Self {
        Self { store }
    }

    /// Load a workout and assemble its exercise list.
    ///
    /// 1. Missing workout is `NotFound`, before the join collection is touched.
    /// 2. A workout with no join rows is a distinct `NotFound`.
    /// 3. Each join row's exercise is fetched. A store error fails the whole
    ///    request; a missing exercise drops that row.
    /// 4. Surviving exercises take the join row's sets/reps and keep scan order.
    pub async fn assemble(&self, workout_id: &str) -> Result<Workout> {
        let record = self
            .store
            .get_workout(workout_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Workout not found".to_string()))?;

        let links = self.store.scan_workout_exercises(workout_id).await?;
        if links.is_empty() {
            return Err(AppError::NotFound(
                "No exercises found for this workout".to_string(),
            ));
        }

        let exercises = self.resolve_exercises(&links).await?;

        tracing::debug!(
            workout_id,
            linked = links.len(),
            resolved = exercises.len(),
            "Assembled workout"
        );

        Ok(Workout::assemble(record, exercises))
    }

    /// Fetch exercises for join rows concurrently, preserving row order.
    async fn resolve_exercises(&self, links: &[WorkoutExercise]) -> Result<Vec<Exercise>> {
        let resolved: Vec<Option<Exercise>> = stream::iter(links.to_vec())
            .map(|link| async move {
                let link = &link;
                let exercise = self.store.get_exercise(&link.exercise_id).await?;
                if exercise.is_none() {
                    tracing::warn!(
                        workout_id = %link.workout_id,
                        exercise_id = %link.exercise_id,
                        "Join row references missing exercise, skipping"
                    );
                }
                Ok::<_, AppError>(exercise.map(|e| e.with_volume_from(link)))
            })
            .buffered(MAX_CONCURRENT_EXERCISE_FETCHES)
            .try_collect()
            .await?;

        Ok(resolved.into_iter().flatten().collect())
    }
}
