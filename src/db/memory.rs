// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! In-process [`WorkoutStore`] for tests and benchmarks.
//!
//! Join rows and logs keep insertion order, which stands in for the remote
//! store's scan order.

use crate::db::WorkoutStore;
use crate::error::AppError;
use crate::models::{Exercise, User, UserWorkout, UserWorkoutLog, WorkoutExercise, WorkoutRecord};
use async_trait::async_trait;
use dashmap::DashMap;

/// Store backed by concurrent hash maps.
#[derive(Default)]
pub struct MemoryStore {
    users: DashMap<String, User>,
    workouts: DashMap<String, WorkoutRecord>,
    exercises: DashMap<String, Exercise>,
    /// Join rows grouped by workout_id
    workout_exercises: DashMap<String, Vec<WorkoutExercise>>,
    user_workouts: DashMap<String, UserWorkout>,
    /// Logs grouped by user_workout_id
    workout_logs: DashMap<String, Vec<UserWorkoutLog>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert_workout(&self, workout: WorkoutRecord) {
        self.workouts.insert(workout.workout_id.clone(), workout);
    }

    pub fn insert_exercise(&self, exercise: Exercise) {
        self.exercises.insert(exercise.exercise_id.clone(), exercise);
    }

    /// Append a join row. Rows for one workout scan back in insertion order.
    pub fn insert_workout_exercise(&self, link: WorkoutExercise) {
        self.workout_exercises
            .entry(link.workout_id.clone())
            .or_default()
            .push(link);
    }

    pub fn insert_user_workout(&self, session: UserWorkout) {
        self.user_workouts.insert(session.id.clone(), session);
    }

    pub fn user_count(&self) -> usize {
        self.users.len()
    }
}

#[async_trait]
impl WorkoutStore for MemoryStore {
    async fn get_user(&self, user_id: &str) -> Result<Option<User>, AppError> {
        Ok(self.users.get(user_id).map(|u| u.value().clone()))
    }

    async fn put_user(&self, user: &User) -> Result<(), AppError> {
        self.users.insert(user.user_id.clone(), user.clone());
        Ok(())
    }

    async fn find_users_by_name(
        &self,
        first_name: &str,
        last_name: &str,
    ) -> Result<Vec<User>, AppError> {
        Ok(self
            .users
            .iter()
            .filter(|u| u.first_name == first_name && u.last_name == last_name)
            .map(|u| u.value().clone())
            .collect())
    }

    async fn get_workout(&self, workout_id: &str) -> Result<Option<WorkoutRecord>, AppError> {
        Ok(self.workouts.get(workout_id).map(|w| w.value().clone()))
    }

    async fn get_exercise(&self, exercise_id: &str) -> Result<Option<Exercise>, AppError> {
        Ok(self.exercises.get(exercise_id).map(|e| e.value().clone()))
    }

    async fn scan_workout_exercises(
        &self,
        workout_id: &str,
    ) -> Result<Vec<WorkoutExercise>, AppError> {
        Ok(self
            .workout_exercises
            .get(workout_id)
            .map(|rows| rows.value().clone())
            .unwrap_or_default())
    }

    async fn put_user_workout(&self, session: &UserWorkout) -> Result<(), AppError> {
        self.insert_user_workout(session.clone());
        Ok(())
    }

    async fn find_user_workouts(
        &self,
        user_id: &str,
        workout_id: &str,
    ) -> Result<Vec<UserWorkout>, AppError> {
        Ok(self
            .user_workouts
            .iter()
            .filter(|s| s.user_id == user_id && s.workout_id == workout_id)
            .map(|s| s.value().clone())
            .collect())
    }

    async fn put_workout_logs(&self, logs: &[UserWorkoutLog]) -> Result<(), AppError> {
        for log in logs {
            self.workout_logs
                .entry(log.user_workout_id.clone())
                .or_default()
                .push(log.clone());
        }
        Ok(())
    }

    async fn find_workout_logs(
        &self,
        user_workout_id: &str,
    ) -> Result<Vec<UserWorkoutLog>, AppError> {
        Ok(self
            .workout_logs
            .get(user_workout_id)
            .map(|logs| logs.value().clone())
            .unwrap_or_default())
    }
}
