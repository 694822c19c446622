// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use std::collections::HashSet;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use tower::ServiceExt;
use workout_tracker::config::Config;
use workout_tracker::db::{Collections, FirestoreDb, MemoryStore, WorkoutStore};
use workout_tracker::error::AppError;
use workout_tracker::models::{
    Exercise, User, UserWorkout, UserWorkoutLog, WorkoutExercise, WorkoutRecord,
};
use workout_tracker::routes::create_router;
use workout_tracker::AppState;

/// Check if emulator is available via environment variable.
#[allow(dead_code)]
pub fn emulator_available() -> bool {
    std::env::var("FIRESTORE_EMULATOR_HOST").is_ok()
}

/// Skip test with message if emulator not available.
#[macro_export]
macro_rules! require_emulator {
    () => {
        if !crate::common::emulator_available() {
            eprintln!("⚠️  Skipping: FIRESTORE_EMULATOR_HOST not set");
            return;
        }
    };
}

/// Create a test database connection.
#[allow(dead_code)]
pub async fn test_db() -> FirestoreDb {
    FirestoreDb::new("test-project", Collections::default())
        .await
        .expect("Failed to connect to Firestore emulator")
}

/// Build the router around any store.
#[allow(dead_code)]
pub fn create_test_app(store: Arc<dyn WorkoutStore>) -> axum::Router {
    let state = Arc::new(AppState::new(Config::test_default(), store));
    create_router(state)
}

/// Router whose store fails every operation.
#[allow(dead_code)]
pub fn create_offline_app() -> axum::Router {
    create_test_app(Arc::new(FirestoreDb::new_offline()))
}

/// Send a request and decode the JSON response body.
#[allow(dead_code)]
pub async fn send(
    app: axum::Router,
    method: &str,
    uri: &str,
    body: Option<&str>,
) -> (StatusCode, serde_json::Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    if body.is_some() {
        builder = builder.header(header::CONTENT_TYPE, "application/json");
    }
    let request = builder
        .body(body.map(|b| Body::from(b.to_string())).unwrap_or_default())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .unwrap();
    let json = if bytes.is_empty() {
        serde_json::Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, json)
}

#[allow(dead_code)]
pub fn workout(id: &str, name: &str) -> WorkoutRecord {
    WorkoutRecord {
        workout_id: id.to_string(),
        name: name.to_string(),
        description: format!("{} description", name),
    }
}

#[allow(dead_code)]
pub fn exercise(id: &str, sets: u32, reps: u32) -> Exercise {
    Exercise {
        exercise_id: id.to_string(),
        name: format!("Exercise {}", id),
        description: format!("How to do {}", id),
        sets,
        reps,
    }
}

#[allow(dead_code)]
pub fn link(workout_id: &str, exercise_id: &str, sets: u32, reps: u32) -> WorkoutExercise {
    WorkoutExercise {
        workout_id: workout_id.to_string(),
        exercise_id: exercise_id.to_string(),
        sets,
        reps,
    }
}

/// Memory store that counts join scans and fails chosen exercise lookups.
#[allow(dead_code)]
#[derive(Default)]
pub struct InstrumentedStore {
    pub inner: MemoryStore,
    pub failing_exercises: HashSet<String>,
    pub join_scans: AtomicUsize,
}

#[allow(dead_code)]
impl InstrumentedStore {
    pub fn failing_on(exercise_ids: &[&str]) -> Self {
        Self {
            failing_exercises: exercise_ids.iter().map(|s| s.to_string()).collect(),
            ..Self::default()
        }
    }

    pub fn join_scan_count(&self) -> usize {
        self.join_scans.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl WorkoutStore for InstrumentedStore {
    async fn get_user(&self, user_id: &str) -> Result<Option<User>, AppError> {
        self.inner.get_user(user_id).await
    }

    async fn put_user(&self, user: &User) -> Result<(), AppError> {
        self.inner.put_user(user).await
    }

    async fn find_users_by_name(
        &self,
        first_name: &str,
        last_name: &str,
    ) -> Result<Vec<User>, AppError> {
        self.inner.find_users_by_name(first_name, last_name).await
    }

    async fn get_workout(&self, workout_id: &str) -> Result<Option<WorkoutRecord>, AppError> {
        self.inner.get_workout(workout_id).await
    }

    async fn get_exercise(&self, exercise_id: &str) -> Result<Option<Exercise>, AppError> {
        if self.failing_exercises.contains(exercise_id) {
            return Err(AppError::Database(format!(
                "simulated read failure for {}",
                exercise_id
            )));
        }
        self.inner.get_exercise(exercise_id).await
    }

    async fn scan_workout_exercises(
        &self,
        workout_id: &str,
    ) -> Result<Vec<WorkoutExercise>, AppError> {
        self.join_scans.fetch_add(1, Ordering::SeqCst);
        self.inner.scan_workout_exercises(workout_id).await
    }

    async fn put_user_workout(&self, session: &UserWorkout) -> Result<(), AppError> {
        self.inner.put_user_workout(session).await
    }

    async fn find_user_workouts(
        &self,
        user_id: &str,
        workout_id: &str,
    ) -> Result<Vec<UserWorkout>, AppError> {
        self.inner.find_user_workouts(user_id, workout_id).await
    }

    async fn put_workout_logs(&self, logs: &[UserWorkoutLog]) -> Result<(), AppError> {
        self.inner.put_workout_logs(logs).await
    }

    async fn find_workout_logs(
        &self,
        user_workout_id: &str,
    ) -> Result<Vec<UserWorkoutLog>, AppError> {
        self.inner.find_workout_logs(user_workout_id).await
    }
}
