//! Database layer.
//!
//! Handlers talk to the store through [`WorkoutStore`]. Production uses
//! [`FirestoreDb`]; tests and benches use [`MemoryStore`].

pub mod firestore;
pub mod memory;

pub use firestore::FirestoreDb;
pub use memory::MemoryStore;

use crate::error::AppError;
use crate::models::{Exercise, User, UserWorkout, UserWorkoutLog, WorkoutExercise, WorkoutRecord};
use async_trait::async_trait;

/// Default collection names.
pub mod collections {
    pub const USERS: &str = "users";
    pub const WORKOUTS: &str = "workouts";
    pub const EXERCISES: &str = "exercises";
    /// Workout-exercise join rows
    pub const WORKOUT_EXERCISES: &str = "workout_exercises";
    pub const USER_WORKOUTS: &str = "user_workouts";
    pub const USER_WORKOUT_LOGS: &str = "user_workout_logs";
}

/// Collection names in use, overridable through configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Collections {
    pub users: String,
    pub workouts: String,
    pub exercises: String,
    pub workout_exercises: String,
    pub user_workouts: String,
    pub user_workout_logs: String,
}

impl Default for Collections {
    fn default() -> Self {
        Self {
            users: collections::USERS.to_string(),
            workouts: collections::WORKOUTS.to_string(),
            exercises: collections::EXERCISES.to_string(),
            workout_exercises: collections::WORKOUT_EXERCISES.to_string(),
            user_workouts: collections::USER_WORKOUTS.to_string(),
            user_workout_logs: collections::USER_WORKOUT_LOGS.to_string(),
        }
    }
}

/// Typed access to the backing store.
///
/// `get_*` return `Ok(None)` for a missing record; `Err` is reserved for store
/// failures. Scans return records in whatever order the store yields them.
#[async_trait]
pub trait WorkoutStore: Send + Sync {
    // ─── Users ───────────────────────────────────────────────────

    async fn get_user(&self, user_id: &str) -> Result<Option<User>, AppError>;

    async fn put_user(&self, user: &User) -> Result<(), AppError>;

    /// Scan users with exact, case-sensitive equality on both names.
    async fn find_users_by_name(
        &self,
        first_name: &str,
        last_name: &str,
    ) -> Result<Vec<User>, AppError>;

    // ─── Workouts ────────────────────────────────────────────────

    async fn get_workout(&self, workout_id: &str) -> Result<Option<WorkoutRecord>, AppError>;

    async fn get_exercise(&self, exercise_id: &str) -> Result<Option<Exercise>, AppError>;

    /// Scan the join collection for rows linked to `workout_id`.
    async fn scan_workout_exercises(
        &self,
        workout_id: &str,
    ) -> Result<Vec<WorkoutExercise>, AppError>;

    // ─── Sessions & Logs ─────────────────────────────────────────

    async fn put_user_workout(&self, session: &UserWorkout) -> Result<(), AppError>;

    async fn find_user_workouts(
        &self,
        user_id: &str,
        workout_id: &str,
    ) -> Result<Vec<UserWorkout>, AppError>;

    /// Store a batch of logs.
    async fn put_workout_logs(&self, logs: &[UserWorkoutLog]) -> Result<(), AppError>;

    async fn find_workout_logs(
        &self,
        user_workout_id: &str,
    ) -> Result<Vec<UserWorkoutLog>, AppError>;
}
