// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Firestore-backed [`WorkoutStore`].
//!
//! Document IDs:
//! - users, workouts, exercises: the record's own ID
//! - workout-exercise join rows: `{workout_id}_{exercise_id}`
//! - sessions and logs: their generated IDs

use crate::db::{Collections, WorkoutStore};
use crate::error::AppError;
use crate::models::{Exercise, User, UserWorkout, UserWorkoutLog, WorkoutExercise, WorkoutRecord};
use async_trait::async_trait;

// Firestore limits batch/transaction writes to 500 operations.
// We use a safe limit of 400 to allow headroom.
const BATCH_SIZE: usize = 400;

/// Fields returned by the login scan.
const USER_LOOKUP_FIELDS: [&str; 3] = ["user_id", "first_name", "last_name"];

/// Firestore database client.
#[derive(Clone)]
pub struct FirestoreDb {
    client: Option<firestore::FirestoreDb>,
    collections: Collections,
}

impl FirestoreDb {
    /// Create a new Firestore client.
    ///
    /// For local development with emulator, set FIRESTORE_EMULATOR_HOST.
    pub async fn new(project_id: &str, collections: Collections) -> Result<Self, AppError> {
        // If the emulator environment variable is set, use unauthenticated connection
        // to avoid local credential warnings and leakage.
        if std::env::var("FIRESTORE_EMULATOR_HOST").is_ok() {
            return Self::create_emulator_client(project_id, collections).await;
        }

        let client = firestore::FirestoreDb::new(project_id)
            .await
            .map_err(|e| AppError::Database(format!("Failed to connect to Firestore: {}", e)))?;

        tracing::info!(project = project_id, "Connected to Firestore");

        Ok(Self {
            client: Some(client),
            collections,
        })
    }

    /// Create a Firestore client for the emulator with unauthenticated access.
    async fn create_emulator_client(
        project_id: &str,
        collections: Collections,
    ) -> Result<Self, AppError> {
        tracing::info!("Using unauthenticated connection for Firestore Emulator");

        let token_source = gcloud_sdk::ExternalJwtFunctionSource::new(|| async {
            Ok(gcloud_sdk::Token {
                token_type: "Bearer".to_string(),
                token: gcloud_sdk::SecretValue::new(
                    "eyJhbGciOiJub25lIn0.eyJ1aWQiOiJ0ZXN0In0."
                        .to_string()
                        .into(),
                ),
                expiry: chrono::Utc::now() + chrono::Duration::hours(1),
            })
        });

        let options = firestore::FirestoreDbOptions::new(project_id.to_string());

        let client = firestore::FirestoreDb::with_options_token_source(
            options,
            gcloud_sdk::GCP_DEFAULT_SCOPES.clone(),
            gcloud_sdk::TokenSourceType::ExternalSource(Box::new(token_source)),
        )
        .await
        .map_err(|e| {
            AppError::Database(format!("Failed to connect to Firestore Emulator: {}", e))
        })?;

        tracing::info!(
            project = project_id,
            "Connected to Firestore (Emulator/Unauthenticated)"
        );

        Ok(Self {
            client: Some(client),
            collections,
        })
    }

    /// Create a disconnected client (offline mode).
    ///
    /// All database operations will return an error if called.
    pub fn new_offline() -> Self {
        Self {
            client: None,
            collections: Collections::default(),
        }
    }

    /// Helper to get the client or return an error if offline.
    fn get_client(&self) -> Result<&firestore::FirestoreDb, AppError> {
        self.client
            .as_ref()
            .ok_or_else(|| AppError::Database("Database not connected (offline mode)".to_string()))
    }

    /// Fetch one document by ID, `None` if it does not exist.
    async fn get_by_id<T>(&self, collection: &str, id: &str) -> Result<Option<T>, AppError>
    where
        T: serde::de::DeserializeOwned + Send,
    {
        self.get_client()?
            .fluent()
            .select()
            .by_id_in(collection)
            .obj()
            .one(id)
            .await
            .map_err(|e| AppError::Database(e.to_string()))
    }

    /// Create or overwrite one document.
    async fn put_by_id<T>(&self, collection: &str, id: &str, object: &T) -> Result<(), AppError>
    where
        T: serde::Serialize + serde::de::DeserializeOwned + Send + Sync,
    {
        let _: () = self
            .get_client()?
            .fluent()
            .update()
            .in_col(collection)
            .document_id(id)
            .object(object)
            .execute()
            .await
            .map_err(|e| AppError::Database(e.to_string()))?;
        Ok(())
    }

    // ─── Catalog Writes ──────────────────────────────────────────
    //
    // The API only reads workouts and exercises; these load the catalog.

    pub async fn put_workout(&self, workout: &WorkoutRecord) -> Result<(), AppError> {
        self.put_by_id(&self.collections.workouts, &workout.workout_id, workout)
            .await
    }

    pub async fn put_exercise(&self, exercise: &Exercise) -> Result<(), AppError> {
        self.put_by_id(&self.collections.exercises, &exercise.exercise_id, exercise)
            .await
    }

    pub async fn put_workout_exercise(&self, row: &WorkoutExercise) -> Result<(), AppError> {
        self.put_by_id(
            &self.collections.workout_exercises,
            &row.document_id(),
            row,
        )
        .await
    }
}

#[async_trait]
impl WorkoutStore for FirestoreDb {
    // ─── User Operations ─────────────────────────────────────────

    async fn get_user(&self, user_id: &str) -> Result<Option<User>, AppError> {
        self.get_by_id(&self.collections.users, user_id).await
    }

    async fn put_user(&self, user: &User) -> Result<(), AppError> {
        self.put_by_id(&self.collections.users, &user.user_id, user)
            .await
    }

    async fn find_users_by_name(
        &self,
        first_name: &str,
        last_name: &str,
    ) -> Result<Vec<User>, AppError> {
        self.get_client()?
            .fluent()
            .select()
            .fields(USER_LOOKUP_FIELDS)
            .from(self.collections.users.as_str())
            .filter(|q| {
                q.for_all([
                    q.field("first_name").eq(first_name),
                    q.field("last_name").eq(last_name),
                ])
            })
            .obj()
            .query()
            .await
            .map_err(|e| AppError::Database(e.to_string()))
    }

    // ─── Workout Operations ──────────────────────────────────────

    async fn get_workout(&self, workout_id: &str) -> Result<Option<WorkoutRecord>, AppError> {
        self.get_by_id(&self.collections.workouts, workout_id).await
    }

    async fn get_exercise(&self, exercise_id: &str) -> Result<Option<Exercise>, AppError> {
        self.get_by_id(&self.collections.exercises, exercise_id)
            .await
    }

    async fn scan_workout_exercises(
        &self,
        workout_id: &str,
    ) -> Result<Vec<WorkoutExercise>, AppError> {
        self.get_client()?
            .fluent()
            .select()
            .from(self.collections.workout_exercises.as_str())
            .filter(|q| q.for_all([q.field("workout_id").eq(workout_id)]))
            .obj()
            .query()
            .await
            .map_err(|e| AppError::Database(e.to_string()))
    }

    // ─── Session & Log Operations ────────────────────────────────

    async fn put_user_workout(&self, session: &UserWorkout) -> Result<(), AppError> {
        self.put_by_id(&self.collections.user_workouts, &session.id, session)
            .await
    }

    async fn find_user_workouts(
        &self,
        user_id: &str,
        workout_id: &str,
    ) -> Result<Vec<UserWorkout>, AppError> {
        self.get_client()?
            .fluent()
            .select()
            .from(self.collections.user_workouts.as_str())
            .filter(|q| {
                q.for_all([
                    q.field("workout_id").eq(workout_id),
                    q.field("user_id").eq(user_id),
                ])
            })
            .obj()
            .query()
            .await
            .map_err(|e| AppError::Database(e.to_string()))
    }

    /// Writes logs in transactional chunks of [`BATCH_SIZE`].
    async fn put_workout_logs(&self, logs: &[UserWorkoutLog]) -> Result<(), AppError> {
        let client = self.get_client()?;
        let collection = self.collections.user_workout_logs.as_str();

        for chunk in logs.chunks(BATCH_SIZE) {
            let mut transaction = client
                .begin_transaction()
                .await
                .map_err(|e| AppError::Database(format!("Failed to begin transaction: {}", e)))?;

            for log in chunk {
                client
                    .fluent()
                    .update()
                    .in_col(collection)
                    .document_id(&log.log_id)
                    .object(log)
                    .add_to_transaction(&mut transaction)
                    .map_err(|e| {
                        AppError::Database(format!("Failed to add log to transaction: {}", e))
                    })?;
            }

            transaction
                .commit()
                .await
                .map_err(|e| AppError::Database(format!("Transaction commit failed: {}", e)))?;
        }

        tracing::debug!(count = logs.len(), "Stored workout logs");
        Ok(())
    }

    async fn find_workout_logs(
        &self,
        user_workout_id: &str,
    ) -> Result<Vec<UserWorkoutLog>, AppError> {
        self.get_client()?
            .fluent()
            .select()
            .from(self.collections.user_workout_logs.as_str())
            .filter(|q| q.for_all([q.field("user_workout_id").eq(user_workout_id)]))
            .obj()
            .query()
            .await
            .map_err(|e| AppError::Database(e.to_string()))
    }
}
