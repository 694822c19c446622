// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Workout sessions and exercise logs.

use crate::db::WorkoutStore;
use crate::error::{AppError, Result};
use crate::models::{LogEntry, UserWorkout, UserWorkoutLog};
use crate::time_utils::now_rfc3339;
use futures_util::{stream, StreamExt, TryStreamExt};
use std::collections::BTreeMap;
use std::sync::Arc;

const MAX_CONCURRENT_LOG_FETCHES: usize = 16;

/// Logs grouped by session ID.
pub type LogsBySession = BTreeMap<String, Vec<UserWorkoutLog>>;

#[derive(Clone)]
pub struct WorkoutLogService {
    store: Arc<dyn WorkoutStore>,
}

impl WorkoutLogService {
    pub fn new(store: Arc<dyn WorkoutStore>) -> Self {
        Self { store }
    }

    /// Start a session of `workout_id` for `user_id`, dated now.
    pub async fn start_session(&self, user_id: &str, workout_id: &str) -> Result<UserWorkout> {
        let session = UserWorkout {
            id: uuid::Uuid::new_v4().to_string(),
            user_id: user_id.to_string(),
            workout_id: workout_id.to_string(),
            date: now_rfc3339(),
        };
        self.store.put_user_workout(&session).await?;

        tracing::info!(
            session_id = %session.id,
            user_id,
            workout_id,
            "Started workout session"
        );
        Ok(session)
    }

    /// Record exercise results for a session in one batch.
    pub async fn record(
        &self,
        user_workout_id: &str,
        entries: Vec<LogEntry>,
    ) -> Result<Vec<UserWorkoutLog>> {
        if entries.is_empty() {
            return Err(AppError::BadRequest("Missing workout data".to_string()));
        }

        let logs: Vec<UserWorkoutLog> = entries
            .into_iter()
            .map(|entry| UserWorkoutLog {
                log_id: uuid::Uuid::new_v4().to_string(),
                user_workout_id: user_workout_id.to_string(),
                exercise_id: entry.exercise_id,
                sets: entry.sets,
                reps: entry.reps,
                max_weight: entry.max_weight,
            })
            .collect();

        self.store.put_workout_logs(&logs).await?;

        tracing::info!(user_workout_id, count = logs.len(), "Recorded workout logs");
        Ok(logs)
    }

    /// Logs of the user's most recent session of this workout.
    pub async fn latest(&self, user_id: &str, workout_id: &str) -> Result<Vec<UserWorkoutLog>> {
        let sessions = self.store.find_user_workouts(user_id, workout_id).await?;

        let Some(latest) = sessions
            .into_iter()
            .max_by(|a, b| a.started_at().cmp(&b.started_at()).then(a.date.cmp(&b.date)))
        else {
            return Err(no_logs());
        };

        let logs = self.store.find_workout_logs(&latest.id).await?;
        if logs.is_empty() {
            return Err(no_logs());
        }
        Ok(logs)
    }

    /// Every log of every session of this workout, grouped by session.
    pub async fn all(&self, user_id: &str, workout_id: &str) -> Result<LogsBySession> {
        let sessions = self.store.find_user_workouts(user_id, workout_id).await?;
        if sessions.is_empty() {
            return Err(AppError::NotFound("No workouts found".to_string()));
        }

        let per_session: Vec<(String, Vec<UserWorkoutLog>)> = stream::iter(sessions)
            .map(|session| async move {
                let logs = self.store.find_workout_logs(&session.id).await?;
                Ok::<_, AppError>((session.id, logs))
            })
            .buffered(MAX_CONCURRENT_LOG_FETCHES)
            .try_collect()
            .await?;

        let grouped: LogsBySession = per_session
            .into_iter()
            .filter(|(_, logs)| !logs.is_empty())
            .collect();

        if grouped.is_empty() {
            return Err(no_logs());
        }
        Ok(grouped)
    }
}

fn no_logs() -> AppError {
    AppError::NotFound("No logs found".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::MemoryStore;

    fn entry(exercise_id: &str, max_weight: f64) -> LogEntry {
        LogEntry {
            exercise_id: exercise_id.to_string(),
            sets: 3,
            reps: 8,
            max_weight,
        }
    }

    fn session(id: &str, date: &str) -> UserWorkout {
        UserWorkout {
            id: id.to_string(),
            user_id: "u1".to_string(),
            workout_id: "w1".to_string(),
            date: date.to_string(),
        }
    }

    #[tokio::test]
    async fn test_latest_picks_newest_session() {
        let store = Arc::new(MemoryStore::new());
        store.insert_user_workout(session("old", "2024-01-01T10:00:00Z"));
        store.insert_user_workout(session("new", "2024-03-01T10:00:00Z"));
        let service = WorkoutLogService::new(store);

        service.record("old", vec![entry("e1", 60.0)]).await.unwrap();
        service.record("new", vec![entry("e1", 70.0)]).await.unwrap();

        let logs = service.latest("u1", "w1").await.unwrap();
        assert_eq!(logs.len(), 1);
        assert_eq!(logs[0].user_workout_id, "new");
        assert_eq!(logs[0].max_weight, 70.0);
    }

    #[tokio::test]
    async fn test_latest_without_logs_is_not_found() {
        let store = Arc::new(MemoryStore::new());
        store.insert_user_workout(session("s1", "2024-01-01T10:00:00Z"));
        let service = WorkoutLogService::new(store);

        let err = service.latest("u1", "w1").await.unwrap_err();
        assert!(matches!(err, AppError::NotFound(ref msg) if msg == "No logs found"));
    }

    #[tokio::test]
    async fn test_all_groups_by_session_and_drops_empty_sessions() {
        let store = Arc::new(MemoryStore::new());
        store.insert_user_workout(session("s1", "2024-01-01T10:00:00Z"));
        store.insert_user_workout(session("s2", "2024-01-08T10:00:00Z"));
        store.insert_user_workout(session("s3", "2024-01-15T10:00:00Z"));
        let service = WorkoutLogService::new(store);

        service
            .record("s1", vec![entry("e1", 50.0), entry("e2", 20.0)])
            .await
            .unwrap();
        service.record("s2", vec![entry("e1", 55.0)]).await.unwrap();

        let grouped = service.all("u1", "w1").await.unwrap();
        assert_eq!(grouped.len(), 2);
        assert_eq!(grouped["s1"].len(), 2);
        assert_eq!(grouped["s2"].len(), 1);
        assert!(!grouped.contains_key("s3"));
    }

    #[tokio::test]
    async fn test_record_rejects_empty_batch() {
        let service = WorkoutLogService::new(Arc::new(MemoryStore::new()));

        let err = service.record("s1", vec![]).await.unwrap_err();
        assert!(matches!(err, AppError::BadRequest(_)));
    }
}
