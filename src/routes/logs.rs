// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Workout session and log routes.

use crate::error::{AppError, Result};
use crate::models::{LogEntry, UserWorkout, UserWorkoutLog};
use crate::routes::parse_json_body;
use crate::services::logs::LogsBySession;
use crate::AppState;
use axum::{
    body::Bytes,
    extract::{Path, Query, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
#[cfg(feature = "binding-generation")]
use ts_rs::TS;
use validator::Validate;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/user-workouts", post(create_session))
        .route("/user-workouts/{id}/logs", post(create_logs))
        .route("/workout-logs", get(get_all_logs))
        .route("/workout-logs/latest", get(get_latest_logs))
}

// ─── Sessions ────────────────────────────────────────────────

#[derive(Deserialize, Validate)]
struct CreateSessionRequest {
    #[validate(length(min = 1))]
    user_id: String,
    #[validate(length(min = 1))]
    workout_id: String,
}

#[derive(Serialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct CreateSessionResponse {
    pub message: String,
    pub user_workout: UserWorkout,
}

async fn create_session(
    State(state): State<Arc<AppState>>,
    body: Bytes,
) -> Result<(StatusCode, Json<CreateSessionResponse>)> {
    let request: CreateSessionRequest = parse_json_body(&body)?;
    let session = state
        .logs
        .start_session(&request.user_id, &request.workout_id)
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(CreateSessionResponse {
            message: "User workout created successfully".to_string(),
            user_workout: session,
        }),
    ))
}

// ─── Logs ────────────────────────────────────────────────────

#[derive(Deserialize, Validate)]
struct CreateLogsRequest {
    #[validate(nested)]
    workout_data: Vec<LogEntry>,
}

#[derive(Serialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct CreateLogsResponse {
    pub message: String,
    pub logs: Vec<UserWorkoutLog>,
}

async fn create_logs(
    State(state): State<Arc<AppState>>,
    Path(user_workout_id): Path<String>,
    body: Bytes,
) -> Result<(StatusCode, Json<CreateLogsResponse>)> {
    let request: CreateLogsRequest = parse_json_body(&body)?;
    let logs = state
        .logs
        .record(&user_workout_id, request.workout_data)
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(CreateLogsResponse {
            message: "User workout logs created successfully".to_string(),
            logs,
        }),
    ))
}

#[derive(Deserialize)]
struct LogsQuery {
    user_id: Option<String>,
    workout_id: Option<String>,
}

impl LogsQuery {
    /// Both parameters, or a 400 naming the first one missing.
    fn require(self) -> Result<(String, String)> {
        let present = |v: Option<String>| v.filter(|s| !s.is_empty());
        let user_id = present(self.user_id)
            .ok_or_else(|| AppError::BadRequest("Missing user_id".to_string()))?;
        let workout_id = present(self.workout_id)
            .ok_or_else(|| AppError::BadRequest("Missing workout_id".to_string()))?;
        Ok((user_id, workout_id))
    }
}

/// Logs of the most recent session.
async fn get_latest_logs(
    State(state): State<Arc<AppState>>,
    Query(params): Query<LogsQuery>,
) -> Result<Json<Vec<UserWorkoutLog>>> {
    let (user_id, workout_id) = params.require()?;
    Ok(Json(state.logs.latest(&user_id, &workout_id).await?))
}

/// All logs, keyed by session ID.
async fn get_all_logs(
    State(state): State<Arc<AppState>>,
    Query(params): Query<LogsQuery>,
) -> Result<Json<LogsBySession>> {
    let (user_id, workout_id) = params.require()?;
    Ok(Json(state.logs.all(&user_id, &workout_id).await?))
}
