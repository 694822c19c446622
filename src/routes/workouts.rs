// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Workout routes.

use crate::error::{AppError, Result};
use crate::models::Workout;
use crate::AppState;
use axum::{
    extract::{Path, State},
    routing::get,
    Json, Router,
};
use std::sync::Arc;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/workout/", get(get_workout_without_id))
        .route("/workout/{id}", get(get_workout))
}

/// Get a workout with its exercises.
async fn get_workout(
    State(state): State<Arc<AppState>>,
    Path(workout_id): Path<String>,
) -> Result<Json<Workout>> {
    tracing::debug!(workout_id = %workout_id, "Fetching workout");
    Ok(Json(state.workouts.assemble(&workout_id).await?))
}

/// An empty ID names no workout.
async fn get_workout_without_id() -> Result<Json<Workout>> {
    Err(AppError::NotFound("Workout not found".to_string()))
}
