// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Registration, login and user lookup routes.

use crate::error::Result;
use crate::models::User;
use crate::routes::parse_json_body;
use crate::AppState;
use axum::{
    body::Bytes,
    extract::{Path, State},
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
        .route("/register", post(register))
        .route("/login", post(login))
        .route("/users/{id}", get(get_user))
}

/// Names supplied at registration.
///
/// Unknown fields (including any client-chosen `user_id`) are ignored.
#[derive(Deserialize, Validate)]
struct RegisterRequest {
    #[validate(length(min = 1, max = 100))]
    first_name: String,
    #[validate(length(min = 1, max = 100))]
    last_name: String,
}

/// Names supplied at login. Any well-formed pair is looked up as-is, so a
/// name no user could have simply fails to match.
#[derive(Deserialize, Validate)]
struct LoginRequest {
    first_name: String,
    last_name: String,
}

#[derive(Serialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct UserIdResponse {
    pub message: String,
    pub user_id: String,
}

async fn register(
    State(state): State<Arc<AppState>>,
    body: Bytes,
) -> Result<(StatusCode, Json<UserIdResponse>)> {
    let request: RegisterRequest = parse_json_body(&body)?;
    let user = state
        .users
        .register(&request.first_name, &request.last_name)
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(UserIdResponse {
            message: "User registered successfully".to_string(),
            user_id: user.user_id,
        }),
    ))
}

async fn login(
    State(state): State<Arc<AppState>>,
    body: Bytes,
) -> Result<Json<UserIdResponse>> {
    let request: LoginRequest = parse_json_body(&body)?;
    let user = state
        .users
        .login(&request.first_name, &request.last_name)
        .await?;

    Ok(Json(UserIdResponse {
        message: "Login successful".to_string(),
        user_id: user.user_id,
    }))
}

async fn get_user(
    State(state): State<Arc<AppState>>,
    Path(user_id): Path<String>,
) -> Result<Json<User>> {
    Ok(Json(state.users.get(&user_id).await?))
}
