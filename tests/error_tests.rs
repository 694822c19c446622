// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

use axum::http::StatusCode;
use axum::response::IntoResponse;
use workout_tracker::error::AppError;

async fn render(err: AppError) -> (StatusCode, serde_json::Value) {
    let response = err.into_response();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), 4096)
        .await
        .unwrap();
    (status, serde_json::from_slice(&bytes).unwrap())
}

#[tokio::test]
async fn test_status_and_code_per_variant() {
    let cases = [
        (
            AppError::InvalidCredentials,
            StatusCode::UNAUTHORIZED,
            "invalid_credentials",
        ),
        (
            AppError::NotFound("Workout not found".to_string()),
            StatusCode::NOT_FOUND,
            "not_found",
        ),
        (
            AppError::invalid_body(),
            StatusCode::BAD_REQUEST,
            "bad_request",
        ),
        (
            AppError::Database("deadline exceeded".to_string()),
            StatusCode::INTERNAL_SERVER_ERROR,
            "database_error",
        ),
        (
            AppError::Internal(anyhow::anyhow!("boom")),
            StatusCode::INTERNAL_SERVER_ERROR,
            "internal_error",
        ),
    ];

    for (err, status, code) in cases {
        let (got_status, body) = render(err).await;
        assert_eq!(got_status, status);
        assert_eq!(body["error"], code);
    }
}

#[tokio::test]
async fn test_database_error_details_are_raw() {
    let (_, body) = render(AppError::Database("permission denied on users".to_string())).await;
    assert_eq!(body["details"], "permission denied on users");
}

#[tokio::test]
async fn test_internal_error_hides_details() {
    let (_, body) = render(AppError::Internal(anyhow::anyhow!("secret path"))).await;
    assert!(body.get("details").is_none());
}

#[test]
fn test_invalid_body_message() {
    let err = AppError::invalid_body();
    assert!(matches!(err, AppError::BadRequest(ref m) if m == AppError::INVALID_BODY));
}
