// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Workout Tracker API Server
//!
//! Serves registration, login, workout assembly and workout logging over
//! HTTP, backed by Firestore.

use anyhow::Context;
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use workout_tracker::{config::Config, db::FirestoreDb, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize structured JSON logging for GCP
    init_logging()?;

    // Load configuration from environment
    let config = Config::from_env().context("Failed to load configuration")?;
    tracing::info!(port = config.port, "Starting Workout Tracker API");

    // The store connection is made once; without it nothing can be served.
    let db = match FirestoreDb::new(&config.gcp_project_id, config.collections.clone()).await {
        Ok(db) => db,
        Err(e) => {
            tracing::error!(error = %e, "Failed to connect to Firestore");
            return Err(anyhow::Error::new(e).context("Failed to connect to Firestore"));
        }
    };

    let state = Arc::new(AppState::new(config.clone(), Arc::new(db)));

    // Build router
    let app = workout_tracker::routes::create_router(state);

    // Start server
    let addr = format!("0.0.0.0:{}", config.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    tracing::info!(address = %addr, "Server listening");

    axum::serve(listener, app).await?;
    Ok(())
}

/// Initialize structured JSON logging (GCP-compliant).
fn init_logging() -> anyhow::Result<()> {
    let format = tracing_subscriber::fmt::layer()
        .json()
        .with_target(false)
        .with_current_span(true)
        .flatten_event(true);

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("workout_tracker=debug".parse()?)
                .add_directive("info".parse()?),
        )
        .with(format)
        .init();
    Ok(())
}
