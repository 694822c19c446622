// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Workout Tracker: backend API for a workout-tracking app
//!
//! Users register and log in by name, browse workouts assembled with their
//! exercises, and record per-exercise results for each session.

pub mod config;
pub mod db;
pub mod error;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod services;
pub mod time_utils;

use config::Config;
use db::WorkoutStore;
use services::{UserService, WorkoutLogService, WorkoutService};
use std::sync::Arc;

/// Shared application state.
pub struct AppState {
    pub config: Config,
    pub users: UserService,
    pub workouts: WorkoutService,
    pub logs: WorkoutLogService,
}

impl AppState {
    /// Wire every service to the same store handle.
    pub fn new(config: Config, store: Arc<dyn WorkoutStore>) -> Self {
        Self {
            config,
            users: UserService::new(store.clone()),
            workouts: WorkoutService::new(store.clone()),
            logs: WorkoutLogService::new(store),
        }
    }
}
