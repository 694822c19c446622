// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! User registration and name-based login.
//!
//! Login is an identity lookup by (first_name, last_name). No secret is
//! checked.

use crate::db::WorkoutStore;
use crate::error::{AppError, Result};
use crate::models::User;
use std::sync::Arc;

#[derive(Clone)]
pub struct UserService {
    store: Arc<dyn WorkoutStore>,
}

impl UserService {
    pub fn new(store: Arc<dyn WorkoutStore>) -> Self {
        Self { store }
    }

    /// Create a user under a freshly generated ID.
    ///
    /// The store is not checked for an existing user with the same names.
    pub async fn register(&self, first_name: &str, last_name: &str) -> Result<User> {
        let user = User::new(first_name, last_name);
        self.store.put_user(&user).await?;

        tracing::info!(user_id = %user.user_id, "Registered user");
        Ok(user)
    }

    /// Find the user with exactly these names.
    ///
    /// With several matches, the first one in store order wins.
    pub async fn login(&self, first_name: &str, last_name: &str) -> Result<User> {
        let matches = self.store.find_users_by_name(first_name, last_name).await?;
        if matches.len() > 1 {
            tracing::warn!(count = matches.len(), "Multiple users share login names");
        }

        let user = matches
            .into_iter()
            .next()
            .ok_or(AppError::InvalidCredentials)?;

        tracing::info!(user_id = %user.user_id, "User logged in");
        Ok(user)
    }

    pub async fn get(&self, user_id: &str) -> Result<User> {
        self.store
            .get_user(user_id)
            .await?
            .ok_or_else(|| AppError::NotFound("User not found".to_string()))
    }
}
