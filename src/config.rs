//! Application configuration loaded from environment variables.
//!
//! Everything is read once at startup; a missing or malformed value stops the
//! process before any request is served.

use crate::db::Collections;
use std::env;

/// Application configuration, loaded once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    /// GCP project hosting the Firestore database
    pub gcp_project_id: String,
    /// Frontend URL allowed by CORS
    pub frontend_url: String,
    /// Server port
    pub port: u16,
    /// Backing collection names
    pub collections: Collections,
}

impl Config {
    /// Config for tests only.
    pub fn test_default() -> Self {
        Self {
            gcp_project_id: "test-project".to_string(),
            frontend_url: "http://localhost:5173".to_string(),
            port: 8080,
            collections: Collections::default(),
        }
    }

    /// Load configuration from environment variables.
    ///
    /// A `.env` file in the working directory is honored for local development.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok(); // Load .env file if present

        let port = match env::var("PORT") {
            Ok(raw) => raw.trim().parse().map_err(|_| ConfigError::Invalid {
                name: "PORT",
                value: raw,
            })?,
            Err(_) => 8080,
        };

        let defaults = Collections::default();
        let collections = Collections {
            users: env_or("USERS_COLLECTION", defaults.users),
            workouts: env_or("WORKOUTS_COLLECTION", defaults.workouts),
            exercises: env_or("EXERCISES_COLLECTION", defaults.exercises),
            workout_exercises: env_or("WORKOUT_EXERCISES_COLLECTION", defaults.workout_exercises),
            user_workouts: env_or("USER_WORKOUTS_COLLECTION", defaults.user_workouts),
            user_workout_logs: env_or("USER_WORKOUT_LOGS_COLLECTION", defaults.user_workout_logs),
        };

        Ok(Self {
            gcp_project_id: env::var("GCP_PROJECT_ID")
                .map(|v| v.trim().to_string())
                .map_err(|_| ConfigError::Missing("GCP_PROJECT_ID"))?,
            frontend_url: env::var("FRONTEND_URL")
                .unwrap_or_else(|_| "http://localhost:5173".to_string()),
            port,
            collections,
        })
    }
}

fn env_or(name: &str, default: String) -> String {
    env::var(name)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
        .unwrap_or(default)
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    Missing(&'static str),

    #[error("Invalid value for {name}: {value:?}")]
    Invalid { name: &'static str, value: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    // Environment is process-global, so every env-mutating assertion lives in
    // this one test.
    #[test]
    fn test_config_from_env() {
        env::set_var("GCP_PROJECT_ID", "workouts-prod");
        env::set_var("WORKOUTS_COLLECTION", "workouts_v2");
        env::set_var("EXERCISES_COLLECTION", "  ");
        env::remove_var("PORT");

        let config = Config::from_env().expect("Config should load");

        assert_eq!(config.gcp_project_id, "workouts-prod");
        assert_eq!(config.port, 8080);
        assert_eq!(config.collections.workouts, "workouts_v2");
        assert_eq!(config.collections.exercises, "exercises");
        assert_eq!(config.collections.users, "users");

        env::set_var("PORT", "not-a-port");
        let err = Config::from_env().unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { name: "PORT", .. }));

        env::set_var("PORT", "9090");
        env::remove_var("GCP_PROJECT_ID");
        let err = Config::from_env().unwrap_err();
        assert!(matches!(err, ConfigError::Missing("GCP_PROJECT_ID")));

        env::remove_var("PORT");
        env::remove_var("WORKOUTS_COLLECTION");
        env::remove_var("EXERCISES_COLLECTION");
    }
}
