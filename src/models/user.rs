//! User model for storage and API.

use serde::{Deserialize, Serialize};
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

/// User profile stored in Firestore.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct User {
    /// Generated user ID (also used as document ID)
    pub user_id: String,
    /// First name
    pub first_name: String,
    /// Last name
    pub last_name: String,
}

impl User {
    /// Build a new user with a freshly generated ID.
    pub fn new(first_name: impl Into<String>, last_name: impl Into<String>) -> Self {
        Self {
            user_id: uuid::Uuid::new_v4().to_string(),
            first_name: first_name.into(),
            last_name: last_name.into(),
        }
    }
}
