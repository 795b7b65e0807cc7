//! User records returned by the `/users` endpoints.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::UserType;

/// Unique identifier for a user (e.g. "user_8a1b2c").
pub type UserID = String;

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct User {
    pub id: UserID,

    #[serde(default)]
    pub legacy_id: Option<i64>,

    pub email: String,

    #[serde(default)]
    pub active: bool,

    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,

    /// `None` for users that never signed in.
    #[serde(default)]
    pub last_active: Option<DateTime<Utc>>,

    #[serde(default)]
    pub first_name: Option<String>,

    #[serde(default)]
    pub last_name: Option<String>,

    /// Free-form user attributes, keyed by attribute name.
    #[serde(default)]
    pub metadata: Option<serde_json::Value>,

    #[serde(default)]
    pub is_admin: bool,

    #[serde(default)]
    pub user_type: Option<UserType>,
}

impl User {
    /// First and last name joined, falling back to the email address.
    pub fn display_name(&self) -> String {
        let name = [self.first_name.as_deref(), self.last_name.as_deref()]
            .into_iter()
            .flatten()
            .filter(|part| !part.is_empty())
            .collect::<Vec<_>>()
            .join(" ");
        if name.is_empty() {
            self.email.clone()
        } else {
            name
        }
    }
}
