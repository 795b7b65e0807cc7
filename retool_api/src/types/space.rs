//! Spaces: child organizations, available when Spaces are enabled.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Unique identifier for a space.
pub type SpaceID = String;

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Space {
    pub id: SpaceID,
    pub name: String,
    pub domain: String,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

/// What to copy from the current space into a new one.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct CreateSpaceOptions {
    pub copy_sso_settings: bool,
    pub copy_branding_and_theme_settings: bool,
    /// Ids of users made admins of the new space.
    pub users_to_copy_as_admins: Vec<String>,
    pub create_admin_user: bool,
}
