//! Permission groups and their members.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{AccessLevel, UserType};
use crate::Error;

/// Numeric identifier for a group.
pub type GroupID = i64;

/// A permission group. Also used as the request body when creating one, so
/// server-assigned fields are skipped when unset.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct Group {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<GroupID>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub legacy_id: Option<i64>,

    pub name: String,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub members: Vec<Member>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub universal_app_access: Option<AccessLevel>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub universal_resource_access: Option<AccessLevel>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub universal_workflow_access: Option<AccessLevel>,

    /// Cannot be [`AccessLevel::Own`].
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub universal_query_library_access: Option<AccessLevel>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub user_invites: Vec<UserInvite>,

    #[serde(default)]
    pub user_list_access: bool,

    #[serde(default)]
    pub audit_log_access: bool,

    #[serde(default)]
    pub unpublished_release_access: bool,

    #[serde(default)]
    pub usage_analytics_access: bool,

    #[serde(default)]
    pub theme_access: bool,

    #[serde(default)]
    pub account_details_access: bool,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub landing_page_app_id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Group {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            ..Self::default()
        }
    }

    pub fn with_universal_app_access(mut self, level: AccessLevel) -> Self {
        self.universal_app_access = Some(level);
        self
    }

    pub fn with_universal_resource_access(mut self, level: AccessLevel) -> Self {
        self.universal_resource_access = Some(level);
        self
    }

    pub fn with_universal_workflow_access(mut self, level: AccessLevel) -> Self {
        self.universal_workflow_access = Some(level);
        self
    }

    pub fn with_universal_query_library_access(mut self, level: AccessLevel) -> Self {
        self.universal_query_library_access = Some(level);
        self
    }

    /// Checks the access levels before the group is sent to the server.
    pub fn validate(&self) -> Result<(), Error> {
        if let Some(level) = self.universal_query_library_access {
            if !level.valid_for_query_library() {
                return Err(Error::InvalidInput(format!(
                    "invalid value for universal_query_library_access: {}",
                    level
                )));
            }
        }
        Ok(())
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Member {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default)]
    pub is_group_admin: bool,
}

impl Member {
    pub fn new(id: &str, is_group_admin: bool) -> Self {
        Self {
            id: id.to_string(),
            email: None,
            is_group_admin,
        }
    }
}

/// A pending invitation into a group.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct UserInvite {
    pub id: i64,
    #[serde(default)]
    pub legacy_id: Option<i64>,
    #[serde(default)]
    pub invited_by: Option<String>,
    pub invited_email: String,
    #[serde(default)]
    pub expires_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub claimed_by: Option<String>,
    #[serde(default)]
    pub claimed_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub user_type: Option<UserType>,
    #[serde(default)]
    pub metadata: Option<serde_json::Value>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub invite_link: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn query_library_cannot_be_owned() {
        let group = Group::new("Support").with_universal_query_library_access(AccessLevel::Own);
        assert_eq!(
            group.validate().unwrap_err().to_string(),
            "invalid value for universal_query_library_access: own"
        );

        let group = Group::new("Support")
            .with_universal_app_access(AccessLevel::Own)
            .with_universal_query_library_access(AccessLevel::Edit);
        assert!(group.validate().is_ok());
    }

    #[test]
    fn create_body_skips_server_fields() {
        let body = serde_json::to_value(
            Group::new("Support").with_universal_resource_access(AccessLevel::Use),
        )
        .unwrap();
        assert!(body.get("id").is_none());
        assert!(body.get("created_at").is_none());
        assert!(body.get("members").is_none());
        assert_eq!(body["name"], "Support");
        assert_eq!(body["universal_resource_access"], "use");
        assert_eq!(body["user_list_access"], false);
    }
}
