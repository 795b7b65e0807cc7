//! Permission subjects, objects and access lists.

use serde::{Deserialize, Deserializer, Serialize};

use super::{AccessLevel, GroupID, ObjectType, SubjectKind, UserID};

/// A group, user, invite or object reference as returned by the permission
/// endpoints. Ids come back as strings or numbers depending on the kind.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Subject {
    #[serde(deserialize_with = "string_or_number")]
    pub id: String,
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub access_level: Option<AccessLevel>,
}

/// Why a subject has access.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct AccessSources {
    #[serde(default)]
    pub direct: bool,
    #[serde(default)]
    pub universal: bool,
    #[serde(default)]
    pub groups: Vec<Subject>,
    #[serde(default)]
    pub inherited: Option<Subject>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct AccessData {
    pub subject: Subject,
    #[serde(default)]
    pub sources: AccessSources,
    #[serde(rename = "accessLevel")]
    pub access_level: AccessLevel,
}

/// Everyone with access to one folder or app, grouped by subject kind.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct AccessList {
    #[serde(default)]
    pub group: Vec<AccessData>,
    #[serde(default)]
    pub user: Vec<AccessData>,
    #[serde(default, rename = "userInvite")]
    pub user_invite: Vec<AccessData>,
}

/// Who a permission is granted to or revoked from. Groups are addressed by
/// numeric id, users by string id.
#[derive(Serialize, Clone, Debug, PartialEq)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum PermissionSubject {
    Group { id: GroupID },
    User { id: UserID },
}

impl PermissionSubject {
    pub fn group(id: GroupID) -> Self {
        PermissionSubject::Group { id }
    }

    pub fn user(id: &str) -> Self {
        PermissionSubject::User { id: id.to_string() }
    }

    pub fn kind(&self) -> SubjectKind {
        match self {
            PermissionSubject::Group { .. } => SubjectKind::Group,
            PermissionSubject::User { .. } => SubjectKind::User,
        }
    }
}

/// The folder, app or resource a permission applies to.
#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct PermissionObject {
    pub id: String,
    #[serde(rename = "type")]
    pub object_type: ObjectType,
}

impl PermissionObject {
    pub fn new(object_type: ObjectType, id: &str) -> Self {
        Self {
            id: id.to_string(),
            object_type,
        }
    }
}

fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Id {
        Text(String),
        Number(i64),
    }

    Ok(match Id::deserialize(deserializer)? {
        Id::Text(s) => s,
        Id::Number(n) => n.to_string(),
    })
}
