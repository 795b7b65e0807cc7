//! Closed sets of string values the API accepts.
//!
//! Each enum serializes to its wire name, renders it with `Display`, and
//! parses it back with `FromStr`, which is where invalid input is rejected.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::Error;

/// Access level granted on apps, resources, workflows, folders and query library.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum AccessLevel {
    None,
    Use,
    Edit,
    Own,
}

impl AccessLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            AccessLevel::None => "none",
            AccessLevel::Use => "use",
            AccessLevel::Edit => "edit",
            AccessLevel::Own => "own",
        }
    }

    /// The query library has no owners.
    pub fn valid_for_query_library(&self) -> bool {
        !matches!(self, AccessLevel::Own)
    }
}

impl std::fmt::Display for AccessLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for AccessLevel {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "none" => Ok(AccessLevel::None),
            "use" => Ok(AccessLevel::Use),
            "edit" => Ok(AccessLevel::Edit),
            "own" => Ok(AccessLevel::Own),
            _ => Err(Error::InvalidInput(format!("invalid access level: {}", s))),
        }
    }
}

/// Kind of object a permission applies to.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[serde(rename_all = "camelCase")]
pub enum ObjectType {
    App,
    Folder,
    Resource,
    ResourceConfiguration,
}

impl ObjectType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ObjectType::App => "app",
            ObjectType::Folder => "folder",
            ObjectType::Resource => "resource",
            ObjectType::ResourceConfiguration => "resourceConfiguration",
        }
    }
}

impl std::fmt::Display for ObjectType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ObjectType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "app" => Ok(ObjectType::App),
            "folder" => Ok(ObjectType::Folder),
            "resource" => Ok(ObjectType::Resource),
            "resourceConfiguration" => Ok(ObjectType::ResourceConfiguration),
            _ => Err(Error::InvalidInput(format!("invalid object type: {}", s))),
        }
    }
}

/// JSON-Patch style operation used by update endpoints.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum OperationKind {
    Add,
    Remove,
    Replace,
}

impl OperationKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            OperationKind::Add => "add",
            OperationKind::Remove => "remove",
            OperationKind::Replace => "replace",
        }
    }
}

impl std::fmt::Display for OperationKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for OperationKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "add" => Ok(OperationKind::Add),
            "remove" => Ok(OperationKind::Remove),
            "replace" => Ok(OperationKind::Replace),
            _ => Err(Error::InvalidInput(format!("invalid operation type: {}", s))),
        }
    }
}

/// Seat type of a user or invite.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum UserType {
    Default,
    Mobile,
    Embed,
}

impl UserType {
    pub fn as_str(&self) -> &'static str {
        match self {
            UserType::Default => "default",
            UserType::Mobile => "mobile",
            UserType::Embed => "embed",
        }
    }
}

impl std::fmt::Display for UserType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for UserType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "default" => Ok(UserType::Default),
            "mobile" => Ok(UserType::Mobile),
            "embed" => Ok(UserType::Embed),
            _ => Err(Error::InvalidInput(format!("invalid user type: {}", s))),
        }
    }
}

/// What a folder holds.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum FolderType {
    Workflow,
    App,
    Resource,
}

impl FolderType {
    pub fn as_str(&self) -> &'static str {
        match self {
            FolderType::Workflow => "workflow",
            FolderType::App => "app",
            FolderType::Resource => "resource",
        }
    }
}

impl std::fmt::Display for FolderType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for FolderType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "workflow" => Ok(FolderType::Workflow),
            "app" => Ok(FolderType::App),
            "resource" => Ok(FolderType::Resource),
            _ => Err(Error::InvalidInput(format!("invalid folder type: {}", s))),
        }
    }
}

/// Who a permission is granted to.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[serde(rename_all = "camelCase")]
pub enum SubjectKind {
    Group,
    User,
    UserInvite,
}

impl SubjectKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            SubjectKind::Group => "group",
            SubjectKind::User => "user",
            SubjectKind::UserInvite => "userInvite",
        }
    }
}

impl std::fmt::Display for SubjectKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for SubjectKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "group" => Ok(SubjectKind::Group),
            "user" => Ok(SubjectKind::User),
            "userInvite" => Ok(SubjectKind::UserInvite),
            _ => Err(Error::InvalidInput(format!("invalid subject: {}", s))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wire_names_match_display() {
        for level in [AccessLevel::None, AccessLevel::Use, AccessLevel::Edit, AccessLevel::Own] {
            assert_eq!(serde_json::to_value(level).unwrap(), level.to_string());
            assert_eq!(level.as_str().parse::<AccessLevel>().unwrap(), level);
        }
        for kind in [
            ObjectType::App,
            ObjectType::Folder,
            ObjectType::Resource,
            ObjectType::ResourceConfiguration,
        ] {
            assert_eq!(serde_json::to_value(kind).unwrap(), kind.to_string());
            assert_eq!(kind.as_str().parse::<ObjectType>().unwrap(), kind);
        }
        assert_eq!(
            serde_json::to_value(SubjectKind::UserInvite).unwrap(),
            "userInvite"
        );
        assert_eq!(serde_json::to_value(FolderType::Workflow).unwrap(), "workflow");
        assert_eq!(serde_json::to_value(UserType::Embed).unwrap(), "embed");
        assert_eq!(serde_json::to_value(OperationKind::Replace).unwrap(), "replace");
    }

    #[test]
    fn rejects_unknown_values() {
        assert_eq!(
            "admin".parse::<AccessLevel>().unwrap_err().to_string(),
            "invalid access level: admin"
        );
        assert_eq!(
            "page".parse::<ObjectType>().unwrap_err().to_string(),
            "invalid object type: page"
        );
        assert_eq!(
            "move".parse::<OperationKind>().unwrap_err().to_string(),
            "invalid operation type: move"
        );
        assert!("guest".parse::<UserType>().is_err());
        assert!("invalid".parse::<FolderType>().is_err());
        assert!("team".parse::<SubjectKind>().is_err());
        // Wire names are case sensitive.
        assert!("App".parse::<ObjectType>().is_err());
    }

    #[test]
    fn query_library_has_no_owner_level() {
        assert!(AccessLevel::Edit.valid_for_query_library());
        assert!(!AccessLevel::Own.valid_for_query_library());
    }
}
