use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::FolderType;

/// Unique identifier for a folder (e.g. "folder_123").
pub type FolderID = String;

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Folder {
    pub id: FolderID,
    #[serde(default)]
    pub legacy_id: Option<String>,
    pub name: String,
    #[serde(default)]
    pub parent_folder_id: Option<FolderID>,
    #[serde(default)]
    pub is_system_folder: bool,
    #[serde(default)]
    pub folder_type: Option<FolderType>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

/// Request body for creating a folder.
#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct NewFolder {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent_folder_id: Option<FolderID>,
    pub folder_type: FolderType,
}
