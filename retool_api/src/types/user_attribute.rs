use serde::{Deserialize, Serialize};

/// A name/value attribute attached to a user's metadata.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct UserAttribute {
    pub name: String,
    pub value: String,
}

impl UserAttribute {
    pub fn new(name: &str, value: &str) -> Self {
        Self {
            name: name.to_string(),
            value: value.to_string(),
        }
    }
}

/// A user attribute defined at the organization level.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct OrganizationAttribute {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub label: Option<String>,
    #[serde(default)]
    pub data_type: Option<String>,
    #[serde(default)]
    pub default_value: Option<String>,
    #[serde(default)]
    pub intercom_attribute_name: Option<String>,
}
