//! Configuration variables and their per-environment values.

use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ConfigurationVariable {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub secret: bool,
    #[serde(default)]
    pub values: Vec<EnvironmentValue>,
}

/// The value a variable takes in one environment.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct EnvironmentValue {
    pub environment_id: String,
    pub value: String,
}

/// Request body for creating or replacing a configuration variable.
#[derive(Serialize, Clone, Debug, Default, PartialEq)]
pub struct ConfigurationVariableInput {
    pub name: String,
    pub description: String,
    pub secret: bool,
    pub values: Vec<EnvironmentValue>,
}
