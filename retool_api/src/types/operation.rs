//! Update operations shared by the group and folder PATCH endpoints.

use serde::{Deserialize, Serialize};

use super::OperationKind;
use crate::Error;

/// One JSON-Patch style change.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct UpdateOperation {
    pub op: OperationKind,
    pub path: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<serde_json::Value>,
}

impl UpdateOperation {
    pub fn add(path: &str, value: impl Into<serde_json::Value>) -> Self {
        Self {
            op: OperationKind::Add,
            path: path.to_string(),
            value: Some(value.into()),
        }
    }

    pub fn replace(path: &str, value: impl Into<serde_json::Value>) -> Self {
        Self {
            op: OperationKind::Replace,
            path: path.to_string(),
            value: Some(value.into()),
        }
    }

    pub fn remove(path: &str) -> Self {
        Self {
            op: OperationKind::Remove,
            path: path.to_string(),
            value: None,
        }
    }

    /// Path must be set, and every op but `remove` needs a non-empty value.
    pub fn validate(&self) -> Result<(), Error> {
        if self.path.is_empty() {
            return Err(Error::InvalidInput("path cannot be empty".to_string()));
        }
        let missing_value = match &self.value {
            None | Some(serde_json::Value::Null) => true,
            Some(serde_json::Value::String(s)) => s.is_empty(),
            Some(_) => false,
        };
        if self.op != OperationKind::Remove && missing_value {
            return Err(Error::InvalidInput(format!(
                "value cannot be empty for {} operation",
                self.op
            )));
        }
        Ok(())
    }
}

/// Validates a non-empty batch of operations.
pub(crate) fn validate_operations(operations: &[UpdateOperation]) -> Result<(), Error> {
    if operations.is_empty() {
        return Err(Error::InvalidInput("no operations provided".to_string()));
    }
    for op in operations {
        op.validate().map_err(|e| {
            Error::InvalidInput(format!("validation failed for operation: {}", e))
        })?;
    }
    Ok(())
}
