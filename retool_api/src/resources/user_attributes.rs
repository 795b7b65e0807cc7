use reqwest::Method;
use serde_json::{Map, Value};

use crate::{
    types::{OrganizationAttribute, UserAttribute},
    Client, Error,
};

/// User attribute endpoints. Reads need the "User attributes > Read" scope,
/// writes "User attributes > Write".
impl Client {
    /// Sets `attributes` on a user and returns the user's resulting metadata.
    pub async fn update_user_attributes(
        &self,
        user_id: &str,
        attributes: &[UserAttribute],
    ) -> Result<Map<String, Value>, Error> {
        if attributes.is_empty() {
            return Err(Error::InvalidInput("no attributes provided".to_string()));
        }
        let url = self.endpoint_url(&["users", user_id, "user_attributes"])?;
        let data: Option<Value> = self.request_single(Method::POST, url, Some(attributes)).await?;
        Ok(metadata_of(data).unwrap_or_default())
    }

    /// Removes one attribute and returns the user's remaining metadata, if any.
    pub async fn delete_user_attribute(&self, user_id: &str, name: &str) -> Result<Option<Value>, Error> {
        let url = self.endpoint_url(&["users", user_id, "user_attributes", name])?;
        let data: Option<Value> = self.request_single::<_, ()>(Method::DELETE, url, None).await?;
        Ok(metadata_of(data).map(Value::Object))
    }

    /// Lists the attributes defined for the organization.
    pub async fn list_organization_attributes(&self) -> Result<Vec<OrganizationAttribute>, Error> {
        let url = self.endpoint_url(&["user_attributes"])?;
        self.request_collection(url).await
    }
}

fn metadata_of(data: Option<Value>) -> Option<Map<String, Value>> {
    match data?.get_mut("metadata")?.take() {
        Value::Object(map) => Some(map),
        _ => None,
    }
}
