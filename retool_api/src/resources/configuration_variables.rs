use reqwest::Method;

use crate::{
    types::{ConfigurationVariable, ConfigurationVariableInput},
    Client, Error,
};

/// Configuration variable endpoints, available on Retool 3.42+. Reads need the
/// "Configuration Variables > Read" scope, writes "Configuration Variables > Write".
impl Client {
    pub async fn get_configuration_variable(&self, id: &str) -> Result<Option<ConfigurationVariable>, Error> {
        let url = self.endpoint_url(&["configuration_variables", id])?;
        self.request_single::<_, ()>(Method::GET, url, None).await
    }

    pub async fn list_configuration_variables(&self) -> Result<Vec<ConfigurationVariable>, Error> {
        let url = self.endpoint_url(&["configuration_variables"])?;
        self.request_collection(url).await
    }

    pub async fn create_configuration_variable(
        &self,
        input: &ConfigurationVariableInput,
    ) -> Result<Option<ConfigurationVariable>, Error> {
        if input.name.is_empty() {
            return Err(Error::InvalidInput("name is required".to_string()));
        }
        let url = self.endpoint_url(&["configuration_variables"])?;
        self.request_single(Method::POST, url, Some(input)).await
    }

    /// Replaces a variable and all of its values.
    pub async fn update_configuration_variable(
        &self,
        id: &str,
        input: &ConfigurationVariableInput,
    ) -> Result<Option<ConfigurationVariable>, Error> {
        let url = self.endpoint_url(&["configuration_variables", id])?;
        self.request_single(Method::PUT, url, Some(input)).await
    }

    /// Deletes a variable together with its values.
    pub async fn delete_configuration_variable(&self, id: &str) -> Result<(), Error> {
        let url = self.endpoint_url(&["configuration_variables", id])?;
        self.request_single::<serde_json::Value, ()>(Method::DELETE, url, None)
            .await?;
        Ok(())
    }
}
