use reqwest::Method;
use serde::Serialize;

use crate::{
    types::{CreateSpaceOptions, Space},
    Client, Error,
};

#[derive(Serialize)]
struct SpaceBody<'a> {
    name: &'a str,
    domain: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    options: Option<&'a CreateSpaceOptions>,
}

/// Space endpoints, available for orgs with Spaces enabled. Reads need the
/// "Spaces > Read" scope, writes "Spaces > Write".
impl Client {
    pub async fn get_space(&self, id: &str) -> Result<Option<Space>, Error> {
        let url = self.endpoint_url(&["spaces", id])?;
        self.request_single::<_, ()>(Method::GET, url, None).await
    }

    /// Lists all child spaces of the current space.
    pub async fn list_spaces(&self) -> Result<Vec<Space>, Error> {
        let url = self.endpoint_url(&["spaces"])?;
        self.request_collection(url).await
    }

    /// Creates a child space.
    pub async fn create_space(
        &self,
        name: &str,
        domain: &str,
        options: Option<&CreateSpaceOptions>,
    ) -> Result<Option<Space>, Error> {
        let url = self.endpoint_url(&["spaces"])?;
        let body = SpaceBody {
            name,
            domain,
            options,
        };
        self.request_single(Method::POST, url, Some(&body)).await
    }

    /// Replaces the name and domain of a space.
    pub async fn update_space(&self, id: &str, name: &str, domain: &str) -> Result<Option<Space>, Error> {
        let url = self.endpoint_url(&["spaces", id])?;
        let body = SpaceBody {
            name,
            domain,
            options: None,
        };
        self.request_single(Method::PUT, url, Some(&body)).await
    }

    pub async fn delete_space(&self, id: &str) -> Result<(), Error> {
        let url = self.endpoint_url(&["spaces", id])?;
        self.request_single::<serde_json::Value, ()>(Method::DELETE, url, None)
            .await?;
        Ok(())
    }
}
