use reqwest::Method;
use serde::Serialize;

use super::OperationsBody;
use crate::{
    types::{validate_operations, Group, GroupID, Member, UpdateOperation},
    Client, Error,
};

#[derive(Serialize)]
struct MembersBody<'a> {
    members: &'a [Member],
}

/// Group endpoints. Reads need the "Groups > Read" scope, writes "Groups > Write".
impl Client {
    pub async fn get_group(&self, id: GroupID) -> Result<Option<Group>, Error> {
        let url = self.endpoint_url(&["groups", id.to_string().as_str()])?;
        self.request_single::<_, ()>(Method::GET, url, None).await
    }

    /// Lists every permission group of the organization or space.
    pub async fn list_groups(&self) -> Result<Vec<Group>, Error> {
        let url = self.endpoint_url(&["groups"])?;
        self.request_collection(url).await
    }

    /// Validates and creates `group`, returning the stored group.
    pub async fn create_group(&self, group: &Group) -> Result<Option<Group>, Error> {
        group.validate()?;
        let url = self.endpoint_url(&["groups"])?;
        self.request_single(Method::POST, url, Some(group)).await
    }

    /// Applies JSON-Patch style `operations` to a group.
    pub async fn update_group(
        &self,
        id: GroupID,
        operations: &[UpdateOperation],
    ) -> Result<Option<Group>, Error> {
        validate_operations(operations)?;
        let url = self.endpoint_url(&["groups", id.to_string().as_str()])?;
        let body = OperationsBody { operations };
        self.request_single(Method::PATCH, url, Some(&body)).await
    }

    pub async fn delete_group(&self, id: GroupID) -> Result<(), Error> {
        let url = self.endpoint_url(&["groups", id.to_string().as_str()])?;
        self.request_single::<serde_json::Value, ()>(Method::DELETE, url, None)
            .await?;
        Ok(())
    }

    /// Adds `members` to a group. `is_group_admin` sets or unsets group admins.
    pub async fn add_users_to_group(
        &self,
        group_id: GroupID,
        members: &[Member],
    ) -> Result<Option<Group>, Error> {
        if members.is_empty() {
            return Err(Error::InvalidInput("no members provided".to_string()));
        }
        let url = self.endpoint_url(&["groups", group_id.to_string().as_str(), "members"])?;
        let body = MembersBody { members };
        self.request_single(Method::POST, url, Some(&body)).await
    }

    pub async fn remove_user_from_group(
        &self,
        group_id: GroupID,
        user_id: &str,
    ) -> Result<Option<Group>, Error> {
        let url = self.endpoint_url(&["groups", group_id.to_string().as_str(), "members", user_id])?;
        self.request_single::<_, ()>(Method::DELETE, url, None).await
    }
}
