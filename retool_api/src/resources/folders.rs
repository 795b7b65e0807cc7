use reqwest::Method;

use super::OperationsBody;
use crate::{
    types::{validate_operations, Folder, FolderType, NewFolder, UpdateOperation},
    Client, Error,
};

/// Folder endpoints. Reads need the "Folders > Read" scope, writes "Folders > Write".
impl Client {
    pub async fn get_folder(&self, id: &str) -> Result<Option<Folder>, Error> {
        let url = self.endpoint_url(&["folders", id])?;
        self.request_single::<_, ()>(Method::GET, url, None).await
    }

    pub async fn list_folders(&self) -> Result<Vec<Folder>, Error> {
        let url = self.endpoint_url(&["folders"])?;
        self.request_collection(url).await
    }

    /// Creates a folder, at the top level unless `parent_folder_id` is given.
    pub async fn create_folder(
        &self,
        name: &str,
        parent_folder_id: Option<&str>,
        folder_type: FolderType,
    ) -> Result<Option<Folder>, Error> {
        if name.is_empty() {
            return Err(Error::InvalidInput("name is required".to_string()));
        }
        let body = NewFolder {
            name: name.to_string(),
            parent_folder_id: parent_folder_id
                .filter(|id| !id.is_empty())
                .map(str::to_string),
            folder_type,
        };
        let url = self.endpoint_url(&["folders"])?;
        self.request_single(Method::POST, url, Some(&body)).await
    }

    pub async fn update_folder(
        &self,
        id: &str,
        operations: &[UpdateOperation],
    ) -> Result<Option<Folder>, Error> {
        validate_operations(operations)?;
        let url = self.endpoint_url(&["folders", id])?;
        let body = OperationsBody { operations };
        self.request_single(Method::PATCH, url, Some(&body)).await
    }

    pub async fn delete_folder(&self, id: &str) -> Result<(), Error> {
        let url = self.endpoint_url(&["folders", id])?;
        self.request_single::<serde_json::Value, ()>(Method::DELETE, url, None)
            .await?;
        Ok(())
    }
}
