use reqwest::Method;

use crate::{
    query::UserQuery,
    types::User,
    Client, Error,
};

/// Failure message the server sends for an unknown but well-formed user id.
pub const USER_NOT_FOUND: &str = "User not found";

impl Client {
    /// Fetches a user by id.
    ///
    /// Returns `Ok(None)` when the server reports [`USER_NOT_FOUND`]. Any other
    /// failure message, e.g. for a misformatted id, is returned as
    /// [`Error::Api`]. The API token needs the "Users > Read" scope.
    pub async fn get_user(&self, id: &str) -> Result<Option<User>, Error> {
        let url = self.endpoint_url(&["users", id])?;
        match self.request_single::<User, ()>(Method::GET, url, None).await {
            Err(Error::Api(message)) if message == USER_NOT_FOUND => {
                tracing::debug!("User {} not found", id);
                Ok(None)
            }
            result => result,
        }
    }

    /// Lists every user matching `query`, following pagination.
    pub async fn list_users(&self, query: &UserQuery) -> Result<Vec<User>, Error> {
        let url = self.url_with_query("/users", query)?;
        self.request_collection(url).await
    }
}
