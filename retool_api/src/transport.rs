//! Transport that authenticates every outgoing request.

use reqwest::header::{HeaderValue, AUTHORIZATION, CONTENT_TYPE};
use reqwest::{Request, Response};

use crate::Error;

/// Wraps a [`reqwest::Client`] and stamps a bearer token and a default JSON
/// content type onto each request before handing it to the inner client.
///
/// Only headers are touched. Errors from the inner client are returned as-is.
#[derive(Clone)]
pub struct AuthenticatingTransport {
    authorization: HeaderValue,
    inner: reqwest::Client,
}

impl std::fmt::Debug for AuthenticatingTransport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthenticatingTransport").finish_non_exhaustive()
    }
}

impl AuthenticatingTransport {
    pub fn new(api_key: &str, inner: reqwest::Client) -> Result<Self, Error> {
        let mut authorization = HeaderValue::from_str(&format!("Bearer {}", api_key))
            .map_err(|_| Error::InvalidApiKey)?;
        authorization.set_sensitive(true);
        Ok(Self {
            authorization,
            inner,
        })
    }

    /// Sets `Authorization: Bearer <key>` and, unless the caller already chose
    /// one, `Content-Type: application/json`.
    pub fn authorize(&self, request: &mut Request) {
        let headers = request.headers_mut();
        headers.insert(AUTHORIZATION, self.authorization.clone());
        if !headers.contains_key(CONTENT_TYPE) {
            headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        }
    }

    pub async fn execute(&self, mut request: Request) -> Result<Response, reqwest::Error> {
        self.authorize(&mut request);
        tracing::debug!("{} {}", request.method(), request.url());
        self.inner.execute(request).await
    }

    /// The client requests are delegated to, for building requests.
    pub fn inner(&self) -> &reqwest::Client {
        &self.inner
    }
}
