//! HTTP client for the Retool REST API.

use std::time::Instant;

use reqwest::{IntoUrl, Method, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;
use url::Url;

use crate::{
    config::{ClientConfig, ClientOption},
    envelope::{decode_page, decode_single},
    query::Query,
    transport::AuthenticatingTransport,
    Error,
};

/// HTTP client for the Retool REST API.
///
/// Holds an immutable [`ClientConfig`] and an [`AuthenticatingTransport`];
/// every call flows through [`Client::execute`]. A `Client` is cheap to clone
/// and safe to share between tasks.
#[derive(Clone, Debug)]
pub struct Client {
    config: ClientConfig,
    transport: AuthenticatingTransport,
}

impl Client {
    /// Creates a client with the default 10 second timeout.
    ///
    /// `endpoint` gets `https://` prepended when it carries no scheme.
    pub fn new(api_key: &str, endpoint: &str) -> Result<Self, Error> {
        Self::with_options(api_key, endpoint, [])
    }

    /// Creates a client, applying `options` in order.
    pub fn with_options<I>(api_key: &str, endpoint: &str, options: I) -> Result<Self, Error>
    where
        I: IntoIterator<Item = ClientOption>,
    {
        let config = ClientConfig::new(api_key, endpoint, options)?;
        let http = reqwest::Client::builder()
            .user_agent(config.user_agent())
            .timeout(config.timeout())
            .build()
            .map_err(|e| {
                tracing::error!("Failed to build HTTP client: {}", e);
                Error::HttpClient(e)
            })?;
        Self::with_http_client(config, http)
    }

    /// Creates a client that sends through a caller-supplied [`reqwest::Client`].
    /// Timeouts and user agent are then whatever that client was built with.
    pub fn with_http_client(config: ClientConfig, http: reqwest::Client) -> Result<Self, Error> {
        let transport = AuthenticatingTransport::new(config.api_key(), http)?;
        Ok(Self { config, transport })
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    pub fn base_url(&self) -> &str {
        self.config.base_url()
    }

    /// Builds an absolute URL for `path` under the base URL.
    pub fn url(&self, path: &str) -> Result<Url, Error> {
        Url::parse(&format!("{}{}", self.base_url(), path)).map_err(|e| {
            tracing::error!("Invalid URL constructed: {}", e);
            Error::InvalidInput(format!("invalid path {}: {}", path, e))
        })
    }

    /// Builds an absolute URL from path segments under the base URL. Each
    /// segment is percent-encoded, so ids cannot escape their position.
    pub fn endpoint_url(&self, segments: &[&str]) -> Result<Url, Error> {
        let mut url = self.url("")?;
        url.path_segments_mut()
            .map_err(|_| Error::InvalidInput(format!("base URL {} cannot hold a path", self.base_url())))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    /// Builds an absolute URL for `path` with `query` appended.
    pub fn url_with_query(&self, path: &str, query: &impl Query) -> Result<Url, Error> {
        Ok(query.add_to_url(&self.url(path)?))
    }

    /// Sends one request and returns the raw response without looking at its
    /// status or body. `body`, when present, is sent as JSON.
    pub async fn execute<U, B>(&self, method: Method, url: U, body: Option<&B>) -> Result<Response, Error>
    where
        U: IntoUrl,
        B: Serialize + ?Sized,
    {
        let mut builder = self.transport.inner().request(method, url);
        if let Some(body) = body {
            let bytes = serde_json::to_vec(body).map_err(Error::Serialize)?;
            builder = builder.body(bytes);
        }
        let request = builder.build().map_err(Error::Request)?;
        self.transport.execute(request).await.map_err(|e| {
            tracing::error!("Request failed: {}", e);
            Error::Transport(e)
        })
    }

    /// Issues one request expected to yield at most one entity.
    ///
    /// Returns `Ok(None)` on 204 or when a successful envelope has no data.
    pub async fn request_single<T, B>(&self, method: Method, url: Url, body: Option<&B>) -> Result<Option<T>, Error>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let response = self.execute(method, url, body).await?;
        let (status, text) = read_response(response).await?;
        decode_single(status, &text)
    }

    /// Fetches every page of a GET collection and returns the items in order.
    pub async fn request_collection<T>(&self, url: Url) -> Result<Vec<T>, Error>
    where
        T: DeserializeOwned,
    {
        self.request_collection_with::<T, ()>(Method::GET, url, None).await
    }

    /// Fetches every page of a collection, re-sending `body` with each page.
    ///
    /// `url` carries the caller's initial query; from the second page on, the
    /// previous page's `next_token` is set as the `next` parameter. Any failed
    /// page fails the whole fetch and discards accumulated items.
    pub async fn request_collection_with<T, B>(
        &self,
        method: Method,
        url: Url,
        body: Option<&B>,
    ) -> Result<Vec<T>, Error>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let limits = self.config.pagination();
        let started = Instant::now();
        let mut items = Vec::new();
        let mut next_token: Option<String> = None;
        let mut has_more = true;
        let mut pages = 0usize;

        while has_more {
            if limits.max_pages.is_some_and(|max| pages >= max)
                || limits.deadline.is_some_and(|d| started.elapsed() >= d)
            {
                tracing::error!("Pagination budget exhausted after {} pages", pages);
                return Err(Error::PaginationExceeded { pages });
            }

            let page_url = match &next_token {
                Some(token) => with_next_token(&url, token),
                None => url.clone(),
            };
            let response = self.execute(method.clone(), page_url, body).await?;
            let (status, text) = read_response(response).await?;
            pages += 1;

            let Some(page) = decode_page::<T>(status, &text)? else {
                break;
            };
            tracing::debug!(
                "Fetched page {} with {} items (has_more: {})",
                pages,
                page.items.len(),
                page.has_more
            );

            items.extend(page.items);
            has_more = page.has_more;
            next_token = page.next_token;
            if has_more && next_token.is_none() {
                return Err(Error::MissingContinuationToken { page: pages });
            }
        }

        Ok(items)
    }
}

async fn read_response(response: Response) -> Result<(reqwest::StatusCode, String), Error> {
    let status = response.status();
    let text = response.text().await.map_err(|e| {
        tracing::error!("Failed to read response body: {}", e);
        Error::ReadBody(e)
    })?;
    Ok((status, text))
}

/// Returns `url` with its `next` parameter replaced by `token`.
fn with_next_token(url: &Url, token: &str) -> Url {
    let mut url = url.clone();
    let pairs: Vec<(String, String)> = url
        .query_pairs()
        .filter(|(key, _)| key != "next")
        .map(|(key, value)| (key.into_owned(), value.into_owned()))
        .collect();
    url.query_pairs_mut()
        .clear()
        .extend_pairs(pairs)
        .append_pair("next", token);
    url
}
