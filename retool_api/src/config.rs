//! Client configuration: construction inputs, options, and their validation.

use std::time::Duration;

use url::Url;

use crate::Error;

/// Request timeout applied when no [`ClientOption::Timeout`] is given.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Versioned path segment appended to the endpoint to form the base URL.
pub const API_PATH: &str = "/api/v2";

const USER_AGENT: &str = concat!("retool-api-rs/", env!("CARGO_PKG_VERSION"));

/// Bounds on a single collection fetch. Both are unbounded by default.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PaginationLimits {
    /// Maximum number of pages fetched before failing.
    pub max_pages: Option<usize>,
    /// Maximum wall-clock time spent across all pages before failing.
    /// Checked before each page request, so a page already in flight can
    /// overrun it by up to the request timeout.
    pub deadline: Option<Duration>,
}

/// Optional settings applied in order when constructing a [`crate::Client`].
#[derive(Clone, Debug)]
pub enum ClientOption {
    /// Overall per-request timeout. Must be greater than zero.
    Timeout(Duration),
    /// Page budget for collection fetches. Must be greater than zero.
    MaxPages(usize),
    /// Time budget for collection fetches. Must be greater than zero.
    PaginationDeadline(Duration),
    /// Overrides the `User-Agent` header.
    UserAgent(String),
}

impl ClientOption {
    fn apply(self, config: &mut ClientConfig) -> Result<(), Error> {
        match self {
            ClientOption::Timeout(timeout) => {
                if timeout.is_zero() {
                    return Err(Error::InvalidOption(
                        "timeout must be greater than 0".to_string(),
                    ));
                }
                config.timeout = timeout;
            }
            ClientOption::MaxPages(max_pages) => {
                if max_pages == 0 {
                    return Err(Error::InvalidOption(
                        "max pages must be greater than 0".to_string(),
                    ));
                }
                config.pagination.max_pages = Some(max_pages);
            }
            ClientOption::PaginationDeadline(deadline) => {
                if deadline.is_zero() {
                    return Err(Error::InvalidOption(
                        "pagination deadline must be greater than 0".to_string(),
                    ));
                }
                config.pagination.deadline = Some(deadline);
            }
            ClientOption::UserAgent(user_agent) => {
                if user_agent.trim().is_empty() {
                    return Err(Error::InvalidOption(
                        "user agent must not be empty".to_string(),
                    ));
                }
                config.user_agent = user_agent;
            }
        }
        Ok(())
    }
}

/// Resolved, immutable configuration of a client.
#[derive(Clone)]
pub struct ClientConfig {
    api_key: String,
    endpoint: String,
    base_url: String,
    timeout: Duration,
    pagination: PaginationLimits,
    user_agent: String,
}

impl std::fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClientConfig")
            .field("api_key", &"<redacted>")
            .field("endpoint", &self.endpoint)
            .field("base_url", &self.base_url)
            .field("timeout", &self.timeout)
            .field("pagination", &self.pagination)
            .field("user_agent", &self.user_agent)
            .finish()
    }
}

impl ClientConfig {
    /// Validates the required inputs, normalizes the endpoint, then applies
    /// `options` in order. The first failing option aborts construction.
    pub fn new<I>(api_key: &str, endpoint: &str, options: I) -> Result<Self, Error>
    where
        I: IntoIterator<Item = ClientOption>,
    {
        if api_key.is_empty() || endpoint.is_empty() {
            return Err(Error::MissingCredentials);
        }

        let endpoint = normalize_endpoint(endpoint);
        Url::parse(&endpoint).map_err(|source| Error::InvalidEndpoint {
            endpoint: endpoint.clone(),
            source,
        })?;

        let mut config = ClientConfig {
            api_key: api_key.to_string(),
            base_url: format!("{}{}", endpoint, API_PATH),
            endpoint,
            timeout: DEFAULT_TIMEOUT,
            pagination: PaginationLimits::default(),
            user_agent: USER_AGENT.to_string(),
        };

        for option in options {
            option.apply(&mut config)?;
        }

        Ok(config)
    }

    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    /// Endpoint with an explicit scheme and no trailing slash.
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Endpoint plus [`API_PATH`]. Every resource URL is built under it.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    pub fn pagination(&self) -> PaginationLimits {
        self.pagination
    }

    pub fn user_agent(&self) -> &str {
        &self.user_agent
    }
}

/// Prepends `https://` when no scheme is present and strips trailing slashes.
fn normalize_endpoint(endpoint: &str) -> String {
    let endpoint = endpoint.trim_end_matches('/');
    if endpoint.starts_with("http://") || endpoint.starts_with("https://") {
        endpoint.to_string()
    } else {
        format!("https://{}", endpoint)
    }
}
