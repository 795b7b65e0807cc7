//! Error types for the API client.

/// Errors that can occur when building a client or making API requests.
///
/// The `Api` variant carries the server's envelope message verbatim so callers
/// can match on known server-side messages.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// The API key or endpoint passed to the constructor was empty.
    #[error("API key and endpoint are required")]
    MissingCredentials,
    /// The endpoint could not be parsed as a URL after normalization.
    #[error("invalid endpoint {endpoint}: {source}")]
    InvalidEndpoint {
        endpoint: String,
        #[source]
        source: url::ParseError,
    },
    /// The API key contains characters that cannot be sent in a header.
    #[error("API key is not a valid header value")]
    InvalidApiKey,
    /// A construction option carried an invalid value.
    #[error("applying client option: {0}")]
    InvalidOption(String),
    /// The underlying HTTP client could not be built.
    #[error("building HTTP client: {0}")]
    HttpClient(#[source] reqwest::Error),
    /// The request body could not be serialized to JSON.
    #[error("marshalling request: {0}")]
    Serialize(#[source] serde_json::Error),
    /// The request could not be constructed (bad URL, bad method).
    #[error("creating request: {0}")]
    Request(#[source] reqwest::Error),
    /// Network failure, refused connection or timeout.
    #[error("making request: {0}")]
    Transport(#[source] reqwest::Error),
    /// The response body could not be read off the wire.
    #[error("reading response: {0}")]
    ReadBody(#[source] reqwest::Error),
    /// The response body was not a valid envelope for the expected payload.
    #[error("decoding response: {source}")]
    Decode {
        status: u16,
        #[source]
        source: serde_json::Error,
    },
    /// The envelope reported `success: false`.
    #[error("{0}")]
    Api(String),
    /// An endpoint argument failed client-side validation.
    #[error("{0}")]
    InvalidInput(String),
    /// A collection fetch hit the configured page or time budget.
    #[error("pagination exceeded after {pages} pages")]
    PaginationExceeded { pages: usize },
    /// A page claimed more results but carried no continuation token.
    #[error("page {page} reported has_more without a next_token")]
    MissingContinuationToken { page: usize },
}

impl Error {
    /// Returns the server-reported message if this error came from an envelope failure.
    pub fn api_message(&self) -> Option<&str> {
        match self {
            Error::Api(message) => Some(message.as_str()),
            _ => None,
        }
    }
}
