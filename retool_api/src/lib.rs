mod client;
mod config;
mod envelope;
mod errors;
mod query;
mod resources;
mod transport;
pub mod types;
pub use self::client::Client;
pub use self::config::{ClientConfig, ClientOption, PaginationLimits, API_PATH, DEFAULT_TIMEOUT};
pub use self::envelope::{decode_page, decode_single, Envelope, Page};
pub use self::errors::Error;
pub use self::query::{Query, UserQuery};
pub use self::resources::USER_NOT_FOUND;
pub use self::transport::AuthenticatingTransport;
