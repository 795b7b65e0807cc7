//! Shared query infrastructure.

use url::Url;

/// Trait implemented by all list-filter builders.
pub trait Query {
    /// Appends this query's parameters to the given URL, returning the modified URL.
    fn add_to_url(&self, url: &Url) -> Url;
}
