use url::Url;

use super::Query;

/// Filters for listing users. Empty filters are not sent.
#[derive(Clone, Debug, Default)]
pub struct UserQuery {
    pub email: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
}

impl Query for UserQuery {
    fn add_to_url(&self, url: &Url) -> Url {
        let mut url = url.clone();
        let filters = [
            ("email", &self.email),
            ("first_name", &self.first_name),
            ("last_name", &self.last_name),
        ];
        for (key, value) in filters {
            if let Some(value) = value.as_deref().filter(|v| !v.is_empty()) {
                url.query_pairs_mut().append_pair(key, value);
            }
        }
        url
    }
}

impl UserQuery {
    pub fn with_email(mut self, email: &str) -> Self {
        self.email = Some(email.to_string());
        self
    }

    pub fn with_first_name(mut self, first_name: &str) -> Self {
        self.first_name = Some(first_name.to_string());
        self
    }

    pub fn with_last_name(mut self, last_name: &str) -> Self {
        self.last_name = Some(last_name.to_string());
        self
    }
}
