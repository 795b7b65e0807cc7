//! Client settings read from the environment.

use std::time::Duration;

use anyhow::{bail, Context, Result};
use retool_api::{Client, ClientOption};

pub const API_KEY_VAR: &str = "RETOOL_API_KEY";
pub const ENDPOINT_VAR: &str = "RETOOL_ENDPOINT";
pub const TIMEOUT_VAR: &str = "RETOOL_TIMEOUT_SECS";

#[derive(Debug, PartialEq)]
pub struct Settings {
    pub api_key: String,
    pub endpoint: String,
    pub timeout: Option<Duration>,
}

impl Settings {
    /// Loads `.env` if present, then reads the process environment.
    pub fn from_env() -> Result<Self> {
        if let Err(e) = dotenvy::dotenv() {
            if !e.not_found() {
                return Err(e).context("loading .env");
            }
        }
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let Some(api_key) = lookup(API_KEY_VAR).filter(|v| !v.is_empty()) else {
            bail!("{} is not set", API_KEY_VAR);
        };
        let Some(endpoint) = lookup(ENDPOINT_VAR).filter(|v| !v.is_empty()) else {
            bail!("{} is not set", ENDPOINT_VAR);
        };
        let timeout = lookup(TIMEOUT_VAR)
            .map(|secs| {
                secs.parse::<u64>()
                    .with_context(|| format!("{} must be a whole number of seconds", TIMEOUT_VAR))
            })
            .transpose()?
            .map(Duration::from_secs);
        Ok(Self {
            api_key,
            endpoint,
            timeout,
        })
    }

    pub fn client(&self) -> Result<Client> {
        let options = self.timeout.map(ClientOption::Timeout);
        Client::with_options(&self.api_key, &self.endpoint, options).context("creating client")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn reads_required_and_optional_values() {
        let settings = Settings::from_lookup(lookup(&[
            (API_KEY_VAR, "retool_abc"),
            (ENDPOINT_VAR, "acme.retool.com"),
            (TIMEOUT_VAR, "30"),
        ]))
        .unwrap();
        assert_eq!(settings.api_key, "retool_abc");
        assert_eq!(settings.timeout, Some(Duration::from_secs(30)));
        let client = settings.client().unwrap();
        assert_eq!(client.base_url(), "https://acme.retool.com/api/v2");
    }

    #[test]
    fn missing_values_are_reported() {
        let err = Settings::from_lookup(lookup(&[(ENDPOINT_VAR, "acme.retool.com")])).unwrap_err();
        assert_eq!(err.to_string(), "RETOOL_API_KEY is not set");
        let err = Settings::from_lookup(lookup(&[(API_KEY_VAR, "k"), (ENDPOINT_VAR, "")])).unwrap_err();
        assert_eq!(err.to_string(), "RETOOL_ENDPOINT is not set");
    }

    #[test]
    fn rejects_bad_timeout() {
        let err = Settings::from_lookup(lookup(&[
            (API_KEY_VAR, "k"),
            (ENDPOINT_VAR, "acme.retool.com"),
            (TIMEOUT_VAR, "soon"),
        ]))
        .unwrap_err();
        assert!(err.to_string().contains("RETOOL_TIMEOUT_SECS"));

        let settings = Settings::from_lookup(lookup(&[
            (API_KEY_VAR, "k"),
            (ENDPOINT_VAR, "acme.retool.com"),
            (TIMEOUT_VAR, "0"),
        ]))
        .unwrap();
        let err = settings.client().unwrap_err();
        assert!(format!("{:#}", err).contains("timeout must be greater than 0"));
    }
}
