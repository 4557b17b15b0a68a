//! Client configuration.

use std::time::Duration;

use crate::error::{NetworkError, Result};
use crate::http::HttpClientConfig;

/// The production GraphQL endpoint.
pub const DEFAULT_ENDPOINT: &str = "https://backend.buycoins.tech/api/graphql";

/// Environment variable overriding the endpoint.
pub const ENDPOINT_ENV: &str = "BUYCOINS_API_URL";
/// Environment variable overriding the request timeout, in seconds.
pub const TIMEOUT_ENV: &str = "BUYCOINS_TIMEOUT_SECS";
/// Environment variable overriding the connect timeout, in seconds.
pub const CONNECT_TIMEOUT_ENV: &str = "BUYCOINS_CONNECT_TIMEOUT_SECS";

/// Where and how the GraphQL transport talks to the backend.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClientConfig {
    /// The GraphQL endpoint URL.
    pub endpoint: String,
    /// HTTP settings.
    pub http: HttpClientConfig,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            http: HttpClientConfig::default(),
        }
    }
}

impl ClientConfig {
    /// Default configuration with `BUYCOINS_API_URL`,
    /// `BUYCOINS_TIMEOUT_SECS` and `BUYCOINS_CONNECT_TIMEOUT_SECS` applied
    /// when set.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    pub(crate) fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let mut config = Self::default();

        if let Some(endpoint) = lookup(ENDPOINT_ENV) {
            url::Url::parse(&endpoint)
                .map_err(|e| NetworkError::Config(format!("{ENDPOINT_ENV}: {e}")))?;
            config.endpoint = endpoint;
        }

        if let Some(secs) = seconds(&lookup, TIMEOUT_ENV)? {
            config.http.timeout = Some(secs);
        }
        if let Some(secs) = seconds(&lookup, CONNECT_TIMEOUT_ENV)? {
            config.http.connect_timeout = Some(secs);
        }

        Ok(config)
    }
}

fn seconds(lookup: impl Fn(&str) -> Option<String>, name: &str) -> Result<Option<Duration>> {
    let Some(value) = lookup(name) else {
        return Ok(None);
    };
    let secs: u64 = value.trim().parse().map_err(|_| {
        NetworkError::Config(format!(
            "{name} must be a whole number of seconds, got {value:?}"
        ))
    })?;
    Ok(Some(Duration::from_secs(secs)))
}
