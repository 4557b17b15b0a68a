//! Pooled HTTP client.

use std::sync::Arc;
use std::time::Duration;

use super::request::FormPost;
use crate::error::Result;

/// Connection settings shared by every request of a client.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HttpClientConfig {
    /// Limit for a whole request, response body included. `None` waits forever.
    pub timeout: Option<Duration>,
    /// Limit for establishing the connection.
    pub connect_timeout: Option<Duration>,
    /// Sent as `User-Agent`.
    pub user_agent: String,
}

impl Default for HttpClientConfig {
    fn default() -> Self {
        Self {
            timeout: Some(Duration::from_secs(30)),
            connect_timeout: Some(Duration::from_secs(10)),
            user_agent: format!("buycoins-rs/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

struct HttpClientInner {
    client: reqwest::Client,
    config: HttpClientConfig,
}

/// A connection pool configured once from an [`HttpClientConfig`].
///
/// Cloning is cheap; clones share the pool.
#[derive(Clone)]
pub struct HttpClient {
    inner: Arc<HttpClientInner>,
}

impl HttpClient {
    /// Create a client with the default settings.
    pub fn new() -> Result<Self> {
        Self::with_config(HttpClientConfig::default())
    }

    /// Create a client from explicit settings.
    pub fn with_config(config: HttpClientConfig) -> Result<Self> {
        let mut builder = reqwest::Client::builder().user_agent(config.user_agent.as_str());
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        if let Some(timeout) = config.connect_timeout {
            builder = builder.connect_timeout(timeout);
        }

        Ok(Self {
            inner: Arc::new(HttpClientInner {
                client: builder.build()?,
                config,
            }),
        })
    }

    /// The settings this client was built with.
    pub fn config(&self) -> &HttpClientConfig {
        &self.inner.config
    }

    /// Start a form-encoded POST to `url`.
    pub fn post_form(&self, url: impl Into<String>) -> FormPost {
        FormPost::new(self.clone(), url.into())
    }

    pub(crate) fn reqwest_client(&self) -> &reqwest::Client {
        &self.inner.client
    }
}

impl std::fmt::Debug for HttpClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpClient")
            .field("config", &self.inner.config)
            .finish()
    }
}
