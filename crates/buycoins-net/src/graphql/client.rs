//! GraphQL transport and execution.

use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use buycoins_core::{build, normalize, ApiResponse, OperationRequest};
use http::header::{HeaderMap, HeaderName, HeaderValue, ACCEPT};
use serde_json::Value;

use crate::auth::Credentials;
use crate::config::ClientConfig;
use crate::error::{NetworkError, Result};
use crate::http::HttpClient;

const TARGET: &str = "buycoins_net::graphql";

/// Something that can deliver a GraphQL document to the backend.
///
/// Implementations own every transport concern (pooling, TLS, timeouts,
/// retries). They must return the decoded JSON body for both successful and
/// GraphQL-level error responses, and an error only for transport failures.
pub trait Transport: Send + Sync {
    /// Send `document` authenticated with `credentials` and return the decoded
    /// response body.
    fn send(
        &self,
        document: &str,
        credentials: &Credentials,
    ) -> impl Future<Output = Result<Value>> + Send;
}

impl<T: Transport> Transport for Arc<T> {
    fn send(
        &self,
        document: &str,
        credentials: &Credentials,
    ) -> impl Future<Output = Result<Value>> + Send {
        (**self).send(document, credentials)
    }
}

impl<T: Transport> Transport for &T {
    fn send(
        &self,
        document: &str,
        credentials: &Credentials,
    ) -> impl Future<Output = Result<Value>> + Send {
        (**self).send(document, credentials)
    }
}

/// Build `request`, send it through `transport` and normalize the response.
///
/// Construction errors are returned before the transport is touched.
/// Upstream GraphQL errors come back as [`ApiResponse::Failure`].
pub async fn execute<T: Transport>(
    transport: &T,
    request: &OperationRequest,
    credentials: &Credentials,
) -> Result<ApiResponse> {
    let document = build(request)?;
    tracing::debug!(
        target: TARGET,
        kind = %request.kind(),
        command = request.command(),
        "Dispatching GraphQL operation"
    );
    tracing::trace!(target: TARGET, %document);

    let body = transport.send(&document, credentials).await?;
    let response = normalize(&body)?;

    if let ApiResponse::Failure { errors, .. } = &response {
        tracing::warn!(
            target: TARGET,
            command = request.command(),
            errors = errors.len(),
            "Backend returned errors"
        );
    }
    Ok(response)
}

/// Builder for creating a GraphQL client.
pub struct GraphQLClientBuilder {
    config: ClientConfig,
    http_client: Option<HttpClient>,
    headers: Vec<(String, String)>,
}

impl GraphQLClientBuilder {
    /// Create a new builder with the specified GraphQL endpoint URL.
    pub fn new(url: impl Into<String>) -> Self {
        Self::from_config(ClientConfig {
            endpoint: url.into(),
            ..ClientConfig::default()
        })
    }

    /// Create a builder from a full configuration.
    pub fn from_config(config: ClientConfig) -> Self {
        Self {
            config,
            http_client: None,
            headers: Vec::new(),
        }
    }

    /// Share an existing HTTP client, and its connection pool.
    ///
    /// The HTTP settings of the configuration are ignored in that case.
    pub fn http_client(mut self, client: HttpClient) -> Self {
        self.http_client = Some(client);
        self
    }

    /// Send an extra header with every request.
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }

    /// Set the request timeout for HTTP operations.
    pub fn request_timeout(mut self, timeout: Duration) -> Self {
        self.config.http.timeout = Some(timeout);
        self
    }

    /// Build the GraphQL client.
    ///
    /// Fails on an invalid endpoint URL or header.
    pub fn build(self) -> Result<GraphQLClient> {
        url::Url::parse(&self.config.endpoint)?;

        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        for (name, value) in &self.headers {
            headers.insert(HeaderName::from_bytes(name.as_bytes())?, HeaderValue::from_str(value)?);
        }

        let http_client = match self.http_client {
            Some(client) => client,
            None => HttpClient::with_config(self.config.http)?,
        };

        Ok(GraphQLClient {
            inner: Arc::new(GraphQLClientInner {
                http_client,
                endpoint: self.config.endpoint,
                headers,
            }),
        })
    }
}

struct GraphQLClientInner {
    http_client: HttpClient,
    endpoint: String,
    headers: HeaderMap,
}

/// The HTTP transport for the Buycoins GraphQL endpoint.
///
/// Documents are posted as the `query` form field with basic
/// authentication. The client is cheaply cloneable; clones share one
/// connection pool.
///
/// # Example
///
/// ```ignore
/// use buycoins_core::{FieldSelection, OperationRequest};
/// use buycoins_net::{Credentials, GraphQLClient};
///
/// let client = GraphQLClient::from_env()?;
/// let credentials = Credentials::from_env()?;
///
/// let request = OperationRequest::query("getPrices", FieldSelection::leaves(["id"]))?;
/// let response = client.execute(&request, &credentials).await?;
/// ```
#[derive(Clone)]
pub struct GraphQLClient {
    inner: Arc<GraphQLClientInner>,
}

impl GraphQLClient {
    /// Create a builder for the given endpoint URL.
    pub fn builder(url: impl Into<String>) -> GraphQLClientBuilder {
        GraphQLClientBuilder::new(url)
    }

    /// Create a client from a configuration.
    pub fn with_config(config: ClientConfig) -> Result<Self> {
        GraphQLClientBuilder::from_config(config).build()
    }

    /// Create a client for the production endpoint, honouring environment
    /// overrides.
    pub fn from_env() -> Result<Self> {
        Self::with_config(ClientConfig::from_env()?)
    }

    /// Get the endpoint URL.
    pub fn url(&self) -> &str {
        &self.inner.endpoint
    }

    /// Build, send and normalize one operation.
    pub async fn execute(
        &self,
        request: &OperationRequest,
        credentials: &Credentials,
    ) -> Result<ApiResponse> {
        execute(self, request, credentials).await
    }
}

impl Transport for GraphQLClient {
    async fn send(&self, document: &str, credentials: &Credentials) -> Result<Value> {
        let response = self
            .inner
            .http_client
            .post_form(self.inner.endpoint.as_str())
            .headers(&self.inner.headers)
            .basic_auth(credentials)
            .field("query", document)
            .send()
            .await?;

        tracing::debug!(
            target: TARGET,
            status = response.status(),
            content_type = response.content_type().unwrap_or(""),
            bytes = response.body().len(),
            "Received response"
        );

        // GraphQL errors frequently arrive with 4xx codes, so a JSON body wins
        // over the status.
        match serde_json::from_str::<Value>(response.body()) {
            Ok(value) => Ok(value),
            Err(_) if !response.is_success() => {
                let status = response.status();
                let body = response.into_body();
                Err(NetworkError::HttpStatus {
                    status,
                    message: (!body.is_empty()).then_some(body),
                })
            }
            Err(e) => Err(buycoins_core::Error::malformed(format!("body is not JSON: {e}")).into()),
        }
    }
}

impl std::fmt::Debug for GraphQLClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GraphQLClient")
            .field("endpoint", &self.inner.endpoint)
            .finish()
    }
}
