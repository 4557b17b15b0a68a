//! The endpoint facade.

use buycoins_core::{ApiResponse, OperationRequest};
use buycoins_net::{ClientConfig, Credentials, GraphQLClient, Transport};

use crate::error::{Error, Result};

pub(crate) const TARGET: &str = "buycoins::endpoints";

/// Typed access to every Buycoins API operation.
///
/// Holds a transport and the credentials it authenticates with. The
/// endpoint methods live in the [`endpoints`](crate::endpoints) modules.
///
/// # Example
///
/// ```ignore
/// use buycoins::{Buycoins, Credentials};
///
/// let buycoins = Buycoins::new(Credentials::from_env()?)?;
/// let prices = buycoins.prices(&[]).await?;
/// ```
#[derive(Debug, Clone)]
pub struct Buycoins<T = GraphQLClient> {
    transport: T,
    credentials: Credentials,
}

impl Buycoins<GraphQLClient> {
    /// Create a client for the production endpoint.
    pub fn new(credentials: Credentials) -> Result<Self> {
        Self::with_config(ClientConfig::default(), credentials)
    }

    /// Create a client from an explicit configuration.
    pub fn with_config(config: ClientConfig, credentials: Credentials) -> Result<Self> {
        Ok(Self::with_transport(
            GraphQLClient::with_config(config)?,
            credentials,
        ))
    }

    /// Create a client with configuration and credentials read from the
    /// environment.
    pub fn from_env() -> Result<Self> {
        Self::with_config(ClientConfig::from_env()?, Credentials::from_env()?)
    }
}

impl<T: Transport> Buycoins<T> {
    /// Create a client over any transport.
    pub fn with_transport(transport: T, credentials: Credentials) -> Self {
        Self {
            transport,
            credentials,
        }
    }

    /// The credentials sent with every call.
    pub fn credentials(&self) -> &Credentials {
        &self.credentials
    }

    /// The underlying transport.
    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Run an arbitrary operation.
    ///
    /// This is the escape hatch for operations without a dedicated wrapper.
    pub async fn execute(&self, request: &OperationRequest) -> Result<ApiResponse> {
        Ok(buycoins_net::execute(&self.transport, request, &self.credentials).await?)
    }
}

/// Log a rejected argument and pass the error on.
pub(crate) fn rejected(command: &'static str, err: impl Into<Error>) -> Error {
    let err = err.into();
    tracing::debug!(target: TARGET, command, error = %err, "Rejected arguments");
    err
}
