//! Networking layer of the Buycoins client.
//!
//! This crate provides:
//!
//! - **Transport**: the [`Transport`] trait and its HTTP implementation,
//!   [`GraphQLClient`]
//! - **Credentials**: an explicit public/secret key pair threaded through
//!   every call
//! - **Configuration**: endpoint and HTTP settings, with environment
//!   overrides
//!
//! # Example
//!
//! ```ignore
//! use buycoins_core::{FieldSelection, OperationRequest};
//! use buycoins_net::{ClientConfig, Credentials, GraphQLClient};
//!
//! let client = GraphQLClient::with_config(ClientConfig::from_env()?)?;
//! let credentials = Credentials::from_env()?;
//!
//! let request = OperationRequest::query(
//!     "getPrices",
//!     FieldSelection::leaves(["id", "cryptocurrency", "sellPricePerCoin"]),
//! )?;
//! let response = client.execute(&request, &credentials).await?;
//! ```
//!
//! # Logging
//!
//! Events are emitted through `tracing` under the `buycoins_net::graphql`
//! target. Install a subscriber in the application to see them.

pub mod auth;
pub mod config;
mod error;
pub mod graphql;
pub mod http;

pub use auth::Credentials;
pub use config::{ClientConfig, DEFAULT_ENDPOINT};
pub use error::{NetworkError, Result};
pub use graphql::{execute, GraphQLClient, GraphQLClientBuilder, Transport};
