//! GraphQL transport for the Buycoins API.
//!
//! The [`Transport`] trait is the seam between the pure core and the
//! network: [`execute`] builds the document, hands it to a transport and
//! normalizes whatever comes back. [`GraphQLClient`] is the HTTP
//! implementation used in production; tests substitute their own.
//!
//! # Example
//!
//! ```ignore
//! use buycoins_core::{ApiResponse, FieldSelection, OperationRequest};
//! use buycoins_net::graphql::{execute, GraphQLClient};
//! use buycoins_net::Credentials;
//!
//! let client = GraphQLClient::builder("https://backend.buycoins.tech/api/graphql").build()?;
//! let credentials = Credentials::new("public-key", "secret-key")?;
//!
//! let request = OperationRequest::mutation(
//!     "createAddress",
//!     FieldSelection::leaves(["cryptocurrency", "address"]),
//! )?
//! .argument("cryptocurrency", "bitcoin");
//!
//! match execute(&client, &request, &credentials).await? {
//!     ApiResponse::Success { data } => println!("{}", data["createAddress"]["address"]),
//!     ApiResponse::Failure { errors, .. } => eprintln!("{errors:?}"),
//! }
//! ```

mod client;

pub use client::{execute, GraphQLClient, GraphQLClientBuilder, Transport};
