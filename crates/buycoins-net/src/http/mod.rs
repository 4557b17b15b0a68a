//! HTTP plumbing for the default GraphQL transport.
//!
//! The Buycoins endpoint only ever sees one kind of request: a
//! form-encoded POST with basic authentication. This module does exactly
//! that and reads the reply in full.
//!
//! # Example
//!
//! ```ignore
//! use buycoins_net::http::HttpClient;
//! use buycoins_net::Credentials;
//!
//! let client = HttpClient::new()?;
//! let credentials = Credentials::new("public-key", "secret-key")?;
//!
//! let response = client
//!     .post_form("https://backend.buycoins.tech/api/graphql")
//!     .basic_auth(&credentials)
//!     .field("query", "query { getPrices { id } }")
//!     .send()
//!     .await?;
//! println!("{} {}", response.status(), response.body());
//! ```

mod client;
mod request;
mod response;

pub use client::{HttpClient, HttpClientConfig};
pub use request::FormPost;
pub use response::HttpResponse;
