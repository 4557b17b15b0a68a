//! Core of the Buycoins client: GraphQL document construction and response
//! normalization.
//!
//! This crate has no I/O. It sits strictly before and after the network
//! call:
//!
//! - [`query::build`] turns an [`OperationRequest`] into document text
//! - [`response::normalize`] turns a decoded response body into an
//!   [`ApiResponse`]
//!
//! Everything here is pure and synchronous, so it can be used from any
//! number of threads or tasks without coordination.
//!
//! # Example
//!
//! ```
//! use buycoins_core::{build, normalize, FieldSelection, OperationRequest};
//!
//! let request = OperationRequest::query(
//!     "getPrices",
//!     FieldSelection::leaves(["id", "cryptocurrency", "sellPricePerCoin"]),
//! )?;
//! let document = build(&request)?;
//! assert_eq!(document, "query { getPrices { id,cryptocurrency,sellPricePerCoin } }");
//!
//! let body = serde_json::json!({"data": {"getPrices": []}});
//! assert!(normalize(&body)?.is_success());
//! # Ok::<(), buycoins_core::Error>(())
//! ```

mod error;
pub mod query;
pub mod response;

pub use error::{Error, Result};
pub use query::{
    build, validate_selection, ArgValue, Arguments, FieldSelection, OperationKind,
    OperationRequest,
};
pub use response::{normalize, normalize_str, ApiResponse, ErrorEntry, Status};
