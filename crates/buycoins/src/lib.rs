//! Buycoins - a typed, validated client for the Buycoins exchange GraphQL API.
//!
//! This is the umbrella crate. It re-exports the document builder and
//! response normalizer from `buycoins-core`, the transport from
//! `buycoins-net`, and adds one validated wrapper per API operation on
//! [`Buycoins`].
//!
//! # Example
//!
//! ```no_run
//! use buycoins::prelude::*;
//!
//! # async fn run() -> Result<(), buycoins::Error> {
//! let credentials = Credentials::new("public-key", "secret-key")?;
//! let buycoins = Buycoins::new(credentials)?;
//!
//! match buycoins.balance("bitcoin", &[]).await? {
//!     ApiResponse::Success { data } => println!("{}", data["getBalances"]),
//!     ApiResponse::Failure { errors, .. } => {
//!         for error in errors {
//!             eprintln!("{} ({})", error.reason, error.field);
//!         }
//!     }
//! }
//! # Ok(())
//! # }
//! ```
//!
//! # Selections
//!
//! Every wrapper takes a `fields` slice. An empty slice fetches the
//! wrapper's default fields; anything else is validated and sent as is:
//!
//! ```no_run
//! # use buycoins::prelude::*;
//! # async fn run(buycoins: Buycoins) -> Result<(), buycoins::Error> {
//! let fields = [
//!     FieldSelection::new("id"),
//!     FieldSelection::with_children("transaction", FieldSelection::leaves(["hash"])),
//! ];
//! let transfer = SendCoins {
//!     address: "bc1q...".into(),
//!     cryptocurrency: "bitcoin".into(),
//!     amount: 0.01,
//! };
//! buycoins.send(&transfer, &fields).await?;
//! # Ok(())
//! # }
//! ```

mod client;
pub mod endpoints;
mod error;
pub mod prelude;
pub mod validation;

pub use client::Buycoins;
pub use error::{Error, Result};
pub use validation::{OrderSide, OrderStatus, PriceType, ValidationError};

pub use buycoins_core::{
    build, normalize, ApiResponse, ArgValue, Arguments, ErrorEntry, FieldSelection,
    OperationKind, OperationRequest, Status,
};
pub use buycoins_net::{ClientConfig, Credentials, GraphQLClient, NetworkError, Transport};

