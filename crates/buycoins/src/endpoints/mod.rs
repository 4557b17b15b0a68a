//! Endpoint wrappers, one module per area of the API.
//!
//! Every wrapper follows the same steps: validate the arguments, pick the
//! caller's selection (or the wrapper's default tree when none is given),
//! build the [`OperationRequest`](buycoins_core::OperationRequest) and run
//! it through the client's transport. The request builders are public so
//! callers can inspect or batch documents without sending them.

pub mod accounts;
pub mod balances;
pub mod orders;
pub mod prices;
pub mod trading;
pub mod transfers;
