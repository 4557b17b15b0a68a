//! On-chain transfers: fee estimates, sending and receive addresses.

use buycoins_core::{ApiResponse, FieldSelection, OperationRequest};
use buycoins_net::Transport;
use serde::{Deserialize, Serialize};

use crate::client::{rejected, Buycoins};
use crate::error::Result;
use crate::validation::{identifier, positive, selection_or};

/// Root field for fee estimates.
pub const GET_ESTIMATED_NETWORK_FEE: &str = "getEstimatedNetworkFee";
/// Root field for sending cryptocurrency.
pub const SEND: &str = "send";
/// Root field for creating a receive address.
pub const CREATE_ADDRESS: &str = "createAddress";

/// Fields fetched for a fee estimate by default.
pub fn network_fee_fields() -> Vec<FieldSelection> {
    FieldSelection::leaves(["estimatedFee", "total"])
}

/// Fields fetched for an outgoing transfer by default.
pub fn send_fields() -> Vec<FieldSelection> {
    let mut fields = FieldSelection::leaves(["id", "cryptocurrency", "status", "address", "amount", "fee"]);
    fields.push(FieldSelection::with_children(
        "transaction",
        FieldSelection::leaves(["hash", "id"]),
    ));
    fields
}

/// Fields fetched for a new address by default.
pub fn address_fields() -> Vec<FieldSelection> {
    FieldSelection::leaves(["cryptocurrency", "address"])
}

/// An amount of cryptocurrency to estimate fees for.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NetworkFee {
    /// The cryptocurrency, e.g. `bitcoin`.
    pub cryptocurrency: String,
    /// Amount to send.
    pub amount: f64,
}

/// An outgoing transfer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SendCoins {
    /// Destination address.
    pub address: String,
    /// The cryptocurrency, e.g. `bitcoin`.
    pub cryptocurrency: String,
    /// Amount to send.
    pub amount: f64,
}

/// Build the `getEstimatedNetworkFee` query.
pub fn estimated_network_fee_request(
    fee: &NetworkFee,
    fields: &[FieldSelection],
) -> Result<OperationRequest> {
    let cryptocurrency = identifier("cryptocurrency", &fee.cryptocurrency)?;
    let amount = positive("amount", fee.amount)?;
    let selection = selection_or(fields, network_fee_fields)?;

    Ok(OperationRequest::query(GET_ESTIMATED_NETWORK_FEE, selection)?
        .argument("cryptocurrency", cryptocurrency)
        .argument("amount", amount))
}

/// Build the `send` mutation.
pub fn send_request(transfer: &SendCoins, fields: &[FieldSelection]) -> Result<OperationRequest> {
    let address = identifier("address", &transfer.address)?;
    let cryptocurrency = identifier("cryptocurrency", &transfer.cryptocurrency)?;
    let amount = positive("amount", transfer.amount)?;
    let selection = selection_or(fields, send_fields)?;

    Ok(OperationRequest::mutation(SEND, selection)?
        .argument("cryptocurrency", cryptocurrency)
        .argument("amount", amount)
        .argument("address", address))
}

/// Build the `createAddress` mutation.
pub fn create_address_request(
    cryptocurrency: &str,
    fields: &[FieldSelection],
) -> Result<OperationRequest> {
    let cryptocurrency = identifier("cryptocurrency", cryptocurrency)?;
    let selection = selection_or(fields, address_fields)?;
    Ok(OperationRequest::mutation(CREATE_ADDRESS, selection)?.argument("cryptocurrency", cryptocurrency))
}

impl<T: Transport> Buycoins<T> {
    /// Estimate the network fee for sending an amount.
    pub async fn estimated_network_fee(
        &self,
        fee: &NetworkFee,
        fields: &[FieldSelection],
    ) -> Result<ApiResponse> {
        let request = estimated_network_fee_request(fee, fields)
            .map_err(|e| rejected(GET_ESTIMATED_NETWORK_FEE, e))?;
        self.execute(&request).await
    }

    /// Send cryptocurrency to an address.
    pub async fn send(&self, transfer: &SendCoins, fields: &[FieldSelection]) -> Result<ApiResponse> {
        let request = send_request(transfer, fields).map_err(|e| rejected(SEND, e))?;
        self.execute(&request).await
    }

    /// Create a new receive address.
    pub async fn create_address(
        &self,
        cryptocurrency: &str,
        fields: &[FieldSelection],
    ) -> Result<ApiResponse> {
        let request =
            create_address_request(cryptocurrency, fields).map_err(|e| rejected(CREATE_ADDRESS, e))?;
        self.execute(&request).await
    }
}
