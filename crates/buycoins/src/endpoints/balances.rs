//! Wallet balances.

use buycoins_core::{ApiResponse, FieldSelection, OperationRequest};
use buycoins_net::Transport;

use crate::client::{rejected, Buycoins};
use crate::error::Result;
use crate::validation::{identifier, selection_or};

/// Root field for balances.
pub const GET_BALANCES: &str = "getBalances";

/// Fields fetched for each balance by default.
pub fn balance_fields() -> Vec<FieldSelection> {
    FieldSelection::leaves(["id", "cryptocurrency", "confirmedBalance"])
}

/// Build the `getBalances` query for a single cryptocurrency.
pub fn balance_request(cryptocurrency: &str, fields: &[FieldSelection]) -> Result<OperationRequest> {
    let cryptocurrency = identifier("cryptocurrency", cryptocurrency)?;
    let selection = selection_or(fields, balance_fields)?;
    Ok(OperationRequest::query(GET_BALANCES, selection)?.argument("cryptocurrency", cryptocurrency))
}

/// Build the `getBalances` query for every supported cryptocurrency.
pub fn balances_request(fields: &[FieldSelection]) -> Result<OperationRequest> {
    let selection = selection_or(fields, balance_fields)?;
    Ok(OperationRequest::query(GET_BALANCES, selection)?)
}

impl<T: Transport> Buycoins<T> {
    /// Retrieve the balance of one cryptocurrency wallet.
    pub async fn balance(
        &self,
        cryptocurrency: &str,
        fields: &[FieldSelection],
    ) -> Result<ApiResponse> {
        let request =
            balance_request(cryptocurrency, fields).map_err(|e| rejected(GET_BALANCES, e))?;
        self.execute(&request).await
    }

    /// Retrieve the balances of all supported cryptocurrencies.
    pub async fn balances(&self, fields: &[FieldSelection]) -> Result<ApiResponse> {
        let request = balances_request(fields).map_err(|e| rejected(GET_BALANCES, e))?;
        self.execute(&request).await
    }
}
