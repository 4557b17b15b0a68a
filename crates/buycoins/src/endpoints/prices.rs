//! Current cryptocurrency prices.

use buycoins_core::{ApiResponse, FieldSelection, OperationRequest};
use buycoins_net::Transport;

use crate::client::{rejected, Buycoins};
use crate::error::Result;
use crate::validation::selection_or;

/// Root field for prices.
pub const GET_PRICES: &str = "getPrices";

/// Fields fetched for each price by default.
pub fn price_fields() -> Vec<FieldSelection> {
    FieldSelection::leaves([
        "id",
        "cryptocurrency",
        "sellPricePerCoin",
        "minSell",
        "maxSell",
        "expiresAt",
    ])
}

/// Build the `getPrices` query.
pub fn prices_request(fields: &[FieldSelection]) -> Result<OperationRequest> {
    let selection = selection_or(fields, price_fields)?;
    Ok(OperationRequest::query(GET_PRICES, selection)?)
}

impl<T: Transport> Buycoins<T> {
    /// Retrieve the current price of every supported cryptocurrency.
    ///
    /// The returned price `id` is what [`buy`](Buycoins::buy) and
    /// [`sell`](Buycoins::sell) expect.
    pub async fn prices(&self, fields: &[FieldSelection]) -> Result<ApiResponse> {
        let request = prices_request(fields).map_err(|e| rejected(GET_PRICES, e))?;
        self.execute(&request).await
    }
}
