//! Instant buy and sell against a quoted price.

use buycoins_core::{ApiResponse, FieldSelection, OperationRequest};
use buycoins_net::Transport;
use serde::{Deserialize, Serialize};

use crate::client::{rejected, Buycoins};
use crate::error::Result;
use crate::validation::{identifier, positive, selection_or};

/// Root field for buying.
pub const BUY: &str = "buy";
/// Root field for selling.
pub const SELL: &str = "sell";

/// Fields fetched for the resulting order by default.
pub fn trade_fields() -> Vec<FieldSelection> {
    FieldSelection::leaves([
        "id",
        "cryptocurrency",
        "status",
        "totalCoinAmount",
        "side",
        "createdAt",
    ])
}

/// An instant trade at a price returned by `getPrices`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Trade {
    /// The price id.
    pub price: String,
    /// Amount of cryptocurrency to trade.
    pub coin_amount: f64,
    /// The cryptocurrency, e.g. `bitcoin`.
    pub cryptocurrency: String,
}

impl Trade {
    /// Create a trade.
    pub fn new(price: impl Into<String>, coin_amount: f64, cryptocurrency: impl Into<String>) -> Self {
        Self {
            price: price.into(),
            coin_amount,
            cryptocurrency: cryptocurrency.into(),
        }
    }
}

fn trade_request(command: &'static str, trade: &Trade, fields: &[FieldSelection]) -> Result<OperationRequest> {
    let price = identifier("price", &trade.price)?;
    let coin_amount = positive("coin_amount", trade.coin_amount)?;
    let cryptocurrency = identifier("cryptocurrency", &trade.cryptocurrency)?;
    let selection = selection_or(fields, trade_fields)?;

    Ok(OperationRequest::mutation(command, selection)?
        .argument("price", price)
        .argument("coin_amount", coin_amount)
        .argument("cryptocurrency", cryptocurrency))
}

/// Build the `buy` mutation.
pub fn buy_request(trade: &Trade, fields: &[FieldSelection]) -> Result<OperationRequest> {
    trade_request(BUY, trade, fields)
}

/// Build the `sell` mutation.
pub fn sell_request(trade: &Trade, fields: &[FieldSelection]) -> Result<OperationRequest> {
    trade_request(SELL, trade, fields)
}

impl<T: Transport> Buycoins<T> {
    /// Buy cryptocurrency at a quoted price.
    pub async fn buy(&self, trade: &Trade, fields: &[FieldSelection]) -> Result<ApiResponse> {
        let request = buy_request(trade, fields).map_err(|e| rejected(BUY, e))?;
        self.execute(&request).await
    }

    /// Sell cryptocurrency at a quoted price.
    pub async fn sell(&self, trade: &Trade, fields: &[FieldSelection]) -> Result<ApiResponse> {
        let request = sell_request(trade, fields).map_err(|e| rejected(SELL, e))?;
        self.execute(&request).await
    }
}
