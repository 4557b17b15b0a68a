//! Peer-to-peer orders: personal orders, the market book and order posting.

use buycoins_core::{ApiResponse, FieldSelection, OperationRequest};
use buycoins_net::Transport;
use serde::{Deserialize, Serialize};

use crate::client::{rejected, Buycoins};
use crate::error::Result;
use crate::validation::{identifier, positive, selection_or, OrderSide, OrderStatus, PriceType, ValidationError};

/// Root field for personal orders.
pub const GET_ORDERS: &str = "getOrders";
/// Root field for the market book.
pub const GET_MARKET_BOOK: &str = "getMarketBook";
/// Root field for posting a limit order.
pub const POST_LIMIT_ORDER: &str = "postLimitOrder";
/// Root field for posting a market order.
pub const POST_MARKET_ORDER: &str = "postMarketOrder";

const ORDER_NODE_FIELDS: [&str; 10] = [
    "id",
    "cryptocurrency",
    "coinAmount",
    "side",
    "status",
    "createdAt",
    "pricePerCoin",
    "priceType",
    "staticPrice",
    "dynamicExchangeRate",
];

/// Fields fetched for order listings by default.
pub fn order_book_fields() -> Vec<FieldSelection> {
    vec![
        FieldSelection::new("dynamicPriceExpiry"),
        FieldSelection::with_children(
            "orders",
            [FieldSelection::with_children(
                "edges",
                [FieldSelection::with_children(
                    "node",
                    FieldSelection::leaves(ORDER_NODE_FIELDS),
                )],
            )],
        ),
    ]
}

/// Fields fetched for a newly posted order by default.
pub fn posted_order_fields() -> Vec<FieldSelection> {
    FieldSelection::leaves(ORDER_NODE_FIELDS)
}

/// A limit order to post to the market book.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LimitOrder {
    /// Buy or sell.
    pub order_side: OrderSide,
    /// Amount of cryptocurrency to trade.
    pub coin_amount: f64,
    /// The cryptocurrency, e.g. `bitcoin`.
    pub cryptocurrency: String,
    /// Static or dynamic pricing.
    pub price_type: PriceType,
    /// Price per coin, required for static pricing.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub static_price: Option<f64>,
    /// Exchange rate, required for dynamic pricing.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dynamic_exchange_rate: Option<f64>,
}

impl LimitOrder {
    /// A statically priced limit order.
    pub fn fixed(
        order_side: OrderSide,
        coin_amount: f64,
        cryptocurrency: impl Into<String>,
        static_price: f64,
    ) -> Self {
        Self {
            order_side,
            coin_amount,
            cryptocurrency: cryptocurrency.into(),
            price_type: PriceType::Static,
            static_price: Some(static_price),
            dynamic_exchange_rate: None,
        }
    }

    /// A dynamically priced limit order.
    pub fn dynamic(
        order_side: OrderSide,
        coin_amount: f64,
        cryptocurrency: impl Into<String>,
        dynamic_exchange_rate: f64,
    ) -> Self {
        Self {
            order_side,
            coin_amount,
            cryptocurrency: cryptocurrency.into(),
            price_type: PriceType::Dynamic,
            static_price: None,
            dynamic_exchange_rate: Some(dynamic_exchange_rate),
        }
    }
}

/// A market order, filled at the best available price.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MarketOrder {
    /// Buy or sell.
    pub order_side: OrderSide,
    /// Amount of cryptocurrency to trade.
    pub coin_amount: f64,
    /// The cryptocurrency, e.g. `bitcoin`.
    pub cryptocurrency: String,
}

/// Build the `getOrders` query.
pub fn my_orders_request(status: OrderStatus, fields: &[FieldSelection]) -> Result<OperationRequest> {
    let selection = selection_or(fields, order_book_fields)?;
    Ok(OperationRequest::query(GET_ORDERS, selection)?.argument("status", status))
}

/// Build the `getMarketBook` query.
pub fn market_book_request(fields: &[FieldSelection]) -> Result<OperationRequest> {
    let selection = selection_or(fields, order_book_fields)?;
    Ok(OperationRequest::query(GET_MARKET_BOOK, selection)?)
}

/// Build the `postLimitOrder` mutation.
pub fn post_limit_order_request(
    order: &LimitOrder,
    fields: &[FieldSelection],
) -> Result<OperationRequest> {
    let coin_amount = positive("coinAmount", order.coin_amount)?;
    let cryptocurrency = identifier("cryptocurrency", &order.cryptocurrency)?;
    let (price_argument, price) = match order.price_type {
        PriceType::Static => ("staticPrice", order.static_price),
        PriceType::Dynamic => ("dynamicExchangeRate", order.dynamic_exchange_rate),
    };
    let price = price.ok_or(ValidationError::MissingPrice {
        argument: price_argument,
        price_type: order.price_type,
    })?;
    let price = positive(price_argument, price)?;
    let selection = selection_or(fields, posted_order_fields)?;

    Ok(OperationRequest::mutation(POST_LIMIT_ORDER, selection)?
        .argument("orderSide", order.order_side)
        .argument("coinAmount", coin_amount)
        .argument("cryptocurrency", cryptocurrency)
        .argument("priceType", order.price_type)
        .argument(price_argument, price))
}

/// Build the `postMarketOrder` mutation.
pub fn post_market_order_request(
    order: &MarketOrder,
    fields: &[FieldSelection],
) -> Result<OperationRequest> {
    let coin_amount = positive("coinAmount", order.coin_amount)?;
    let cryptocurrency = identifier("cryptocurrency", &order.cryptocurrency)?;
    let selection = selection_or(fields, posted_order_fields)?;

    Ok(OperationRequest::mutation(POST_MARKET_ORDER, selection)?
        .argument("orderSide", order.order_side)
        .argument("coinAmount", coin_amount)
        .argument("cryptocurrency", cryptocurrency))
}

impl<T: Transport> Buycoins<T> {
    /// Retrieve your own orders with the given status.
    pub async fn my_orders(
        &self,
        status: OrderStatus,
        fields: &[FieldSelection],
    ) -> Result<ApiResponse> {
        let request = my_orders_request(status, fields).map_err(|e| rejected(GET_ORDERS, e))?;
        self.execute(&request).await
    }

    /// Retrieve the open orders on the marketplace.
    pub async fn market_book(&self, fields: &[FieldSelection]) -> Result<ApiResponse> {
        let request = market_book_request(fields).map_err(|e| rejected(GET_MARKET_BOOK, e))?;
        self.execute(&request).await
    }

    /// Post a limit order.
    pub async fn post_limit_order(
        &self,
        order: &LimitOrder,
        fields: &[FieldSelection],
    ) -> Result<ApiResponse> {
        let request =
            post_limit_order_request(order, fields).map_err(|e| rejected(POST_LIMIT_ORDER, e))?;
        self.execute(&request).await
    }

    /// Post a market order.
    pub async fn post_market_order(
        &self,
        order: &MarketOrder,
        fields: &[FieldSelection],
    ) -> Result<ApiResponse> {
        let request =
            post_market_order_request(order, fields).map_err(|e| rejected(POST_MARKET_ORDER, e))?;
        self.execute(&request).await
    }
}
