//! Commonly used types, for glob import.

pub use crate::endpoints::orders::{LimitOrder, MarketOrder};
pub use crate::endpoints::trading::Trade;
pub use crate::endpoints::transfers::{NetworkFee, SendCoins};
pub use crate::{
    ApiResponse, Buycoins, ClientConfig, Credentials, ErrorEntry, FieldSelection, OrderSide,
    OrderStatus, PriceType, Transport,
};
