//! Argument validation shared by the endpoint wrappers.

use std::fmt;
use std::str::FromStr;

use buycoins_core::{validate_selection, ArgValue, FieldSelection};
use serde::{Deserialize, Serialize};

/// An argument rejected before any request was made.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// The deposit account name is blank.
    #[error("Please provide account name to create bank account for")]
    AccountName,

    /// A string identifier argument is blank.
    #[error("{0} argument must be a valid string identifier.")]
    BlankIdentifier(&'static str),

    /// A numeric argument is zero, negative or not finite.
    #[error("{0} argument must be a valid float and greater than 0.")]
    NonPositive(&'static str),

    /// A caller-supplied selection contains a field without a name.
    #[error("Fields contains a node dict without a 'field' property.")]
    InvalidFields,

    /// Unknown personal order status.
    #[error("Personal orders status can only be 'open' or 'completed'.")]
    OrderStatus(String),

    /// Unknown order side.
    #[error("Order side can only be 'buy' or 'sell'.")]
    OrderSide(String),

    /// Unknown price type.
    #[error("Price type can only be 'static' or 'dynamic'.")]
    PriceType(String),

    /// The price argument matching the chosen price type is missing.
    #[error("{argument} argument is required when price type is '{price_type}'.")]
    MissingPrice {
        /// The missing argument.
        argument: &'static str,
        /// The chosen price type.
        price_type: PriceType,
    },
}

macro_rules! token_enum {
    (
        $(#[$meta:meta])*
        $name:ident, $error:ident { $($variant:ident => $token:literal),+ $(,)? }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub enum $name {
            $(
                #[doc = concat!("`", $token, "`")]
                #[serde(rename = $token)]
                $variant,
            )+
        }

        impl $name {
            /// The token the backend expects.
            pub fn as_str(self) -> &'static str {
                match self {
                    $(Self::$variant => $token,)+
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $name {
            type Err = ValidationError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($token => Ok(Self::$variant),)+
                    other => Err(ValidationError::$error(other.to_string())),
                }
            }
        }

        impl From<$name> for ArgValue {
            fn from(value: $name) -> Self {
                ArgValue::Token(value.as_str().to_string())
            }
        }
    };
}

token_enum! {
    /// Which side of the book an order is on.
    OrderSide, OrderSide { Buy => "buy", Sell => "sell" }
}

token_enum! {
    /// How a limit order is priced.
    PriceType, PriceType { Static => "static", Dynamic => "dynamic" }
}

token_enum! {
    /// Status filter for personal orders.
    OrderStatus, OrderStatus { Open => "open", Completed => "completed" }
}

impl Default for OrderStatus {
    fn default() -> Self {
        Self::Open
    }
}

/// Reject blank string identifiers.
pub(crate) fn identifier<'a>(name: &'static str, value: &'a str) -> Result<&'a str, ValidationError> {
    if value.trim().is_empty() {
        Err(ValidationError::BlankIdentifier(name))
    } else {
        Ok(value)
    }
}

/// Reject amounts that are not strictly positive finite numbers.
pub(crate) fn positive(name: &'static str, value: f64) -> Result<f64, ValidationError> {
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(ValidationError::NonPositive(name))
    }
}

/// Use the caller's selection when given, after checking it, or the default.
pub(crate) fn selection_or(
    fields: &[FieldSelection],
    default: fn() -> Vec<FieldSelection>,
) -> Result<Vec<FieldSelection>, ValidationError> {
    if fields.is_empty() {
        return Ok(default());
    }
    validate_selection(fields).map_err(|_| ValidationError::InvalidFields)?;
    Ok(fields.to_vec())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_enums() {
        assert_eq!("buy".parse::<OrderSide>(), Ok(OrderSide::Buy));
        assert_eq!("dynamic".parse::<PriceType>(), Ok(PriceType::Dynamic));
        assert_eq!(OrderStatus::default().as_str(), "open");
        assert_eq!(
            "closed".parse::<OrderStatus>().unwrap_err().to_string(),
            "Personal orders status can only be 'open' or 'completed'."
        );
        assert_eq!(
            "hold".parse::<OrderSide>(),
            Err(ValidationError::OrderSide("hold".into()))
        );
        assert_eq!(ArgValue::from(OrderSide::Sell).to_string(), "sell");
    }

    #[test]
    fn test_identifier() {
        assert_eq!(identifier("cryptocurrency", "bitcoin"), Ok("bitcoin"));
        assert_eq!(
            identifier("cryptocurrency", "  ").unwrap_err().to_string(),
            "cryptocurrency argument must be a valid string identifier."
        );
    }

    #[test]
    fn test_positive() {
        assert_eq!(positive("amount", 0.01), Ok(0.01));
        for bad in [0.0, -1.0, f64::NAN, f64::INFINITY] {
            assert_eq!(
                positive("amount", bad),
                Err(ValidationError::NonPositive("amount"))
            );
        }
        assert_eq!(
            ValidationError::NonPositive("amount").to_string(),
            "amount argument must be a valid float and greater than 0."
        );
    }

    #[test]
    fn test_selection_or() {
        let default = || FieldSelection::leaves(["id"]);

        assert_eq!(selection_or(&[], default).unwrap(), default());

        let custom = FieldSelection::leaves(["cryptocurrency"]);
        assert_eq!(selection_or(&custom, default).unwrap(), custom);

        let broken = vec![FieldSelection::new("cryptocurrency"), FieldSelection::new("")];
        assert_eq!(
            selection_or(&broken, default),
            Err(ValidationError::InvalidFields)
        );
    }

    #[test]
    fn test_missing_price_message() {
        let err = ValidationError::MissingPrice {
            argument: "staticPrice",
            price_type: PriceType::Static,
        };
        assert_eq!(
            err.to_string(),
            "staticPrice argument is required when price type is 'static'."
        );
    }
}
