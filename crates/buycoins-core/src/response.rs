//! Response normalization.
//!
//! A GraphQL HTTP response carries either a `data` payload or an `errors`
//! array (sometimes both). [`normalize`] folds the two shapes into one
//! [`ApiResponse`] so callers branch on a single status. Errors take
//! precedence: a non-empty `errors` array produces a failure even when
//! partial data is present.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::{Error, Result};

/// One upstream error, flattened.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorEntry {
    /// The upstream error message.
    pub reason: String,
    /// Dot-joined path of the field that caused the error, or empty.
    pub field: String,
}

impl ErrorEntry {
    /// Create an error entry.
    pub fn new(reason: impl Into<String>, field: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
            field: field.into(),
        }
    }

    fn from_upstream(error: &Value) -> Self {
        match error {
            Value::Object(map) => {
                let reason = map
                    .get("message")
                    .map(value_to_string)
                    .unwrap_or_default();
                let field = match map.get("path") {
                    Some(Value::Array(segments)) => segments
                        .iter()
                        .map(value_to_string)
                        .collect::<Vec<_>>()
                        .join("."),
                    Some(Value::Null) | None => String::new(),
                    Some(other) => value_to_string(other),
                };
                Self { reason, field }
            }
            other => Self {
                reason: value_to_string(other),
                field: String::new(),
            },
        }
    }
}

fn value_to_string(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}

/// Outcome discriminant of an [`ApiResponse`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    /// The backend returned data.
    Success,
    /// The backend returned errors.
    Failure,
}

/// The uniform result of every API call.
///
/// Serializes with a `status` tag:
///
/// ```json
/// {"status": "failure", "errors": [{"reason": "...", "field": "getOrders"}], "raw": [...]}
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum ApiResponse<T = Value> {
    /// The decoded payload found under `data`.
    Success {
        /// The payload.
        data: T,
    },
    /// Upstream errors, flattened, along with the untouched `errors` value.
    Failure {
        /// One entry per upstream error, in order.
        errors: Vec<ErrorEntry>,
        /// The original `errors` value.
        raw: Value,
    },
}

impl<T> ApiResponse<T> {
    /// The outcome discriminant.
    pub fn status(&self) -> Status {
        match self {
            Self::Success { .. } => Status::Success,
            Self::Failure { .. } => Status::Failure,
        }
    }

    /// Check if the backend returned data.
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success { .. })
    }

    /// Check if the backend returned errors.
    pub fn is_failure(&self) -> bool {
        matches!(self, Self::Failure { .. })
    }

    /// The success payload, if any.
    pub fn data(&self) -> Option<&T> {
        match self {
            Self::Success { data } => Some(data),
            Self::Failure { .. } => None,
        }
    }

    /// The flattened errors; empty on success.
    pub fn errors(&self) -> &[ErrorEntry] {
        match self {
            Self::Success { .. } => &[],
            Self::Failure { errors, .. } => errors,
        }
    }

    /// Transform the success payload.
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> ApiResponse<U> {
        match self {
            Self::Success { data } => ApiResponse::Success { data: f(data) },
            Self::Failure { errors, raw } => ApiResponse::Failure { errors, raw },
        }
    }

    /// Convert into a standard `Result`, with the errors on the `Err` side.
    pub fn into_result(self) -> std::result::Result<T, Vec<ErrorEntry>> {
        match self {
            Self::Success { data } => Ok(data),
            Self::Failure { errors, .. } => Err(errors),
        }
    }
}

impl ApiResponse<Value> {
    /// Deserialize the success payload into a concrete type.
    ///
    /// Failures pass through unchanged.
    ///
    /// # Example
    ///
    /// ```
    /// use buycoins_core::response::{normalize, ApiResponse};
    /// use serde::Deserialize;
    ///
    /// #[derive(Deserialize)]
    /// struct Prices {
    ///     #[serde(rename = "getPrices")]
    ///     prices: Vec<serde_json::Value>,
    /// }
    ///
    /// let response = normalize(&serde_json::json!({"data": {"getPrices": []}}))?;
    /// let typed: ApiResponse<Prices> = response.into_typed()?;
    /// assert!(typed.data().unwrap().prices.is_empty());
    /// # Ok::<(), buycoins_core::Error>(())
    /// ```
    pub fn into_typed<T: DeserializeOwned>(self) -> Result<ApiResponse<T>> {
        match self {
            Self::Success { data } => serde_json::from_value(data)
                .map(|data| ApiResponse::Success { data })
                .map_err(|e| Error::malformed(format!("unexpected data shape: {e}"))),
            Self::Failure { errors, raw } => Ok(ApiResponse::Failure { errors, raw }),
        }
    }

    /// Look up a top-level field of the success payload, usually the command
    /// name.
    pub fn field(&self, name: &str) -> Option<&Value> {
        self.data().and_then(|data| data.get(name))
    }
}

/// Fold a decoded response body into an [`ApiResponse`].
///
/// Fails with [`Error::MalformedResponse`] only when `body` is not a JSON
/// object. Only a non-empty `errors` array produces a failure; any other
/// `errors` value is ignored. A missing `data` key becomes an empty object,
/// an explicit `null` is kept.
pub fn normalize(body: &Value) -> Result<ApiResponse> {
    let Value::Object(map) = body else {
        return Err(Error::malformed(format!(
            "expected a JSON object, got {}",
            kind_of(body)
        )));
    };

    if let Some(Value::Array(errors)) = map.get("errors")
        && !errors.is_empty()
    {
        return Ok(ApiResponse::Failure {
            errors: errors.iter().map(ErrorEntry::from_upstream).collect(),
            raw: Value::Array(errors.clone()),
        });
    }

    let data = map
        .get("data")
        .cloned()
        .unwrap_or_else(|| Value::Object(Map::new()));
    Ok(ApiResponse::Success { data })
}

/// Parse a response body and normalize it.
///
/// Text that is not JSON is reported as [`Error::MalformedResponse`].
pub fn normalize_str(body: &str) -> Result<ApiResponse> {
    let value: Value = serde_json::from_str(body)
        .map_err(|e| Error::malformed(format!("body is not JSON: {e}")))?;
    normalize(&value)
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
