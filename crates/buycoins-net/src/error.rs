//! Error types for the transport layer.

/// Transport and configuration errors.
///
/// Upstream GraphQL errors are not represented here: a well-formed response
/// carrying an `errors` array comes back as an
/// [`ApiResponse::Failure`](buycoins_core::ApiResponse::Failure).
#[derive(Debug, Clone, thiserror::Error)]
pub enum NetworkError {
    /// The request failed for a reason other than a timeout or connect error.
    #[error("HTTP request error: {0}")]
    Request(String),

    /// The endpoint is not a valid URL.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// The backend did not answer within the configured timeout.
    #[error("Request timed out")]
    Timeout,

    /// The backend could not be reached.
    #[error("Connection error: {0}")]
    Connection(String),

    /// A configured header name or value is not valid HTTP.
    #[error("Invalid header: {0}")]
    InvalidHeader(String),

    /// A non-2xx reply whose body is not a GraphQL response.
    #[error("HTTP {status}{}", .message.as_deref().map(|m| format!(": {m}")).unwrap_or_default())]
    HttpStatus {
        /// The HTTP status code.
        status: u16,
        /// The body, when there was one.
        message: Option<String>,
    },

    /// Missing or blank API keys.
    #[error("{0}")]
    Authentication(String),

    /// An environment override could not be used.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Document construction or response normalization failed.
    #[error(transparent)]
    Core(#[from] buycoins_core::Error),
}

impl NetworkError {
    /// Whether the failure happened before or without reaching the backend
    /// because of a caller mistake.
    pub fn is_caller_error(&self) -> bool {
        match self {
            Self::Authentication(_)
            | Self::Config(_)
            | Self::InvalidUrl(_)
            | Self::InvalidHeader(_) => true,
            Self::Core(err) => err.is_construction_error(),
            _ => false,
        }
    }
}

impl From<reqwest::Error> for NetworkError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            Self::Timeout
        } else if err.is_connect() {
            Self::Connection(err.to_string())
        } else {
            Self::Request(err.to_string())
        }
    }
}

impl From<url::ParseError> for NetworkError {
    fn from(err: url::ParseError) -> Self {
        Self::InvalidUrl(err.to_string())
    }
}

impl From<http::header::InvalidHeaderName> for NetworkError {
    fn from(err: http::header::InvalidHeaderName) -> Self {
        Self::InvalidHeader(err.to_string())
    }
}

impl From<http::header::InvalidHeaderValue> for NetworkError {
    fn from(err: http::header::InvalidHeaderValue) -> Self {
        Self::InvalidHeader(err.to_string())
    }
}

/// A specialized Result type for network operations.
pub type Result<T> = std::result::Result<T, NetworkError>;
