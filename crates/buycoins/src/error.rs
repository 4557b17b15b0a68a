//! Error types for the endpoint wrappers.

use buycoins_net::NetworkError;

use crate::validation::ValidationError;

/// Result type alias for endpoint calls.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors an endpoint call can fail with.
///
/// Business-level failures reported by the backend are not errors; they are
/// returned as [`ApiResponse::Failure`](buycoins_core::ApiResponse::Failure).
#[derive(Debug, Clone, thiserror::Error)]
pub enum Error {
    /// An argument was rejected before any request was made.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The request could not be built, sent or understood.
    #[error(transparent)]
    Network(#[from] NetworkError),
}

impl From<buycoins_core::Error> for Error {
    fn from(err: buycoins_core::Error) -> Self {
        Self::Network(NetworkError::Core(err))
    }
}

impl Error {
    /// The validation failure, if that is what this is.
    pub fn as_validation(&self) -> Option<&ValidationError> {
        match self {
            Self::Validation(err) => Some(err),
            Self::Network(_) => None,
        }
    }
}
