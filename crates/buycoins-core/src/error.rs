//! Error types for document construction and response normalization.

/// Result type alias for core operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised by the query builder and the response normalizer.
///
/// Construction errors are raised before any network activity and are always
/// fixable by the caller. Upstream API errors are never represented here; they
/// come back as [`ApiResponse::Failure`](crate::ApiResponse::Failure) values.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// The operation keyword is neither `query` nor `mutation`.
    #[error("Invalid operation {0}")]
    InvalidOperation(String),

    /// The root command is empty or whitespace-only.
    #[error("Invalid command {0:?}")]
    InvalidCommand(String),

    /// The selection is empty, or a node somewhere in the tree has no name.
    #[error("{}", empty_selection_message(.path))]
    EmptySelection {
        /// Dot-joined path to the parent of the offending node (empty at the root).
        path: String,
    },

    /// An argument value has no GraphQL literal form (`NaN` or infinity).
    #[error("Invalid value for argument {0:?}")]
    InvalidArgument(String),

    /// The response body is not a JSON object.
    #[error("Malformed response: {0}")]
    MalformedResponse(String),
}

fn empty_selection_message(path: &str) -> String {
    if path.is_empty() {
        "Selection is empty or contains a field without a name".to_string()
    } else {
        format!("Selection under '{path}' is empty or contains a field without a name")
    }
}

impl Error {
    /// Create an empty-selection error for the node at `path`.
    pub fn empty_selection(path: impl Into<String>) -> Self {
        Self::EmptySelection { path: path.into() }
    }

    /// Create a malformed-response error.
    pub fn malformed(message: impl Into<String>) -> Self {
        Self::MalformedResponse(message.into())
    }

    /// Whether this error was raised while building a document.
    pub fn is_construction_error(&self) -> bool {
        !matches!(self, Self::MalformedResponse(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(
            Error::InvalidOperation("subscription".into()).to_string(),
            "Invalid operation subscription"
        );
        assert_eq!(
            Error::InvalidCommand("   ".into()).to_string(),
            "Invalid command \"   \""
        );
        assert_eq!(
            Error::empty_selection("orders.edges").to_string(),
            "Selection under 'orders.edges' is empty or contains a field without a name"
        );
    }

    #[test]
    fn test_construction_classification() {
        assert!(Error::InvalidCommand(String::new()).is_construction_error());
        assert!(Error::empty_selection("").is_construction_error());
        assert!(Error::InvalidArgument("amount".into()).is_construction_error());
        assert!(!Error::malformed("not an object").is_construction_error());
    }
}
