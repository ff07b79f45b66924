//! Error types for dso-core.
//!
//! Every failure is local to the component that issued the request; nothing
//! here is fatal to the process.

use thiserror::Error;

/// Errors that can occur while reading from the ontology database.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    /// Document does not exist (HTTP 404)
    #[error("Not found: {0}")]
    NotFound(String),
    /// Transport failure or unexpected HTTP status
    #[error("Network failure: {0}")]
    Network(String),
    /// Search service rejected the query (HTTP 400)
    #[error("Query failed: {0}")]
    Query(String),
    /// Response body does not match the expected record shape
    #[error("Malformed response: {0}")]
    Decode(String),
    /// Base URL cannot be used to build request URLs
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),
}

impl From<serde_json::Error> for FetchError {
    fn from(err: serde_json::Error) -> Self {
        FetchError::Decode(err.to_string())
    }
}

impl From<url::ParseError> for FetchError {
    fn from(err: url::ParseError) -> Self {
        FetchError::InvalidUrl(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_serde_error_is_decode() {
        let err: FetchError = serde_json::from_str::<u32>("\"nope\"").unwrap_err().into();
        assert!(matches!(err, FetchError::Decode(_)));
    }

    #[test]
    fn test_display() {
        let err = FetchError::Query("unbalanced parenthesis".into());
        assert_eq!(err.to_string(), "Query failed: unbalanced parenthesis");
    }
}
