//! Client Errors
//!
//! Failures surfaced by the GraphQL client.

use thiserror::Error;

/// Common result type for client operations
pub type ClientResult<T> = Result<T, ClientError>;

/// Errors from executing a GraphQL operation.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ClientError {
    /// The HTTP request did not complete or returned a non-success status.
    #[error("transport error: {0}")]
    Transport(String),

    /// The server answered with a GraphQL `errors` array.
    #[error("graphql error: {0}")]
    GraphQl(String),

    /// The response body could not be decoded.
    #[error("decode error: {0}")]
    Decode(String),

    /// The response carried neither `data` nor `errors`.
    #[error("response for {operation} has no data")]
    MissingData {
        /// Operation name that was executed.
        operation: &'static str,
    },
}

impl From<reqwest::Error> for ClientError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_decode() {
            ClientError::Decode(e.to_string())
        } else {
            ClientError::Transport(e.to_string())
        }
    }
}

impl From<serde_json::Error> for ClientError {
    fn from(e: serde_json::Error) -> Self {
        ClientError::Decode(e.to_string())
    }
}
