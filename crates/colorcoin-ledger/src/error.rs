//! Error types for ledger API operations.

use colorcoin_transaction::TransactionError;

/// Errors that can occur when interacting with the ledger API.
#[derive(Debug, thiserror::Error)]
pub enum LedgerError {
    /// HTTP request failed before a response was received.
    #[error("HTTP error: {0}")]
    HttpError(#[from] reqwest::Error),

    /// Server returned an error status with a body that is not a
    /// structured API error.
    #[error("transport error ({status_code}): {message}")]
    TransportError {
        /// HTTP status code.
        status_code: u16,
        /// Raw response body.
        message: String,
    },

    /// Server returned a structured `{ErrorCode, SubCode}` error.
    #[error(
        "API error {error_code}{}",
        .sub_code.as_deref().map(|s| format!(" ({s})")).unwrap_or_default()
    )]
    ApiError {
        /// The `ErrorCode` field.
        error_code: String,
        /// The optional `SubCode` field.
        sub_code: Option<String>,
    },

    /// A successful response body could not be deserialized.
    #[error("serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    /// A field was present but its content is unusable.
    #[error("invalid data: {0}")]
    InvalidData(String),

    /// The returned raw transaction could not be decoded.
    #[error(transparent)]
    Transaction(#[from] TransactionError),
}

/// Coarse classification of a [`LedgerError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Network failure or an unstructured error response.
    Transport,
    /// Well-formed `{ErrorCode, SubCode}` error response.
    Api,
    /// Malformed or missing data in a successful response.
    Data,
}

impl LedgerError {
    /// Classify this error as transport, API, or data.
    pub fn kind(&self) -> ErrorKind {
        match self {
            LedgerError::HttpError(_) | LedgerError::TransportError { .. } => ErrorKind::Transport,
            LedgerError::ApiError { .. } => ErrorKind::Api,
            LedgerError::SerializationError(_)
            | LedgerError::InvalidData(_)
            | LedgerError::Transaction(_) => ErrorKind::Data,
        }
    }
}
