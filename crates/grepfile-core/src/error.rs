//! Error taxonomy for a single query.
//!
//! Only [`QueryError`] escapes a query. Per-record [`ParseError`]s are
//! recovered where they happen and never convert into a `QueryError`.

use thiserror::Error;

/// Why a query did not produce a result.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum QueryError {
    /// Credentials are not available; no request was sent.
    #[error("Authentication tokens are missing. Run `grepfile auth` first.")]
    AuthMissing,

    /// Local configuration prevented dispatch.
    #[error("configuration error: {0}")]
    Config(String),

    /// The request or the response stream failed.
    #[error("request failed: {0}")]
    Transport(String),

    /// The caller cancelled the query before it settled.
    #[error("query cancelled")]
    Cancelled,
}

impl QueryError {
    /// Whether this failure should be shown to the user.
    ///
    /// Cancellation is user-initiated and ends silently.
    pub fn is_user_visible(&self) -> bool {
        !matches!(self, QueryError::Cancelled)
    }
}

/// A single streamed record could not be classified.
#[derive(Debug, Error)]
pub enum ParseError {
    /// The record is not valid JSON.
    #[error("malformed record: {0}")]
    Json(#[from] serde_json::Error),

    /// The record has no `type` field.
    #[error("record has no `type` field")]
    MissingType,

    /// A `sources` payload did not match the expected shape.
    #[error("malformed sources payload: {0}")]
    Sources(serde_json::Error),
}
