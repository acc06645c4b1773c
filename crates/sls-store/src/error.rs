//! Store error types for sls-store.

use thiserror::Error;

/// Errors from record store operations.
///
/// None of these are retried; they surface to the page that issued the call.
#[derive(Debug, Error)]
pub enum StoreError {
    /// HTTP transport error (connectivity, timeout, TLS).
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The store rejected the request (duplicate key, bad column, auth).
    #[error("API error ({status}): {message}")]
    Api {
        /// HTTP status code returned by the store.
        status: u16,
        /// Postgres/PostgREST error code (e.g., `23505` for unique violations).
        code: Option<String>,
        /// Error message or response body.
        message: String,
    },

    /// A returned row could not be read as the collection's entity.
    #[error("failed to decode row from '{table}': {source}")]
    Decode {
        table: &'static str,
        #[source]
        source: serde_json::Error,
    },

    /// An entity could not be turned into a record.
    #[error("failed to encode record for '{table}': {reason}")]
    Encode { table: &'static str, reason: String },
}

impl StoreError {
    /// Whether the store refused the write because a unique key already exists.
    #[must_use]
    pub fn is_duplicate_key(&self) -> bool {
        matches!(self, Self::Api { code: Some(code), .. } if code == "23505")
    }
}
