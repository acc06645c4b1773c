//! Shared HTTP response helpers for the PostgREST client.
//!
//! Centralizes status-code checks and body decoding so request construction
//! in [`crate::supabase`] stays focused on URLs and headers.

use serde::Deserialize;
use sls_core::collections::Collection;

use crate::Record;
use crate::error::StoreError;

/// PostgREST error body: `{"code", "message", "details", "hint"}`.
#[derive(Debug, Deserialize)]
struct PostgrestError {
    code: Option<String>,
    message: Option<String>,
    details: Option<String>,
}

/// Check an HTTP response for failure.
///
/// Returns the response unchanged on success. Non-success statuses become
/// [`StoreError::Api`], using PostgREST's error body when it parses and the
/// raw body text otherwise.
pub async fn check_response(resp: reqwest::Response) -> Result<reqwest::Response, StoreError> {
    if resp.status().is_success() {
        return Ok(resp);
    }
    let status = resp.status().as_u16();
    let body = resp.text().await.unwrap_or_default();
    Err(api_error(status, &body))
}

/// Build a [`StoreError::Api`] from a status and response body.
pub fn api_error(status: u16, body: &str) -> StoreError {
    match serde_json::from_str::<PostgrestError>(body) {
        Ok(PostgrestError {
            code,
            message: Some(message),
            details,
        }) => {
            let message = match details {
                Some(details) if !details.is_empty() => format!("{message} ({details})"),
                _ => message,
            };
            StoreError::Api {
                status,
                code,
                message,
            }
        }
        _ => StoreError::Api {
            status,
            code: None,
            message: if body.trim().is_empty() {
                format!("request failed with status {status}")
            } else {
                body.trim().to_string()
            },
        },
    }
}

/// Decode a select response body into rows.
pub fn rows(collection: Collection, body: &str) -> Result<Vec<Record>, StoreError> {
    serde_json::from_str(body).map_err(|source| StoreError::Decode {
        table: collection.table(),
        source,
    })
}

/// The row the store reports for an insert made with
/// `Prefer: return=representation`.
///
/// An empty body or an empty array yields the submitted record unchanged.
pub fn stored_row(
    collection: Collection,
    submitted: Record,
    body: &str,
) -> Result<Record, StoreError> {
    if body.trim().is_empty() {
        return Ok(submitted);
    }
    let mut returned = rows(collection, body)?;
    Ok(if returned.is_empty() {
        submitted
    } else {
        returned.swap_remove(0)
    })
}
