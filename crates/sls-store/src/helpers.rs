//! Record-to-entity conversion helpers.
//!
//! Every repo converts between typed entities and the untyped [`Record`]
//! rows the store exchanges. These helpers isolate that step and attach the
//! table name to any failure.

use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use sls_core::collections::{Collection, KeyFilter};

use crate::Record;
use crate::error::StoreError;

/// Serialize an entity into a record.
///
/// # Errors
///
/// Returns `StoreError::Encode` if the entity does not serialize to a JSON object.
pub fn to_record<T: Serialize>(collection: Collection, entity: &T) -> Result<Record, StoreError> {
    match serde_json::to_value(entity) {
        Ok(Value::Object(map)) => Ok(map),
        Ok(other) => Err(StoreError::Encode {
            table: collection.table(),
            reason: format!("expected a JSON object, got {other}"),
        }),
        Err(e) => Err(StoreError::Encode {
            table: collection.table(),
            reason: e.to_string(),
        }),
    }
}

/// Deserialize one record into an entity.
///
/// # Errors
///
/// Returns `StoreError::Decode` if a required column is missing or mistyped.
pub fn from_record<T: DeserializeOwned>(
    collection: Collection,
    record: Record,
) -> Result<T, StoreError> {
    serde_json::from_value(Value::Object(record)).map_err(|source| StoreError::Decode {
        table: collection.table(),
        source,
    })
}

/// Deserialize a list of records, failing on the first bad row.
///
/// # Errors
///
/// Returns `StoreError::Decode` naming the table.
pub fn from_records<T: DeserializeOwned>(
    collection: Collection,
    records: Vec<Record>,
) -> Result<Vec<T>, StoreError> {
    records
        .into_iter()
        .map(|record| from_record(collection, record))
        .collect()
}

/// Whether a record satisfies an equality filter.
///
/// Only string columns are compared, matching how keys are stored.
#[must_use]
pub fn matches_filter(record: &Record, filter: Option<&KeyFilter>) -> bool {
    filter.is_none_or(|f| record.get(f.column()).and_then(Value::as_str) == Some(f.value()))
}
