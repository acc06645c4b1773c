//! In-process record store.
//!
//! Mirrors the hosted schema closely enough for tests and demos: rows are
//! kept per collection in insertion order, unique keys are enforced the way
//! the hosted tables enforce them, and each stored row gets an `id`.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Mutex, PoisonError};

use serde_json::Value;
use sls_core::collections::{Collection, KeyFilter};

use crate::error::StoreError;
use crate::helpers::matches_filter;
use crate::{Record, RecordStore};

/// Postgres SQLSTATE for a unique constraint violation.
const UNIQUE_VIOLATION: &str = "23505";

#[derive(Debug, Default)]
pub struct MemoryStore {
    tables: Mutex<HashMap<Collection, Vec<Record>>>,
    next_id: AtomicUsize,
    insert_calls: AtomicUsize,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of times `insert` has been called, successful or not.
    #[must_use]
    pub fn insert_calls(&self) -> usize {
        self.insert_calls.load(Ordering::SeqCst)
    }

    /// Number of rows currently stored in `collection`.
    #[must_use]
    pub fn len(&self, collection: Collection) -> usize {
        self.tables
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .get(&collection)
            .map_or(0, Vec::len)
    }

    /// Whether `collection` holds no rows.
    #[must_use]
    pub fn is_empty(&self, collection: Collection) -> bool {
        self.len(collection) == 0
    }

    fn conflict(collection: Collection, rows: &[Record], record: &Record) -> Option<StoreError> {
        let column = collection.unique_key()?;
        let value = record.get(column)?;
        rows.iter()
            .any(|row| row.get(column) == Some(value))
            .then(|| StoreError::Api {
                status: 409,
                code: Some(UNIQUE_VIOLATION.to_string()),
                message: format!(
                    "duplicate key value violates unique constraint \"{}_{column}_key\"",
                    collection.table()
                ),
            })
    }
}

impl RecordStore for MemoryStore {
    async fn select(
        &self,
        collection: Collection,
        filter: Option<&KeyFilter>,
    ) -> Result<Vec<Record>, StoreError> {
        let tables = self.tables.lock().unwrap_or_else(PoisonError::into_inner);
        Ok(tables
            .get(&collection)
            .map(|rows| {
                rows.iter()
                    .filter(|row| matches_filter(row, filter))
                    .cloned()
                    .collect()
            })
            .unwrap_or_default())
    }

    async fn insert(
        &self,
        collection: Collection,
        mut record: Record,
    ) -> Result<Record, StoreError> {
        self.insert_calls.fetch_add(1, Ordering::SeqCst);

        let mut tables = self.tables.lock().unwrap_or_else(PoisonError::into_inner);
        let rows = tables.entry(collection).or_default();
        if let Some(error) = Self::conflict(collection, rows, &record) {
            return Err(error);
        }

        if !record.contains_key("id") {
            let id = self.next_id.fetch_add(1, Ordering::SeqCst) + 1;
            record.insert("id".to_string(), Value::from(id));
        }
        rows.push(record.clone());
        Ok(record)
    }
}
