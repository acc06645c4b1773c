//! Typed access to the record collections.
//!
//! `SlsService` wraps any [`RecordStore`]. The per-collection operations are
//! implemented in [`crate::repos`] as `impl SlsService` blocks.

use serde::Serialize;
use serde::de::DeserializeOwned;
use sls_core::collections::{Collection, KeyFilter};

use crate::RecordStore;
use crate::error::StoreError;
use crate::helpers::{from_record, from_records, to_record};

/// Data access layer over one store handle.
///
/// Constructed once at startup and passed to each page; holds no state
/// beyond the store itself.
pub struct SlsService<S> {
    store: S,
}

impl<S: RecordStore> SlsService<S> {
    /// Wrap a store.
    pub const fn new(store: S) -> Self {
        Self { store }
    }

    /// Access the underlying store.
    pub const fn store(&self) -> &S {
        &self.store
    }

    /// Select rows and decode them as `T`.
    pub(crate) async fn fetch<T: DeserializeOwned>(
        &self,
        collection: Collection,
        filter: Option<KeyFilter>,
    ) -> Result<Vec<T>, StoreError> {
        let rows = self.store.select(collection, filter.as_ref()).await?;
        from_records(collection, rows)
    }

    /// Insert one entity and decode the stored row back into `T`.
    pub(crate) async fn append<T: Serialize + DeserializeOwned>(
        &self,
        collection: Collection,
        entity: &T,
    ) -> Result<T, StoreError> {
        let record = to_record(collection, entity)?;
        match self.store.insert(collection, record).await {
            Ok(stored) => from_record(collection, stored),
            Err(error) => {
                tracing::warn!(table = collection.table(), %error, "insert failed");
                Err(error)
            }
        }
    }
}
