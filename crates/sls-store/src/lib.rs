//! # sls-store
//!
//! Data access layer for the session tracker.
//!
//! The hosted store is reached through the [`RecordStore`] capability: a
//! key-filtered select and a single-record insert over untyped JSON records.
//! Two implementations ship here:
//! - [`supabase::SupabaseStore`]: PostgREST over HTTPS (reqwest)
//! - [`memory::MemoryStore`]: in-process tables for tests and demos
//!
//! [`service::SlsService`] layers typed per-collection operations on top;
//! each collection has its own repo module adding methods to it.
//!
//! No caching, pagination, ordering, or retry happens at this layer. A failed
//! write surfaces to the caller as a [`error::StoreError`].

pub mod error;
pub mod helpers;
mod http;
pub mod memory;
pub mod repos;
pub mod service;
pub mod supabase;

#[cfg(test)]
mod test_support;

use std::future::Future;

use sls_core::collections::{Collection, KeyFilter};

use crate::error::StoreError;

/// One row as the store sees it: a JSON object keyed by column name.
pub type Record = serde_json::Map<String, serde_json::Value>;

/// Key-filtered select and insert against the five record collections.
pub trait RecordStore: Send + Sync {
    /// All rows of `collection` matching `filter` (every row when `None`).
    ///
    /// Result order is not guaranteed.
    fn select(
        &self,
        collection: Collection,
        filter: Option<&KeyFilter>,
    ) -> impl Future<Output = Result<Vec<Record>, StoreError>> + Send;

    /// Append one record and return the row as stored.
    fn insert(
        &self,
        collection: Collection,
        record: Record,
    ) -> impl Future<Output = Result<Record, StoreError>> + Send;
}
