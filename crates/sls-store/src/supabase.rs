//! Supabase (PostgREST) record store.
//!
//! Every table is exposed at `{url}/rest/v1/{table}`. Reads use
//! `select=*` with an optional `column=eq.value` filter; writes POST one
//! JSON object and ask for the stored row back.

use std::time::Duration;

use sls_config::StoreConfig;
use sls_core::collections::{Collection, KeyFilter};

use crate::error::StoreError;
use crate::http::{self, check_response};
use crate::{Record, RecordStore};

/// HTTP client for a Supabase project's REST interface.
pub struct SupabaseStore {
    http: reqwest::Client,
    base_url: String,
    key: String,
}

impl SupabaseStore {
    /// Build a client from validated store configuration.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Http` if the underlying `reqwest::Client` fails to build.
    pub fn new(config: &StoreConfig) -> Result<Self, StoreError> {
        let http = reqwest::Client::builder()
            .user_agent(concat!("sls/", env!("CARGO_PKG_VERSION")))
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;
        Ok(Self {
            http,
            base_url: config.base_url().to_string(),
            key: config.key.trim().to_string(),
        })
    }

    /// REST endpoint for a collection.
    #[must_use]
    pub fn endpoint(&self, collection: Collection) -> String {
        format!("{}/rest/v1/{}", self.base_url, collection.table())
    }

    /// Full select URL including the optional equality filter.
    #[must_use]
    pub fn select_url(&self, collection: Collection, filter: Option<&KeyFilter>) -> String {
        let mut url = format!("{}?select=*", self.endpoint(collection));
        if let Some(filter) = filter {
            url.push_str(&format!(
                "&{}=eq.{}",
                filter.column(),
                urlencoding::encode(filter.value())
            ));
        }
        url
    }

    fn request(&self, method: reqwest::Method, url: &str) -> reqwest::RequestBuilder {
        self.http
            .request(method, url)
            .header("apikey", &self.key)
            .bearer_auth(&self.key)
    }

    fn insert_request(&self, collection: Collection, record: &Record) -> reqwest::RequestBuilder {
        self.request(reqwest::Method::POST, &self.endpoint(collection))
            .header("Prefer", "return=representation")
            .json(record)
    }
}

impl RecordStore for SupabaseStore {
    async fn select(
        &self,
        collection: Collection,
        filter: Option<&KeyFilter>,
    ) -> Result<Vec<Record>, StoreError> {
        let url = self.select_url(collection, filter);
        tracing::debug!(table = collection.table(), filter = ?filter, "select");

        let resp = check_response(self.request(reqwest::Method::GET, &url).send().await?).await?;
        let rows = http::rows(collection, &resp.text().await?)?;

        tracing::debug!(table = collection.table(), rows = rows.len(), "select done");
        Ok(rows)
    }

    async fn insert(&self, collection: Collection, record: Record) -> Result<Record, StoreError> {
        tracing::debug!(table = collection.table(), "insert");

        let resp = check_response(self.insert_request(collection, &record).send().await?).await?;
        http::stored_row(collection, record, &resp.text().await?)
    }
}
