//! Session repository.

use sls_core::collections::{Collection, KeyFilter};
use sls_core::entities::Session;

use crate::RecordStore;
use crate::error::StoreError;
use crate::service::SlsService;

impl<S: RecordStore> SlsService<S> {
    /// Sessions, optionally restricted to one project.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the select fails or a row does not decode.
    pub async fn get_sessions(&self, project_code: Option<&str>) -> Result<Vec<Session>, StoreError> {
        self.fetch(Collection::Sessions, KeyFilter::project(project_code))
            .await
    }

    /// Append a session. The parent project is assumed to exist.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the store rejects the insert.
    pub async fn add_session(&self, session: &Session) -> Result<Session, StoreError> {
        self.append(Collection::Sessions, session).await
    }
}
