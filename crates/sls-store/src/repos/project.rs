//! Project repository.

use sls_core::collections::Collection;
use sls_core::entities::Project;

use crate::RecordStore;
use crate::error::StoreError;
use crate::service::SlsService;

impl<S: RecordStore> SlsService<S> {
    /// All projects.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the select fails or a row does not decode.
    pub async fn get_projects(&self) -> Result<Vec<Project>, StoreError> {
        self.fetch(Collection::Projects, None).await
    }

    /// Append a project. A duplicate `project_code` is rejected by the store.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the store rejects the insert.
    pub async fn add_project(&self, project: &Project) -> Result<Project, StoreError> {
        self.append(Collection::Projects, project).await
    }
}
