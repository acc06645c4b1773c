//! Session impact repository.

use sls_core::collections::{Collection, KeyFilter};
use sls_core::entities::Impact;

use crate::RecordStore;
use crate::error::StoreError;
use crate::service::SlsService;

impl<S: RecordStore> SlsService<S> {
    /// Impact records, optionally restricted to one session.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the select fails or a row does not decode.
    pub async fn get_impact(&self, session_code: Option<&str>) -> Result<Vec<Impact>, StoreError> {
        self.fetch(Collection::Impact, KeyFilter::session(session_code))
            .await
    }

    /// Append an impact record for a session.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the store rejects the insert.
    pub async fn add_impact(&self, impact: &Impact) -> Result<Impact, StoreError> {
        self.append(Collection::Impact, impact).await
    }
}

#[cfg(test)]
mod tests {
    use serde_json::Value;
    use sls_core::collections::Collection;
    use sls_core::entities::Impact;

    use crate::RecordStore;
    use crate::test_support::helpers::test_service;

    #[tokio::test]
    async fn notes_stored_under_store_column() {
        let svc = test_service();
        svc.add_impact(&Impact {
            session_code: "S1".into(),
            action_taken: true,
            new_contacts_formed: 4,
            individuals_impacted: 20,
            member_contributions: 3,
            engagement_hours: 6.5,
            other_notes: "press coverage".into(),
        })
        .await
        .unwrap();

        let rows = svc.store().select(Collection::Impact, None).await.unwrap();
        assert_eq!(
            rows[0].get("other_impact_notes"),
            Some(&Value::from("press coverage"))
        );

        let read = svc.get_impact(Some("S1")).await.unwrap();
        assert_eq!(read[0].other_notes, "press coverage");
        assert_eq!(read[0].individuals_impacted, 20);
    }
}
