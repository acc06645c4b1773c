//! Participant repository.

use sls_core::collections::{Collection, KeyFilter};
use sls_core::entities::Participant;

use crate::RecordStore;
use crate::error::StoreError;
use crate::service::SlsService;

impl<S: RecordStore> SlsService<S> {
    /// Participants, optionally restricted to one session.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the select fails or a row does not decode.
    pub async fn get_participants(
        &self,
        session_code: Option<&str>,
    ) -> Result<Vec<Participant>, StoreError> {
        self.fetch(Collection::Participants, KeyFilter::session(session_code))
            .await
    }

    /// Register a participant for a session.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the store rejects the insert.
    pub async fn add_participant(
        &self,
        participant: &Participant,
    ) -> Result<Participant, StoreError> {
        self.append(Collection::Participants, participant).await
    }
}

#[cfg(test)]
mod tests {
    use crate::test_support::helpers::test_service;
    use sls_core::entities::Participant;

    #[tokio::test]
    async fn participants_scoped_to_session() {
        let svc = test_service();
        for (session, name) in [("S1", "Sam"), ("S1", "Ria"), ("S2", "Tom")] {
            svc.add_participant(&Participant {
                session_code: session.into(),
                participant_name: name.into(),
                hours_contributed: 1.0,
            })
            .await
            .unwrap();
        }

        let mut names: Vec<String> = svc
            .get_participants(Some("S1"))
            .await
            .unwrap()
            .into_iter()
            .map(|p| p.participant_name)
            .collect();
        names.sort();
        assert_eq!(names, vec!["Ria", "Sam"]);
    }
}
