//! Participant feedback repository.

use sls_core::collections::{Collection, KeyFilter};
use sls_core::entities::Feedback;

use crate::RecordStore;
use crate::error::StoreError;
use crate::service::SlsService;

impl<S: RecordStore> SlsService<S> {
    /// Feedback records, optionally restricted to one session.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the select fails or a row does not decode.
    pub async fn get_feedback(&self, session_code: Option<&str>) -> Result<Vec<Feedback>, StoreError> {
        self.fetch(Collection::Feedback, KeyFilter::session(session_code))
            .await
    }

    /// Append one participant's feedback.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the store rejects the insert.
    pub async fn add_feedback(&self, feedback: &Feedback) -> Result<Feedback, StoreError> {
        self.append(Collection::Feedback, feedback).await
    }
}

#[cfg(test)]
mod tests {
    use crate::test_support::helpers::{feedback, test_service};

    #[tokio::test]
    async fn stored_feedback_matches_submission() {
        let svc = test_service();
        let submitted = feedback("S1", "Sam");
        let stored = svc.add_feedback(&submitted).await.unwrap();
        assert_eq!(stored, submitted);

        let read = svc.get_feedback(Some("S1")).await.unwrap();
        assert_eq!(read, vec![submitted]);
    }

    #[tokio::test]
    async fn no_feedback_for_session_is_empty() {
        let svc = test_service();
        svc.add_feedback(&feedback("S1", "Sam")).await.unwrap();
        assert!(svc.get_feedback(Some("S2")).await.unwrap().is_empty());
        assert_eq!(svc.get_feedback(None).await.unwrap().len(), 1);
    }
}
