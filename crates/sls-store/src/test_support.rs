//! Shared test utilities for sls-store.

pub(crate) mod helpers {
    use chrono::NaiveDate;
    use sls_core::entities::{Feedback, Session};

    use crate::memory::MemoryStore;
    use crate::service::SlsService;

    /// Service over an empty in-memory store.
    pub fn test_service() -> SlsService<MemoryStore> {
        SlsService::new(MemoryStore::new())
    }

    pub fn session(code: &str, project_code: &str) -> Session {
        Session {
            session_name: format!("Session {code}"),
            session_code: code.to_string(),
            project_code: project_code.to_string(),
            session_date: NaiveDate::from_ymd_opt(2025, 3, 14).unwrap(),
            hours_delivered: 2.0,
            facilitators: String::from("Ada, Grace"),
        }
    }

    pub fn feedback(session_code: &str, participant: &str) -> Feedback {
        Feedback {
            session_code: session_code.to_string(),
            participant_name: participant.to_string(),
            hours_contributed: 1.5,
            knowledge_pre: 2,
            knowledge_post: 4,
            confidence_pre: 3,
            confidence_post: 4,
            action_step: true,
            new_contact: false,
            satisfaction: 5,
            nps: 9,
            notes: String::from("great session"),
        }
    }
}
