use serde::{Deserialize, Serialize};

use super::null_as_default;

/// One participant's pre/post feedback for a session.
///
/// Ratings are 1–5 except `nps` (0–10). Bounds are enforced when the form is
/// filled in; values read back from the store are taken as they are.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Feedback {
    pub session_code: String,
    pub participant_name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub hours_contributed: f64,
    pub knowledge_pre: i64,
    pub knowledge_post: i64,
    pub confidence_pre: i64,
    pub confidence_post: i64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub action_step: bool,
    #[serde(default, deserialize_with = "null_as_default")]
    pub new_contact: bool,
    pub satisfaction: i64,
    pub nps: i64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub notes: String,
}

impl Feedback {
    /// `knowledge_post - knowledge_pre`.
    #[must_use]
    pub const fn knowledge_gain(&self) -> i64 {
        self.knowledge_post - self.knowledge_pre
    }

    /// `confidence_post - confidence_pre`.
    #[must_use]
    pub const fn confidence_gain(&self) -> i64 {
        self.confidence_post - self.confidence_pre
    }
}
