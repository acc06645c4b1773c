use serde::{Deserialize, Serialize};

use super::null_as_default;

/// A participant registered for a session.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Participant {
    pub session_code: String,
    pub participant_name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub hours_contributed: f64,
}
