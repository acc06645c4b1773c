use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::null_as_default;

/// A delivered session of a project. `session_code` is the unique key.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Session {
    pub session_name: String,
    pub session_code: String,
    /// Parent project. Existence is assumed, not checked.
    pub project_code: String,
    pub session_date: NaiveDate,
    #[serde(default, deserialize_with = "null_as_default")]
    pub hours_delivered: f64,
    /// Free text, comma separated.
    #[serde(default, deserialize_with = "null_as_default")]
    pub facilitators: String,
}

impl Session {
    /// Facilitator names split on commas, blanks dropped.
    #[must_use]
    pub fn facilitator_list(&self) -> Vec<&str> {
        self.facilitators
            .split(',')
            .map(str::trim)
            .filter(|name| !name.is_empty())
            .collect()
    }
}
