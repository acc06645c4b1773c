use serde::{Deserialize, Serialize};

use super::null_as_default;

/// Outcomes recorded for a whole session.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Impact {
    pub session_code: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub action_taken: bool,
    #[serde(default, deserialize_with = "null_as_default")]
    pub new_contacts_formed: i64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub individuals_impacted: i64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub member_contributions: i64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub engagement_hours: f64,
    /// Stored in the `other_impact_notes` column.
    #[serde(
        rename = "other_impact_notes",
        default,
        deserialize_with = "null_as_default"
    )]
    pub other_notes: String,
}
