//! The five external record collections and the key filters used to read them.

use serde::Serialize;
use std::fmt;

// ---------------------------------------------------------------------------
// Collection
// ---------------------------------------------------------------------------

/// A table in the hosted store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Collection {
    Projects,
    Sessions,
    Participants,
    Feedback,
    Impact,
}

impl Collection {
    /// Every collection, in the order pages depend on them.
    pub const ALL: [Self; 5] = [
        Self::Projects,
        Self::Sessions,
        Self::Participants,
        Self::Feedback,
        Self::Impact,
    ];

    /// Table name in the hosted store.
    #[must_use]
    pub const fn table(self) -> &'static str {
        match self {
            Self::Projects => "projects",
            Self::Sessions => "sessions",
            Self::Participants => "session_participants",
            Self::Feedback => "participant_feedback",
            Self::Impact => "session_impact",
        }
    }

    /// Column that must be unique across the table, if the hosted schema
    /// declares one.
    #[must_use]
    pub const fn unique_key(self) -> Option<&'static str> {
        match self {
            Self::Projects => Some("project_code"),
            Self::Sessions => Some("session_code"),
            Self::Participants | Self::Feedback | Self::Impact => None,
        }
    }
}

impl fmt::Display for Collection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.table())
    }
}

// ---------------------------------------------------------------------------
// KeyFilter
// ---------------------------------------------------------------------------

/// Equality filter on a parent key.
///
/// Sessions are filtered by their project; participants, feedback, and
/// impact records by their session.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum KeyFilter {
    ProjectCode(String),
    SessionCode(String),
}

impl KeyFilter {
    /// Build a filter from an optional key. Empty keys mean "no filter".
    #[must_use]
    pub fn project(code: Option<&str>) -> Option<Self> {
        code.filter(|c| !c.is_empty())
            .map(|c| Self::ProjectCode(c.to_string()))
    }

    /// Build a filter from an optional key. Empty keys mean "no filter".
    #[must_use]
    pub fn session(code: Option<&str>) -> Option<Self> {
        code.filter(|c| !c.is_empty())
            .map(|c| Self::SessionCode(c.to_string()))
    }

    /// Column the filter applies to.
    #[must_use]
    pub const fn column(&self) -> &'static str {
        match self {
            Self::ProjectCode(_) => "project_code",
            Self::SessionCode(_) => "session_code",
        }
    }

    /// Value the column must equal.
    #[must_use]
    pub fn value(&self) -> &str {
        match self {
            Self::ProjectCode(v) | Self::SessionCode(v) => v,
        }
    }
}

impl fmt::Display for KeyFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}={}", self.column(), self.value())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_names_match_hosted_schema() {
        let tables: Vec<&str> = Collection::ALL.iter().map(|c| c.table()).collect();
        assert_eq!(
            tables,
            vec![
                "projects",
                "sessions",
                "session_participants",
                "participant_feedback",
                "session_impact",
            ]
        );
    }

    #[test]
    fn only_projects_and_sessions_have_unique_keys() {
        assert_eq!(Collection::Projects.unique_key(), Some("project_code"));
        assert_eq!(Collection::Sessions.unique_key(), Some("session_code"));
        assert_eq!(Collection::Feedback.unique_key(), None);
    }

    #[test]
    fn empty_key_means_no_filter() {
        assert_eq!(KeyFilter::session(Some("")), None);
        assert_eq!(KeyFilter::project(None), None);
        assert_eq!(
            KeyFilter::session(Some("S1")),
            Some(KeyFilter::SessionCode("S1".into()))
        );
    }

    #[test]
    fn filter_display_names_column() {
        let filter = KeyFilter::ProjectCode("P1".into());
        assert_eq!(filter.column(), "project_code");
        assert_eq!(filter.to_string(), "project_code=P1");
    }

    #[test]
    fn collection_serializes_as_snake_case_name() {
        assert_eq!(
            serde_json::to_value(Collection::Participants).unwrap(),
            "participants"
        );
    }
}
