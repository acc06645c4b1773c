//! Feedback grouped by parent project.
//!
//! Feedback only carries a `session_code`; the project comes from the
//! session table. Feedback whose session cannot be found is kept in an
//! explicit [`ProjectKey::Unresolved`] group instead of being dropped.

use std::collections::{BTreeMap, HashMap};

use serde::Serialize;
use sls_core::entities::{Feedback, Project, Session};

use crate::kpis::{KpiAccumulator, SessionKpis};

/// Group key for roll-ups. Orders every project before `Unresolved`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ProjectKey {
    Project(String),
    Unresolved,
}

impl ProjectKey {
    #[must_use]
    pub fn code(&self) -> Option<&str> {
        match self {
            Self::Project(code) => Some(code),
            Self::Unresolved => None,
        }
    }
}

/// `session_code` to `project_code` lookup.
///
/// When a session code appears more than once the first row wins and the
/// code is recorded in [`SessionIndex::duplicates`].
#[derive(Debug, Default)]
pub struct SessionIndex<'a> {
    by_code: HashMap<&'a str, &'a str>,
    duplicates: Vec<&'a str>,
}

impl<'a> SessionIndex<'a> {
    #[must_use]
    pub fn new(sessions: &'a [Session]) -> Self {
        let mut index = Self::default();
        for session in sessions {
            let code = session.session_code.as_str();
            if index.by_code.contains_key(code) {
                if !index.duplicates.contains(&code) {
                    index.duplicates.push(code);
                }
            } else {
                index.by_code.insert(code, session.project_code.as_str());
            }
        }
        index
    }

    #[must_use]
    pub fn resolve(&self, session_code: &str) -> ProjectKey {
        self.by_code
            .get(session_code)
            .map_or(ProjectKey::Unresolved, |project| {
                ProjectKey::Project((*project).to_string())
            })
    }

    #[must_use]
    pub fn duplicates(&self) -> &[&'a str] {
        &self.duplicates
    }
}

/// KPIs for one project (or for the unresolved group).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProjectRollupRow {
    /// `None` for the unresolved group.
    pub project_code: Option<String>,
    pub project_name: Option<String>,
    #[serde(flatten)]
    pub kpis: SessionKpis,
}

impl ProjectRollupRow {
    /// Label for tables: name, else code, else "(unknown session)".
    #[must_use]
    pub fn label(&self) -> &str {
        self.project_name
            .as_deref()
            .or(self.project_code.as_deref())
            .unwrap_or("(unknown session)")
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ProjectRollup {
    /// Ordered by project code, unresolved group last.
    pub rows: Vec<ProjectRollupRow>,
    /// Feedback records whose session code matched no session.
    pub unresolved_records: usize,
    /// Session codes that appear on more than one session row.
    pub ambiguous_sessions: Vec<String>,
}

impl ProjectRollup {
    /// Human-readable integrity warnings, empty when the data is clean.
    #[must_use]
    pub fn warnings(&self) -> Vec<String> {
        let mut out = Vec::new();
        if self.unresolved_records > 0 {
            out.push(format!(
                "{} feedback record(s) reference an unknown session and are grouped as unresolved.",
                self.unresolved_records
            ));
        }
        if !self.ambiguous_sessions.is_empty() {
            out.push(format!(
                "Duplicate session codes, first session used: {}",
                self.ambiguous_sessions.join(", ")
            ));
        }
        out
    }
}

/// Group feedback by resolved project and compute KPIs per group.
#[must_use]
pub fn project_rollup(
    feedback: &[Feedback],
    sessions: &[Session],
    projects: &[Project],
) -> ProjectRollup {
    let index = SessionIndex::new(sessions);

    let mut groups: BTreeMap<ProjectKey, KpiAccumulator> = BTreeMap::new();
    for record in feedback {
        groups
            .entry(index.resolve(&record.session_code))
            .or_default()
            .push(record);
    }

    let unresolved_records = groups
        .get(&ProjectKey::Unresolved)
        .map_or(0, KpiAccumulator::count);
    if unresolved_records > 0 {
        tracing::warn!(
            records = unresolved_records,
            "feedback references unknown sessions"
        );
    }
    if !index.duplicates().is_empty() {
        tracing::warn!(codes = ?index.duplicates(), "duplicate session codes");
    }

    let rows = groups
        .into_iter()
        .filter_map(|(key, acc)| {
            let kpis = acc.finish()?;
            let project_name = key.code().and_then(|code| project_name(projects, code));
            Some(ProjectRollupRow {
                project_code: key.code().map(str::to_string),
                project_name,
                kpis,
            })
        })
        .collect();

    ProjectRollup {
        rows,
        unresolved_records,
        ambiguous_sessions: index
            .duplicates()
            .iter()
            .map(|code| (*code).to_string())
            .collect(),
    }
}

pub(crate) fn project_name(projects: &[Project], code: &str) -> Option<String> {
    projects
        .iter()
        .find(|p| p.project_code == code)
        .map(|p| p.project_name.clone())
}
