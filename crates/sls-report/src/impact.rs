//! Impact records totalled per project.

use std::collections::BTreeMap;

use serde::Serialize;
use sls_core::entities::{Impact, Project, Session};

use crate::rollup::{ProjectKey, SessionIndex, project_name};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ImpactSummaryRow {
    /// `None` for impact recorded against an unknown session.
    pub project_code: Option<String>,
    pub project_name: Option<String>,
    pub records: usize,
    pub actions_taken: usize,
    pub new_contacts_formed: i64,
    pub individuals_impacted: i64,
    pub member_contributions: i64,
    pub engagement_hours: f64,
}

impl ImpactSummaryRow {
    fn empty(key: &ProjectKey) -> Self {
        Self {
            project_code: key.code().map(str::to_string),
            project_name: None,
            records: 0,
            actions_taken: 0,
            new_contacts_formed: 0,
            individuals_impacted: 0,
            member_contributions: 0,
            engagement_hours: 0.0,
        }
    }

    fn add(&mut self, record: &Impact) {
        self.records += 1;
        self.actions_taken += usize::from(record.action_taken);
        self.new_contacts_formed += record.new_contacts_formed;
        self.individuals_impacted += record.individuals_impacted;
        self.member_contributions += record.member_contributions;
        self.engagement_hours += record.engagement_hours;
    }
}

/// Totals per resolved project, ordered by project code, unresolved last.
#[must_use]
pub fn impact_summary(
    impact: &[Impact],
    sessions: &[Session],
    projects: &[Project],
) -> Vec<ImpactSummaryRow> {
    let index = SessionIndex::new(sessions);
    let mut groups: BTreeMap<ProjectKey, ImpactSummaryRow> = BTreeMap::new();
    for record in impact {
        let key = index.resolve(&record.session_code);
        groups
            .entry(key)
            .or_insert_with_key(ImpactSummaryRow::empty)
            .add(record);
    }

    groups
        .into_values()
        .map(|mut row| {
            row.project_name = row
                .project_code
                .as_deref()
                .and_then(|code| project_name(projects, code));
            row
        })
        .collect()
}
