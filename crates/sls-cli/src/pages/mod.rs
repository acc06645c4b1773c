//! Page controllers.
//!
//! Each page follows the same shape: fetch prerequisites and warn if any
//! list is empty, render the form, stop unless submitted, validate required
//! fields, write exactly once, then report success or the verbatim failure.
//! Pages share nothing between runs.

use std::fmt::Display;

use serde::Serialize;
use sls_core::validation;
use sls_store::RecordStore;
use sls_store::service::SlsService;

use crate::view::{Choice, Field, FormRenderer, ReportView};

pub mod add_project;
pub mod add_session;
pub mod dashboard;
pub mod record_feedback;
pub mod record_impact;
pub mod register_participant;
pub mod session_analytics;

#[cfg(test)]
pub(crate) mod test_support;

/// The navigable pages.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Page {
    AddProject,
    AddSession,
    RegisterParticipant,
    RecordFeedback,
    RecordImpact,
    SessionAnalytics,
    Dashboard,
}

impl Page {
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::AddProject => "Add Project",
            Self::AddSession => "Add Session",
            Self::RegisterParticipant => "Register Participant",
            Self::RecordFeedback => "Record Feedback",
            Self::RecordImpact => "Record Impact",
            Self::SessionAnalytics => "Session Analytics",
            Self::Dashboard => "Dashboard",
        }
    }
}

/// How a page run ended.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PageOutcome {
    /// Shown without a write: form not submitted, or a report page.
    Rendered,
    Saved,
    MissingPrerequisite,
    /// Validation failed; nothing was written.
    Rejected,
    /// A read or write against the store failed.
    Failed,
}

impl PageOutcome {
    #[must_use]
    pub const fn exit_code(self) -> i32 {
        match self {
            Self::Rendered | Self::Saved | Self::MissingPrerequisite => 0,
            Self::Rejected | Self::Failed => 1,
        }
    }
}

/// Run one page against a store, form and view.
pub async fn run<S, F, V>(
    page: Page,
    svc: &SlsService<S>,
    form: &mut F,
    view: &mut V,
) -> PageOutcome
where
    S: RecordStore,
    F: FormRenderer,
    V: ReportView,
{
    tracing::debug!(page = page.title(), "render page");
    let outcome = match page {
        Page::AddProject => add_project::run(svc, form, view).await,
        Page::AddSession => add_session::run(svc, form, view).await,
        Page::RegisterParticipant => register_participant::run(svc, form, view).await,
        Page::RecordFeedback => record_feedback::run(svc, form, view).await,
        Page::RecordImpact => record_impact::run(svc, form, view).await,
        Page::SessionAnalytics => session_analytics::run(svc, form, view).await,
        Page::Dashboard => dashboard::run(svc, view).await,
    };
    tracing::debug!(page = page.title(), ?outcome, "page done");
    outcome
}

/// Report a store failure verbatim.
pub(crate) fn failed<V: ReportView>(view: &mut V, error: impl Display) -> PageOutcome {
    view.error(&format!("Error: {error}"));
    PageOutcome::Failed
}

/// Ask the form for one of `choices`, reporting a bad pick as a rejection.
pub(crate) fn select<'c, F, V>(
    form: &mut F,
    view: &mut V,
    field: Field,
    choices: &'c [Choice],
) -> Result<&'c Choice, PageOutcome>
where
    F: FormRenderer,
    V: ReportView,
{
    form.select(field, choices)
        .map_err(|error| error.to_string())
        .and_then(|idx| {
            choices
                .get(idx)
                .ok_or_else(|| format!("Selection {idx} is out of range for {}.", field.label()))
        })
        .map_err(|message| {
            view.error(&message);
            PageOutcome::Rejected
        })
}

/// Reject the submission with `message` when a required field is blank.
pub(crate) fn require<V: ReportView>(
    view: &mut V,
    fields: &[(&str, &str)],
    message: &str,
) -> Result<(), PageOutcome> {
    validation::require_all(fields, message).map_err(|error| {
        tracing::debug!(missing = ?validation::missing_fields(fields), "submission rejected");
        view.error(&error.to_string());
        PageOutcome::Rejected
    })
}

/// Session choices: name shown, code stored.
pub(crate) fn session_choices(sessions: &[sls_core::entities::Session]) -> Vec<Choice> {
    sessions
        .iter()
        .map(|s| Choice::new(s.session_name.clone(), s.session_code.clone()))
        .collect()
}
