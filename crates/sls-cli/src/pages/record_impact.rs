use sls_core::entities::Impact;
use sls_store::RecordStore;
use sls_store::service::SlsService;

use super::{PageOutcome, failed, require, select, session_choices};
use crate::view::{Field, FormRenderer, ReportView};

pub async fn run<S, F, V>(svc: &SlsService<S>, form: &mut F, view: &mut V) -> PageOutcome
where
    S: RecordStore,
    F: FormRenderer,
    V: ReportView,
{
    view.header("Record Session Impact");

    let sessions = match svc.get_sessions(None).await {
        Ok(sessions) => sessions,
        Err(error) => return failed(view, error),
    };
    if sessions.is_empty() {
        view.warning("Add a session first.");
        return PageOutcome::MissingPrerequisite;
    }
    let choices = session_choices(&sessions);

    form.begin("Record Impact");
    let session = match select(form, view, Field::Session, &choices) {
        Ok(choice) => choice,
        Err(outcome) => return outcome,
    };
    let impact = Impact {
        session_code: session.code.trim().to_string(),
        action_taken: form.flag(Field::ActionTaken),
        new_contacts_formed: form.count(Field::NewContactsFormed),
        individuals_impacted: form.count(Field::IndividualsImpacted),
        member_contributions: form.count(Field::MemberContributions),
        engagement_hours: form.number(Field::EngagementHours),
        other_notes: form.text(Field::OtherNotes),
    };
    if !form.submitted() {
        return PageOutcome::Rendered;
    }

    if let Err(outcome) = require(
        view,
        &[("Session Code", impact.session_code.as_str())],
        "Select a session.",
    ) {
        return outcome;
    }

    match svc.add_impact(&impact).await {
        Ok(_) => {
            view.success("Impact recorded successfully!");
            PageOutcome::Saved
        }
        Err(error) => failed(view, error),
    }
}
