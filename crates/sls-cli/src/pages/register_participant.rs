use sls_core::entities::Participant;
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
    view.header("Register Participant for a Session");

    let sessions = match svc.get_sessions(None).await {
        Ok(sessions) => sessions,
        Err(error) => return failed(view, error),
    };
    if sessions.is_empty() {
        view.warning("Add a session first.");
        return PageOutcome::MissingPrerequisite;
    }
    let choices = session_choices(&sessions);

    form.begin("Register Participant");
    let session = match select(form, view, Field::Session, &choices) {
        Ok(choice) => choice,
        Err(outcome) => return outcome,
    };
    let name = form.text(Field::ParticipantName);
    let hours_contributed = form.number(Field::HoursContributed);
    if !form.submitted() {
        return PageOutcome::Rendered;
    }

    if let Err(outcome) = require(
        view,
        &[("Participant Name", name.as_str())],
        "Participant name required.",
    ) {
        return outcome;
    }

    let participant = Participant {
        session_code: session.code.clone(),
        participant_name: name.trim().to_string(),
        hours_contributed,
    };
    match svc.add_participant(&participant).await {
        Ok(_) => {
            view.success(&format!(
                "Participant '{}' registered successfully.",
                participant.participant_name
            ));
            PageOutcome::Saved
        }
        Err(error) => failed(view, error),
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::pages::test_support::{
        RecordingView, memory_service, seeded_service, writes_after_seed,
    };
    use crate::view::ArgsForm;

    #[tokio::test]
    async fn without_sessions_warns() {
        let svc = memory_service();
        let mut view = RecordingView::default();
        let outcome = run(&svc, &mut ArgsForm::submitting(), &mut view).await;

        assert_eq!(outcome, PageOutcome::MissingPrerequisite);
        assert_eq!(view.warnings(), vec!["Add a session first."]);
    }

    #[tokio::test]
    async fn registers_for_session_picked_by_code() {
        let svc = seeded_service().await;
        let mut form = ArgsForm::submitting()
            .choose(Field::Session, Some("YL-2".into()))
            .with_text(Field::ParticipantName, Some(" Kim ".into()))
            .with_number(Field::HoursContributed, Some(3.0));
        let mut view = RecordingView::default();
        let outcome = run(&svc, &mut form, &mut view).await;

        assert_eq!(outcome, PageOutcome::Saved);
        assert_eq!(view.successes(), vec!["Participant 'Kim' registered successfully."]);
        let stored = svc.get_participants(Some("YL-2")).await.unwrap();
        assert_eq!(stored.len(), 1);
        assert_eq!(stored[0].participant_name, "Kim");
        assert!((stored[0].hours_contributed - 3.0).abs() < f64::EPSILON);
    }

    #[tokio::test]
    async fn blank_name_is_rejected_without_write() {
        let svc = seeded_service().await;
        let mut form = ArgsForm::submitting().with_text(Field::ParticipantName, Some("  ".into()));
        let mut view = RecordingView::default();
        let outcome = run(&svc, &mut form, &mut view).await;

        assert_eq!(outcome, PageOutcome::Rejected);
        assert_eq!(view.errors(), vec!["Participant name required."]);
        assert_eq!(writes_after_seed(&svc), 0);
    }
}
