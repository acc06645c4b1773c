use sls_core::entities::Feedback;
use sls_store::RecordStore;
use sls_store::service::SlsService;

use super::{PageOutcome, failed, require, select, session_choices};
use crate::view::{Choice, Field, FormRenderer, ReportView};

pub async fn run<S, F, V>(svc: &SlsService<S>, form: &mut F, view: &mut V) -> PageOutcome
where
    S: RecordStore,
    F: FormRenderer,
    V: ReportView,
{
    view.header("Record Feedback for Participants");

    let sessions = match svc.get_sessions(None).await {
        Ok(sessions) => sessions,
        Err(error) => return failed(view, error),
    };
    if sessions.is_empty() {
        view.warning("Add a session first.");
        return PageOutcome::MissingPrerequisite;
    }
    let choices = session_choices(&sessions);

    form.begin("Record Feedback");
    let session = match select(form, view, Field::Session, &choices) {
        Ok(choice) => choice,
        Err(outcome) => return outcome,
    };

    let participants = match svc.get_participants(Some(session.code.as_str())).await {
        Ok(participants) => participants,
        Err(error) => return failed(view, error),
    };
    if participants.is_empty() {
        view.warning("Register participants first.");
        return PageOutcome::MissingPrerequisite;
    }
    let names: Vec<Choice> = participants
        .iter()
        .map(|p| Choice::new(p.participant_name.clone(), p.participant_name.clone()))
        .collect();
    let participant = match select(form, view, Field::Participant, &names) {
        Ok(choice) => choice,
        Err(outcome) => return outcome,
    };

    let feedback = Feedback {
        session_code: session.code.trim().to_string(),
        participant_name: participant.code.trim().to_string(),
        hours_contributed: form.number(Field::HoursContributed),
        knowledge_pre: form.rating(Field::KnowledgePre),
        confidence_pre: form.rating(Field::ConfidencePre),
        knowledge_post: form.rating(Field::KnowledgePost),
        confidence_post: form.rating(Field::ConfidencePost),
        action_step: form.flag(Field::ActionStep),
        new_contact: form.flag(Field::NewContact),
        satisfaction: form.rating(Field::Satisfaction),
        nps: form.rating(Field::Nps),
        notes: form.text(Field::Notes),
    };
    if !form.submitted() {
        return PageOutcome::Rendered;
    }

    if let Err(outcome) = require(
        view,
        &[
            ("Session Code", feedback.session_code.as_str()),
            ("Participant Name", feedback.participant_name.as_str()),
        ],
        "Select a session and a participant.",
    ) {
        return outcome;
    }

    match svc.add_feedback(&feedback).await {
        Ok(_) => {
            view.success(&format!(
                "Feedback recorded for {}.",
                feedback.participant_name
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
        FailingStore, RecordingView, memory_service, participant, seeded_service, session,
        writes_after_seed,
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
    async fn session_without_participants_warns() {
        let svc = seeded_service().await;
        let mut form = ArgsForm::submitting().choose(Field::Session, Some("Deep Dive".into()));
        let mut view = RecordingView::default();
        let outcome = run(&svc, &mut form, &mut view).await;

        assert_eq!(outcome, PageOutcome::MissingPrerequisite);
        assert_eq!(view.warnings(), vec!["Register participants first."]);
        assert_eq!(writes_after_seed(&svc), 0);
    }

    #[tokio::test]
    async fn records_feedback_with_defaults_for_unset_ratings() {
        let svc = seeded_service().await;
        let mut form = ArgsForm::submitting()
            .choose(Field::Participant, Some("Lee".into()))
            .with_number(Field::HoursContributed, Some(2.0))
            .with_rating(Field::KnowledgePre, Some(1))
            .with_rating(Field::KnowledgePost, Some(5))
            .with_flag(Field::NewContact, true)
            .with_rating(Field::Nps, Some(10));
        let mut view = RecordingView::default();
        let outcome = run(&svc, &mut form, &mut view).await;

        assert_eq!(outcome, PageOutcome::Saved);
        assert_eq!(view.successes(), vec!["Feedback recorded for Lee."]);

        let stored = svc.get_feedback(Some("YL-1")).await.unwrap();
        assert_eq!(stored.len(), 1);
        let record = &stored[0];
        assert_eq!(record.participant_name, "Lee");
        assert_eq!(record.knowledge_gain(), 4);
        assert_eq!(record.confidence_pre, 3);
        assert_eq!(record.satisfaction, 3);
        assert_eq!(record.nps, 10);
        assert!(record.new_contact);
        assert!(!record.action_step);
    }

    #[tokio::test]
    async fn unknown_participant_is_rejected() {
        let svc = seeded_service().await;
        let mut form = ArgsForm::submitting().choose(Field::Participant, Some("Nobody".into()));
        let mut view = RecordingView::default();
        let outcome = run(&svc, &mut form, &mut view).await;

        assert_eq!(outcome, PageOutcome::Rejected);
        assert_eq!(writes_after_seed(&svc), 0);
    }

    #[tokio::test]
    async fn write_failure_is_shown_verbatim() {
        let store = FailingStore::seeded(&[session("S1", "Intro", "P1")], &[participant("S1", "Sam")]).await;
        let svc = SlsService::new(store);
        let mut view = RecordingView::default();
        let outcome = run(&svc, &mut ArgsForm::submitting(), &mut view).await;

        assert_eq!(outcome, PageOutcome::Failed);
        assert_eq!(view.errors(), vec!["Error: API error (503): service unavailable"]);
    }
}
