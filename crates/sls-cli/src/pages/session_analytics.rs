use sls_report::{ActionCounts, Histogram, Metric, NO_DATA, SessionKpis};
use sls_store::RecordStore;
use sls_store::service::SlsService;

use super::{PageOutcome, failed, select, session_choices};
use crate::view::{Field, FormRenderer, ReportView};

pub async fn run<S, F, V>(svc: &SlsService<S>, form: &mut F, view: &mut V) -> PageOutcome
where
    S: RecordStore,
    F: FormRenderer,
    V: ReportView,
{
    view.header("Session Analytics");

    let sessions = match svc.get_sessions(None).await {
        Ok(sessions) => sessions,
        Err(error) => return failed(view, error),
    };
    if sessions.is_empty() {
        view.warning("Add sessions first.");
        return PageOutcome::MissingPrerequisite;
    }
    let choices = session_choices(&sessions);

    form.begin("Session Analytics");
    let session = match select(form, view, Field::Session, &choices) {
        Ok(choice) => choice,
        Err(outcome) => return outcome,
    };

    let feedback = match svc.get_feedback(Some(session.code.as_str())).await {
        Ok(feedback) => feedback,
        Err(error) => return failed(view, error),
    };
    if feedback.is_empty() {
        view.info("No feedback yet for this session.");
    } else {
        view.table("Participant Feedback Data", &feedback);

        match SessionKpis::compute(&feedback) {
            Some(kpis) => view.metrics("Session KPIs", &kpis.lines()),
            None => view.info(NO_DATA),
        }

        view.histogram(&Histogram::build(Metric::KnowledgeGain, &feedback));
        view.histogram(&Histogram::build(Metric::ConfidenceGain, &feedback));
        view.bar(
            "Actions & Networking",
            &ActionCounts::compute(&feedback).bars(),
        );
        view.histogram(&Histogram::build(Metric::Satisfaction, &feedback));
        view.histogram(&Histogram::build(Metric::Nps, &feedback));
    }

    match svc.get_impact(Some(session.code.as_str())).await {
        Ok(impact) if !impact.is_empty() => view.table("Session Impact", &impact),
        Ok(_) => {}
        Err(error) => return failed(view, error),
    }

    PageOutcome::Rendered
}
