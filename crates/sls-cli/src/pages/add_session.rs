use sls_core::entities::Session;
use sls_store::RecordStore;
use sls_store::service::SlsService;

use super::{PageOutcome, failed, require, select};
use crate::view::{Choice, Field, FormRenderer, ReportView};

pub async fn run<S, F, V>(svc: &SlsService<S>, form: &mut F, view: &mut V) -> PageOutcome
where
    S: RecordStore,
    F: FormRenderer,
    V: ReportView,
{
    view.header("Add Session to Project");

    let projects = match svc.get_projects().await {
        Ok(projects) => projects,
        Err(error) => return failed(view, error),
    };
    if projects.is_empty() {
        view.warning("Add a project first.");
        return PageOutcome::MissingPrerequisite;
    }
    let choices: Vec<Choice> = projects
        .iter()
        .map(|p| Choice::new(p.project_name.clone(), p.project_code.clone()))
        .collect();

    form.begin("Add Session");
    let project = match select(form, view, Field::Project, &choices) {
        Ok(choice) => choice,
        Err(outcome) => return outcome,
    };
    let name = form.text(Field::SessionName);
    let code = form.text(Field::SessionCode);
    let session_date = form.date(Field::SessionDate);
    let hours_delivered = form.number(Field::HoursDelivered);
    let facilitators = form.text(Field::Facilitators);
    if !form.submitted() {
        return PageOutcome::Rendered;
    }

    if let Err(outcome) = require(
        view,
        &[("Session Name", name.as_str()), ("Session Code", code.as_str())],
        "Provide session name and code.",
    ) {
        return outcome;
    }

    let session = Session {
        session_name: name.trim().to_string(),
        session_code: code.trim().to_string(),
        project_code: project.code.clone(),
        session_date,
        hours_delivered,
        facilitators: facilitators.trim().to_string(),
    };
    match svc.add_session(&session).await {
        Ok(_) => {
            view.success(&format!(
                "Session '{}' added to project '{}'.",
                session.session_name, project.label
            ));
            PageOutcome::Saved
        }
        Err(error) => failed(view, error),
    }
}
