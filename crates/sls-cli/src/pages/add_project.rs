use sls_core::entities::Project;
use sls_store::RecordStore;
use sls_store::service::SlsService;

use super::{PageOutcome, failed, require};
use crate::view::{Field, FormRenderer, ReportView};

pub async fn run<S, F, V>(svc: &SlsService<S>, form: &mut F, view: &mut V) -> PageOutcome
where
    S: RecordStore,
    F: FormRenderer,
    V: ReportView,
{
    view.header("Add New Project");

    form.begin("Add Project");
    let name = form.text(Field::ProjectName);
    let code = form.text(Field::ProjectCode);
    if !form.submitted() {
        return PageOutcome::Rendered;
    }

    if let Err(outcome) = require(
        view,
        &[("Project Name", name.as_str()), ("Project Code", code.as_str())],
        "Fill in both Project Name and Project Code.",
    ) {
        return outcome;
    }

    let project = Project {
        project_name: name.trim().to_string(),
        project_code: code.trim().to_string(),
    };
    match svc.add_project(&project).await {
        Ok(_) => {
            view.success(&format!(
                "Project '{}' added successfully!",
                project.project_name
            ));
            PageOutcome::Saved
        }
        Err(error) => failed(view, error),
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use sls_core::collections::Collection;

    use super::*;
    use crate::pages::test_support::{FailingStore, RecordingView, memory_service, project};
    use crate::view::ArgsForm;

    fn form(name: &str, code: &str) -> ArgsForm {
        ArgsForm::submitting()
            .with_text(Field::ProjectName, Some(name.into()))
            .with_text(Field::ProjectCode, Some(code.into()))
    }

    #[tokio::test]
    async fn saves_trimmed_project() {
        let svc = memory_service();
        let mut view = RecordingView::default();
        let outcome = run(&svc, &mut form("  Youth Leaders ", " YL "), &mut view).await;

        assert_eq!(outcome, PageOutcome::Saved);
        assert_eq!(view.successes(), vec!["Project 'Youth Leaders' added successfully!"]);
        assert_eq!(
            svc.get_projects().await.unwrap(),
            vec![project("YL", "Youth Leaders")]
        );
    }

    #[tokio::test]
    async fn blank_code_is_rejected_without_write() {
        let svc = memory_service();
        let mut view = RecordingView::default();
        let outcome = run(&svc, &mut form("Youth Leaders", "   "), &mut view).await;

        assert_eq!(outcome, PageOutcome::Rejected);
        assert_eq!(view.errors(), vec!["Fill in both Project Name and Project Code."]);
        assert_eq!(svc.store().insert_calls(), 0);
    }

    #[tokio::test]
    async fn unsubmitted_form_only_renders() {
        let svc = memory_service();
        let mut view = RecordingView::default();
        let outcome = run(&svc, &mut ArgsForm::preview(), &mut view).await;

        assert_eq!(outcome, PageOutcome::Rendered);
        assert!(view.errors().is_empty());
        assert_eq!(svc.store().insert_calls(), 0);
    }

    #[tokio::test]
    async fn duplicate_code_shows_store_error() {
        let svc = memory_service();
        svc.add_project(&project("YL", "Youth Leaders")).await.unwrap();
        let mut view = RecordingView::default();
        let outcome = run(&svc, &mut form("Other", "YL"), &mut view).await;

        assert_eq!(outcome, PageOutcome::Failed);
        let errors = view.errors();
        assert_eq!(errors.len(), 1);
        assert!(errors[0].starts_with("Error: API error (409): duplicate key value"));
        assert_eq!(svc.store().len(Collection::Projects), 1);
    }

    #[tokio::test]
    async fn write_failure_is_shown_verbatim() {
        let svc = SlsService::new(FailingStore::default());
        let mut view = RecordingView::default();
        let outcome = run(&svc, &mut form("Youth", "YL"), &mut view).await;

        assert_eq!(outcome, PageOutcome::Failed);
        assert_eq!(view.errors(), vec!["Error: API error (503): service unavailable"]);
        assert!(view.successes().is_empty());
    }
}
