use sls_report::{impact_summary, project_rollup};
use sls_store::RecordStore;
use sls_store::service::SlsService;

use super::{PageOutcome, failed};
use crate::view::ReportView;

pub async fn run<S, V>(svc: &SlsService<S>, view: &mut V) -> PageOutcome
where
    S: RecordStore,
    V: ReportView,
{
    view.header("Overall Dashboard");

    let projects = match svc.get_projects().await {
        Ok(projects) => projects,
        Err(error) => return failed(view, error),
    };
    let sessions = match svc.get_sessions(None).await {
        Ok(sessions) => sessions,
        Err(error) => return failed(view, error),
    };
    let feedback = match svc.get_feedback(None).await {
        Ok(feedback) => feedback,
        Err(error) => return failed(view, error),
    };

    if feedback.is_empty() {
        view.info("No feedback recorded yet.");
    } else {
        let rollup = project_rollup(&feedback, &sessions, &projects);
        for warning in rollup.warnings() {
            view.warning(&warning);
        }
        view.table("Project-Level KPIs", &rollup.rows);
    }

    let impact = match svc.get_impact(None).await {
        Ok(impact) => impact,
        Err(error) => return failed(view, error),
    };
    if !impact.is_empty() {
        view.table(
            "Project-Level Impact",
            &impact_summary(&impact, &sessions, &projects),
        );
    }

    PageOutcome::Rendered
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use sls_core::entities::Impact;

    use super::*;
    use crate::pages::test_support::{
        RecordingView, feedback, memory_service, project, seeded_service, session,
    };

    #[tokio::test]
    async fn empty_store_reports_no_feedback() {
        let svc = memory_service();
        let mut view = RecordingView::default();
        let outcome = run(&svc, &mut view).await;

        assert_eq!(outcome, PageOutcome::Rendered);
        assert_eq!(view.infos(), vec!["No feedback recorded yet."]);
        assert!(view.table("Project-Level KPIs").is_none());
    }

    #[tokio::test]
    async fn groups_feedback_by_project() {
        let svc = memory_service();
        svc.add_project(&project("P1", "Youth Leaders")).await.unwrap();
        svc.add_project(&project("P2", "Elders")).await.unwrap();
        svc.add_session(&session("S1", "Intro", "P1")).await.unwrap();
        svc.add_session(&session("S2", "Circle", "P2")).await.unwrap();
        for (code, name) in [("S1", "Sam"), ("S1", "Lee"), ("S2", "Kim")] {
            svc.add_feedback(&feedback(code, name, 2, 4)).await.unwrap();
        }

        let mut view = RecordingView::default();
        run(&svc, &mut view).await;

        assert!(view.warnings().is_empty());
        let rows = view.table("Project-Level KPIs").unwrap();
        let rows = rows.as_array().unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0]["project_code"], "P1");
        assert_eq!(rows[0]["project_name"], "Youth Leaders");
        assert_eq!(rows[0]["total_hours"], 3.0);
        assert_eq!(rows[0]["pct_action_step"], 100.0);
        assert_eq!(rows[1]["project_code"], "P2");
    }

    #[tokio::test]
    async fn orphaned_feedback_raises_integrity_warning() {
        let svc = seeded_service().await;
        svc.add_feedback(&feedback("YL-1", "Sam", 2, 4)).await.unwrap();
        svc.add_feedback(&feedback("GONE", "Pat", 1, 2)).await.unwrap();

        let mut view = RecordingView::default();
        run(&svc, &mut view).await;

        assert_eq!(view.warnings().len(), 1);
        assert!(view.warnings()[0].starts_with("1 feedback record(s) reference an unknown session"));
        let rows = view.table("Project-Level KPIs").unwrap();
        assert_eq!(rows[1]["project_code"], serde_json::Value::Null);
    }

    #[tokio::test]
    async fn impact_is_summarised_per_project() {
        let svc = seeded_service().await;
        for hours in [1.5, 2.5] {
            svc.add_impact(&Impact {
                session_code: "YL-2".into(),
                action_taken: true,
                new_contacts_formed: 1,
                individuals_impacted: 5,
                member_contributions: 0,
                engagement_hours: hours,
                other_notes: String::new(),
            })
            .await
            .unwrap();
        }

        let mut view = RecordingView::default();
        run(&svc, &mut view).await;

        assert_eq!(view.infos(), vec!["No feedback recorded yet."]);
        let impact = view.table("Project-Level Impact").unwrap();
        assert_eq!(impact[0]["project_code"], "YL");
        assert_eq!(impact[0]["records"], 2);
        assert_eq!(impact[0]["engagement_hours"], 4.0);
    }
}
