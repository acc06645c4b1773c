use sls_config::SlsConfig;
use sls_store::RecordStore;
use sls_store::service::SlsService;

use crate::cli::{Commands, GlobalFlags, OutputFormat};
use crate::pages::{self, Page, PageOutcome};
use crate::view::{ArgsForm, TerminalView};

/// Map a subcommand to its page and the form its arguments fill in.
fn page_for(command: Commands) -> (Page, ArgsForm) {
    match command {
        Commands::AddProject(args) => (Page::AddProject, args.into()),
        Commands::AddSession(args) => (Page::AddSession, args.into()),
        Commands::RegisterParticipant(args) => (Page::RegisterParticipant, args.into()),
        Commands::RecordFeedback(args) => (Page::RecordFeedback, args.into()),
        Commands::RecordImpact(args) => (Page::RecordImpact, args.into()),
        Commands::SessionAnalytics(args) => (Page::SessionAnalytics, args.into()),
        Commands::Dashboard => (Page::Dashboard, ArgsForm::submitting()),
    }
}

pub async fn dispatch<S: RecordStore>(
    command: Commands,
    svc: &SlsService<S>,
    config: &SlsConfig,
    flags: &GlobalFlags,
) -> anyhow::Result<PageOutcome> {
    let (page, mut form) = page_for(command);
    let mut view = TerminalView::new(flags.format, flags.quiet);

    if flags.format == OutputFormat::Table && !flags.quiet {
        println!("{}\n", config.general.page_title);
    }

    let outcome = pages::run(page, svc, &mut form, &mut view).await;
    let preview = form.is_preview().then(|| form.preview_fields());
    view.finish(outcome, preview)?;
    Ok(outcome)
}
