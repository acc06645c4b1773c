use chrono::NaiveDate;
use clap::{Args, Subcommand};

/// Top-level command tree. One subcommand per page.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Add a new project.
    AddProject(AddProjectArgs),
    /// Add a session to a project.
    AddSession(AddSessionArgs),
    /// Register a participant for a session.
    RegisterParticipant(RegisterParticipantArgs),
    /// Record a participant's feedback for a session.
    RecordFeedback(RecordFeedbackArgs),
    /// Record the impact of a session.
    RecordImpact(RecordImpactArgs),
    /// KPIs and distributions for one session.
    SessionAnalytics(SessionAnalyticsArgs),
    /// Project-level KPIs across all feedback.
    Dashboard,
}

/// Shared by every form page.
#[derive(Args, Clone, Debug, Default)]
pub struct FormArgs {
    /// Show the form's fields and options without submitting
    #[arg(long)]
    pub preview: bool,
}

#[derive(Args, Clone, Debug)]
pub struct AddProjectArgs {
    /// Project name
    #[arg(long)]
    pub name: Option<String>,
    /// Project code (unique)
    #[arg(long)]
    pub code: Option<String>,
    #[command(flatten)]
    pub form: FormArgs,
}

#[derive(Args, Clone, Debug)]
pub struct AddSessionArgs {
    /// Parent project, by code or name (defaults to the first project)
    #[arg(long)]
    pub project: Option<String>,
    /// Session name
    #[arg(long)]
    pub name: Option<String>,
    /// Session code (unique)
    #[arg(long)]
    pub code: Option<String>,
    /// Session date, YYYY-MM-DD (defaults to today)
    #[arg(long, value_parser = parse_date)]
    pub date: Option<NaiveDate>,
    /// Hours delivered
    #[arg(long, value_parser = parse_hours)]
    pub hours: Option<f64>,
    /// Facilitators, comma separated
    #[arg(long)]
    pub facilitators: Option<String>,
    #[command(flatten)]
    pub form: FormArgs,
}

#[derive(Args, Clone, Debug)]
pub struct RegisterParticipantArgs {
    /// Session, by code or name (defaults to the first session)
    #[arg(long)]
    pub session: Option<String>,
    /// Participant name
    #[arg(long)]
    pub name: Option<String>,
    /// Hours contributed
    #[arg(long, value_parser = parse_hours)]
    pub hours: Option<f64>,
    #[command(flatten)]
    pub form: FormArgs,
}

#[derive(Args, Clone, Debug)]
pub struct RecordFeedbackArgs {
    /// Session, by code or name (defaults to the first session)
    #[arg(long)]
    pub session: Option<String>,
    /// Registered participant (defaults to the first one)
    #[arg(long)]
    pub participant: Option<String>,
    /// Hours contributed
    #[arg(long, value_parser = parse_hours)]
    pub hours: Option<f64>,
    /// Knowledge before the session, 1-5
    #[arg(long, value_parser = clap::value_parser!(i64).range(1..=5))]
    pub knowledge_pre: Option<i64>,
    /// Confidence before the session, 1-5
    #[arg(long, value_parser = clap::value_parser!(i64).range(1..=5))]
    pub confidence_pre: Option<i64>,
    /// Knowledge after the session, 1-5
    #[arg(long, value_parser = clap::value_parser!(i64).range(1..=5))]
    pub knowledge_post: Option<i64>,
    /// Confidence after the session, 1-5
    #[arg(long, value_parser = clap::value_parser!(i64).range(1..=5))]
    pub confidence_post: Option<i64>,
    /// Participant committed to an action step
    #[arg(long)]
    pub action_step: bool,
    /// Participant made a new contact
    #[arg(long)]
    pub new_contact: bool,
    /// Satisfaction, 1-5
    #[arg(long, value_parser = clap::value_parser!(i64).range(1..=5))]
    pub satisfaction: Option<i64>,
    /// Net promoter score, 0-10
    #[arg(long, value_parser = clap::value_parser!(i64).range(0..=10))]
    pub nps: Option<i64>,
    /// Free-text notes
    #[arg(long)]
    pub notes: Option<String>,
    #[command(flatten)]
    pub form: FormArgs,
}

#[derive(Args, Clone, Debug)]
pub struct RecordImpactArgs {
    /// Session, by code or name (defaults to the first session)
    #[arg(long)]
    pub session: Option<String>,
    /// An action was taken as a result of the session
    #[arg(long)]
    pub action_taken: bool,
    /// New contacts formed
    #[arg(long, value_parser = clap::value_parser!(i64).range(0..))]
    pub new_contacts: Option<i64>,
    /// Individuals impacted
    #[arg(long, value_parser = clap::value_parser!(i64).range(0..))]
    pub individuals_impacted: Option<i64>,
    /// Member contributions
    #[arg(long, value_parser = clap::value_parser!(i64).range(0..))]
    pub member_contributions: Option<i64>,
    /// Engagement hours
    #[arg(long, value_parser = parse_hours)]
    pub engagement_hours: Option<f64>,
    /// Other impact notes
    #[arg(long)]
    pub notes: Option<String>,
    #[command(flatten)]
    pub form: FormArgs,
}

#[derive(Args, Clone, Debug)]
pub struct SessionAnalyticsArgs {
    /// Session, by code or name (defaults to the first session)
    #[arg(long)]
    pub session: Option<String>,
}

fn parse_date(raw: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
        .map_err(|error| format!("expected YYYY-MM-DD: {error}"))
}

fn parse_hours(raw: &str) -> Result<f64, String> {
    let hours: f64 = raw
        .trim()
        .parse()
        .map_err(|error| format!("invalid number '{raw}': {error}"))?;
    if !hours.is_finite() || hours < 0.0 {
        return Err(format!("hours must be zero or more, got '{raw}'"));
    }
    Ok(hours)
}
