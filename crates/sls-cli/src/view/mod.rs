//! Rendering capabilities the page controllers are written against.
//!
//! Controllers never print or parse directly. They ask a [`FormRenderer`]
//! for input values and report through a [`ReportView`], so the same page
//! logic drives the terminal front end and the tests.

use chrono::NaiveDate;
use serde::Serialize;
use sls_report::Histogram;

pub mod args_form;
pub mod terminal;

pub use args_form::ArgsForm;
pub use terminal::TerminalView;

/// Every input widget any page renders.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Field {
    ProjectName,
    ProjectCode,
    Project,
    SessionName,
    SessionCode,
    Session,
    SessionDate,
    HoursDelivered,
    Facilitators,
    Participant,
    ParticipantName,
    HoursContributed,
    KnowledgePre,
    ConfidencePre,
    KnowledgePost,
    ConfidencePost,
    ActionStep,
    NewContact,
    Satisfaction,
    Nps,
    Notes,
    ActionTaken,
    NewContactsFormed,
    IndividualsImpacted,
    MemberContributions,
    EngagementHours,
    OtherNotes,
}

/// Inclusive bounds and initial value of a rating slider.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize)]
pub struct RatingScale {
    pub min: i64,
    pub max: i64,
    pub default: i64,
}

const FIVE_POINT: RatingScale = RatingScale {
    min: 1,
    max: 5,
    default: 3,
};

const NPS_SCALE: RatingScale = RatingScale {
    min: 0,
    max: 10,
    default: 5,
};

impl Field {
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::ProjectName => "Project Name",
            Self::ProjectCode => "Project Code (unique)",
            Self::Project => "Select Project",
            Self::SessionName => "Session Name",
            Self::SessionCode => "Session Code (unique)",
            Self::Session => "Select Session",
            Self::SessionDate => "Session Date",
            Self::HoursDelivered => "Hours Delivered",
            Self::Facilitators => "Facilitators (comma-separated)",
            Self::Participant => "Select Participant",
            Self::ParticipantName => "Participant Name",
            Self::HoursContributed => "Hours Contributed",
            Self::KnowledgePre => "Knowledge Pre",
            Self::ConfidencePre => "Confidence Pre",
            Self::KnowledgePost => "Knowledge Post",
            Self::ConfidencePost => "Confidence Post",
            Self::ActionStep => "Action Step?",
            Self::NewContact => "New Contact?",
            Self::Satisfaction => "Satisfaction",
            Self::Nps => "NPS",
            Self::Notes => "Notes",
            Self::ActionTaken => "Action Taken?",
            Self::NewContactsFormed => "New Contacts Formed",
            Self::IndividualsImpacted => "Individuals Impacted",
            Self::MemberContributions => "Member Contributions",
            Self::EngagementHours => "Engagement Hours",
            Self::OtherNotes => "Other Impact Notes",
        }
    }

    /// Scale for rating fields, `None` for everything else.
    #[must_use]
    pub const fn scale(self) -> Option<RatingScale> {
        match self {
            Self::KnowledgePre
            | Self::ConfidencePre
            | Self::KnowledgePost
            | Self::ConfidencePost
            | Self::Satisfaction => Some(FIVE_POINT),
            Self::Nps => Some(NPS_SCALE),
            _ => None,
        }
    }
}

/// One option in a selection widget.
#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct Choice {
    /// What the user sees.
    pub label: String,
    /// What gets stored.
    pub code: String,
}

impl Choice {
    pub fn new(label: impl Into<String>, code: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            code: code.into(),
        }
    }
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum FormError {
    #[error("'{value}' is not an option for {field}.")]
    UnknownChoice { field: &'static str, value: String },

    #[error("No options available for {field}.")]
    NoChoices { field: &'static str },
}

/// Input side of a page: renders widgets and returns their values.
pub trait FormRenderer {
    /// Open a form scope. Values read after this belong to `title`.
    fn begin(&mut self, title: &str);

    /// Index into `choices`; the first option when nothing was picked.
    fn select(&mut self, field: Field, choices: &[Choice]) -> Result<usize, FormError>;

    fn text(&mut self, field: Field) -> String;

    /// Non-negative decimal.
    fn number(&mut self, field: Field) -> f64;

    /// Non-negative integer.
    fn count(&mut self, field: Field) -> i64;

    /// Integer within the field's [`RatingScale`].
    fn rating(&mut self, field: Field) -> i64;

    fn flag(&mut self, field: Field) -> bool;

    fn date(&mut self, field: Field) -> NaiveDate;

    /// Whether the form's submit action fired.
    fn submitted(&mut self) -> bool;
}

/// Output side of a page.
pub trait ReportView {
    fn header(&mut self, title: &str);
    fn success(&mut self, message: &str);
    fn info(&mut self, message: &str);
    fn warning(&mut self, message: &str);
    fn error(&mut self, message: &str);
    fn table<T: Serialize + ?Sized>(&mut self, title: &str, rows: &T);
    fn metrics(&mut self, title: &str, lines: &[(&'static str, String)]);
    fn histogram(&mut self, histogram: &Histogram);
    fn bar(&mut self, title: &str, bars: &[(&'static str, usize)]);
}
