//! [`FormRenderer`] backed by parsed command-line arguments.
//!
//! Every value the user did not pass falls back to the widget's default:
//! empty text, zero, the rating scale's default, unchecked, today. In
//! preview mode nothing is submitted and the rendered fields are recorded
//! so they can be printed instead.

use std::collections::HashMap;

use chrono::NaiveDate;
use serde::Serialize;

use super::{Choice, Field, FormError, FormRenderer, RatingScale};
use crate::cli::root_commands::{
    AddProjectArgs, AddSessionArgs, RecordFeedbackArgs, RecordImpactArgs,
    RegisterParticipantArgs, SessionAnalyticsArgs,
};

#[derive(Clone, Debug, PartialEq)]
enum Input {
    Text(String),
    Number(f64),
    Count(i64),
    Rating(i64),
    Flag(bool),
    Date(NaiveDate),
}

/// A rendered widget as shown by `--preview`.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct PreviewField {
    pub form: String,
    pub field: Field,
    pub label: &'static str,
    pub kind: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scale: Option<RatingScale>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub choices: Vec<String>,
}

#[derive(Debug, Default)]
pub struct ArgsForm {
    inputs: HashMap<Field, Input>,
    selections: HashMap<Field, String>,
    submit: bool,
    preview: Option<Vec<PreviewField>>,
    current_form: String,
}

impl ArgsForm {
    /// A form that submits on `submitted()`.
    #[must_use]
    pub fn submitting() -> Self {
        Self {
            submit: true,
            ..Self::default()
        }
    }

    /// A form that records its widgets and never submits.
    #[must_use]
    pub fn preview() -> Self {
        Self {
            preview: Some(Vec::new()),
            ..Self::default()
        }
    }

    fn new(preview: bool) -> Self {
        if preview {
            Self::preview()
        } else {
            Self::submitting()
        }
    }

    #[must_use]
    pub fn is_preview(&self) -> bool {
        self.preview.is_some()
    }

    /// Widgets rendered so far, in order. Empty unless in preview mode.
    #[must_use]
    pub fn preview_fields(&self) -> &[PreviewField] {
        self.preview.as_deref().unwrap_or_default()
    }

    #[must_use]
    pub fn choose(mut self, field: Field, value: Option<String>) -> Self {
        if let Some(value) = value {
            self.selections.insert(field, value);
        }
        self
    }

    #[must_use]
    pub fn with_text(self, field: Field, value: Option<String>) -> Self {
        self.with(field, value.map(Input::Text))
    }

    #[must_use]
    pub fn with_number(self, field: Field, value: Option<f64>) -> Self {
        self.with(field, value.map(Input::Number))
    }

    #[must_use]
    pub fn with_count(self, field: Field, value: Option<i64>) -> Self {
        self.with(field, value.map(Input::Count))
    }

    #[must_use]
    pub fn with_rating(self, field: Field, value: Option<i64>) -> Self {
        self.with(field, value.map(Input::Rating))
    }

    #[must_use]
    pub fn with_flag(self, field: Field, value: bool) -> Self {
        self.with(field, Some(Input::Flag(value)))
    }

    #[must_use]
    pub fn with_date(self, field: Field, value: Option<NaiveDate>) -> Self {
        self.with(field, value.map(Input::Date))
    }

    fn with(mut self, field: Field, input: Option<Input>) -> Self {
        if let Some(input) = input {
            self.inputs.insert(field, input);
        }
        self
    }

    fn record(&mut self, field: Field, kind: &'static str, choices: &[Choice]) {
        let form = self.current_form.clone();
        if let Some(preview) = self.preview.as_mut() {
            preview.push(PreviewField {
                form,
                field,
                label: field.label(),
                kind,
                scale: field.scale(),
                choices: choices.iter().map(choice_display).collect(),
            });
        }
    }
}

fn choice_display(choice: &Choice) -> String {
    if choice.label == choice.code {
        choice.label.clone()
    } else {
        format!("{} ({})", choice.label, choice.code)
    }
}

impl FormRenderer for ArgsForm {
    fn begin(&mut self, title: &str) {
        self.current_form = title.to_string();
    }

    fn select(&mut self, field: Field, choices: &[Choice]) -> Result<usize, FormError> {
        self.record(field, "select", choices);
        if choices.is_empty() {
            return Err(FormError::NoChoices {
                field: field.label(),
            });
        }
        let Some(wanted) = self.selections.get(&field).map(|v| v.trim()) else {
            return Ok(0);
        };
        choices
            .iter()
            .position(|c| c.code == wanted)
            .or_else(|| choices.iter().position(|c| c.label == wanted))
            .ok_or_else(|| FormError::UnknownChoice {
                field: field.label(),
                value: wanted.to_string(),
            })
    }

    fn text(&mut self, field: Field) -> String {
        self.record(field, "text", &[]);
        match self.inputs.get(&field) {
            Some(Input::Text(value)) => value.clone(),
            _ => String::new(),
        }
    }

    fn number(&mut self, field: Field) -> f64 {
        self.record(field, "number", &[]);
        match self.inputs.get(&field) {
            Some(Input::Number(value)) => value.max(0.0),
            _ => 0.0,
        }
    }

    fn count(&mut self, field: Field) -> i64 {
        self.record(field, "count", &[]);
        match self.inputs.get(&field) {
            Some(Input::Count(value)) => (*value).max(0),
            _ => 0,
        }
    }

    fn rating(&mut self, field: Field) -> i64 {
        self.record(field, "rating", &[]);
        let Some(scale) = field.scale() else {
            return 0;
        };
        match self.inputs.get(&field) {
            Some(Input::Rating(value)) => (*value).clamp(scale.min, scale.max),
            _ => scale.default,
        }
    }

    fn flag(&mut self, field: Field) -> bool {
        self.record(field, "flag", &[]);
        matches!(self.inputs.get(&field), Some(Input::Flag(true)))
    }

    fn date(&mut self, field: Field) -> NaiveDate {
        self.record(field, "date", &[]);
        match self.inputs.get(&field) {
            Some(Input::Date(value)) => *value,
            _ => chrono::Local::now().date_naive(),
        }
    }

    fn submitted(&mut self) -> bool {
        self.submit && self.preview.is_none()
    }
}

impl From<AddProjectArgs> for ArgsForm {
    fn from(args: AddProjectArgs) -> Self {
        Self::new(args.form.preview)
            .with_text(Field::ProjectName, args.name)
            .with_text(Field::ProjectCode, args.code)
    }
}

impl From<AddSessionArgs> for ArgsForm {
    fn from(args: AddSessionArgs) -> Self {
        Self::new(args.form.preview)
            .choose(Field::Project, args.project)
            .with_text(Field::SessionName, args.name)
            .with_text(Field::SessionCode, args.code)
            .with_date(Field::SessionDate, args.date)
            .with_number(Field::HoursDelivered, args.hours)
            .with_text(Field::Facilitators, args.facilitators)
    }
}

impl From<RegisterParticipantArgs> for ArgsForm {
    fn from(args: RegisterParticipantArgs) -> Self {
        Self::new(args.form.preview)
            .choose(Field::Session, args.session)
            .with_text(Field::ParticipantName, args.name)
            .with_number(Field::HoursContributed, args.hours)
    }
}

impl From<RecordFeedbackArgs> for ArgsForm {
    fn from(args: RecordFeedbackArgs) -> Self {
        Self::new(args.form.preview)
            .choose(Field::Session, args.session)
            .choose(Field::Participant, args.participant)
            .with_number(Field::HoursContributed, args.hours)
            .with_rating(Field::KnowledgePre, args.knowledge_pre)
            .with_rating(Field::ConfidencePre, args.confidence_pre)
            .with_rating(Field::KnowledgePost, args.knowledge_post)
            .with_rating(Field::ConfidencePost, args.confidence_post)
            .with_flag(Field::ActionStep, args.action_step)
            .with_flag(Field::NewContact, args.new_contact)
            .with_rating(Field::Satisfaction, args.satisfaction)
            .with_rating(Field::Nps, args.nps)
            .with_text(Field::Notes, args.notes)
    }
}

impl From<RecordImpactArgs> for ArgsForm {
    fn from(args: RecordImpactArgs) -> Self {
        Self::new(args.form.preview)
            .choose(Field::Session, args.session)
            .with_flag(Field::ActionTaken, args.action_taken)
            .with_count(Field::NewContactsFormed, args.new_contacts)
            .with_count(Field::IndividualsImpacted, args.individuals_impacted)
            .with_count(Field::MemberContributions, args.member_contributions)
            .with_number(Field::EngagementHours, args.engagement_hours)
            .with_text(Field::OtherNotes, args.notes)
    }
}

impl From<SessionAnalyticsArgs> for ArgsForm {
    fn from(args: SessionAnalyticsArgs) -> Self {
        Self::submitting().choose(Field::Session, args.session)
    }
}
