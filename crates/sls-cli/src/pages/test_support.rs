//! Fixtures for page controller tests.

use chrono::NaiveDate;
use serde::Serialize;
use serde_json::Value;
use sls_core::collections::{Collection, KeyFilter};
use sls_core::entities::{Feedback, Participant, Project, Session};
use sls_report::Histogram;
use sls_store::error::StoreError;
use sls_store::helpers::to_record;
use sls_store::memory::MemoryStore;
use sls_store::service::SlsService;
use sls_store::{Record, RecordStore};

use crate::view::ReportView;

/// Everything a page reported, in order.
#[derive(Clone, Debug, PartialEq)]
pub enum Event {
    Header(String),
    Success(String),
    Info(String),
    Warning(String),
    Error(String),
    Table { title: String, rows: Value },
    Metrics { title: String, lines: Vec<(String, String)> },
    Histogram(Histogram),
    Bar { title: String, bars: Vec<(String, usize)> },
}

#[derive(Debug, Default)]
pub struct RecordingView {
    pub events: Vec<Event>,
}

impl RecordingView {
    fn messages(&self, pick: fn(&Event) -> Option<&String>) -> Vec<&str> {
        self.events.iter().filter_map(pick).map(String::as_str).collect()
    }

    pub fn successes(&self) -> Vec<&str> {
        self.messages(|e| match e {
            Event::Success(m) => Some(m),
            _ => None,
        })
    }

    pub fn infos(&self) -> Vec<&str> {
        self.messages(|e| match e {
            Event::Info(m) => Some(m),
            _ => None,
        })
    }

    pub fn warnings(&self) -> Vec<&str> {
        self.messages(|e| match e {
            Event::Warning(m) => Some(m),
            _ => None,
        })
    }

    pub fn errors(&self) -> Vec<&str> {
        self.messages(|e| match e {
            Event::Error(m) => Some(m),
            _ => None,
        })
    }

    pub fn table(&self, title: &str) -> Option<&Value> {
        self.events.iter().find_map(|e| match e {
            Event::Table { title: t, rows } if t == title => Some(rows),
            _ => None,
        })
    }

    pub fn histograms(&self) -> Vec<&Histogram> {
        self.events
            .iter()
            .filter_map(|e| match e {
                Event::Histogram(h) => Some(h),
                _ => None,
            })
            .collect()
    }
}

impl ReportView for RecordingView {
    fn header(&mut self, title: &str) {
        self.events.push(Event::Header(title.into()));
    }

    fn success(&mut self, message: &str) {
        self.events.push(Event::Success(message.into()));
    }

    fn info(&mut self, message: &str) {
        self.events.push(Event::Info(message.into()));
    }

    fn warning(&mut self, message: &str) {
        self.events.push(Event::Warning(message.into()));
    }

    fn error(&mut self, message: &str) {
        self.events.push(Event::Error(message.into()));
    }

    fn table<T: Serialize + ?Sized>(&mut self, title: &str, rows: &T) {
        self.events.push(Event::Table {
            title: title.into(),
            rows: serde_json::to_value(rows).unwrap(),
        });
    }

    fn metrics(&mut self, title: &str, lines: &[(&'static str, String)]) {
        self.events.push(Event::Metrics {
            title: title.into(),
            lines: lines
                .iter()
                .map(|(l, v)| ((*l).to_string(), v.clone()))
                .collect(),
        });
    }

    fn histogram(&mut self, histogram: &Histogram) {
        self.events.push(Event::Histogram(histogram.clone()));
    }

    fn bar(&mut self, title: &str, bars: &[(&'static str, usize)]) {
        self.events.push(Event::Bar {
            title: title.into(),
            bars: bars.iter().map(|(l, c)| ((*l).to_string(), *c)).collect(),
        });
    }
}

/// Reads from an in-memory store; every insert fails like an outage.
#[derive(Debug, Default)]
pub struct FailingStore {
    pub inner: MemoryStore,
}

impl FailingStore {
    /// Store whose reads return `sessions` and `participants`.
    pub async fn seeded(sessions: &[Session], participants: &[Participant]) -> Self {
        let inner = MemoryStore::new();
        for s in sessions {
            let row = to_record(Collection::Sessions, s).unwrap();
            inner.insert(Collection::Sessions, row).await.unwrap();
        }
        for p in participants {
            let row = to_record(Collection::Participants, p).unwrap();
            inner.insert(Collection::Participants, row).await.unwrap();
        }
        Self { inner }
    }
}

impl RecordStore for FailingStore {
    async fn select(
        &self,
        collection: Collection,
        filter: Option<&KeyFilter>,
    ) -> Result<Vec<Record>, StoreError> {
        self.inner.select(collection, filter).await
    }

    async fn insert(&self, _collection: Collection, _record: Record) -> Result<Record, StoreError> {
        Err(StoreError::Api {
            status: 503,
            code: None,
            message: String::from("service unavailable"),
        })
    }
}

pub fn memory_service() -> SlsService<MemoryStore> {
    SlsService::new(MemoryStore::new())
}

pub fn project(code: &str, name: &str) -> Project {
    Project {
        project_name: name.into(),
        project_code: code.into(),
    }
}

pub fn session(code: &str, name: &str, project: &str) -> Session {
    Session {
        session_name: name.into(),
        session_code: code.into(),
        project_code: project.into(),
        session_date: NaiveDate::from_ymd_opt(2025, 3, 14).unwrap(),
        hours_delivered: 2.0,
        facilitators: "Ada, Grace".into(),
    }
}

pub fn participant(session: &str, name: &str) -> Participant {
    Participant {
        session_code: session.into(),
        participant_name: name.into(),
        hours_contributed: 1.0,
    }
}

pub fn feedback(session: &str, name: &str, pre: i64, post: i64) -> Feedback {
    Feedback {
        session_code: session.into(),
        participant_name: name.into(),
        hours_contributed: 1.5,
        knowledge_pre: pre,
        knowledge_post: post,
        confidence_pre: 3,
        confidence_post: 4,
        action_step: true,
        new_contact: false,
        satisfaction: 4,
        nps: 8,
        notes: String::new(),
    }
}

/// Service with one project, two sessions, and participants on the first.
pub async fn seeded_service() -> SlsService<MemoryStore> {
    let svc = memory_service();
    svc.add_project(&project("YL", "Youth Leaders")).await.unwrap();
    svc.add_session(&session("YL-1", "Intro", "YL")).await.unwrap();
    svc.add_session(&session("YL-2", "Deep Dive", "YL")).await.unwrap();
    svc.add_participant(&participant("YL-1", "Sam")).await.unwrap();
    svc.add_participant(&participant("YL-1", "Lee")).await.unwrap();
    svc
}

/// Number of insert calls made since the service was seeded.
pub fn writes_after_seed(svc: &SlsService<MemoryStore>) -> usize {
    svc.store().insert_calls() - 5
}
