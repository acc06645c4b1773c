//! Per-session KPIs.
//!
//! Every mean is over the records passed in. An empty record set has no
//! KPIs at all: [`SessionKpis::compute`] returns `None` rather than dividing
//! by zero, and views render that as [`NO_DATA`].

use serde::Serialize;
use sls_core::entities::Feedback;

/// Display text for a KPI block computed over no records.
pub const NO_DATA: &str = "no data";

/// Aggregates over one set of feedback records.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SessionKpis {
    /// Number of feedback records aggregated.
    pub responses: usize,
    pub avg_knowledge_gain: f64,
    pub avg_confidence_gain: f64,
    /// Share of records with an action step, 0–100.
    pub pct_action_step: f64,
    /// Share of records that made a new contact, 0–100.
    pub pct_new_contact: f64,
    pub avg_satisfaction: f64,
    pub avg_nps: f64,
    pub total_hours: f64,
}

impl SessionKpis {
    /// KPIs for `feedback`, or `None` when the slice is empty.
    #[must_use]
    pub fn compute(feedback: &[Feedback]) -> Option<Self> {
        let mut acc = KpiAccumulator::default();
        for record in feedback {
            acc.push(record);
        }
        acc.finish()
    }

    /// Labelled, formatted values in display order.
    #[must_use]
    pub fn lines(&self) -> Vec<(&'static str, String)> {
        vec![
            (
                "Average Knowledge Gain",
                format!("{:.2} / 4", self.avg_knowledge_gain),
            ),
            (
                "Average Confidence Gain",
                format!("{:.2} / 4", self.avg_confidence_gain),
            ),
            (
                "% Participants Taking Action",
                format!("{:.1}%", self.pct_action_step),
            ),
            (
                "% Participants Making New Contacts",
                format!("{:.1}%", self.pct_new_contact),
            ),
            (
                "Average Satisfaction",
                format!("{:.2} / 5", self.avg_satisfaction),
            ),
            ("Average NPS", format!("{:.2} / 10", self.avg_nps)),
            (
                "Total Hours Contributed",
                format!("{:.1} hrs", self.total_hours),
            ),
        ]
    }
}

/// Running sums for one group of records.
#[derive(Debug, Clone, Copy, Default)]
pub(crate) struct KpiAccumulator {
    count: usize,
    knowledge_gain: i64,
    confidence_gain: i64,
    action_steps: usize,
    new_contacts: usize,
    satisfaction: i64,
    nps: i64,
    hours: f64,
}

impl KpiAccumulator {
    pub(crate) fn push(&mut self, record: &Feedback) {
        self.count += 1;
        self.knowledge_gain += record.knowledge_gain();
        self.confidence_gain += record.confidence_gain();
        self.action_steps += usize::from(record.action_step);
        self.new_contacts += usize::from(record.new_contact);
        self.satisfaction += record.satisfaction;
        self.nps += record.nps;
        self.hours += record.hours_contributed;
    }

    pub(crate) const fn count(&self) -> usize {
        self.count
    }

    #[allow(clippy::cast_precision_loss)]
    pub(crate) fn finish(self) -> Option<SessionKpis> {
        if self.count == 0 {
            return None;
        }
        let n = self.count as f64;
        Some(SessionKpis {
            responses: self.count,
            avg_knowledge_gain: self.knowledge_gain as f64 / n,
            avg_confidence_gain: self.confidence_gain as f64 / n,
            pct_action_step: 100.0 * self.action_steps as f64 / n,
            pct_new_contact: 100.0 * self.new_contacts as f64 / n,
            avg_satisfaction: self.satisfaction as f64 / n,
            avg_nps: self.nps as f64 / n,
            total_hours: self.hours,
        })
    }
}
