//! Fixed-width distributions over feedback metrics.
//!
//! Bins are one unit wide and cover the metric's whole domain, so empty
//! bins are still reported. Values outside the domain are counted
//! separately rather than clamped into the edge bins.

use std::ops::RangeInclusive;

use serde::Serialize;
use sls_core::entities::Feedback;

/// A feedback metric that can be charted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Metric {
    KnowledgeGain,
    ConfidenceGain,
    Satisfaction,
    Nps,
}

impl Metric {
    pub const ALL: [Self; 4] = [
        Self::KnowledgeGain,
        Self::ConfidenceGain,
        Self::Satisfaction,
        Self::Nps,
    ];

    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::KnowledgeGain => "Knowledge Gain Distribution",
            Self::ConfidenceGain => "Confidence Gain Distribution",
            Self::Satisfaction => "Satisfaction Distribution",
            Self::Nps => "NPS Distribution",
        }
    }

    /// Every value the metric can take for in-range ratings.
    #[must_use]
    pub const fn domain(self) -> RangeInclusive<i64> {
        match self {
            Self::KnowledgeGain | Self::ConfidenceGain => -4..=4,
            Self::Satisfaction => 1..=5,
            Self::Nps => 0..=10,
        }
    }

    #[must_use]
    pub fn value(self, record: &Feedback) -> i64 {
        match self {
            Self::KnowledgeGain => record.knowledge_gain(),
            Self::ConfidenceGain => record.confidence_gain(),
            Self::Satisfaction => record.satisfaction,
            Self::Nps => record.nps,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Bin {
    pub label: String,
    pub min: i64,
    pub max: i64,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Histogram {
    pub metric: Metric,
    pub title: &'static str,
    pub bins: Vec<Bin>,
    /// Records whose value fell outside the metric's domain.
    pub out_of_range: usize,
}

impl Histogram {
    #[must_use]
    pub fn build(metric: Metric, feedback: &[Feedback]) -> Self {
        let domain = metric.domain();
        let start = *domain.start();
        let mut bins: Vec<Bin> = domain
            .map(|v| Bin {
                label: v.to_string(),
                min: v,
                max: v,
                count: 0,
            })
            .collect();

        let mut out_of_range = 0;
        for record in feedback {
            let value = metric.value(record);
            let slot = usize::try_from(value - start)
                .ok()
                .and_then(|idx| bins.get_mut(idx));
            match slot {
                Some(bin) => bin.count += 1,
                None => out_of_range += 1,
            }
        }

        Self {
            metric,
            title: metric.title(),
            bins,
            out_of_range,
        }
    }

    /// One histogram per metric, in display order.
    #[must_use]
    pub fn all(feedback: &[Feedback]) -> Vec<Self> {
        Metric::ALL
            .into_iter()
            .map(|metric| Self::build(metric, feedback))
            .collect()
    }

    /// Total records counted, in range or not.
    #[must_use]
    pub fn total(&self) -> usize {
        self.bins.iter().map(|b| b.count).sum::<usize>() + self.out_of_range
    }
}

/// Counts behind the action/networking bar chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ActionCounts {
    pub action_step: usize,
    pub new_contact: usize,
}

impl ActionCounts {
    #[must_use]
    pub fn compute(feedback: &[Feedback]) -> Self {
        Self {
            action_step: feedback.iter().filter(|f| f.action_step).count(),
            new_contact: feedback.iter().filter(|f| f.new_contact).count(),
        }
    }

    /// Labelled bars in display order.
    #[must_use]
    pub const fn bars(&self) -> [(&'static str, usize); 2] {
        [
            ("Action Step", self.action_step),
            ("New Contact", self.new_contact),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    fn record(knowledge: (i64, i64), satisfaction: i64, nps: i64) -> Feedback {
        Feedback {
            session_code: "S1".into(),
            participant_name: "Sam".into(),
            hours_contributed: 1.0,
            knowledge_pre: knowledge.0,
            knowledge_post: knowledge.1,
            confidence_pre: 3,
            confidence_post: 3,
            action_step: satisfaction >= 4,
            new_contact: nps >= 9,
            satisfaction,
            nps,
            notes: String::new(),
        }
    }

    #[rstest]
    #[case::knowledge(Metric::KnowledgeGain, 9, -4)]
    #[case::confidence(Metric::ConfidenceGain, 9, -4)]
    #[case::satisfaction(Metric::Satisfaction, 5, 1)]
    #[case::nps(Metric::Nps, 11, 0)]
    fn bins_cover_domain(#[case] metric: Metric, #[case] len: usize, #[case] first: i64) {
        let hist = Histogram::build(metric, &[]);
        assert_eq!(hist.bins.len(), len);
        assert_eq!(hist.bins[0].min, first);
        assert!(hist.bins.iter().all(|b| b.min == b.max && b.count == 0));
    }

    #[test]
    fn values_land_in_their_bin() {
        let feedback = [record((2, 4), 5, 10), record((1, 3), 4, 10), record((3, 3), 2, 0)];
        let hist = Histogram::build(Metric::KnowledgeGain, &feedback);
        let counts: Vec<(i64, usize)> = hist
            .bins
            .iter()
            .filter(|b| b.count > 0)
            .map(|b| (b.min, b.count))
            .collect();
        assert_eq!(counts, vec![(0, 1), (2, 2)]);

        let nps = Histogram::build(Metric::Nps, &feedback);
        assert_eq!(nps.bins[10].count, 2);
        assert_eq!(nps.bins[0].count, 1);
        assert_eq!(nps.total(), 3);
    }

    #[test]
    fn out_of_domain_values_are_not_clamped() {
        let feedback = [record((1, 1), 7, 11), record((1, 1), 0, -1)];
        let sat = Histogram::build(Metric::Satisfaction, &feedback);
        assert_eq!(sat.out_of_range, 2);
        assert!(sat.bins.iter().all(|b| b.count == 0));
        assert_eq!(Histogram::build(Metric::Nps, &feedback).out_of_range, 2);
    }

    #[test]
    fn all_builds_one_per_metric() {
        let titles: Vec<&str> = Histogram::all(&[]).iter().map(|h| h.title).collect();
        assert_eq!(
            titles,
            vec![
                "Knowledge Gain Distribution",
                "Confidence Gain Distribution",
                "Satisfaction Distribution",
                "NPS Distribution",
            ]
        );
    }

    #[test]
    fn action_counts_count_true_values() {
        let feedback = [record((1, 1), 5, 9), record((1, 1), 4, 3), record((1, 1), 1, 2)];
        let counts = ActionCounts::compute(&feedback);
        assert_eq!(
            counts,
            ActionCounts {
                action_step: 2,
                new_contact: 1
            }
        );
        assert_eq!(counts.bars()[0], ("Action Step", 2));
    }
}
