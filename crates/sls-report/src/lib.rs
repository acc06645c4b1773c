//! # sls-report
//!
//! Reporting and aggregation over feedback and impact records.
//!
//! - [`kpis`]: the seven per-session KPIs (means, rates, total hours)
//! - [`distribution`]: fixed-width histograms and action/networking counts
//! - [`rollup`]: feedback grouped by parent project via session lookup
//! - [`impact`]: impact records grouped by parent project
//!
//! Everything here is pure: callers fetch records and pass slices in.

pub mod distribution;
pub mod impact;
pub mod kpis;
pub mod rollup;

pub use distribution::{ActionCounts, Bin, Histogram, Metric};
pub use impact::{ImpactSummaryRow, impact_summary};
pub use kpis::{NO_DATA, SessionKpis};
pub use rollup::{ProjectKey, ProjectRollup, ProjectRollupRow, SessionIndex, project_rollup};
