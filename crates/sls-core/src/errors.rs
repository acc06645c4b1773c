//! Cross-cutting error types for the session tracker.
//!
//! Store and configuration errors live in their own crates. `sls-cli` is
//! where they converge into `anyhow::Error`.

use thiserror::Error;

/// Errors raised by domain rules shared across sls crates.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CoreError {
    /// Submitted data failed validation (missing required fields).
    #[error("{0}")]
    Validation(String),
}
