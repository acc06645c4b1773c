//! # sls-core
//!
//! Core types shared across the SLS session tracker crates:
//! - Entity structs for the five record collections (projects, sessions,
//!   participants, feedback, impact)
//! - Collection and key-filter enums naming the external tables
//! - Required-field validation used by every form
//! - Cross-cutting error types

pub mod collections;
pub mod entities;
pub mod errors;
pub mod validation;
