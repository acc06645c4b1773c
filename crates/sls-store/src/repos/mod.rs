//! Repository modules implementing read/append operations per collection.
//!
//! Each module adds methods to `SlsService` via `impl SlsService` blocks.

pub mod feedback;
pub mod impact;
pub mod participant;
pub mod project;
pub mod session;
