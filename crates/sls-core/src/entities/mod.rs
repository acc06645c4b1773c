//! Entity structs for the five record collections.
//!
//! Each entity maps to one table in the hosted store (see
//! [`crate::collections::Collection`]). Rows read back may carry extra
//! store-managed columns such as ids or timestamps; serde ignores them.

mod feedback;
mod impact;
mod participant;
mod project;
mod session;

pub use feedback::Feedback;
pub use impact::Impact;
pub use participant::Participant;
pub use project::Project;
pub use session::Session;

use serde::{Deserialize, Deserializer};

/// Read a nullable column as its type's default (`""`, `0`, `false`).
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
