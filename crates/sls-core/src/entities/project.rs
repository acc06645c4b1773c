use serde::{Deserialize, Serialize};

/// A community program. `project_code` is the unique key.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Project {
    pub project_name: String,
    pub project_code: String,
}
