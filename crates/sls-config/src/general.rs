//! General application configuration.

use serde::{Deserialize, Serialize};

fn default_page_title() -> String {
    String::from("SLS Session Tracker")
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct GeneralConfig {
    /// Title shown above every page.
    #[serde(default = "default_page_title")]
    pub page_title: String,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            page_title: default_page_title(),
        }
    }
}
