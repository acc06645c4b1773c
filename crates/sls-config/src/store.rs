//! Hosted store (Supabase / PostgREST) configuration.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Default request timeout in seconds.
const fn default_timeout_secs() -> u64 {
    10
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct StoreConfig {
    /// Project URL (e.g., `https://abcd.supabase.co`).
    #[serde(default)]
    pub url: String,

    /// API key sent as both `apikey` and bearer token.
    #[serde(default)]
    pub key: String,

    /// Per-request timeout, in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            url: String::new(),
            key: String::new(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl StoreConfig {
    /// Check if both required values are present.
    pub fn is_configured(&self) -> bool {
        self.missing_fields().is_empty()
    }

    /// Names of the required values that are absent.
    pub fn missing_fields(&self) -> Vec<String> {
        let mut missing = Vec::new();
        if self.url.trim().is_empty() {
            missing.push(String::from("store.url"));
        }
        if self.key.trim().is_empty() {
            missing.push(String::from("store.key"));
        }
        missing
    }

    /// Check presence and shape of the required values.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::NotConfigured` listing the absent values, or
    /// `ConfigError::InvalidValue` if the URL is not http(s) or the timeout is zero.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let missing = self.missing_fields();
        if !missing.is_empty() {
            return Err(ConfigError::NotConfigured {
                section: String::from("store"),
                missing,
            });
        }
        let url = self.url.trim();
        if !(url.starts_with("https://") || url.starts_with("http://")) {
            return Err(ConfigError::InvalidValue {
                field: String::from("store.url"),
                reason: format!("expected an http(s) URL, got '{url}'"),
            });
        }
        if self.timeout_secs == 0 {
            return Err(ConfigError::InvalidValue {
                field: String::from("store.timeout_secs"),
                reason: String::from("must be greater than zero"),
            });
        }
        Ok(())
    }

    /// Base URL without a trailing slash.
    pub fn base_url(&self) -> &str {
        self.url.trim().trim_end_matches('/')
    }
}
