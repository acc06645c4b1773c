//! # sls-config
//!
//! Layered configuration loading for the session tracker using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`SLS_*` prefix, `__` as separator)
//! 2. `SUPABASE_URL` / `SUPABASE_KEY`
//! 3. Project-level `.sls/config.toml`
//! 4. User-level `~/.config/sls/config.toml`
//! 5. Built-in defaults
//!
//! # Environment Variable Mapping
//!
//! Figment maps `SLS_STORE__URL` -> `store.url`, `SLS_GENERAL__PAGE_TITLE` ->
//! `general.page_title`. The bare `SUPABASE_URL` and `SUPABASE_KEY` variables
//! map to `store.url` and `store.key`.
//!
//! # Usage
//!
//! ```no_run
//! use sls_config::SlsConfig;
//!
//! let config = SlsConfig::load_with_dotenv().expect("config");
//! let store = config.require_store().expect("store must be configured");
//! println!("Store URL: {}", store.url);
//! ```

mod error;
mod general;
mod store;

pub use error::ConfigError;
pub use general::GeneralConfig;
pub use store::StoreConfig;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct SlsConfig {
    #[serde(default)]
    pub store: StoreConfig,
    #[serde(default)]
    pub general: GeneralConfig,
}

impl SlsConfig {
    /// Load configuration from all sources (TOML files + environment variables).
    ///
    /// Does NOT call `dotenvy`; use [`Self::load_with_dotenv`] if you need
    /// `.env` file loading.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Figment` if a source cannot be parsed.
    pub fn load() -> Result<Self, ConfigError> {
        Self::figment().extract().map_err(ConfigError::from)
    }

    /// Load configuration with `.env` file support.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Figment` if a source cannot be parsed.
    pub fn load_with_dotenv() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::load()
    }

    /// Load configuration after reading an explicit `.env` file.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` if the file cannot be read, or
    /// `ConfigError::Figment` if a source cannot be parsed.
    pub fn load_with_dotenv_file(path: &Path) -> Result<Self, ConfigError> {
        dotenvy::from_path(path).map_err(|e| ConfigError::InvalidValue {
            field: String::from("env_file"),
            reason: format!("{}: {e}", path.display()),
        })?;
        Self::load()
    }

    /// Build the figment provider chain.
    ///
    /// This is public so tests can inspect the figment directly or add
    /// additional providers on top.
    pub fn figment() -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        // Layer 1: User-global config
        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                figment = figment.merge(Toml::file(global_path));
            }
        }

        // Layer 2: Project-local config
        let local_path = PathBuf::from(".sls/config.toml");
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        // Layer 3: Supabase's conventional variable names
        figment = figment.merge(Self::supabase_env());

        // Layer 4: Prefixed environment variables (highest priority)
        figment.merge(Env::prefixed("SLS_").split("__"))
    }

    /// The store section, failing fast when either required value is absent.
    ///
    /// Called once at startup before any page renders.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::NotConfigured` or `ConfigError::InvalidValue`.
    pub fn require_store(&self) -> Result<&StoreConfig, ConfigError> {
        self.store.validate()?;
        Ok(&self.store)
    }

    fn supabase_env() -> Env {
        Env::raw()
            .only(&["SUPABASE_URL", "SUPABASE_KEY"])
            .map(|key| match key.as_str().to_ascii_lowercase().as_str() {
                "supabase_url" => "store.url".into(),
                "supabase_key" => "store.key".into(),
                other => other.to_string().into(),
            })
    }

    /// Path to the user-global config file.
    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("sls").join("config.toml"))
    }
}
