use anyhow::Context;
use sls_config::SlsConfig;
use sls_store::supabase::SupabaseStore;

use crate::cli::GlobalFlags;

/// Load `.env` (or `--env-file`) and the layered configuration.
pub fn load_config(flags: &GlobalFlags) -> anyhow::Result<SlsConfig> {
    let config = match &flags.env_file {
        Some(path) => SlsConfig::load_with_dotenv_file(path)
            .with_context(|| format!("failed to load configuration with {}", path.display()))?,
        None => SlsConfig::load_with_dotenv().context("failed to load configuration")?,
    };

    for warning in unconfigured_warnings(&config, std::env::vars()) {
        tracing::warn!("{warning}");
    }
    Ok(config)
}

/// Build the store client, failing before any page renders when the
/// connection settings are absent or invalid.
pub fn open_store(config: &SlsConfig) -> anyhow::Result<SupabaseStore> {
    let store = config
        .require_store()
        .context("set SUPABASE_URL and SUPABASE_KEY (or SLS_STORE__URL / SLS_STORE__KEY)")?;
    SupabaseStore::new(store).context("failed to build Supabase client")
}

/// Warnings for env keys that look like store settings but were not picked up.
fn unconfigured_warnings<I>(config: &SlsConfig, env: I) -> Vec<String>
where
    I: IntoIterator<Item = (String, String)>,
{
    if config.store.is_configured() {
        return Vec::new();
    }
    env.into_iter()
        .map(|(key, _)| key)
        .filter(|key| key.starts_with("SLS_STORE") && !key.starts_with("SLS_STORE__"))
        .map(|key| {
            format!(
                "{key} is set but ignored. Use double underscores (example: SLS_STORE__URL)."
            )
        })
        .collect()
}
