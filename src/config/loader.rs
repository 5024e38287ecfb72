// Configuration loader
// Loads ~/.sparkup/config.toml (optional) and applies environment overrides

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

use super::constants::{ENV_BIND_ADDRESS, ENV_SERVER_URL, ENV_TIMEOUT_SECS};
use super::settings::{config_dir, Config};

/// Load configuration from the default config file and the environment
pub fn load_config() -> Result<Config> {
    let path = config_dir().join("config.toml");
    load_config_from(&path, |key| std::env::var(key).ok())
}

/// Load configuration from `path`, then apply overrides looked up via `env`.
///
/// A missing file is not an error: every setting has a default.
pub fn load_config_from<F>(path: &Path, env: F) -> Result<Config>
where
    F: Fn(&str) -> Option<String>,
{
    let mut config = if path.exists() {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        toml::from_str::<Config>(&contents)
            .with_context(|| format!("Failed to parse config file {}", path.display()))?
    } else {
        tracing::debug!("No config file at {}, using defaults", path.display());
        Config::default()
    };

    apply_env_overrides(&mut config, env)?;

    config
        .validate()
        .context("Configuration validation failed")?;

    Ok(config)
}

fn apply_env_overrides<F>(config: &mut Config, env: F) -> Result<()>
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(addr) = env(ENV_BIND_ADDRESS).filter(|v| !v.is_empty()) {
        config.server.bind_address = addr;
    }
    if let Some(url) = env(ENV_SERVER_URL).filter(|v| !v.is_empty()) {
        config.client.server_url = url;
    }
    if let Some(secs) = env(ENV_TIMEOUT_SECS).filter(|v| !v.is_empty()) {
        config.client.timeout_seconds = secs
            .trim()
            .parse()
            .with_context(|| format!("{ENV_TIMEOUT_SECS} must be a whole number of seconds"))?;
    }
    Ok(())
}
