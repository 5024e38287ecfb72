// Configuration structs

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};
use std::net::SocketAddr;
use std::path::PathBuf;
use std::time::Duration;

use super::constants::{
    CONFIG_DIR_NAME, DEFAULT_HTTP_ADDR, DEFAULT_SERVER_URL, DEFAULT_TIMEOUT_SECS,
};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Summary service settings (`sparkup serve`)
    #[serde(default)]
    pub server: ServerConfig,

    /// Wizard settings (connecting to the summary service)
    #[serde(default)]
    pub client: ClientConfig,

    /// Directory for wizard log files
    #[serde(default = "default_log_dir")]
    pub log_dir: PathBuf,
}

/// Server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Bind address (e.g., "127.0.0.1:4000")
    pub bind_address: String,
}

/// Client configuration for reaching the summary service
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    /// Base URL of the summary service
    pub server_url: String,
    /// Request timeout in seconds
    pub timeout_seconds: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig::default(),
            client: ClientConfig::default(),
            log_dir: default_log_dir(),
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_address: DEFAULT_HTTP_ADDR.to_string(),
        }
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            server_url: DEFAULT_SERVER_URL.to_string(),
            timeout_seconds: DEFAULT_TIMEOUT_SECS,
        }
    }
}

impl ClientConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_seconds)
    }
}

/// `~/.sparkup`, falling back to a relative directory when HOME is unknown
pub fn config_dir() -> PathBuf {
    dirs::home_dir()
        .map(|home| home.join(CONFIG_DIR_NAME))
        .unwrap_or_else(|| PathBuf::from(CONFIG_DIR_NAME))
}

fn default_log_dir() -> PathBuf {
    config_dir().join("logs")
}

impl Config {
    /// Validate configuration and return helpful errors
    pub fn validate(&self) -> Result<()> {
        self.server
            .bind_address
            .parse::<SocketAddr>()
            .with_context(|| {
                format!(
                    "Invalid server bind address '{}' (expected host:port, e.g. 127.0.0.1:4000)",
                    self.server.bind_address
                )
            })?;

        let url = reqwest::Url::parse(&self.client.server_url)
            .with_context(|| format!("Invalid server URL '{}'", self.client.server_url))?;
        if !matches!(url.scheme(), "http" | "https") {
            bail!(
                "Server URL must use http or https, got '{}'",
                self.client.server_url
            );
        }

        if self.client.timeout_seconds == 0 {
            bail!("Client timeout must be at least 1 second");
        }

        Ok(())
    }
}
