//! Relay configuration types.
//!
//! `RelayConfig` represents the `neurosync.toml` file. Every field has a
//! default, so an empty file (or no file at all) yields a working OpenAI relay
//! on `127.0.0.1:3000`. Credentials never live here: the file only names the
//! environment variable that holds them.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::provider::{ProviderConfig, ProviderKind, DEFAULT_TIMEOUT_SECS};

/// Top-level configuration file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RelayConfig {
    #[serde(default)]
    pub server: ServerConfig,

    #[serde(default)]
    pub provider: ProviderSection,
}

/// Listener settings for `nsync serve`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,

    /// Directory of the built single-page app, served as a fallback.
    #[serde(default = "default_web_dir")]
    pub web_dir: String,
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    3000
}

fn default_web_dir() -> String {
    "web/dist".to_string()
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            web_dir: default_web_dir(),
        }
    }
}

/// `[provider]` table. Unset fields fall back to the kind's defaults.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProviderSection {
    #[serde(default = "default_kind")]
    pub kind: ProviderKind,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base_url: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_key_env: Option<String>,

    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_kind() -> ProviderKind {
    ProviderKind::OpenAi
}

fn default_timeout_secs() -> u64 {
    DEFAULT_TIMEOUT_SECS
}

impl Default for ProviderSection {
    fn default() -> Self {
        Self {
            kind: default_kind(),
            base_url: None,
            model: None,
            api_key_env: None,
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl ProviderSection {
    /// Merge the overrides onto the kind's defaults.
    pub fn resolve(&self) -> Result<ProviderConfig, ConfigError> {
        let mut config = ProviderConfig::defaults_for(self.kind);

        if let Some(ref url) = self.base_url {
            config.base_url = url.clone();
        }
        if let Some(ref model) = self.model {
            config.model = model.clone();
        }
        if let Some(ref env) = self.api_key_env {
            config.api_key_env = env.clone();
        }
        config.timeout_secs = self.timeout_secs;

        if config.base_url.trim().is_empty() {
            return Err(ConfigError::Invalid(format!(
                "provider '{}' requires a base_url",
                self.kind
            )));
        }
        if config.model.trim().is_empty() {
            return Err(ConfigError::Invalid("provider model must not be empty".to_string()));
        }
        if config.api_key_env.trim().is_empty() {
            return Err(ConfigError::Invalid(
                "provider api_key_env must not be empty".to_string(),
            ));
        }
        if config.timeout_secs == 0 {
            return Err(ConfigError::Invalid("timeout_secs must be at least 1".to_string()));
        }

        Ok(config)
    }
}
