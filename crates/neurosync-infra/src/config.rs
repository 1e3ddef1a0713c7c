//! Relay configuration loader.
//!
//! Locates `neurosync.toml` and deserializes it into [`RelayConfig`].
//!
//! Lookup order:
//! 1. An explicit path (the `--config` flag)
//! 2. The `NEUROSYNC_CONFIG` environment variable
//! 3. `neurosync.toml` in the working directory
//!
//! A missing file yields defaults. A file that exists but cannot be read or
//! parsed is an error: a relay silently running with the wrong provider is
//! worse than one that refuses to start.

use std::path::{Path, PathBuf};

use neurosync_types::config::RelayConfig;
use neurosync_types::error::ConfigError;

/// Environment variable naming the config file.
pub const CONFIG_ENV: &str = "NEUROSYNC_CONFIG";

/// File name looked up in the working directory.
pub const DEFAULT_CONFIG_FILE: &str = "neurosync.toml";

/// Decide which config file to read.
pub fn resolve_config_path(explicit: Option<&Path>) -> PathBuf {
    if let Some(path) = explicit {
        return path.to_path_buf();
    }
    match std::env::var(CONFIG_ENV) {
        Ok(path) if !path.trim().is_empty() => PathBuf::from(path),
        _ => PathBuf::from(DEFAULT_CONFIG_FILE),
    }
}

/// Load the relay configuration from `path`.
///
/// - If the file does not exist, returns [`RelayConfig::default()`].
/// - If the file exists but fails to read or parse, returns a [`ConfigError`].
pub async fn load_relay_config(path: &Path) -> Result<RelayConfig, ConfigError> {
    let content = match tokio::fs::read_to_string(path).await {
        Ok(content) => content,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            tracing::debug!("No config file at {}, using defaults", path.display());
            return Ok(RelayConfig::default());
        }
        Err(err) => {
            return Err(ConfigError::Read {
                path: path.display().to_string(),
                message: err.to_string(),
            });
        }
    };

    let config = toml::from_str::<RelayConfig>(&content).map_err(|err| ConfigError::Parse {
        path: path.display().to_string(),
        message: err.to_string(),
    })?;

    tracing::debug!(
        path = %path.display(),
        provider = %config.provider.kind,
        "Loaded relay config"
    );
    Ok(config)
}
