//! `nsync config`: print the effective configuration.
//!
//! The credential value is never printed, only whether its variable is set.

use std::path::Path;

use anyhow::Result;
use console::style;
use secrecy::ExposeSecret;

use neurosync_core::credential::CredentialSource;
use neurosync_infra::secret::env::EnvCredentialSource;
use neurosync_types::config::RelayConfig;

pub async fn show_config(path: &Path, config: &RelayConfig, json: bool) -> Result<()> {
    let provider = config.provider.resolve()?;
    let credential_set = EnvCredentialSource::new()
        .get(&provider.api_key_env)
        .await
        .is_some_and(|key| !key.expose_secret().trim().is_empty());

    if json {
        let out = serde_json::json!({
            "config_file": path.display().to_string(),
            "config_file_exists": path.exists(),
            "server": config.server,
            "provider": {
                "kind": provider.kind,
                "endpoint": provider.completions_url(),
                "model": provider.model,
                "api_key_env": provider.api_key_env,
                "credential_set": credential_set,
                "timeout_secs": provider.timeout_secs,
            },
        });
        println!("{}", serde_json::to_string_pretty(&out)?);
        return Ok(());
    }

    let file_note = if path.exists() { "" } else { " (not found, using defaults)" };
    let credential = if credential_set {
        style("set").green()
    } else {
        style("not set").red()
    };

    println!();
    println!("  {} {}{}", style("Config:").bold(), path.display(), style(file_note).dim());
    println!();
    println!("  {}", style("── Server ──").dim());
    println!("  Listen:   {}:{}", config.server.host, config.server.port);
    println!("  Web dir:  {}", config.server.web_dir);
    println!();
    println!("  {}", style("── Provider ──").dim());
    println!("  Kind:     {}", style(provider.kind).cyan());
    println!("  Endpoint: {}", provider.completions_url());
    println!("  Model:    {}", provider.model);
    println!("  Key:      {} ({})", provider.api_key_env, credential);
    println!("  Timeout:  {}s", provider.timeout_secs);
    println!();

    Ok(())
}
