//! `nsync check`: verify the provider credential and endpoint.

use anyhow::Result;
use console::style;

use neurosync_core::llm::provider::CompletionProvider;
use neurosync_infra::llm::test_provider_connection;

use crate::state::AppState;

pub async fn check(state: &AppState, json: bool) -> Result<()> {
    let relay = &state.relay;
    let result = test_provider_connection(relay.as_ref()).await;

    if json {
        let out = serde_json::json!({
            "provider": state.provider.kind,
            "endpoint": relay.provider().endpoint(),
            "model": relay.model(),
            "ok": result.is_ok(),
            "error": result.as_ref().err().map(|e| e.to_string()),
        });
        println!("{}", serde_json::to_string_pretty(&out)?);
    } else {
        println!();
        println!(
            "  {} {} ({})",
            style("Checking").bold(),
            style(relay.provider().endpoint()).cyan(),
            relay.model()
        );
        match &result {
            Ok(()) => println!("  {} Provider answered", style("✓").green()),
            Err(e) => println!("  {} {e}", style("✗").red()),
        }
        println!();
    }

    result.map_err(Into::into)
}
