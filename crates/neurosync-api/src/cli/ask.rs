//! One-shot `nsync ask` command.

use console::style;

use neurosync_types::chat::ChatTurn;

use super::client::{RelayClient, UNAVAILABLE_MESSAGE};

/// Build the conversation for a single question.
pub fn build_turns(message: &str, system: Option<&str>) -> Vec<ChatTurn> {
    let mut turns = Vec::with_capacity(2);
    if let Some(system) = system.filter(|s| !s.trim().is_empty()) {
        turns.push(ChatTurn::system(system));
    }
    turns.push(ChatTurn::user(message));
    turns
}

/// Send one message and print the reply.
///
/// On failure the input is echoed back so it can be retried, and an error is
/// returned so the process exits non-zero.
pub async fn ask(url: &str, message: &str, system: Option<&str>, json: bool) -> anyhow::Result<()> {
    let client = RelayClient::new(url)?;
    let turns = build_turns(message, system);

    match client.send(&turns).await {
        Ok(reply) => {
            if json {
                let out = serde_json::json!({ "reply": reply });
                println!("{}", serde_json::to_string_pretty(&out)?);
            } else {
                println!("{reply}");
            }
            Ok(())
        }
        Err(e) => {
            tracing::debug!(error = %e, url = client.url(), "ask failed");
            if json {
                let out = serde_json::json!({
                    "error": UNAVAILABLE_MESSAGE,
                    "unsent": message,
                });
                println!("{}", serde_json::to_string_pretty(&out)?);
            } else {
                eprintln!("  {} {}", style("!").red().bold(), UNAVAILABLE_MESSAGE);
                eprintln!("  {} {}", style("Unsent:").dim(), message);
            }
            Err(e)
        }
    }
}
