//! Completion provider implementations.
//!
//! Contains the concrete implementation of the [`CompletionProvider`] trait
//! defined in `neurosync-core`, plus a connection test
//! ([`test_provider_connection`]) for verifying the key and endpoint.
//!
//! [`CompletionProvider`]: neurosync_core::llm::provider::CompletionProvider

pub mod openai_compat;

use neurosync_core::credential::CredentialSource;
use neurosync_core::llm::provider::CompletionProvider;
use neurosync_core::relay::service::ChatRelay;
use neurosync_types::chat::ChatTurn;
use neurosync_types::error::RelayError;

/// Test provider connectivity by relaying a minimal one-turn conversation.
///
/// Goes through the full relay path, so a missing credential or a rejected
/// key surfaces exactly as it would for a real caller.
pub async fn test_provider_connection<P, C>(relay: &ChatRelay<P, C>) -> Result<(), RelayError>
where
    P: CompletionProvider,
    C: CredentialSource,
{
    relay.relay(vec![ChatTurn::user("Hello")]).await?;
    Ok(())
}
