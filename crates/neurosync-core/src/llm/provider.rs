//! CompletionProvider trait definition.
//!
//! The relay forwards a [`ProviderPayload`] through this port. Uses native
//! async fn in traits (RPITIT, Rust 2024 edition); implementations live in
//! neurosync-infra (e.g. `HttpCompletionProvider`).

use secrecy::SecretString;
use serde_json::Value;

use neurosync_types::chat::ProviderPayload;
use neurosync_types::error::RelayError;

/// Raw reply from a provider: HTTP status plus the decoded JSON body.
///
/// A non-JSON body is carried as a JSON string so it can still be relayed
/// in an error envelope; only a JSON object counts as a relayable success.
#[derive(Debug, Clone, PartialEq)]
pub struct ProviderReply {
    pub status: u16,
    pub body: Value,
}

impl ProviderReply {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// True when the payload carries a non-null top-level `error` field.
    pub fn has_error_field(&self) -> bool {
        self.body.get("error").is_some_and(|e| !e.is_null())
    }

    /// 2xx status with a JSON object body and no `error` field.
    pub fn is_relayable(&self) -> bool {
        self.is_success() && self.body.is_object() && !self.has_error_field()
    }
}

/// Trait for completion provider backends.
///
/// Implementations report only transport-level failures
/// ([`RelayError::Transport`], [`RelayError::Timeout`]); any HTTP response,
/// successful or not, comes back as a [`ProviderReply`] for the relay to
/// classify.
pub trait CompletionProvider: Send + Sync {
    /// Human-readable provider name (e.g., "openai", "mistral").
    fn name(&self) -> &str;

    /// Full URL of the completions endpoint.
    fn endpoint(&self) -> &str;

    /// Send the payload, authenticating with `api_key` as a bearer token.
    fn complete(
        &self,
        payload: &ProviderPayload,
        api_key: &SecretString,
    ) -> impl std::future::Future<Output = Result<ProviderReply, RelayError>> + Send;
}
