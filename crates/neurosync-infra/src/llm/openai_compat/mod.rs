//! OpenAI-compatible completion provider.
//!
//! A single [`HttpCompletionProvider`] serves OpenAI, Google Gemini, Mistral
//! and any custom OpenAI-compatible endpoint: the provider kind only decides
//! the base URL, model and credential name (see
//! [`neurosync_types::provider::ProviderConfig`]).
//!
//! The API key arrives as a [`SecretString`] per call and is only exposed
//! when building the `Authorization` header.

use std::time::Duration;

use secrecy::{ExposeSecret, SecretString};
use serde_json::Value;

use neurosync_core::llm::provider::{CompletionProvider, ProviderReply};
use neurosync_types::chat::ProviderPayload;
use neurosync_types::error::{ConfigError, RelayError};
use neurosync_types::provider::ProviderConfig;

/// Completion provider speaking the OpenAI chat completions protocol over HTTP.
///
/// Holds no credential; the relay passes one in on every call.
#[derive(Debug, Clone)]
pub struct HttpCompletionProvider {
    client: reqwest::Client,
    provider_name: String,
    endpoint: String,
}

impl HttpCompletionProvider {
    /// Build a provider from resolved configuration.
    ///
    /// The configured timeout covers the whole request, connect through body.
    pub fn new(config: &ProviderConfig) -> Result<Self, ConfigError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| ConfigError::Invalid(format!("failed to create HTTP client: {e}")))?;

        Ok(Self {
            client,
            provider_name: config.kind.to_string(),
            endpoint: config.completions_url(),
        })
    }
}

/// Map a reqwest failure onto the relay taxonomy.
fn map_transport_error(e: reqwest::Error) -> RelayError {
    if e.is_timeout() {
        RelayError::Timeout
    } else {
        // without_url keeps query strings out of caller-visible text
        RelayError::Transport(e.without_url().to_string())
    }
}

impl CompletionProvider for HttpCompletionProvider {
    fn name(&self) -> &str {
        &self.provider_name
    }

    fn endpoint(&self) -> &str {
        &self.endpoint
    }

    async fn complete(
        &self,
        payload: &ProviderPayload,
        api_key: &SecretString,
    ) -> Result<ProviderReply, RelayError> {
        let response = self
            .client
            .post(&self.endpoint)
            .bearer_auth(api_key.expose_secret())
            .json(payload)
            .send()
            .await
            .map_err(map_transport_error)?;

        let status = response.status().as_u16();
        let bytes = response.bytes().await.map_err(map_transport_error)?;

        let body = serde_json::from_slice::<Value>(&bytes)
            .unwrap_or_else(|_| Value::String(String::from_utf8_lossy(&bytes).into_owned()));

        tracing::debug!(provider = %self.provider_name, status, "Provider responded");

        Ok(ProviderReply { status, body })
    }
}
