//! Application state wiring the relay together.
//!
//! The relay is generic over provider and credential traits; AppState pins it
//! to the concrete infra implementations.

use std::sync::Arc;

use neurosync_core::relay::service::ChatRelay;
use neurosync_infra::llm::openai_compat::HttpCompletionProvider;
use neurosync_infra::secret::env::EnvCredentialSource;
use neurosync_types::provider::ProviderConfig;

/// Concrete relay pinned to the infra implementations.
pub type ConcreteRelay = ChatRelay<HttpCompletionProvider, EnvCredentialSource>;

/// Shared application state, cloned into every handler.
#[derive(Clone)]
pub struct AppState {
    pub relay: Arc<ConcreteRelay>,
    pub provider: Arc<ProviderConfig>,
}

impl AppState {
    /// Build the relay for a resolved provider configuration.
    pub fn new(provider: ProviderConfig) -> anyhow::Result<Self> {
        let http = HttpCompletionProvider::new(&provider)?;
        let relay = ChatRelay::new(
            http,
            EnvCredentialSource::new(),
            provider.model.clone(),
            provider.api_key_env.clone(),
        );

        Ok(Self {
            relay: Arc::new(relay),
            provider: Arc::new(provider),
        })
    }
}
