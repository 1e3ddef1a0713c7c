//! Provider introspection endpoint.
//!
//! GET /api/v1/provider - which provider and model the relay forwards to.

use axum::extract::State;
use axum::Json;
use serde::Serialize;

use neurosync_core::llm::provider::CompletionProvider;

use crate::state::AppState;

/// Public view of the relay configuration. Never carries the credential value.
#[derive(Debug, Serialize)]
pub struct ProviderInfo {
    pub kind: String,
    pub model: String,
    pub endpoint: String,
    pub credential_configured: bool,
}

pub async fn get_provider(State(state): State<AppState>) -> Json<ProviderInfo> {
    Json(ProviderInfo {
        kind: state.provider.kind.to_string(),
        model: state.relay.model().to_string(),
        endpoint: state.relay.provider().endpoint().to_string(),
        credential_configured: state.relay.credential_configured().await,
    })
}
