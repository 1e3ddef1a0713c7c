//! HTTP client for a running relay, shared by `nsync ask` and `nsync chat`.

use std::time::Duration;

use anyhow::{anyhow, bail, Context};
use serde_json::Value;

use neurosync_core::relay::redact::reply_text;
use neurosync_types::chat::{ChatRequest, ChatTurn};

/// Shown in place of a reply whenever a turn fails, whatever the cause.
pub const UNAVAILABLE_MESSAGE: &str = "The assistant is unavailable right now.";

/// Client-side request timeout; slightly above the relay's provider timeout.
const CLIENT_TIMEOUT: Duration = Duration::from_secs(90);

/// Posts conversations to the relay's chat endpoint.
#[derive(Debug, Clone)]
pub struct RelayClient {
    http: reqwest::Client,
    url: String,
}

impl RelayClient {
    pub fn new(url: impl Into<String>) -> anyhow::Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(CLIENT_TIMEOUT)
            .build()
            .context("failed to build HTTP client")?;
        Ok(Self { http, url: url.into() })
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    /// Send the conversation and return the assistant's reply text.
    ///
    /// Fails on transport errors, on any error envelope from the relay, and
    /// on a success body without `choices[0].message.content`.
    pub async fn send(&self, turns: &[ChatTurn]) -> anyhow::Result<String> {
        let request = ChatRequest {
            messages: turns.to_vec(),
        };
        let response = self
            .http
            .post(&self.url)
            .json(&request)
            .send()
            .await
            .map_err(|e| anyhow!("could not reach relay: {}", e.without_url()))?;

        let status = response.status();
        let body: Value = response
            .json()
            .await
            .with_context(|| format!("relay returned a non-JSON body (status {status})"))?;

        if !status.is_success() {
            let message = body["error"]["message"].as_str().unwrap_or("unknown error");
            bail!("relay returned {status}: {message}");
        }

        match reply_text(&body) {
            Some(text) => Ok(text.to_string()),
            None => bail!("relay reply had no message content"),
        }
    }
}
