//! Chat relay service: one stateless forward-and-return per invocation.
//!
//! ChatRelay resolves the credential, embeds the caller's turns in a
//! provider payload with the fixed model identifier, issues exactly one
//! provider call, and classifies the reply. Only a 2xx JSON object without an
//! `error` field is relayed; the credential is scrubbed from every reply body,
//! relayed or not. Failures never retry.

use secrecy::ExposeSecret;
use tracing::{Instrument, debug, info_span, warn};

use neurosync_types::chat::{ChatTurn, ProviderPayload};
use neurosync_types::error::RelayError;

use crate::credential::CredentialSource;
use crate::llm::provider::{CompletionProvider, ProviderReply};

use super::redact::redact;
use super::validation::{ensure_post, parse_turns};

/// Forwards chat turns to a completion provider.
///
/// Generic over `CompletionProvider` and `CredentialSource` so tests can
/// swap in fakes (neurosync-core never depends on neurosync-infra).
pub struct ChatRelay<P: CompletionProvider, C: CredentialSource> {
    provider: P,
    credentials: C,
    model: String,
    api_key_env: String,
}

impl<P: CompletionProvider, C: CredentialSource> ChatRelay<P, C> {
    /// Create a relay for a fixed model, authenticating with the credential
    /// named `api_key_env`.
    pub fn new(
        provider: P,
        credentials: C,
        model: impl Into<String>,
        api_key_env: impl Into<String>,
    ) -> Self {
        Self {
            provider,
            credentials,
            model: model.into(),
            api_key_env: api_key_env.into(),
        }
    }

    pub fn provider(&self) -> &P {
        &self.provider
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    pub fn api_key_env(&self) -> &str {
        &self.api_key_env
    }

    /// Whether the credential currently resolves to a non-blank value.
    pub async fn credential_configured(&self) -> bool {
        self.credentials
            .get(&self.api_key_env)
            .await
            .is_some_and(|key| !key.expose_secret().trim().is_empty())
    }

    /// Full boundary contract: method check, body validation, relay.
    pub async fn handle(&self, method: &str, body: &[u8]) -> Result<ProviderReply, RelayError> {
        ensure_post(method)?;
        let turns = parse_turns(body)?;
        self.relay(turns).await
    }

    /// Forward an already-validated turn sequence.
    pub async fn relay(&self, turns: Vec<ChatTurn>) -> Result<ProviderReply, RelayError> {
        let api_key = match self.credentials.get(&self.api_key_env).await {
            Some(key) if !key.expose_secret().trim().is_empty() => key,
            _ => {
                warn!(credential = %self.api_key_env, "Credential missing, refusing to relay");
                return Err(RelayError::MissingCredential(self.api_key_env.clone()));
            }
        };

        let payload = ProviderPayload {
            model: self.model.clone(),
            messages: turns,
        };

        let span = info_span!(
            "gen_ai.relay",
            gen_ai.operation.name = "chat",
            gen_ai.provider.name = self.provider.name(),
            gen_ai.request.model = %self.model,
            turns = payload.messages.len(),
        );

        let reply = self
            .provider
            .complete(&payload, &api_key)
            .instrument(span)
            .await
            .inspect_err(|e| warn!(provider = self.provider.name(), error = %e, "Provider call failed"))?;

        let relayable = reply.is_relayable();
        let status = reply.status;
        let body = redact(reply.body, api_key.expose_secret());

        if relayable {
            debug!(status, "Provider reply relayed");
            return Ok(ProviderReply { status, body });
        }

        warn!(
            provider = self.provider.name(),
            status,
            body = %body,
            "Provider returned an error"
        );
        Err(RelayError::Provider { status, body })
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use std::sync::Mutex;

    use secrecy::SecretString;
    use serde_json::{Value, json};

    use super::*;
    use crate::relay::redact::reply_text;

    const KEY: &str = "sk-test-0123456789";

    /// Records every outbound call and answers with a canned result.
    struct FakeProvider {
        calls: Mutex<Vec<(ProviderPayload, String)>>,
        outcome: fn() -> Result<ProviderReply, RelayError>,
    }

    impl FakeProvider {
        fn new(outcome: fn() -> Result<ProviderReply, RelayError>) -> Self {
            Self {
                calls: Mutex::new(Vec::new()),
                outcome,
            }
        }

        fn call_count(&self) -> usize {
            self.calls.lock().unwrap().len()
        }
    }

    impl CompletionProvider for FakeProvider {
        fn name(&self) -> &str {
            "fake"
        }

        fn endpoint(&self) -> &str {
            "http://fake.invalid/v1/chat/completions"
        }

        async fn complete(
            &self,
            payload: &ProviderPayload,
            api_key: &SecretString,
        ) -> Result<ProviderReply, RelayError> {
            self.calls
                .lock()
                .unwrap()
                .push((payload.clone(), api_key.expose_secret().to_string()));
            (self.outcome)()
        }
    }

    struct StaticCredentials(HashMap<String, String>);

    impl StaticCredentials {
        fn with(name: &str, value: &str) -> Self {
            Self(HashMap::from([(name.to_string(), value.to_string())]))
        }

        fn empty() -> Self {
            Self(HashMap::new())
        }
    }

    impl CredentialSource for StaticCredentials {
        async fn get(&self, name: &str) -> Option<SecretString> {
            self.0.get(name).map(|v| SecretString::from(v.clone()))
        }
    }

    fn hi_there() -> Result<ProviderReply, RelayError> {
        Ok(ProviderReply {
            status: 200,
            body: json!({"choices":[{"message":{"content":"hi there"}}]}),
        })
    }

    fn unauthorized() -> Result<ProviderReply, RelayError> {
        Ok(ProviderReply {
            status: 401,
            body: json!({"error": {"message": format!("Incorrect API key provided: {KEY}")}}),
        })
    }

    fn error_field_with_ok_status() -> Result<ProviderReply, RelayError> {
        Ok(ProviderReply {
            status: 200,
            body: json!({"error": {"message": "model overloaded"}}),
        })
    }

    fn html_with_ok_status() -> Result<ProviderReply, RelayError> {
        Ok(ProviderReply {
            status: 200,
            body: Value::String("<html>gateway page</html>".to_string()),
        })
    }

    fn key_echoed_in_success() -> Result<ProviderReply, RelayError> {
        Ok(ProviderReply {
            status: 200,
            body: json!({
                "choices": [{"message": {"content": format!("your key is {KEY}")}}],
                "system_fingerprint": KEY,
            }),
        })
    }

    fn dns_failure() -> Result<ProviderReply, RelayError> {
        Err(RelayError::Transport("dns error: no such host".to_string()))
    }

    fn relay(outcome: fn() -> Result<ProviderReply, RelayError>) -> ChatRelay<FakeProvider, StaticCredentials> {
        ChatRelay::new(
            FakeProvider::new(outcome),
            StaticCredentials::with("OPENAI_API_KEY", KEY),
            "gpt-3.5-turbo",
            "OPENAI_API_KEY",
        )
    }

    #[tokio::test]
    async fn test_round_trip_hello() {
        let relay = relay(hi_there);
        let reply = relay
            .handle("POST", br#"{"messages":[{"role":"user","content":"hello"}]}"#)
            .await
            .unwrap();

        assert_eq!(reply.status, 200);
        assert_eq!(reply_text(&reply.body), Some("hi there"));

        let calls = relay.provider().calls.lock().unwrap();
        assert_eq!(calls.len(), 1);
        let (payload, key) = &calls[0];
        assert_eq!(payload.model, "gpt-3.5-turbo");
        assert_eq!(payload.messages, vec![ChatTurn::user("hello")]);
        assert_eq!(key, KEY);
    }

    #[tokio::test]
    async fn test_non_post_makes_no_call() {
        let relay = relay(hi_there);
        for method in ["GET", "PUT", "DELETE"] {
            let result = relay
                .handle(method, br#"{"messages":[{"role":"user","content":"hello"}]}"#)
                .await;
            assert!(matches!(result, Err(RelayError::MethodNotAllowed)));
        }
        assert_eq!(relay.provider().call_count(), 0);
    }

    #[tokio::test]
    async fn test_malformed_body_makes_no_call() {
        let relay = relay(hi_there);
        for body in [&br#"{}"#[..], br#"{"messages":"hello"}"#, b"garbage"] {
            let result = relay.handle("POST", body).await;
            assert!(matches!(result, Err(RelayError::BadRequest(_))));
        }
        assert_eq!(relay.provider().call_count(), 0);
    }

    #[tokio::test]
    async fn test_missing_credential_fails_closed() {
        let relay = ChatRelay::new(
            FakeProvider::new(hi_there),
            StaticCredentials::empty(),
            "gpt-3.5-turbo",
            "OPENAI_API_KEY",
        );
        assert!(!relay.credential_configured().await);

        let result = relay.relay(vec![ChatTurn::user("hello")]).await;
        assert!(matches!(result, Err(RelayError::MissingCredential(ref name)) if name == "OPENAI_API_KEY"));
        assert_eq!(relay.provider().call_count(), 0);
    }

    #[tokio::test]
    async fn test_blank_credential_fails_closed() {
        let relay = ChatRelay::new(
            FakeProvider::new(hi_there),
            StaticCredentials::with("OPENAI_API_KEY", "   "),
            "gpt-3.5-turbo",
            "OPENAI_API_KEY",
        );
        let result = relay.relay(vec![ChatTurn::user("hello")]).await;
        assert!(matches!(result, Err(RelayError::MissingCredential(_))));
        assert_eq!(relay.provider().call_count(), 0);
    }

    #[tokio::test]
    async fn test_provider_error_is_redacted() {
        let relay = relay(unauthorized);
        let err = relay.relay(vec![ChatTurn::user("hello")]).await.unwrap_err();

        match err {
            RelayError::Provider { status, body } => {
                assert_eq!(status, 401);
                assert!(!body.to_string().contains(KEY));
                assert_eq!(
                    body["error"]["message"],
                    Value::String("Incorrect API key provided: [REDACTED]".to_string())
                );
            }
            other => panic!("expected Provider error, got {other:?}"),
        }
        assert_eq!(relay.provider().call_count(), 1);
    }

    #[tokio::test]
    async fn test_error_field_with_success_status_is_provider_error() {
        let relay = relay(error_field_with_ok_status);
        let err = relay.relay(vec![ChatTurn::user("hello")]).await.unwrap_err();
        assert!(matches!(err, RelayError::Provider { status: 200, .. }));
    }

    #[tokio::test]
    async fn test_non_json_success_is_provider_error() {
        let relay = relay(html_with_ok_status);
        let err = relay.relay(vec![ChatTurn::user("hello")]).await.unwrap_err();
        match err {
            RelayError::Provider { status, body } => {
                assert_eq!(status, 200);
                assert_eq!(body, Value::String("<html>gateway page</html>".to_string()));
            }
            other => panic!("expected Provider error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_success_body_is_redacted() {
        let relay = relay(key_echoed_in_success);
        let reply = relay.relay(vec![ChatTurn::user("hello")]).await.unwrap();
        assert_eq!(reply.status, 200);
        assert!(!reply.body.to_string().contains(KEY));
        assert_eq!(reply_text(&reply.body), Some("your key is [REDACTED]"));
        assert_eq!(reply.body["system_fingerprint"], "[REDACTED]");
    }

    #[tokio::test]
    async fn test_transport_failure_propagates_and_relay_stays_usable() {
        let relay = relay(dns_failure);
        let err = relay.relay(vec![ChatTurn::user("hello")]).await.unwrap_err();
        assert!(matches!(err, RelayError::Transport(_)));

        // Stateless: a second invocation behaves the same way.
        let err = relay.relay(vec![ChatTurn::user("again")]).await.unwrap_err();
        assert!(matches!(err, RelayError::Transport(_)));
        assert_eq!(relay.provider().call_count(), 2);
    }

    #[tokio::test]
    async fn test_accessors_report_configuration() {
        let relay = relay(hi_there);
        assert!(relay.credential_configured().await);
        assert_eq!(relay.model(), "gpt-3.5-turbo");
        assert_eq!(relay.api_key_env(), "OPENAI_API_KEY");
    }
}
