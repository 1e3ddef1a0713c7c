//! Completion provider selection and per-provider defaults.
//!
//! Every provider the relay can talk to speaks the OpenAI chat completions
//! protocol, so the only differences are base URL, model and the name of the
//! environment variable holding the credential.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Default request timeout for outbound completion calls.
pub const DEFAULT_TIMEOUT_SECS: u64 = 60;

/// Which provider backs the relay.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProviderKind {
    #[serde(rename = "openai")]
    OpenAi,
    Gemini,
    Mistral,
    /// Any other OpenAI-compatible endpoint; `base_url` must be set explicitly.
    Custom,
}

impl ProviderKind {
    /// Base URL used when the configuration does not override it.
    pub fn default_base_url(&self) -> Option<&'static str> {
        match self {
            ProviderKind::OpenAi => Some("https://api.openai.com/v1"),
            ProviderKind::Gemini => Some("https://generativelanguage.googleapis.com/v1beta/openai"),
            ProviderKind::Mistral => Some("https://api.mistral.ai/v1"),
            ProviderKind::Custom => None,
        }
    }

    pub fn default_model(&self) -> &'static str {
        match self {
            ProviderKind::OpenAi | ProviderKind::Custom => "gpt-3.5-turbo",
            ProviderKind::Gemini => "gemini-2.0-flash",
            ProviderKind::Mistral => "mistral-small-latest",
        }
    }

    /// Environment variable holding the credential.
    pub fn default_api_key_env(&self) -> &'static str {
        match self {
            ProviderKind::OpenAi | ProviderKind::Custom => "OPENAI_API_KEY",
            ProviderKind::Gemini => "GEMINI_API_KEY",
            ProviderKind::Mistral => "MISTRAL_API_KEY",
        }
    }
}

impl fmt::Display for ProviderKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProviderKind::OpenAi => write!(f, "openai"),
            ProviderKind::Gemini => write!(f, "gemini"),
            ProviderKind::Mistral => write!(f, "mistral"),
            ProviderKind::Custom => write!(f, "custom"),
        }
    }
}

impl FromStr for ProviderKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "openai" => Ok(ProviderKind::OpenAi),
            "gemini" => Ok(ProviderKind::Gemini),
            "mistral" => Ok(ProviderKind::Mistral),
            "custom" => Ok(ProviderKind::Custom),
            other => Err(format!("invalid provider kind: '{other}'")),
        }
    }
}

/// Resolved configuration for the single provider the relay forwards to.
///
/// Holds the *name* of the credential variable, never the credential itself.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProviderConfig {
    pub kind: ProviderKind,
    pub base_url: String,
    pub model: String,
    pub api_key_env: String,
    pub timeout_secs: u64,
}

impl ProviderConfig {
    /// Defaults for a known provider kind.
    ///
    /// `Custom` has no default base URL and gets an empty one, which
    /// [`ProviderConfig::completions_url`] callers must reject.
    pub fn defaults_for(kind: ProviderKind) -> Self {
        Self {
            kind,
            base_url: kind.default_base_url().unwrap_or_default().to_string(),
            model: kind.default_model().to_string(),
            api_key_env: kind.default_api_key_env().to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }

    /// Full URL of the chat completions endpoint.
    pub fn completions_url(&self) -> String {
        format!("{}/chat/completions", self.base_url.trim_end_matches('/'))
    }
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self::defaults_for(ProviderKind::OpenAi)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_provider_kind_roundtrip() {
        for kind in [
            ProviderKind::OpenAi,
            ProviderKind::Gemini,
            ProviderKind::Mistral,
            ProviderKind::Custom,
        ] {
            let parsed: ProviderKind = kind.to_string().parse().unwrap();
            assert_eq!(kind, parsed);
        }
    }

    #[test]
    fn test_provider_kind_serde() {
        let json = serde_json::to_string(&ProviderKind::OpenAi).unwrap();
        assert_eq!(json, "\"openai\"");
        let parsed: ProviderKind = serde_json::from_str("\"mistral\"").unwrap();
        assert_eq!(parsed, ProviderKind::Mistral);
    }

    #[test]
    fn test_default_is_openai_gpt35() {
        let config = ProviderConfig::default();
        assert_eq!(config.kind, ProviderKind::OpenAi);
        assert_eq!(config.model, "gpt-3.5-turbo");
        assert_eq!(config.api_key_env, "OPENAI_API_KEY");
        assert_eq!(config.timeout_secs, DEFAULT_TIMEOUT_SECS);
        assert_eq!(
            config.completions_url(),
            "https://api.openai.com/v1/chat/completions"
        );
    }

    #[test]
    fn test_completions_url_trims_trailing_slash() {
        let mut config = ProviderConfig::defaults_for(ProviderKind::Custom);
        config.base_url = "http://localhost:8080/v1/".to_string();
        assert_eq!(config.completions_url(), "http://localhost:8080/v1/chat/completions");
    }

    #[test]
    fn test_custom_has_no_base_url() {
        let config = ProviderConfig::defaults_for(ProviderKind::Custom);
        assert!(config.base_url.is_empty());
        assert_eq!(config.api_key_env, "OPENAI_API_KEY");
    }
}
