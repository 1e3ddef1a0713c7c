//! Chat turn types crossing the relay boundary.
//!
//! A caller sends an ordered list of [`ChatTurn`]s; the relay embeds them in a
//! [`ProviderPayload`] together with the configured model identifier.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Speaker role of a chat turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChatRole {
    System,
    User,
    Assistant,
}

impl fmt::Display for ChatRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChatRole::System => write!(f, "system"),
            ChatRole::User => write!(f, "user"),
            ChatRole::Assistant => write!(f, "assistant"),
        }
    }
}

impl FromStr for ChatRole {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "system" => Ok(ChatRole::System),
            "user" => Ok(ChatRole::User),
            "assistant" => Ok(ChatRole::Assistant),
            other => Err(format!("invalid chat role: '{other}'")),
        }
    }
}

/// One message in a conversation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatTurn {
    pub role: ChatRole,
    pub content: String,
}

impl ChatTurn {
    pub fn new(role: ChatRole, content: impl Into<String>) -> Self {
        Self {
            role,
            content: content.into(),
        }
    }

    pub fn system(content: impl Into<String>) -> Self {
        Self::new(ChatRole::System, content)
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self::new(ChatRole::User, content)
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self::new(ChatRole::Assistant, content)
    }
}

/// Body a caller posts to the relay endpoint.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ChatRequest {
    pub messages: Vec<ChatTurn>,
}

/// Outbound body sent to the completion provider.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProviderPayload {
    pub model: String,
    pub messages: Vec<ChatTurn>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chat_role_roundtrip() {
        for role in [ChatRole::System, ChatRole::User, ChatRole::Assistant] {
            let parsed: ChatRole = role.to_string().parse().unwrap();
            assert_eq!(role, parsed);
        }
    }

    #[test]
    fn test_chat_role_parse_is_case_insensitive() {
        assert_eq!("USER".parse::<ChatRole>().unwrap(), ChatRole::User);
        assert!("bot".parse::<ChatRole>().is_err());
    }

    #[test]
    fn test_chat_turn_serde_shape() {
        let turn = ChatTurn::user("hello");
        let json = serde_json::to_value(&turn).unwrap();
        assert_eq!(json, serde_json::json!({"role": "user", "content": "hello"}));
    }

    #[test]
    fn test_unknown_role_rejected_by_serde() {
        let result: Result<ChatTurn, _> =
            serde_json::from_str(r#"{"role":"narrator","content":"x"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_provider_payload_keeps_turn_order() {
        let payload = ProviderPayload {
            model: "gpt-3.5-turbo".to_string(),
            messages: vec![ChatTurn::system("be brief"), ChatTurn::user("hi")],
        };
        let json = serde_json::to_value(&payload).unwrap();
        assert_eq!(json["model"], "gpt-3.5-turbo");
        assert_eq!(json["messages"][0]["role"], "system");
        assert_eq!(json["messages"][1]["content"], "hi");
    }
}
