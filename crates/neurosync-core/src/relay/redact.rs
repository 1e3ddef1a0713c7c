//! Helpers for reading and scrubbing provider payloads.

use serde_json::Value;

const REDACTED: &str = "[REDACTED]";

/// Replace every occurrence of `secret` inside string values (and object
/// keys) of `value`.
pub fn redact(value: Value, secret: &str) -> Value {
    if secret.is_empty() {
        return value;
    }
    match value {
        Value::String(s) => Value::String(s.replace(secret, REDACTED)),
        Value::Array(items) => Value::Array(items.into_iter().map(|v| redact(v, secret)).collect()),
        Value::Object(map) => Value::Object(
            map.into_iter()
                .map(|(k, v)| (k.replace(secret, REDACTED), redact(v, secret)))
                .collect(),
        ),
        other => other,
    }
}

/// Text of the first generated turn: `choices[0].message.content`.
pub fn reply_text(payload: &Value) -> Option<&str> {
    payload
        .get("choices")?
        .get(0)?
        .get("message")?
        .get("content")?
        .as_str()
}
