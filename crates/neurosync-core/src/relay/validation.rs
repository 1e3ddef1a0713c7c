//! Inbound request checks that run before any outbound call.

use serde_json::Value;

use neurosync_types::chat::{ChatRole, ChatTurn};
use neurosync_types::error::RelayError;

const MESSAGES_NOT_ARRAY: &str = "Invalid request body. \"messages\" must be an array.";

/// Reject every method other than POST.
pub fn ensure_post(method: &str) -> Result<(), RelayError> {
    if method.eq_ignore_ascii_case("POST") {
        Ok(())
    } else {
        Err(RelayError::MethodNotAllowed)
    }
}

/// Decode a raw request body into an ordered list of chat turns.
///
/// The body must be a JSON object whose `messages` field is an array of
/// `{ role, content }` objects. Extra fields on the body or on a turn are
/// ignored.
pub fn parse_turns(body: &[u8]) -> Result<Vec<ChatTurn>, RelayError> {
    let value: Value = serde_json::from_slice(body)
        .map_err(|_| RelayError::BadRequest("request body must be a JSON object".to_string()))?;

    let messages = match value.get("messages") {
        Some(Value::Array(items)) => items,
        _ => return Err(RelayError::BadRequest(MESSAGES_NOT_ARRAY.to_string())),
    };

    messages
        .iter()
        .enumerate()
        .map(|(index, item)| parse_turn(index, item))
        .collect()
}

fn parse_turn(index: usize, item: &Value) -> Result<ChatTurn, RelayError> {
    let role = item
        .get("role")
        .and_then(Value::as_str)
        .ok_or_else(|| RelayError::BadRequest(format!("messages[{index}].role must be a string")))?;

    let role: ChatRole = role
        .parse()
        .map_err(|e: String| RelayError::BadRequest(format!("messages[{index}]: {e}")))?;

    let content = item
        .get("content")
        .and_then(Value::as_str)
        .ok_or_else(|| {
            RelayError::BadRequest(format!("messages[{index}].content must be a string"))
        })?;

    Ok(ChatTurn::new(role, content))
}
