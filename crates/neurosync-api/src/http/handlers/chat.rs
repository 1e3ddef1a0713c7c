//! Chat proxy endpoint.
//!
//! POST /api/chat (alias: POST /api/gpt)
//!
//! Body: `{ "messages": [ { "role": "user", "content": "hello" } ] }`.
//! On success the provider's JSON object is relayed with its status and the
//! credential scrubbed; every failure becomes the error envelope from
//! [`crate::http::error`].

use axum::extract::State;
use axum::http::{Method, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Json;

use crate::http::error::AppError;
use crate::http::extractors::body::ChatBody;
use crate::state::AppState;

/// Any method /api/chat -- non-POST methods are rejected inside the relay.
///
/// The raw body is taken as bytes so that malformed JSON reaches the relay's
/// validation and comes back in the same envelope as every other error.
pub async fn proxy_chat(
    State(state): State<AppState>,
    method: Method,
    ChatBody(body): ChatBody,
) -> Result<Response, AppError> {
    let reply = state.relay.handle(method.as_str(), &body).await?;
    let status = StatusCode::from_u16(reply.status).unwrap_or(StatusCode::OK);
    Ok((status, Json(reply.body)).into_response())
}
