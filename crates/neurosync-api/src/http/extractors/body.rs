//! Raw request body extractor for the chat relay.
//!
//! Buffers the body as bytes so that the relay validates the JSON itself.
//! Bodies over the route's limit, or bodies that fail to buffer, are rejected
//! with the JSON error envelope instead of axum's plain-text response.

use axum::body::Bytes;
use axum::extract::{FromRequest, Request};

use crate::http::error::AppError;

/// Largest chat request body accepted, in bytes.
pub const MAX_CHAT_BODY_BYTES: usize = 2 * 1024 * 1024;

/// Buffered chat request body.
pub struct ChatBody(pub Bytes);

impl<S> FromRequest<S> for ChatBody
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = Bytes::from_request(req, state).await?;
        Ok(ChatBody(bytes))
    }
}
