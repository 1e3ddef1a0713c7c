//! The chat proxy contract.
//!
//! - `validation`: method and body checks (no outbound call on failure)
//! - `service`: `ChatRelay`, the single forward-and-return operation
//! - `redact`: credential scrubbing and reply-text extraction

pub mod redact;
pub mod service;
pub mod validation;
