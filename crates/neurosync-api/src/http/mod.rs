//! HTTP layer for Neuro Sync.
//!
//! Axum-based relay at `/api/chat`, demo data under `/api/v1/`, CORS for the
//! browser app, and optional static serving of the built SPA.

pub mod error;
pub mod extractors;
pub mod handlers;
pub mod router;
