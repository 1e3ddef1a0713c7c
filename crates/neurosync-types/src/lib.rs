//! Shared domain types for Neuro Sync.
//!
//! Chat turns, provider selection, relay configuration, demo widget shapes
//! and the error taxonomy.
//!
//! Zero infrastructure dependencies -- only serde, serde_json, thiserror.

pub mod chat;
pub mod config;
pub mod demo;
pub mod error;
pub mod provider;
