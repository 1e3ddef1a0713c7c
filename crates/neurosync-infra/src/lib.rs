//! Infrastructure layer for Neuro Sync.
//!
//! Contains implementations of the port traits defined in `neurosync-core`:
//! the reqwest-based completion provider, the environment credential source,
//! and the TOML configuration loader.

pub mod config;
pub mod llm;
pub mod secret;
