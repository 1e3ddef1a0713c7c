//! Business logic and port trait definitions for Neuro Sync.
//!
//! This crate defines the "ports" (provider and credential traits) that the
//! infrastructure layer implements, plus the relay service and the demo-data
//! generators. It depends only on `neurosync-types` -- never on
//! `neurosync-infra` or any HTTP crate.

pub mod credential;
pub mod demo;
pub mod llm;
pub mod relay;
