//! Credential source implementations.
//!
//! - `env`: Environment variable source, read on every call

pub mod env;
