//! Completion provider port.
//!
//! - `CompletionProvider`: RPITIT trait for concrete provider implementations
//! - `ProviderReply`: status and body handed back to the relay for classification

pub mod provider;
