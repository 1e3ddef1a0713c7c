//! HTTP request handlers.

pub mod chat;
pub mod demo;
pub mod provider;
