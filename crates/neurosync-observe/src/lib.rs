//! Observability setup for Neuro Sync: structured logging with optional
//! OpenTelemetry span export.

pub mod tracing_setup;
