//! # outfitvote-observability
//!
//! Structured logging for the workflow: subscriber setup and one event
//! function per user-visible operation.

pub mod tracing_setup;

pub use tracing_setup::{events, init_tracing, init_tracing_from_config, init_tracing_with_filter};
