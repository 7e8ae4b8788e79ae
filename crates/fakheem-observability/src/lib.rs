//! Structured logging for the Fakheem storefront.
//!
//! This crate provides:
//! - `StructuredLogger` - log entries carrying the session and component
//! - `LogBuilder` - fluent field attachment
//! - `init_tracing` - subscriber setup for hosts and tests
//!
//! Entries are formatted as JSON or human-readable text and handed to
//! `tracing`, so the host decides where they end up.

mod logging;
mod subscriber;

pub use logging::*;
pub use subscriber::*;
