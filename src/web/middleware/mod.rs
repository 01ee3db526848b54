//! Web-specific middleware.

pub mod tracing;
