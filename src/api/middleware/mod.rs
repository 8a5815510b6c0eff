//! API middleware: Bearer session auth and request tracing.

pub mod auth;
pub mod tracing;
