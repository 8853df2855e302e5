//! HTTP middleware for request processing.
//!
//! Provides request id propagation and observability middleware.

pub mod request_id;
pub mod tracing;
