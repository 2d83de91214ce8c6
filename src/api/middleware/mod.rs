//! HTTP middleware for request processing and protection.
//!
//! Provides request tracing, request id propagation, panic recovery,
//! per-request timeouts and the error envelope for framework responses.

pub mod envelope;
pub mod panic;
pub mod request_id;
pub mod timeout;
pub mod tracing;
