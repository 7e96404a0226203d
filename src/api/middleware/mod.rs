//! HTTP middleware for request processing and protection.
//!
//! Provides authentication, request ids, access logging, panic recovery and
//! path normalization.

pub mod auth;
pub mod normalize;
pub mod panic;
pub mod request_id;
pub mod tracing;
