//! HTTP API layer.
//!
//! Translates requests into URL service calls and renders the JSON envelope.
//!
//! # Modules
//!
//! - [`dto`] - Request/response bodies
//! - [`extract`] - Custom extractors
//! - [`handlers`] - Save, redirect and delete handlers
//! - [`middleware`] - Auth, request id, access log, panic recovery, path normalization

pub mod dto;
pub mod extract;
pub mod handlers;
pub mod middleware;
