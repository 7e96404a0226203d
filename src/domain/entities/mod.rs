//! Core domain entities representing the business data model.
//!
//! - [`UrlMapping`] - A persisted alias → URL mapping
//! - [`NewUrlMapping`] - Input for creating a mapping

pub mod url_mapping;

pub use url_mapping::{NewUrlMapping, UrlMapping};
