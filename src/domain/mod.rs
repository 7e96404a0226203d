//! Domain layer containing business entities and repository contracts.
//!
//! - [`entities`] - Core business data structures
//! - [`repositories`] - Data access trait definitions
//!
//! The domain layer has no dependencies on the HTTP layer;
//! repository traits are implemented by `crate::infrastructure`.

pub mod entities;
pub mod repositories;
