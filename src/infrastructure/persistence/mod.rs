//! SQLite repository implementations.
//!
//! # Repositories
//!
//! - [`SqliteUrlRepository`] - URL mapping storage and retrieval

pub mod sqlite_url_repository;

pub use sqlite_url_repository::SqliteUrlRepository;
