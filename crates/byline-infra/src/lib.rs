//! # Byline Infrastructure
//!
//! Concrete implementations of the ports defined in `byline-core`.
//! The repositories here carry the storage-level half of the constraint
//! engine: the unique author name and the declarative length/category
//! checks re-applied at write time.
//!
//! ## Feature Flags
//!
//! - `postgres` (default) - PostgreSQL repositories via SeaORM
//! - `minimal` - in-memory repositories only, no external dependencies

pub mod database;

// Re-exports - In-Memory
pub use database::{InMemoryAuthorRepository, InMemoryPostRepository};

// Re-exports - Postgres
#[cfg(feature = "postgres")]
pub use database::{DatabaseConfig, PostgresAuthorRepository, PostgresPostRepository};
