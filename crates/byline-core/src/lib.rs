//! # Byline Core
//!
//! The domain layer of the byline blog backend.
//! This crate contains pure business logic with zero infrastructure dependencies:
//! the `Author` and `Post` records, the field validators that gate every
//! mutation, and the repository ports the storage layer implements.

pub mod domain;
pub mod error;
pub mod ports;
pub mod validation;

pub use error::{RepoError, ValidationError};
