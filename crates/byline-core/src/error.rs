//! Domain-level error types.

use thiserror::Error;

/// Validation failures - one variant per rule.
///
/// Display strings are the exact reason strings consumers show to users,
/// so they are part of the contract and must not drift.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Author name is required.")]
    EmptyName,

    #[error("Phone number must be exactly ten digits.")]
    InvalidPhoneFormat,

    /// Raised at the persistence boundary, never by the field validators.
    #[error("An author with this name already exists.")]
    DuplicateName,

    #[error("Post title is required.")]
    EmptyTitle,

    #[error(
        "Post title should contain at least one clickbait keyword: 'Won't Believe', 'Secret', 'Top', or 'Guess'."
    )]
    NotClickbait,

    #[error("Post content must be at least 250 characters long.")]
    ContentTooShort,

    #[error("Summary must be at most 250 characters long.")]
    SummaryTooLong,

    #[error("Category must be either Fiction or Non-Fiction.")]
    InvalidCategory,
}

/// Repository-level errors.
#[derive(Debug, Error)]
pub enum RepoError {
    #[error("Database connection failed: {0}")]
    Connection(String),

    #[error("Query execution failed: {0}")]
    Query(String),

    #[error("Entity not found")]
    NotFound,

    /// A storage-level constraint rejected the write. Carries the
    /// validation kind so callers can surface it with the same severity
    /// as a field-level rejection.
    #[error("Constraint violation: {0}")]
    Constraint(ValidationError),
}
