use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::{Author, Category, Post};
use crate::error::RepoError;

/// Generic repository trait defining standard CRUD operations.
#[async_trait]
pub trait BaseRepository<T, ID>: Send + Sync {
    /// Find an entity by its unique ID.
    async fn find_by_id(&self, id: ID) -> Result<Option<T>, RepoError>;

    /// Save an entity (create or update).
    ///
    /// Storage-level constraints are re-checked here; a violation surfaces
    /// as [`RepoError::Constraint`] carrying the matching validation kind.
    async fn save(&self, entity: T) -> Result<T, RepoError>;

    /// Delete an entity by its ID. Deletion carries no validation.
    async fn delete(&self, id: ID) -> Result<(), RepoError>;
}

/// Author repository with domain-specific methods.
#[async_trait]
pub trait AuthorRepository: BaseRepository<Author, Uuid> {
    /// Find an author by exact, case-sensitive name. Backs the
    /// uniqueness rule on `name`.
    async fn find_by_name(&self, name: &str) -> Result<Option<Author>, RepoError>;
}

/// Post repository.
#[async_trait]
pub trait PostRepository: BaseRepository<Post, Uuid> {
    async fn find_by_category(&self, category: Category) -> Result<Vec<Post>, RepoError>;
}
