//! In-memory repository implementations - used for tests and DB-less runs.

use std::collections::HashMap;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;
use uuid::Uuid;

use byline_core::domain::{Author, Category, Post};
use byline_core::error::{RepoError, ValidationError};
use byline_core::ports::{AuthorRepository, BaseRepository, PostRepository};
use byline_core::validation::{MAX_SUMMARY_CHARS, MIN_CONTENT_CHARS};

/// In-memory author store using a HashMap with async RwLock.
///
/// Stands in for the database's uniqueness index: a write whose name
/// collides with a different stored author fails with `DuplicateName`.
/// Note: Data is lost on process restart.
pub struct InMemoryAuthorRepository {
    store: RwLock<HashMap<Uuid, Author>>,
}

impl InMemoryAuthorRepository {
    pub fn new() -> Self {
        Self {
            store: RwLock::new(HashMap::new()),
        }
    }
}

impl Default for InMemoryAuthorRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl BaseRepository<Author, Uuid> for InMemoryAuthorRepository {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Author>, RepoError> {
        Ok(self.store.read().await.get(&id).cloned())
    }

    async fn save(&self, mut author: Author) -> Result<Author, RepoError> {
        // Single write lock for the whole check-and-insert, matching the
        // atomicity the database gives the uniqueness index.
        let mut store = self.store.write().await;

        if store
            .values()
            .any(|a| a.name == author.name && a.id != author.id)
        {
            return Err(RepoError::Constraint(ValidationError::DuplicateName));
        }

        if store.contains_key(&author.id) {
            author.updated_at = Utc::now();
        }
        store.insert(author.id, author.clone());
        Ok(author)
    }

    async fn delete(&self, id: Uuid) -> Result<(), RepoError> {
        if self.store.write().await.remove(&id).is_none() {
            return Err(RepoError::NotFound);
        }
        Ok(())
    }
}

#[async_trait]
impl AuthorRepository for InMemoryAuthorRepository {
    async fn find_by_name(&self, name: &str) -> Result<Option<Author>, RepoError> {
        Ok(self
            .store
            .read()
            .await
            .values()
            .find(|a| a.name == name)
            .cloned())
    }
}

/// In-memory post store.
///
/// Re-applies the declarative write-time checks the database schema
/// carries: content length and summary length. The category is already a
/// closed enum here, and the clickbait title policy has no declarative
/// counterpart, so neither is re-checked.
pub struct InMemoryPostRepository {
    store: RwLock<HashMap<Uuid, Post>>,
}

impl InMemoryPostRepository {
    pub fn new() -> Self {
        Self {
            store: RwLock::new(HashMap::new()),
        }
    }
}

impl Default for InMemoryPostRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl BaseRepository<Post, Uuid> for InMemoryPostRepository {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Post>, RepoError> {
        Ok(self.store.read().await.get(&id).cloned())
    }

    async fn save(&self, mut post: Post) -> Result<Post, RepoError> {
        if post.content.chars().count() < MIN_CONTENT_CHARS {
            return Err(RepoError::Constraint(ValidationError::ContentTooShort));
        }
        if let Some(summary) = &post.summary {
            // The schema allows exactly 250; only longer summaries fail here.
            if summary.chars().count() > MAX_SUMMARY_CHARS {
                return Err(RepoError::Constraint(ValidationError::SummaryTooLong));
            }
        }

        let mut store = self.store.write().await;
        if store.contains_key(&post.id) {
            post.updated_at = Utc::now();
        }
        store.insert(post.id, post.clone());
        Ok(post)
    }

    async fn delete(&self, id: Uuid) -> Result<(), RepoError> {
        if self.store.write().await.remove(&id).is_none() {
            return Err(RepoError::NotFound);
        }
        Ok(())
    }
}

#[async_trait]
impl PostRepository for InMemoryPostRepository {
    async fn find_by_category(&self, category: Category) -> Result<Vec<Post>, RepoError> {
        Ok(self
            .store
            .read()
            .await
            .values()
            .filter(|p| p.category == category)
            .cloned()
            .collect())
    }
}
