//! Repository traits (ports) - define the interface for data access
//!
//! The domain layer defines what it needs, and the infrastructure layer
//! provides the implementation (PostgreSQL or in-memory).

use async_trait::async_trait;

use crate::entities::{
    Author, Category, Post, PostDetails, Transaction, TransactionFilter,
};
use crate::error::DomainError;
use crate::value_objects::{CategoryId, PostId, TransactionId};

/// Result type for repository operations
pub type RepoResult<T> = Result<T, DomainError>;

// ============================================================================
// Post Repository
// ============================================================================

#[async_trait]
pub trait PostRepository: Send + Sync {
    /// Find post by ID
    async fn find_by_id(&self, id: PostId) -> RepoResult<Option<Post>>;

    /// Find post by ID with author and category resolved
    async fn find_details(&self, id: PostId) -> RepoResult<Option<PostDetails>>;

    /// List posts newest first, optionally capped at `limit`
    async fn list_details(&self, limit: Option<i64>) -> RepoResult<Vec<PostDetails>>;

    /// Insert a new post
    async fn create(&self, post: &Post) -> RepoResult<()>;

    /// Conditionally write a post back
    ///
    /// Succeeds only if the stored version still equals `post.version`, and
    /// returns the new version. A stale version yields
    /// [`DomainError::VersionConflict`]; a vanished post yields
    /// [`DomainError::PostNotFound`].
    async fn save(&self, post: &Post) -> RepoResult<i64>;

    /// Delete a post and its reaction state
    async fn delete(&self, id: PostId) -> RepoResult<()>;
}

// ============================================================================
// Author Repository
// ============================================================================

#[async_trait]
pub trait AuthorRepository: Send + Sync {
    /// Insert or refresh an author profile
    async fn upsert(&self, author: &Author) -> RepoResult<()>;
}

// ============================================================================
// Category Repository
// ============================================================================

#[async_trait]
pub trait CategoryRepository: Send + Sync {
    /// Find category by ID
    async fn find_by_id(&self, id: CategoryId) -> RepoResult<Option<Category>>;

    /// List all categories ordered by name
    async fn list(&self) -> RepoResult<Vec<Category>>;

    /// Create a new category
    async fn create(&self, category: &Category) -> RepoResult<()>;
}

// ============================================================================
// Transaction Repository
// ============================================================================

#[async_trait]
pub trait TransactionRepository: Send + Sync {
    /// List transactions matching `filter`, newest date first
    async fn find_all(&self, filter: &TransactionFilter) -> RepoResult<Vec<Transaction>>;

    /// Find transaction by ID
    async fn find_by_id(&self, id: TransactionId) -> RepoResult<Option<Transaction>>;

    /// Record a new transaction
    async fn create(&self, tx: &Transaction) -> RepoResult<()>;

    /// Overwrite an existing transaction
    async fn update(&self, tx: &Transaction) -> RepoResult<()>;

    /// Delete a transaction
    async fn delete(&self, id: TransactionId) -> RepoResult<()>;
}
