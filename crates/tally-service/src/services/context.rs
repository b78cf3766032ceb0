//! Service context - dependency container for services
//!
//! Holds the repositories, the JWT service and the post write settings, plus
//! the PostgreSQL pool when that backend is in use.

use std::sync::Arc;

use tally_common::auth::JwtService;
use tally_common::PostConfig;
use tally_core::traits::{
    AuthorRepository, CategoryRepository, PostRepository, TransactionRepository,
};
use tally_db::{
    MemoryAuthorRepository, MemoryCategoryRepository, MemoryPostRepository, MemoryStore,
    MemoryTransactionRepository, PgAuthorRepository, PgCategoryRepository, PgPool,
    PgPostRepository, PgTransactionRepository,
};

use super::error::{ServiceError, ServiceResult};

/// Service context containing all dependencies
///
/// Repositories are trait objects so the same services run over either the
/// PostgreSQL or the in-memory backend.
#[derive(Clone)]
pub struct ServiceContext {
    // Database pool, absent for the in-memory backend
    pool: Option<PgPool>,

    // Repositories
    post_repo: Arc<dyn PostRepository>,
    author_repo: Arc<dyn AuthorRepository>,
    category_repo: Arc<dyn CategoryRepository>,
    transaction_repo: Arc<dyn TransactionRepository>,

    // Services
    jwt_service: Arc<JwtService>,

    // Settings
    post_config: PostConfig,
}

impl ServiceContext {
    /// Create a new service context with all dependencies
    pub fn new(
        pool: Option<PgPool>,
        post_repo: Arc<dyn PostRepository>,
        author_repo: Arc<dyn AuthorRepository>,
        category_repo: Arc<dyn CategoryRepository>,
        transaction_repo: Arc<dyn TransactionRepository>,
        jwt_service: Arc<JwtService>,
        post_config: PostConfig,
    ) -> Self {
        Self {
            pool,
            post_repo,
            author_repo,
            category_repo,
            transaction_repo,
            jwt_service,
            post_config,
        }
    }

    // === Database Pool ===

    /// Get the PostgreSQL connection pool, if the backend is PostgreSQL
    pub fn pool(&self) -> Option<&PgPool> {
        self.pool.as_ref()
    }

    // === Repositories ===

    /// Get the post repository
    pub fn post_repo(&self) -> &dyn PostRepository {
        self.post_repo.as_ref()
    }

    /// Get the author repository
    pub fn author_repo(&self) -> &dyn AuthorRepository {
        self.author_repo.as_ref()
    }

    /// Get the category repository
    pub fn category_repo(&self) -> &dyn CategoryRepository {
        self.category_repo.as_ref()
    }

    /// Get the transaction repository
    pub fn transaction_repo(&self) -> &dyn TransactionRepository {
        self.transaction_repo.as_ref()
    }

    // === Services ===

    /// Get the JWT service
    pub fn jwt_service(&self) -> &JwtService {
        self.jwt_service.as_ref()
    }

    // === Settings ===

    /// Post write settings
    pub fn post_config(&self) -> &PostConfig {
        &self.post_config
    }
}

impl std::fmt::Debug for ServiceContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceContext")
            .field("pool", &self.pool.as_ref().map(|_| "PgPool"))
            .field("repositories", &"...")
            .field("post_config", &self.post_config)
            .finish_non_exhaustive()
    }
}

/// Builder for creating ServiceContext with custom configuration
#[derive(Default)]
pub struct ServiceContextBuilder {
    pool: Option<PgPool>,
    post_repo: Option<Arc<dyn PostRepository>>,
    author_repo: Option<Arc<dyn AuthorRepository>>,
    category_repo: Option<Arc<dyn CategoryRepository>>,
    transaction_repo: Option<Arc<dyn TransactionRepository>>,
    jwt_service: Option<Arc<JwtService>>,
    post_config: Option<PostConfig>,
}

impl ServiceContextBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn pool(mut self, pool: PgPool) -> Self {
        self.pool = Some(pool);
        self
    }

    pub fn post_repo(mut self, repo: Arc<dyn PostRepository>) -> Self {
        self.post_repo = Some(repo);
        self
    }

    pub fn author_repo(mut self, repo: Arc<dyn AuthorRepository>) -> Self {
        self.author_repo = Some(repo);
        self
    }

    pub fn category_repo(mut self, repo: Arc<dyn CategoryRepository>) -> Self {
        self.category_repo = Some(repo);
        self
    }

    pub fn transaction_repo(mut self, repo: Arc<dyn TransactionRepository>) -> Self {
        self.transaction_repo = Some(repo);
        self
    }

    /// Wire every repository to one shared in-memory store
    pub fn memory_repos(self, store: &Arc<MemoryStore>) -> Self {
        self.post_repo(Arc::new(MemoryPostRepository::new(store.clone())))
            .author_repo(Arc::new(MemoryAuthorRepository::new(store.clone())))
            .category_repo(Arc::new(MemoryCategoryRepository::new(store.clone())))
            .transaction_repo(Arc::new(MemoryTransactionRepository::new(store.clone())))
    }

    /// Wire every repository to a PostgreSQL pool
    pub fn postgres_repos(self, pool: &PgPool) -> Self {
        self.pool(pool.clone())
            .post_repo(Arc::new(PgPostRepository::new(pool.clone())))
            .author_repo(Arc::new(PgAuthorRepository::new(pool.clone())))
            .category_repo(Arc::new(PgCategoryRepository::new(pool.clone())))
            .transaction_repo(Arc::new(PgTransactionRepository::new(pool.clone())))
    }

    pub fn jwt_service(mut self, service: Arc<JwtService>) -> Self {
        self.jwt_service = Some(service);
        self
    }

    pub fn post_config(mut self, config: PostConfig) -> Self {
        self.post_config = Some(config);
        self
    }

    /// Build the ServiceContext
    ///
    /// `pool` is optional and `post_config` falls back to its defaults;
    /// everything else is required.
    ///
    /// # Errors
    /// Returns `ServiceError::Validation` if any required dependency is missing
    pub fn build(self) -> ServiceResult<ServiceContext> {
        Ok(ServiceContext::new(
            self.pool,
            self.post_repo
                .ok_or_else(|| ServiceError::validation("post_repo is required"))?,
            self.author_repo
                .ok_or_else(|| ServiceError::validation("author_repo is required"))?,
            self.category_repo
                .ok_or_else(|| ServiceError::validation("category_repo is required"))?,
            self.transaction_repo
                .ok_or_else(|| ServiceError::validation("transaction_repo is required"))?,
            self.jwt_service
                .ok_or_else(|| ServiceError::validation("jwt_service is required"))?,
            self.post_config.unwrap_or_default(),
        ))
    }
}
