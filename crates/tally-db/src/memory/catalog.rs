//! In-memory author and category repositories

use std::sync::Arc;

use async_trait::async_trait;
use tracing::instrument;

use tally_core::entities::{Author, Category};
use tally_core::traits::{AuthorRepository, CategoryRepository, RepoResult};
use tally_core::value_objects::CategoryId;

use super::MemoryStore;

/// In-memory implementation of AuthorRepository
#[derive(Debug, Clone)]
pub struct MemoryAuthorRepository {
    store: Arc<MemoryStore>,
}

impl MemoryAuthorRepository {
    pub fn new(store: Arc<MemoryStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl AuthorRepository for MemoryAuthorRepository {
    #[instrument(skip(self, author), fields(author_id = %author.id))]
    async fn upsert(&self, author: &Author) -> RepoResult<()> {
        self.store.authors.insert(author.id, author.clone());
        Ok(())
    }
}

/// In-memory implementation of CategoryRepository
#[derive(Debug, Clone)]
pub struct MemoryCategoryRepository {
    store: Arc<MemoryStore>,
}

impl MemoryCategoryRepository {
    pub fn new(store: Arc<MemoryStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl CategoryRepository for MemoryCategoryRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: CategoryId) -> RepoResult<Option<Category>> {
        Ok(self.store.categories.get(&id).map(|c| c.clone()))
    }

    #[instrument(skip(self))]
    async fn list(&self) -> RepoResult<Vec<Category>> {
        let mut categories: Vec<Category> =
            self.store.categories.iter().map(|c| c.clone()).collect();
        categories.sort_by(|a, b| a.name.cmp(&b.name).then(a.created_at.cmp(&b.created_at)));
        Ok(categories)
    }

    #[instrument(skip(self, category), fields(category_id = %category.id))]
    async fn create(&self, category: &Category) -> RepoResult<()> {
        self.store.categories.insert(category.id, category.clone());
        Ok(())
    }
}
