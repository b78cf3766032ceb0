//! In-memory implementation of PostRepository

use std::cmp::Reverse;
use std::sync::Arc;

use async_trait::async_trait;
use tracing::instrument;

use tally_core::entities::{Post, PostDetails};
use tally_core::error::DomainError;
use tally_core::traits::{PostRepository, RepoResult};
use tally_core::value_objects::PostId;

use super::MemoryStore;

/// In-memory implementation of PostRepository
#[derive(Debug, Clone)]
pub struct MemoryPostRepository {
    store: Arc<MemoryStore>,
}

impl MemoryPostRepository {
    pub fn new(store: Arc<MemoryStore>) -> Self {
        Self { store }
    }

    fn details(&self, post: Post) -> PostDetails {
        let author = self.store.authors.get(&post.author_id).map(|a| a.clone());
        let category = self.store.categories.get(&post.category_id).map(|c| c.clone());
        PostDetails {
            post,
            author,
            category,
        }
    }
}

#[async_trait]
impl PostRepository for MemoryPostRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: PostId) -> RepoResult<Option<Post>> {
        Ok(self.store.posts.get(&id).map(|p| p.clone()))
    }

    #[instrument(skip(self))]
    async fn find_details(&self, id: PostId) -> RepoResult<Option<PostDetails>> {
        // clone out before touching the other tables so no shard lock is held across lookups
        let post = self.store.posts.get(&id).map(|p| p.clone());
        Ok(post.map(|p| self.details(p)))
    }

    #[instrument(skip(self))]
    async fn list_details(&self, limit: Option<i64>) -> RepoResult<Vec<PostDetails>> {
        let mut posts: Vec<Post> = self.store.posts.iter().map(|p| p.clone()).collect();
        posts.sort_by_key(|p| (Reverse(p.created_at), p.id));

        if let Some(limit) = limit {
            posts.truncate(usize::try_from(limit.max(0)).unwrap_or(usize::MAX));
        }

        Ok(posts.into_iter().map(|p| self.details(p)).collect())
    }

    #[instrument(skip(self, post), fields(post_id = %post.id))]
    async fn create(&self, post: &Post) -> RepoResult<()> {
        if !self.store.categories.contains_key(&post.category_id) {
            return Err(DomainError::CategoryNotFound(post.category_id));
        }
        self.store.posts.insert(post.id, post.clone());
        Ok(())
    }

    #[instrument(skip(self, post), fields(post_id = %post.id, version = post.version))]
    async fn save(&self, post: &Post) -> RepoResult<i64> {
        let mut entry = self
            .store
            .posts
            .get_mut(&post.id)
            .ok_or(DomainError::PostNotFound(post.id))?;

        if entry.version != post.version {
            return Err(DomainError::VersionConflict(post.id));
        }

        let mut next = post.clone();
        next.version += 1;
        let version = next.version;
        *entry = next;

        Ok(version)
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: PostId) -> RepoResult<()> {
        self.store
            .posts
            .remove(&id)
            .map(|_| ())
            .ok_or(DomainError::PostNotFound(id))
    }
}
