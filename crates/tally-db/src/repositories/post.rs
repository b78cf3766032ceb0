//! PostgreSQL implementation of PostRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::{debug, instrument};

use tally_core::entities::{Post, PostDetails};
use tally_core::error::DomainError;
use tally_core::traits::{PostRepository, RepoResult};
use tally_core::value_objects::PostId;

use crate::mappers::PostWrite;
use crate::models::{PostDetailsModel, PostModel};

use super::error::{map_db_error, map_foreign_key_violation, post_not_found};

const POST_COLUMNS: &str = "p.id, p.title, p.content, p.author_id, p.category_id, p.image, \
     p.likes, p.dislikes, p.claps, p.post_views, p.scheduled_publish, \
     p.created_at, p.updated_at, p.version";

const DETAILS_JOIN: &str = "a.username AS author_username, a.email AS author_email, \
     a.updated_at AS author_updated_at, c.name AS category_name, \
     c.author_id AS category_author_id, c.created_at AS category_created_at \
     FROM posts p \
     LEFT JOIN authors a ON a.id = p.author_id \
     LEFT JOIN categories c ON c.id = p.category_id";

/// PostgreSQL implementation of PostRepository
#[derive(Clone)]
pub struct PgPostRepository {
    pool: PgPool,
}

impl PgPostRepository {
    /// Create a new PgPostRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl PostRepository for PgPostRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: PostId) -> RepoResult<Option<Post>> {
        let sql = format!("SELECT {POST_COLUMNS} FROM posts p WHERE p.id = $1");
        let result = sqlx::query_as::<_, PostModel>(&sql)
            .bind(id.into_inner())
            .fetch_optional(&self.pool)
            .await
            .map_err(map_db_error)?;

        Ok(result.map(Post::from))
    }

    #[instrument(skip(self))]
    async fn find_details(&self, id: PostId) -> RepoResult<Option<PostDetails>> {
        let sql = format!("SELECT {POST_COLUMNS}, {DETAILS_JOIN} WHERE p.id = $1");
        let result = sqlx::query_as::<_, PostDetailsModel>(&sql)
            .bind(id.into_inner())
            .fetch_optional(&self.pool)
            .await
            .map_err(map_db_error)?;

        Ok(result.map(PostDetails::from))
    }

    #[instrument(skip(self))]
    async fn list_details(&self, limit: Option<i64>) -> RepoResult<Vec<PostDetails>> {
        // LIMIT NULL means no limit in PostgreSQL
        let sql = format!(
            "SELECT {POST_COLUMNS}, {DETAILS_JOIN} ORDER BY p.created_at DESC, p.id LIMIT $1"
        );
        let results = sqlx::query_as::<_, PostDetailsModel>(&sql)
            .bind(limit.map(|l| l.max(0)))
            .fetch_all(&self.pool)
            .await
            .map_err(map_db_error)?;

        Ok(results.into_iter().map(PostDetails::from).collect())
    }

    #[instrument(skip(self, post), fields(post_id = %post.id))]
    async fn create(&self, post: &Post) -> RepoResult<()> {
        let row = PostWrite::new(post);

        sqlx::query(
            r"
            INSERT INTO posts (
                id, title, content, author_id, category_id, image,
                likes, dislikes, claps, post_views, scheduled_publish,
                created_at, updated_at, version
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14)
            ",
        )
        .bind(row.id)
        .bind(row.title)
        .bind(row.content)
        .bind(row.author_id)
        .bind(row.category_id)
        .bind(row.image)
        .bind(&row.likes)
        .bind(&row.dislikes)
        .bind(row.claps)
        .bind(&row.post_views)
        .bind(post.scheduled_publish)
        .bind(post.created_at)
        .bind(post.updated_at)
        .bind(post.version)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            map_foreign_key_violation(e, || DomainError::CategoryNotFound(post.category_id))
        })?;

        Ok(())
    }

    #[instrument(skip(self, post), fields(post_id = %post.id, version = post.version))]
    async fn save(&self, post: &Post) -> RepoResult<i64> {
        let row = PostWrite::new(post);

        let new_version: Option<i64> = sqlx::query_scalar(
            r"
            UPDATE posts
            SET title = $3, content = $4, category_id = $5, image = $6,
                likes = $7, dislikes = $8, claps = $9, post_views = $10,
                scheduled_publish = $11, updated_at = $12,
                version = version + 1
            WHERE id = $1 AND version = $2
            RETURNING version
            ",
        )
        .bind(row.id)
        .bind(post.version)
        .bind(row.title)
        .bind(row.content)
        .bind(row.category_id)
        .bind(row.image)
        .bind(&row.likes)
        .bind(&row.dislikes)
        .bind(row.claps)
        .bind(&row.post_views)
        .bind(post.scheduled_publish)
        .bind(post.updated_at)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            map_foreign_key_violation(e, || DomainError::CategoryNotFound(post.category_id))
        })?;

        if let Some(version) = new_version {
            return Ok(version);
        }

        // Nothing matched: either the row is gone or someone else bumped the version
        let exists: bool = sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM posts WHERE id = $1)")
            .bind(row.id)
            .fetch_one(&self.pool)
            .await
            .map_err(map_db_error)?;

        if exists {
            debug!("stale post version");
            Err(DomainError::VersionConflict(post.id))
        } else {
            Err(post_not_found(post.id))
        }
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: PostId) -> RepoResult<()> {
        let result = sqlx::query("DELETE FROM posts WHERE id = $1")
            .bind(id.into_inner())
            .execute(&self.pool)
            .await
            .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(post_not_found(id));
        }

        Ok(())
    }
}
