//! PostgreSQL implementation of AuthorRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use tally_core::entities::Author;
use tally_core::traits::{AuthorRepository, RepoResult};

use super::error::map_db_error;

/// PostgreSQL implementation of AuthorRepository
#[derive(Clone)]
pub struct PgAuthorRepository {
    pool: PgPool,
}

impl PgAuthorRepository {
    /// Create a new PgAuthorRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl AuthorRepository for PgAuthorRepository {
    #[instrument(skip(self, author), fields(author_id = %author.id))]
    async fn upsert(&self, author: &Author) -> RepoResult<()> {
        sqlx::query(
            r"
            INSERT INTO authors (id, username, email, updated_at)
            VALUES ($1, $2, $3, $4)
            ON CONFLICT (id) DO UPDATE
            SET username = EXCLUDED.username,
                email = EXCLUDED.email,
                updated_at = EXCLUDED.updated_at
            ",
        )
        .bind(author.id.into_inner())
        .bind(&author.username)
        .bind(&author.email)
        .bind(author.updated_at)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(())
    }
}
