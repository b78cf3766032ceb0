//! PostgreSQL implementation of TransactionRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use tally_core::entities::{Transaction, TransactionFilter};
use tally_core::traits::{RepoResult, TransactionRepository};
use tally_core::value_objects::TransactionId;

use crate::models::TransactionModel;

use super::error::{map_db_error, transaction_not_found};

/// PostgreSQL implementation of TransactionRepository
#[derive(Clone)]
pub struct PgTransactionRepository {
    pool: PgPool,
}

impl PgTransactionRepository {
    /// Create a new PgTransactionRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl TransactionRepository for PgTransactionRepository {
    #[instrument(skip(self))]
    async fn find_all(&self, filter: &TransactionFilter) -> RepoResult<Vec<Transaction>> {
        let results = sqlx::query_as::<_, TransactionModel>(
            r"
            SELECT id, description, amount, category, kind, date
            FROM transactions
            WHERE ($1::text IS NULL OR category = $1)
              AND ($2::text IS NULL OR kind = $2)
              AND ($3::date IS NULL OR date >= $3)
              AND ($4::date IS NULL OR date <= $4)
            ORDER BY date DESC, id
            ",
        )
        .bind(filter.category.as_deref())
        .bind(filter.kind.map(|k| k.as_str()))
        .bind(filter.start_date)
        .bind(filter.end_date)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        results.into_iter().map(Transaction::try_from).collect()
    }

    #[instrument(skip(self))]
    async fn find_by_id(&self, id: TransactionId) -> RepoResult<Option<Transaction>> {
        let result = sqlx::query_as::<_, TransactionModel>(
            r"
            SELECT id, description, amount, category, kind, date
            FROM transactions
            WHERE id = $1
            ",
        )
        .bind(id.into_inner())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        result.map(Transaction::try_from).transpose()
    }

    #[instrument(skip(self, tx), fields(transaction_id = %tx.id))]
    async fn create(&self, tx: &Transaction) -> RepoResult<()> {
        sqlx::query(
            r"
            INSERT INTO transactions (id, description, amount, category, kind, date)
            VALUES ($1, $2, $3, $4, $5, $6)
            ",
        )
        .bind(tx.id.into_inner())
        .bind(&tx.description)
        .bind(tx.amount)
        .bind(&tx.category)
        .bind(tx.kind.as_str())
        .bind(tx.date)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(())
    }

    #[instrument(skip(self, tx), fields(transaction_id = %tx.id))]
    async fn update(&self, tx: &Transaction) -> RepoResult<()> {
        let result = sqlx::query(
            r"
            UPDATE transactions
            SET description = $2, amount = $3, category = $4
            WHERE id = $1
            ",
        )
        .bind(tx.id.into_inner())
        .bind(&tx.description)
        .bind(tx.amount)
        .bind(&tx.category)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(transaction_not_found(tx.id));
        }

        Ok(())
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: TransactionId) -> RepoResult<()> {
        let result = sqlx::query("DELETE FROM transactions WHERE id = $1")
            .bind(id.into_inner())
            .execute(&self.pool)
            .await
            .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(transaction_not_found(id));
        }

        Ok(())
    }
}
