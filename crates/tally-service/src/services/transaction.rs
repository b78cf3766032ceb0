//! Transaction service
//!
//! The expense/income ledger and its statistics.

use chrono::Utc;
use tally_core::entities::{Transaction, TransactionChanges, TransactionFilter};
use tally_core::{
    DomainError, ExpenseStats, TransactionId, EXPENSE_CATEGORIES, INCOME_CATEGORIES,
};
use tracing::{info, instrument};

use crate::dto::{
    CreateTransactionRequest, TransactionCategoriesResponse, TransactionResponse,
    UpdateTransactionRequest,
};

use super::context::ServiceContext;
use super::error::ServiceResult;

/// Transaction service
pub struct TransactionService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> TransactionService<'a> {
    /// Create a new TransactionService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Transactions matching `filter`, newest date first
    #[instrument(skip(self))]
    pub async fn list_transactions(
        &self,
        filter: TransactionFilter,
    ) -> ServiceResult<Vec<TransactionResponse>> {
        let transactions = self.ctx.transaction_repo().find_all(&filter).await?;
        Ok(transactions
            .into_iter()
            .map(TransactionResponse::from)
            .collect())
    }

    /// Record a transaction dated today (UTC)
    #[instrument(skip(self))]
    pub async fn create_transaction(
        &self,
        req: CreateTransactionRequest,
    ) -> ServiceResult<TransactionResponse> {
        let tx = Transaction::new(
            TransactionId::generate(),
            req.description,
            req.amount,
            req.category,
            req.kind,
            Utc::now().date_naive(),
        )?;

        self.ctx.transaction_repo().create(&tx).await?;

        info!(
            transaction_id = %tx.id,
            kind = %tx.kind,
            category = %tx.category,
            amount = %tx.amount,
            "Transaction created"
        );

        Ok(tx.into())
    }

    /// Apply a partial update; the type of a transaction never changes
    #[instrument(skip(self))]
    pub async fn update_transaction(
        &self,
        id: TransactionId,
        req: UpdateTransactionRequest,
    ) -> ServiceResult<TransactionResponse> {
        let mut tx = self
            .ctx
            .transaction_repo()
            .find_by_id(id)
            .await?
            .ok_or(DomainError::TransactionNotFound(id))?;

        tx.apply(TransactionChanges::from(req))?;
        self.ctx.transaction_repo().update(&tx).await?;

        info!(transaction_id = %id, "Transaction updated");

        Ok(tx.into())
    }

    /// Delete a transaction
    #[instrument(skip(self))]
    pub async fn delete_transaction(&self, id: TransactionId) -> ServiceResult<()> {
        self.ctx.transaction_repo().delete(id).await?;

        info!(transaction_id = %id, "Transaction deleted");

        Ok(())
    }

    /// The fixed category sets
    pub fn categories(&self) -> TransactionCategoriesResponse {
        TransactionCategoriesResponse {
            expense: EXPENSE_CATEGORIES,
            income: INCOME_CATEGORIES,
        }
    }

    /// Statistics over every stored transaction
    #[instrument(skip(self))]
    pub async fn stats(&self) -> ServiceResult<ExpenseStats> {
        let transactions = self
            .ctx
            .transaction_repo()
            .find_all(&TransactionFilter::default())
            .await?;

        Ok(ExpenseStats::compute(&transactions))
    }
}
