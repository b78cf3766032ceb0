//! In-memory implementation of TransactionRepository

use std::cmp::Reverse;
use std::sync::Arc;

use async_trait::async_trait;
use tracing::instrument;

use tally_core::entities::{Transaction, TransactionFilter};
use tally_core::error::DomainError;
use tally_core::traits::{RepoResult, TransactionRepository};
use tally_core::value_objects::TransactionId;

use super::MemoryStore;

/// In-memory implementation of TransactionRepository
#[derive(Debug, Clone)]
pub struct MemoryTransactionRepository {
    store: Arc<MemoryStore>,
}

impl MemoryTransactionRepository {
    pub fn new(store: Arc<MemoryStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl TransactionRepository for MemoryTransactionRepository {
    #[instrument(skip(self))]
    async fn find_all(&self, filter: &TransactionFilter) -> RepoResult<Vec<Transaction>> {
        let mut results: Vec<Transaction> = self
            .store
            .transactions
            .iter()
            .filter(|tx| filter.matches(tx))
            .map(|tx| tx.clone())
            .collect();
        results.sort_by_key(|tx| (Reverse(tx.date), tx.id));
        Ok(results)
    }

    #[instrument(skip(self))]
    async fn find_by_id(&self, id: TransactionId) -> RepoResult<Option<Transaction>> {
        Ok(self.store.transactions.get(&id).map(|tx| tx.clone()))
    }

    #[instrument(skip(self, tx), fields(transaction_id = %tx.id))]
    async fn create(&self, tx: &Transaction) -> RepoResult<()> {
        self.store.transactions.insert(tx.id, tx.clone());
        Ok(())
    }

    #[instrument(skip(self, tx), fields(transaction_id = %tx.id))]
    async fn update(&self, tx: &Transaction) -> RepoResult<()> {
        let mut entry = self
            .store
            .transactions
            .get_mut(&tx.id)
            .ok_or(DomainError::TransactionNotFound(tx.id))?;
        *entry = tx.clone();
        Ok(())
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: TransactionId) -> RepoResult<()> {
        self.store
            .transactions
            .remove(&id)
            .map(|_| ())
            .ok_or(DomainError::TransactionNotFound(id))
    }
}
