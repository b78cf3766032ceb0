//! Transaction entity <-> model mapper

use tally_core::entities::{Transaction, TransactionKind};
use tally_core::error::DomainError;
use tally_core::value_objects::TransactionId;

use crate::models::TransactionModel;

/// Rows are trusted to satisfy the table's CHECK constraints, so only the
/// kind column needs parsing.
impl TryFrom<TransactionModel> for Transaction {
    type Error = DomainError;

    fn try_from(model: TransactionModel) -> Result<Self, Self::Error> {
        let kind: TransactionKind = model.kind.parse().map_err(|_| {
            DomainError::DatabaseError(format!("unknown transaction kind '{}'", model.kind))
        })?;

        Ok(Transaction {
            id: TransactionId::from_uuid(model.id),
            description: model.description,
            amount: model.amount,
            category: model.category,
            kind,
            date: model.date,
        })
    }
}
