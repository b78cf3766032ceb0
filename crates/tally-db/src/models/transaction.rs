//! Transaction database model

use chrono::NaiveDate;
use rust_decimal::Decimal;
use sqlx::FromRow;
use uuid::Uuid;

/// Database model for transactions table
#[derive(Debug, Clone, FromRow)]
pub struct TransactionModel {
    pub id: Uuid,
    pub description: String,
    pub amount: Decimal,
    pub category: String,
    pub kind: String,
    pub date: NaiveDate,
}
