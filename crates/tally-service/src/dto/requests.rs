//! Request DTOs for API endpoints
//!
//! All request DTOs implement `Deserialize`; bodies also implement `Validate`.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::Deserialize;
use validator::Validate;

use tally_core::{CategoryId, TransactionChanges, TransactionFilter, TransactionKind};

// ============================================================================
// Post Requests
// ============================================================================

/// Create post request
///
/// `category` carries the id of an existing blog category.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreatePostRequest {
    #[validate(length(min = 1, max = 300, message = "Title must be 1-300 characters"))]
    pub title: String,

    #[validate(length(min = 1, message = "Content is required"))]
    pub content: String,

    pub category: CategoryId,

    /// Image URL or path supplied by the client
    #[validate(length(max = 2048, message = "Image reference must be at most 2048 characters"))]
    pub image: Option<String>,
}

/// Update post request
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdatePostRequest {
    #[validate(length(min = 1, max = 300, message = "Title must be 1-300 characters"))]
    pub title: Option<String>,

    #[validate(length(min = 1, message = "Content cannot be empty"))]
    pub content: Option<String>,

    pub category: Option<CategoryId>,

    #[validate(length(max = 2048, message = "Image reference must be at most 2048 characters"))]
    pub image: Option<String>,
}

/// Schedule post request
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct SchedulePostRequest {
    pub scheduled_publish: DateTime<Utc>,
}

// ============================================================================
// Category Requests
// ============================================================================

/// Create blog category request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateCategoryRequest {
    #[validate(length(min = 1, max = 100, message = "Category name must be 1-100 characters"))]
    pub name: String,
}

// ============================================================================
// Transaction Requests
// ============================================================================

/// Create transaction request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateTransactionRequest {
    #[validate(length(min = 1, max = 200, message = "Description must be 1-200 characters"))]
    pub description: String,

    pub amount: Decimal,

    #[validate(length(min = 1, message = "Category is required"))]
    pub category: String,

    #[serde(rename = "type")]
    pub kind: TransactionKind,
}

/// Update transaction request
///
/// The transaction type is fixed at creation; a `type` field in the body is ignored.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateTransactionRequest {
    #[validate(length(min = 1, max = 200, message = "Description must be 1-200 characters"))]
    pub description: Option<String>,

    pub amount: Option<Decimal>,

    pub category: Option<String>,
}

impl From<UpdateTransactionRequest> for TransactionChanges {
    fn from(req: UpdateTransactionRequest) -> Self {
        Self {
            description: req.description,
            amount: req.amount,
            category: req.category,
        }
    }
}

/// Query parameters for listing transactions
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionQuery {
    pub category: Option<String>,

    #[serde(rename = "type")]
    pub kind: Option<TransactionKind>,

    /// Inclusive lower bound
    pub start_date: Option<NaiveDate>,

    /// Inclusive upper bound
    pub end_date: Option<NaiveDate>,
}

impl From<TransactionQuery> for TransactionFilter {
    fn from(query: TransactionQuery) -> Self {
        Self {
            category: query.category.filter(|c| !c.is_empty()),
            kind: query.kind,
            start_date: query.start_date,
            end_date: query.end_date,
        }
    }
}
