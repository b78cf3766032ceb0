//! Ledger handlers
//!
//! Transactions and their statistics. These endpoints take no principal.

use axum::{extract::State, Json};
use tally_core::{ExpenseStats, TransactionId};
use tally_service::{
    CreateTransactionRequest, TransactionCategoriesResponse, TransactionResponse,
    TransactionService, UpdateTransactionRequest,
};

use crate::extractors::{IdPath, LedgerFilter, ValidatedJson};
use crate::response::{ApiResult, Created, NoContent};
use crate::state::AppState;

/// List transactions
///
/// GET /expenses?category=&type=&startDate=&endDate=
pub async fn list_transactions(
    State(state): State<AppState>,
    LedgerFilter(filter): LedgerFilter,
) -> ApiResult<Json<Vec<TransactionResponse>>> {
    let service = TransactionService::new(state.service_context());
    let transactions = service.list_transactions(filter).await?;
    Ok(Json(transactions))
}

/// Create transaction
///
/// POST /expenses
pub async fn create_transaction(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<CreateTransactionRequest>,
) -> ApiResult<Created<Json<TransactionResponse>>> {
    let service = TransactionService::new(state.service_context());
    let transaction = service.create_transaction(request).await?;
    Ok(Created(Json(transaction)))
}

/// Update transaction
///
/// PUT /expenses/{id}
pub async fn update_transaction(
    State(state): State<AppState>,
    IdPath(id): IdPath<TransactionId>,
    ValidatedJson(request): ValidatedJson<UpdateTransactionRequest>,
) -> ApiResult<Json<TransactionResponse>> {
    let service = TransactionService::new(state.service_context());
    let transaction = service.update_transaction(id, request).await?;
    Ok(Json(transaction))
}

/// Delete transaction
///
/// DELETE /expenses/{id}
pub async fn delete_transaction(
    State(state): State<AppState>,
    IdPath(id): IdPath<TransactionId>,
) -> ApiResult<NoContent> {
    let service = TransactionService::new(state.service_context());
    service.delete_transaction(id).await?;
    Ok(NoContent)
}

/// Fixed category sets
///
/// GET /expenses/categories
pub async fn transaction_categories(
    State(state): State<AppState>,
) -> Json<TransactionCategoriesResponse> {
    Json(TransactionService::new(state.service_context()).categories())
}

/// Ledger statistics
///
/// GET /stats
pub async fn stats(State(state): State<AppState>) -> ApiResult<Json<ExpenseStats>> {
    let service = TransactionService::new(state.service_context());
    Ok(Json(service.stats().await?))
}
